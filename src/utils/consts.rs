/// Default log level (overridable via RUST_LOG)
pub const LOG_LEVEL: &str = "info";

// ============================================================================
// Quantizer Parameters
// ============================================================================

/// Delta-modulation step size
pub const DELTA_STEP: f64 = 0.5;

/// Highest accepted PCM bit depth
pub const PCM_MAX_BITS: u32 = 32;

/// PCM bit depth used when the batch front end is given none
pub const DEFAULT_PCM_BITS: u32 = 8;

// ============================================================================
// Waveform Plot
// ============================================================================

/// Terminal columns drawn per voltage symbol
pub const PLOT_SYMBOL_WIDTH: usize = 3;

/// Symbols per plot row before wrapping
pub const PLOT_WRAP: usize = 24;

/// Ruler tick spacing, in symbols
pub const PLOT_TICK_STEP: usize = 4;
