//! Error taxonomy for the encoding pipeline.

use crate::phy::LineCodeKind;

/// Failures surfaced by quantization, encoding and scrambling.
///
/// Every failure is local to a single call: no partial output is produced
/// and the core never retries or falls back to a different scheme.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("bit string is empty")]
    EmptyBits,

    #[error("bit string contains a non-binary symbol: {0:?}")]
    NonBinarySymbol(char),

    #[error("bit value out of range: {0} (expected 0 or 1)")]
    InvalidBit(u8),

    #[error("sample sequence is empty")]
    EmptySamples,

    #[error("invalid PCM bit depth: {0} (expected 1..=32)")]
    InvalidBitDepth(u32),

    #[error("voltage level out of range: {0} (expected -1, 0 or +1)")]
    InvalidLevel(i8),

    #[error("scrambling requires an AMI signal, got {}", found.name())]
    ScrambleRequiresAmi { found: LineCodeKind },

    #[error("unknown scheme selector: {0:?}")]
    UnknownScheme(String),
}

/// Standard result using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
