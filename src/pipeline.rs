// One-shot pipeline runs: quantize -> encode -> scramble -> analyze.

use serde::Serialize;
use tracing::{debug, info};

use crate::analysis::{self, Palindrome, ZeroRun};
use crate::error::Result;
use crate::modulation::{self, Quantization};
use crate::phy::{self, LineCodeKind, ScrambleKind};
use crate::signal::BitString;

/// Snapshot of one pipeline run, handed to the presentation layer.
///
/// Owns everything the caller needs to display the result; nothing in it
/// refers back to pipeline state, so runs never share mutable data.
#[derive(Debug, Clone, Serialize)]
pub struct SignalReport {
    pub title: String,
    pub bits: String,
    pub line_code: LineCodeKind,
    pub scrambling: Option<ScrambleKind>,
    pub levels: Vec<i8>,
    pub palindrome: Palindrome,
    pub zero_run: Option<ZeroRun>,
}

/// Run the digital pipeline over an already-quantized bit string.
///
/// The palindrome statistic is computed on the input bits; the zero-run
/// statistic is computed on the final signal only when scrambling was
/// applied.
pub fn run(
    bits: &BitString,
    line_code: LineCodeKind,
    scrambling: Option<ScrambleKind>,
) -> Result<SignalReport> {
    info!(
        "pipeline: {} bits, {}{}",
        bits.len(),
        line_code.name(),
        match scrambling {
            Some(kind) => format!(" + {}", kind.name()),
            None => String::new(),
        }
    );

    let palindrome = analysis::longest_palindrome(bits);
    debug!(
        "longest palindrome: {} (length {})",
        palindrome.text, palindrome.len
    );

    let mut signal = phy::encode(bits, line_code);

    let mut title = format!("{} Encoding", line_code.name());
    let mut zero_run = None;
    if let Some(kind) = scrambling {
        phy::scramble(&mut signal, kind)?;
        title = format!("{} with {}", line_code.name(), kind.name());
        zero_run = analysis::longest_zero_run(&signal);
    }

    Ok(SignalReport {
        title,
        bits: bits.to_string(),
        line_code,
        scrambling,
        levels: signal.into_levels(),
        palindrome,
        zero_run,
    })
}

/// Run the full pipeline starting from analog samples.
pub fn run_analog(
    samples: &[f64],
    scheme: Quantization,
    line_code: LineCodeKind,
    scrambling: Option<ScrambleKind>,
) -> Result<SignalReport> {
    let bits = modulation::quantize(samples, scheme)?;
    info!(
        "{}: digitized {} samples into {} bits",
        scheme.name(),
        samples.len(),
        bits.len()
    );
    run(&bits, line_code, scrambling)
}
