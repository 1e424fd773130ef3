// Analog front end: digitizing sample sequences into bit strings.

pub mod delta;
pub mod pcm;

pub use delta::delta_modulate;
pub use pcm::pcm_encode;

use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::signal::BitString;

/// Quantization schemes turning analog samples into a bit string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Quantization {
    /// Pulse-code modulation at the given bit depth per sample.
    Pcm { bits: u32 },
    /// One-bit delta modulation with a fixed step size.
    Delta,
}

impl Quantization {
    pub fn name(&self) -> &'static str {
        match self {
            Quantization::Pcm { .. } => "PCM",
            Quantization::Delta => "DM",
        }
    }
}

impl fmt::Display for Quantization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Digitize analog samples under the selected scheme.
pub fn quantize(samples: &[f64], scheme: Quantization) -> Result<BitString> {
    match scheme {
        Quantization::Pcm { bits } => pcm::pcm_encode(samples, bits),
        Quantization::Delta => delta::delta_modulate(samples),
    }
}
