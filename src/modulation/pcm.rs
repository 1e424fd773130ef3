use tracing::debug;

use crate::error::{Error, Result};
use crate::signal::BitString;
use crate::utils::consts::PCM_MAX_BITS;

/// Pulse-code modulation: quantize samples to fixed-depth codes, MSB first.
///
/// The quantizer spans the observed sample range exactly:
/// `step = (max - min) / 2^bits`, and a sample equal to `max` clamps to the
/// top level. A flat signal (`max == min`) quantizes every sample to level
/// zero, so the output is all-zero bits.
pub fn pcm_encode(samples: &[f64], bits: u32) -> Result<BitString> {
    if samples.is_empty() {
        return Err(Error::EmptySamples);
    }
    if bits < 1 || bits > PCM_MAX_BITS {
        return Err(Error::InvalidBitDepth(bits));
    }

    let mut min = samples[0];
    let mut max = samples[0];
    for &sample in &samples[1..] {
        if sample > max {
            max = sample;
        }
        if sample < min {
            min = sample;
        }
    }

    let levels = 1u64 << bits;
    let step = (max - min) / levels as f64;

    let mut out = Vec::with_capacity(samples.len() * bits as usize);
    for &sample in samples {
        let code = if step == 0.0 {
            0
        } else {
            (((sample - min) / step) as u64).min(levels - 1)
        };
        for j in (0..bits).rev() {
            out.push(((code >> j) & 1) as u8);
        }
    }

    debug!(
        "PCM: {} samples x {} bits over range {}..{} -> {} bits",
        samples.len(),
        bits,
        min,
        max,
        out.len()
    );

    BitString::from_bits(out)
}
