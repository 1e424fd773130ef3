use tracing::debug;

use crate::error::{Error, Result};
use crate::signal::BitString;
use crate::utils::consts::DELTA_STEP;

/// Delta modulation: one bit per sample against a running prediction.
///
/// The prediction starts at zero. A sample above the prediction emits 1 and
/// raises it by the step; anything else emits 0 and lowers it.
pub fn delta_modulate(samples: &[f64]) -> Result<BitString> {
    if samples.is_empty() {
        return Err(Error::EmptySamples);
    }

    let mut prediction = 0.0;
    let mut out = Vec::with_capacity(samples.len());
    for &sample in samples {
        if sample > prediction {
            out.push(1);
            prediction += DELTA_STEP;
        } else {
            out.push(0);
            prediction -= DELTA_STEP;
        }
    }

    debug!("DM: {} samples -> {} bits", samples.len(), out.len());

    BitString::from_bits(out)
}
