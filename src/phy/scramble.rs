// Zero-suppression scrambling for AMI signals.
//
// Both schemes rewrite a bounded window in place and never change the
// sequence length. Substitutions net to zero additional charge, so the
// DC balance of the AMI signal is preserved.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::phy::LineCodeKind;
use crate::signal::VoltageSequence;

/// B8ZS substitution window: eight consecutive zeros.
const B8ZS_WINDOW: usize = 8;
/// HDB3 substitution window: four consecutive zeros.
const HDB3_WINDOW: usize = 4;

/// Zero-suppression substitution schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScrambleKind {
    B8zs,
    Hdb3,
}

impl ScrambleKind {
    pub const ALL: [ScrambleKind; 2] = [ScrambleKind::B8zs, ScrambleKind::Hdb3];

    pub fn name(&self) -> &'static str {
        match self {
            ScrambleKind::B8zs => "B8ZS",
            ScrambleKind::Hdb3 => "HDB3",
        }
    }
}

impl fmt::Display for ScrambleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScrambleKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "b8zs" => Ok(ScrambleKind::B8zs),
            "hdb3" => Ok(ScrambleKind::Hdb3),
            other => Err(Error::UnknownScheme(other.to_string())),
        }
    }
}

/// Rewrite long zero runs of an AMI signal in place.
///
/// Defined only for AMI-derived sequences; anything else is rejected
/// before any symbol is touched. Input shorter than the substitution
/// window passes through unchanged.
pub fn scramble(signal: &mut VoltageSequence, kind: ScrambleKind) -> Result<()> {
    if signal.source() != LineCodeKind::Ami {
        return Err(Error::ScrambleRequiresAmi {
            found: signal.source(),
        });
    }

    match kind {
        ScrambleKind::B8zs => b8zs(signal.levels_mut()),
        ScrambleKind::Hdb3 => hdb3(signal.levels_mut()),
    }

    Ok(())
}

/// B8ZS: each run of eight zeros becomes `000+-0+-` (relative to the last
/// mark polarity). The two same-sign pairs are the detectable bipolar
/// violation. The cursor resumes after a substituted window, so rewritten
/// pulses are never re-scanned.
fn b8zs(signal: &mut [i8]) {
    let mut last_polarity: i8 = 1;
    let mut substitutions = 0usize;
    let mut cursor = 0;

    while cursor + B8ZS_WINDOW <= signal.len() {
        if signal[cursor] != 0 {
            last_polarity = signal[cursor];
            cursor += 1;
            continue;
        }
        if signal[cursor..cursor + B8ZS_WINDOW].iter().any(|&s| s != 0) {
            cursor += 1;
            continue;
        }

        signal[cursor + 3] = last_polarity;
        signal[cursor + 4] = -last_polarity;
        signal[cursor + 6] = last_polarity;
        signal[cursor + 7] = -last_polarity;
        last_polarity = -last_polarity;
        substitutions += 1;
        cursor += B8ZS_WINDOW;
    }

    debug!("B8ZS pass complete: {} substitution(s)", substitutions);
}

/// HDB3: each run of four zeros becomes `000V`, or `B00V` when the number
/// of marks seen since the last substitution is even. The violation pulse
/// carries `last_polarity`; the balancing pulse carries its opposite.
fn hdb3(signal: &mut [i8]) {
    let mut last_polarity: i8 = 1;
    let mut ones_count: usize = 0;
    let mut substitutions = 0usize;
    let mut cursor = 0;

    while cursor + HDB3_WINDOW <= signal.len() {
        if signal[cursor] != 0 {
            last_polarity = signal[cursor];
            ones_count += 1;
            cursor += 1;
            continue;
        }
        if signal[cursor..cursor + HDB3_WINDOW].iter().any(|&s| s != 0) {
            cursor += 1;
            continue;
        }

        if ones_count % 2 == 0 {
            signal[cursor] = -last_polarity;
        }
        signal[cursor + 3] = last_polarity;
        last_polarity = -last_polarity;
        ones_count = 1;
        substitutions += 1;
        cursor += HDB3_WINDOW;
    }

    debug!("HDB3 pass complete: {} substitution(s)", substitutions);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::longest_zero_run;
    use crate::phy::{LineCodeKind, encode};
    use crate::signal::BitString;
    use rand::Rng;

    fn ami_signal(levels: Vec<i8>) -> VoltageSequence {
        VoltageSequence::from_levels(levels, LineCodeKind::Ami).unwrap()
    }

    #[test]
    fn test_b8zs_worked_example() {
        // run of eight zeros at index 1, last seen polarity +1
        let mut signal = ami_signal(vec![1, 0, 0, 0, 0, 0, 0, 0, 0]);
        scramble(&mut signal, ScrambleKind::B8zs).unwrap();
        assert_eq!(signal.levels(), &[1, 0, 0, 0, 1, -1, 0, 1, -1]);
    }

    #[test]
    fn test_b8zs_flips_polarity_between_substitutions() {
        let mut signal = ami_signal(vec![0; 16]);
        scramble(&mut signal, ScrambleKind::B8zs).unwrap();
        assert_eq!(
            signal.levels(),
            &[0, 0, 0, 1, -1, 0, 1, -1, 0, 0, 0, -1, 1, 0, -1, 1]
        );
    }

    #[test]
    fn test_b8zs_leaves_shorter_runs_alone() {
        let levels = vec![1, 0, 0, 0, 0, 0, 0, 0, -1];
        let mut signal = ami_signal(levels.clone());
        scramble(&mut signal, ScrambleKind::B8zs).unwrap();
        assert_eq!(signal.levels(), levels.as_slice());
    }

    #[test]
    fn test_b8zs_short_input_is_a_noop() {
        let mut signal = ami_signal(vec![0; 7]);
        scramble(&mut signal, ScrambleKind::B8zs).unwrap();
        assert_eq!(signal.levels(), &[0; 7]);
    }

    #[test]
    fn test_hdb3_even_parity_inserts_leading_violation() {
        // no marks seen yet, so the parity counter is even
        let mut signal = ami_signal(vec![0, 0, 0, 0]);
        scramble(&mut signal, ScrambleKind::Hdb3).unwrap();
        assert_eq!(signal.levels(), &[-1, 0, 0, 1]);
    }

    #[test]
    fn test_hdb3_odd_parity_keeps_run_start() {
        let mut signal = ami_signal(vec![1, 0, 0, 0, 0]);
        scramble(&mut signal, ScrambleKind::Hdb3).unwrap();
        assert_eq!(signal.levels(), &[1, 0, 0, 0, 1]);
    }

    #[test]
    fn test_hdb3_resets_parity_after_substitution() {
        let mut signal = ami_signal(vec![1, 0, 0, 0, 0, 0, 0, 0, 0]);
        scramble(&mut signal, ScrambleKind::Hdb3).unwrap();
        assert_eq!(signal.levels(), &[1, 0, 0, 0, 1, 0, 0, 0, -1]);
    }

    #[test]
    fn test_scramble_requires_ami() {
        let bits = BitString::parse("0000000000000000").unwrap();
        let mut signal = encode(&bits, LineCodeKind::NrzL);
        assert!(matches!(
            scramble(&mut signal, ScrambleKind::B8zs),
            Err(Error::ScrambleRequiresAmi {
                found: LineCodeKind::NrzL
            })
        ));
    }

    #[test]
    fn test_no_long_zero_run_survives_scrambling() {
        let mut rng = rand::rng();
        for (kind, window) in
            [(ScrambleKind::B8zs, B8ZS_WINDOW), (ScrambleKind::Hdb3, HDB3_WINDOW)]
        {
            for _ in 0..50 {
                let len = rng.random_range(1..128);
                // sparse marks make long zero runs likely
                let raw: Vec<u8> = (0..len)
                    .map(|_| u8::from(rng.random_range(0..10) == 0))
                    .collect();
                let bits = BitString::from_bits(raw).unwrap();
                let mut signal = encode(&bits, LineCodeKind::Ami);
                scramble(&mut signal, kind).unwrap();

                if let Some(run) = longest_zero_run(&signal) {
                    assert!(
                        run.len < window,
                        "{} left a zero run of {} at {}",
                        kind.name(),
                        run.len,
                        run.start
                    );
                }
            }
        }
    }
}
