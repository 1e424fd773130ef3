// Line coding: bit streams to ternary voltage levels.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::error::Error;
use crate::signal::{BitString, VoltageSequence};

/// Line coding schemes supported by the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LineCodeKind {
    NrzL,
    NrzI,
    Manchester,
    DiffManchester,
    Ami,
}

impl LineCodeKind {
    pub const ALL: [LineCodeKind; 5] = [
        LineCodeKind::NrzL,
        LineCodeKind::NrzI,
        LineCodeKind::Manchester,
        LineCodeKind::DiffManchester,
        LineCodeKind::Ami,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LineCodeKind::NrzL => "NRZ-L",
            LineCodeKind::NrzI => "NRZ-I",
            LineCodeKind::Manchester => "Manchester",
            LineCodeKind::DiffManchester => "Differential Manchester",
            LineCodeKind::Ami => "AMI",
        }
    }

    /// Voltage symbols emitted per input bit.
    pub fn symbols_per_bit(&self) -> usize {
        match self {
            LineCodeKind::Manchester | LineCodeKind::DiffManchester => 2,
            _ => 1,
        }
    }

    /// Only AMI output is eligible for downstream scrambling.
    pub fn supports_scrambling(&self) -> bool {
        matches!(self, LineCodeKind::Ami)
    }
}

impl fmt::Display for LineCodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LineCodeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_ascii_lowercase().as_str() {
            "nrz-l" | "nrzl" => Ok(LineCodeKind::NrzL),
            "nrz-i" | "nrzi" => Ok(LineCodeKind::NrzI),
            "manchester" => Ok(LineCodeKind::Manchester),
            "diff-manchester" | "differential-manchester" => {
                Ok(LineCodeKind::DiffManchester)
            }
            "ami" => Ok(LineCodeKind::Ami),
            other => Err(Error::UnknownScheme(other.to_string())),
        }
    }
}

/// Encode a bit string into voltage levels under the selected scheme.
///
/// Input validity (non-empty, binary symbols only) is guaranteed by
/// [`BitString`] construction, so encoding itself is total. Each call is a
/// pure function of its arguments; no state survives between calls.
pub fn encode(bits: &BitString, kind: LineCodeKind) -> VoltageSequence {
    let levels = match kind {
        LineCodeKind::NrzL => nrz_l(bits.bits()),
        LineCodeKind::NrzI => nrz_i(bits.bits()),
        LineCodeKind::Manchester => manchester(bits.bits()),
        LineCodeKind::DiffManchester => diff_manchester(bits.bits()),
        LineCodeKind::Ami => ami(bits.bits()),
    };

    debug!(
        "encoded {} bits as {} ({} symbols)",
        bits.len(),
        kind.name(),
        levels.len()
    );

    VoltageSequence::new(levels, kind)
}

fn nrz_l(bits: &[u8]) -> Vec<i8> {
    bits.iter().map(|&b| if b == 1 { 1 } else { -1 }).collect()
}

fn nrz_i(bits: &[u8]) -> Vec<i8> {
    let mut level: i8 = -1;
    bits.iter()
        .map(|&b| {
            if b == 1 {
                level = -level;
            }
            level
        })
        .collect()
}

fn manchester(bits: &[u8]) -> Vec<i8> {
    let mut levels = Vec::with_capacity(bits.len() * 2);
    for &bit in bits {
        if bit == 0 {
            // 0 -> high then low
            levels.push(1);
            levels.push(-1);
        } else {
            // 1 -> low then high
            levels.push(-1);
            levels.push(1);
        }
    }
    levels
}

fn diff_manchester(bits: &[u8]) -> Vec<i8> {
    let mut levels = Vec::with_capacity(bits.len() * 2);
    let mut level: i8 = -1;
    for &bit in bits {
        // a 0 adds a transition at the bit boundary; the mid-bit
        // transition happens on every bit
        if bit == 0 {
            level = -level;
        }
        levels.push(level);
        levels.push(-level);
        level = -level;
    }
    levels
}

fn ami(bits: &[u8]) -> Vec<i8> {
    let mut polarity: i8 = 1;
    bits.iter()
        .map(|&b| {
            if b == 0 {
                0
            } else {
                let mark = polarity;
                polarity = -polarity;
                mark
            }
        })
        .collect()
}
