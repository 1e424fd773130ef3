// Value types passed between pipeline stages.
//
// Both types own their buffers and are created fresh per run; nothing is
// shared across pipeline invocations.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::phy::LineCodeKind;

/// A validated stream of binary symbols.
///
/// Non-empty by construction; every element is 0 or 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitString(Vec<u8>);

impl BitString {
    /// Build from raw bit values (0 or 1).
    pub fn from_bits(bits: Vec<u8>) -> Result<Self> {
        if bits.is_empty() {
            return Err(Error::EmptyBits);
        }
        if let Some(&bad) = bits.iter().find(|&&b| b > 1) {
            return Err(Error::InvalidBit(bad));
        }
        Ok(Self(bits))
    }

    /// Parse a textual bit string such as `"10110010"`.
    pub fn parse(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Err(Error::EmptyBits);
        }
        let mut bits = Vec::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '0' => bits.push(0),
                '1' => bits.push(1),
                other => return Err(Error::NonBinarySymbol(other)),
            }
        }
        Ok(Self(bits))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn bits(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.0 {
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}

impl FromStr for BitString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A sequence of ternary voltage levels produced by a line encoder.
///
/// Carries the scheme that produced it so the scrambler can enforce its
/// AMI-only precondition and the presentation layer can label the time
/// axis correctly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoltageSequence {
    levels: Vec<i8>,
    source: LineCodeKind,
}

impl VoltageSequence {
    pub(crate) fn new(levels: Vec<i8>, source: LineCodeKind) -> Self {
        Self { levels, source }
    }

    /// Build from raw levels, validating that each is -1, 0 or +1.
    pub fn from_levels(levels: Vec<i8>, source: LineCodeKind) -> Result<Self> {
        if let Some(&bad) = levels.iter().find(|&&l| !(-1..=1).contains(&l)) {
            return Err(Error::InvalidLevel(bad));
        }
        Ok(Self::new(levels, source))
    }

    pub fn levels(&self) -> &[i8] {
        &self.levels
    }

    pub(crate) fn levels_mut(&mut self) -> &mut [i8] {
        &mut self.levels
    }

    pub fn into_levels(self) -> Vec<i8> {
        self.levels
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// The line coding scheme this sequence came from.
    pub fn source(&self) -> LineCodeKind {
        self.source
    }
}

impl fmt::Display for VoltageSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, level) in self.levels.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", level)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display_round_trip() {
        let bits = BitString::parse("10110010").unwrap();
        assert_eq!(bits.len(), 8);
        assert_eq!(bits.to_string(), "10110010");
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(matches!(BitString::parse(""), Err(Error::EmptyBits)));
    }

    #[test]
    fn test_parse_rejects_non_binary() {
        assert!(matches!(
            BitString::parse("0102"),
            Err(Error::NonBinarySymbol('2'))
        ));
    }

    #[test]
    fn test_from_bits_rejects_out_of_range_values() {
        assert!(matches!(
            BitString::from_bits(vec![0, 1, 3]),
            Err(Error::InvalidBit(3))
        ));
    }

    #[test]
    fn test_from_levels_rejects_out_of_range_levels() {
        assert!(matches!(
            VoltageSequence::from_levels(vec![1, 0, 2], LineCodeKind::Ami),
            Err(Error::InvalidLevel(2))
        ));
    }

    #[test]
    fn test_voltage_sequence_display() {
        let signal =
            VoltageSequence::from_levels(vec![1, 0, -1], LineCodeKind::Ami)
                .unwrap();
        assert_eq!(signal.to_string(), "1 0 -1");
    }
}
