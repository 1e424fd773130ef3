//! Physical-layer line coding simulator.
//!
//! Converts bit streams (or quantized analog samples) into ternary voltage
//! sequences — NRZ-L, NRZ-I, Manchester, Differential Manchester and AMI —
//! optionally scrambles AMI output with B8ZS or HDB3 to suppress long zero
//! runs, and reports two structural statistics: the longest palindromic
//! substring of the bits and the longest zero-voltage run of the final
//! signal.
//!
//! # Example
//!
//! ```
//! use signalgen_rs::{BitString, LineCodeKind, encode};
//!
//! let bits = BitString::parse("01001100011").unwrap();
//! let signal = encode(&bits, LineCodeKind::NrzL);
//! assert_eq!(signal.len(), bits.len());
//! ```

pub mod analysis;
pub mod error;
pub mod modulation;
pub mod phy;
pub mod pipeline;
pub mod signal;
pub mod ui;
pub mod utils;

pub use analysis::{Palindrome, ZeroRun, longest_palindrome, longest_zero_run};
pub use error::{Error, Result};
pub use modulation::{Quantization, quantize};
pub use phy::{LineCodeKind, ScrambleKind, encode, scramble};
pub use signal::{BitString, VoltageSequence};
