// Physical layer: baseband line coding and zero-suppression scrambling.

pub mod line_coding;
pub mod scramble;

pub use line_coding::{LineCodeKind, encode};
pub use scramble::{ScrambleKind, scramble};
