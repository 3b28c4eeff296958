//! A library implementing the sticker-level state of N×N×N twisty puzzles,
//! the standard face and slice moves that act on them, a deterministic
//! scramble driver and a state-validity checker.

#![deny(missing_docs)]

pub mod cube;
pub mod error;
pub mod moves;
