//! Generic numeric algorithms
//!
//! Written once against the structural traits, so every storage strategy
//! and view works as an operand or a destination. Destinations must be
//! mutable and exactly sized; nothing is resized or allocated for the
//! caller.

pub mod matrix;
pub mod vector;
