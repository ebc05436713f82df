//! Core data structures for evolved circuits.

pub mod gate;
pub mod genome;
