//! Plain data types shared by the gatesoup crates.
//!
//! Nothing in here draws randomness or runs a simulation; the logic lives in
//! `gatesoup_core` and is attached through extension traits.

pub mod data;

pub use data::gate::{Gate, GateWord, Polarity, ADDRESS_MASK};
pub use data::genome::{
    Genome, CLOCK_PIN, COMPLETE_NODE, DEFAULT_ENERGY, GENOME_PADDING, OUTPUT_NODE, PIN_A, PIN_B,
    PIN_COUNT, POWER_PIN, UNEVALUATED,
};
