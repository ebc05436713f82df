//! # Gatesoup
//!
//! Evolves asynchronous switch circuits toward an AND-gate truth table.
//! The grading core lives in `gatesoup_core`; this crate holds the
//! population loop around it and the application plumbing.

pub mod app;
pub mod model;

pub use gatesoup_core::config::AppConfig;
pub use model::{Evolver, GenerationStats, Population, RunSummary, StepOutcome};
