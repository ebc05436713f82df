//! # Gatesoup Core
//!
//! Grading and variation of evolved asynchronous switch circuits.
//!
//! This crate contains the deterministic core:
//! - A 256-bit state PRNG threaded explicitly through everything
//! - A 16-ary event heap reused across simulation runs
//! - The discrete-event signal simulator and its eight test vectors
//! - Variation operators (randomize, mutate, crossover, replicate)
//! - Configuration, logging setup and run counters
//!
//! ## Example
//!
//! ```
//! use gatesoup_core::genetics::{self, GenomeLogic};
//! use gatesoup_core::rng::CircuitRng;
//! use gatesoup_core::simulator::Simulator;
//! use rand::SeedableRng;
//!
//! let mut rng = CircuitRng::seed_from_u64(42);
//! let mut genome = genetics::create(40).unwrap();
//! genome.randomize(&mut rng);
//! genome.energy = 800;
//!
//! let noise = rng;
//! let consumed = Simulator::with_test_reps(4).evaluate(&mut genome, noise);
//! assert!(consumed > 0);
//! ```

/// Configuration management for evolution runs
pub mod config;
/// Error types
pub mod error;
/// Variation operators and genome fingerprints
pub mod genetics;
/// Event priority queue
pub mod heap;
/// Run counters and logging setup
pub mod metrics;
/// Deterministic generator
pub mod rng;
/// Discrete-event signal simulator
pub mod simulator;

pub use config::AppConfig;
pub use error::{CoreError, Result};
pub use gatesoup_data::{Gate, GateWord, Genome, Polarity};
pub use genetics::GenomeLogic;
pub use heap::{Event, EventHeap};
pub use metrics::{init_logging, EvolutionMetrics};
pub use rng::CircuitRng;
pub use simulator::{evaluate, Simulator};
