pub mod evolver;
pub mod population;
pub mod stats;

pub use evolver::{Evolver, RunSummary, Solution};
pub use population::{Population, StepOutcome};
pub use stats::GenerationStats;
