//! Per-generation report.

use serde::{Deserialize, Serialize};

/// What one generation looked like. Defect averages are raw sums; divide by
/// `test_reps` for a per-pass figure.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct GenerationStats {
    pub generation: u64,
    pub alive: usize,
    /// Genomes that died this generation (already-dead slots excluded).
    pub deaths: usize,
    pub asexual_births: usize,
    pub sexual_births: usize,
    pub mutations: usize,
    /// Genomes created from scratch after a total die-off.
    pub generated: usize,
    pub best_defects: u64,
    pub worst_defects: u64,
    pub avg_living_defects: f64,
    pub avg_living_energy: f64,
    pub youngest_age: u64,
    pub oldest_age: u64,
    pub max_zeros: u64,
    /// Mean energy spent by a genome's first pass.
    pub run_cost: f64,
}

impl GenerationStats {
    pub(crate) fn new(generation: u64) -> Self {
        Self {
            generation,
            best_defects: u64::MAX,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn births(&self) -> usize {
        self.asexual_births + self.sexual_births
    }

    /// Logs the generation at info level.
    pub fn log(&self, test_reps: u32) {
        let reps = f64::from(test_reps);
        tracing::info!(
            generation = self.generation,
            alive = self.alive,
            deaths = self.deaths,
            asexual_births = self.asexual_births,
            sexual_births = self.sexual_births,
            mutations = self.mutations,
            best = self.best_defects as f64 / reps,
            avg_living = self.avg_living_defects / reps,
            avg_living_energy = self.avg_living_energy,
            run_cost = self.run_cost,
            ages = %format_args!("{}..{}", self.youngest_age, self.oldest_age),
            max_zeros = self.max_zeros,
            "Generation"
        );
    }
}
