//! Runs generations until a circuit is found, the generation limit is hit,
//! or shutdown is requested.

use crate::model::population::{Population, StepOutcome};
use crate::model::stats::GenerationStats;
use gatesoup_core::config::AppConfig;
use gatesoup_core::genetics::GenomeLogic;
use gatesoup_core::metrics::EvolutionMetrics;
use gatesoup_core::rng::CircuitRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};

/// A genome that held a zero-defect streak long enough.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Solution {
    pub generation: u64,
    pub index: usize,
    pub hash: u64,
    pub listing: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub seed: u64,
    pub generations: u64,
    pub solution: Option<Solution>,
    pub interrupted: bool,
}

pub struct Evolver {
    pub population: Population,
    pub metrics: EvolutionMetrics,
    seed: u64,
    report: Option<Box<dyn FnMut(&GenerationStats) + Send>>,
}

impl Evolver {
    pub fn new(config: AppConfig, seed: u64) -> anyhow::Result<Self> {
        tracing::info!(seed, fingerprint = %config.fingerprint(), "Starting evolution");
        let population = Population::new(config, CircuitRng::seed_from_u64(seed))?;
        Ok(Self {
            population,
            metrics: EvolutionMetrics::new(),
            seed,
            report: None,
        })
    }

    /// Called with every generation's stats, in addition to logging.
    #[must_use]
    pub fn with_reporter<F>(mut self, report: F) -> Self
    where
        F: FnMut(&GenerationStats) + Send + 'static,
    {
        self.report = Some(Box::new(report));
        self
    }

    pub fn run(&mut self, shutdown: &AtomicBool) -> RunSummary {
        let max_generations = self.population.config.population.max_generations;
        let test_reps = self.population.config.simulation.test_reps;
        let mut solution = None;
        let mut interrupted = false;

        while self.population.generation < max_generations {
            if shutdown.load(Ordering::SeqCst) {
                tracing::info!(
                    generation = self.population.generation,
                    "Shutdown requested, stopping"
                );
                interrupted = true;
                break;
            }

            let outcome = self.population.step();
            let stats = outcome.stats();
            stats.log(test_reps);
            if let Some(report) = self.report.as_mut() {
                report(stats);
            }
            self.metrics.record_generation(
                (stats.alive + stats.deaths) as u64,
                stats.births() as u64,
                stats.deaths as u64,
                stats.mutations as u64,
            );

            if let StepOutcome::Solved { index, .. } = outcome {
                let genome = &self.population.genomes[index];
                solution = Some(Solution {
                    generation: stats.generation,
                    index,
                    hash: genome.hash,
                    listing: genome.dump(),
                });
                break;
            }
        }

        self.metrics.log_summary();
        RunSummary {
            seed: self.seed,
            generations: self.metrics.generations(),
            solution,
            interrupted,
        }
    }
}
