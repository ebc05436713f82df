//! Configuration for an evolution run.
//!
//! Strongly-typed structures that map onto `gatesoup.toml`. Every section
//! has defaults, so a partial file (or none at all) is valid.
//!
//! ## Example `gatesoup.toml`
//!
//! ```toml
//! [population]
//! size = 1024
//! circuit_len = 40
//!
//! [reproduction]
//! mutation_rate = 0.3
//! point_rate = 0.15
//! burst_rate = 0.3
//!
//! [simulation]
//! seed = 42
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Population shape and lifetime limits.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PopulationConfig {
    pub size: usize,
    /// Requested circuit length; genomes carry five extra words.
    pub circuit_len: usize,
    /// Energy granted at birth. Newborns that bring no improvement starve
    /// before they can breed.
    pub initial_energy: u64,
    pub max_generations: u64,
    /// Age after which remaining energy is divided down each generation.
    pub old_age: u64,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            size: 4096,
            circuit_len: 40,
            initial_energy: 800,
            max_generations: 5_000_000,
            old_age: 100,
        }
    }
}

/// Tournaments over energy.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FeedingConfig {
    pub rounds: usize,
    pub group_size: usize,
    /// Energy for the winner of a round; each following place gets
    /// `reward / reward_ratio^place`.
    pub reward: u64,
    pub reward_ratio: u64,
    pub max_rewarded: usize,
}

impl Default for FeedingConfig {
    fn default() -> Self {
        Self {
            rounds: 1024,
            group_size: 3,
            reward: 800,
            reward_ratio: 2,
            max_rewarded: 2,
        }
    }
}

/// Refilling dead slots and variation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ReproductionConfig {
    pub group_size: usize,
    /// Energy a parent needs before it may breed.
    pub threshold: u64,
    /// Energy each parent pays per child.
    pub cost: u64,
    /// Chance a birth uses crossover instead of cloning.
    pub sexual_rate: f32,
    /// Chance a newborn is mutated.
    pub mutation_rate: f32,
    /// Chance a living genome is mutated in place each generation.
    pub living_mutation_rate: f32,
    pub point_rate: f32,
    pub burst_rate: f32,
}

impl Default for ReproductionConfig {
    fn default() -> Self {
        Self {
            group_size: 10,
            threshold: 1500,
            cost: 1000,
            sexual_rate: 0.0,
            mutation_rate: 0.3,
            living_mutation_rate: 0.0,
            point_rate: 0.15,
            burst_rate: 0.3,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub test_reps: u32,
    /// Consecutive perfect evaluations that count as a solution.
    pub solution_streak: u64,
    /// Fixed seed; `None` seeds from the clock.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            test_reps: crate::simulator::TEST_REPS,
            solution_streak: 512,
            seed: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub population: PopulationConfig,
    pub feeding: FeedingConfig,
    pub reproduction: ReproductionConfig,
    pub simulation: SimulationConfig,
}

fn is_rate(x: f32) -> bool {
    (0.0..=1.0).contains(&x)
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` describing the
    /// first failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.population.size > 0, "Population size must be positive");
        anyhow::ensure!(
            self.population.circuit_len <= crate::genetics::MAX_GENOME_WORDS - 5,
            "Circuit length too large"
        );
        anyhow::ensure!(
            self.population.initial_energy > 0,
            "Initial energy must be positive"
        );

        anyhow::ensure!(
            self.feeding.group_size >= 2,
            "Feeding group size must be at least 2"
        );
        anyhow::ensure!(
            self.feeding.reward_ratio >= 1,
            "Reward ratio must be at least 1"
        );

        anyhow::ensure!(
            self.reproduction.group_size > 0,
            "Reproduction group size must be positive"
        );
        anyhow::ensure!(
            self.reproduction.threshold > self.reproduction.cost,
            "Reproduction threshold must exceed its cost"
        );
        let rates = [
            ("Sexual rate", self.reproduction.sexual_rate),
            ("Mutation rate", self.reproduction.mutation_rate),
            ("Living mutation rate", self.reproduction.living_mutation_rate),
            ("Point rate", self.reproduction.point_rate),
            ("Burst rate", self.reproduction.burst_rate),
        ];
        for (name, rate) in rates {
            anyhow::ensure!(is_rate(rate), "{name} must be in [0.0, 1.0]");
        }
        anyhow::ensure!(
            self.reproduction.point_rate <= self.reproduction.burst_rate,
            "Point rate must not exceed burst rate"
        );

        anyhow::ensure!(self.simulation.test_reps > 0, "Test reps must be positive");
        anyhow::ensure!(
            self.simulation.solution_streak > 0,
            "Solution streak must be positive"
        );

        Ok(())
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path`, falling back to defaults when the file does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
            .map_err(|e| e.context(format!("invalid config {}", path.display())))
    }

    /// Hash of the tunables, for telling runs apart in logs.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.population).as_bytes());
        hasher.update(format!("{:?}", self.feeding).as_bytes());
        hasher.update(format!("{:?}", self.reproduction).as_bytes());
        hasher.update(self.simulation.test_reps.to_le_bytes());
        hasher.update(self.simulation.solution_streak.to_le_bytes());
        hex::encode(hasher.finalize())
    }
}
