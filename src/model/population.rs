//! The evolutionary loop around the core: evaluation, aging, feeding
//! tournaments and refilling dead slots.

use crate::model::stats::GenerationStats;
use gatesoup_core::config::AppConfig;
use gatesoup_core::genetics::{self, GenomeLogic};
use gatesoup_core::rng::CircuitRng;
use gatesoup_core::simulator::Simulator;
use gatesoup_data::Genome;

/// Result of one generation.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// Normal generation.
    Evolved(GenerationStats),
    /// Nobody survived evaluation; the whole pool was re-randomized.
    Regenerated(GenerationStats),
    /// A genome hit the required zero-defect streak.
    Solved { index: usize, stats: GenerationStats },
}

impl StepOutcome {
    #[must_use]
    pub fn stats(&self) -> &GenerationStats {
        match self {
            StepOutcome::Evolved(stats)
            | StepOutcome::Regenerated(stats)
            | StepOutcome::Solved { stats, .. } => stats,
        }
    }
}

pub struct Population {
    pub genomes: Vec<Genome>,
    pub config: AppConfig,
    pub generation: u64,
    rng: CircuitRng,
    simulator: Simulator,
}

impl Population {
    pub fn new(config: AppConfig, mut rng: CircuitRng) -> anyhow::Result<Self> {
        config.validate()?;
        let mut genomes = Vec::with_capacity(config.population.size);
        for _ in 0..config.population.size {
            let mut genome = genetics::create(config.population.circuit_len)
                .map_err(|e| e.with_context("allocating population"))?;
            genome.randomize(&mut rng);
            genome.energy = config.population.initial_energy;
            genome.born = 0;
            genomes.push(genome);
        }
        let simulator = Simulator::with_test_reps(config.simulation.test_reps);
        Ok(Self {
            genomes,
            config,
            generation: 0,
            rng,
            simulator,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.genomes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.genomes.is_empty()
    }

    #[must_use]
    pub fn rng(&self) -> CircuitRng {
        self.rng
    }

    /// Runs one generation and advances the generation counter.
    pub fn step(&mut self) -> StepOutcome {
        let generation = self.generation;
        let mut stats = GenerationStats::new(generation);

        // Every genome sees the same noise this generation.
        self.rng.next_unit_f32();
        let noise = self.rng;

        let live = match self.evaluate_all(noise, &mut stats) {
            Ok(live) => live,
            Err(index) => {
                tracing::info!(generation, index, "Found solution");
                return StepOutcome::Solved { index, stats };
            }
        };

        let outcome = if live.is_empty() {
            tracing::warn!(generation, "Population died out, regenerating");
            self.regenerate(&mut stats);
            StepOutcome::Regenerated(stats)
        } else {
            self.feed(&live);
            self.reproduce(&live, &mut stats);
            StepOutcome::Evolved(stats)
        };

        self.generation += 1;
        outcome
    }

    /// Evaluates and ages every genome. Returns the indices still alive, or
    /// the index of a solved genome.
    fn evaluate_all(
        &mut self,
        noise: CircuitRng,
        stats: &mut GenerationStats,
    ) -> Result<Vec<usize>, usize> {
        let generation = self.generation;
        let old_age = self.config.population.old_age;
        let streak = self.config.simulation.solution_streak;
        let size = self.genomes.len() as f64;

        let mut live = Vec::with_capacity(self.genomes.len());
        let mut living_defects = 0.0;
        let mut living_energy = 0.0;
        stats.youngest_age = u64::MAX;

        for (index, genome) in self.genomes.iter_mut().enumerate() {
            // Dead slots wait for reproduction; grading them would only
            // report an empty run as a perfect one.
            if !genome.is_alive() {
                continue;
            }
            let consumed = self.simulator.evaluate(genome, noise);
            stats.run_cost += consumed as f64 / size;

            let age = generation.saturating_sub(genome.born);
            if age > old_age {
                genome.energy /= age - old_age;
            }

            stats.best_defects = stats.best_defects.min(genome.defects);
            stats.worst_defects = stats.worst_defects.max(genome.defects);

            if genome.is_alive() {
                live.push(index);
                living_defects += genome.defects as f64;
                living_energy += genome.energy as f64;
                stats.youngest_age = stats.youngest_age.min(age);
                stats.oldest_age = stats.oldest_age.max(age);
                stats.max_zeros = stats.max_zeros.max(genome.zeros);
            } else {
                stats.deaths += 1;
            }

            if genome.zeros >= streak {
                return Err(index);
            }
        }

        stats.alive = live.len();
        if live.is_empty() {
            stats.youngest_age = 0;
        } else {
            stats.avg_living_defects = living_defects / live.len() as f64;
            stats.avg_living_energy = living_energy / live.len() as f64;
        }
        Ok(live)
    }

    /// Samples `size` living genomes and orders them by defects, best first.
    /// Ties keep sampling order.
    fn tournament(&mut self, live: &[usize], size: usize) -> Vec<usize> {
        let mut group: Vec<usize> = (0..size)
            .map(|_| live[self.rng.below(live.len() as u64) as usize])
            .collect();
        group.sort_by_key(|&i| self.genomes[i].defects);
        group
    }

    /// Energy tournaments: the best of each group gets `reward`, the next
    /// `reward / ratio`, and so on.
    fn feed(&mut self, live: &[usize]) {
        let feeding = self.config.feeding.clone();
        for _ in 0..feeding.rounds {
            let group = self.tournament(live, feeding.group_size);
            let mut reward = feeding.reward;
            for &winner in group.iter().take(feeding.max_rewarded) {
                if reward == 0 {
                    break;
                }
                self.genomes[winner].energy += reward;
                reward /= feeding.reward_ratio;
            }
        }
    }

    /// Refills dead slots from tournament winners that can afford a child.
    fn reproduce(&mut self, live: &[usize], stats: &mut GenerationStats) {
        let repro = self.config.reproduction.clone();
        let initial_energy = self.config.population.initial_energy;
        let generation = self.generation;

        for slot in 0..self.genomes.len() {
            if self.genomes[slot].energy != 0 {
                if self.rng.next_unit_f32() < repro.living_mutation_rate {
                    let genome = &mut self.genomes[slot];
                    genome.mutate(&mut self.rng, repro.point_rate, repro.burst_rate);
                    genome.born = generation;
                    stats.mutations += 1;
                }
                continue;
            }

            let group = self.tournament(live, repro.group_size);
            let first = group[0];
            if self.genomes[first].energy < repro.threshold {
                continue;
            }
            let second = group.get(1).copied();

            let sexual = self.rng.next_unit_f32() < repro.sexual_rate
                && second.is_some_and(|s| self.genomes[s].energy >= repro.threshold);
            match second {
                Some(second) if sexual => {
                    let a = self.genomes[first].clone();
                    let b = self.genomes[second].clone();
                    let child = &mut self.genomes[slot];
                    if let Err(e) = child.crossover_from(&a, &b, &mut self.rng) {
                        tracing::error!(error = %e, slot, "Crossover failed");
                        continue;
                    }
                    for parent in [first, second] {
                        let energy = &mut self.genomes[parent].energy;
                        *energy = energy.saturating_sub(repro.cost);
                    }
                    stats.sexual_births += 1;
                }
                _ => {
                    let (child, parent) = child_and_parent(&mut self.genomes, slot, first);
                    child.replicate_from(parent);
                    let energy = &mut self.genomes[first].energy;
                    *energy = energy.saturating_sub(repro.cost);
                    stats.asexual_births += 1;
                }
            }

            let child = &mut self.genomes[slot];
            child.energy = initial_energy;
            if self.rng.next_unit_f32() < repro.mutation_rate {
                child.mutate(&mut self.rng, repro.point_rate, repro.burst_rate);
                stats.mutations += 1;
            }
            child.born = generation;
        }
    }

    fn regenerate(&mut self, stats: &mut GenerationStats) {
        for genome in &mut self.genomes {
            genome.randomize(&mut self.rng);
            genome.energy = self.config.population.initial_energy;
            genome.born = self.generation;
            stats.generated += 1;
        }
    }
}

/// Disjoint borrows of a dead slot and a living parent.
fn child_and_parent(genomes: &mut [Genome], child: usize, parent: usize) -> (&mut Genome, &Genome) {
    assert_ne!(child, parent, "a dead slot cannot be its own parent");
    if child < parent {
        let (head, tail) = genomes.split_at_mut(parent);
        (&mut head[child], &tail[0])
    } else {
        let (head, tail) = genomes.split_at_mut(child);
        (&mut tail[0], &head[parent])
    }
}
