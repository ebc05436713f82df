//! Discrete-event signal simulator.
//!
//! A genome is read as a network of wires and switches. Each test vector
//! seeds the heap with eight boundary arrivals (two per pin), then events are
//! processed in time order until the heap drains or the genome runs out of
//! energy. Every processed event costs one unit of energy.
//!
//! ## Node arithmetic
//!
//! With `N = genome.len()`, an event node is reduced mod `2N`; its gate is
//! `node mod N`. Pin gates `0..4` are patched through to `4..8`, so pins A and
//! B land on the observation nodes 4 and 5 for every genome length. Writes to
//! observation nodes are checked against the vector's rules; writes anywhere
//! else fire the gate. In genomes shorter than eight words the patched slots
//! 6 and 7 wrap back to gate `slot mod N`.

pub mod signal;
pub mod vectors;

use crate::heap::EventHeap;
use crate::rng::CircuitRng;
use gatesoup_data::{Gate, Genome, COMPLETE_NODE, OUTPUT_NODE, PIN_COUNT};
use signal::{switch_output, MAX_DELAY, MIN_DELAY};
pub use vectors::{TestVector, TEST_VECTORS};

/// Full passes over the eight vectors per evaluation.
pub const TEST_REPS: u32 = 512;

/// Reusable simulation context: the event heap and the voltage of every
/// node. Both are cleared, not freed, between runs.
#[derive(Debug, Clone)]
pub struct Simulator {
    heap: EventHeap,
    voltage: Vec<f32>,
    test_reps: u32,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulator {
    #[must_use]
    pub fn new() -> Self {
        Self::with_test_reps(TEST_REPS)
    }

    /// `test_reps` is clamped to at least one pass.
    #[must_use]
    pub fn with_test_reps(test_reps: u32) -> Self {
        Self {
            heap: EventHeap::new(),
            voltage: Vec::new(),
            test_reps: test_reps.max(1),
        }
    }

    #[must_use]
    pub fn test_reps(&self) -> u32 {
        self.test_reps
    }

    /// Grades `genome` against every vector, `test_reps` times over.
    ///
    /// `rng` should be a copy of the generation's noise state so all genomes
    /// see the same delays. Returns the energy spent by the first pass.
    ///
    /// Energy is spent monotonically through all passes, then restored to
    /// its level after the first pass. A first pass that spends nothing
    /// forfeits all remaining energy as defects.
    pub fn evaluate(&mut self, genome: &mut Genome, mut rng: CircuitRng) -> u64 {
        genome.defects = 0;
        let start = genome.energy;

        if start > 0 {
            self.run_pass(genome, &mut rng);
        }
        let after_first = genome.energy;
        if start > 0 {
            for _ in 1..self.test_reps {
                self.run_pass(genome, &mut rng);
            }
        }
        genome.energy = after_first;

        let consumed = if start == after_first {
            let forfeited = genome.energy;
            genome.defects = genome.defects.saturating_add(forfeited);
            genome.energy = 0;
            forfeited
        } else {
            start - after_first
        };

        if genome.defects == 0 {
            genome.zeros += 1;
        } else {
            genome.zeros = 0;
        }

        tracing::debug!(
            hash = genome.hash,
            defects = genome.defects,
            energy = genome.energy,
            consumed,
            zeros = genome.zeros,
            "Genome evaluated"
        );
        consumed
    }

    /// Runs the eight vectors once.
    pub fn run_pass(&mut self, genome: &mut Genome, rng: &mut CircuitRng) {
        for vector in &TEST_VECTORS {
            self.run_vector(genome, rng, vector);
        }
    }

    /// Runs a single vector to completion, adding its defects to the genome.
    /// The count saturates, so an unevaluated genome stays at `u64::MAX`.
    pub fn run_vector(&mut self, genome: &mut Genome, rng: &mut CircuitRng, vector: &TestVector) {
        let n = genome.len();
        let node_count = genome.node_count();
        self.prepare(node_count);
        let defects_before = genome.defects;

        for (pin, level) in vector.pin_levels().into_iter().enumerate() {
            for target in genome.word(pin).decode().targets() {
                self.heap.insert(delay(rng), target, level);
            }
        }

        while let Some(event) = self.heap.extract_min() {
            if genome.energy == 0 {
                break;
            }
            genome.energy -= 1;

            let node = event.node as usize % node_count;
            let mut gate = node % n;
            if gate < PIN_COUNT {
                gate += PIN_COUNT;
            }

            // 2N >= 10, so both observation slots always exist.
            if gate <= COMPLETE_NODE {
                self.voltage[gate] = event.value;
                genome.defects = genome.defects.saturating_add(vector.observation_defects(
                    self.voltage[OUTPUT_NODE],
                    self.voltage[COMPLETE_NODE],
                ));
                continue;
            }
            // Pin slots 2 and 3 of a genome shorter than eight words.
            if gate >= n {
                gate %= n;
            }

            self.voltage[node] = event.value;
            let source = self.voltage[gate];
            let (level, targets) = match genome.word(gate).decode() {
                Gate::Wire { targets } => (source, targets),
                Gate::Switch { polarity, targets } => (
                    switch_output(polarity, self.voltage[gate + n], source),
                    targets,
                ),
            };
            for target in targets {
                self.heap.insert(event.time + delay(rng), target, level);
            }
        }

        genome.defects = genome
            .defects
            .saturating_add(vector.completion_defects(self.voltage[COMPLETE_NODE]));
        tracing::trace!(
            vector = %vector,
            defects = genome.defects.saturating_sub(defects_before),
            energy = genome.energy,
            "Vector finished"
        );
        self.voltage.fill(0.0);
        self.heap.clear();
    }

    fn prepare(&mut self, node_count: usize) {
        if self.voltage.len() != node_count {
            self.voltage.clear();
            self.voltage.resize(node_count, 0.0);
        }
        self.heap.clear();
    }
}

/// Propagation delay of one hop. Independent of the hop itself; all the
/// variation comes from the noise stream.
#[inline]
fn delay(rng: &mut CircuitRng) -> f32 {
    rng.uniform(MIN_DELAY, MAX_DELAY)
}

/// One-shot evaluation with a throwaway simulation context.
pub fn evaluate(genome: &mut Genome, rng: CircuitRng) -> u64 {
    Simulator::new().evaluate(genome, rng)
}
