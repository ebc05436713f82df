pub mod crossover;
pub mod fingerprint;
pub mod mutation;

use crate::error::{CoreError, Result};
use crate::rng::CircuitRng;
pub use gatesoup_data::{Genome, GENOME_PADDING};

pub use crossover::{crossover, replicate};
pub use fingerprint::{dump, structural_hash};
pub use mutation::{mutate, randomize};

/// Largest genome whose node indices (`2N`) stay inside the 31-bit
/// address space of a gate word.
pub const MAX_GENOME_WORDS: usize = 1 << 30;

/// Allocates a zeroed genome of `requested_len + GENOME_PADDING` words.
pub fn create(requested_len: usize) -> Result<Genome> {
    if requested_len > MAX_GENOME_WORDS - GENOME_PADDING {
        return Err(CoreError::invalid_genome(format!(
            "requested length {requested_len} exceeds {} words",
            MAX_GENOME_WORDS - GENOME_PADDING
        )));
    }
    Ok(Genome::zeroed(requested_len))
}

/// Variation operators attached to the plain `Genome` data type.
pub trait GenomeLogic {
    fn randomize(&mut self, rng: &mut CircuitRng);
    fn mutate(&mut self, rng: &mut CircuitRng, point_rate: f32, burst_rate: f32);
    fn crossover_from(&mut self, a: &Genome, b: &Genome, rng: &mut CircuitRng) -> Result<()>;
    fn replicate_from(&mut self, parent: &Genome);
    fn structural_hash(&self) -> u64;
    fn dump(&self) -> String;
}

impl GenomeLogic for Genome {
    fn randomize(&mut self, rng: &mut CircuitRng) {
        mutation::randomize(self, rng);
    }

    fn mutate(&mut self, rng: &mut CircuitRng, point_rate: f32, burst_rate: f32) {
        mutation::mutate(self, rng, point_rate, burst_rate);
    }

    fn crossover_from(&mut self, a: &Genome, b: &Genome, rng: &mut CircuitRng) -> Result<()> {
        crossover::crossover(self, a, b, rng)
    }

    fn replicate_from(&mut self, parent: &Genome) {
        crossover::replicate(self, parent);
    }

    fn structural_hash(&self) -> u64 {
        fingerprint::structural_hash(self)
    }

    fn dump(&self) -> String {
        fingerprint::dump(self)
    }
}
