use gatesoup_core::config::AppConfig;
use gatesoup_core::genetics;
use gatesoup_data::{Gate, GateWord, Genome, Polarity};

/// Hand-wires a genome gate by gate. Unset words stay zero, which decodes
/// as an N-type switch aimed at node 0.
#[allow(dead_code)]
pub struct CircuitBuilder {
    genome: Genome,
}

#[allow(dead_code)]
impl CircuitBuilder {
    /// `words` is the total length, padding included.
    pub fn new(words: usize) -> Self {
        let requested = words.saturating_sub(genetics::GENOME_PADDING);
        let mut genome = genetics::create(requested).unwrap();
        genome.defects = 0;
        Self { genome }
    }

    pub fn wire(mut self, index: usize, targets: [u32; 2]) -> Self {
        self.genome.code[index] = GateWord::encode(Gate::Wire { targets }).0;
        self
    }

    pub fn switch(mut self, index: usize, polarity: Polarity, targets: [u32; 2]) -> Self {
        self.genome.code[index] = GateWord::encode(Gate::Switch { polarity, targets }).0;
        self
    }

    pub fn energy(mut self, energy: u64) -> Self {
        self.genome.energy = energy;
        self
    }

    pub fn build(mut self) -> Genome {
        self.genome.hash = genetics::structural_hash(&self.genome);
        self.genome
    }
}

/// Small, fast settings for whole-run tests.
#[allow(dead_code)]
pub fn tiny_config(size: usize) -> AppConfig {
    let mut config = AppConfig::default();
    config.population.size = size;
    config.population.circuit_len = 8;
    config.population.max_generations = 5;
    config.feeding.rounds = size;
    config.simulation.test_reps = 2;
    config
}
