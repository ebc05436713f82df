use serde::{Deserialize, Serialize};

use crate::data::gate::GateWord;

/// Extra words every genome carries beyond its requested length.
pub const GENOME_PADDING: usize = 5;
/// Event budget a freshly allocated genome starts with.
pub const DEFAULT_ENERGY: u64 = 50;
/// Defect count of a genome that has never been evaluated.
pub const UNEVALUATED: u64 = u64::MAX;

/// External pins. Their words route the boundary signals of each test vector.
pub const PIN_A: usize = 0;
pub const PIN_B: usize = 1;
pub const CLOCK_PIN: usize = 2;
pub const POWER_PIN: usize = 3;
pub const PIN_COUNT: usize = 4;

/// Observation nodes. Pin slots are patched through onto these.
pub const OUTPUT_NODE: usize = 4;
pub const COMPLETE_NODE: usize = 5;

/// One candidate circuit.
///
/// `code` holds the packed gate words, `aux` a free payload of the same
/// length. Node `i` is gate `i`'s primary node and node `i + len()` its
/// control shadow.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genome {
    pub code: Vec<u64>,
    pub aux: Vec<u64>,
    /// Remaining event budget.
    pub energy: u64,
    /// Defects counted by the last evaluation.
    pub defects: u64,
    /// Consecutive zero-defect evaluations.
    pub zeros: u64,
    /// Structural fingerprint over `code`.
    pub hash: u64,
    /// Generation the genome was created in.
    pub born: u64,
}

impl Genome {
    /// Allocates a zeroed genome with `requested_len + GENOME_PADDING` words.
    #[must_use]
    pub fn zeroed(requested_len: usize) -> Self {
        let len = requested_len + GENOME_PADDING;
        Self {
            code: vec![0; len],
            aux: vec![0; len],
            energy: DEFAULT_ENERGY,
            defects: UNEVALUATED,
            zeros: 0,
            hash: 0,
            born: 0,
        }
    }

    /// Number of gate words, `N` in node arithmetic.
    #[must_use]
    pub fn len(&self) -> usize {
        self.code.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// Total addressable nodes: primaries plus shadows.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.code.len() * 2
    }

    #[must_use]
    pub fn word(&self, index: usize) -> GateWord {
        GateWord(self.code[index])
    }

    pub fn words(&self) -> impl Iterator<Item = GateWord> + '_ {
        self.code.iter().copied().map(GateWord)
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.energy != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed_layout() {
        let genome = Genome::zeroed(40);
        assert_eq!(genome.len(), 45);
        assert_eq!(genome.aux.len(), 45);
        assert_eq!(genome.node_count(), 90);
        assert_eq!(genome.defects, UNEVALUATED);
        assert_eq!(genome.energy, DEFAULT_ENERGY);
        assert!(genome.code.iter().all(|&w| w == 0));
    }

    #[test]
    fn test_smallest_genome_has_padding() {
        let genome = Genome::zeroed(0);
        assert_eq!(genome.len(), GENOME_PADDING);
        assert!(!genome.is_empty());
    }
}
