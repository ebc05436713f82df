use crate::rng::CircuitRng;
use gatesoup_data::Genome;

/// Fills `code` and `aux` with fresh draws. Bit 0 of each gate word gets its
/// own fair coin so polarity is balanced regardless of the word draw.
pub fn randomize(genome: &mut Genome, rng: &mut CircuitRng) {
    for (word, aux) in genome.code.iter_mut().zip(genome.aux.iter_mut()) {
        *word = rng.next_u64() & !1;
        if rng.below(2) == 0 {
            *word |= 1;
        }
        *aux = rng.next_u64();
    }
    genome.zeros = 0;
    genome.hash = super::structural_hash(genome);
}

/// Per word: one uniform draw `r`. `r < point_rate` flips the polarity bit,
/// `r < burst_rate` also flips one of bits 1..=63. Every `aux` word gets one
/// random bit flipped unconditionally.
pub fn mutate(genome: &mut Genome, rng: &mut CircuitRng, point_rate: f32, burst_rate: f32) {
    for (word, aux) in genome.code.iter_mut().zip(genome.aux.iter_mut()) {
        let r = rng.next_unit_f32();
        if r < point_rate {
            *word ^= 1;
        }
        if r < burst_rate {
            *word ^= 2 << rng.below(63);
        }
        *aux ^= 1 << rng.below(64);
    }
    genome.zeros = 0;
    genome.hash = super::structural_hash(genome);
}
