use gatesoup_data::Genome;
use std::fmt::Write;

/// Cheap identity fingerprint over `code`.
///
/// Each word toggles bit `word % 61` and one of the top three bits,
/// `61 + word % 3`. Collisions are expected; this is a similarity hint, not
/// an identity proof.
#[must_use]
pub fn structural_hash(genome: &Genome) -> u64 {
    genome.code.iter().fold(0u64, |hash, &word| {
        hash ^ (1 << (word % 61)) ^ ((1 << 61) << (word % 3))
    })
}

/// One line per gate: `<W|P|N> : <index> -> <a|s>.<t1 mod N> <a|s>.<t2 mod N>`.
///
/// `a` marks a raw address inside the primary range, `s` one that aliases
/// into the shadow range.
#[must_use]
pub fn dump(genome: &Genome) -> String {
    let n = genome.len() as u64;
    let mut out = String::with_capacity(genome.len() * 24);
    for (i, word) in genome.words().enumerate() {
        let gate = word.decode();
        let [t1, t2] = gate.targets().map(u64::from);
        let _ = writeln!(
            out,
            "{} : {} -> {}.{} {}.{}",
            gate.tag(),
            i,
            region(t1, n),
            t1 % n,
            region(t2, n),
            t2 % n
        );
    }
    out
}

fn region(address: u64, n: u64) -> char {
    if address < n {
        'a'
    } else {
        's'
    }
}
