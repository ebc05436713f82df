use crate::error::{CoreError, Result};
use crate::rng::CircuitRng;
use gatesoup_data::Genome;

/// One-point crossover of `code`.
///
/// A coin picks which parent supplies the prefix, then a split `x` in
/// `[0, N)`; `child.code[..x]` comes from that parent and the rest from the
/// other. `child.aux` and `child.hash` are left as they were.
pub fn crossover(child: &mut Genome, a: &Genome, b: &Genome, rng: &mut CircuitRng) -> Result<()> {
    let len = a.len();
    for found in [b.len(), child.len()] {
        if found != len {
            return Err(CoreError::LengthMismatch {
                expected: len,
                found,
            });
        }
    }

    let a_first = rng.next_u64() & 1 == 1;
    let split = rng.below(len as u64) as usize;
    let (head, tail) = if a_first { (a, b) } else { (b, a) };

    child.code[..split].copy_from_slice(&head.code[..split]);
    child.code[split..].copy_from_slice(&tail.code[split..]);
    child.zeros = 0;
    Ok(())
}

/// Clonal copy of `code` and `aux`. The fingerprint is recomputed, since a
/// crossover parent may still carry a stale one.
pub fn replicate(child: &mut Genome, parent: &Genome) {
    child.code.clone_from(&parent.code);
    child.aux.clone_from(&parent.aux);
    child.hash = super::structural_hash(child);
    child.zeros = 0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genetics::{create, randomize, structural_hash};
    use rand::SeedableRng;

    fn parents(rng: &mut CircuitRng) -> (Genome, Genome) {
        let mut a = create(20).unwrap();
        let mut b = create(20).unwrap();
        randomize(&mut a, rng);
        randomize(&mut b, rng);
        (a, b)
    }

    #[test]
    fn test_child_is_prefix_plus_suffix() {
        let mut rng = CircuitRng::seed_from_u64(10);
        let (a, b) = parents(&mut rng);
        for _ in 0..50 {
            let mut child = create(20).unwrap();
            crossover(&mut child, &a, &b, &mut rng).unwrap();
            let n = child.len();
            let splits = (0..n).filter(|&x| {
                let ab = child.code[..x] == a.code[..x] && child.code[x..] == b.code[x..];
                let ba = child.code[..x] == b.code[..x] && child.code[x..] == a.code[x..];
                ab || ba
            });
            assert!(splits.count() >= 1);
        }
    }

    #[test]
    fn test_crossover_keeps_aux_and_hash() {
        let mut rng = CircuitRng::seed_from_u64(11);
        let (a, b) = parents(&mut rng);
        let mut child = create(20).unwrap();
        child.aux = vec![42; child.len()];
        child.hash = 7;
        child.zeros = 9;

        crossover(&mut child, &a, &b, &mut rng).unwrap();

        assert_eq!(child.aux, vec![42; 25]);
        assert_eq!(child.hash, 7);
        assert_eq!(child.zeros, 0);
        assert_eq!(child.len(), 25);
    }

    #[test]
    fn test_crossover_rejects_mismatched_lengths() {
        let mut rng = CircuitRng::seed_from_u64(12);
        let (a, _) = parents(&mut rng);
        let b = create(3).unwrap();
        let mut child = create(20).unwrap();
        let err = crossover(&mut child, &a, &b, &mut rng).unwrap_err();
        assert_eq!(
            err,
            CoreError::LengthMismatch {
                expected: 25,
                found: 8
            }
        );
    }

    #[test]
    fn test_clone_of_crossover_child_gets_fresh_hash() {
        let mut rng = CircuitRng::seed_from_u64(14);
        let (a, b) = parents(&mut rng);
        let mut crossed = create(20).unwrap();
        crossover(&mut crossed, &a, &b, &mut rng).unwrap();
        assert_eq!(crossed.hash, 0);

        let mut clone = create(20).unwrap();
        replicate(&mut clone, &crossed);

        assert_eq!(clone.code, crossed.code);
        assert_eq!(clone.hash, structural_hash(&crossed));
    }

    #[test]
    fn test_replicate_is_verbatim() {
        let mut rng = CircuitRng::seed_from_u64(13);
        let (a, _) = parents(&mut rng);
        let mut child = create(20).unwrap();
        child.zeros = 4;
        replicate(&mut child, &a);
        assert_eq!(child.code, a.code);
        assert_eq!(child.aux, a.aux);
        assert_eq!(child.hash, structural_hash(&child));
        assert_eq!(child.zeros, 0);
    }
}
