use gatesoup_core::rng::CircuitRng;
use proptest::prelude::*;
use rand::{RngCore, SeedableRng};

proptest! {
    #[test]
    fn test_same_seed_same_stream(seed in any::<u64>()) {
        let mut a = CircuitRng::seed_from_u64(seed);
        let mut b = CircuitRng::seed_from_u64(seed);
        for _ in 0..64 {
            prop_assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_unit_floats_stay_in_range(seed in any::<u64>()) {
        let mut rng = CircuitRng::seed_from_u64(seed);
        for _ in 0..256 {
            let x = rng.next_unit_f32();
            prop_assert!((0.0..1.0).contains(&x));
            let d = rng.uniform(0.5, 4.0);
            prop_assert!((0.5..4.0).contains(&d));
        }
    }

    #[test]
    fn test_below_respects_bound(seed in any::<u64>(), bound in 1u64..10_000) {
        let mut rng = CircuitRng::seed_from_u64(seed);
        for _ in 0..64 {
            prop_assert!(rng.below(bound) < bound);
        }
    }
}

#[test]
fn test_copies_fork_identical_streams() {
    let mut rng = CircuitRng::seed_from_u64(77);
    rng.next_u64();
    let mut fork = rng;
    let mut bytes_a = [0u8; 37];
    let mut bytes_b = [0u8; 37];
    rng.fill_bytes(&mut bytes_a);
    fork.fill_bytes(&mut bytes_b);
    assert_eq!(bytes_a, bytes_b);
    assert_eq!(rng.state(), fork.state());
}
