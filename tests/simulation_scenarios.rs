mod common;

use common::CircuitBuilder;
use gatesoup_core::rng::CircuitRng;
use gatesoup_core::simulator::{Simulator, TEST_VECTORS};
use gatesoup_data::{Polarity, CLOCK_PIN, COMPLETE_NODE, OUTPUT_NODE, PIN_A, PIN_B, POWER_PIN};
use rand::SeedableRng;

const COMPLETE: u32 = COMPLETE_NODE as u32;

#[test]
fn test_relayed_completion_on_unclocked_row() {
    // 1 1 0: A, B and the clock drive the complete line directly; power
    // reaches it through the wire at gate 6. Every HI write while the clock
    // is low is a defect, LO writes are not.
    let mut genome = CircuitBuilder::new(8)
        .wire(PIN_A, [COMPLETE, COMPLETE])
        .wire(PIN_B, [COMPLETE, COMPLETE])
        .wire(CLOCK_PIN, [COMPLETE, COMPLETE])
        .wire(POWER_PIN, [6, 6])
        .wire(6, [COMPLETE, COMPLETE])
        .energy(1000)
        .build();
    let mut rng = CircuitRng::seed_from_u64(11);
    let vector = TEST_VECTORS[7];
    assert_eq!(vector.to_string(), "110");

    Simulator::new().run_vector(&mut genome, &mut rng, &vector);

    assert_eq!(genome.defects, 8);
    // eight boundary events plus the four relayed by gate 6
    assert_eq!(genome.energy, 1000 - 12);
}

#[test]
fn test_smallest_genome_patches_pins_onto_observation_nodes() {
    // N = 5: raw node 1 is gate 1, patched to the complete line.
    let mut genome = CircuitBuilder::new(5)
        .wire(PIN_A, [1, 1])
        .wire(PIN_B, [1, 1])
        .wire(CLOCK_PIN, [1, 1])
        .wire(POWER_PIN, [1, 1])
        .energy(100)
        .build();
    let mut rng = CircuitRng::seed_from_u64(13);

    // 1 1 0: A, B and power write HI onto node 5, the clock writes LO.
    Simulator::new().run_vector(&mut genome, &mut rng, &TEST_VECTORS[7]);

    assert_eq!(genome.defects, 6);
    assert_eq!(genome.energy, 100 - 8);
}

#[test]
fn test_open_switch_never_completes() {
    // Power feeds gate 6's primary node, but its control shadow (node 14)
    // is never driven HI, so the N switch stays open and only forwards the
    // floating level.
    let mut genome = CircuitBuilder::new(8)
        .wire(PIN_A, [OUTPUT_NODE as u32, OUTPUT_NODE as u32])
        .wire(PIN_B, [OUTPUT_NODE as u32, OUTPUT_NODE as u32])
        .wire(CLOCK_PIN, [OUTPUT_NODE as u32, OUTPUT_NODE as u32])
        .wire(POWER_PIN, [6, 6])
        .switch(6, Polarity::N, [COMPLETE, COMPLETE])
        .energy(1000)
        .build();
    let mut rng = CircuitRng::seed_from_u64(12);

    // 1 1 1 must complete and fails to.
    Simulator::new().run_vector(&mut genome, &mut rng, &TEST_VECTORS[3]);

    assert_eq!(genome.defects, 1);
    assert_eq!(genome.energy, 1000 - 12);
}

#[test]
fn test_zero_energy_is_a_perfect_score() {
    let mut genome = CircuitBuilder::new(8).energy(0).build();
    genome.zeros = 4;

    let consumed = Simulator::new().evaluate(&mut genome, CircuitRng::seed_from_u64(1));

    assert_eq!(consumed, 0);
    assert_eq!(genome.defects, 0);
    assert_eq!(genome.zeros, 5);
}

#[test]
fn test_shared_noise_grades_clones_identically() {
    let noise = CircuitRng::seed_from_u64(99);
    let template = CircuitBuilder::new(8)
        .wire(PIN_A, [6, 7])
        .wire(PIN_B, [COMPLETE, 14])
        .wire(CLOCK_PIN, [COMPLETE, COMPLETE])
        .wire(POWER_PIN, [6, 15])
        .switch(6, Polarity::N, [OUTPUT_NODE as u32, 7])
        .wire(7, [COMPLETE, 1])
        .energy(2000)
        .build();

    let mut sim = Simulator::with_test_reps(16);
    let mut first = template.clone();
    let mut second = template.clone();
    let c1 = sim.evaluate(&mut first, noise);
    let c2 = gatesoup_core::simulator::evaluate(&mut second, noise);

    // the reps count differs, but the first pass is the same
    assert_eq!(c1, c2);
    assert_eq!(first.energy, second.energy);
    assert_eq!(first.energy, 2000 - c1);
}

#[test]
fn test_simulator_context_is_reusable_across_lengths() {
    let mut sim = Simulator::with_test_reps(2);
    let noise = CircuitRng::seed_from_u64(5);

    let mut short = CircuitBuilder::new(6)
        .wire(CLOCK_PIN, [COMPLETE, COMPLETE])
        .energy(500)
        .build();
    let mut long = CircuitBuilder::new(32)
        .wire(CLOCK_PIN, [COMPLETE, COMPLETE])
        .energy(500)
        .build();
    let mut short_again = short.clone();

    sim.evaluate(&mut short, noise);
    sim.evaluate(&mut long, noise);
    sim.evaluate(&mut short_again, noise);

    assert_eq!(short, short_again);
}
