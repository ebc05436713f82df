//! The eight input rows the circuit is graded against.
//!
//! The target is an asynchronous AND gate. With the clock HI the circuit
//! must eventually raise the complete line (node 5) and, while it is raised,
//! show `A AND B` on the output line (node 4). With the clock LO the complete
//! line must stay down.

use super::signal::{is_hi, HI, LO};

/// One row of the truth table. Power is always HI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestVector {
    pub a: bool,
    pub b: bool,
    pub clock: bool,
}

/// Evaluation order: clock-HI rows first, then clock-LO rows.
pub const TEST_VECTORS: [TestVector; 8] = [
    TestVector::new(false, false, true),
    TestVector::new(false, true, true),
    TestVector::new(true, false, true),
    TestVector::new(true, true, true),
    TestVector::new(false, false, false),
    TestVector::new(false, true, false),
    TestVector::new(true, false, false),
    TestVector::new(true, true, false),
];

const fn level(bit: bool) -> f32 {
    if bit {
        HI
    } else {
        LO
    }
}

impl TestVector {
    #[must_use]
    pub const fn new(a: bool, b: bool, clock: bool) -> Self {
        Self { a, b, clock }
    }

    /// Levels driven onto pins A, B, clock and power.
    #[must_use]
    pub const fn pin_levels(&self) -> [f32; 4] {
        [level(self.a), level(self.b), level(self.clock), HI]
    }

    #[must_use]
    pub const fn expected_output(&self) -> bool {
        self.a && self.b
    }

    #[must_use]
    pub const fn must_complete(&self) -> bool {
        self.clock
    }

    /// Defects caused by a write to an observation node, given the levels of
    /// the output and complete lines after the write.
    ///
    /// A clocked row is checked from both lines, so one bad write costs two.
    #[must_use]
    pub fn observation_defects(&self, output: f32, complete: f32) -> u64 {
        if !is_hi(complete) {
            return 0;
        }
        if !self.clock {
            return 1;
        }
        if is_hi(output) != self.expected_output() {
            2
        } else {
            0
        }
    }

    /// Defects charged when a run ends.
    #[must_use]
    pub fn completion_defects(&self, complete: f32) -> u64 {
        u64::from(self.must_complete() && !is_hi(complete))
    }
}

impl std::fmt::Display for TestVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}",
            u8::from(self.a),
            u8::from(self.b),
            u8::from(self.clock)
        )
    }
}
