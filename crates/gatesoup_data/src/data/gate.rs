use serde::{Deserialize, Serialize};

/// Mask for one 31-bit target address.
pub const ADDRESS_MASK: u64 = (1 << 31) - 1;

const POLARITY_BIT: u64 = 0b01;
const WIRE_BIT: u64 = 0b10;
const FIRST_TARGET_SHIFT: u32 = 2;
const SECOND_TARGET_SHIFT: u32 = 33;

/// Switch polarity carried in bit 0 of a gate word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    /// Conducts while its control node is LO.
    P,
    /// Conducts while its control node is HI.
    N,
}

/// Decoded form of one gate word.
///
/// Targets are raw 31-bit addresses; callers reduce them into the node range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gate {
    /// Forwards its own level unchanged to both targets.
    Wire { targets: [u32; 2] },
    /// Controlled switch gated by the gate's shadow node.
    Switch {
        polarity: Polarity,
        targets: [u32; 2],
    },
}

impl Gate {
    #[must_use]
    pub fn targets(&self) -> [u32; 2] {
        match *self {
            Gate::Wire { targets } | Gate::Switch { targets, .. } => targets,
        }
    }

    /// Single-letter tag used in circuit listings.
    #[must_use]
    pub fn tag(&self) -> char {
        match self {
            Gate::Wire { .. } => 'W',
            Gate::Switch {
                polarity: Polarity::P,
                ..
            } => 'P',
            Gate::Switch {
                polarity: Polarity::N,
                ..
            } => 'N',
        }
    }
}

/// Bit-packed gate descriptor as stored in a genome.
///
/// Layout: bit 0 polarity (1 = P), bit 1 wire flag, bits 2..=32 first target,
/// bits 33..=63 second target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GateWord(pub u64);

impl GateWord {
    #[must_use]
    pub fn is_wire(self) -> bool {
        self.0 & WIRE_BIT != 0
    }

    #[must_use]
    pub fn polarity(self) -> Polarity {
        if self.0 & POLARITY_BIT != 0 {
            Polarity::P
        } else {
            Polarity::N
        }
    }

    #[must_use]
    pub fn first_target(self) -> u32 {
        ((self.0 >> FIRST_TARGET_SHIFT) & ADDRESS_MASK) as u32
    }

    #[must_use]
    pub fn second_target(self) -> u32 {
        (self.0 >> SECOND_TARGET_SHIFT) as u32
    }

    #[must_use]
    pub fn decode(self) -> Gate {
        let targets = [self.first_target(), self.second_target()];
        if self.is_wire() {
            Gate::Wire { targets }
        } else {
            Gate::Switch {
                polarity: self.polarity(),
                targets,
            }
        }
    }

    /// Packs a gate back into its storage word. Addresses wider than 31 bits
    /// are truncated.
    #[must_use]
    pub fn encode(gate: Gate) -> Self {
        let [t1, t2] = gate.targets();
        let mut word = ((u64::from(t2) & ADDRESS_MASK) << SECOND_TARGET_SHIFT)
            | ((u64::from(t1) & ADDRESS_MASK) << FIRST_TARGET_SHIFT);
        match gate {
            Gate::Wire { .. } => word |= WIRE_BIT,
            Gate::Switch {
                polarity: Polarity::P,
                ..
            } => word |= POLARITY_BIT,
            Gate::Switch {
                polarity: Polarity::N,
                ..
            } => {}
        }
        Self(word)
    }
}

impl From<u64> for GateWord {
    fn from(word: u64) -> Self {
        Self(word)
    }
}

impl From<GateWord> for u64 {
    fn from(word: GateWord) -> Self {
        word.0
    }
}
