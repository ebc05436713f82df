//! Voltage levels and switch conduction.
//!
//! Lo: 0.0 - 0.3, floating: 0.3 - 0.7, Hi: 0.7 - 1.0.

use gatesoup_data::Polarity;

/// Level driven onto a LO boundary pin.
pub const LO: f32 = 0.1;
/// Level driven onto a HI boundary pin.
pub const HI: f32 = 1.0;
/// Upper edge of the LO band.
pub const LO_BAND: f32 = 0.3;
/// Lower edge of the HI band.
pub const HI_BAND: f32 = 0.7;
/// Level forwarded when a switch is open or its source is floating.
pub const FLOATING: f32 = 0.1;
/// Scale for the level a switch passes cleanly.
pub const SMALL_LOSS: f32 = 0.95;
/// Scale for the level a switch passes poorly.
pub const LARGE_LOSS: f32 = 0.75;

pub const MIN_DELAY: f32 = 0.5;
pub const MAX_DELAY: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Lo,
    Floating,
    Hi,
}

impl Band {
    #[inline]
    #[must_use]
    pub fn of(level: f32) -> Self {
        if level < LO_BAND {
            Band::Lo
        } else if level > HI_BAND {
            Band::Hi
        } else {
            Band::Floating
        }
    }
}

#[inline]
#[must_use]
pub fn is_hi(level: f32) -> bool {
    level > HI_BAND
}

/// Level a switch forwards given its control and source levels.
///
/// P-type closes on a LO control and passes HI with the small loss; N-type
/// closes on a HI control and passes LO with the small loss. An open switch,
/// a floating control or a floating source all forward `FLOATING`.
#[must_use]
pub fn switch_output(polarity: Polarity, control: f32, source: f32) -> f32 {
    let closed = match polarity {
        Polarity::P => Band::of(control) == Band::Lo,
        Polarity::N => Band::of(control) == Band::Hi,
    };
    if !closed {
        return FLOATING;
    }

    match (polarity, Band::of(source)) {
        (_, Band::Floating) => FLOATING,
        (Polarity::P, Band::Hi) | (Polarity::N, Band::Lo) => source * SMALL_LOSS,
        (Polarity::P, Band::Lo) | (Polarity::N, Band::Hi) => source * LARGE_LOSS,
    }
}
