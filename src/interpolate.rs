//! Hue interpolation through the reference colours.
//!
//! The reference colours are moved to the requested luminosity and
//! saturation in perceptual space, then a polynomial is fitted through the
//! four anchors around the requested hue in linear light and evaluated at
//! that hue. A local fit avoids the slope breaks a straight line between
//! two neighbouring anchors would show at every anchor.

use crate::{
    gamma::{self, Linear},
    math::{self, DEGREE},
    reference::{ANCHOR_COUNT, ANCHOR_SPACING, HUE_PERIOD, REFERENCE_COLOURS},
    Colour, Component,
};

/// Wrap a hue into `[0, 400)`.
pub fn normalize_hue(hue: Component) -> Component {
    let hue = hue.rem_euclid(HUE_PERIOD);
    // `rem_euclid` rounds tiny negative values up to the period itself.
    if hue >= HUE_PERIOD {
        hue - HUE_PERIOD
    } else {
        hue
    }
}

/// Move a normalized hue into `[450, 850)` so that every window of four
/// anchor positions around it is strictly increasing.
fn shift_hue(hue: Component) -> Component {
    let shifted = hue + HUE_PERIOD;
    if shifted < HUE_PERIOD + ANCHOR_SPACING {
        shifted + HUE_PERIOD
    } else {
        shifted
    }
}

/// Index of the first anchor of the fitting window. The shifted hue lies
/// between the second and third anchor of the window.
fn window_start(shifted: Component) -> usize {
    // Saturating cast, NaN becomes 0.
    let segment = (shifted / ANCHOR_SPACING).floor() as usize;
    (segment % ANCHOR_COUNT + ANCHOR_COUNT - 1) % ANCHOR_COUNT
}

/// Compute the display colour for a hue in gon at the given luminosity and
/// saturation.
///
/// Luminosity and saturation are expected in `[0, 1]` but are not clamped;
/// values outside extrapolate and only the final channels are clamped.
pub fn compute(
    hue: Component,
    luminosity: Component,
    saturation: Component,
    alpha: u8,
) -> Colour {
    let shifted = shift_hue(normalize_hue(hue));
    let start = window_start(shifted);

    let mut matrix = [[0.0; DEGREE]; DEGREE];
    let mut rhs = [Linear::zero(); DEGREE];
    for (k, (row, value)) in matrix.iter_mut().zip(rhs.iter_mut()).enumerate() {
        let position = HUE_PERIOD + (start + k) as Component * ANCHOR_SPACING;
        let anchor = &REFERENCE_COLOURS[(start + k) % ANCHOR_COUNT];
        *row = math::power_row(position);
        *value = gamma::to_linear_components(anchor.adjusted(luminosity, saturation));
    }

    let coefficients = math::eliminate(matrix, rhs);

    tracing::trace!(hue, luminosity, saturation, start, "interpolating hue");

    Colour::from_linear(math::evaluate(&coefficients, shifted), alpha)
}

/// A request for a colour on the hue wheel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HueRequest {
    /// Hue in gon, any range.
    pub hue: Component,
    /// Luminosity in `[0, 1]`.
    pub luminosity: Component,
    /// Saturation in `[0, 1]`.
    pub saturation: Component,
}

impl HueRequest {
    /// Create a new request.
    pub fn new(hue: Component, luminosity: Component, saturation: Component) -> Self {
        Self {
            hue,
            luminosity,
            saturation,
        }
    }

    /// The fully opaque colour for this request.
    pub fn colour(&self) -> Colour {
        self.colour_with_alpha(u8::MAX)
    }

    /// The colour for this request with the given opacity.
    pub fn colour_with_alpha(&self, alpha: u8) -> Colour {
        compute(self.hue, self.luminosity, self.saturation, alpha)
    }
}

impl Colour {
    /// Interpolate a fully opaque colour from the hue wheel.
    pub fn from_hue(hue: Component, luminosity: Component, saturation: Component) -> Self {
        compute(hue, luminosity, saturation, u8::MAX)
    }
}
