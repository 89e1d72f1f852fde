//! A [`Colour`] is the display colour handed to the painting layer: three
//! gamma encoded 8-bit channels and an opacity.

use std::fmt;

use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::gamma::{self, Linear};

/// A 64-bit floating point value that all intermediate computations are
/// done in.
pub type Component = f64;

/// A display colour. Channels are always within `[0, 255]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Colour {
    /// The red intensity.
    pub red: u8,
    /// The green intensity.
    pub green: u8,
    /// The blue intensity.
    pub blue: u8,
    /// The opacity, 255 being fully opaque.
    pub alpha: u8,
}

impl Colour {
    /// Create a new [`Colour`] from its channel intensities.
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Create a new fully opaque [`Colour`].
    pub const fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, u8::MAX)
    }

    /// Gamma encode linear light intensities and clamp each channel
    /// independently into `[0, 255]`.
    pub fn from_linear(linear: Linear, alpha: u8) -> Self {
        let display = gamma::to_display_components(linear);
        Self::new(
            clamp_channel(display.x),
            clamp_channel(display.y),
            clamp_channel(display.z),
            alpha,
        )
    }

    /// Return the same colour with a different opacity.
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self { alpha, ..self }
    }

    /// The channels as `[red, green, blue]`.
    pub const fn to_rgb(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// The channels as `[red, green, blue, alpha]`.
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }
}

impl From<Colour> for [u8; 4] {
    fn from(value: Colour) -> Self {
        value.to_rgba()
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

/// NaN maps to 0.
fn clamp_channel(value: Component) -> u8 {
    num_traits::clamp(value, 0.0, 255.0).to_u8().unwrap_or(0)
}
