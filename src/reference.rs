//! The eight empirical anchor colours the hue wheel is interpolated through,
//! and the luminosity/saturation remap that moves them away from the
//! luminosity and saturation they were authored at.

use euclid::vec3;

use crate::{
    gamma::{self, Display},
    Component,
};

/// Length of the hue circle in gon.
pub const HUE_PERIOD: Component = 400.0;

/// Distance in gon between two neighbouring anchors.
pub const ANCHOR_SPACING: Component = 50.0;

/// Number of anchors around the hue circle.
pub const ANCHOR_COUNT: usize = 8;

/// Luminosity the anchors were authored at.
pub const REFERENCE_LUMINOSITY: Component = 0.55;

/// Saturation the anchors were authored at.
pub const REFERENCE_SATURATION: Component = 0.50;

/// An anchor colour at a fixed position on the hue circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReferenceColour {
    /// Position on the hue circle, in gon.
    pub hue: Component,
    /// Display intensities (red, green, blue) at [`REFERENCE_LUMINOSITY`]
    /// and [`REFERENCE_SATURATION`].
    pub display: [u8; 3],
}

impl ReferenceColour {
    const fn new(hue: Component, display: [u8; 3]) -> Self {
        Self { hue, display }
    }

    /// The anchor moved to the requested luminosity and saturation, still at
    /// its own hue position. Channels are rounded but not clamped.
    pub fn adjusted(&self, luminosity: Component, saturation: Component) -> Display {
        let [red, green, blue] = self.display.map(|channel| {
            let perception = gamma::to_perception(gamma::to_linear_light(Component::from(channel)));
            let perception = remap(perception, luminosity, saturation);
            gamma::to_display(gamma::to_intensity(perception))
        });
        vec3(red, green, blue)
    }
}

/// Red, red-blue, blue, blue-green, green, green-yellow, yellow and
/// yellow-red.
pub const REFERENCE_COLOURS: [ReferenceColour; ANCHOR_COUNT] = [
    ReferenceColour::new(0.0, [205, 101, 108]),
    ReferenceColour::new(50.0, [164, 110, 176]),
    ReferenceColour::new(100.0, [36, 149, 190]),
    ReferenceColour::new(150.0, [0, 169, 159]),
    ReferenceColour::new(200.0, [50, 166, 121]),
    ReferenceColour::new(250.0, [156, 173, 81]),
    ReferenceColour::new(300.0, [204, 173, 71]),
    ReferenceColour::new(350.0, [218, 128, 77]),
];

/// Move a perceptual channel value from the reference luminosity and
/// saturation to the requested ones.
pub fn remap(perception: Component, luminosity: Component, saturation: Component) -> Component {
    let x = perception / REFERENCE_LUMINOSITY * 0.5;
    let x = (x - 0.5 * (1.0 - REFERENCE_SATURATION)) / REFERENCE_SATURATION;
    let x = x * saturation + 0.5 * (1.0 - saturation);
    x / 0.5 * luminosity
}
