//! Gamma encoding and decoding, and the square root perception transform.

use euclid::{vec3, Vector3D};

use crate::Component;

/// Unit tag for gamma encoded display intensities in `[0, 255]`.
#[derive(Clone, Copy, Debug)]
pub struct GammaEncoded;

/// Unit tag for linear light intensities in `[0, 1]`.
#[derive(Clone, Copy, Debug)]
pub struct LinearLight;

/// Red, green and blue in linear light.
pub type Linear = Vector3D<Component, LinearLight>;

/// Red, green and blue as (unclamped) display intensities.
pub type Display = Vector3D<Component, GammaEncoded>;

/// Exponent applied to `value / 255` when decoding a display intensity.
#[allow(clippy::excessive_precision)]
pub const DECODE_EXPONENT: Component = 2.273943909;

/// Exponent applied to a linear intensity when encoding it for display.
#[allow(clippy::excessive_precision)]
pub const ENCODE_EXPONENT: Component = 0.439764585;

/// Convert a display intensity in `[0, 255]` to linear light.
pub fn to_linear_light(display: Component) -> Component {
    if display == 0.0 {
        0.0
    } else {
        (display / 255.0).powf(DECODE_EXPONENT)
    }
}

/// Convert a linear light intensity to a display intensity, rounded to the
/// nearest integer but not clamped.
pub fn to_display(linear: Component) -> Component {
    if linear <= 0.0 {
        0.0
    } else {
        (0.5 + 255.0 * linear.powf(ENCODE_EXPONENT)).floor()
    }
}

/// Linear perception from linear intensity.
pub fn to_perception(intensity: Component) -> Component {
    intensity.sqrt()
}

/// Linear intensity from linear perception.
pub fn to_intensity(perception: Component) -> Component {
    perception * perception
}

/// Decode a whole display triple.
pub fn to_linear_components(display: Display) -> Linear {
    vec3(
        to_linear_light(display.x),
        to_linear_light(display.y),
        to_linear_light(display.z),
    )
}

/// Encode a whole linear triple.
pub fn to_display_components(linear: Linear) -> Display {
    vec3(
        to_display(linear.x),
        to_display(linear.y),
        to_display(linear.z),
    )
}
