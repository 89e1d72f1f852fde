//! gonhue turns a hue in gon, a luminosity and a saturation into a display
//! colour that changes in perceptually even steps, and caches such colours
//! for activity boxes in each of their selection and hover states.
//!
//! ```rust
//! use gonhue::{ActivityColours, Colour, Config};
//!
//! let colours = ActivityColours::new(&Config::default()).unwrap();
//! let busy = colours.get_for(false, true, 0.8);
//! assert_eq!(busy.alpha, 255);
//!
//! let red = Colour::from_hue(0.0, 0.55, 0.50);
//! assert_eq!(red.to_rgb(), [205, 101, 108]);
//! ```

#![deny(missing_docs)]

mod activity;
mod colour;
mod config;
pub mod gamma;
pub mod interpolate;
mod math;
pub mod reference;

pub use activity::{ActivityColours, ActivityState, CacheTable, Interaction, StateColours};
pub use colour::{Colour, Component};
pub use config::{Config, ConfigError, LinearModel, StateConfig, DEFAULT_RESOLUTION};
pub use interpolate::{compute, normalize_hue, HueRequest};
