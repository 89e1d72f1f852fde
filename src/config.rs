//! Parameters for the activity colours: one hue and one linear luminosity
//! and saturation model per [`ActivityState`], and the cache resolution.
//!
//! ```rust
//! use gonhue::Config;
//! let config = Config::from_json_str(r#"{ "resolution": 256, "selected": { "hue": 300 } }"#)
//!     .unwrap();
//! assert_eq!(config.resolution, 256);
//! assert_eq!(config.selected.hue, 300.0);
//! assert_eq!(config.normal.hue, 85.0);
//! ```

use std::{
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{ActivityState, Component};

/// Number of cache slots per state when not configured.
pub const DEFAULT_RESOLUTION: usize = 1024;

/// Errors detected while loading or validating a [`Config`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The cache needs at least one slot.
    #[error("cache resolution must be at least 1")]
    ZeroResolution,

    /// A hue, intercept or slope is NaN or infinite.
    #[error("{state} {field} must be finite, got {value}")]
    NonFinite {
        /// State the offending value belongs to.
        state: ActivityState,
        /// Name of the offending value.
        field: &'static str,
        /// The offending value.
        value: Component,
    },

    /// The configuration is not valid JSON for a [`Config`].
    #[error("invalid configuration")]
    Parse(#[from] serde_json::Error),

    /// The configuration file could not be read.
    #[error("cannot read configuration file {path}")]
    Io {
        /// Path of the file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// `intercept + slope * x`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    /// Value at `x = 0`.
    pub intercept: Component,
    /// Change per unit of `x`.
    pub slope: Component,
}

impl LinearModel {
    /// Create a new model.
    pub const fn new(intercept: Component, slope: Component) -> Self {
        Self { intercept, slope }
    }

    /// Evaluate the model at `x`.
    pub fn at(&self, x: Component) -> Component {
        self.intercept + self.slope * x
    }
}

/// Parameters of a single [`ActivityState`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateConfig {
    /// Hue in gon.
    pub hue: Component,
    /// Luminosity as a function of activity.
    pub luminosity: LinearModel,
    /// Saturation as a function of activity.
    pub saturation: LinearModel,
}

impl StateConfig {
    /// A state with the given hue and the default luminosity and saturation
    /// models.
    pub const fn with_hue(hue: Component) -> Self {
        Self {
            hue,
            luminosity: LinearModel::new(0.75, -0.20),
            saturation: LinearModel::new(0.025, 0.475),
        }
    }

    fn validate(&self, state: ActivityState) -> Result<(), ConfigError> {
        let fields = [
            ("hue", self.hue),
            ("luminosity intercept", self.luminosity.intercept),
            ("luminosity slope", self.luminosity.slope),
            ("saturation intercept", self.saturation.intercept),
            ("saturation slope", self.saturation.slope),
        ];

        match fields.into_iter().find(|(_, value)| !value.is_finite()) {
            Some((field, value)) => Err(ConfigError::NonFinite {
                state,
                field,
                value,
            }),
            None => Ok(()),
        }
    }
}

impl Default for StateConfig {
    fn default() -> Self {
        Self::with_hue(85.0)
    }
}

/// The full set of activity colour parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of cache slots per state.
    pub resolution: usize,
    /// Not selected, not hovered.
    pub normal: StateConfig,
    /// Not selected, hovered.
    pub normal_hover: StateConfig,
    /// Selected, not hovered.
    pub selected: StateConfig,
    /// Selected and hovered.
    pub selected_hover: StateConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            normal: StateConfig::with_hue(85.0),
            normal_hover: StateConfig::with_hue(85.0 + 50.0),
            selected: StateConfig::with_hue(285.0),
            selected_hover: StateConfig::with_hue(285.0 - 50.0),
        }
    }
}

impl Config {
    /// Parameters of one state.
    pub fn state(&self, state: ActivityState) -> &StateConfig {
        match state {
            ActivityState::Normal => &self.normal,
            ActivityState::NormalHover => &self.normal_hover,
            ActivityState::Selected => &self.selected,
            ActivityState::SelectedHover => &self.selected_hover,
        }
    }

    /// Mutable parameters of one state.
    pub fn state_mut(&mut self, state: ActivityState) -> &mut StateConfig {
        match state {
            ActivityState::Normal => &mut self.normal,
            ActivityState::NormalHover => &mut self.normal_hover,
            ActivityState::Selected => &mut self.selected,
            ActivityState::SelectedHover => &mut self.selected_hover,
        }
    }

    /// Check that the resolution is non-zero and every hue and model
    /// parameter is finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolution == 0 {
            return Err(ConfigError::ZeroResolution);
        }
        ActivityState::ALL
            .into_iter()
            .try_for_each(|state| self.state(state).validate(state))
    }

    /// Parse and validate a JSON configuration. Missing fields take their
    /// default values.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON configuration from a reader.
    pub fn from_json_reader(reader: impl Read) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(?path, "loading activity colour configuration");
        Self::from_json_reader(BufReader::new(file))
    }
}
