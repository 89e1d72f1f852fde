//! Colours for activity boxes.
//!
//! Every [`ActivityState`] owns a fixed hue, a luminosity and a saturation
//! model and a [`CacheTable`]. Activity in `[0, 1]` is discretized into a
//! table slot; each slot is computed on first use and kept until the
//! configuration changes.

use std::{fmt, num::NonZeroUsize, sync::OnceLock};

use bitflags::bitflags;

use crate::{
    config::{Config, ConfigError, LinearModel, StateConfig},
    interpolate, Colour, Component,
};

bitflags! {
    /// How the user is interacting with a painted element.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Interaction : u8 {
        /// Set when the pointer is over the element.
        const HOVERED = 1 << 0;
        /// Set when the element is selected.
        const SELECTED = 1 << 1;
    }
}

impl Interaction {
    /// Build the flags from the two booleans the painter tracks.
    pub fn new(selected: bool, hovered: bool) -> Self {
        let mut flags = Self::empty();
        flags.set(Self::SELECTED, selected);
        flags.set(Self::HOVERED, hovered);
        flags
    }
}

/// The four selection and hover combinations an activity box can be in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ActivityState {
    /// Not selected, not hovered.
    Normal = 0,
    /// Not selected, hovered.
    NormalHover = 1,
    /// Selected, not hovered.
    Selected = 2,
    /// Selected and hovered.
    SelectedHover = 3,
}

impl ActivityState {
    /// Every state, in table order.
    pub const ALL: [Self; 4] = [
        Self::Normal,
        Self::NormalHover,
        Self::Selected,
        Self::SelectedHover,
    ];

    /// Select the state for a selection and hover flag.
    pub fn new(selected: bool, hovered: bool) -> Self {
        match (selected, hovered) {
            (false, false) => Self::Normal,
            (false, true) => Self::NormalHover,
            (true, false) => Self::Selected,
            (true, true) => Self::SelectedHover,
        }
    }

    /// Select the state for a set of interaction flags.
    pub fn from_interaction(interaction: Interaction) -> Self {
        Self::new(
            interaction.contains(Interaction::SELECTED),
            interaction.contains(Interaction::HOVERED),
        )
    }

    /// The interaction flags this state stands for.
    pub fn interaction(self) -> Interaction {
        match self {
            Self::Normal => Interaction::empty(),
            Self::NormalHover => Interaction::HOVERED,
            Self::Selected => Interaction::SELECTED,
            Self::SelectedHover => Interaction::SELECTED | Interaction::HOVERED,
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    /// A short name, as used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::NormalHover => "normal-hover",
            Self::Selected => "selected",
            Self::SelectedHover => "selected-hover",
        }
    }
}

impl From<Interaction> for ActivityState {
    fn from(value: Interaction) -> Self {
        Self::from_interaction(value)
    }
}

impl fmt::Display for ActivityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A fixed number of lazily filled colour slots.
///
/// Each slot is written at most once; if two threads race on an empty slot
/// the first write wins and both observe it.
#[derive(Debug)]
pub struct CacheTable {
    slots: Box<[OnceLock<Colour>]>,
}

impl CacheTable {
    /// Create an empty table with `resolution` slots.
    pub fn new(resolution: NonZeroUsize) -> Self {
        Self {
            slots: (0..resolution.get()).map(|_| OnceLock::new()).collect(),
        }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always `false`, a table has at least one slot.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The slot for an activity: `floor(activity * (len - 1))` clamped to
    /// the table. NaN maps to the first slot.
    pub fn index_of(&self, activity: Component) -> usize {
        let last = self.len() - 1;
        let scaled = (activity * last as Component).floor();
        if scaled.is_nan() || scaled <= 0.0 {
            0
        } else if scaled >= last as Component {
            last
        } else {
            scaled as usize
        }
    }

    /// The model input for a slot, `index / len`, in `[0, 1)`.
    pub fn x_of(&self, index: usize) -> Component {
        index as Component / self.len() as Component
    }

    /// The colour stored in a slot, if it was computed already.
    pub fn get(&self, index: usize) -> Option<Colour> {
        self.slots.get(index).and_then(|slot| slot.get().copied())
    }

    /// Return the colour for an activity, computing it with `compute` from
    /// the slot's model input when the slot is empty.
    pub fn get_or_compute(
        &self,
        activity: Component,
        compute: impl FnOnce(usize, Component) -> Colour,
    ) -> Colour {
        let index = self.index_of(activity);
        *self.slots[index].get_or_init(|| compute(index, self.x_of(index)))
    }

    /// Number of slots computed so far.
    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|slot| slot.get().is_some()).count()
    }

    /// Empty every slot.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            slot.take();
        }
    }
}

/// One state's parameters and its cache.
#[derive(Debug)]
pub struct StateColours {
    state: ActivityState,
    hue: Component,
    luminosity: LinearModel,
    saturation: LinearModel,
    table: CacheTable,
}

impl StateColours {
    fn new(state: ActivityState, config: &StateConfig, resolution: NonZeroUsize) -> Self {
        Self {
            state,
            hue: config.hue,
            luminosity: config.luminosity,
            saturation: config.saturation,
            table: CacheTable::new(resolution),
        }
    }

    /// The state these colours are for.
    pub fn state(&self) -> ActivityState {
        self.state
    }

    /// The fixed hue of this state, in gon.
    pub fn hue(&self) -> Component {
        self.hue
    }

    /// The cache backing this state.
    pub fn table(&self) -> &CacheTable {
        &self.table
    }

    /// Luminosity and saturation for a model input, both clamped to
    /// `[0, 1]`.
    pub fn luminosity_saturation(&self, x: Component) -> (Component, Component) {
        (
            self.luminosity.at(x).clamp(0.0, 1.0),
            self.saturation.at(x).clamp(0.0, 1.0),
        )
    }

    /// The colour for a model input, bypassing the cache.
    pub fn colour_at(&self, x: Component) -> Colour {
        let (luminosity, saturation) = self.luminosity_saturation(x);
        interpolate::compute(self.hue, luminosity, saturation, u8::MAX)
    }

    /// The colour for an activity in `[0, 1]`. Activity outside the range
    /// is clamped to the first or last slot.
    pub fn get(&self, activity: Component) -> Colour {
        self.table.get_or_compute(activity, |index, x| {
            tracing::trace!(state = %self.state, index, "filling activity colour slot");
            self.colour_at(x)
        })
    }
}

/// Activity colours for all four states.
///
/// Build once from a [`Config`] and share by reference; lookups take
/// `&self` and the type is `Sync`.
#[derive(Debug)]
pub struct ActivityColours {
    states: [StateColours; 4],
}

impl ActivityColours {
    /// Validate `config` and build empty caches for every state.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let resolution = NonZeroUsize::new(config.resolution).ok_or(ConfigError::ZeroResolution)?;

        tracing::debug!(
            resolution = resolution.get(),
            normal = config.normal.hue,
            normal_hover = config.normal_hover.hue,
            selected = config.selected.hue,
            selected_hover = config.selected_hover.hue,
            "building activity colour tables"
        );

        Ok(Self {
            states: ActivityState::ALL
                .map(|state| StateColours::new(state, config.state(state), resolution)),
        })
    }

    /// The colour for an activity in the given state.
    pub fn get(&self, state: ActivityState, activity: Component) -> Colour {
        self.state(state).get(activity)
    }

    /// The colour for an activity of an element with the given selection and
    /// hover flags.
    pub fn get_for(&self, selected: bool, hovered: bool, activity: Component) -> Colour {
        self.get(ActivityState::new(selected, hovered), activity)
    }

    /// The colour for an activity of an element with the given interaction
    /// flags.
    pub fn get_interaction(&self, interaction: Interaction, activity: Component) -> Colour {
        self.get(interaction.into(), activity)
    }

    /// The colours of one state.
    pub fn state(&self, state: ActivityState) -> &StateColours {
        &self.states[state.index()]
    }

    /// Number of slots per state.
    pub fn resolution(&self) -> usize {
        self.states[0].table.len()
    }

    /// Replace every state's parameters and drop all cached colours. On
    /// error nothing changes.
    pub fn reconfigure(&mut self, config: &Config) -> Result<(), ConfigError> {
        *self = Self::new(config)?;
        Ok(())
    }

    /// Drop all cached colours, keeping the parameters.
    pub fn clear(&mut self) {
        for state in self.states.iter_mut() {
            state.table.clear();
        }
    }
}
