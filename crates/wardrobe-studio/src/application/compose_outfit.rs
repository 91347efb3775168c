//! ComposeOutfit use case: one outfit-editing session.
//!
//! An [`OutfitSession`] owns the layer set for the lifetime of the editor.
//! It is filled from the backend catalog through a [`CatalogSource`], mutated
//! by user commands ([`OutfitCommand`]), and told about the rendered layout
//! through connectivity checks that keep the liveliness indicator in sync.
//!
//! # Architecture
//!
//! The session depends only on the [`CatalogSource`] trait and on
//! `wardrobe_core` domain types.  The random source is injected at
//! construction time so tests can pin every random pick.
//!
//! The session is not shared between tasks: the task driving the editor owns
//! it, so layer mutations and connectivity checks are naturally serialized.

use std::str::FromStr;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info, warn};
use wardrobe_core::{
    ClothingCategory, ClothingItem, ClothingItemPosition, ConnectivityDetector,
    ConnectivityState, IndicatorState, LayerError, LayerStyle, LivelinessIndicator,
    OutfitLayerSet, OutfitSelection, RandomSource, DEFAULT_TOLERANCE, DEFAULT_VARIATIONS,
};

/// Error returned by a [`CatalogSource`].
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    /// The feed could not be reached or read.
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
    /// The feed answered with data that is not a list of clothing items.
    #[error("catalog malformed: {0}")]
    Malformed(String),
}

/// Error type for the compose-outfit use case.
#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error(transparent)]
    Layer(#[from] LayerError),
    #[error("catalog refresh failed: {0}")]
    Catalog(#[from] CatalogError),
}

/// Error returned when an [`OutfitCommand`] cannot be parsed.
#[derive(Debug, Error, PartialEq)]
#[error("invalid outfit command {input:?}: {reason}")]
pub struct CommandParseError {
    pub input: String,
    pub reason: String,
}

/// Supplies the user's clothing items.
///
/// The production implementation reads a JSON export; a hosted backend
/// adapter would implement the same trait.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetches the complete, current catalog.
    async fn fetch_items(&self) -> Result<Vec<ClothingItem>, CatalogError>;
}

/// A user action in the outfit editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutfitCommand {
    /// Pick a random item in every non-empty layer.
    Randomize,
    /// Deselect every layer.
    Clear,
    /// Cycle one layer forward.
    Next(ClothingCategory),
    /// Cycle one layer backward.
    Previous(ClothingCategory),
}

impl FromStr for OutfitCommand {
    type Err = CommandParseError;

    /// Parses `random`, `clear`, `next:<category>` or `prev:<category>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = |reason: &str| CommandParseError {
            input: s.to_string(),
            reason: reason.to_string(),
        };
        let (verb, arg) = match s.split_once(':') {
            Some((verb, arg)) => (verb.trim(), Some(arg)),
            None => (s.trim(), None),
        };
        let category = |arg: Option<&str>| -> Result<ClothingCategory, CommandParseError> {
            let arg = arg.ok_or_else(|| err("missing category"))?;
            arg.parse().map_err(|e: wardrobe_core::UnknownCategory| err(&e.to_string()))
        };
        match verb.to_ascii_lowercase().as_str() {
            "random" | "randomize" if arg.is_none() => Ok(OutfitCommand::Randomize),
            "clear" if arg.is_none() => Ok(OutfitCommand::Clear),
            "next" => Ok(OutfitCommand::Next(category(arg)?)),
            "prev" | "previous" => Ok(OutfitCommand::Previous(category(arg)?)),
            "random" | "randomize" | "clear" => Err(err("command takes no argument")),
            _ => Err(err("unknown command")),
        }
    }
}

/// Construction parameters for an [`OutfitSession`].
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSettings {
    /// Presentation overrides for individual layers.
    pub layer_styles: Vec<LayerStyle>,
    /// Touching tolerance for connectivity checks.
    pub tolerance: f64,
    pub alive_variations: usize,
    pub dead_variations: usize,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            layer_styles: Vec::new(),
            tolerance: DEFAULT_TOLERANCE,
            alive_variations: DEFAULT_VARIATIONS,
            dead_variations: DEFAULT_VARIATIONS,
        }
    }
}

/// One outfit-editing session.
pub struct OutfitSession {
    layers: OutfitLayerSet,
    detector: ConnectivityDetector,
    indicator: LivelinessIndicator,
    rng: Box<dyn RandomSource + Send>,
}

impl std::fmt::Debug for OutfitSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutfitSession")
            .field("layers", &self.layers)
            .field("detector", &self.detector)
            .field("indicator", &self.indicator)
            .finish_non_exhaustive()
    }
}

impl OutfitSession {
    /// Creates a session with empty layers.
    pub fn new(settings: &SessionSettings, mut rng: Box<dyn RandomSource + Send>) -> Self {
        let indicator = LivelinessIndicator::with_variations(
            settings.alive_variations,
            settings.dead_variations,
            rng.as_mut(),
        );
        Self {
            layers: OutfitLayerSet::with_styles(&settings.layer_styles),
            detector: ConnectivityDetector::with_tolerance(settings.tolerance),
            indicator,
            rng,
        }
    }

    pub fn layers(&self) -> &OutfitLayerSet {
        &self.layers
    }

    pub fn detector(&self) -> &ConnectivityDetector {
        &self.detector
    }

    /// Current look of the liveliness indicator.
    pub fn indicator(&self) -> IndicatorState {
        self.indicator.state()
    }

    /// Fetches the catalog from `source` and loads it into the layers.
    ///
    /// Returns the number of items loaded.  On failure the previous layers
    /// (items and cursors) are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Catalog`] if the feed fails.
    pub async fn refresh_catalog(&mut self, source: &dyn CatalogSource) -> Result<usize, SessionError> {
        let items = match source.fetch_items().await {
            Ok(items) => items,
            Err(e) => {
                warn!("catalog refresh failed, keeping previous layers: {e}");
                return Err(e.into());
            }
        };
        let count = items.len();
        self.load_catalog(items);
        Ok(count)
    }

    /// Loads an already-fetched catalog.
    pub fn load_catalog(&mut self, items: Vec<ClothingItem>) {
        let count = items.len();
        self.layers.load_catalog(items);
        info!(
            items = count,
            hats = self.layers.layer_for(ClothingCategory::Hat).len(),
            tops = self.layers.layer_for(ClothingCategory::Top).len(),
            jackets = self.layers.layer_for(ClothingCategory::Jacket).len(),
            pants = self.layers.layer_for(ClothingCategory::Pants).len(),
            shoes = self.layers.layer_for(ClothingCategory::Shoes).len(),
            "catalog loaded"
        );
    }

    /// Applies one editor command.
    ///
    /// # Errors
    ///
    /// Never fails for the built-in categories; the `Result` carries layer
    /// errors from index-based calls made on behalf of the command.
    pub fn apply(&mut self, command: OutfitCommand) -> Result<(), SessionError> {
        match command {
            OutfitCommand::Randomize => self.randomize(),
            OutfitCommand::Clear => self.clear(),
            OutfitCommand::Next(category) => {
                let index = self.layers.index_of(category);
                self.next(index)?;
            }
            OutfitCommand::Previous(category) => {
                let index = self.layers.index_of(category);
                self.previous(index)?;
            }
        }
        Ok(())
    }

    /// Cycles the layer at `index` backward.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Layer`] if `index` is not a layer slot.
    pub fn previous(&mut self, index: usize) -> Result<(), SessionError> {
        self.layers.previous(index)?;
        debug!(layer = index, selected = self.layers.layer(index)?.current_index(), "previous item");
        Ok(())
    }

    /// Cycles the layer at `index` forward.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Layer`] if `index` is not a layer slot.
    pub fn next(&mut self, index: usize) -> Result<(), SessionError> {
        self.layers.next(index)?;
        debug!(layer = index, selected = self.layers.layer(index)?.current_index(), "next item");
        Ok(())
    }

    /// Generates a random outfit.
    pub fn randomize(&mut self) {
        self.layers.randomize_all(self.rng.as_mut());
        info!(items = self.layers.current_outfit().item_count(), "random outfit generated");
    }

    /// Clears the outfit.
    pub fn clear(&mut self) {
        self.layers.clear_all();
        info!("outfit cleared");
    }

    /// Position indicator of the layer at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Layer`] if `index` is not a layer slot.
    pub fn layer_info(&self, index: usize) -> Result<String, SessionError> {
        Ok(self.layers.layer_info(index)?)
    }

    /// Selected item of the layer at `index`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Layer`] if `index` is not a layer slot.
    pub fn current_item(&self, index: usize) -> Result<Option<&ClothingItem>, SessionError> {
        Ok(self.layers.current_item(index)?)
    }

    /// Whether the layer at `index` has any items.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Layer`] if `index` is not a layer slot.
    pub fn has_items(&self, index: usize) -> Result<bool, SessionError> {
        Ok(self.layers.has_items(index)?)
    }

    pub fn current_outfit(&self) -> OutfitSelection {
        self.layers.current_outfit()
    }

    /// Checks the rendered boxes and updates the indicator.
    pub fn check_connection(&mut self, positions: &[ClothingItemPosition]) -> ConnectivityState {
        let state = self.detector.evaluate(positions);
        self.apply_connectivity(state);
        state
    }

    /// Feeds an externally computed check (e.g. from the debounced monitor)
    /// to the indicator.  Returns `true` if the indicator's mood changed.
    pub fn apply_connectivity(&mut self, state: ConnectivityState) -> bool {
        let changed = self
            .indicator
            .apply_connectivity(state.is_connected, self.rng.as_mut());
        if changed {
            info!(connected = state.is_connected, "outfit connectivity changed");
        }
        changed
    }

    /// Draws a new indicator look, as when the editor is reopened.
    pub fn refresh_indicator(&mut self) {
        self.indicator.randomize_variation(self.rng.as_mut());
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
