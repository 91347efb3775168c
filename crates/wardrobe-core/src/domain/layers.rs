//! Outfit layer model and navigation.
//!
//! An outfit is built from five fixed layers, one per [`ClothingCategory`].
//! Each layer holds the closet items of its category and a cursor saying
//! which one (if any) is currently worn.
//!
//! # Cursor semantics
//!
//! The cursor is either "none" or an index into the layer's items.  Cycling
//! is deliberately asymmetric:
//!
//! ```text
//! next:      none → 0 → 1 → … → N-1 → none → 0 …
//! previous:  none → N-1 → N-2 → … → 0 → N-1 …
//! ```
//!
//! Browsing forward runs through every item and then lands on nothing;
//! browsing backward never lands on nothing.  "None" is reachable only by
//! `next` past the last item or by [`OutfitLayerSet::clear_all`].

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

use super::catalog::{ClothingCategory, ClothingItem};
use super::outfit::OutfitSelection;
use super::random::RandomSource;

/// Text shown for a layer without any items.
pub const NO_ITEMS_LABEL: &str = "No items";

/// Errors raised by layer navigation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LayerError {
    /// The caller referenced a layer slot that does not exist.
    #[error("invalid layer index {index}: outfit has {count} layers")]
    InvalidLayerIndex { index: usize, count: usize },
}

/// Presentation overrides for one layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerStyle {
    pub category: ClothingCategory,
    pub display_name: String,
    pub z_index: i32,
}

impl LayerStyle {
    /// The built-in style for `category`.
    pub fn default_for(category: ClothingCategory) -> Self {
        Self {
            category,
            display_name: category.default_display_name().to_string(),
            z_index: category.default_z_index(),
        }
    }
}

/// One clothing category slot of an outfit.
#[derive(Debug, Clone, PartialEq)]
pub struct OutfitLayer {
    category: ClothingCategory,
    display_name: String,
    items: Vec<ClothingItem>,
    /// `None` means no item is selected.  When `Some(i)`, `i < items.len()`.
    cursor: Option<usize>,
    z_index: i32,
}

impl OutfitLayer {
    /// Creates an empty layer with no selection.
    pub fn new(style: LayerStyle) -> Self {
        Self {
            category: style.category,
            display_name: style.display_name,
            items: Vec::new(),
            cursor: None,
            z_index: style.z_index,
        }
    }

    pub fn category(&self) -> ClothingCategory {
        self.category
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn z_index(&self) -> i32 {
        self.z_index
    }

    pub fn items(&self) -> &[ClothingItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The selected position, or `None` when nothing is selected.
    pub fn selected(&self) -> Option<usize> {
        self.cursor
    }

    /// The cursor as a signed index where `-1` means "none selected".
    pub fn current_index(&self) -> isize {
        self.cursor.map_or(-1, |i| i as isize)
    }

    /// The selected item, if any.
    pub fn current_item(&self) -> Option<&ClothingItem> {
        self.cursor.and_then(|i| self.items.get(i))
    }

    /// Position indicator for the UI: `"No items"`, `"0 of N"` when nothing
    /// is selected, otherwise `"{position} of N"` counting from one.
    pub fn position_label(&self) -> String {
        if self.items.is_empty() {
            return NO_ITEMS_LABEL.to_string();
        }
        let position = self.cursor.map_or(0, |i| i + 1);
        format!("{} of {}", position, self.items.len())
    }

    /// Replaces the layer's items.
    ///
    /// The cursor survives only if it still points inside the new list;
    /// otherwise it collapses to "none".  It is never clamped to the last
    /// item.
    pub fn replace_items(&mut self, items: Vec<ClothingItem>) {
        self.items = items;
        if let Some(i) = self.cursor {
            if i >= self.items.len() {
                trace!(category = %self.category, previous = i, "cursor out of range after refresh, reset to none");
                self.cursor = None;
            }
        }
    }

    /// Moves the cursor backward, wrapping from the first item (or from
    /// "none") to the last item.  No-op on an empty layer.
    pub fn previous(&mut self) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        self.cursor = match self.cursor {
            // Backward cycling never lands on "none".
            None | Some(0) => Some(len - 1),
            Some(i) => Some(i - 1),
        };
    }

    /// Moves the cursor forward; past the last item it lands on "none", and
    /// from "none" it starts again at the first item.  No-op on an empty
    /// layer.
    pub fn next(&mut self) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        self.cursor = match self.cursor {
            Some(i) if i + 1 >= len => None,
            Some(i) => Some(i + 1),
            None => Some(0),
        };
    }

    /// Selects a uniformly random item.  Empty layers keep "none".
    pub fn randomize(&mut self, rng: &mut dyn RandomSource) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        // The cursor must stay in range even if the source ignores `upper`.
        self.cursor = Some(rng.index_below(len) % len);
    }

    /// Deselects the layer.
    pub fn clear(&mut self) {
        self.cursor = None;
    }
}

/// The five outfit layers, head to toe.
///
/// Owned by a single outfit-editing session and rebuilt from the catalog
/// when the session starts.  Layer indices follow [`ClothingCategory::ALL`].
#[derive(Debug, Clone, PartialEq)]
pub struct OutfitLayerSet {
    layers: Vec<OutfitLayer>,
}

impl Default for OutfitLayerSet {
    fn default() -> Self {
        Self::new()
    }
}

impl OutfitLayerSet {
    /// Creates the five layers with their default names and draw order.
    pub fn new() -> Self {
        Self::with_styles(&[])
    }

    /// Creates the five layers, applying any presentation overrides.
    ///
    /// Categories without an override keep their default style.  When a
    /// category appears more than once the last override wins.  Layer order
    /// is always head to toe regardless of the override order.
    pub fn with_styles(overrides: &[LayerStyle]) -> Self {
        let layers = ClothingCategory::ALL
            .iter()
            .map(|&category| {
                let style = overrides
                    .iter()
                    .rev()
                    .find(|s| s.category == category)
                    .cloned()
                    .unwrap_or_else(|| LayerStyle::default_for(category));
                OutfitLayer::new(style)
            })
            .collect();
        Self { layers }
    }

    /// Number of layers (always five).
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Always `false`; present for API symmetry with [`OutfitLayerSet::len`].
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn layers(&self) -> &[OutfitLayer] {
        &self.layers
    }

    /// Returns the layer at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::InvalidLayerIndex`] if `index` is not a layer slot.
    pub fn layer(&self, index: usize) -> Result<&OutfitLayer, LayerError> {
        self.layers.get(index).ok_or(LayerError::InvalidLayerIndex {
            index,
            count: self.layers.len(),
        })
    }

    fn layer_mut(&mut self, index: usize) -> Result<&mut OutfitLayer, LayerError> {
        let count = self.layers.len();
        self.layers
            .get_mut(index)
            .ok_or(LayerError::InvalidLayerIndex { index, count })
    }

    /// Layer slot holding `category`.
    pub fn index_of(&self, category: ClothingCategory) -> usize {
        category.ordinal()
    }

    /// The layer holding `category`.
    pub fn layer_for(&self, category: ClothingCategory) -> &OutfitLayer {
        &self.layers[self.index_of(category)]
    }

    /// Partitions `items` by category into the layers, preserving catalog
    /// order within each layer.
    ///
    /// Cursors that still fit are kept; the rest collapse to "none".  An
    /// empty catalog is valid and leaves every layer empty.
    pub fn load_catalog(&mut self, items: impl IntoIterator<Item = ClothingItem>) {
        let mut buckets: Vec<Vec<ClothingItem>> = vec![Vec::new(); self.layers.len()];
        for item in items {
            let idx = self.index_of(item.category);
            buckets[idx].push(item);
        }
        for (layer, bucket) in self.layers.iter_mut().zip(buckets) {
            layer.replace_items(bucket);
            debug!(
                category = %layer.category,
                items = layer.len(),
                selected = layer.current_index(),
                "layer loaded"
            );
        }
    }

    /// Moves the layer's cursor backward.  See [`OutfitLayer::previous`].
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::InvalidLayerIndex`] if `index` is not a layer slot.
    pub fn previous(&mut self, index: usize) -> Result<(), LayerError> {
        self.layer_mut(index)?.previous();
        Ok(())
    }

    /// Moves the layer's cursor forward.  See [`OutfitLayer::next`].
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::InvalidLayerIndex`] if `index` is not a layer slot.
    pub fn next(&mut self, index: usize) -> Result<(), LayerError> {
        self.layer_mut(index)?.next();
        Ok(())
    }

    /// Picks an independent random item for every non-empty layer.
    pub fn randomize_all(&mut self, rng: &mut dyn RandomSource) {
        for layer in &mut self.layers {
            layer.randomize(rng);
        }
    }

    /// Deselects every layer.
    pub fn clear_all(&mut self) {
        for layer in &mut self.layers {
            layer.clear();
        }
    }

    /// The selected item of the layer at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::InvalidLayerIndex`] if `index` is not a layer slot.
    pub fn current_item(&self, index: usize) -> Result<Option<&ClothingItem>, LayerError> {
        Ok(self.layer(index)?.current_item())
    }

    /// Position indicator of the layer at `index`.  See
    /// [`OutfitLayer::position_label`].
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::InvalidLayerIndex`] if `index` is not a layer slot.
    pub fn layer_info(&self, index: usize) -> Result<String, LayerError> {
        Ok(self.layer(index)?.position_label())
    }

    /// # Errors
    ///
    /// Returns [`LayerError::InvalidLayerIndex`] if `index` is not a layer slot.
    pub fn has_items(&self, index: usize) -> Result<bool, LayerError> {
        Ok(!self.layer(index)?.is_empty())
    }

    /// `true` if at least one layer has items to choose from.
    pub fn has_any_items(&self) -> bool {
        self.layers.iter().any(|l| !l.is_empty())
    }

    /// Snapshot of the currently selected items.
    pub fn current_outfit(&self) -> OutfitSelection {
        let pick = |category| self.layer_for(category).current_item().cloned();
        OutfitSelection {
            hat: pick(ClothingCategory::Hat),
            top: pick(ClothingCategory::Top),
            jacket: pick(ClothingCategory::Jacket),
            pants: pick(ClothingCategory::Pants),
            shoes: pick(ClothingCategory::Shoes),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
