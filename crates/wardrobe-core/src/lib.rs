//! # wardrobe-core
//!
//! Outfit composition engine for the wardrobe studio.
//!
//! Given the user's closet, split into five clothing layers (hat, top,
//! jacket, pants, shoes), this crate keeps track of which item is selected in
//! each layer, cycles and randomizes those selections, and decides whether
//! the rendered pieces touch each other closely enough to count as one
//! connected outfit.
//!
//! The crate has no dependencies on UI frameworks, storage, or the network.
//! The `wardrobe-studio` crate wires it to a catalog feed and a renderer.
//!
//! ```
//! use wardrobe_core::{ClothingCategory, ClothingItem, OutfitLayerSet, ScriptedRandom};
//!
//! let mut layers = OutfitLayerSet::new();
//! layers.load_catalog(vec![
//!     ClothingItem::new(ClothingCategory::Top, "white tee"),
//!     ClothingItem::new(ClothingCategory::Top, "flannel"),
//!     ClothingItem::new(ClothingCategory::Pants, "jeans"),
//! ]);
//!
//! let top = layers.index_of(ClothingCategory::Top);
//! assert_eq!(layers.layer_info(top).unwrap(), "0 of 2");
//!
//! layers.randomize_all(&mut ScriptedRandom::new(vec![1, 0]));
//! assert_eq!(layers.layer_info(top).unwrap(), "2 of 2");
//! assert!(layers.current_outfit().is_complete());
//! ```

pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `wardrobe_core::OutfitLayerSet` instead of `wardrobe_core::domain::layers::OutfitLayerSet`.
pub use domain::catalog::{ClothingCategory, ClothingItem, ItemId, UnknownCategory};
pub use domain::connectivity::{ConnectivityDetector, ConnectivityState, DEFAULT_TOLERANCE};
pub use domain::geometry::ClothingItemPosition;
pub use domain::layers::{LayerError, LayerStyle, OutfitLayer, OutfitLayerSet, NO_ITEMS_LABEL};
pub use domain::liveliness::{IndicatorState, LivelinessIndicator, Mood, DEFAULT_VARIATIONS};
pub use domain::outfit::OutfitSelection;
pub use domain::random::{RandomSource, RngSource, ScriptedRandom};
