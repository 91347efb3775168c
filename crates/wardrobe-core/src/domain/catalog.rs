//! Clothing catalog entities.
//!
//! The catalog is the flat list of clothing items owned by the user.  It is
//! fetched from the hosted backend by an outer layer and handed to the
//! [`OutfitLayerSet`](super::layers::OutfitLayerSet), which partitions it by
//! [`ClothingCategory`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for a clothing item, derived from UUID v4.
pub type ItemId = Uuid;

/// The fixed set of clothing categories an outfit is built from.
///
/// The declaration order is the layer order of an outfit: head to toe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClothingCategory {
    Hat,
    Top,
    Jacket,
    Pants,
    Shoes,
}

impl ClothingCategory {
    /// All categories in outfit layer order.
    pub const ALL: [ClothingCategory; 5] = [
        ClothingCategory::Hat,
        ClothingCategory::Top,
        ClothingCategory::Jacket,
        ClothingCategory::Pants,
        ClothingCategory::Shoes,
    ];

    /// Position of this category in [`ClothingCategory::ALL`].
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Lowercase identifier used in files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            ClothingCategory::Hat => "hat",
            ClothingCategory::Top => "top",
            ClothingCategory::Jacket => "jacket",
            ClothingCategory::Pants => "pants",
            ClothingCategory::Shoes => "shoes",
        }
    }

    /// Default human-readable label for the layer holding this category.
    pub fn default_display_name(self) -> &'static str {
        match self {
            ClothingCategory::Hat => "Hats",
            ClothingCategory::Top => "Tops",
            ClothingCategory::Jacket => "Jackets",
            ClothingCategory::Pants => "Pants",
            ClothingCategory::Shoes => "Shoes",
        }
    }

    /// Default draw order hint.  Higher values are drawn on top.
    pub fn default_z_index(self) -> i32 {
        match self {
            ClothingCategory::Hat => 5,
            ClothingCategory::Top => 4,
            ClothingCategory::Jacket => 3,
            ClothingCategory::Pants => 2,
            ClothingCategory::Shoes => 1,
        }
    }
}

impl fmt::Display for ClothingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name one of the five categories.
#[derive(Debug, Error, PartialEq)]
#[error("unknown clothing category: {0:?}")]
pub struct UnknownCategory(pub String);

impl FromStr for ClothingCategory {
    type Err = UnknownCategory;

    /// Parses a category name, case-insensitively.  `"jeans"` is accepted as
    /// an alias for [`ClothingCategory::Pants`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hat" => Ok(ClothingCategory::Hat),
            "top" => Ok(ClothingCategory::Top),
            "jacket" => Ok(ClothingCategory::Jacket),
            "pants" | "jeans" => Ok(ClothingCategory::Pants),
            "shoes" => Ok(ClothingCategory::Shoes),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

/// One clothing item from the user's closet.
///
/// Only `id` and `category` matter to outfit composition; the remaining
/// fields are carried through for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClothingItem {
    pub id: ItemId,
    pub category: ClothingCategory,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_favorite: bool,
}

impl ClothingItem {
    /// Creates an item with a fresh id and no display metadata.
    pub fn new(category: ClothingCategory, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            category,
            name: name.into(),
            image_url: None,
            colors: Vec::new(),
            tags: Vec::new(),
            is_favorite: false,
        }
    }
}
