//! Snapshot of the items currently worn in each layer.

use serde::{Deserialize, Serialize};

use super::catalog::{ClothingItem, ItemId};

/// The selected item of every layer at one moment.
///
/// Produced by [`OutfitLayerSet::current_outfit`](super::layers::OutfitLayerSet::current_outfit)
/// and handed to whatever saves or displays outfits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutfitSelection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hat: Option<ClothingItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<ClothingItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jacket: Option<ClothingItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pants: Option<ClothingItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shoes: Option<ClothingItem>,
}

impl OutfitSelection {
    /// Selected items, head to toe.
    pub fn items(&self) -> impl Iterator<Item = &ClothingItem> {
        [&self.hat, &self.top, &self.jacket, &self.pants, &self.shoes]
            .into_iter()
            .flatten()
    }

    pub fn item_count(&self) -> usize {
        self.items().count()
    }

    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }

    pub fn has_item(&self, id: ItemId) -> bool {
        self.items().any(|item| item.id == id)
    }

    /// An outfit needs at least a top and pants to be wearable.
    pub fn is_complete(&self) -> bool {
        self.top.is_some() && self.pants.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::ClothingCategory;

    #[test]
    fn test_empty_selection_has_no_items_and_is_incomplete() {
        let outfit = OutfitSelection::default();
        assert!(outfit.is_empty());
        assert_eq!(outfit.item_count(), 0);
        assert!(!outfit.is_complete());
    }

    #[test]
    fn test_items_are_listed_head_to_toe() {
        let shoes = ClothingItem::new(ClothingCategory::Shoes, "boots");
        let hat = ClothingItem::new(ClothingCategory::Hat, "cap");
        let outfit = OutfitSelection {
            hat: Some(hat.clone()),
            shoes: Some(shoes.clone()),
            ..Default::default()
        };
        let names: Vec<&str> = outfit.items().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["cap", "boots"]);
        assert!(outfit.has_item(hat.id));
        assert!(!outfit.has_item(uuid::Uuid::new_v4()));
    }

    #[test]
    fn test_top_without_pants_is_incomplete() {
        let outfit = OutfitSelection {
            top: Some(ClothingItem::new(ClothingCategory::Top, "tee")),
            jacket: Some(ClothingItem::new(ClothingCategory::Jacket, "parka")),
            ..Default::default()
        };
        assert!(!outfit.is_complete());
    }

    #[test]
    fn test_empty_layers_are_omitted_from_json() {
        let outfit = OutfitSelection {
            top: Some(ClothingItem::new(ClothingCategory::Top, "tee")),
            ..Default::default()
        };
        let json = serde_json::to_string(&outfit).expect("serialize");
        assert!(json.contains("\"top\""));
        assert!(!json.contains("\"hat\""));
    }
}
