use crate::enums::{DietaryTag, ItemState, MenuCategory};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MenuItemId(pub i64);

impl MenuItemId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub category: MenuCategory,
    pub price: f64,
    pub dietary: DietaryTag,
    #[serde(default)]
    pub description: Option<String>,
    pub state: ItemState,
}

impl MenuItem {
    /// Customer-facing availability, derived from the lifecycle state
    pub fn available(&self) -> bool {
        self.state.is_available()
    }

    /// Status label shown in the admin panel
    pub fn admin_status_label(&self) -> &'static str {
        self.state.display_name()
    }
}

/// Field set accepted when creating a new item. `state` defaults to `Draft`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItemInput {
    pub name: String,
    pub category: MenuCategory,
    pub price: f64,
    pub dietary: DietaryTag,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub state: Option<ItemState>,
}

/// Partial update: fields left as `None` retain their prior values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuItemPatch {
    pub name: Option<String>,
    pub category: Option<MenuCategory>,
    pub price: Option<f64>,
    pub dietary: Option<DietaryTag>,
    pub description: Option<Option<String>>,
    pub state: Option<ItemState>,
}

impl MenuItemPatch {
    /// Patch that replaces every field, as submitted by the admin edit form
    pub fn from_input(input: MenuItemInput) -> Self {
        Self {
            name: Some(input.name),
            category: Some(input.category),
            price: Some(input.price),
            dietary: Some(input.dietary),
            description: Some(input.description),
            state: input.state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_item_wire_shape_is_stable() {
        let item = MenuItem {
            id: MenuItemId::new(3),
            name: "Masala Chai".to_string(),
            category: MenuCategory::Beverages,
            price: 25.0,
            dietary: DietaryTag::Vegetarian,
            description: None,
            state: ItemState::Published,
        };

        let json = serde_json::to_value(&item).expect("serializable");
        assert_eq!(json["id"], 3);
        assert_eq!(json["category"], "Beverages");
        assert_eq!(json["dietary"], "Vegetarian");
        assert_eq!(json["state"], "Published");

        let back: MenuItem = serde_json::from_value(json).expect("deserializable");
        assert_eq!(back, item);
    }

    #[test]
    fn availability_derives_from_state() {
        let mut item = MenuItem {
            id: MenuItemId::new(1),
            name: "Aloo Paratha".to_string(),
            category: MenuCategory::Breakfast,
            price: 90.0,
            dietary: DietaryTag::Vegetarian,
            description: None,
            state: ItemState::Unavailable,
        };
        assert!(!item.available());
        assert_eq!(item.admin_status_label(), "Unavailable");

        item.state = ItemState::Draft;
        assert!(!item.available());
        assert_eq!(item.admin_status_label(), "Pending");

        item.state = ItemState::Published;
        assert!(item.available());
    }
}
