use serde::{Deserialize, Serialize};

/// Menu categories offered by the cafeteria
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuCategory {
    Breakfast,
    Lunch,
    Snacks,
    Beverages,
}

impl MenuCategory {
    /// Stable code used in form values and lookup keys
    pub fn code(&self) -> &'static str {
        match self {
            MenuCategory::Breakfast => "breakfast",
            MenuCategory::Lunch => "lunch",
            MenuCategory::Snacks => "snacks",
            MenuCategory::Beverages => "beverages",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            MenuCategory::Breakfast => "Breakfast",
            MenuCategory::Lunch => "Lunch",
            MenuCategory::Snacks => "Snacks",
            MenuCategory::Beverages => "Beverages",
        }
    }

    /// All categories, in display order
    pub fn all() -> Vec<MenuCategory> {
        vec![
            MenuCategory::Breakfast,
            MenuCategory::Lunch,
            MenuCategory::Snacks,
            MenuCategory::Beverages,
        ]
    }

    /// Parse from a code string
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "breakfast" => Some(MenuCategory::Breakfast),
            "lunch" => Some(MenuCategory::Lunch),
            "snacks" => Some(MenuCategory::Snacks),
            "beverages" => Some(MenuCategory::Beverages),
            _ => None,
        }
    }
}

impl std::fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
