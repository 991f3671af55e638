use serde::{Deserialize, Serialize};

/// Dietary classification of a menu item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DietaryTag {
    Vegan,
    Vegetarian,
    NonVegetarian,
    GlutenFree,
}

impl DietaryTag {
    /// Stable code used in form values and lookup keys
    pub fn code(&self) -> &'static str {
        match self {
            DietaryTag::Vegan => "vegan",
            DietaryTag::Vegetarian => "vegetarian",
            DietaryTag::NonVegetarian => "non-vegetarian",
            DietaryTag::GlutenFree => "gluten-free",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            DietaryTag::Vegan => "Vegan",
            DietaryTag::Vegetarian => "Vegetarian",
            DietaryTag::NonVegetarian => "Non-Vegetarian",
            DietaryTag::GlutenFree => "Gluten-Free",
        }
    }

    /// All dietary tags, in display order
    pub fn all() -> Vec<DietaryTag> {
        vec![
            DietaryTag::Vegan,
            DietaryTag::Vegetarian,
            DietaryTag::NonVegetarian,
            DietaryTag::GlutenFree,
        ]
    }

    /// Parse from a code string
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "vegan" => Some(DietaryTag::Vegan),
            "vegetarian" => Some(DietaryTag::Vegetarian),
            "non-vegetarian" => Some(DietaryTag::NonVegetarian),
            "gluten-free" => Some(DietaryTag::GlutenFree),
            _ => None,
        }
    }
}

impl std::fmt::Display for DietaryTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
