use serde::{Deserialize, Serialize};

/// Unified lifecycle of a menu item.
///
/// A single field drives both projections of the portal: the admin panel
/// groups items as pending/published, the customer pages show an
/// available/unavailable badge. `Draft` renders as "Pending" on the admin
/// side; only `Published` items count as available to customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemState {
    Draft,
    Published,
    Unavailable,
}

impl ItemState {
    /// Stable code used in form values
    pub fn code(&self) -> &'static str {
        match self {
            ItemState::Draft => "draft",
            ItemState::Published => "published",
            ItemState::Unavailable => "unavailable",
        }
    }

    /// Human-readable name as shown in the admin panel
    pub fn display_name(&self) -> &'static str {
        match self {
            ItemState::Draft => "Pending",
            ItemState::Published => "Published",
            ItemState::Unavailable => "Unavailable",
        }
    }

    /// All states, in display order
    pub fn all() -> Vec<ItemState> {
        vec![
            ItemState::Draft,
            ItemState::Published,
            ItemState::Unavailable,
        ]
    }

    /// Parse from a code string
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "draft" => Some(ItemState::Draft),
            "published" => Some(ItemState::Published),
            "unavailable" => Some(ItemState::Unavailable),
            _ => None,
        }
    }

    /// Whether a customer can order an item in this state
    pub fn is_available(&self) -> bool {
        matches!(self, ItemState::Published)
    }
}

impl std::fmt::Display for ItemState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
