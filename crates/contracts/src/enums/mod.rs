pub mod dietary_tag;
pub mod item_state;
pub mod menu_category;

pub use dietary_tag::DietaryTag;
pub use item_state::ItemState;
pub use menu_category::MenuCategory;
