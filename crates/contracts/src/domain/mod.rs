pub mod menu_item;
pub mod weekly_menu;
