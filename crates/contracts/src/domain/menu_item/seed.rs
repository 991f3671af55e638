use super::aggregate::{MenuItem, MenuItemId};
use crate::enums::{DietaryTag, ItemState, MenuCategory};

fn item(
    id: i64,
    name: &str,
    category: MenuCategory,
    price: f64,
    dietary: DietaryTag,
    state: ItemState,
    description: &str,
) -> MenuItem {
    MenuItem {
        id: MenuItemId::new(id),
        name: name.to_string(),
        category,
        price,
        dietary,
        description: Some(description.to_string()),
        state,
    }
}

/// Demo dataset the session repository starts from.
///
/// One collection backs both the customer listing and the admin panel;
/// a dish the kitchen has run out of carries the `Unavailable` state.
pub fn seed_menu_items() -> Vec<MenuItem> {
    vec![
        item(
            1,
            "Grilled Chicken Sandwich",
            MenuCategory::Lunch,
            180.0,
            DietaryTag::NonVegetarian,
            ItemState::Published,
            "Tender grilled chicken with fresh lettuce and tomatoes",
        ),
        item(
            2,
            "Quinoa Buddha Bowl",
            MenuCategory::Lunch,
            220.0,
            DietaryTag::Vegan,
            ItemState::Published,
            "Nutritious quinoa with roasted vegetables and tahini dressing",
        ),
        item(
            3,
            "Masala Chai",
            MenuCategory::Beverages,
            25.0,
            DietaryTag::Vegetarian,
            ItemState::Published,
            "Traditional spiced tea with milk",
        ),
        item(
            4,
            "Paneer Tikka Wrap",
            MenuCategory::Lunch,
            160.0,
            DietaryTag::Vegetarian,
            ItemState::Published,
            "Spiced cottage cheese in a whole wheat wrap",
        ),
        item(
            5,
            "Fruit Salad Bowl",
            MenuCategory::Snacks,
            80.0,
            DietaryTag::Vegan,
            ItemState::Published,
            "Fresh seasonal fruits with a hint of chaat masala",
        ),
        item(
            6,
            "Aloo Paratha",
            MenuCategory::Breakfast,
            90.0,
            DietaryTag::Vegetarian,
            ItemState::Unavailable,
            "Stuffed potato flatbread served with yogurt",
        ),
        item(
            7,
            "Green Smoothie",
            MenuCategory::Beverages,
            120.0,
            DietaryTag::Vegan,
            ItemState::Published,
            "Spinach, apple, banana and ginger blend",
        ),
        item(
            8,
            "Fish Curry with Rice",
            MenuCategory::Lunch,
            250.0,
            DietaryTag::NonVegetarian,
            ItemState::Published,
            "Coastal style fish curry with steamed basmati rice",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ids_are_sequential_from_one() {
        let items = seed_menu_items();
        let ids: Vec<i64> = items.iter().map(|i| i.id.value()).collect();
        assert_eq!(ids, (1..=8).collect::<Vec<i64>>());
    }
}
