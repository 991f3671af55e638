use super::aggregate::MenuItem;
use crate::enums::{DietaryTag, MenuCategory};
use serde::{Deserialize, Serialize};

/// Equality filter over the menu listing.
///
/// `None` is the "All" sentinel and matches every item. Both criteria are
/// combined with logical AND and are independent of each other; a
/// combination with no matching item is legal and yields an empty result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuFilter {
    pub category: Option<MenuCategory>,
    pub dietary: Option<DietaryTag>,
}

impl MenuFilter {
    pub fn matches(&self, item: &MenuItem) -> bool {
        let category_match = self.category.map_or(true, |c| item.category == c);
        let dietary_match = self.dietary.map_or(true, |d| item.dietary == d);
        category_match && dietary_match
    }

    /// Ordered subsequence of `items` matching the filter; never mutates input
    pub fn apply(&self, items: &[MenuItem]) -> Vec<MenuItem> {
        items
            .iter()
            .filter(|item| self.matches(item))
            .cloned()
            .collect()
    }

    /// Number of active (non-"All") criteria, shown as a chip next to the
    /// listing summary
    pub fn active_count(&self) -> usize {
        self.category.is_some() as usize + self.dietary.is_some() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }
}

/// Count of items currently orderable by a customer
pub fn available_count(items: &[MenuItem]) -> usize {
    items.iter().filter(|item| item.available()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu_item::seed::seed_menu_items;

    #[test]
    fn empty_filter_is_identity() {
        let items = seed_menu_items();
        let filter = MenuFilter::default();
        assert_eq!(filter.apply(&items), items);
        assert!(filter.is_empty());
    }

    #[test]
    fn filter_is_idempotent() {
        let items = seed_menu_items();
        let filter = MenuFilter {
            category: Some(MenuCategory::Lunch),
            dietary: Some(DietaryTag::Vegetarian),
        };
        let once = filter.apply(&items);
        assert_eq!(filter.apply(&once), once);
    }

    #[test]
    fn lunch_filter_returns_the_four_lunch_items_in_order() {
        let items = seed_menu_items();
        let filter = MenuFilter {
            category: Some(MenuCategory::Lunch),
            ..MenuFilter::default()
        };
        let lunch = filter.apply(&items);

        let names: Vec<&str> = lunch.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Grilled Chicken Sandwich",
                "Quinoa Buddha Bowl",
                "Paneer Tikka Wrap",
                "Fish Curry with Rice",
            ]
        );
    }

    #[test]
    fn criteria_combine_with_and() {
        let items = seed_menu_items();
        let filter = MenuFilter {
            category: Some(MenuCategory::Beverages),
            dietary: Some(DietaryTag::Vegan),
        };
        let matched = filter.apply(&items);
        let names: Vec<&str> = matched.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Green Smoothie"]);
    }

    #[test]
    fn inconsistent_combination_yields_empty_result() {
        let items = seed_menu_items();
        let filter = MenuFilter {
            category: Some(MenuCategory::Breakfast),
            dietary: Some(DietaryTag::NonVegetarian),
        };
        assert!(filter.apply(&items).is_empty());
    }

    #[test]
    fn filtering_does_not_mutate_input() {
        let items = seed_menu_items();
        let before = items.clone();
        let filter = MenuFilter {
            dietary: Some(DietaryTag::Vegan),
            ..MenuFilter::default()
        };
        let _ = filter.apply(&items);
        assert_eq!(items, before);
    }

    #[test]
    fn active_count_tracks_selected_criteria() {
        let mut filter = MenuFilter::default();
        assert_eq!(filter.active_count(), 0);
        assert!(filter.is_empty());

        filter.category = Some(MenuCategory::Lunch);
        assert_eq!(filter.active_count(), 1);

        filter.dietary = Some(DietaryTag::Vegan);
        assert_eq!(filter.active_count(), 2);
        assert!(!filter.is_empty());
    }

    #[test]
    fn available_count_skips_unavailable_items() {
        let items = seed_menu_items();
        // Aloo Paratha is the single unavailable seed item
        assert_eq!(available_count(&items), items.len() - 1);
    }
}
