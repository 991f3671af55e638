use super::day::WeeklyMenuDay;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use std::collections::HashMap;

fn day(
    year: i32,
    month: u32,
    dom: u32,
    breakfast: &[&str],
    lunch: &[&str],
    snacks: &[&str],
) -> WeeklyMenuDay {
    WeeklyMenuDay {
        date: NaiveDate::from_ymd_opt(year, month, dom).expect("valid planner date"),
        breakfast: breakfast.iter().map(|s| s.to_string()).collect(),
        lunch: lunch.iter().map(|s| s.to_string()).collect(),
        snacks: snacks.iter().map(|s| s.to_string()).collect(),
    }
}

/// Planned weekly menu, keyed by the date formatted as `YYYY-MM-DD`.
///
/// Immutable, process-wide reference data; dates outside this table resolve
/// to the fallback record.
pub static WEEKLY_MENU_TABLE: Lazy<HashMap<String, WeeklyMenuDay>> = Lazy::new(|| {
    let days = vec![
        day(
            2024,
            1,
            15,
            &["Poha with Vegetables", "Upma", "Tea/Coffee"],
            &["Dal Rice", "Chicken Curry", "Roti", "Salad"],
            &["Samosa", "Tea"],
        ),
        day(
            2024,
            1,
            16,
            &["Idli Sambhar", "Chutney", "Filter Coffee"],
            &["Rajma Rice", "Paneer Curry", "Chapati", "Raita"],
            &["Pakora", "Masala Chai"],
        ),
        day(
            2024,
            1,
            17,
            &["Paratha", "Pickle", "Lassi"],
            &["Fish Curry", "Vegetable Biryani", "Papad", "Buttermilk"],
            &["Fruit Chat", "Green Tea"],
        ),
        day(
            2024,
            1,
            18,
            &["Dosa", "Sambhar", "Coconut Chutney"],
            &["Chole", "Jeera Rice", "Roti", "Onion Salad"],
            &["Biscuits", "Coffee"],
        ),
        day(
            2024,
            1,
            19,
            &["Sandwich", "Fruit Juice", "Boiled Eggs"],
            &["Mutton Curry", "Plain Rice", "Chapati", "Pickle"],
            &["Cake Slice", "Tea"],
        ),
        day(
            2024,
            1,
            20,
            &["Puri Bhaji", "Pickle", "Tea"],
            &["Mixed Vegetable", "Dal", "Rice", "Roti"],
            &["Namkeen", "Buttermilk"],
        ),
        day(
            2024,
            1,
            21,
            &["Omelette", "Bread", "Coffee"],
            &["Special Thali", "Sweet Dish"],
            &["Ice Cream", "Cold Drink"],
        ),
    ];

    days.into_iter()
        .map(|d| (d.date.format("%Y-%m-%d").to_string(), d))
        .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_one_full_week() {
        assert_eq!(WEEKLY_MENU_TABLE.len(), 7);
        for dom in 15..=21 {
            let key = format!("2024-01-{dom}");
            assert!(WEEKLY_MENU_TABLE.contains_key(&key), "missing {key}");
        }
    }
}
