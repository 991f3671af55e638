use crate::shared::components::ui::Badge;
use contracts::domain::menu_item::MenuItem;
use contracts::enums::{DietaryTag, MenuCategory};
use leptos::prelude::*;

/// Badge variant for a category chip (presentation-only lookup)
pub fn category_badge_variant(category: MenuCategory) -> &'static str {
    match category {
        MenuCategory::Breakfast => "warning",
        MenuCategory::Lunch => "success",
        MenuCategory::Snacks => "primary",
        MenuCategory::Beverages => "neutral",
    }
}

/// Badge variant for a dietary chip
pub fn dietary_badge_variant(dietary: DietaryTag) -> &'static str {
    match dietary {
        DietaryTag::Vegan | DietaryTag::Vegetarian => "success",
        DietaryTag::NonVegetarian => "error",
        DietaryTag::GlutenFree => "warning",
    }
}

/// Card shown on the customer-facing daily menu
#[component]
pub fn MenuCard(item: MenuItem) -> impl IntoView {
    let available = item.available();
    let card_class = if available {
        "menu-card"
    } else {
        "menu-card menu-card--unavailable"
    };

    view! {
        <div class=card_class>
            <div class="menu-card__top">
                <h3 class="menu-card__name">{item.name.clone()}</h3>
                <span class="menu-card__price">{format!("₹{}", item.price)}</span>
            </div>

            {item.description.clone().map(|text| view! {
                <p class="menu-card__description">{text}</p>
            })}

            <div class="menu-card__tags">
                <Badge variant=category_badge_variant(item.category).to_string()>
                    {item.category.display_name()}
                </Badge>
                <Badge variant=dietary_badge_variant(item.dietary).to_string()>
                    {item.dietary.display_name()}
                </Badge>
            </div>

            <div class="menu-card__footer">
                <Badge variant=(if available { "primary" } else { "neutral" }).to_string()>
                    {if available { "Available" } else { "Unavailable" }}
                </Badge>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vegetarian_tags_share_the_success_variant() {
        assert_eq!(dietary_badge_variant(DietaryTag::Vegan), "success");
        assert_eq!(dietary_badge_variant(DietaryTag::Vegetarian), "success");
        assert_eq!(dietary_badge_variant(DietaryTag::NonVegetarian), "error");
    }

    #[test]
    fn each_category_has_a_variant() {
        for category in MenuCategory::all() {
            assert!(!category_badge_variant(category).is_empty());
        }
    }
}
