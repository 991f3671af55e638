use contracts::domain::menu_item::{MenuItem, MenuItemInput};
use contracts::enums::{DietaryTag, ItemState, MenuCategory};
use leptos::prelude::*;

/// Raw values of the add/edit form, one string per field.
///
/// Codes from the enum `code()` helpers travel through the select elements;
/// `to_input` parses the whole form back into a typed `MenuItemInput`.
#[derive(Clone, Debug)]
pub struct AdminFormState {
    pub name: String,
    pub category: String,
    pub price: String,
    pub dietary: String,
    pub description: String,
    pub state: String,
}

impl Default for AdminFormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: MenuCategory::Breakfast.code().to_string(),
            price: String::new(),
            dietary: DietaryTag::Vegetarian.code().to_string(),
            description: String::new(),
            state: ItemState::Draft.code().to_string(),
        }
    }
}

impl AdminFormState {
    /// Prefill from an existing item for editing
    pub fn from_item(item: &MenuItem) -> Self {
        Self {
            name: item.name.clone(),
            category: item.category.code().to_string(),
            price: item.price.to_string(),
            dietary: item.dietary.code().to_string(),
            description: item.description.clone().unwrap_or_default(),
            state: item.state.code().to_string(),
        }
    }

    /// Parse the form into a typed input, with field-level messages
    pub fn to_input(&self) -> Result<MenuItemInput, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Name is required".to_string());
        }

        let category = MenuCategory::from_code(&self.category)
            .ok_or_else(|| "Select a category".to_string())?;
        let dietary = DietaryTag::from_code(&self.dietary)
            .ok_or_else(|| "Select a dietary option".to_string())?;

        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| "Price must be a number".to_string())?;
        if price < 0.0 {
            return Err("Price must not be negative".to_string());
        }

        let description = match self.description.trim() {
            "" => None,
            text => Some(text.to_string()),
        };

        Ok(MenuItemInput {
            name: name.to_string(),
            category,
            price,
            dietary,
            description,
            state: ItemState::from_code(&self.state),
        })
    }
}

pub fn create_form_state() -> RwSignal<AdminFormState> {
    RwSignal::new(AdminFormState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> AdminFormState {
        AdminFormState {
            name: "Masala Chai".to_string(),
            category: "beverages".to_string(),
            price: "25".to_string(),
            dietary: "vegetarian".to_string(),
            description: String::new(),
            state: "published".to_string(),
        }
    }

    #[test]
    fn filled_form_parses_to_typed_input() {
        let input = filled().to_input().unwrap();
        assert_eq!(input.name, "Masala Chai");
        assert_eq!(input.category, MenuCategory::Beverages);
        assert_eq!(input.price, 25.0);
        assert_eq!(input.state, Some(ItemState::Published));
        assert_eq!(input.description, None);
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut form = filled();
        form.name = "  ".to_string();
        assert!(form.to_input().is_err());
    }

    #[test]
    fn unparsable_price_is_rejected() {
        let mut form = filled();
        form.price = "abc".to_string();
        assert!(form.to_input().is_err());
        form.price = "-10".to_string();
        assert!(form.to_input().is_err());
    }

    #[test]
    fn prefill_round_trips_through_the_form() {
        let item = contracts::domain::menu_item::seed::seed_menu_items()
            .into_iter()
            .next()
            .unwrap();
        let input = AdminFormState::from_item(&item).to_input().unwrap();
        assert_eq!(input.name, item.name);
        assert_eq!(input.category, item.category);
        assert_eq!(input.price, item.price);
        assert_eq!(input.state, Some(item.state));
    }
}
