use super::aggregate::{MenuItem, MenuItemId, MenuItemInput, MenuItemPatch};
use crate::enums::ItemState;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("menu item {0} not found")]
    NotFound(MenuItemId),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Counters shown on the admin dashboard.
///
/// `published` counts `Published` items, `pending` counts `Draft` items;
/// unavailable items contribute to `total` only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuStats {
    pub total: usize,
    pub published: usize,
    pub pending: usize,
}

/// In-memory menu item collection for the lifetime of a browser session.
///
/// Insertion order is display order. Ids are assigned as max(existing) + 1
/// and are never reused after a deletion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuRepository {
    items: Vec<MenuItem>,
}

impl MenuRepository {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_items(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// Full ordered collection
    pub fn list(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn get(&self, id: MenuItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Create a new item at the end of the collection.
    ///
    /// The id is one greater than the largest id ever observed in the live
    /// collection; the first item of an empty repository gets id 1. State
    /// defaults to `Draft` when the input leaves it unspecified.
    pub fn create(&mut self, input: MenuItemInput) -> Result<&MenuItem, RepositoryError> {
        validate_name(&input.name)?;
        validate_price(input.price)?;

        let next_id = self
            .items
            .iter()
            .map(|item| item.id.value())
            .max()
            .unwrap_or(0)
            + 1;

        let item = MenuItem {
            id: MenuItemId::new(next_id),
            name: input.name,
            category: input.category,
            price: input.price,
            dietary: input.dietary,
            description: input.description,
            state: input.state.unwrap_or(ItemState::Draft),
        };
        self.items.push(item);
        Ok(self.items.last().expect("item was just pushed"))
    }

    /// Merge `patch` into the item with the given id.
    ///
    /// Unspecified fields keep their prior values.
    pub fn update(
        &mut self,
        id: MenuItemId,
        patch: MenuItemPatch,
    ) -> Result<&MenuItem, RepositoryError> {
        if let Some(name) = &patch.name {
            validate_name(name)?;
        }
        if let Some(price) = patch.price {
            validate_price(price)?;
        }

        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(RepositoryError::NotFound(id))?;

        if let Some(name) = patch.name {
            item.name = name;
        }
        if let Some(category) = patch.category {
            item.category = category;
        }
        if let Some(price) = patch.price {
            item.price = price;
        }
        if let Some(dietary) = patch.dietary {
            item.dietary = dietary;
        }
        if let Some(description) = patch.description {
            item.description = description;
        }
        if let Some(state) = patch.state {
            item.state = state;
        }
        Ok(item)
    }

    /// Remove and return the item with the given id.
    pub fn delete(&mut self, id: MenuItemId) -> Result<MenuItem, RepositoryError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(RepositoryError::NotFound(id))?;
        Ok(self.items.remove(index))
    }

    /// Update only the lifecycle state of an item.
    pub fn set_state(
        &mut self,
        id: MenuItemId,
        state: ItemState,
    ) -> Result<&MenuItem, RepositoryError> {
        self.update(
            id,
            MenuItemPatch {
                state: Some(state),
                ..MenuItemPatch::default()
            },
        )
    }

    pub fn stats(&self) -> MenuStats {
        MenuStats {
            total: self.items.len(),
            published: self
                .items
                .iter()
                .filter(|item| item.state == ItemState::Published)
                .count(),
            pending: self
                .items
                .iter()
                .filter(|item| item.state == ItemState::Draft)
                .count(),
        }
    }
}

fn validate_name(name: &str) -> Result<(), RepositoryError> {
    if name.trim().is_empty() {
        return Err(RepositoryError::InvalidInput(
            "name must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<(), RepositoryError> {
    if !price.is_finite() || price < 0.0 {
        return Err(RepositoryError::InvalidInput(
            "price must be a non-negative number".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{DietaryTag, MenuCategory};

    fn input(name: &str) -> MenuItemInput {
        MenuItemInput {
            name: name.to_string(),
            category: MenuCategory::Lunch,
            price: 100.0,
            dietary: DietaryTag::Vegetarian,
            description: None,
            state: None,
        }
    }

    #[test]
    fn first_item_gets_id_one() {
        let mut repo = MenuRepository::new();
        let item = repo.create(input("Dal Rice")).unwrap();
        assert_eq!(item.id, MenuItemId::new(1));
        assert_eq!(item.state, ItemState::Draft);
    }

    #[test]
    fn ids_are_max_plus_one_even_after_deletion() {
        let mut repo = MenuRepository::new();
        repo.create(input("A")).unwrap();
        repo.create(input("B")).unwrap();
        repo.create(input("C")).unwrap();
        repo.delete(MenuItemId::new(2)).unwrap();

        let item = repo.create(input("D")).unwrap();
        // max is 3, not the count 2, so the deleted id 2 is never reused
        assert_eq!(item.id, MenuItemId::new(4));
    }

    #[test]
    fn list_length_tracks_creates_and_deletes() {
        let mut repo = MenuRepository::new();
        for name in ["A", "B", "C", "D"] {
            repo.create(input(name)).unwrap();
        }
        repo.delete(MenuItemId::new(1)).unwrap();
        repo.delete(MenuItemId::new(3)).unwrap();
        assert_eq!(repo.len(), 2);

        let ids: Vec<i64> = repo.list().iter().map(|i| i.id.value()).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn ids_are_pairwise_distinct() {
        let mut repo = MenuRepository::new();
        for i in 0..10 {
            repo.create(input(&format!("item-{i}"))).unwrap();
        }
        let mut ids: Vec<i64> = repo.list().iter().map(|i| i.id.value()).collect();
        ids.dedup();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn create_preserves_insertion_order() {
        let mut repo = MenuRepository::new();
        repo.create(input("First")).unwrap();
        repo.create(input("Second")).unwrap();
        repo.create(input("Third")).unwrap();

        let names: Vec<&str> = repo.list().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn create_rejects_blank_name_and_negative_price() {
        let mut repo = MenuRepository::new();
        assert!(matches!(
            repo.create(input("   ")),
            Err(RepositoryError::InvalidInput(_))
        ));

        let mut bad_price = input("Tea");
        bad_price.price = -5.0;
        assert!(matches!(
            repo.create(bad_price),
            Err(RepositoryError::InvalidInput(_))
        ));
        assert!(repo.is_empty());
    }

    #[test]
    fn zero_price_is_accepted() {
        // Complimentary items are legal; only negative and non-finite
        // prices are rejected
        let mut repo = MenuRepository::new();
        let mut free = input("Drinking Water");
        free.price = 0.0;
        let item = repo.create(free).unwrap();
        assert_eq!(item.price, 0.0);
    }

    #[test]
    fn update_merges_partial_fields() {
        let mut repo = MenuRepository::new();
        let mut seed = input("Masala Chai");
        seed.description = Some("Spiced tea".to_string());
        let id = repo.create(seed).unwrap().id;

        let updated = repo
            .update(
                id,
                MenuItemPatch {
                    price: Some(30.0),
                    ..MenuItemPatch::default()
                },
            )
            .unwrap();

        assert_eq!(updated.price, 30.0);
        assert_eq!(updated.name, "Masala Chai");
        assert_eq!(updated.description.as_deref(), Some("Spiced tea"));
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let mut repo = MenuRepository::new();
        repo.create(input("A")).unwrap();
        let err = repo
            .update(MenuItemId::new(42), MenuItemPatch::default())
            .unwrap_err();
        assert_eq!(err, RepositoryError::NotFound(MenuItemId::new(42)));
    }

    #[test]
    fn delete_unknown_id_leaves_collection_unchanged() {
        let mut repo = MenuRepository::new();
        repo.create(input("A")).unwrap();
        repo.create(input("B")).unwrap();
        let before = repo.list().to_vec();

        assert_eq!(
            repo.delete(MenuItemId::new(99)).unwrap_err(),
            RepositoryError::NotFound(MenuItemId::new(99))
        );
        assert_eq!(repo.list(), before.as_slice());
    }

    #[test]
    fn set_state_publishes_a_pending_item() {
        let mut repo = MenuRepository::new();
        let mut published = input("Grilled Chicken Sandwich");
        published.state = Some(ItemState::Published);
        repo.create(published).unwrap();
        let pending = repo.create(input("Paneer Tikka Wrap")).unwrap().id;

        repo.set_state(pending, ItemState::Published).unwrap();

        assert!(repo
            .list()
            .iter()
            .all(|item| item.state == ItemState::Published));
        assert_eq!(
            repo.stats(),
            MenuStats {
                total: 2,
                published: 2,
                pending: 0
            }
        );
    }

    #[test]
    fn stats_count_draft_as_pending() {
        let mut repo = MenuRepository::new();
        let mut published = input("A");
        published.state = Some(ItemState::Published);
        repo.create(published).unwrap();
        repo.create(input("B")).unwrap();
        let mut unavailable = input("C");
        unavailable.state = Some(ItemState::Unavailable);
        repo.create(unavailable).unwrap();

        assert_eq!(
            repo.stats(),
            MenuStats {
                total: 3,
                published: 1,
                pending: 1
            }
        );
    }
}
