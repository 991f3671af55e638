use contracts::domain::menu_item::seed::seed_menu_items;
use contracts::domain::menu_item::{
    MenuItem, MenuItemId, MenuItemInput, MenuItemPatch, MenuRepository, MenuStats, RepositoryError,
};
use contracts::enums::ItemState;
use leptos::prelude::*;

/// Session-scoped menu repository shared by every page.
///
/// Wraps the repository in a signal so each mutation re-renders all views
/// reading from it. Created once in `App`, discarded when the tab closes;
/// nothing is persisted.
#[derive(Clone, Copy)]
pub struct MenuStore {
    repo: RwSignal<MenuRepository>,
}

impl MenuStore {
    pub fn new() -> Self {
        Self {
            repo: RwSignal::new(MenuRepository::with_items(seed_menu_items())),
        }
    }

    /// Current ordered collection (reactive read)
    pub fn items(&self) -> Vec<MenuItem> {
        self.repo.with(|repo| repo.list().to_vec())
    }

    pub fn get(&self, id: MenuItemId) -> Option<MenuItem> {
        self.repo.with(|repo| repo.get(id).cloned())
    }

    pub fn stats(&self) -> MenuStats {
        self.repo.with(|repo| repo.stats())
    }

    pub fn create(&self, input: MenuItemInput) -> Result<MenuItem, RepositoryError> {
        self.mutate(|repo| repo.create(input).cloned())
    }

    pub fn update(
        &self,
        id: MenuItemId,
        patch: MenuItemPatch,
    ) -> Result<MenuItem, RepositoryError> {
        self.mutate(|repo| repo.update(id, patch).cloned())
    }

    pub fn delete(&self, id: MenuItemId) -> Result<MenuItem, RepositoryError> {
        self.mutate(|repo| repo.delete(id))
    }

    pub fn set_state(&self, id: MenuItemId, state: ItemState) -> Result<MenuItem, RepositoryError> {
        self.mutate(|repo| repo.set_state(id, state).cloned())
    }

    fn mutate<T>(
        &self,
        op: impl FnOnce(&mut MenuRepository) -> Result<T, RepositoryError>,
    ) -> Result<T, RepositoryError> {
        let mut result = None;
        self.repo.update(|repo| result = Some(op(repo)));
        result.expect("repository update closure always runs")
    }
}

impl Default for MenuStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_menu_store() -> MenuStore {
    use_context::<MenuStore>().expect("MenuStore not provided in context")
}
