pub mod aggregate;
pub mod filter;
pub mod repository;
pub mod seed;

pub use aggregate::{MenuItem, MenuItemId, MenuItemInput, MenuItemPatch};
pub use filter::{available_count, MenuFilter};
pub use repository::{MenuRepository, MenuStats, RepositoryError};
