pub mod mappers;
pub mod repositories;

pub use repositories::menu_item_repository::PostgresMenuItemRepository;
