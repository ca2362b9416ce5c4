pub mod menu_item_repository;
