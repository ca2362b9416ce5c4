pub mod asset_repository;
