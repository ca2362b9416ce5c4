pub mod mappers;
pub mod repositories;

pub use repositories::asset_repository::PostgresAssetRepository;
