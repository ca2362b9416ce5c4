pub mod mappers;
pub mod repositories;

pub use repositories::haccp_plan_repository::PostgresHaccpPlanRepository;
