pub mod mappers;
pub mod repositories;

pub use repositories::{
    critical_control_point_repository::PostgresCriticalControlPointRepository,
    hazard_repository::PostgresHazardRepository,
};
