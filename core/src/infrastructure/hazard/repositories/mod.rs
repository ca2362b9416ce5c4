pub mod critical_control_point_repository;
pub mod hazard_repository;
