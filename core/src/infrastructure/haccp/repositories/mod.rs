pub mod haccp_plan_repository;
