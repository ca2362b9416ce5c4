pub mod assets;
pub mod critical_control_points;
pub mod haccp_plans;
pub mod hazards;
pub mod menu_items;
pub mod operation_reports;
