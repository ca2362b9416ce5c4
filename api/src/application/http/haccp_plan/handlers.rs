pub mod generate_haccp_plan;
pub mod get_active_haccp_plan;
pub mod get_haccp_plan;
pub mod get_haccp_plan_document;
pub mod get_location_haccp_plans;
