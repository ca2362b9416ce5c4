pub mod haccp_plan;
pub mod health;
pub mod operation_report;
pub mod server;
