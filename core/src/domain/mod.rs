pub mod asset;
pub mod common;
pub mod haccp;
pub mod hazard;
pub mod health;
pub mod menu;
pub mod operation_report;
