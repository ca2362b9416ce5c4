pub mod asset;
pub mod db;
pub mod haccp;
pub mod hazard;
pub mod health;
pub mod memory;
pub mod menu;
pub mod operation_report;
