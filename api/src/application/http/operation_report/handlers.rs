pub mod get_operation_reports;
