pub mod operation_report_repository;
