pub mod mappers;
pub mod repositories;

pub use repositories::operation_report_repository::PostgresOperationReportRepository;
