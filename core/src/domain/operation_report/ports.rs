use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    operation_report::{
        entities::OperationReport, value_objects::GetOperationReportsFilter,
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait OperationReportRepository: Send + Sync {
    fn create_report(
        &self,
        report: OperationReport,
    ) -> impl Future<Output = Result<OperationReport, CoreError>> + Send;

    fn fetch_reports(
        &self,
        filter: GetOperationReportsFilter,
    ) -> impl Future<Output = Result<Vec<OperationReport>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait OperationReportService: Send + Sync {
    fn get_reports(
        &self,
        filter: GetOperationReportsFilter,
    ) -> impl Future<Output = Result<Vec<OperationReport>, CoreError>> + Send;
}
