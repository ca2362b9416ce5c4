use std::sync::Arc;

use galley_core::{
    application::GalleyService,
    domain::{
        haccp::ports::HaccpPlanService, health::ports::HealthCheckService,
        operation_report::ports::OperationReportService,
    },
};

use crate::args::Args;

/// Services the HTTP layer depends on.
pub trait AppServices:
    HaccpPlanService + OperationReportService + HealthCheckService + Clone + 'static
{
}

impl<T> AppServices for T where
    T: HaccpPlanService + OperationReportService + HealthCheckService + Clone + 'static
{
}

#[derive(Clone)]
pub struct AppState<S: AppServices = GalleyService> {
    pub args: Arc<Args>,
    pub service: S,
}

impl<S: AppServices> AppState<S> {
    pub fn new(args: Arc<Args>, service: S) -> Self {
        Self { args, service }
    }
}
