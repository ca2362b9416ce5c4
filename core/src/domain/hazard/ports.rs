use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    hazard::entities::{CriticalControlPoint, Hazard},
};

#[cfg_attr(test, mockall::automock)]
pub trait HazardRepository: Send + Sync {
    fn fetch_recent(
        &self,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<Hazard>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait CriticalControlPointRepository: Send + Sync {
    fn fetch_recent(
        &self,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<CriticalControlPoint>, CoreError>> + Send;
}
