use std::future::Future;

use crate::domain::{asset::entities::Asset, common::entities::app_errors::CoreError};

#[cfg_attr(test, mockall::automock)]
pub trait AssetRepository: Send + Sync {
    fn fetch_recent(&self, limit: u64)
    -> impl Future<Output = Result<Vec<Asset>, CoreError>> + Send;
}
