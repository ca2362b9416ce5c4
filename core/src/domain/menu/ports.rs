use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, menu::entities::MenuItem};

#[cfg_attr(test, mockall::automock)]
pub trait MenuItemRepository: Send + Sync {
    /// Most recently created menu items first.
    fn fetch_recent(
        &self,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<MenuItem>, CoreError>> + Send;
}
