use std::future::Future;

use tracing::warn;

use crate::domain::{
    common::entities::app_errors::CoreError,
    haccp::{
        entities::{DataSource, GenerationWarning, HaccpPlan},
        ports::HaccpPlanRepository,
    },
};

/// Awaits a read, substituting the default value when it fails.
/// The failure is logged and recorded in `warnings`.
pub async fn fetch_or_default<T, F>(
    source: DataSource,
    fetch: F,
    warnings: &mut Vec<GenerationWarning>,
) -> T
where
    T: Default,
    F: Future<Output = Result<T, CoreError>>,
{
    match fetch.await {
        Ok(value) => value,
        Err(e) => {
            warn!(source = source.as_str(), error = %e, "Fetch failed, continuing without it");
            warnings.push(GenerationWarning::FetchFailed {
                source,
                reason: e.to_string(),
            });
            T::default()
        }
    }
}

/// Applies `op` to every item in order. A failing item does not stop the
/// remaining ones; the failures are returned alongside the item they
/// belong to.
pub async fn for_each_best_effort<'a, T, F, Fut, O>(
    items: &'a [T],
    mut op: F,
) -> Vec<(&'a T, CoreError)>
where
    F: FnMut(&'a T) -> Fut,
    Fut: Future<Output = Result<O, CoreError>>,
{
    let mut failures = Vec::new();

    for item in items {
        if let Err(e) = op(item).await {
            failures.push((item, e));
        }
    }

    failures
}

/// Marks every given plan inactive.
pub async fn archive_plans<HP: HaccpPlanRepository>(
    repository: &HP,
    plans: &[HaccpPlan],
) -> Vec<GenerationWarning> {
    for_each_best_effort(plans, |plan| repository.set_active(plan.id, false))
        .await
        .into_iter()
        .map(|(plan, e)| {
            warn!(plan_id = %plan.id, error = %e, "Failed to archive HACCP plan");
            GenerationWarning::ArchiveFailed {
                plan_id: plan.id,
                reason: e.to_string(),
            }
        })
        .collect()
}
