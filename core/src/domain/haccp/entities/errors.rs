use std::fmt;

use thiserror::Error;
use uuid::Uuid;

use crate::domain::common::entities::app_errors::CoreError;

/// Failures that abort a plan generation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GeneratePlanError {
    #[error("Invalid request format")]
    MalformedRequest,

    #[error("Missing {0}")]
    MissingField(&'static str),

    #[error("Invalid version format: {0:?}")]
    InvalidVersionFormat(String),

    #[error("Failed to persist {entity}: {source}")]
    Persistence {
        entity: &'static str,
        source: CoreError,
    },
}

impl GeneratePlanError {
    /// Validation failures are rejected before any data access.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            GeneratePlanError::MalformedRequest | GeneratePlanError::MissingField(_)
        )
    }
}

/// Collection read by the generator before assembling the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    MenuItems,
    CriticalControlPoints,
    Hazards,
    Assets,
    ExistingPlans,
}

impl DataSource {
    pub fn as_str(&self) -> &str {
        match self {
            DataSource::MenuItems => "menu items",
            DataSource::CriticalControlPoints => "critical control points",
            DataSource::Hazards => "hazards",
            DataSource::Assets => "assets",
            DataSource::ExistingPlans => "existing HACCP plans",
        }
    }
}

/// Failures absorbed during a generation that did not abort it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationWarning {
    FetchFailed { source: DataSource, reason: String },
    ArchiveFailed { plan_id: Uuid, reason: String },
}

impl fmt::Display for GenerationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationWarning::FetchFailed { source, reason } => {
                write!(f, "could not fetch {}: {}", source.as_str(), reason)
            }
            GenerationWarning::ArchiveFailed { plan_id, reason } => {
                write!(f, "could not archive plan {}: {}", plan_id, reason)
            }
        }
    }
}
