use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// Kitchen equipment such as fridges, probes or combi ovens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Asset {
    pub id: Uuid,
    pub name: String,
    pub asset_type: Option<String>,
    pub location_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Asset {
    pub fn new(name: String, asset_type: Option<String>, location_id: Option<String>) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name,
            asset_type,
            location_id,
            created_at: now,
        }
    }
}
