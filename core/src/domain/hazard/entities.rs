use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HazardType {
    Biological,
    Chemical,
    Physical,
    Other,
}

impl From<&str> for HazardType {
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "biological" => HazardType::Biological,
            "chemical" => HazardType::Chemical,
            "physical" => HazardType::Physical,
            _ => HazardType::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Hazard {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub hazard_type: HazardType,
    pub description: String,
    pub severity: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Hazard {
    pub fn new(hazard_type: HazardType, description: String, severity: Option<String>) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            hazard_type,
            description,
            severity,
            created_at: now,
        }
    }
}

/// A process stage with a monitored food-safety limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CriticalControlPoint {
    pub id: Uuid,
    pub name: String,
    pub stage: Option<String>,
    pub monitoring_parameter: Option<String>,
    pub critical_limit: Option<String>,
    pub unit: Option<String>,
    pub check_frequency: Option<String>,
    pub monitoring_method: Option<String>,
    pub responsible_role: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl CriticalControlPoint {
    pub fn new(name: String) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name,
            stage: None,
            monitoring_parameter: None,
            critical_limit: None,
            unit: None,
            check_frequency: None,
            monitoring_method: None,
            responsible_role: None,
            created_at: now,
        }
    }

    pub fn is_celsius(&self) -> bool {
        self.unit
            .as_deref()
            .is_some_and(|unit| unit.eq_ignore_ascii_case("celsius"))
    }
}
