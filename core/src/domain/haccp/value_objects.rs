use serde_json::{Map, Value};

use crate::domain::{
    haccp::entities::{GeneratePlanError, GenerationWarning, HaccpPlan},
    operation_report::entities::OperationReport,
};

pub const DEFAULT_LOCATION_ID: &str = "default";
pub const DEFAULT_LOCATION_NAME: &str = "Main";

pub const MENU_ITEM_FETCH_LIMIT: u64 = 500;
pub const CCP_FETCH_LIMIT: u64 = 200;
pub const HAZARD_FETCH_LIMIT: u64 = 100;
pub const ASSET_FETCH_LIMIT: u64 = 100;
pub const EXISTING_PLAN_FETCH_LIMIT: u64 = 10;
pub const LINKED_MENU_ITEM_LIMIT: usize = 50;

pub const DEFAULT_PLAN_HISTORY_LIMIT: u64 = 20;
pub const MAX_PLAN_HISTORY_LIMIT: u64 = 100;

/// Validated input of a plan generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratePlanInput {
    pub user_email: String,
    pub location_id: String,
    pub location_name: String,
}

/// Raw request body of a plan generation.
///
/// Clients either post the JSON object directly or post it JSON-encoded
/// as a string, so a string payload is decoded a second time.
pub struct GeneratePlanRequest;

impl GeneratePlanRequest {
    pub fn parse(body: &[u8]) -> Result<GeneratePlanInput, GeneratePlanError> {
        let value: Value =
            serde_json::from_slice(body).map_err(|_| GeneratePlanError::MalformedRequest)?;

        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<GeneratePlanInput, GeneratePlanError> {
        let object = match value {
            Value::Object(object) => object,
            Value::String(encoded) => match serde_json::from_str::<Value>(&encoded) {
                Ok(Value::Object(object)) => object,
                _ => return Err(GeneratePlanError::MalformedRequest),
            },
            _ => return Err(GeneratePlanError::MalformedRequest),
        };

        let user_email =
            non_blank(&object, "user_email").ok_or(GeneratePlanError::MissingField("user_email"))?;

        Ok(GeneratePlanInput {
            user_email,
            location_id: non_blank(&object, "location_id")
                .unwrap_or_else(|| DEFAULT_LOCATION_ID.to_string()),
            location_name: non_blank(&object, "location_name")
                .unwrap_or_else(|| DEFAULT_LOCATION_NAME.to_string()),
        })
    }
}

fn non_blank(object: &Map<String, Value>, key: &str) -> Option<String> {
    object
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Records written by a successful generation.
#[derive(Debug, Clone)]
pub struct GeneratedPlan {
    pub plan: HaccpPlan,
    pub report: OperationReport,
    pub warnings: Vec<GenerationWarning>,
}

impl GeneratedPlan {
    pub fn message(&self) -> String {
        format!(
            "HACCP plan v{} generated for {}",
            self.plan.version, self.plan.location_name
        )
    }
}

pub fn plan_history_limit(limit: Option<u64>) -> u64 {
    limit
        .unwrap_or(DEFAULT_PLAN_HISTORY_LIMIT)
        .clamp(1, MAX_PLAN_HISTORY_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_object_body() {
        let input = GeneratePlanRequest::parse(
            br#"{"user_email":"chef@x.com","location_id":"loc1","location_name":"Downtown"}"#,
        )
        .unwrap();

        assert_eq!(
            input,
            GeneratePlanInput {
                user_email: "chef@x.com".to_string(),
                location_id: "loc1".to_string(),
                location_name: "Downtown".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_string_encoded_body() {
        let encoded = json!(r#"{"user_email":"chef@x.com"}"#).to_string();
        let input = GeneratePlanRequest::parse(encoded.as_bytes()).unwrap();

        assert_eq!(input.user_email, "chef@x.com");
    }

    #[test]
    fn test_defaults_are_applied() {
        let input = GeneratePlanRequest::from_value(json!({
            "user_email": "chef@x.com",
            "location_id": "  ",
        }))
        .unwrap();

        assert_eq!(input.location_id, "default");
        assert_eq!(input.location_name, "Main");
    }

    #[test]
    fn test_malformed_bodies_are_rejected() {
        let bodies: [&[u8]; 5] = [
            b"not json",
            b"[1,2,3]",
            b"42",
            br#""still not json""#,
            b"",
        ];

        for body in bodies {
            assert_eq!(
                GeneratePlanRequest::parse(body),
                Err(GeneratePlanError::MalformedRequest)
            );
        }
    }

    #[test]
    fn test_missing_user_email_is_rejected() {
        for value in [
            json!({}),
            json!({"user_email": ""}),
            json!({"user_email": 12}),
            json!({"location_id": "loc1"}),
        ] {
            let err = GeneratePlanRequest::from_value(value).unwrap_err();
            assert_eq!(err, GeneratePlanError::MissingField("user_email"));
            assert_eq!(err.to_string(), "Missing user_email");
        }
    }

    #[test]
    fn test_plan_history_limit() {
        assert_eq!(plan_history_limit(None), 20);
        assert_eq!(plan_history_limit(Some(1_000)), 100);
        assert_eq!(plan_history_limit(Some(5)), 5);
    }
}
