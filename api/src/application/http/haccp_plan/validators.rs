use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Documented shape of a generation request.
///
/// The handler reads the raw body because clients may also send this
/// object JSON-encoded as a string.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenerateHaccpPlanValidator {
    pub user_email: String,

    #[serde(default)]
    pub location_id: Option<String>,

    #[serde(default)]
    pub location_name: Option<String>,
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetHaccpPlansQuery {
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: Option<u64>,
}
