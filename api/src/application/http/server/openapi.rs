use crate::application::http::{
    haccp_plan::router::{HaccpPlanApiDoc, LocationHaccpPlanApiDoc},
    operation_report::router::OperationReportApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Galley API"
    ),
    nest(
        (path = "/haccp-plans", api = HaccpPlanApiDoc),
        (path = "/locations", api = LocationHaccpPlanApiDoc),
        (path = "/operation-reports", api = OperationReportApiDoc),
    )
)]
pub struct ApiDoc;
