pub const DEFAULT_REPORT_LIMIT: u64 = 20;
pub const MAX_REPORT_LIMIT: u64 = 100;

#[derive(Debug, Clone, Default)]
pub struct GetOperationReportsFilter {
    pub location_id: Option<String>,
    pub report_type: Option<String>,
    pub limit: Option<u64>,
}

impl GetOperationReportsFilter {
    pub fn effective_limit(&self) -> u64 {
        self.limit
            .unwrap_or(DEFAULT_REPORT_LIMIT)
            .clamp(1, MAX_REPORT_LIMIT)
    }
}
