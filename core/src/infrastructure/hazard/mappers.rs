use crate::domain::hazard::entities::{CriticalControlPoint, Hazard, HazardType};
use crate::entity::{
    critical_control_points::Model as CriticalControlPointModel, hazards::Model as HazardModel,
};

impl From<HazardModel> for Hazard {
    fn from(model: HazardModel) -> Self {
        Hazard {
            id: model.id,
            hazard_type: HazardType::from(model.hazard_type.as_str()),
            description: model.description,
            severity: model.severity,
            created_at: model.created_at.and_utc(),
        }
    }
}

impl From<CriticalControlPointModel> for CriticalControlPoint {
    fn from(model: CriticalControlPointModel) -> Self {
        CriticalControlPoint {
            id: model.id,
            name: model.name,
            stage: model.stage,
            monitoring_parameter: model.monitoring_parameter,
            critical_limit: model.critical_limit,
            unit: model.unit,
            check_frequency: model.check_frequency,
            monitoring_method: model.monitoring_method,
            responsible_role: model.responsible_role,
            created_at: model.created_at.and_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn test_unknown_hazard_type_maps_to_other() {
        let hazard = Hazard::from(HazardModel {
            id: Uuid::nil(),
            hazard_type: "radiological".to_string(),
            description: "X-ray contamination".to_string(),
            severity: None,
            created_at: Utc::now().naive_utc(),
        });

        assert_eq!(hazard.hazard_type, HazardType::Other);
    }
}
