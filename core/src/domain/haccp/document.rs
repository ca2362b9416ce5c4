use chrono::{DateTime, Utc};

use crate::domain::hazard::entities::{CriticalControlPoint, Hazard, HazardType};

pub const SECTION_TITLES: [&str; 8] = [
    "1. BUSINESS INFORMATION",
    "2. PROCESS FLOW OVERVIEW",
    "3. HAZARD ANALYSIS",
    "4. CRITICAL CONTROL POINTS",
    "5. CORRECTIVE ACTIONS",
    "6. MONITORING PROCEDURES",
    "7. VERIFICATION PROCEDURES",
    "8. RECORD-KEEPING PROCEDURES",
];

const NOT_SPECIFIED: &str = "Not specified";
const DEFAULT_TEMPERATURE_FREQUENCY: &str = "Per batch";

const PROCESS_STAGES: [(&str, &str); 6] = [
    (
        "Delivery",
        "Check supplier temperatures, packaging integrity and use-by dates on receipt",
    ),
    (
        "Storage",
        "Keep chilled food at 0-5°C and frozen food at -18°C or below, raw below ready-to-eat",
    ),
    (
        "Preparation",
        "Use colour-coded equipment and separate areas to prevent cross-contamination",
    ),
    (
        "Cooking",
        "Cook to a core temperature of at least 75°C, verified with a calibrated probe",
    ),
    (
        "Holding",
        "Hot hold at 63°C or above, chilled hold at 5°C or below",
    ),
    (
        "Serving",
        "Serve promptly, check allergen information and discard food held beyond limits",
    ),
];

const FALLBACK_BIOLOGICAL: [&str; 3] = [
    "- Salmonella in raw poultry and eggs (Severity: High)",
    "- Listeria monocytogenes in chilled ready-to-eat foods (Severity: High)",
    "- E. coli O157 in undercooked minced beef (Severity: High)",
];

const FALLBACK_CHEMICAL: [&str; 3] = [
    "- Cleaning chemical residues on food contact surfaces (Severity: Medium)",
    "- Undeclared allergens through cross-contact (Severity: High)",
    "- Pesticide residues on unwashed produce (Severity: Low)",
];

const FALLBACK_PHYSICAL: [&str; 3] = [
    "- Glass fragments from broken containers or light fittings (Severity: High)",
    "- Metal fragments from worn equipment (Severity: Medium)",
    "- Bone fragments in meat and fish (Severity: Medium)",
];

const CORRECTIVE_ACTIONS: &str = "\
Immediate Actions:
- Stop the process and isolate the affected product
- Inform the duty manager or head chef
- Record the deviation, time and product batch

Corrective Measures:
- Re-cook, re-chill or discard the product depending on the deviation
- Identify and fix the root cause (equipment fault, procedure, training)
- Adjust the equipment or process and re-check before resuming

Verification Steps:
- Confirm the critical limit is met again before service continues
- Review the corrective action record within 24 hours
- Update staff training or procedures if the deviation repeats";

const VERIFICATION_PROCEDURES: &str = "\
Daily:
- Review monitoring records for completeness and signatures
- Check probe thermometers against ice water (0°C) and boiling water (100°C)

Weekly:
- Manager review of temperature logs and corrective action records
- Spot checks of labelling, stock rotation and cleaning standards

Monthly:
- Internal audit of the HACCP plan against current practice
- Review of supplier approvals and delivery records

Quarterly:
- Full HACCP plan review including menu and process changes
- Calibration of all temperature measuring equipment";

const RECORD_KEEPING: &str = "\
Records to be maintained:
- Delivery and goods-inward checks
- Fridge, freezer and hot-holding temperature logs
- Cooking, cooling and reheating temperature records
- Cleaning schedules and sign-off sheets
- Corrective action records
- Staff training records
- Supplier approval records

Retention Policy:
- Monitoring records are kept for a minimum of 12 months
- Training records are kept for the duration of employment plus 12 months
- Superseded HACCP plans are archived, never deleted
- Records must be available to inspectors on request";

/// Everything the plan document is built from.
pub struct DocumentContext<'a> {
    pub location_name: &'a str,
    pub location_id: &'a str,
    pub version: &'a str,
    pub generated_at: DateTime<Utc>,
    pub menu_item_count: usize,
    pub ccps: &'a [CriticalControlPoint],
    pub hazards: &'a [Hazard],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSection {
    pub title: String,
    pub body: String,
}

impl DocumentSection {
    fn new(title: &str, body: String) -> Self {
        Self {
            title: title.to_string(),
            body,
        }
    }

    fn render(&self) -> String {
        let underline = "=".repeat(self.title.chars().count());
        format!("{}\n{}\n{}\n", self.title, underline, self.body)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HaccpDocument {
    pub sections: Vec<DocumentSection>,
}

impl HaccpDocument {
    pub fn assemble(context: &DocumentContext<'_>) -> Self {
        let bodies = [
            business_information(context),
            process_flow(),
            hazard_analysis(context.hazards),
            critical_control_points(context.ccps),
            CORRECTIVE_ACTIONS.to_string(),
            monitoring_procedures(context.ccps),
            VERIFICATION_PROCEDURES.to_string(),
            RECORD_KEEPING.to_string(),
        ];

        let sections = SECTION_TITLES
            .iter()
            .zip(bodies)
            .map(|(title, body)| DocumentSection::new(title, body))
            .collect();

        Self { sections }
    }

    pub fn render(&self) -> String {
        self.sections
            .iter()
            .map(DocumentSection::render)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn business_information(context: &DocumentContext<'_>) -> String {
    [
        format!("Business Name: {}", context.location_name),
        format!("Location ID: {}", context.location_id),
        format!("Plan Version: {}", context.version),
        format!(
            "Generated: {}",
            context.generated_at.format("%-d %B %Y at %H:%M UTC")
        ),
        format!("Menu Items Covered: {}", context.menu_item_count),
        format!("Critical Control Points: {}", context.ccps.len()),
        "Plan Status: Active & Implemented".to_string(),
    ]
    .join("\n")
}

fn process_flow() -> String {
    let mut lines = vec![
        format!(
            "Flow: {}",
            PROCESS_STAGES
                .iter()
                .map(|(stage, _)| *stage)
                .collect::<Vec<_>>()
                .join(" -> ")
        ),
        String::new(),
    ];

    for (index, (stage, description)) in PROCESS_STAGES.iter().enumerate() {
        lines.push(format!("{}. {}", index + 1, stage));
        lines.push(format!("   - {}", description));
    }

    lines.join("\n")
}

fn hazard_analysis(hazards: &[Hazard]) -> String {
    let subsections = [
        ("3.1 Biological Hazards", HazardType::Biological, &FALLBACK_BIOLOGICAL),
        ("3.2 Chemical Hazards", HazardType::Chemical, &FALLBACK_CHEMICAL),
        ("3.3 Physical Hazards", HazardType::Physical, &FALLBACK_PHYSICAL),
    ];

    subsections
        .iter()
        .map(|(heading, hazard_type, fallback)| {
            let recorded: Vec<String> = hazards
                .iter()
                .filter(|hazard| hazard.hazard_type == *hazard_type)
                .map(|hazard| {
                    format!(
                        "- {} (Severity: {})",
                        hazard.description,
                        hazard.severity.as_deref().unwrap_or(NOT_SPECIFIED)
                    )
                })
                .collect();

            let lines = if recorded.is_empty() {
                fallback.join("\n")
            } else {
                recorded.join("\n")
            };

            format!("{}\n{}", heading, lines)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn critical_control_points(ccps: &[CriticalControlPoint]) -> String {
    if ccps.is_empty() {
        return "No critical control points have been recorded yet.".to_string();
    }

    ccps.iter()
        .enumerate()
        .map(|(index, ccp)| {
            [
                format!("CCP {}: {}", index + 1, ccp.name),
                format!("  Process Stage: {}", field(&ccp.stage)),
                format!("  Monitoring Parameter: {}", field(&ccp.monitoring_parameter)),
                format!("  Critical Limit: {}", critical_limit(ccp)),
                format!("  Check Frequency: {}", field(&ccp.check_frequency)),
                format!("  Monitoring Method: {}", field(&ccp.monitoring_method)),
                format!("  Responsible Role: {}", field(&ccp.responsible_role)),
            ]
            .join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn monitoring_procedures(ccps: &[CriticalControlPoint]) -> String {
    let temperature_frequency = ccps
        .iter()
        .find(|ccp| ccp.is_celsius())
        .and_then(|ccp| ccp.check_frequency.as_deref())
        .unwrap_or(DEFAULT_TEMPERATURE_FREQUENCY);

    [
        "Temperature Monitoring:".to_string(),
        format!("- Frequency: {}", temperature_frequency),
        "- Use a calibrated probe thermometer, cleaned and sanitised between uses".to_string(),
        "- Record readings immediately on the monitoring log".to_string(),
        String::new(),
        "Visual Checks:".to_string(),
        "- Opening and closing checks of storage areas and equipment".to_string(),
        "- Date labels and stock rotation checked at every delivery".to_string(),
        String::new(),
        "Responsibilities:".to_string(),
        "- The person carrying out a check signs the record".to_string(),
        "- The shift supervisor reviews records before close of service".to_string(),
    ]
    .join("\n")
}

fn field(value: &Option<String>) -> &str {
    value
        .as_deref()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or(NOT_SPECIFIED)
}

fn critical_limit(ccp: &CriticalControlPoint) -> String {
    let limit = field(&ccp.critical_limit);
    if limit == NOT_SPECIFIED {
        return limit.to_string();
    }

    match ccp.unit.as_deref() {
        _ if ccp.is_celsius() => format!("{}°C", limit),
        Some(unit) if !unit.trim().is_empty() => format!("{} {}", limit, unit),
        _ => limit.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ccp(name: &str, unit: Option<&str>, frequency: Option<&str>) -> CriticalControlPoint {
        let mut ccp = CriticalControlPoint::new(name.to_string());
        ccp.stage = Some("Cooking".to_string());
        ccp.critical_limit = Some("75".to_string());
        ccp.unit = unit.map(str::to_string);
        ccp.check_frequency = frequency.map(str::to_string);
        ccp
    }

    fn render(ccps: &[CriticalControlPoint], hazards: &[Hazard]) -> String {
        HaccpDocument::assemble(&DocumentContext {
            location_name: "Downtown",
            location_id: "loc1",
            version: "1.0",
            generated_at: Utc::now(),
            menu_item_count: 3,
            ccps,
            hazards,
        })
        .render()
    }

    fn section<'a>(document: &'a str, number: usize) -> &'a str {
        let start = document
            .find(SECTION_TITLES[number - 1])
            .expect("section present");
        let end = SECTION_TITLES
            .get(number)
            .and_then(|next| document.find(next))
            .unwrap_or(document.len());
        &document[start..end]
    }

    #[test]
    fn test_sections_in_fixed_order() {
        let document = render(&[], &[]);

        let positions: Vec<usize> = SECTION_TITLES
            .iter()
            .map(|title| document.find(title).expect("title present"))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));

        for title in SECTION_TITLES {
            assert_eq!(document.matches(title).count(), 1);
            let underline = "=".repeat(title.chars().count());
            assert!(document.contains(&format!("{}\n{}\n", title, underline)));
        }
    }

    #[test]
    fn test_one_block_per_ccp() {
        let ccps = [
            ccp("Cook chicken", Some("celsius"), Some("Every 2 hours")),
            ccp("Chill rice", Some("minutes"), None),
        ];
        let document = render(&ccps, &[]);
        let ccp_section = section(&document, 4);

        assert!(ccp_section.contains("CCP 1: Cook chicken"));
        assert!(ccp_section.contains("CCP 2: Chill rice"));
        assert_eq!(ccp_section.matches("CCP ").count(), 2);
        assert!(ccp_section.contains("Critical Limit: 75°C"));
        assert!(ccp_section.contains("Critical Limit: 75 minutes"));
        assert!(ccp_section.contains("Monitoring Method: Not specified"));
    }

    #[test]
    fn test_blank_critical_limit_has_no_unit() {
        let mut blank = ccp("Cook chicken", Some("celsius"), None);
        blank.critical_limit = Some("  ".to_string());
        let document = render(&[blank], &[]);
        let ccp_section = section(&document, 4);

        assert!(ccp_section.contains("Critical Limit: Not specified\n"));
        assert!(!ccp_section.contains("Not specified°C"));
    }

    #[test]
    fn test_ccp_fields_in_fixed_order() {
        let document = render(&[ccp("Cook chicken", Some("celsius"), Some("Hourly"))], &[]);
        let ccp_section = section(&document, 4);

        let labels = [
            "Process Stage:",
            "Monitoring Parameter:",
            "Critical Limit:",
            "Check Frequency:",
            "Monitoring Method:",
            "Responsible Role:",
        ];
        let positions: Vec<usize> = labels
            .iter()
            .map(|label| ccp_section.find(label).expect("label present"))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_monitoring_uses_first_celsius_frequency() {
        let ccps = [
            ccp("Chill rice", Some("minutes"), Some("Every batch")),
            ccp("Cook chicken", Some("celsius"), Some("Every 2 hours")),
            ccp("Hot hold", Some("celsius"), Some("Hourly")),
        ];
        let document = render(&ccps, &[]);

        assert!(section(&document, 6).contains("- Frequency: Every 2 hours"));
    }

    #[test]
    fn test_monitoring_falls_back_to_per_batch() {
        let document = render(&[ccp("Chill rice", Some("minutes"), Some("Hourly"))], &[]);

        assert!(section(&document, 6).contains("- Frequency: Per batch"));
    }

    #[test]
    fn test_hazard_fallbacks_when_none_recorded() {
        let document = render(&[], &[]);
        let hazards = section(&document, 3);

        assert!(hazards.contains(&format!(
            "3.1 Biological Hazards\n{}",
            FALLBACK_BIOLOGICAL.join("\n")
        )));
        assert!(hazards.contains(&FALLBACK_CHEMICAL.join("\n")));
        assert!(hazards.contains(&FALLBACK_PHYSICAL.join("\n")));
    }

    #[test]
    fn test_recorded_hazards_replace_fallback_per_category() {
        let hazards = [
            Hazard::new(
                HazardType::Chemical,
                "Degreaser near prep area".to_string(),
                Some("High".to_string()),
            ),
            Hazard::new(HazardType::Other, "Pest activity".to_string(), None),
        ];
        let document = render(&[], &hazards);
        let analysis = section(&document, 3);

        assert!(analysis.contains("- Degreaser near prep area (Severity: High)"));
        assert!(!analysis.contains(FALLBACK_CHEMICAL[0]));
        assert!(analysis.contains(&FALLBACK_BIOLOGICAL.join("\n")));
        assert!(!analysis.contains("Pest activity"));
    }

    #[test]
    fn test_business_information() {
        let document = render(&[ccp("Cook chicken", None, None)], &[]);
        let info = section(&document, 1);

        assert!(info.contains("Business Name: Downtown"));
        assert!(info.contains("Plan Version: 1.0"));
        assert!(info.contains("Menu Items Covered: 3"));
        assert!(info.contains("Critical Control Points: 1"));
        assert!(info.contains("Plan Status: Active & Implemented"));
    }
}
