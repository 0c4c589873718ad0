//! Seeded compliance records

use crate::error::Result;
use crate::models::compliance::{ComplianceLog, ComplianceRecord};
use crate::models::types::ComplianceCategory;

/// Build the sample compliance log the portal ships with
pub fn sample_compliance_log() -> Result<ComplianceLog> {
    let records = vec![
        ComplianceRecord::new(
            "Annual Veterinary Inspection",
            ComplianceCategory::HealthManagement,
            "2024-01-15".parse()?,
        )
        .completed_on("2024-01-15".parse()?)
        .with_notes("All animals healthy, no issues found")
        .with_inspector("Dr. Sarah Johnson")
        .with_certificate("CERT-2024-001")
        .with_next_due("2025-01-15".parse()?),
        ComplianceRecord::new(
            "Swine Flu Vaccination - Batch A",
            ComplianceCategory::Vaccination,
            "2024-02-10".parse()?,
        )
        .completed_on("2024-02-10".parse()?)
        .with_notes("150 pigs vaccinated successfully")
        .with_inspector("Farm Staff")
        .with_next_due("2024-08-10".parse()?),
        ComplianceRecord::new(
            "Waste Disposal Audit",
            ComplianceCategory::Environmental,
            "2024-03-01".parse()?,
        )
        .completed_on("2024-03-01".parse()?)
        .with_notes("Proper disposal protocols followed")
        .with_inspector("Environmental Officer")
        .with_certificate("ENV-2024-003")
        .with_next_due("2024-09-01".parse()?),
        ComplianceRecord::new(
            "Biosecurity Protocol Review",
            ComplianceCategory::Biosecurity,
            "2024-12-15".parse()?,
        )
        .with_notes("Quarterly review scheduled")
        .with_next_due("2025-03-15".parse()?),
        ComplianceRecord::new(
            "Feed Quality Testing",
            ComplianceCategory::Nutrition,
            "2024-11-30".parse()?,
        )
        .overdue()
        .with_notes("Monthly feed quality assessment")
        .with_next_due("2024-12-30".parse()?),
        ComplianceRecord::new(
            "Poultry Health Check - Coop B",
            ComplianceCategory::HealthManagement,
            "2024-12-10".parse()?,
        )
        .with_notes("Routine health monitoring")
        .with_next_due("2025-01-10".parse()?),
    ];

    Ok(ComplianceLog::from_records(records))
}

/// Compliance guidance shown on the tracking page side panel
#[must_use]
pub fn compliance_insights() -> Vec<String> {
    vec![
        "Schedule upcoming biosecurity review before December 15th deadline".to_string(),
        "Feed quality testing is overdue - immediate action required".to_string(),
        "Consider implementing automated compliance reminders".to_string(),
        "Your vaccination schedule shows good compliance - maintain current practices"
            .to_string(),
    ]
}
