//! Farmer profile model
//!
//! This module contains the FarmerProfile sections (personal details, farm
//! details, notification preferences), earned achievements, and the
//! activity summary aggregated across the other registries for the
//! profile page.

use crate::models::alert::AlertBoard;
use crate::models::compliance::ComplianceLog;
use crate::models::training::TrainingCatalog;
use crate::models::types::{RiskLevel, Species};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Personal details of the account holder
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonalInfo {
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Contact email
    pub email: String,
    /// Contact phone number
    pub phone: String,
    /// Date of birth
    pub date_of_birth: Option<NaiveDate>,
    /// Street address
    pub address: String,
    /// City
    pub city: String,
    /// State or province
    pub state: String,
    /// Postal code
    pub zip_code: String,
}

/// Details of the farm operation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FarmInfo {
    /// Farm name
    pub farm_name: String,
    /// Operation description (e.g. "Mixed Livestock")
    pub farm_type: String,
    /// Year the farm was established
    pub established_year: u16,
    /// Total acreage
    pub total_acreage: u32,
    /// Species kept on the farm
    pub livestock_types: Vec<Species>,
    /// Current animal headcount
    pub animal_count: u32,
    /// Certifications held
    pub certifications: Vec<String>,
    /// Commercial, hobby, or family operation
    pub operation_type: String,
}

/// Notification delivery preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationPreferences {
    /// Email notifications for general updates
    pub email_notifications: bool,
    /// SMS delivery for urgent alerts
    pub sms_alerts: bool,
    /// Weekly activity digest
    pub weekly_reports: bool,
    /// Reminders for unfinished training modules
    pub training_reminders: bool,
    /// Notifications for approaching compliance deadlines
    pub compliance_alerts: bool,
    /// Preferred language
    pub language: String,
    /// IANA timezone name
    pub timezone: String,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email_notifications: true,
            sms_alerts: true,
            weekly_reports: false,
            training_reminders: true,
            compliance_alerts: true,
            language: "English".to_string(),
            timezone: "UTC".to_string(),
        }
    }
}

/// Profile of the farmer using the portal
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FarmerProfile {
    /// Personal details
    pub personal: PersonalInfo,
    /// Farm details
    pub farm: FarmInfo,
    /// Notification preferences
    pub preferences: NotificationPreferences,
}

impl FarmerProfile {
    /// Full display name
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.personal.first_name, self.personal.last_name)
    }
}

/// A milestone earned by the farmer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    /// Milestone title
    pub title: String,
    /// What was accomplished
    pub description: String,
    /// Date the milestone was earned
    pub date: NaiveDate,
}

impl Achievement {
    /// Create a new achievement
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            date,
        }
    }
}

/// Summary of the most recent risk assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskActivity {
    /// Date the assessment was completed
    pub completed_on: NaiveDate,
    /// Overall score
    pub score: u8,
    /// Risk tier
    pub level: RiskLevel,
}

impl RiskActivity {
    /// Status label shown on the profile card (e.g. "Low Risk")
    #[must_use]
    pub const fn status_label(&self) -> &'static str {
        match self.level {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::High => "High Risk",
        }
    }
}

/// Training progress rollup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingActivity {
    /// Modules at 100 percent progress
    pub modules_completed: usize,
    /// Modules in the catalog
    pub total_modules: usize,
    /// Certificates earned, one per completed module
    pub certificates_earned: usize,
    /// Hours of completed training, rounded
    pub hours_completed: u32,
}

/// Compliance rollup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplianceActivity {
    /// Completed activities
    pub completed_activities: usize,
    /// All activities in the log
    pub total_activities: usize,
    /// Completed share in percent
    pub compliance_rate: f64,
    /// Soonest pending deadline, if any
    pub next_deadline: Option<NaiveDate>,
}

/// Alert rollup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertActivity {
    /// Alerts currently active
    pub active_alerts: usize,
    /// Alerts resolved
    pub resolved_alerts: usize,
    /// Date the board was last reviewed
    pub last_checked: NaiveDate,
}

/// Cross-module activity summary for the profile page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivitySummary {
    /// Most recent risk assessment, if one was run
    pub risk_assessment: Option<RiskActivity>,
    /// Training rollup
    pub training: TrainingActivity,
    /// Compliance rollup
    pub compliance: ComplianceActivity,
    /// Alert rollup
    pub alerts: AlertActivity,
}

impl ActivitySummary {
    /// Aggregate the summary from the live registries
    ///
    /// `as_of` stamps the alert review date; the caller supplies the last
    /// assessment result, since assessments are not stored anywhere.
    #[must_use]
    pub fn collect(
        last_assessment: Option<RiskActivity>,
        catalog: &TrainingCatalog,
        log: &ComplianceLog,
        board: &AlertBoard,
        as_of: NaiveDate,
    ) -> Self {
        use crate::models::types::AlertStatus;

        let modules = catalog.all();
        let modules_completed = modules.iter().filter(|m| m.progress >= 100).count();
        let minutes_completed: f64 = modules
            .iter()
            .map(|m| f64::from(m.duration_minutes) * f64::from(m.progress.min(100)) / 100.0)
            .sum();

        let compliance_stats = log.stats();
        let next_deadline = log
            .upcoming_deadlines(1)
            .first()
            .map(|record| record.due_date);

        let alert_stats = board.stats();
        let resolved_alerts = board
            .find_by(|alert| alert.status == AlertStatus::Resolved)
            .len();

        Self {
            risk_assessment: last_assessment,
            training: TrainingActivity {
                modules_completed,
                total_modules: modules.len(),
                certificates_earned: modules_completed,
                hours_completed: (minutes_completed / 60.0).round() as u32,
            },
            compliance: ComplianceActivity {
                completed_activities: compliance_stats.completed,
                total_activities: log.count(),
                compliance_rate: compliance_stats.compliance_rate,
                next_deadline,
            },
            alerts: AlertActivity {
                active_alerts: alert_stats.active,
                resolved_alerts,
                last_checked: as_of,
            },
        }
    }
}
