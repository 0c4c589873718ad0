//! Common domain type definitions
//!
//! This module contains the enum types shared across the domain models:
//! livestock classification, risk tiers, alert and compliance states, and
//! the training taxonomy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Livestock type kept on a farm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LivestockType {
    /// Pig operation
    Pigs,
    /// Poultry operation
    Poultry,
    /// Mixed pigs and poultry
    Mixed,
}

impl LivestockType {
    /// Get the lowercase form used in generated text
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pigs => "pigs",
            Self::Poultry => "poultry",
            Self::Mixed => "mixed",
        }
    }
}

impl From<&str> for LivestockType {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "pigs" | "pig" => Self::Pigs,
            "poultry" => Self::Poultry,
            _ => Self::Mixed,
        }
    }
}

impl fmt::Display for LivestockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Species of an individual animal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    /// Pig
    Pig,
    /// Poultry (chickens, hens)
    Poultry,
}

impl Species {
    /// Get the display name for this species
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Pig => "Pig",
            Self::Poultry => "Poultry",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Overall biosecurity risk tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Score of 80 or above
    Low,
    /// Score of 60 up to 80
    Medium,
    /// Score below 60
    High,
}

impl RiskLevel {
    /// Classify an overall score (0-100) into a risk tier
    ///
    /// Boundary values belong to the higher tier: exactly 80 is low,
    /// exactly 60 is medium.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        if score >= 80 {
            Self::Low
        } else if score >= 60 {
            Self::Medium
        } else {
            Self::High
        }
    }

    /// Get the lowercase form used in generated text
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Health status of an animal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    /// No known health issues
    Healthy,
    /// Currently receiving treatment
    UnderTreatment,
    /// Sick, not yet under treatment
    Sick,
    /// Status not recorded
    Unknown,
}

impl HealthStatus {
    /// Get the display name for this status
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Healthy => "Healthy",
            Self::UnderTreatment => "Under Treatment",
            Self::Sick => "Sick",
            Self::Unknown => "Unknown",
        }
    }
}

impl From<&str> for HealthStatus {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "healthy" => Self::Healthy,
            "under treatment" => Self::UnderTreatment,
            "sick" => Self::Sick,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Severity of a disease alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AlertSeverity {
    /// Informational, outbreak contained or resolved
    Low,
    /// Preventive measures recommended
    Medium,
    /// Elevated threat, enhanced surveillance
    High,
    /// Confirmed outbreak requiring immediate action
    Critical,
}

impl AlertSeverity {
    /// Get the lowercase form used in filters and display
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl From<&str> for AlertSeverity {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "critical" => Self::Critical,
            "high" => Self::High,
            "medium" => Self::Medium,
            _ => Self::Low,
        }
    }
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle status of a disease alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertStatus {
    /// Outbreak ongoing, requires attention
    Active,
    /// Under surveillance, no confirmed local cases
    Monitoring,
    /// Contained and closed
    Resolved,
}

impl AlertStatus {
    /// Get the lowercase form used in filters and display
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Monitoring => "monitoring",
            Self::Resolved => "resolved",
        }
    }
}

impl fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Geographic region an alert applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// Northern districts
    North,
    /// Southern districts
    South,
    /// Eastern districts
    East,
    /// Western districts
    West,
    /// Central districts
    Central,
}

impl Region {
    /// Get the display name for this region
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::South => "South",
            Self::East => "East",
            Self::West => "West",
            Self::Central => "Central",
        }
    }

    /// Get all regions in display order
    #[must_use]
    pub fn all() -> Vec<Self> {
        vec![Self::North, Self::South, Self::East, Self::West, Self::Central]
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Status of a compliance activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplianceStatus {
    /// Activity carried out and recorded
    Completed,
    /// Scheduled, due date not yet passed
    Pending,
    /// Due date passed without completion
    Overdue,
}

impl ComplianceStatus {
    /// Get the lowercase form used in filters and display
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Pending => "pending",
            Self::Overdue => "overdue",
        }
    }
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Category of a compliance activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplianceCategory {
    /// Veterinary inspections and health monitoring
    HealthManagement,
    /// Vaccination campaigns and boosters
    Vaccination,
    /// Waste disposal and environmental audits
    Environmental,
    /// Biosecurity protocol reviews
    Biosecurity,
    /// Feed quality and nutrition checks
    Nutrition,
    /// Workplace and animal safety
    Safety,
    /// Record keeping and certification paperwork
    Documentation,
}

impl ComplianceCategory {
    /// Get the display name for this category
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::HealthManagement => "Health Management",
            Self::Vaccination => "Vaccination",
            Self::Environmental => "Environmental",
            Self::Biosecurity => "Biosecurity",
            Self::Nutrition => "Nutrition",
            Self::Safety => "Safety",
            Self::Documentation => "Documentation",
        }
    }

    /// Get all categories in display order
    #[must_use]
    pub fn all() -> Vec<Self> {
        vec![
            Self::HealthManagement,
            Self::Vaccination,
            Self::Environmental,
            Self::Biosecurity,
            Self::Nutrition,
            Self::Safety,
            Self::Documentation,
        ]
    }
}

impl fmt::Display for ComplianceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Subject area of a training module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainingCategory {
    /// Biosecurity fundamentals and access control
    Biosecurity,
    /// Disease recognition and herd health
    HealthManagement,
    /// Waste management and environmental impact
    Environmental,
    /// Care techniques specific to one species
    SpeciesSpecific,
    /// Feed safety and nutrition
    Nutrition,
    /// Outbreak and emergency response
    EmergencyManagement,
}

impl TrainingCategory {
    /// Get the display name for this category
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Biosecurity => "Biosecurity",
            Self::HealthManagement => "Health Management",
            Self::Environmental => "Environmental",
            Self::SpeciesSpecific => "Species-Specific",
            Self::Nutrition => "Nutrition",
            Self::EmergencyManagement => "Emergency Management",
        }
    }

    /// Get all categories in display order
    #[must_use]
    pub fn all() -> Vec<Self> {
        vec![
            Self::Biosecurity,
            Self::HealthManagement,
            Self::Environmental,
            Self::SpeciesSpecific,
            Self::Nutrition,
            Self::EmergencyManagement,
        ]
    }
}

impl fmt::Display for TrainingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Difficulty level of a training module
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    /// No prior knowledge required
    Beginner,
    /// Assumes basic farm operations experience
    Intermediate,
    /// For experienced operators and managers
    Advanced,
}

impl Difficulty {
    /// Get the lowercase form used in filters and display
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Delivery format of a single lesson within a training module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LessonKind {
    /// Pre-recorded video lesson
    Video,
    /// Interactive walkthrough
    Interactive,
    /// Knowledge assessment quiz
    Quiz,
}

impl LessonKind {
    /// Get the lowercase form used in display
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Interactive => "interactive",
            Self::Quiz => "quiz",
        }
    }
}

impl fmt::Display for LessonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
