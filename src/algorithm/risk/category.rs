//! Risk categories for the biosecurity assessment
//!
//! This module defines the five weighted dimensions the assessment scores,
//! and the recommendation text attached to each score band.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Score threshold below which a category gets remediation guidance
/// instead of maintenance guidance.
pub const RECOMMENDATION_THRESHOLD: u8 = 70;

/// A weighted assessment dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskCategory {
    /// Physical biosecurity: disinfection, access control, quarantine
    BiosecurityInfrastructure,
    /// Disease outbreaks over the past years
    DiseaseHistory,
    /// Coverage of the vaccination program
    VaccinationProgram,
    /// Visitor and feed-sourcing protocols
    ManagementProtocols,
    /// Operation size and stocking density
    ScaleDensity,
}

impl RiskCategory {
    /// Get the display name for this category
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::BiosecurityInfrastructure => "Biosecurity Infrastructure",
            Self::DiseaseHistory => "Disease History",
            Self::VaccinationProgram => "Vaccination Program",
            Self::ManagementProtocols => "Management Protocols",
            Self::ScaleDensity => "Scale & Density",
        }
    }

    /// Weight of this category in the overall score
    ///
    /// The five weights sum to 1.0.
    #[must_use]
    pub const fn weight(self) -> f64 {
        match self {
            Self::BiosecurityInfrastructure => 0.25,
            Self::DiseaseHistory => 0.20,
            Self::VaccinationProgram => 0.20,
            Self::ManagementProtocols => 0.20,
            Self::ScaleDensity => 0.15,
        }
    }

    /// Get all categories in assessment order
    #[must_use]
    pub fn all() -> Vec<Self> {
        vec![
            Self::BiosecurityInfrastructure,
            Self::DiseaseHistory,
            Self::VaccinationProgram,
            Self::ManagementProtocols,
            Self::ScaleDensity,
        ]
    }

    /// Recommendation text for a score in this category
    ///
    /// Scores below the threshold get a three-item remediation list,
    /// everything else a two-item maintenance list.
    #[must_use]
    pub const fn recommendations(self, score: u8) -> &'static [&'static str] {
        if score < RECOMMENDATION_THRESHOLD {
            match self {
                Self::BiosecurityInfrastructure => &[
                    "Install proper disinfection stations at entry points",
                    "Implement controlled access protocols",
                    "Establish quarantine facilities for new animals",
                ],
                Self::DiseaseHistory => &[
                    "Implement enhanced monitoring protocols",
                    "Review and update vaccination schedules",
                    "Consult with veterinary specialists",
                ],
                Self::VaccinationProgram => &[
                    "Develop comprehensive vaccination schedule",
                    "Ensure proper vaccine storage and handling",
                    "Train staff on vaccination protocols",
                ],
                Self::ManagementProtocols => &[
                    "Establish strict visitor protocols",
                    "Source feed from certified suppliers only",
                    "Implement proper waste disposal systems",
                ],
                Self::ScaleDensity => &[
                    "Implement compartmentalization strategies",
                    "Increase monitoring frequency",
                    "Consider reducing stocking density",
                ],
            }
        } else {
            match self {
                Self::BiosecurityInfrastructure => &[
                    "Maintain current biosecurity standards",
                    "Regular equipment maintenance",
                ],
                Self::DiseaseHistory => &[
                    "Continue current health monitoring",
                    "Maintain vaccination records",
                ],
                Self::VaccinationProgram => &[
                    "Maintain vaccination schedule",
                    "Monitor vaccine efficacy",
                ],
                Self::ManagementProtocols => &[
                    "Review protocols quarterly",
                    "Maintain supplier certifications",
                ],
                Self::ScaleDensity => &[
                    "Monitor animal density",
                    "Maintain current management practices",
                ],
            }
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Score and guidance for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    /// The scored category
    pub category: RiskCategory,
    /// Score in [0, 100]
    pub score: u8,
    /// Recommendation text for this score band
    pub recommendations: Vec<String>,
}

impl CategoryScore {
    /// Build the result for a category, attaching its recommendation text
    #[must_use]
    pub fn new(category: RiskCategory, score: u8) -> Self {
        Self {
            category,
            score,
            recommendations: category
                .recommendations(score)
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}
