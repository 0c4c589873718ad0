//! Biosecurity risk assessment
//!
//! This module implements the weighted risk scoring behind the portal's
//! assessment page: five category classifiers, a weighted overall score,
//! a risk tier, generated insight text, and prioritized next steps.
//!
//! The assessment is a pure function of its input: identical farm details
//! always produce an identical result.

pub mod category;
mod scoring;

use crate::models::types::{LivestockType, RiskLevel};
use category::{CategoryScore, RiskCategory};
use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};

/// Farm details collected by the assessment form
///
/// Free-text fields are kept as entered; classification happens at
/// scoring time. Only a subset of the fields influences the score, the
/// rest is context the farmer records alongside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmData {
    /// Farm name
    pub farm_name: String,
    /// Farm size description
    pub farm_size: String,
    /// Livestock type kept on the farm
    pub livestock_type: LivestockType,
    /// Animal headcount as entered; lenient numeric parse, invalid reads as 0
    pub animal_count: String,
    /// Farm location
    pub location: String,
    /// Years in operation
    pub years_operating: String,
    /// Disease history over the past years, free text
    pub previous_diseases: String,
    /// Vaccination program level (comprehensive, standard, basic, none)
    pub vaccination_program: String,
    /// Current biosecurity measures, free text
    pub biosecurity_measures: String,
    /// Visitor protocol level (strict, moderate, minimal, none)
    pub visitor_protocol: String,
    /// Feed sourcing (certified, mixed, local, own)
    pub feed_source: String,
    /// Waste management description
    pub waste_management: String,
}

impl Default for FarmData {
    fn default() -> Self {
        Self {
            farm_name: String::new(),
            farm_size: String::new(),
            livestock_type: LivestockType::Mixed,
            animal_count: String::new(),
            location: String::new(),
            years_operating: String::new(),
            previous_diseases: String::new(),
            vaccination_program: String::new(),
            biosecurity_measures: String::new(),
            visitor_protocol: String::new(),
            feed_source: String::new(),
            waste_management: String::new(),
        }
    }
}

/// Result of a biosecurity risk assessment
///
/// Immutable once computed; the portal renders it as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Weighted overall score in [0, 100]
    pub overall_score: u8,
    /// Risk tier derived from the overall score
    pub risk_level: RiskLevel,
    /// Per-category breakdown, always five entries in assessment order
    pub categories: Vec<CategoryScore>,
    /// Generated narrative summary
    pub insights: String,
    /// Four prioritized next steps
    pub priority_actions: Vec<String>,
}

/// Run the risk assessment over the farm details
///
/// Total and deterministic: malformed numeric input coerces to 0 and
/// unmatched text falls through to each category's default band, so there
/// is no failure mode.
#[must_use]
pub fn assess(data: &FarmData) -> RiskAssessment {
    let animal_count = scoring::parse_animal_count(&data.animal_count);

    let categories: Vec<CategoryScore> = vec![
        CategoryScore::new(
            RiskCategory::BiosecurityInfrastructure,
            scoring::biosecurity_score(&data.biosecurity_measures),
        ),
        CategoryScore::new(
            RiskCategory::DiseaseHistory,
            scoring::disease_history_score(&data.previous_diseases),
        ),
        CategoryScore::new(
            RiskCategory::VaccinationProgram,
            scoring::vaccination_score(&data.vaccination_program),
        ),
        CategoryScore::new(
            RiskCategory::ManagementProtocols,
            scoring::management_score(&data.visitor_protocol, &data.feed_source),
        ),
        CategoryScore::new(RiskCategory::ScaleDensity, scoring::scale_score(animal_count)),
    ];

    for category in &categories {
        debug!("{}: {}", category.category, category.score);
    }

    let total: f64 = categories
        .iter()
        .map(|c| f64::from(c.score) * c.category.weight())
        .sum();

    // One rounding policy throughout: the rounded score drives both the
    // display value and the tier comparison.
    let overall_score = total.round() as u8;
    let risk_level = RiskLevel::from_score(overall_score);
    debug!("overall score {overall_score} ({risk_level} risk)");

    RiskAssessment {
        overall_score,
        risk_level,
        insights: build_insights(data, risk_level),
        priority_actions: priority_actions(&categories),
        categories,
    }
}

/// Build the narrative summary for the assessment result
fn build_insights(data: &FarmData, risk_level: RiskLevel) -> String {
    let measures = if data.biosecurity_measures.is_empty() {
        "current biosecurity measures"
    } else {
        data.biosecurity_measures.as_str()
    };
    let focus = match risk_level {
        RiskLevel::High => "immediate infrastructure improvements",
        RiskLevel::Medium => "protocol standardization and monitoring enhancement",
        RiskLevel::Low => "maintaining current standards with periodic reviews",
    };

    format!(
        "Based on the comprehensive analysis of your {} farm with {} animals, \
         the assessment indicates a {} biosecurity risk profile. \
         Key factors influencing this assessment include your {}, \
         vaccination program status, and operational scale. \
         The analysis suggests focusing on {}.",
        data.livestock_type, data.animal_count, risk_level, measures, focus
    )
}

/// Derive the four priority actions from the category breakdown
///
/// The two lowest-scoring categories lead; the sort is stable, so equal
/// scores keep assessment order.
fn priority_actions(categories: &[CategoryScore]) -> Vec<String> {
    let sorted: Vec<&CategoryScore> = categories.iter().sorted_by_key(|c| c.score).collect();

    vec![
        format!(
            "Address {} improvements immediately",
            sorted[0].category.display_name().to_lowercase()
        ),
        format!(
            "Implement enhanced monitoring for {}",
            sorted[1].category.display_name().to_lowercase()
        ),
        "Schedule quarterly biosecurity audits".to_string(),
        "Establish emergency response protocols".to_string(),
    ]
}
