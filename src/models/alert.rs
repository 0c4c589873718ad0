//! Disease alert entity model
//!
//! This module contains the DiseaseAlert model and the alert board backing
//! the portal's alerts dashboard: combined filtering and the overview
//! statistics tiles.

use crate::models::types::{AlertSeverity, AlertStatus, Region};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Contact channel published with an alert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Emergency phone line
    pub phone: String,
    /// Reporting email address
    pub email: String,
}

/// A regional disease alert
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseAlert {
    /// Alert id
    pub id: String,
    /// Headline shown on the board
    pub title: String,
    /// Disease name (e.g. "African Swine Fever")
    pub disease: String,
    /// Severity tier
    pub severity: AlertSeverity,
    /// Location description
    pub location: String,
    /// Region the alert applies to
    pub region: Region,
    /// Species the disease affects
    pub affected_species: Vec<String>,
    /// Date the alert was issued
    pub date_issued: NaiveDate,
    /// Date of the most recent update
    pub last_updated: NaiveDate,
    /// Situation description
    pub description: String,
    /// Recommended actions for farms in the region
    pub recommendations: Vec<String>,
    /// Emergency contact, if published
    pub contact: Option<ContactInfo>,
    /// Lifecycle status
    pub status: AlertStatus,
    /// Confirmed cases reported so far
    pub cases_reported: u32,
    /// Farms affected so far
    pub farms_affected: u32,
}

impl DiseaseAlert {
    /// Check whether a search term matches the title, disease, or location
    ///
    /// Matching is case-insensitive. An empty term matches everything.
    #[must_use]
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&term)
            || self.disease.to_lowercase().contains(&term)
            || self.location.to_lowercase().contains(&term)
    }

    /// Check whether the alert affects a species
    ///
    /// Substring match against each listed species, case-insensitive, so
    /// "pigs" matches an alert listing "Pigs".
    #[must_use]
    pub fn affects_species(&self, species: &str) -> bool {
        let species = species.trim().to_lowercase();
        self.affected_species
            .iter()
            .any(|s| s.to_lowercase().contains(&species))
    }
}

/// Combined filter over the alert board
///
/// Unset fields match everything ("all" in the portal's dropdowns).
#[derive(Debug, Clone, Default)]
pub struct AlertFilter {
    /// Case-insensitive search over title, disease, and location
    pub search: Option<String>,
    /// Restrict to a severity tier
    pub severity: Option<AlertSeverity>,
    /// Restrict to a region
    pub region: Option<Region>,
    /// Restrict to alerts affecting a species
    pub species: Option<String>,
}

impl AlertFilter {
    /// Check whether an alert passes every set criterion
    #[must_use]
    pub fn matches(&self, alert: &DiseaseAlert) -> bool {
        let matches_search = self
            .search
            .as_deref()
            .is_none_or(|term| alert.matches_search(term));
        let matches_severity = self.severity.is_none_or(|s| alert.severity == s);
        let matches_region = self.region.is_none_or(|r| alert.region == r);
        let matches_species = self
            .species
            .as_deref()
            .is_none_or(|s| alert.affects_species(s));

        matches_search && matches_severity && matches_region && matches_species
    }
}

/// Board-level counts for the dashboard overview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertStats {
    /// Alerts with active status
    pub active: usize,
    /// Alerts at critical severity
    pub critical: usize,
    /// Cases reported across all alerts
    pub total_cases: u32,
    /// Farms affected across all alerts
    pub farms_affected: u32,
}

/// The board of current disease alerts
#[derive(Debug, Clone, Default)]
pub struct AlertBoard {
    alerts: Vec<Arc<DiseaseAlert>>,
}

impl AlertBoard {
    /// Create a new empty board
    #[must_use]
    pub fn new() -> Self {
        Self { alerts: Vec::new() }
    }

    /// Create a board from existing alerts
    #[must_use]
    pub fn from_alerts(alerts: Vec<DiseaseAlert>) -> Self {
        Self {
            alerts: alerts.into_iter().map(Arc::new).collect(),
        }
    }

    /// Add an alert to the board
    pub fn add(&mut self, alert: DiseaseAlert) {
        self.alerts.push(Arc::new(alert));
    }

    /// Get an alert by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Arc<DiseaseAlert>> {
        self.alerts.iter().find(|a| a.id == id).cloned()
    }

    /// Get all alerts in issue order
    #[must_use]
    pub fn all(&self) -> Vec<Arc<DiseaseAlert>> {
        self.alerts.clone()
    }

    /// Count alerts on the board
    #[must_use]
    pub fn count(&self) -> usize {
        self.alerts.len()
    }

    /// Find alerts by a predicate
    #[must_use]
    pub fn find_by<F>(&self, predicate: F) -> Vec<Arc<DiseaseAlert>>
    where
        F: Fn(&DiseaseAlert) -> bool,
    {
        self.alerts
            .iter()
            .filter(|alert| predicate(alert))
            .cloned()
            .collect()
    }

    /// Apply a combined filter, preserving board order
    #[must_use]
    pub fn filter(&self, filter: &AlertFilter) -> Vec<Arc<DiseaseAlert>> {
        self.find_by(|alert| filter.matches(alert))
    }

    /// Alerts with active status
    #[must_use]
    pub fn active(&self) -> Vec<Arc<DiseaseAlert>> {
        self.find_by(|alert| alert.status == AlertStatus::Active)
    }

    /// Calculate the dashboard overview statistics
    #[must_use]
    pub fn stats(&self) -> AlertStats {
        AlertStats {
            active: self
                .alerts
                .iter()
                .filter(|a| a.status == AlertStatus::Active)
                .count(),
            critical: self
                .alerts
                .iter()
                .filter(|a| a.severity == AlertSeverity::Critical)
                .count(),
            total_cases: self.alerts.iter().map(|a| a.cases_reported).sum(),
            farms_affected: self.alerts.iter().map(|a| a.farms_affected).sum(),
        }
    }
}
