//! Compliance activity log
//!
//! This module contains the ComplianceRecord model and the log behind the
//! portal's compliance tracking page: status derivation, completion,
//! filtering, the compliance rate, and deadline lookahead.
//!
//! Every operation that the portal computed against the wall clock takes an
//! explicit reference date here, so the log stays deterministic.

use crate::error::{FarmSecureError, Result};
use crate::models::types::{ComplianceCategory, ComplianceStatus};
use chrono::{Days, NaiveDate};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A single compliance activity record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceRecord {
    /// Record id, assigned sequentially by the log
    pub id: String,
    /// Activity description (e.g. "Annual Veterinary Inspection")
    pub activity: String,
    /// Activity category
    pub category: ComplianceCategory,
    /// Date the activity was carried out, once completed
    pub date: Option<NaiveDate>,
    /// Date the activity is due
    pub due_date: NaiveDate,
    /// Current status
    pub status: ComplianceStatus,
    /// Free-text notes
    pub notes: String,
    /// Inspector or staff member who signed off
    pub inspector: Option<String>,
    /// Certificate number, if one was issued
    pub certificate: Option<String>,
    /// Next occurrence for recurring activities
    pub next_due: Option<NaiveDate>,
}

impl ComplianceRecord {
    /// Create a new record with the required fields
    ///
    /// Status starts pending; the log derives overdue status against a
    /// reference date on add.
    #[must_use]
    pub fn new(
        activity: impl Into<String>,
        category: ComplianceCategory,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            id: String::new(),
            activity: activity.into(),
            category,
            date: None,
            due_date,
            status: ComplianceStatus::Pending,
            notes: String::new(),
            inspector: None,
            certificate: None,
            next_due: None,
        }
    }

    /// Set the notes
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Set the inspector
    #[must_use]
    pub fn with_inspector(mut self, inspector: impl Into<String>) -> Self {
        self.inspector = Some(inspector.into());
        self
    }

    /// Set the certificate number
    #[must_use]
    pub fn with_certificate(mut self, certificate: impl Into<String>) -> Self {
        self.certificate = Some(certificate.into());
        self
    }

    /// Set the next due date
    #[must_use]
    pub fn with_next_due(mut self, next_due: NaiveDate) -> Self {
        self.next_due = Some(next_due);
        self
    }

    /// Mark the record completed on the given date
    #[must_use]
    pub fn completed_on(mut self, date: NaiveDate) -> Self {
        self.status = ComplianceStatus::Completed;
        self.date = Some(date);
        self
    }

    /// Mark the record overdue
    #[must_use]
    pub fn overdue(mut self) -> Self {
        self.status = ComplianceStatus::Overdue;
        self
    }
}

/// Filter over the compliance log
///
/// Unset fields match everything ("all" in the portal's dropdowns).
#[derive(Debug, Clone, Copy, Default)]
pub struct ComplianceFilter {
    /// Restrict to a category
    pub category: Option<ComplianceCategory>,
    /// Restrict to a status
    pub status: Option<ComplianceStatus>,
}

impl ComplianceFilter {
    /// Check whether a record passes every set criterion
    #[must_use]
    pub fn matches(&self, record: &ComplianceRecord) -> bool {
        let matches_category = self.category.is_none_or(|c| record.category == c);
        let matches_status = self.status.is_none_or(|s| record.status == s);
        matches_category && matches_status
    }
}

/// Log-level counts for the compliance overview
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplianceStats {
    /// Completed records
    pub completed: usize,
    /// Pending records
    pub pending: usize,
    /// Overdue records
    pub overdue: usize,
    /// Completed share of all records, in percent (0 for an empty log)
    pub compliance_rate: f64,
}

/// The log of compliance activities for a farm
#[derive(Debug, Clone, Default)]
pub struct ComplianceLog {
    records: Vec<ComplianceRecord>,
    next_id: u32,
}

impl ComplianceLog {
    /// Create a new empty log
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a log from existing records, assigning sequential ids
    ///
    /// Seed records keep the status they carry; no re-derivation happens.
    #[must_use]
    pub fn from_records(records: Vec<ComplianceRecord>) -> Self {
        let mut log = Self::new();
        for mut record in records {
            record.id = log.next_id.to_string();
            log.next_id += 1;
            log.records.push(record);
        }
        log
    }

    /// Add a record, deriving its status against a reference date
    ///
    /// A due date earlier than the reference date makes the record overdue
    /// on arrival, otherwise it starts pending. Returns the assigned id.
    pub fn add(&mut self, mut record: ComplianceRecord, as_of: NaiveDate) -> String {
        record.status = if record.due_date < as_of {
            ComplianceStatus::Overdue
        } else {
            ComplianceStatus::Pending
        };
        let id = self.next_id.to_string();
        record.id.clone_from(&id);
        self.next_id += 1;
        self.records.push(record);
        id
    }

    /// Mark a record completed, stamping the completion date
    pub fn mark_complete(&mut self, id: &str, date: NaiveDate) -> Result<()> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| FarmSecureError::NotFound {
                kind: "compliance record",
                id: id.to_string(),
            })?;
        record.status = ComplianceStatus::Completed;
        record.date = Some(date);
        Ok(())
    }

    /// Get a record by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ComplianceRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Get all records in insertion order
    #[must_use]
    pub fn all(&self) -> &[ComplianceRecord] {
        &self.records
    }

    /// Count records in the log
    #[must_use]
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Apply a filter, preserving insertion order
    #[must_use]
    pub fn filter(&self, filter: &ComplianceFilter) -> Vec<ComplianceRecord> {
        self.records
            .iter()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect()
    }

    /// Calculate the overview statistics
    #[must_use]
    pub fn stats(&self) -> ComplianceStats {
        let completed = self.count_with_status(ComplianceStatus::Completed);
        let compliance_rate = if self.records.is_empty() {
            0.0
        } else {
            completed as f64 / self.records.len() as f64 * 100.0
        };

        ComplianceStats {
            completed,
            pending: self.count_with_status(ComplianceStatus::Pending),
            overdue: self.count_with_status(ComplianceStatus::Overdue),
            compliance_rate,
        }
    }

    /// The next pending deadlines, soonest first
    #[must_use]
    pub fn upcoming_deadlines(&self, limit: usize) -> Vec<ComplianceRecord> {
        self.records
            .iter()
            .filter(|r| r.status == ComplianceStatus::Pending)
            .sorted_by_key(|r| r.due_date)
            .take(limit)
            .cloned()
            .collect()
    }

    /// Pending records due within the given number of days of a reference date
    #[must_use]
    pub fn due_within(&self, days: u64, as_of: NaiveDate) -> Vec<ComplianceRecord> {
        let horizon = as_of + Days::new(days);
        self.records
            .iter()
            .filter(|r| r.status == ComplianceStatus::Pending && r.due_date <= horizon)
            .cloned()
            .collect()
    }

    /// Records whose activity date (or due date, if not yet completed)
    /// falls in the given month
    #[must_use]
    pub fn in_month(&self, year: i32, month: u32) -> Vec<ComplianceRecord> {
        use chrono::Datelike;
        self.records
            .iter()
            .filter(|r| {
                let date = r.date.unwrap_or(r.due_date);
                date.year() == year && date.month() == month
            })
            .cloned()
            .collect()
    }

    fn count_with_status(&self, status: ComplianceStatus) -> usize {
        self.records.iter().filter(|r| r.status == status).count()
    }
}
