//! Seeded sample data for the FarmSecure portal
//!
//! This module contains the sample records the portal ships with: the
//! animal registry, the alert board, the compliance log, the training
//! catalog, and the default farmer profile. Each seed function builds a
//! fully populated collection from literal data.

pub mod alerts;
pub mod animals;
pub mod compliance;
pub mod profile;
pub mod training;

pub use alerts::{sample_alerts, threat_insights};
pub use animals::sample_animals;
pub use compliance::{compliance_insights, sample_compliance_log};
pub use profile::{sample_achievements, sample_profile};
pub use training::sample_training_catalog;
