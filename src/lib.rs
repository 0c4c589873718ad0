//! Core library for the FarmSecure farm management portal: deterministic
//! biosecurity risk scoring, plus the animal, alert, compliance, training,
//! and profile registries the portal renders.

pub mod algorithm;
pub mod error;
pub mod models;
pub mod registry;

// Re-export the most common types for easier use
// Core types
pub use error::{FarmSecureError, Result};

// Risk assessment
pub use algorithm::risk::category::{CategoryScore, RiskCategory};
pub use algorithm::risk::{FarmData, RiskAssessment, assess};

// Domain models
pub use models::types::{LivestockType, RiskLevel, Species};
pub use models::{
    AlertBoard, AnimalRegistry, ComplianceLog, DiseaseAlert, FarmerProfile, TrainingCatalog,
};
