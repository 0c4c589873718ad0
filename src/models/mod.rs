//! Domain models for the FarmSecure portal
//!
//! This module contains the core entity models: animal profiles, disease
//! alerts, compliance records, training modules, and the farmer profile,
//! along with the shared enum types.

pub mod alert;
pub mod animal;
pub mod compliance;
pub mod profile;
pub mod training;
pub mod types;

// Re-export commonly used types
pub use alert::{AlertBoard, AlertFilter, AlertStats, ContactInfo, DiseaseAlert};
pub use animal::{Animal, AnimalFilter, AnimalRegistry, AnimalStats};
pub use compliance::{ComplianceFilter, ComplianceLog, ComplianceRecord, ComplianceStats};
pub use profile::{ActivitySummary, Achievement, FarmerProfile, RiskActivity};
pub use training::{Lesson, ModuleProgress, TrainingCatalog, TrainingFilter, TrainingModule};
pub use types::{
    AlertSeverity, AlertStatus, ComplianceCategory, ComplianceStatus, Difficulty, HealthStatus,
    LessonKind, LivestockType, Region, RiskLevel, Species, TrainingCategory,
};
