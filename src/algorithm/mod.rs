//! Algorithm implementations for the FarmSecure portal
//!
//! This module contains the deterministic scoring logic behind the
//! portal's assessment features.

pub mod risk;

pub use risk::{FarmData, RiskAssessment, assess};
