#[cfg(test)]
mod tests {
    use farmsecure::models::types::{
        AlertSeverity, HealthStatus, LivestockType, Region, RiskLevel, TrainingCategory,
    };

    #[test]
    fn test_risk_level_boundaries() {
        assert_eq!(RiskLevel::from_score(100), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(80), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(79), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(60), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(59), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(0), RiskLevel::High);
    }

    #[test]
    fn test_livestock_type_conversion() {
        assert_eq!(LivestockType::from("pigs"), LivestockType::Pigs);
        assert_eq!(LivestockType::from(" Poultry "), LivestockType::Poultry);
        assert_eq!(LivestockType::from("mixed"), LivestockType::Mixed);
        assert_eq!(LivestockType::from("anything else"), LivestockType::Mixed);
    }

    #[test]
    fn test_health_status_conversion() {
        assert_eq!(HealthStatus::from("Healthy"), HealthStatus::Healthy);
        assert_eq!(
            HealthStatus::from("under treatment"),
            HealthStatus::UnderTreatment
        );
        assert_eq!(HealthStatus::from("sick"), HealthStatus::Sick);
        assert_eq!(HealthStatus::from("???"), HealthStatus::Unknown);
    }

    #[test]
    fn test_alert_severity_ordering() {
        assert!(AlertSeverity::Critical > AlertSeverity::High);
        assert!(AlertSeverity::High > AlertSeverity::Medium);
        assert!(AlertSeverity::Medium > AlertSeverity::Low);
        assert_eq!(AlertSeverity::from("CRITICAL"), AlertSeverity::Critical);
        assert_eq!(AlertSeverity::from("unknown"), AlertSeverity::Low);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Region::North.display_name(), "North");
        assert_eq!(Region::all().len(), 5);
        assert_eq!(
            TrainingCategory::SpeciesSpecific.display_name(),
            "Species-Specific"
        );
        assert_eq!(TrainingCategory::all().len(), 6);
        assert_eq!(RiskLevel::Medium.to_string(), "medium");
    }
}
