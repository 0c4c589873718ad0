#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use farmsecure::models::profile::{ActivitySummary, RiskActivity};
    use farmsecure::models::types::{RiskLevel, Species};
    use farmsecure::registry::{
        sample_achievements, sample_alerts, sample_compliance_log, sample_profile,
        sample_training_catalog,
    };

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_seeded_profile() {
        let profile = sample_profile().unwrap();

        assert_eq!(profile.full_name(), "John Smith");
        assert_eq!(profile.farm.farm_name, "Smith Family Farm");
        assert_eq!(profile.farm.established_year, 1995);
        assert_eq!(
            profile.farm.livestock_types,
            vec![Species::Pig, Species::Poultry]
        );
        assert_eq!(profile.farm.certifications.len(), 2);

        // Defaults apply except for the overridden timezone
        assert!(profile.preferences.email_notifications);
        assert!(!profile.preferences.weekly_reports);
        assert_eq!(profile.preferences.timezone, "America/Chicago");
    }

    #[test]
    fn test_seeded_achievements() {
        let achievements = sample_achievements().unwrap();
        assert_eq!(achievements.len(), 3);
        assert_eq!(achievements[0].title, "Biosecurity Expert");
    }

    #[test]
    fn test_activity_summary() {
        let catalog = sample_training_catalog();
        let log = sample_compliance_log().unwrap();
        let board = sample_alerts().unwrap();
        let as_of = date("2024-12-10");

        let last_assessment = RiskActivity {
            completed_on: date("2024-12-01"),
            score: 85,
            level: RiskLevel::Low,
        };

        let summary =
            ActivitySummary::collect(Some(last_assessment), &catalog, &log, &board, as_of);

        let risk = summary.risk_assessment.unwrap();
        assert_eq!(risk.score, 85);
        assert_eq!(risk.status_label(), "Low Risk");

        // Only the poultry-care module sits at 100 percent
        assert_eq!(summary.training.total_modules, 8);
        assert_eq!(summary.training.modules_completed, 1);
        assert_eq!(summary.training.certificates_earned, 1);
        assert_eq!(summary.training.hours_completed, 3);

        assert_eq!(summary.compliance.completed_activities, 3);
        assert_eq!(summary.compliance.total_activities, 6);
        assert!((summary.compliance.compliance_rate - 50.0).abs() < f64::EPSILON);
        assert_eq!(summary.compliance.next_deadline, Some(date("2024-12-10")));

        assert_eq!(summary.alerts.active_alerts, 2);
        assert_eq!(summary.alerts.resolved_alerts, 1);
        assert_eq!(summary.alerts.last_checked, as_of);
    }

    #[test]
    fn test_activity_summary_without_assessment() {
        let catalog = sample_training_catalog();
        let log = sample_compliance_log().unwrap();
        let board = sample_alerts().unwrap();

        let summary = ActivitySummary::collect(None, &catalog, &log, &board, date("2024-12-10"));
        assert!(summary.risk_assessment.is_none());
    }

    #[test]
    fn test_status_labels() {
        let activity = |level| RiskActivity {
            completed_on: date("2024-12-01"),
            score: 50,
            level,
        };
        assert_eq!(activity(RiskLevel::Low).status_label(), "Low Risk");
        assert_eq!(activity(RiskLevel::Medium).status_label(), "Medium Risk");
        assert_eq!(activity(RiskLevel::High).status_label(), "High Risk");
    }
}
