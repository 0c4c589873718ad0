#[cfg(test)]
mod tests {
    use farmsecure::models::types::{LivestockType, RiskLevel};
    use farmsecure::{FarmData, RiskCategory, assess};

    fn farm(
        biosecurity: &str,
        diseases: &str,
        vaccination: &str,
        visitor: &str,
        feed: &str,
        count: &str,
    ) -> FarmData {
        FarmData {
            livestock_type: LivestockType::Pigs,
            biosecurity_measures: biosecurity.to_string(),
            previous_diseases: diseases.to_string(),
            vaccination_program: vaccination.to_string(),
            visitor_protocol: visitor.to_string(),
            feed_source: feed.to_string(),
            animal_count: count.to_string(),
            ..FarmData::default()
        }
    }

    #[test]
    fn test_high_risk_farm() {
        let result = assess(&farm("none", "none", "none", "", "local", "500"));

        let scores: Vec<u8> = result.categories.iter().map(|c| c.score).collect();
        assert_eq!(scores, vec![30, 95, 30, 45, 90]);
        assert_eq!(result.overall_score, 55);
        assert_eq!(result.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_low_risk_farm() {
        let result = assess(&farm(
            "comprehensive",
            "never",
            "comprehensive",
            "strict",
            "certified",
            "200",
        ));

        let scores: Vec<u8> = result.categories.iter().map(|c| c.score).collect();
        assert_eq!(scores, vec![90, 95, 95, 90, 90]);
        assert_eq!(result.overall_score, 92);
        assert_eq!(result.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_categories_fixed_order_and_range() {
        let inputs = [
            farm("", "", "", "", "", ""),
            farm("none", "frequent", "none", "minimal", "own", "20000"),
            farm("advanced", "never", "comprehensive", "strict", "certified", "50"),
            farm("footbaths", "one incident", "standard", "escorted", "local", "5000"),
        ];

        let expected_order = vec![
            RiskCategory::BiosecurityInfrastructure,
            RiskCategory::DiseaseHistory,
            RiskCategory::VaccinationProgram,
            RiskCategory::ManagementProtocols,
            RiskCategory::ScaleDensity,
        ];

        for data in &inputs {
            let result = assess(data);
            assert_eq!(result.categories.len(), 5);
            let order: Vec<RiskCategory> =
                result.categories.iter().map(|c| c.category).collect();
            assert_eq!(order, expected_order);
            for category in &result.categories {
                assert!(category.score <= 100);
                assert!(!category.recommendations.is_empty());
            }
            assert!(result.overall_score <= 100);
            assert_eq!(result.priority_actions.len(), 4);
        }
    }

    #[test]
    fn test_determinism() {
        let data = farm("basic footbaths", "occasional", "standard", "moderate", "mixed", "800");
        assert_eq!(assess(&data), assess(&data));
    }

    #[test]
    fn test_scale_boundary() {
        let large = assess(&farm("advanced", "none", "standard", "strict", "certified", "10001"));
        assert_eq!(large.categories[4].score, 60);

        let medium = assess(&farm("advanced", "none", "standard", "strict", "certified", "10000"));
        assert_eq!(medium.categories[4].score, 75);
    }

    #[test]
    fn test_tier_boundaries() {
        // 90*0.25 + 80*0.20 + 80*0.20 + 70*0.20 + 75*0.15 = 79.75 -> 80
        let at_80 = assess(&farm("advanced", "", "standard", "escorted", "local", "5000"));
        assert_eq!(at_80.overall_score, 80);
        assert_eq!(at_80.risk_level, RiskLevel::Low);

        // 85*0.25 + 80*0.20 + 80*0.20 + 70*0.20 + 75*0.15 = 78.5 -> 79
        let at_79 = assess(&farm("footbaths", "", "standard", "escorted", "local", "5000"));
        assert_eq!(at_79.overall_score, 79);
        assert_eq!(at_79.risk_level, RiskLevel::Medium);

        // 30*0.25 + 80*0.20 + 80*0.20 + 45*0.20 + 75*0.15 = 59.75 -> 60
        let at_60 = assess(&farm("", "", "standard", "minimal", "local", "5000"));
        assert_eq!(at_60.overall_score, 60);
        assert_eq!(at_60.risk_level, RiskLevel::Medium);

        // 30*0.25 + 95*0.20 + 60*0.20 + 45*0.20 + 75*0.15 = 58.75 -> 59
        let at_59 = assess(&farm("", "none", "basic", "minimal", "local", "5000"));
        assert_eq!(at_59.overall_score, 59);
        assert_eq!(at_59.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_priority_actions() {
        // Category scores: 30, 95, 30, 45, 90. The two lowest are tied at
        // 30; the stable sort keeps biosecurity ahead of vaccination.
        let result = assess(&farm("none", "none", "none", "", "local", "500"));

        assert_eq!(
            result.priority_actions[0],
            "Address biosecurity infrastructure improvements immediately"
        );
        assert_eq!(
            result.priority_actions[1],
            "Implement enhanced monitoring for vaccination program"
        );
        assert_eq!(
            result.priority_actions[2],
            "Schedule quarterly biosecurity audits"
        );
        assert_eq!(
            result.priority_actions[3],
            "Establish emergency response protocols"
        );
    }

    #[test]
    fn test_recommendation_bands() {
        let result = assess(&farm("none", "none", "none", "", "local", "500"));

        // Below 70 carries the three-item remediation list
        assert_eq!(result.categories[0].score, 30);
        assert_eq!(result.categories[0].recommendations.len(), 3);

        // At or above 70 carries the two-item maintenance list
        assert_eq!(result.categories[1].score, 95);
        assert_eq!(result.categories[1].recommendations.len(), 2);
    }

    #[test]
    fn test_insights_text() {
        let result = assess(&farm("none", "none", "none", "", "local", "500"));
        assert!(result.insights.contains("pigs"));
        assert!(result.insights.contains("500"));
        assert!(result.insights.contains("high"));
        assert!(result.insights.contains("immediate infrastructure improvements"));

        let low = assess(&farm(
            "comprehensive",
            "never",
            "comprehensive",
            "strict",
            "certified",
            "200",
        ));
        assert!(low.insights.contains("maintaining current standards with periodic reviews"));

        let medium = assess(&farm("footbaths", "", "standard", "escorted", "local", "5000"));
        assert!(
            medium
                .insights
                .contains("protocol standardization and monitoring enhancement")
        );
    }

    #[test]
    fn test_insights_fallback_for_empty_measures() {
        let result = assess(&farm("", "", "standard", "moderate", "mixed", "300"));
        assert!(result.insights.contains("current biosecurity measures"));
    }

    #[test]
    fn test_invalid_animal_count_reads_as_zero() {
        let result = assess(&farm("advanced", "none", "standard", "strict", "certified", "herd"));
        // Zero animals falls in the smallest scale band
        assert_eq!(result.categories[4].score, 90);
    }
}
