#[cfg(test)]
mod tests {
    use farmsecure::models::alert::AlertFilter;
    use farmsecure::models::types::{AlertSeverity, AlertStatus, Region};
    use farmsecure::registry::{sample_alerts, threat_insights};

    #[test]
    fn test_seeded_board() {
        let board = sample_alerts().unwrap();
        assert_eq!(board.count(), 5);

        let stats = board.stats();
        assert_eq!(stats.active, 2);
        assert_eq!(stats.critical, 1);
        assert_eq!(stats.total_cases, 48);
        assert_eq!(stats.farms_affected, 17);
    }

    #[test]
    fn test_active_alerts() {
        let board = sample_alerts().unwrap();
        let active = board.active();
        assert_eq!(active.len(), 2);
        assert!(active.iter().all(|a| a.status == AlertStatus::Active));
    }

    #[test]
    fn test_filter_by_severity() {
        let board = sample_alerts().unwrap();

        let filter = AlertFilter {
            severity: Some(AlertSeverity::Critical),
            ..AlertFilter::default()
        };
        let critical = board.filter(&filter);
        assert_eq!(critical.len(), 1);
        assert_eq!(critical[0].disease, "African Swine Fever");
    }

    #[test]
    fn test_filter_by_region() {
        let board = sample_alerts().unwrap();

        let filter = AlertFilter {
            region: Some(Region::Central),
            ..AlertFilter::default()
        };
        let central = board.filter(&filter);
        assert_eq!(central.len(), 1);
        assert_eq!(central[0].disease, "Avian Influenza H5N1");
    }

    #[test]
    fn test_filter_by_species() {
        let board = sample_alerts().unwrap();

        // ASF, FMD, and PED all list pigs among affected species
        let filter = AlertFilter {
            species: Some("pigs".to_string()),
            ..AlertFilter::default()
        };
        assert_eq!(board.filter(&filter).len(), 3);
    }

    #[test]
    fn test_search_matches_title_disease_location() {
        let board = sample_alerts().unwrap();

        let filter = AlertFilter {
            search: Some("influenza".to_string()),
            ..AlertFilter::default()
        };
        assert_eq!(board.filter(&filter).len(), 1);

        let filter = AlertFilter {
            search: Some("district".to_string()),
            ..AlertFilter::default()
        };
        // Northern, Southern, and Western locations are all districts
        assert_eq!(board.filter(&filter).len(), 3);
    }

    #[test]
    fn test_combined_filter() {
        let board = sample_alerts().unwrap();

        let filter = AlertFilter {
            search: None,
            severity: Some(AlertSeverity::Medium),
            region: None,
            species: Some("poultry".to_string()),
        };
        let matches = board.filter(&filter);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].disease, "Salmonella Enteritidis");
    }

    #[test]
    fn test_threat_insights() {
        assert_eq!(threat_insights().len(), 4);
    }
}
