#[cfg(test)]
mod tests {
    use farmsecure::FarmSecureError;
    use farmsecure::models::animal::{Animal, AnimalFilter};
    use farmsecure::models::types::{HealthStatus, Species};
    use farmsecure::registry::sample_animals;

    #[test]
    fn test_seeded_registry() {
        let registry = sample_animals().unwrap();
        assert_eq!(registry.count(), 6);

        let stats = registry.stats();
        assert_eq!(stats.total, 6);
        assert_eq!(stats.pigs, 3);
        assert_eq!(stats.poultry, 3);
        assert_eq!(stats.healthy, 5);
    }

    #[test]
    fn test_get_by_id() {
        let registry = sample_animals().unwrap();

        let bella = registry.get(1).unwrap();
        assert_eq!(bella.name, "Bella");
        assert_eq!(bella.species, Species::Pig);
        assert_eq!(bella.breed, "Yorkshire");

        assert!(registry.get(99).is_none());
    }

    #[test]
    fn test_search_matches_name_and_breed() {
        let registry = sample_animals().unwrap();

        let filter = AnimalFilter {
            search: Some("bel".to_string()),
            ..AnimalFilter::default()
        };
        let by_name = registry.filter(&filter);
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Bella");

        let filter = AnimalFilter {
            search: Some("leghorn".to_string()),
            ..AnimalFilter::default()
        };
        let by_breed = registry.filter(&filter);
        assert_eq!(by_breed.len(), 1);
        assert_eq!(by_breed[0].name, "Henrietta");
    }

    #[test]
    fn test_combined_filter() {
        let registry = sample_animals().unwrap();

        // Charlie is poultry but under treatment, so only two match
        let filter = AnimalFilter {
            search: None,
            species: Some(Species::Poultry),
            health: Some(HealthStatus::Healthy),
        };
        let matches = registry.filter(&filter);
        assert_eq!(matches.len(), 2);
        assert!(matches.iter().all(|a| a.species == Species::Poultry));
        assert!(matches.iter().all(|a| a.health_status == HealthStatus::Healthy));
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let registry = sample_animals().unwrap();
        assert_eq!(registry.filter(&AnimalFilter::default()).len(), 6);
    }

    #[test]
    fn test_add_assigns_sequential_id() {
        let mut registry = sample_animals().unwrap();

        let id = registry
            .add(Animal::new("Rosie", Species::Pig, "Berkshire").with_age("1 year"))
            .unwrap();
        assert_eq!(id, 7);
        assert_eq!(registry.count(), 7);

        let rosie = registry.get(7).unwrap();
        assert_eq!(rosie.name, "Rosie");
        // Health defaults to healthy, as in the add dialog
        assert_eq!(rosie.health_status, HealthStatus::Healthy);
    }

    #[test]
    fn test_add_requires_name_and_breed() {
        let mut registry = sample_animals().unwrap();

        let missing_name = registry.add(Animal::new("", Species::Pig, "Duroc"));
        assert!(matches!(
            missing_name,
            Err(FarmSecureError::Validation(_))
        ));

        let missing_breed = registry.add(Animal::new("Rosie", Species::Pig, "  "));
        assert!(matches!(
            missing_breed,
            Err(FarmSecureError::Validation(_))
        ));

        assert_eq!(registry.count(), 6);
    }
}
