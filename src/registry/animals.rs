//! Seeded animal profiles

use crate::error::Result;
use crate::models::animal::{Animal, AnimalRegistry};
use crate::models::types::{HealthStatus, Species};

/// Build the sample animal registry the portal ships with
pub fn sample_animals() -> Result<AnimalRegistry> {
    let animals = vec![
        Animal::new("Bella", Species::Pig, "Yorkshire")
            .with_age("2 years")
            .with_weight("180 kg")
            .with_last_vaccination("2024-01-15".parse()?)
            .with_notes("Active and healthy. Good appetite.")
            .with_image("/placeholder-ei7sm.png"),
        Animal::new("Charlie", Species::Poultry, "Rhode Island Red")
            .with_age("8 months")
            .with_weight("2.5 kg")
            .with_health_status(HealthStatus::UnderTreatment)
            .with_last_vaccination("2024-02-01".parse()?)
            .with_notes("Minor respiratory issue, responding well to treatment.")
            .with_image("/rhode-island-red-chicken.jpg"),
        Animal::new("Daisy", Species::Pig, "Duroc")
            .with_age("1.5 years")
            .with_weight("150 kg")
            .with_last_vaccination("2024-01-20".parse()?)
            .with_notes("Excellent breeding stock. Very docile.")
            .with_image("/placeholder-6gwf4.png"),
        Animal::new("Henrietta", Species::Poultry, "Leghorn")
            .with_age("1 year")
            .with_weight("2.2 kg")
            .with_last_vaccination("2024-02-10".parse()?)
            .with_notes("High egg production. Very active.")
            .with_image("/placeholder-06hme.png"),
        Animal::new("Babe", Species::Pig, "Hampshire")
            .with_age("6 months")
            .with_weight("80 kg")
            .with_last_vaccination("2024-02-05".parse()?)
            .with_notes("Young and growing well. Good genetics.")
            .with_image("/placeholder-hwkt9.png"),
        Animal::new("Clucky", Species::Poultry, "Buff Orpington")
            .with_age("2 years")
            .with_weight("3.1 kg")
            .with_last_vaccination("2024-01-25".parse()?)
            .with_notes("Excellent mother hen. Calm temperament.")
            .with_image("/placeholder-mgkj7.png"),
    ];

    Ok(AnimalRegistry::from_animals(animals))
}
