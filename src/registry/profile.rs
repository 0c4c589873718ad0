//! Seeded farmer profile and achievements

use crate::error::Result;
use crate::models::profile::{
    Achievement, FarmInfo, FarmerProfile, NotificationPreferences, PersonalInfo,
};
use crate::models::types::Species;

/// Build the sample farmer profile the portal ships with
pub fn sample_profile() -> Result<FarmerProfile> {
    Ok(FarmerProfile {
        personal: PersonalInfo {
            first_name: "John".to_string(),
            last_name: "Smith".to_string(),
            email: "john.smith@farmmail.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            date_of_birth: Some("1975-03-15".parse()?),
            address: "1234 Farm Road".to_string(),
            city: "Greenfield".to_string(),
            state: "Iowa".to_string(),
            zip_code: "50849".to_string(),
        },
        farm: FarmInfo {
            farm_name: "Smith Family Farm".to_string(),
            farm_type: "Mixed Livestock".to_string(),
            established_year: 1995,
            total_acreage: 250,
            livestock_types: vec![Species::Pig, Species::Poultry],
            animal_count: 1500,
            certifications: vec![
                "Organic Certified".to_string(),
                "Animal Welfare Approved".to_string(),
            ],
            operation_type: "Commercial".to_string(),
        },
        preferences: NotificationPreferences {
            timezone: "America/Chicago".to_string(),
            ..NotificationPreferences::default()
        },
    })
}

/// Milestones the sample farmer has earned
pub fn sample_achievements() -> Result<Vec<Achievement>> {
    Ok(vec![
        Achievement::new(
            "Biosecurity Expert",
            "Completed advanced biosecurity training",
            "2024-11-15".parse()?,
        ),
        Achievement::new(
            "Compliance Champion",
            "Maintained 90%+ compliance for 6 months",
            "2024-10-20".parse()?,
        ),
        Achievement::new(
            "Learning Enthusiast",
            "Completed 5+ training modules",
            "2024-09-30".parse()?,
        ),
    ])
}
