//! Seeded disease alerts

use crate::error::Result;
use crate::models::alert::{AlertBoard, ContactInfo, DiseaseAlert};
use crate::models::types::{AlertSeverity, AlertStatus, Region};

/// Build the sample alert board the portal ships with
pub fn sample_alerts() -> Result<AlertBoard> {
    let alerts = vec![
        DiseaseAlert {
            id: "1".to_string(),
            title: "African Swine Fever Outbreak - Northern Region".to_string(),
            disease: "African Swine Fever".to_string(),
            severity: AlertSeverity::Critical,
            location: "Northern Agricultural District".to_string(),
            region: Region::North,
            affected_species: vec!["Pigs".to_string()],
            date_issued: "2024-12-08".parse()?,
            last_updated: "2024-12-10".parse()?,
            description: "Confirmed cases of African Swine Fever detected in multiple farms. \
                          Immediate biosecurity measures required."
                .to_string(),
            recommendations: vec![
                "Implement strict quarantine protocols".to_string(),
                "Restrict pig movement in affected areas".to_string(),
                "Enhanced disinfection procedures".to_string(),
                "Report any suspicious symptoms immediately".to_string(),
            ],
            contact: Some(ContactInfo {
                phone: "+1-555-EMERGENCY".to_string(),
                email: "emergency@agriculture.gov".to_string(),
            }),
            status: AlertStatus::Active,
            cases_reported: 23,
            farms_affected: 8,
        },
        DiseaseAlert {
            id: "2".to_string(),
            title: "Avian Influenza Monitoring Alert".to_string(),
            disease: "Avian Influenza H5N1".to_string(),
            severity: AlertSeverity::High,
            location: "Central Valley Region".to_string(),
            region: Region::Central,
            affected_species: vec!["Poultry".to_string(), "Wild Birds".to_string()],
            date_issued: "2024-12-05".parse()?,
            last_updated: "2024-12-09".parse()?,
            description: "Increased surveillance for Avian Influenza following detection in \
                          neighboring regions. Preventive measures recommended."
                .to_string(),
            recommendations: vec![
                "Monitor flock health daily".to_string(),
                "Limit contact with wild birds".to_string(),
                "Secure feed and water sources".to_string(),
                "Report unusual mortality rates".to_string(),
            ],
            contact: Some(ContactInfo {
                phone: "+1-555-AVIAN-FLU".to_string(),
                email: "avian@agriculture.gov".to_string(),
            }),
            status: AlertStatus::Monitoring,
            cases_reported: 5,
            farms_affected: 3,
        },
        DiseaseAlert {
            id: "3".to_string(),
            title: "Foot and Mouth Disease - Surveillance Update".to_string(),
            disease: "Foot and Mouth Disease".to_string(),
            severity: AlertSeverity::Medium,
            location: "Eastern Agricultural Zone".to_string(),
            region: Region::East,
            affected_species: vec![
                "Cattle".to_string(),
                "Pigs".to_string(),
                "Sheep".to_string(),
            ],
            date_issued: "2024-12-01".parse()?,
            last_updated: "2024-12-07".parse()?,
            description: "Enhanced surveillance measures in place following international \
                          outbreak reports. No local cases confirmed."
                .to_string(),
            recommendations: vec![
                "Maintain strict farm biosecurity".to_string(),
                "Monitor animal health closely".to_string(),
                "Restrict unnecessary farm visits".to_string(),
                "Keep detailed health records".to_string(),
            ],
            contact: None,
            status: AlertStatus::Monitoring,
            cases_reported: 0,
            farms_affected: 0,
        },
        DiseaseAlert {
            id: "4".to_string(),
            title: "Salmonella Contamination Warning".to_string(),
            disease: "Salmonella Enteritidis".to_string(),
            severity: AlertSeverity::Medium,
            location: "Southern Poultry District".to_string(),
            region: Region::South,
            affected_species: vec!["Poultry".to_string()],
            date_issued: "2024-11-28".parse()?,
            last_updated: "2024-12-06".parse()?,
            description: "Feed contamination suspected in multiple poultry operations. \
                          Enhanced testing and monitoring protocols activated."
                .to_string(),
            recommendations: vec![
                "Test feed sources immediately".to_string(),
                "Implement enhanced hygiene protocols".to_string(),
                "Monitor egg production quality".to_string(),
                "Isolate affected flocks if necessary".to_string(),
            ],
            contact: Some(ContactInfo {
                phone: "+1-555-FEED-SAFE".to_string(),
                email: "feedsafety@agriculture.gov".to_string(),
            }),
            status: AlertStatus::Active,
            cases_reported: 12,
            farms_affected: 4,
        },
        DiseaseAlert {
            id: "5".to_string(),
            title: "Porcine Epidemic Diarrhea - Resolved".to_string(),
            disease: "Porcine Epidemic Diarrhea".to_string(),
            severity: AlertSeverity::Low,
            location: "Western Farm District".to_string(),
            region: Region::West,
            affected_species: vec!["Pigs".to_string()],
            date_issued: "2024-11-15".parse()?,
            last_updated: "2024-12-05".parse()?,
            description: "Previous outbreak successfully contained. Monitoring continues for \
                          30 days post-resolution."
                .to_string(),
            recommendations: vec![
                "Continue enhanced monitoring".to_string(),
                "Maintain biosecurity protocols".to_string(),
                "Document lessons learned".to_string(),
                "Prepare for future prevention".to_string(),
            ],
            contact: None,
            status: AlertStatus::Resolved,
            cases_reported: 8,
            farms_affected: 2,
        },
    ];

    Ok(AlertBoard::from_alerts(alerts))
}

/// Threat-analysis notes shown on the dashboard side panel
#[must_use]
pub fn threat_insights() -> Vec<String> {
    vec![
        "Critical ASF outbreak requires immediate attention - consider emergency protocols"
            .to_string(),
        "Avian Influenza risk elevated due to seasonal migration patterns".to_string(),
        "Your farm's biosecurity score suggests good protection against current threats"
            .to_string(),
        "Recommend increased surveillance for farms within 50km of active alerts".to_string(),
    ]
}
