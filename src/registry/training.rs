//! Seeded training catalog

use crate::models::training::{Lesson, TrainingCatalog, TrainingModule};
use crate::models::types::{Difficulty, LessonKind, TrainingCategory};

/// Build the sample training catalog the portal ships with
///
/// The hygiene module carries the full detail view: lessons, learning
/// objectives, instructor credit, and study hints.
#[must_use]
pub fn sample_training_catalog() -> TrainingCatalog {
    let modules = vec![
        TrainingModule::new(
            "hygiene-practices",
            "Essential Hygiene Practices",
            "Learn fundamental hygiene protocols to prevent disease transmission in your \
             farm environment.",
            TrainingCategory::Biosecurity,
            Difficulty::Beginner,
            45,
        )
        .with_progress(75)
        .with_popularity(4.8, 1247)
        .with_image("/farm-hygiene-disinfection.jpg")
        .with_tags(&["hygiene", "disinfection", "protocols", "prevention"])
        .recommended()
        .with_instructor("Dr. Sarah Johnson, DVM")
        .with_lessons(vec![
            Lesson::new(
                1,
                "Introduction to Farm Hygiene",
                8,
                LessonKind::Video,
                "Understanding the importance of hygiene in preventing disease outbreaks \
                 and maintaining animal health.",
            ),
            Lesson::new(
                2,
                "Personal Protective Equipment (PPE)",
                12,
                LessonKind::Interactive,
                "Learn about proper PPE selection, usage, and maintenance for different \
                 farm activities.",
            ),
            Lesson::new(
                3,
                "Disinfection Protocols",
                15,
                LessonKind::Video,
                "Step-by-step guide to effective disinfection procedures for equipment, \
                 facilities, and vehicles.",
            ),
            Lesson::new(
                4,
                "Hand Hygiene Best Practices",
                6,
                LessonKind::Interactive,
                "Proper handwashing techniques and when to apply them during farm \
                 operations.",
            ),
            Lesson::new(
                5,
                "Knowledge Assessment",
                4,
                LessonKind::Quiz,
                "Test your understanding of hygiene practices with this comprehensive quiz.",
            ),
        ])
        .with_objectives(&[
            "Understand the critical role of hygiene in biosecurity",
            "Implement proper PPE protocols for farm staff",
            "Execute effective disinfection procedures",
            "Develop hygiene monitoring and compliance systems",
        ])
        .with_insights(&[
            "Based on your risk assessment, focus extra attention on disinfection protocols",
            "Your farm size suggests implementing automated hygiene monitoring systems",
            "Consider advanced PPE training for your livestock type",
        ]),
        TrainingModule::new(
            "disease-identification",
            "Disease Signs & Symptoms",
            "Identify early warning signs of common diseases in pigs and poultry for rapid \
             response.",
            TrainingCategory::HealthManagement,
            Difficulty::Intermediate,
            60,
        )
        .with_progress(30)
        .with_popularity(4.9, 892)
        .with_image("/veterinary-examination-livestock-health.jpg")
        .with_tags(&["disease", "symptoms", "diagnosis", "health"])
        .recommended()
        .ai_generated(),
        TrainingModule::new(
            "waste-disposal",
            "Proper Waste Management",
            "Implement effective waste disposal systems to minimize environmental impact \
             and disease risk.",
            TrainingCategory::Environmental,
            Difficulty::Intermediate,
            50,
        )
        .with_popularity(4.6, 634)
        .with_image("/farm-waste-management-composting.jpg")
        .with_tags(&["waste", "disposal", "environment", "sustainability"]),
        TrainingModule::new(
            "poultry-care",
            "Advanced Poultry Care",
            "Specialized care techniques for optimal poultry health, nutrition, and \
             productivity.",
            TrainingCategory::SpeciesSpecific,
            Difficulty::Advanced,
            90,
        )
        .with_progress(100)
        .with_popularity(4.7, 456)
        .with_image("/poultry-chickens-farm-care.jpg")
        .with_tags(&["poultry", "nutrition", "housing", "care"]),
        TrainingModule::new(
            "feed-safety",
            "Feed Safety & Quality Control",
            "Ensure feed safety through proper storage, handling, and quality assessment \
             techniques.",
            TrainingCategory::Nutrition,
            Difficulty::Intermediate,
            55,
        )
        .with_progress(60)
        .with_popularity(4.5, 723)
        .with_image("/animal-feed-storage-quality-control.jpg")
        .with_tags(&["feed", "safety", "storage", "quality"])
        .ai_generated(),
        TrainingModule::new(
            "emergency-response",
            "Emergency Response Protocols",
            "Develop and implement emergency response plans for disease outbreaks and \
             biosecurity breaches.",
            TrainingCategory::EmergencyManagement,
            Difficulty::Advanced,
            75,
        )
        .with_popularity(4.8, 312)
        .with_image("/emergency-response-farm-biosecurity.jpg")
        .with_tags(&["emergency", "response", "protocols", "outbreak"])
        .recommended(),
        TrainingModule::new(
            "vaccination-protocols",
            "Vaccination Best Practices",
            "Master vaccination schedules, techniques, and record-keeping for optimal herd \
             immunity.",
            TrainingCategory::HealthManagement,
            Difficulty::Intermediate,
            65,
        )
        .with_progress(25)
        .with_popularity(4.9, 987)
        .with_image("/veterinary-vaccination-livestock.jpg")
        .with_tags(&["vaccination", "immunity", "schedule", "health"]),
        TrainingModule::new(
            "visitor-management",
            "Visitor & Vehicle Protocols",
            "Establish comprehensive protocols for managing visitors and vehicles to \
             maintain biosecurity.",
            TrainingCategory::Biosecurity,
            Difficulty::Beginner,
            40,
        )
        .with_popularity(4.4, 567)
        .with_image("/farm-security-gate-visitor-control.jpg")
        .with_tags(&["visitors", "vehicles", "access", "security"])
        .ai_generated(),
    ];

    TrainingCatalog::from_modules(modules)
}
