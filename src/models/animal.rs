//! Animal profile entity model
//!
//! This module contains the Animal model and the registry the portal's
//! animal-profile page is built on: lookup, search, combined filtering,
//! and herd statistics.

use crate::error::{FarmSecureError, Result};
use crate::models::types::{HealthStatus, Species};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Profile of an individual animal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Animal {
    /// Registry id, assigned sequentially on add
    pub id: u32,
    /// Animal name
    pub name: String,
    /// Species (pig or poultry)
    pub species: Species,
    /// Breed, free text (e.g. "Yorkshire", "Leghorn")
    pub breed: String,
    /// Age as entered (e.g. "2 years", "8 months")
    pub age: String,
    /// Weight as entered (e.g. "180 kg", "2.5 kg")
    pub weight: String,
    /// Current health status
    pub health_status: HealthStatus,
    /// Date of the most recent vaccination
    pub last_vaccination: Option<NaiveDate>,
    /// Free-text care notes
    pub notes: String,
    /// Profile image path
    pub image: String,
}

impl Animal {
    /// Create a new animal profile with the required fields
    ///
    /// The id is assigned when the animal is added to a registry. Health
    /// status defaults to healthy, matching the portal's add dialog.
    #[must_use]
    pub fn new(name: impl Into<String>, species: Species, breed: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            species,
            breed: breed.into(),
            age: String::new(),
            weight: String::new(),
            health_status: HealthStatus::Healthy,
            last_vaccination: None,
            notes: String::new(),
            image: String::new(),
        }
    }

    /// Set the age text
    #[must_use]
    pub fn with_age(mut self, age: impl Into<String>) -> Self {
        self.age = age.into();
        self
    }

    /// Set the weight text
    #[must_use]
    pub fn with_weight(mut self, weight: impl Into<String>) -> Self {
        self.weight = weight.into();
        self
    }

    /// Set the health status
    #[must_use]
    pub fn with_health_status(mut self, status: HealthStatus) -> Self {
        self.health_status = status;
        self
    }

    /// Set the last vaccination date
    #[must_use]
    pub fn with_last_vaccination(mut self, date: NaiveDate) -> Self {
        self.last_vaccination = Some(date);
        self
    }

    /// Set the care notes
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Set the profile image path
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Check whether a search term matches this animal's name or breed
    ///
    /// Matching is case-insensitive, consistent with the portal's search
    /// box. An empty term matches everything.
    #[must_use]
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&term) || self.breed.to_lowercase().contains(&term)
    }
}

/// Combined filter over an animal registry
///
/// Unset fields match everything ("all" in the portal's dropdowns).
#[derive(Debug, Clone, Default)]
pub struct AnimalFilter {
    /// Case-insensitive search over name and breed
    pub search: Option<String>,
    /// Restrict to a single species
    pub species: Option<Species>,
    /// Restrict to a single health status
    pub health: Option<HealthStatus>,
}

impl AnimalFilter {
    /// Check whether an animal passes every set criterion
    #[must_use]
    pub fn matches(&self, animal: &Animal) -> bool {
        let matches_search = self
            .search
            .as_deref()
            .is_none_or(|term| animal.matches_search(term));
        let matches_species = self.species.is_none_or(|s| animal.species == s);
        let matches_health = self.health.is_none_or(|h| animal.health_status == h);

        matches_search && matches_species && matches_health
    }
}

/// Herd-level counts for the registry overview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalStats {
    /// Total animals in the registry
    pub total: usize,
    /// Number of pigs
    pub pigs: usize,
    /// Number of poultry
    pub poultry: usize,
    /// Number of animals currently healthy
    pub healthy: usize,
}

/// A registry of animal profiles that can be searched and filtered
#[derive(Debug, Clone, Default)]
pub struct AnimalRegistry {
    /// Animals in insertion order
    animals: Vec<Arc<Animal>>,
    /// Next id to assign
    next_id: u32,
}

impl AnimalRegistry {
    /// Create a new empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            animals: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a registry from existing profiles, assigning sequential ids
    #[must_use]
    pub fn from_animals(animals: Vec<Animal>) -> Self {
        let mut registry = Self::new();
        for animal in animals {
            // Seed data always carries the required fields
            let _ = registry.add(animal);
        }
        registry
    }

    /// Add an animal profile and return its assigned id
    ///
    /// Name and breed are required, matching the portal's add dialog.
    pub fn add(&mut self, mut animal: Animal) -> Result<u32> {
        if animal.name.trim().is_empty() {
            return Err(FarmSecureError::Validation(
                "animal name is required".to_string(),
            ));
        }
        if animal.breed.trim().is_empty() {
            return Err(FarmSecureError::Validation(
                "animal breed is required".to_string(),
            ));
        }

        let id = self.next_id;
        animal.id = id;
        self.next_id += 1;
        self.animals.push(Arc::new(animal));
        Ok(id)
    }

    /// Get an animal by id
    #[must_use]
    pub fn get(&self, id: u32) -> Option<Arc<Animal>> {
        self.animals.iter().find(|a| a.id == id).cloned()
    }

    /// Get all animals in insertion order
    #[must_use]
    pub fn all(&self) -> Vec<Arc<Animal>> {
        self.animals.clone()
    }

    /// Count animals in the registry
    #[must_use]
    pub fn count(&self) -> usize {
        self.animals.len()
    }

    /// Find animals by a predicate
    #[must_use]
    pub fn find_by<F>(&self, predicate: F) -> Vec<Arc<Animal>>
    where
        F: Fn(&Animal) -> bool,
    {
        self.animals
            .iter()
            .filter(|animal| predicate(animal))
            .cloned()
            .collect()
    }

    /// Apply a combined filter, preserving insertion order
    #[must_use]
    pub fn filter(&self, filter: &AnimalFilter) -> Vec<Arc<Animal>> {
        self.find_by(|animal| filter.matches(animal))
    }

    /// Calculate herd statistics for the overview tiles
    #[must_use]
    pub fn stats(&self) -> AnimalStats {
        AnimalStats {
            total: self.animals.len(),
            pigs: self
                .animals
                .iter()
                .filter(|a| a.species == Species::Pig)
                .count(),
            poultry: self
                .animals
                .iter()
                .filter(|a| a.species == Species::Poultry)
                .count(),
            healthy: self
                .animals
                .iter()
                .filter(|a| a.health_status == HealthStatus::Healthy)
                .count(),
        }
    }
}
