//! Training module catalog
//!
//! This module contains the TrainingModule and Lesson models and the
//! catalog behind the portal's training center: search and filtering,
//! recommended and AI-generated shelves, module detail, and per-module
//! lesson progress.

use crate::error::{FarmSecureError, Result};
use crate::models::types::{Difficulty, LessonKind, TrainingCategory};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A single lesson within a training module
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    /// Lesson number within the module, starting at 1
    pub id: u32,
    /// Lesson title
    pub title: String,
    /// Duration in minutes
    pub duration_minutes: u32,
    /// Delivery format
    pub kind: LessonKind,
    /// Short content summary
    pub content: String,
}

impl Lesson {
    /// Create a new lesson
    #[must_use]
    pub fn new(
        id: u32,
        title: impl Into<String>,
        duration_minutes: u32,
        kind: LessonKind,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            duration_minutes,
            kind,
            content: content.into(),
        }
    }
}

/// A training module in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingModule {
    /// Stable module id (e.g. "hygiene-practices")
    pub id: String,
    /// Module title
    pub title: String,
    /// One-paragraph description
    pub description: String,
    /// Subject area
    pub category: TrainingCategory,
    /// Difficulty level
    pub difficulty: Difficulty,
    /// Total duration in minutes
    pub duration_minutes: u32,
    /// Completion percent shown on the catalog card
    pub progress: u8,
    /// Average rating out of 5
    pub rating: f32,
    /// Number of enrolled users
    pub enrolled_users: u32,
    /// Card image path
    pub image: String,
    /// Search tags
    pub tags: Vec<String>,
    /// Featured on the recommended shelf
    pub recommended: bool,
    /// Generated content flag
    pub ai_generated: bool,
    /// Instructor credit, shown on the detail page
    pub instructor: Option<String>,
    /// Lessons, in order
    pub lessons: Vec<Lesson>,
    /// Learning objectives, shown on the detail page
    pub learning_objectives: Vec<String>,
    /// Personalized study hints, shown on the detail page
    pub insights: Vec<String>,
}

impl TrainingModule {
    /// Create a new module with the catalog-card fields
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: TrainingCategory,
        difficulty: Difficulty,
        duration_minutes: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            category,
            difficulty,
            duration_minutes,
            progress: 0,
            rating: 0.0,
            enrolled_users: 0,
            image: String::new(),
            tags: Vec::new(),
            recommended: false,
            ai_generated: false,
            instructor: None,
            lessons: Vec::new(),
            learning_objectives: Vec::new(),
            insights: Vec::new(),
        }
    }

    /// Set the catalog-card progress percent
    #[must_use]
    pub fn with_progress(mut self, progress: u8) -> Self {
        self.progress = progress;
        self
    }

    /// Set the rating and enrollment count
    #[must_use]
    pub fn with_popularity(mut self, rating: f32, enrolled_users: u32) -> Self {
        self.rating = rating;
        self.enrolled_users = enrolled_users;
        self
    }

    /// Set the card image path
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the search tags
    #[must_use]
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(ToString::to_string).collect();
        self
    }

    /// Feature the module on the recommended shelf
    #[must_use]
    pub fn recommended(mut self) -> Self {
        self.recommended = true;
        self
    }

    /// Flag the module as generated content
    #[must_use]
    pub fn ai_generated(mut self) -> Self {
        self.ai_generated = true;
        self
    }

    /// Set the instructor credit
    #[must_use]
    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = Some(instructor.into());
        self
    }

    /// Set the lesson list
    #[must_use]
    pub fn with_lessons(mut self, lessons: Vec<Lesson>) -> Self {
        self.lessons = lessons;
        self
    }

    /// Set the learning objectives
    #[must_use]
    pub fn with_objectives(mut self, objectives: &[&str]) -> Self {
        self.learning_objectives = objectives.iter().map(ToString::to_string).collect();
        self
    }

    /// Set the study hints
    #[must_use]
    pub fn with_insights(mut self, insights: &[&str]) -> Self {
        self.insights = insights.iter().map(ToString::to_string).collect();
        self
    }

    /// Check whether a search term matches the title, description, or tags
    ///
    /// Matching is case-insensitive. An empty term matches everything.
    #[must_use]
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(&term))
    }
}

/// Combined filter over the training catalog
///
/// Unset fields match everything ("all" in the portal's dropdowns).
#[derive(Debug, Clone, Default)]
pub struct TrainingFilter {
    /// Case-insensitive search over title, description, and tags
    pub search: Option<String>,
    /// Restrict to a subject area
    pub category: Option<TrainingCategory>,
    /// Restrict to a difficulty level
    pub difficulty: Option<Difficulty>,
}

impl TrainingFilter {
    /// Check whether a module passes every set criterion
    #[must_use]
    pub fn matches(&self, module: &TrainingModule) -> bool {
        let matches_search = self
            .search
            .as_deref()
            .is_none_or(|term| module.matches_search(term));
        let matches_category = self.category.is_none_or(|c| module.category == c);
        let matches_difficulty = self.difficulty.is_none_or(|d| module.difficulty == d);

        matches_search && matches_category && matches_difficulty
    }
}

/// The catalog of available training modules
#[derive(Debug, Clone, Default)]
pub struct TrainingCatalog {
    modules: Vec<Arc<TrainingModule>>,
}

impl TrainingCatalog {
    /// Create a new empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self {
            modules: Vec::new(),
        }
    }

    /// Create a catalog from existing modules
    #[must_use]
    pub fn from_modules(modules: Vec<TrainingModule>) -> Self {
        Self {
            modules: modules.into_iter().map(Arc::new).collect(),
        }
    }

    /// Get a module by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Arc<TrainingModule>> {
        self.modules.iter().find(|m| m.id == id).cloned()
    }

    /// Get a module by id, failing on unknown ids
    ///
    /// This is the lookup behind the module detail view, where a dangling
    /// id is an error rather than an empty page.
    pub fn require(&self, id: &str) -> Result<Arc<TrainingModule>> {
        self.get(id).ok_or_else(|| FarmSecureError::NotFound {
            kind: "training module",
            id: id.to_string(),
        })
    }

    /// Get all modules in catalog order
    #[must_use]
    pub fn all(&self) -> Vec<Arc<TrainingModule>> {
        self.modules.clone()
    }

    /// Count modules in the catalog
    #[must_use]
    pub fn count(&self) -> usize {
        self.modules.len()
    }

    /// Apply a combined filter, preserving catalog order
    #[must_use]
    pub fn filter(&self, filter: &TrainingFilter) -> Vec<Arc<TrainingModule>> {
        self.modules
            .iter()
            .filter(|module| filter.matches(module))
            .cloned()
            .collect()
    }

    /// Modules featured on the recommended shelf
    #[must_use]
    pub fn recommended(&self) -> Vec<Arc<TrainingModule>> {
        self.modules
            .iter()
            .filter(|m| m.recommended)
            .cloned()
            .collect()
    }

    /// Modules flagged as generated content
    #[must_use]
    pub fn ai_generated(&self) -> Vec<Arc<TrainingModule>> {
        self.modules
            .iter()
            .filter(|m| m.ai_generated)
            .cloned()
            .collect()
    }
}

/// Lesson-level progress through a single module
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModuleProgress {
    /// Ids of completed lessons, in completion order
    completed_lessons: Vec<u32>,
}

impl ModuleProgress {
    /// Create a fresh progress tracker
    #[must_use]
    pub fn new() -> Self {
        Self {
            completed_lessons: Vec::new(),
        }
    }

    /// Record a lesson as completed
    ///
    /// Completing the same lesson twice is a no-op.
    pub fn complete_lesson(&mut self, lesson_id: u32) {
        if !self.completed_lessons.contains(&lesson_id) {
            self.completed_lessons.push(lesson_id);
        }
    }

    /// Check whether a lesson has been completed
    #[must_use]
    pub fn is_lesson_complete(&self, lesson_id: u32) -> bool {
        self.completed_lessons.contains(&lesson_id)
    }

    /// Number of completed lessons
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed_lessons.len()
    }

    /// Completion percent against a module's lesson count
    ///
    /// A module with no lessons reads as 0 percent.
    #[must_use]
    pub fn percent(&self, module: &TrainingModule) -> u8 {
        if module.lessons.is_empty() {
            return 0;
        }
        let ratio = self.completed_lessons.len() as f64 / module.lessons.len() as f64;
        (ratio * 100.0).round() as u8
    }

    /// Check whether every lesson of a module has been completed
    #[must_use]
    pub fn is_complete(&self, module: &TrainingModule) -> bool {
        !module.lessons.is_empty()
            && module
                .lessons
                .iter()
                .all(|lesson| self.is_lesson_complete(lesson.id))
    }
}
