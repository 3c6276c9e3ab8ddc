//! Hero Domain Model
//!
//! Represents a hero in the registry together with its validated write model
//! and the read model used for serialization.

use crate::domain::models::hero_power::PowerAssignment;
use crate::shared::errors::DomainError;

/// Newtype wrapper for Hero ID providing type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeroId(i64);

impl HeroId {
    /// Create a HeroId from a persisted row id
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying row id
    #[must_use]
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for HeroId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for HeroId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Data required to create a new Hero
#[derive(Debug, Clone)]
pub struct CreateHeroData {
    pub name: String,
    pub super_name: String,
}

/// A Hero that passed validation and may be persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHero {
    name: String,
    super_name: String,
}

impl NewHero {
    /// Validate creation data
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyField` if `name` or `super_name` is blank.
    pub fn new(data: CreateHeroData) -> Result<Self, DomainError> {
        if data.name.trim().is_empty() {
            return Err(DomainError::EmptyField {
                entity: "Hero",
                field: "name",
            });
        }
        if data.super_name.trim().is_empty() {
            return Err(DomainError::EmptyField {
                entity: "Hero",
                field: "super_name",
            });
        }

        Ok(Self {
            name: data.name,
            super_name: data.super_name,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn super_name(&self) -> &str {
        &self.super_name
    }
}

/// Hero domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hero {
    id: HeroId,
    name: String,
    super_name: String,
}

impl Hero {
    /// Restore a Hero from persisted data
    #[must_use]
    pub fn restore(id: HeroId, name: String, super_name: String) -> Self {
        Self {
            id,
            name,
            super_name,
        }
    }

    #[must_use]
    pub fn id(&self) -> HeroId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn super_name(&self) -> &str {
        &self.super_name
    }
}

/// A Hero with the associations it owns, each carrying the linked Power
#[derive(Debug, Clone)]
pub struct HeroDetails {
    pub hero: Hero,
    pub hero_powers: Vec<PowerAssignment>,
}
