//! Power Domain Model

use crate::domain::models::hero_power::HeroAssignment;
use crate::shared::errors::DomainError;

/// Minimum number of characters a power description must have
pub const MIN_DESCRIPTION_LENGTH: usize = 10;

/// Newtype wrapper for Power ID providing type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PowerId(i64);

impl PowerId {
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for PowerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for PowerId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Data required to create a new Power
#[derive(Debug, Clone)]
pub struct CreatePowerData {
    pub name: String,
    pub description: String,
}

/// A Power that passed validation and may be persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPower {
    name: String,
    description: String,
}

impl NewPower {
    /// Validate creation data
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyField` for a blank name and
    /// `DomainError::DescriptionTooShort` when the description has fewer than
    /// [`MIN_DESCRIPTION_LENGTH`] characters.
    pub fn new(data: CreatePowerData) -> Result<Self, DomainError> {
        if data.name.trim().is_empty() {
            return Err(DomainError::EmptyField {
                entity: "Power",
                field: "name",
            });
        }
        if data.description.chars().count() < MIN_DESCRIPTION_LENGTH {
            return Err(DomainError::DescriptionTooShort {
                min: MIN_DESCRIPTION_LENGTH,
            });
        }

        Ok(Self {
            name: data.name,
            description: data.description,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Power domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Power {
    id: PowerId,
    name: String,
    description: String,
}

impl Power {
    /// Restore a Power from persisted data
    #[must_use]
    pub fn restore(id: PowerId, name: String, description: String) -> Self {
        Self {
            id,
            name,
            description,
        }
    }

    #[must_use]
    pub fn id(&self) -> PowerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// A Power with the associations it owns, each carrying the linked Hero
#[derive(Debug, Clone)]
pub struct PowerDetails {
    pub power: Power,
    pub hero_powers: Vec<HeroAssignment>,
}
