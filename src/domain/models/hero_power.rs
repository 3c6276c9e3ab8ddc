//! HeroPower Domain Model
//!
//! The association between a Hero and a Power, carrying the strength of the
//! hero in that power. Read models hold the *other* side of the association
//! only, so a serialized tree never loops back to its parent.

use std::str::FromStr;

use crate::domain::models::hero::{Hero, HeroId};
use crate::domain::models::power::{Power, PowerId};
use crate::shared::errors::DomainError;

/// Newtype wrapper for HeroPower ID providing type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeroPowerId(i64);

impl HeroPowerId {
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for HeroPowerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How strongly a hero wields a power
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strength {
    Strong,
    Average,
    Weak,
}

impl Strength {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Average => "Average",
            Self::Weak => "Weak",
        }
    }
}

impl FromStr for Strength {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Strong" => Ok(Self::Strong),
            "Average" => Ok(Self::Average),
            "Weak" => Ok(Self::Weak),
            other => Err(DomainError::InvalidStrength(other.to_string())),
        }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Data required to create a new HeroPower
#[derive(Debug, Clone)]
pub struct CreateHeroPowerData {
    pub strength: String,
    pub hero_id: i64,
    pub power_id: i64,
}

/// A HeroPower whose strength is valid. Referential checks against the store
/// happen in the use case before persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHeroPower {
    strength: Strength,
    hero_id: HeroId,
    power_id: PowerId,
}

impl NewHeroPower {
    /// Validate creation data
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStrength` if the strength is not one of
    /// `Strong`, `Average` or `Weak`.
    pub fn new(data: CreateHeroPowerData) -> Result<Self, DomainError> {
        Ok(Self {
            strength: data.strength.parse()?,
            hero_id: HeroId::new(data.hero_id),
            power_id: PowerId::new(data.power_id),
        })
    }

    #[must_use]
    pub fn strength(&self) -> Strength {
        self.strength
    }

    #[must_use]
    pub fn hero_id(&self) -> HeroId {
        self.hero_id
    }

    #[must_use]
    pub fn power_id(&self) -> PowerId {
        self.power_id
    }
}

/// HeroPower domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroPower {
    id: HeroPowerId,
    strength: Strength,
    hero_id: HeroId,
    power_id: PowerId,
}

impl HeroPower {
    /// Restore a HeroPower from persisted data
    #[must_use]
    pub fn restore(id: HeroPowerId, strength: Strength, hero_id: HeroId, power_id: PowerId) -> Self {
        Self {
            id,
            strength,
            hero_id,
            power_id,
        }
    }

    #[must_use]
    pub fn id(&self) -> HeroPowerId {
        self.id
    }

    #[must_use]
    pub fn strength(&self) -> Strength {
        self.strength
    }

    #[must_use]
    pub fn hero_id(&self) -> HeroId {
        self.hero_id
    }

    #[must_use]
    pub fn power_id(&self) -> PowerId {
        self.power_id
    }
}

/// An association seen from its Hero: the join row plus the linked Power
#[derive(Debug, Clone)]
pub struct PowerAssignment {
    pub hero_power: HeroPower,
    pub power: Power,
}

/// An association seen from its Power: the join row plus the linked Hero
#[derive(Debug, Clone)]
pub struct HeroAssignment {
    pub hero_power: HeroPower,
    pub hero: Hero,
}

/// A freshly created association with both linked entities
#[derive(Debug, Clone)]
pub struct HeroPowerDetails {
    pub hero_power: HeroPower,
    pub hero: Hero,
    pub power: Power,
}
