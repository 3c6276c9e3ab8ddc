//! Hero DTOs
//!
//! Data transfer objects for hero API endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::hero::{CreateHeroData, Hero, HeroDetails};
use crate::domain::models::hero_power::PowerAssignment;
use crate::infrastructure::driving_adapters::api_rest::dto::power::PowerSummaryDto;

/// Rejects blank (empty or whitespace-only) text
pub(crate) fn validate_not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("blank"));
    }
    Ok(())
}

/// DTO for creating a new hero
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateHeroDto {
    #[validate(custom(function = "validate_not_blank", message = "Hero name must not be empty"))]
    pub name: String,

    #[validate(custom(
        function = "validate_not_blank",
        message = "Hero super_name must not be empty"
    ))]
    pub super_name: String,
}

impl From<CreateHeroDto> for CreateHeroData {
    fn from(dto: CreateHeroDto) -> Self {
        Self {
            name: dto.name,
            super_name: dto.super_name,
        }
    }
}

/// A hero's own fields, used wherever a hero is nested under another entity
#[derive(Debug, Clone, Serialize)]
pub struct HeroSummaryDto {
    pub id: i64,
    pub name: String,
    pub super_name: String,
}

impl From<&Hero> for HeroSummaryDto {
    fn from(hero: &Hero) -> Self {
        Self {
            id: hero.id().value(),
            name: hero.name().to_string(),
            super_name: hero.super_name().to_string(),
        }
    }
}

impl From<Hero> for HeroSummaryDto {
    fn from(hero: Hero) -> Self {
        Self::from(&hero)
    }
}

/// An association nested under its hero: no `hero` back-reference
#[derive(Debug, Clone, Serialize)]
pub struct HeroPowerOfHeroDto {
    pub id: i64,
    pub strength: String,
    pub power_id: i64,
    pub power: PowerSummaryDto,
}

impl From<&PowerAssignment> for HeroPowerOfHeroDto {
    fn from(assignment: &PowerAssignment) -> Self {
        Self {
            id: assignment.hero_power.id().value(),
            strength: assignment.hero_power.strength().to_string(),
            power_id: assignment.hero_power.power_id().value(),
            power: PowerSummaryDto::from(&assignment.power),
        }
    }
}

/// Hero response DTO
#[derive(Debug, Clone, Serialize)]
pub struct HeroResponseDto {
    pub id: i64,
    pub name: String,
    pub super_name: String,
    pub hero_powers: Vec<HeroPowerOfHeroDto>,
}

impl From<HeroDetails> for HeroResponseDto {
    fn from(details: HeroDetails) -> Self {
        Self {
            id: details.hero.id().value(),
            name: details.hero.name().to_string(),
            super_name: details.hero.super_name().to_string(),
            hero_powers: details.hero_powers.iter().map(HeroPowerOfHeroDto::from).collect(),
        }
    }
}
