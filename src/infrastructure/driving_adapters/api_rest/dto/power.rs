//! Power DTOs
//!
//! Data transfer objects for power API endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::hero_power::HeroAssignment;
use crate::domain::models::power::{CreatePowerData, Power, PowerDetails};
use crate::infrastructure::driving_adapters::api_rest::dto::hero::{
    validate_not_blank, HeroSummaryDto,
};

/// DTO for creating a new power
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePowerDto {
    #[validate(custom(function = "validate_not_blank", message = "Power name must not be empty"))]
    pub name: String,

    #[validate(length(min = 10, message = "Power description must be at least 10 characters long"))]
    pub description: String,
}

impl From<CreatePowerDto> for CreatePowerData {
    fn from(dto: CreatePowerDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
        }
    }
}

/// A power's own fields, used wherever a power is nested under another entity
#[derive(Debug, Clone, Serialize)]
pub struct PowerSummaryDto {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl From<&Power> for PowerSummaryDto {
    fn from(power: &Power) -> Self {
        Self {
            id: power.id().value(),
            name: power.name().to_string(),
            description: power.description().to_string(),
        }
    }
}

impl From<Power> for PowerSummaryDto {
    fn from(power: Power) -> Self {
        Self::from(&power)
    }
}

/// An association nested under its power: no `power` back-reference
#[derive(Debug, Clone, Serialize)]
pub struct HeroPowerOfPowerDto {
    pub id: i64,
    pub strength: String,
    pub hero_id: i64,
    pub hero: HeroSummaryDto,
}

impl From<&HeroAssignment> for HeroPowerOfPowerDto {
    fn from(assignment: &HeroAssignment) -> Self {
        Self {
            id: assignment.hero_power.id().value(),
            strength: assignment.hero_power.strength().to_string(),
            hero_id: assignment.hero_power.hero_id().value(),
            hero: HeroSummaryDto::from(&assignment.hero),
        }
    }
}

/// Power response DTO
#[derive(Debug, Clone, Serialize)]
pub struct PowerResponseDto {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub hero_powers: Vec<HeroPowerOfPowerDto>,
}

impl From<PowerDetails> for PowerResponseDto {
    fn from(details: PowerDetails) -> Self {
        Self {
            id: details.power.id().value(),
            name: details.power.name().to_string(),
            description: details.power.description().to_string(),
            hero_powers: details.hero_powers.iter().map(HeroPowerOfPowerDto::from).collect(),
        }
    }
}
