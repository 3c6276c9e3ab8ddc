//! HeroPower DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::hero_power::{CreateHeroPowerData, HeroPowerDetails, Strength};
use crate::infrastructure::driving_adapters::api_rest::dto::hero::HeroSummaryDto;
use crate::infrastructure::driving_adapters::api_rest::dto::power::PowerSummaryDto;

/// Validates that a strength is one of the allowed values
fn validate_strength(value: &str) -> Result<(), validator::ValidationError> {
    value.parse::<Strength>().map(|_| ()).map_err(|e| {
        let mut error = validator::ValidationError::new("strength");
        error.message = Some(e.to_string().into());
        error
    })
}

/// DTO for creating a new hero/power association
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateHeroPowerDto {
    #[validate(custom(function = "validate_strength"))]
    pub strength: String,
    pub hero_id: i64,
    pub power_id: i64,
}

impl From<CreateHeroPowerDto> for CreateHeroPowerData {
    fn from(dto: CreateHeroPowerDto) -> Self {
        Self {
            strength: dto.strength,
            hero_id: dto.hero_id,
            power_id: dto.power_id,
        }
    }
}

/// HeroPower response DTO: both sides nested, neither carrying `hero_powers`
#[derive(Debug, Clone, Serialize)]
pub struct HeroPowerResponseDto {
    pub id: i64,
    pub strength: String,
    pub hero_id: i64,
    pub power_id: i64,
    pub hero: HeroSummaryDto,
    pub power: PowerSummaryDto,
}

impl From<HeroPowerDetails> for HeroPowerResponseDto {
    fn from(details: HeroPowerDetails) -> Self {
        Self {
            id: details.hero_power.id().value(),
            strength: details.hero_power.strength().to_string(),
            hero_id: details.hero_power.hero_id().value(),
            power_id: details.hero_power.power_id().value(),
            hero: HeroSummaryDto::from(details.hero),
            power: PowerSummaryDto::from(details.power),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_strength() {
        assert!(validate_strength("Strong").is_ok());
        assert!(validate_strength("Weak").is_ok());

        let err = validate_strength("Mighty").unwrap_err();
        assert_eq!(
            err.message.as_deref(),
            Some("Strength must be 'Strong', 'Average', or 'Weak'")
        );
    }
}
