//! Get Power Heroes Use Case
//!
//! The heroes holding a power, computed by traversing its associations.

use std::sync::Arc;

use crate::domain::gateways::{HeroPowerRepository, PowerRepository};
use crate::domain::models::hero::Hero;
use crate::domain::models::power::PowerId;
use crate::shared::errors::UseCaseError;

/// Use case for listing the heroes that hold a power
pub struct GetPowerHeroesUseCase {
    power_repository: Arc<dyn PowerRepository>,
    hero_power_repository: Arc<dyn HeroPowerRepository>,
}

impl GetPowerHeroesUseCase {
    #[must_use]
    pub fn new(
        power_repository: Arc<dyn PowerRepository>,
        hero_power_repository: Arc<dyn HeroPowerRepository>,
    ) -> Self {
        Self {
            power_repository,
            hero_power_repository,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the power doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: PowerId) -> Result<Vec<Hero>, UseCaseError> {
        tracing::debug!(power_id = %id, "Getting heroes with power");

        if self.power_repository.find_by_id(id).await?.is_none() {
            tracing::warn!(power_id = %id, "Power not found");
            return Err(UseCaseError::not_found("Power", id));
        }

        let heroes = self
            .hero_power_repository
            .find_by_power(id)
            .await?
            .into_iter()
            .map(|assignment| assignment.hero)
            .collect();
        Ok(heroes)
    }
}
