//! Get Hero Powers Use Case
//!
//! The powers of a hero, computed by traversing its associations.

use std::sync::Arc;

use crate::domain::gateways::{HeroPowerRepository, HeroRepository};
use crate::domain::models::hero::HeroId;
use crate::domain::models::power::Power;
use crate::shared::errors::UseCaseError;

/// Use case for listing the powers a hero holds
pub struct GetHeroPowersUseCase {
    hero_repository: Arc<dyn HeroRepository>,
    hero_power_repository: Arc<dyn HeroPowerRepository>,
}

impl GetHeroPowersUseCase {
    #[must_use]
    pub fn new(
        hero_repository: Arc<dyn HeroRepository>,
        hero_power_repository: Arc<dyn HeroPowerRepository>,
    ) -> Self {
        Self {
            hero_repository,
            hero_power_repository,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the hero doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: HeroId) -> Result<Vec<Power>, UseCaseError> {
        tracing::debug!(hero_id = %id, "Getting powers of hero");

        if self.hero_repository.find_by_id(id).await?.is_none() {
            tracing::warn!(hero_id = %id, "Hero not found");
            return Err(UseCaseError::not_found("Hero", id));
        }

        let powers = self
            .hero_power_repository
            .find_by_hero(id)
            .await?
            .into_iter()
            .map(|assignment| assignment.power)
            .collect();
        Ok(powers)
    }
}
