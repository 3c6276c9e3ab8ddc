//! Get Hero By ID Use Case
//!
//! Retrieves a single hero with the associations it owns.

use std::sync::Arc;

use crate::domain::gateways::{HeroPowerRepository, HeroRepository};
use crate::domain::models::hero::{HeroDetails, HeroId};
use crate::shared::errors::UseCaseError;

/// Use case for getting a hero by ID
pub struct GetHeroByIdUseCase {
    hero_repository: Arc<dyn HeroRepository>,
    hero_power_repository: Arc<dyn HeroPowerRepository>,
}

impl GetHeroByIdUseCase {
    /// Create a new GetHeroByIdUseCase
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
    pub async fn execute(&self, id: HeroId) -> Result<HeroDetails, UseCaseError> {
        tracing::debug!(hero_id = %id, "Getting hero by ID");

        let hero = self.hero_repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(hero_id = %id, "Hero not found");
            UseCaseError::not_found("Hero", id)
        })?;
        let hero_powers = self.hero_power_repository.find_by_hero(id).await?;

        tracing::debug!(hero_id = %id, associations = hero_powers.len(), "Hero found");
        Ok(HeroDetails { hero, hero_powers })
    }
}
