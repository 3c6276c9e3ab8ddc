//! Get All Heroes Use Case
//!
//! Retrieves every hero with the associations it owns, in insertion order.

use std::sync::Arc;

use crate::domain::gateways::{HeroPowerRepository, HeroRepository};
use crate::domain::models::hero::HeroDetails;
use crate::shared::errors::UseCaseError;

/// Use case for listing heroes
pub struct GetAllHeroesUseCase {
    hero_repository: Arc<dyn HeroRepository>,
    hero_power_repository: Arc<dyn HeroPowerRepository>,
}

impl GetAllHeroesUseCase {
    /// Create a new GetAllHeroesUseCase
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
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<Vec<HeroDetails>, UseCaseError> {
        tracing::debug!("Getting all heroes");

        let heroes = self.hero_repository.find_all().await?;
        let mut details = Vec::with_capacity(heroes.len());
        for hero in heroes {
            let hero_powers = self.hero_power_repository.find_by_hero(hero.id()).await?;
            details.push(HeroDetails { hero, hero_powers });
        }

        tracing::debug!(count = details.len(), "Found heroes");
        Ok(details)
    }
}
