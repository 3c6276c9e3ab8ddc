//! Create Hero Use Case
//!
//! Validates and persists a new hero.

use std::sync::Arc;

use crate::domain::gateways::HeroRepository;
use crate::domain::models::hero::{CreateHeroData, HeroDetails, NewHero};
use crate::shared::errors::UseCaseError;

/// Use case for creating a new hero
pub struct CreateHeroUseCase {
    hero_repository: Arc<dyn HeroRepository>,
}

impl CreateHeroUseCase {
    /// Create a new CreateHeroUseCase
    #[must_use]
    pub fn new(hero_repository: Arc<dyn HeroRepository>) -> Self {
        Self { hero_repository }
    }

    /// Execute the use case
    ///
    /// A freshly created hero owns no associations yet.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Domain` if a field is invalid; nothing is persisted.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: CreateHeroData) -> Result<HeroDetails, UseCaseError> {
        tracing::info!(name = %data.name, super_name = %data.super_name, "Creating new hero");

        let new_hero = NewHero::new(data).map_err(|e| {
            tracing::warn!(reason = %e, "Rejected hero");
            e
        })?;
        let hero = self.hero_repository.create(&new_hero).await?;

        tracing::info!(hero_id = %hero.id(), "Hero created successfully");

        Ok(HeroDetails {
            hero,
            hero_powers: vec![],
        })
    }
}
