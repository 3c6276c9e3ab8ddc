//! Create HeroPower Use Case
//!
//! Links an existing hero to an existing power with a given strength.

use std::sync::Arc;

use crate::domain::gateways::{HeroPowerRepository, HeroRepository, PowerRepository};
use crate::domain::models::hero_power::{CreateHeroPowerData, HeroPowerDetails, NewHeroPower};
use crate::shared::errors::{DomainError, RepositoryError, UseCaseError};

/// Use case for creating a new hero/power association
pub struct CreateHeroPowerUseCase {
    hero_repository: Arc<dyn HeroRepository>,
    power_repository: Arc<dyn PowerRepository>,
    hero_power_repository: Arc<dyn HeroPowerRepository>,
}

impl CreateHeroPowerUseCase {
    /// Create a new CreateHeroPowerUseCase
    #[must_use]
    pub fn new(
        hero_repository: Arc<dyn HeroRepository>,
        power_repository: Arc<dyn PowerRepository>,
        hero_power_repository: Arc<dyn HeroPowerRepository>,
    ) -> Self {
        Self {
            hero_repository,
            power_repository,
            hero_power_repository,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Domain` if the strength is invalid or either
    /// referenced row does not exist, including a hero or power removed
    /// between the lookup and the insert.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: CreateHeroPowerData) -> Result<HeroPowerDetails, UseCaseError> {
        tracing::info!(
            hero_id = data.hero_id,
            power_id = data.power_id,
            strength = %data.strength,
            "Creating new hero power"
        );

        let new_hero_power = NewHeroPower::new(data).map_err(|e| {
            tracing::warn!(reason = %e, "Rejected hero power");
            e
        })?;

        let hero_id = new_hero_power.hero_id();
        let hero = self.hero_repository.find_by_id(hero_id).await?.ok_or_else(|| {
            tracing::warn!(hero_id = %hero_id, "Hero power references a missing hero");
            DomainError::MissingReference {
                resource: "Hero",
                id: hero_id.value(),
            }
        })?;

        let power_id = new_hero_power.power_id();
        let power = self.power_repository.find_by_id(power_id).await?.ok_or_else(|| {
            tracing::warn!(power_id = %power_id, "Hero power references a missing power");
            DomainError::MissingReference {
                resource: "Power",
                id: power_id.value(),
            }
        })?;

        let hero_power = self
            .hero_power_repository
            .create(&new_hero_power)
            .await
            .map_err(|e| match e {
                RepositoryError::ConstraintViolation(detail) => {
                    tracing::warn!(%detail, "Hero power lost its hero or power before insert");
                    UseCaseError::Domain(DomainError::ReferenceRemoved)
                }
                other => UseCaseError::Repository(other),
            })?;

        tracing::info!(hero_power_id = %hero_power.id(), "Hero power created successfully");

        Ok(HeroPowerDetails {
            hero_power,
            hero,
            power,
        })
    }
}
