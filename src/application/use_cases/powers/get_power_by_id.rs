//! Get Power By ID Use Case
//!
//! Retrieves a single power with the associations it owns.

use std::sync::Arc;

use crate::domain::gateways::{HeroPowerRepository, PowerRepository};
use crate::domain::models::power::{PowerDetails, PowerId};
use crate::shared::errors::UseCaseError;

/// Use case for getting a power by ID
pub struct GetPowerByIdUseCase {
    power_repository: Arc<dyn PowerRepository>,
    hero_power_repository: Arc<dyn HeroPowerRepository>,
}

impl GetPowerByIdUseCase {
    /// Create a new GetPowerByIdUseCase
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
    pub async fn execute(&self, id: PowerId) -> Result<PowerDetails, UseCaseError> {
        tracing::debug!(power_id = %id, "Getting power by ID");

        let power = self.power_repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(power_id = %id, "Power not found");
            UseCaseError::not_found("Power", id)
        })?;
        let hero_powers = self.hero_power_repository.find_by_power(id).await?;

        Ok(PowerDetails { power, hero_powers })
    }
}
