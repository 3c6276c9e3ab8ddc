//! Create Power Use Case
//!
//! Validates and persists a new power.

use std::sync::Arc;

use crate::domain::gateways::PowerRepository;
use crate::domain::models::power::{CreatePowerData, NewPower, PowerDetails};
use crate::shared::errors::UseCaseError;

/// Use case for creating a new power
pub struct CreatePowerUseCase {
    power_repository: Arc<dyn PowerRepository>,
}

impl CreatePowerUseCase {
    /// Create a new CreatePowerUseCase
    #[must_use]
    pub fn new(power_repository: Arc<dyn PowerRepository>) -> Self {
        Self { power_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Domain` if the name is blank or the description
    /// is too short; nothing is persisted.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: CreatePowerData) -> Result<PowerDetails, UseCaseError> {
        tracing::info!(name = %data.name, "Creating new power");

        let new_power = NewPower::new(data).map_err(|e| {
            tracing::warn!(reason = %e, "Rejected power");
            e
        })?;
        let power = self.power_repository.create(&new_power).await?;

        tracing::info!(power_id = %power.id(), "Power created successfully");

        Ok(PowerDetails {
            power,
            hero_powers: vec![],
        })
    }
}
