//! Delete Power Use Case
//!
//! Removes a power together with every association it owns.

use std::sync::Arc;

use crate::domain::gateways::PowerRepository;
use crate::domain::models::power::PowerId;
use crate::shared::errors::UseCaseError;

/// Use case for deleting a power
pub struct DeletePowerUseCase {
    power_repository: Arc<dyn PowerRepository>,
}

impl DeletePowerUseCase {
    /// Create a new DeletePowerUseCase
    #[must_use]
    pub fn new(power_repository: Arc<dyn PowerRepository>) -> Self {
        Self { power_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the power doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: PowerId) -> Result<(), UseCaseError> {
        tracing::info!(power_id = %id, "Deleting power");

        if !self.power_repository.delete(id).await? {
            tracing::warn!(power_id = %id, "Power not found for deletion");
            return Err(UseCaseError::not_found("Power", id));
        }

        tracing::info!(power_id = %id, "Power deleted successfully");
        Ok(())
    }
}
