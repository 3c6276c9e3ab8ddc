//! Get All Powers Use Case

use std::sync::Arc;

use crate::domain::gateways::{HeroPowerRepository, PowerRepository};
use crate::domain::models::power::PowerDetails;
use crate::shared::errors::UseCaseError;

/// Use case for listing powers
pub struct GetAllPowersUseCase {
    power_repository: Arc<dyn PowerRepository>,
    hero_power_repository: Arc<dyn HeroPowerRepository>,
}

impl GetAllPowersUseCase {
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
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<Vec<PowerDetails>, UseCaseError> {
        tracing::debug!("Getting all powers");

        let powers = self.power_repository.find_all().await?;
        let mut details = Vec::with_capacity(powers.len());
        for power in powers {
            let hero_powers = self.hero_power_repository.find_by_power(power.id()).await?;
            details.push(PowerDetails { power, hero_powers });
        }

        tracing::debug!(count = details.len(), "Found powers");
        Ok(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::mocks::{power, MockHeroPowerRepository, MockPowerRepository};

    #[tokio::test]
    async fn should_return_powers_in_insertion_order() {
        let use_case = GetAllPowersUseCase::new(
            Arc::new(MockPowerRepository::with_powers(vec![
                power(1, "Flight", "Can fly through the air"),
                power(2, "Strength", "Lifts entire buildings"),
            ])),
            Arc::new(MockHeroPowerRepository::new()),
        );

        let powers = use_case.execute().await.unwrap();
        assert_eq!(powers.len(), 2);
        assert_eq!(powers[1].power.name(), "Strength");
    }

    #[tokio::test]
    async fn should_surface_storage_fault() {
        let use_case = GetAllPowersUseCase::new(
            Arc::new(MockPowerRepository::failing()),
            Arc::new(MockHeroPowerRepository::new()),
        );

        assert!(matches!(
            use_case.execute().await.unwrap_err(),
            UseCaseError::Repository(_)
        ));
    }
}
