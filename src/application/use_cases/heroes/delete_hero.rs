//! Delete Hero Use Case
//!
//! Removes a hero. The store drops every association the hero owns in the
//! same statement.

use std::sync::Arc;

use crate::domain::gateways::HeroRepository;
use crate::domain::models::hero::HeroId;
use crate::shared::errors::UseCaseError;

/// Use case for deleting a hero
pub struct DeleteHeroUseCase {
    hero_repository: Arc<dyn HeroRepository>,
}

impl DeleteHeroUseCase {
    /// Create a new DeleteHeroUseCase
    #[must_use]
    pub fn new(hero_repository: Arc<dyn HeroRepository>) -> Self {
        Self { hero_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the hero doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: HeroId) -> Result<(), UseCaseError> {
        tracing::info!(hero_id = %id, "Deleting hero");

        if !self.hero_repository.delete(id).await? {
            tracing::warn!(hero_id = %id, "Hero not found for deletion");
            return Err(UseCaseError::not_found("Hero", id));
        }

        tracing::info!(hero_id = %id, "Hero deleted successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::mocks::{hero, MockHeroRepository};

    #[tokio::test]
    async fn should_delete_hero_when_found() {
        let repo = Arc::new(MockHeroRepository::with_heroes(vec![hero(1, "Clark", "Superman")]));

        let use_case = DeleteHeroUseCase::new(repo.clone());
        assert!(use_case.execute(HeroId::new(1)).await.is_ok());
        assert_eq!(repo.count(), 0);
    }

    #[tokio::test]
    async fn should_return_not_found_when_hero_does_not_exist() {
        let use_case = DeleteHeroUseCase::new(Arc::new(MockHeroRepository::new()));

        let result = use_case.execute(HeroId::new(1)).await;
        assert!(matches!(result.unwrap_err(), UseCaseError::NotFound { .. }));
    }
}
