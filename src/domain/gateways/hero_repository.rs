//! Hero Repository Gateway
//!
//! Abstract trait defining the contract for hero persistence operations.

use async_trait::async_trait;

use crate::domain::models::hero::{Hero, HeroId, NewHero};
use crate::shared::errors::RepositoryError;

/// Repository trait for Hero persistence operations
#[async_trait]
pub trait HeroRepository: Send + Sync {
    /// Find a hero by its ID
    async fn find_by_id(&self, id: HeroId) -> Result<Option<Hero>, RepositoryError>;

    /// Find all heroes in insertion order
    async fn find_all(&self) -> Result<Vec<Hero>, RepositoryError>;

    /// Persist a validated hero, returning it with its generated ID
    async fn create(&self, hero: &NewHero) -> Result<Hero, RepositoryError>;

    /// Delete a hero and, by cascade, every association it owns
    async fn delete(&self, id: HeroId) -> Result<bool, RepositoryError>;
}
