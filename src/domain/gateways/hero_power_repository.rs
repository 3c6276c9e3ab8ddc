//! HeroPower Repository Gateway
//!
//! Persistence of associations and the joins that traverse them.

use async_trait::async_trait;

use crate::domain::models::hero::HeroId;
use crate::domain::models::hero_power::{HeroAssignment, HeroPower, NewHeroPower, PowerAssignment};
use crate::domain::models::power::PowerId;
use crate::shared::errors::RepositoryError;

/// Repository trait for HeroPower persistence operations
#[async_trait]
pub trait HeroPowerRepository: Send + Sync {
    /// Persist an association. Fails with `RepositoryError::ConstraintViolation`
    /// if either side no longer exists.
    async fn create(&self, hero_power: &NewHeroPower) -> Result<HeroPower, RepositoryError>;

    /// Associations owned by a hero, each joined with its power
    async fn find_by_hero(&self, hero_id: HeroId) -> Result<Vec<PowerAssignment>, RepositoryError>;

    /// Associations owned by a power, each joined with its hero
    async fn find_by_power(&self, power_id: PowerId) -> Result<Vec<HeroAssignment>, RepositoryError>;
}
