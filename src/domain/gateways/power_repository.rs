//! Power Repository Gateway
//!
//! Abstract trait defining the contract for power persistence operations.

use async_trait::async_trait;

use crate::domain::models::power::{NewPower, Power, PowerId};
use crate::shared::errors::RepositoryError;

/// Repository trait for Power persistence operations
#[async_trait]
pub trait PowerRepository: Send + Sync {
    /// Find a power by its ID
    async fn find_by_id(&self, id: PowerId) -> Result<Option<Power>, RepositoryError>;

    /// Find all powers in insertion order
    async fn find_all(&self) -> Result<Vec<Power>, RepositoryError>;

    /// Persist a validated power, returning it with its generated ID
    async fn create(&self, power: &NewPower) -> Result<Power, RepositoryError>;

    /// Delete a power and, by cascade, every association it owns
    async fn delete(&self, id: PowerId) -> Result<bool, RepositoryError>;
}
