//! SQLite Power Repository Implementation

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::gateways::PowerRepository;
use crate::domain::models::power::{NewPower, Power, PowerId};
use crate::infrastructure::driven_adapters::database::map_write_error;
use crate::shared::errors::RepositoryError;

/// Database row representation for the powers table
#[derive(Debug, sqlx::FromRow)]
struct PowerRow {
    id: i64,
    name: String,
    description: String,
}

impl From<PowerRow> for Power {
    fn from(row: PowerRow) -> Self {
        Power::restore(PowerId::new(row.id), row.name, row.description)
    }
}

/// SQLite implementation of PowerRepository
pub struct SqlitePowerRepository {
    pool: SqlitePool,
}

impl SqlitePowerRepository {
    /// Create a new SqlitePowerRepository
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PowerRepository for SqlitePowerRepository {
    async fn find_by_id(&self, id: PowerId) -> Result<Option<Power>, RepositoryError> {
        let row = sqlx::query_as::<_, PowerRow>(
            r#"
            SELECT id, name, description
            FROM powers
            WHERE id = ?
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Power::from))
    }

    async fn find_all(&self) -> Result<Vec<Power>, RepositoryError> {
        let rows = sqlx::query_as::<_, PowerRow>(
            r#"
            SELECT id, name, description
            FROM powers
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Power::from).collect())
    }

    async fn create(&self, power: &NewPower) -> Result<Power, RepositoryError> {
        let row = sqlx::query_as::<_, PowerRow>(
            r#"
            INSERT INTO powers (name, description)
            VALUES (?, ?)
            RETURNING id, name, description
            "#,
        )
        .bind(power.name())
        .bind(power.description())
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(Power::from(row))
    }

    async fn delete(&self, id: PowerId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM powers WHERE id = ?")
            .bind(id.value())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
