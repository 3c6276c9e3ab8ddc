//! SQLite Hero Repository Implementation
//!
//! Implements the HeroRepository trait using SQLx for SQLite.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::gateways::HeroRepository;
use crate::domain::models::hero::{Hero, HeroId, NewHero};
use crate::infrastructure::driven_adapters::database::map_write_error;
use crate::shared::errors::RepositoryError;

/// Database row representation for the heroes table
#[derive(Debug, sqlx::FromRow)]
struct HeroRow {
    id: i64,
    name: String,
    super_name: String,
}

impl From<HeroRow> for Hero {
    fn from(row: HeroRow) -> Self {
        Hero::restore(HeroId::new(row.id), row.name, row.super_name)
    }
}

/// SQLite implementation of HeroRepository
pub struct SqliteHeroRepository {
    pool: SqlitePool,
}

impl SqliteHeroRepository {
    /// Create a new SqliteHeroRepository
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HeroRepository for SqliteHeroRepository {
    async fn find_by_id(&self, id: HeroId) -> Result<Option<Hero>, RepositoryError> {
        let row = sqlx::query_as::<_, HeroRow>(
            r#"
            SELECT id, name, super_name
            FROM heroes
            WHERE id = ?
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Hero::from))
    }

    async fn find_all(&self) -> Result<Vec<Hero>, RepositoryError> {
        let rows = sqlx::query_as::<_, HeroRow>(
            r#"
            SELECT id, name, super_name
            FROM heroes
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Hero::from).collect())
    }

    async fn create(&self, hero: &NewHero) -> Result<Hero, RepositoryError> {
        let row = sqlx::query_as::<_, HeroRow>(
            r#"
            INSERT INTO heroes (name, super_name)
            VALUES (?, ?)
            RETURNING id, name, super_name
            "#,
        )
        .bind(hero.name())
        .bind(hero.super_name())
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(Hero::from(row))
    }

    async fn delete(&self, id: HeroId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM heroes WHERE id = ?")
            .bind(id.value())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
