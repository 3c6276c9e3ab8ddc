//! SQLite HeroPower Repository Implementation
//!
//! Joins are resolved here, one side at a time: rows fetched for a hero carry
//! the power only, rows fetched for a power carry the hero only.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::gateways::HeroPowerRepository;
use crate::domain::models::hero::{Hero, HeroId};
use crate::domain::models::hero_power::{
    HeroAssignment, HeroPower, HeroPowerId, NewHeroPower, PowerAssignment, Strength,
};
use crate::domain::models::power::{Power, PowerId};
use crate::infrastructure::driven_adapters::database::map_write_error;
use crate::shared::errors::RepositoryError;

/// Database row representation for the hero_powers table
#[derive(Debug, sqlx::FromRow)]
struct HeroPowerRow {
    id: i64,
    strength: String,
    hero_id: i64,
    power_id: i64,
}

impl TryFrom<HeroPowerRow> for HeroPower {
    type Error = RepositoryError;

    fn try_from(row: HeroPowerRow) -> Result<Self, Self::Error> {
        let strength: Strength = row
            .strength
            .parse()
            .map_err(|e| RepositoryError::Mapping(format!("Failed to parse strength: {e}")))?;

        Ok(HeroPower::restore(
            HeroPowerId::new(row.id),
            strength,
            HeroId::new(row.hero_id),
            PowerId::new(row.power_id),
        ))
    }
}

/// An association joined with its power
#[derive(Debug, sqlx::FromRow)]
struct PowerAssignmentRow {
    #[sqlx(flatten)]
    hero_power: HeroPowerRow,
    power_name: String,
    power_description: String,
}

impl TryFrom<PowerAssignmentRow> for PowerAssignment {
    type Error = RepositoryError;

    fn try_from(row: PowerAssignmentRow) -> Result<Self, Self::Error> {
        let hero_power = HeroPower::try_from(row.hero_power)?;
        let power = Power::restore(hero_power.power_id(), row.power_name, row.power_description);
        Ok(PowerAssignment { hero_power, power })
    }
}

/// An association joined with its hero
#[derive(Debug, sqlx::FromRow)]
struct HeroAssignmentRow {
    #[sqlx(flatten)]
    hero_power: HeroPowerRow,
    hero_name: String,
    hero_super_name: String,
}

impl TryFrom<HeroAssignmentRow> for HeroAssignment {
    type Error = RepositoryError;

    fn try_from(row: HeroAssignmentRow) -> Result<Self, Self::Error> {
        let hero_power = HeroPower::try_from(row.hero_power)?;
        let hero = Hero::restore(hero_power.hero_id(), row.hero_name, row.hero_super_name);
        Ok(HeroAssignment { hero_power, hero })
    }
}

/// SQLite implementation of HeroPowerRepository
pub struct SqliteHeroPowerRepository {
    pool: SqlitePool,
}

impl SqliteHeroPowerRepository {
    /// Create a new SqliteHeroPowerRepository
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HeroPowerRepository for SqliteHeroPowerRepository {
    async fn create(&self, hero_power: &NewHeroPower) -> Result<HeroPower, RepositoryError> {
        let row = sqlx::query_as::<_, HeroPowerRow>(
            r#"
            INSERT INTO hero_powers (strength, hero_id, power_id)
            VALUES (?, ?, ?)
            RETURNING id, strength, hero_id, power_id
            "#,
        )
        .bind(hero_power.strength().as_str())
        .bind(hero_power.hero_id().value())
        .bind(hero_power.power_id().value())
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        HeroPower::try_from(row)
    }

    async fn find_by_hero(&self, hero_id: HeroId) -> Result<Vec<PowerAssignment>, RepositoryError> {
        let rows = sqlx::query_as::<_, PowerAssignmentRow>(
            r#"
            SELECT hp.id, hp.strength, hp.hero_id, hp.power_id,
                   p.name AS power_name, p.description AS power_description
            FROM hero_powers hp
            JOIN powers p ON p.id = hp.power_id
            WHERE hp.hero_id = ?
            ORDER BY hp.id ASC
            "#,
        )
        .bind(hero_id.value())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(PowerAssignment::try_from).collect()
    }

    async fn find_by_power(&self, power_id: PowerId) -> Result<Vec<HeroAssignment>, RepositoryError> {
        let rows = sqlx::query_as::<_, HeroAssignmentRow>(
            r#"
            SELECT hp.id, hp.strength, hp.hero_id, hp.power_id,
                   h.name AS hero_name, h.super_name AS hero_super_name
            FROM hero_powers hp
            JOIN heroes h ON h.id = hp.hero_id
            WHERE hp.power_id = ?
            ORDER BY hp.id ASC
            "#,
        )
        .bind(power_id.value())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(HeroAssignment::try_from).collect()
    }
}
