//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Database repositories
//! - Configuration

pub mod config;
pub mod database;
pub mod hero_power_repository;
pub mod hero_repository;
pub mod power_repository;

pub use config::AppConfig;
pub use hero_power_repository::SqliteHeroPowerRepository;
pub use hero_repository::SqliteHeroRepository;
pub use power_repository::SqlitePowerRepository;
