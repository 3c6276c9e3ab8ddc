//! Domain Layer
//!
//! Contains the core business rules, domain models, and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::{HeroPowerRepository, HeroRepository, PowerRepository};
pub use models::{Hero, HeroId, HeroPower, HeroPowerId, Power, PowerId, Strength};
