//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod hero_power_repository;
pub mod hero_repository;
pub mod power_repository;

pub use hero_power_repository::HeroPowerRepository;
pub use hero_repository::HeroRepository;
pub use power_repository::PowerRepository;
