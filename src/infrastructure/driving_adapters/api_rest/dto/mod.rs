//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API. Response shapes are trees:
//! a nested entity never carries the collection it was reached from.

pub mod hero;
pub mod hero_power;
pub mod power;

pub use hero::{CreateHeroDto, HeroPowerOfHeroDto, HeroResponseDto, HeroSummaryDto};
pub use hero_power::{CreateHeroPowerDto, HeroPowerResponseDto};
pub use power::{CreatePowerDto, HeroPowerOfPowerDto, PowerResponseDto, PowerSummaryDto};
