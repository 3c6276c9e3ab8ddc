//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod hero;
pub mod hero_power;
pub mod power;

pub use hero::{CreateHeroData, Hero, HeroDetails, HeroId, NewHero};
pub use hero_power::{
    CreateHeroPowerData, HeroAssignment, HeroPower, HeroPowerDetails, HeroPowerId, NewHeroPower,
    PowerAssignment, Strength,
};
pub use power::{CreatePowerData, NewPower, Power, PowerDetails, PowerId};
