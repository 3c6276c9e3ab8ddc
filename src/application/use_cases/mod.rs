//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod hero_powers;
pub mod heroes;
pub mod powers;

#[cfg(test)]
mod mocks;

pub use hero_powers::CreateHeroPowerUseCase;
pub use heroes::{
    CreateHeroUseCase, DeleteHeroUseCase, GetAllHeroesUseCase, GetHeroByIdUseCase,
    GetHeroPowersUseCase,
};
pub use powers::{
    CreatePowerUseCase, DeletePowerUseCase, GetAllPowersUseCase, GetPowerByIdUseCase,
    GetPowerHeroesUseCase,
};
