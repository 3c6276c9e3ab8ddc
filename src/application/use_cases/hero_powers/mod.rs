//! HeroPower Use Cases

mod create_hero_power;

pub use create_hero_power::CreateHeroPowerUseCase;
