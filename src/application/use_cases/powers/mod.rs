//! Power Use Cases

mod create_power;
mod delete_power;
mod get_all_powers;
mod get_power_by_id;
mod get_power_heroes;

pub use create_power::CreatePowerUseCase;
pub use delete_power::DeletePowerUseCase;
pub use get_all_powers::GetAllPowersUseCase;
pub use get_power_by_id::GetPowerByIdUseCase;
pub use get_power_heroes::GetPowerHeroesUseCase;
