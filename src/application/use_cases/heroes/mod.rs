//! Hero Use Cases

mod create_hero;
mod delete_hero;
mod get_all_heroes;
mod get_hero_by_id;
mod get_hero_powers;

pub use create_hero::CreateHeroUseCase;
pub use delete_hero::DeleteHeroUseCase;
pub use get_all_heroes::GetAllHeroesUseCase;
pub use get_hero_by_id::GetHeroByIdUseCase;
pub use get_hero_powers::GetHeroPowersUseCase;
