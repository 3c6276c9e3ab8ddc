//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API.

pub mod dto;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{routing::get, Router};
use sqlx::SqlitePool;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::use_cases::{
    CreateHeroPowerUseCase, CreateHeroUseCase, CreatePowerUseCase, DeleteHeroUseCase,
    DeletePowerUseCase, GetAllHeroesUseCase, GetAllPowersUseCase, GetHeroByIdUseCase,
    GetHeroPowersUseCase, GetPowerByIdUseCase, GetPowerHeroesUseCase,
};
use crate::domain::gateways::{HeroPowerRepository, HeroRepository, PowerRepository};
use crate::infrastructure::driven_adapters::{
    SqliteHeroPowerRepository, SqliteHeroRepository, SqlitePowerRepository,
};

/// Application state shared across all handlers
///
/// The delete use cases are not routed; they are held here so the process
/// owns one wiring of the model layer.
#[derive(Clone)]
pub struct AppState {
    pub create_hero_use_case: Arc<CreateHeroUseCase>,
    pub get_hero_by_id_use_case: Arc<GetHeroByIdUseCase>,
    pub get_all_heroes_use_case: Arc<GetAllHeroesUseCase>,
    pub get_hero_powers_use_case: Arc<GetHeroPowersUseCase>,
    pub delete_hero_use_case: Arc<DeleteHeroUseCase>,
    pub create_power_use_case: Arc<CreatePowerUseCase>,
    pub get_power_by_id_use_case: Arc<GetPowerByIdUseCase>,
    pub get_all_powers_use_case: Arc<GetAllPowersUseCase>,
    pub get_power_heroes_use_case: Arc<GetPowerHeroesUseCase>,
    pub delete_power_use_case: Arc<DeletePowerUseCase>,
    pub create_hero_power_use_case: Arc<CreateHeroPowerUseCase>,
}

impl AppState {
    /// Wire every use case against the given repositories
    #[must_use]
    pub fn new(
        hero_repository: Arc<dyn HeroRepository>,
        power_repository: Arc<dyn PowerRepository>,
        hero_power_repository: Arc<dyn HeroPowerRepository>,
    ) -> Self {
        Self {
            create_hero_use_case: Arc::new(CreateHeroUseCase::new(hero_repository.clone())),
            get_hero_by_id_use_case: Arc::new(GetHeroByIdUseCase::new(
                hero_repository.clone(),
                hero_power_repository.clone(),
            )),
            get_all_heroes_use_case: Arc::new(GetAllHeroesUseCase::new(
                hero_repository.clone(),
                hero_power_repository.clone(),
            )),
            get_hero_powers_use_case: Arc::new(GetHeroPowersUseCase::new(
                hero_repository.clone(),
                hero_power_repository.clone(),
            )),
            delete_hero_use_case: Arc::new(DeleteHeroUseCase::new(hero_repository.clone())),
            create_power_use_case: Arc::new(CreatePowerUseCase::new(power_repository.clone())),
            get_power_by_id_use_case: Arc::new(GetPowerByIdUseCase::new(
                power_repository.clone(),
                hero_power_repository.clone(),
            )),
            get_all_powers_use_case: Arc::new(GetAllPowersUseCase::new(
                power_repository.clone(),
                hero_power_repository.clone(),
            )),
            get_power_heroes_use_case: Arc::new(GetPowerHeroesUseCase::new(
                power_repository.clone(),
                hero_power_repository.clone(),
            )),
            delete_power_use_case: Arc::new(DeletePowerUseCase::new(power_repository.clone())),
            create_hero_power_use_case: Arc::new(CreateHeroPowerUseCase::new(
                hero_repository,
                power_repository,
                hero_power_repository,
            )),
        }
    }

    /// Wire every use case against SQLite repositories sharing one pool
    #[must_use]
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self::new(
            Arc::new(SqliteHeroRepository::new(pool.clone())),
            Arc::new(SqlitePowerRepository::new(pool.clone())),
            Arc::new(SqliteHeroPowerRepository::new(pool)),
        )
    }
}

/// Build the application router with its middleware stack
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .nest("/heroes", handlers::heroes::router())
        .nest("/powers", handlers::powers::router())
        .nest("/hero_powers", handlers::hero_powers::router())
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(CatchPanicLayer::custom(handlers::handle_panic))
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
