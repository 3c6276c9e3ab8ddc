//! Hero Handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use validator::Validate;

use crate::domain::models::hero::HeroId;
use crate::infrastructure::driving_adapters::api_rest::dto::{
    CreateHeroDto, HeroResponseDto, PowerSummaryDto,
};
use crate::infrastructure::driving_adapters::api_rest::handlers::parse_id;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for hero endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all_heroes).post(create_hero))
        .route("/{id}", get(get_hero_by_id))
        .route("/{id}/powers", get(get_hero_powers))
}

/// POST /heroes - Create a new hero
///
/// # Responses
///
/// * 201 Created - Hero created, with an empty `hero_powers` list
/// * 400 Bad Request - Unparseable body or invalid field
#[axum::debug_handler]
async fn create_hero(
    State(state): State<AppState>,
    payload: Result<Json<CreateHeroDto>, JsonRejection>,
) -> Result<(StatusCode, Json<HeroResponseDto>), ApiError> {
    let Json(dto) = payload?;
    dto.validate()?;

    let hero = state.create_hero_use_case.execute(dto.into()).await?;

    Ok((StatusCode::CREATED, Json(HeroResponseDto::from(hero))))
}

/// GET /heroes - List every hero
#[axum::debug_handler]
async fn get_all_heroes(State(state): State<AppState>) -> Result<Json<Vec<HeroResponseDto>>, ApiError> {
    let heroes = state.get_all_heroes_use_case.execute().await?;

    Ok(Json(heroes.into_iter().map(HeroResponseDto::from).collect()))
}

/// GET /heroes/{id} - Get a hero by ID
///
/// # Responses
///
/// * 200 OK - Hero found
/// * 404 Not Found - `{"error": "Hero not found"}`
#[axum::debug_handler]
async fn get_hero_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<HeroResponseDto>, ApiError> {
    let hero_id = HeroId::new(parse_id(&id)?);

    let hero = state.get_hero_by_id_use_case.execute(hero_id).await?;

    Ok(Json(HeroResponseDto::from(hero)))
}

/// GET /heroes/{id}/powers - Powers held by a hero
#[axum::debug_handler]
async fn get_hero_powers(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<PowerSummaryDto>>, ApiError> {
    let hero_id = HeroId::new(parse_id(&id)?);

    let powers = state.get_hero_powers_use_case.execute(hero_id).await?;

    Ok(Json(powers.into_iter().map(PowerSummaryDto::from).collect()))
}
