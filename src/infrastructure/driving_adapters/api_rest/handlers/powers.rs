//! Power Handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use validator::Validate;

use crate::domain::models::power::PowerId;
use crate::infrastructure::driving_adapters::api_rest::dto::{
    CreatePowerDto, HeroSummaryDto, PowerResponseDto,
};
use crate::infrastructure::driving_adapters::api_rest::handlers::parse_id;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for power endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all_powers).post(create_power))
        .route("/{id}", get(get_power_by_id))
        .route("/{id}/heroes", get(get_power_heroes))
}

/// POST /powers - Create a new power
///
/// # Responses
///
/// * 201 Created - Power created
/// * 400 Bad Request - Unparseable body, blank name or description shorter
///   than 10 characters
#[axum::debug_handler]
async fn create_power(
    State(state): State<AppState>,
    payload: Result<Json<CreatePowerDto>, JsonRejection>,
) -> Result<(StatusCode, Json<PowerResponseDto>), ApiError> {
    let Json(dto) = payload?;
    dto.validate()?;

    let power = state.create_power_use_case.execute(dto.into()).await?;

    Ok((StatusCode::CREATED, Json(PowerResponseDto::from(power))))
}

/// GET /powers - List every power
#[axum::debug_handler]
async fn get_all_powers(State(state): State<AppState>) -> Result<Json<Vec<PowerResponseDto>>, ApiError> {
    let powers = state.get_all_powers_use_case.execute().await?;

    Ok(Json(powers.into_iter().map(PowerResponseDto::from).collect()))
}

/// GET /powers/{id} - Get a power by ID
///
/// # Responses
///
/// * 200 OK - Power found
/// * 404 Not Found - `{"error": "Power not found"}`
#[axum::debug_handler]
async fn get_power_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PowerResponseDto>, ApiError> {
    let power_id = PowerId::new(parse_id(&id)?);

    let power = state.get_power_by_id_use_case.execute(power_id).await?;

    Ok(Json(PowerResponseDto::from(power)))
}

/// GET /powers/{id}/heroes - Heroes holding a power
#[axum::debug_handler]
async fn get_power_heroes(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<HeroSummaryDto>>, ApiError> {
    let power_id = PowerId::new(parse_id(&id)?);

    let heroes = state.get_power_heroes_use_case.execute(power_id).await?;

    Ok(Json(heroes.into_iter().map(HeroSummaryDto::from).collect()))
}
