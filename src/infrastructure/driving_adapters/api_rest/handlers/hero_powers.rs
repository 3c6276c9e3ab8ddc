//! HeroPower Handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use validator::Validate;

use crate::infrastructure::driving_adapters::api_rest::dto::{
    CreateHeroPowerDto, HeroPowerResponseDto,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for hero power endpoints
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(create_hero_power))
}

/// POST /hero_powers - Link a hero to a power
///
/// # Responses
///
/// * 201 Created - Association created, with both sides nested
/// * 400 Bad Request - Unparseable body, invalid strength, or a hero/power
///   that does not exist
#[axum::debug_handler]
async fn create_hero_power(
    State(state): State<AppState>,
    payload: Result<Json<CreateHeroPowerDto>, JsonRejection>,
) -> Result<(StatusCode, Json<HeroPowerResponseDto>), ApiError> {
    let Json(dto) = payload?;
    dto.validate()?;

    let hero_power = state.create_hero_power_use_case.execute(dto.into()).await?;

    Ok((StatusCode::CREATED, Json(HeroPowerResponseDto::from(hero_power))))
}
