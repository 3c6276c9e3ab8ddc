//! End-to-end tests for hero power endpoints and association consistency

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{CreateHeroPowerRequest, TestApp};
use hero_powers_registry::domain::models::{HeroId, PowerId};
use hero_powers_registry::shared::errors::UseCaseError;

fn link(strength: &str, hero_id: i64, power_id: i64) -> CreateHeroPowerRequest {
    CreateHeroPowerRequest {
        strength: strength.to_string(),
        hero_id,
        power_id,
    }
}

#[tokio::test]
async fn test_create_hero_power_then_hero_shows_nested_power() {
    let app = TestApp::new().await;
    let hero = app.create_hero("Clark", "Superman").await;
    let power = app.create_power("Flight", "Can fly through the air").await;

    let (status, body) = app.post("/hero_powers", &link("Average", hero, power)).await;

    assert_eq!(status, StatusCode::CREATED);
    let link_id = body["id"].as_i64().unwrap();
    assert_eq!(
        body,
        json!({
            "id": link_id,
            "strength": "Average",
            "hero_id": hero,
            "power_id": power,
            "hero": {"id": hero, "name": "Clark", "super_name": "Superman"},
            "power": {"id": power, "name": "Flight", "description": "Can fly through the air"},
        })
    );

    let (status, hero_body) = app.get(&format!("/heroes/{hero}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        hero_body["hero_powers"],
        json!([{
            "id": link_id,
            "strength": "Average",
            "power_id": power,
            "power": {"id": power, "name": "Flight", "description": "Can fly through the air"},
        }])
    );
    let nested = &hero_body["hero_powers"][0];
    assert!(nested.get("hero").is_none());
    assert!(nested["power"].get("hero_powers").is_none());
}

#[tokio::test]
async fn test_create_hero_power_invalid_strength() {
    let app = TestApp::new().await;
    let hero = app.create_hero("Clark", "Superman").await;
    let power = app.create_power("Flight", "Can fly through the air").await;

    let (status, body) = app.post("/hero_powers", &link("Mighty", hero, power)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"error": "Strength must be 'Strong', 'Average', or 'Weak'"})
    );
    assert_eq!(app.count("hero_powers").await, 0);
}

#[tokio::test]
async fn test_create_hero_power_unknown_hero() {
    let app = TestApp::new().await;
    let power = app.create_power("Flight", "Can fly through the air").await;

    let (status, body) = app.post("/hero_powers", &link("Strong", 77, power)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Hero with id 77 does not exist"}));
    assert_eq!(app.count("hero_powers").await, 0);
}

#[tokio::test]
async fn test_create_hero_power_unknown_power() {
    let app = TestApp::new().await;
    let hero = app.create_hero("Clark", "Superman").await;

    let (status, body) = app.post("/hero_powers", &link("Weak", hero, 88)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Power with id 88 does not exist"}));
    assert_eq!(app.count("hero_powers").await, 0);
}

#[tokio::test]
async fn test_store_rejects_orphan_association() {
    let app = TestApp::new().await;

    let result = sqlx::query("INSERT INTO hero_powers (strength, hero_id, power_id) VALUES ('Strong', 1, 1)")
        .execute(&app.pool)
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_deleting_hero_cascades_to_its_associations() {
    let app = TestApp::new().await;
    let clark = app.create_hero("Clark", "Superman").await;
    let kara = app.create_hero("Kara", "Supergirl").await;
    let flight = app.create_power("Flight", "Can fly through the air").await;
    app.create_hero_power(clark, flight, "Strong").await;
    app.create_hero_power(kara, flight, "Average").await;

    app.state
        .delete_hero_use_case
        .execute(HeroId::new(clark))
        .await
        .unwrap();

    assert_eq!(app.count("heroes").await, 1);
    assert_eq!(app.count("hero_powers").await, 1);
    let (_, body) = app.get(&format!("/powers/{flight}")).await;
    let remaining = body["hero_powers"].as_array().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["hero_id"], kara);
}

#[tokio::test]
async fn test_deleting_power_cascades_to_its_associations() {
    let app = TestApp::new().await;
    let clark = app.create_hero("Clark", "Superman").await;
    let flight = app.create_power("Flight", "Can fly through the air").await;
    let vision = app.create_power("Heat vision", "Shoots beams from the eyes").await;
    app.create_hero_power(clark, flight, "Strong").await;
    app.create_hero_power(clark, vision, "Weak").await;

    app.state
        .delete_power_use_case
        .execute(PowerId::new(flight))
        .await
        .unwrap();

    assert_eq!(app.count("hero_powers").await, 1);
    let (_, body) = app.get(&format!("/heroes/{clark}")).await;
    assert_eq!(body["hero_powers"][0]["power"]["name"], "Heat vision");
}

#[tokio::test]
async fn test_deleting_missing_hero_is_not_found() {
    let app = TestApp::new().await;

    let result = app.state.delete_hero_use_case.execute(HeroId::new(1)).await;

    assert!(matches!(result, Err(UseCaseError::NotFound { .. })));
}
