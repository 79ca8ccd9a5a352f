//! HTTP-level integration tests for the `/gg/guitarist` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, create, delete, get, post_json, put_json, test_store};
use serde_json::json;

fn guitarist(name: &str, genre: &str, birth_year: i32) -> serde_json::Value {
    json!({
        "name": name,
        "birthPlace": "Somewhere",
        "birthYear": birth_year,
        "genre": genre,
    })
}

#[tokio::test]
async fn create_defaults_to_empty_gear_list() {
    let store = test_store();
    let eric = create(&store, "/gg/guitarist", guitarist("Eric", "Blues", 1945)).await;

    assert!(eric["id"].is_number());
    assert_eq!(eric["birthPlace"], "Somewhere");
    assert_eq!(eric["birthYear"], 1945);
    assert_eq!(eric["gearList"], json!([]));
}

#[tokio::test]
async fn create_with_unknown_gear_returns_404() {
    let store = test_store();
    let mut body = guitarist("Eric", "Blues", 1945);
    body["gearList"] = json!([{ "id": 8 }]);

    let response = post_json(build_test_app(store), "/gg/guitarist", body).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_filters_by_genre_and_birth_year() {
    let store = test_store();
    create(&store, "/gg/guitarist", guitarist("Eric", "Blues Rock", 1945)).await;
    create(&store, "/gg/guitarist", guitarist("Jimi", "Blues Rock", 1942)).await;
    create(&store, "/gg/guitarist", guitarist("Jeff", "Jazz Fusion", 1944)).await;

    let response = get(build_test_app(store.clone()), "/gg/guitarist?genre=blues-rock").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);

    let response = get(build_test_app(store.clone()), "/gg/guitarist?birthYear=1944").await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["name"], "Jeff");

    let response = get(
        build_test_app(store.clone()),
        "/gg/guitarist?genre=Blues-Rock&birthYear=1942",
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["name"], "Jimi");

    let response = get(build_test_app(store), "/gg/guitarist").await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn non_numeric_birth_year_returns_400() {
    let store = test_store();
    let response = get(build_test_app(store), "/gg/guitarist?birthYear=forties").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_by_id_and_name() {
    let store = test_store();
    let eric = create(&store, "/gg/guitarist", guitarist("Eric Clapton", "Blues", 1945)).await;
    let id = eric["id"].as_i64().unwrap();

    let response = get(build_test_app(store.clone()), &format!("/gg/guitarist/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, eric);

    let response = get(build_test_app(store.clone()), "/gg/guitarist/name/Eric%20Clapton").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["id"], id);

    let response = get(build_test_app(store.clone()), "/gg/guitarist/name/Nobody").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(build_test_app(store), "/gg/guitarist/404").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_replaces_record_and_gear_list() {
    let store = test_store();
    let gear = create(
        &store,
        "/gg/gear",
        json!({ "name": "Blackie", "type": "Guitar", "weightInGrams": 3400 }),
    )
    .await;
    let eric = create(&store, "/gg/guitarist", guitarist("Eric", "Blues", 1945)).await;
    let id = eric["id"].as_i64().unwrap();

    let mut body = guitarist("Slowhand", "Blues", 1945);
    body["gearList"] = json!([{ "id": gear["id"] }, { "id": gear["id"] }]);
    let response = put_json(build_test_app(store.clone()), &format!("/gg/guitarist/{id}"), body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], id);
    assert_eq!(json["name"], "Slowhand");
    assert_eq!(json["gearList"], json!([gear, gear]));

    let response = put_json(
        build_test_app(store),
        "/gg/guitarist/999",
        guitarist("Nobody", "Blues", 1950),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_guitarist_then_404() {
    let store = test_store();
    let eric = create(&store, "/gg/guitarist", guitarist("Eric", "Blues", 1945)).await;
    let id = eric["id"].as_i64().unwrap();

    let response = delete(build_test_app(store.clone()), &format!("/gg/guitarist/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = delete(build_test_app(store), &format!("/gg/guitarist/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
