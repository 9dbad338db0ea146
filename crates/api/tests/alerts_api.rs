//! HTTP-level tests for `/api/alerts`.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get, post_json_auth, put_json_auth};
use ghost_legion_core::roles::Role;
use serde_json::json;
use sqlx::PgPool;

async fn create_alert(pool: &PgPool, token: &str, body: serde_json::Value) -> serde_json::Value {
    let response =
        post_json_auth(common::build_test_app(pool.clone()), "/api/alerts", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_defaults_severity_and_status(pool: PgPool) {
    let (user, token) = common::user_with_token(&pool, "dispatcher", Role::User).await;

    let json = create_alert(
        &pool,
        &token,
        json!({ "title": "Flood warning", "message": "River levels rising", "severity": "biblical" }),
    )
    .await;

    assert_eq!(json["severity"], "INFO");
    assert_eq!(json["status"], "ACTIVE");
    assert_eq!(json["createdBy"], user.id);
    assert!(json["expiresAt"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_keeps_expiry_and_region(pool: PgPool) {
    let token = common::user_token(&pool).await;

    let json = create_alert(
        &pool,
        &token,
        json!({
            "title": "Curfew",
            "message": "Stay indoors",
            "severity": "critical",
            "region": "Sector 7",
            "expiresAt": "2030-01-01T06:00:00Z"
        }),
    )
    .await;

    assert_eq!(json["severity"], "CRITICAL");
    assert_eq!(json["region"], "Sector 7");
    let expires: chrono::DateTime<chrono::Utc> =
        serde_json::from_value(json["expiresAt"].clone()).unwrap();
    assert_eq!(expires.to_rfc3339(), "2030-01-01T06:00:00+00:00");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_requires_title_and_message(pool: PgPool) {
    let token = common::user_token(&pool).await;
    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/alerts",
        json!({ "severity": "warning" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Missing required fields: title, message"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_filters_by_status(pool: PgPool) {
    let token = common::user_token(&pool).await;
    let active = create_alert(&pool, &token, json!({ "title": "A", "message": "a" })).await;
    let resolved = create_alert(
        &pool,
        &token,
        json!({ "title": "B", "message": "b", "status": "resolved" }),
    )
    .await;

    let all = body_json(get(common::build_test_app(pool.clone()), "/api/alerts").await).await;
    assert_eq!(all.as_array().unwrap().len(), 2);

    let only_active =
        body_json(get(common::build_test_app(pool.clone()), "/api/alerts?status=active").await)
            .await;
    assert_eq!(only_active.as_array().unwrap().len(), 1);
    assert_eq!(only_active[0]["id"], active["id"]);

    let only_resolved =
        body_json(get(common::build_test_app(pool.clone()), "/api/alerts?status=RESOLVED").await)
            .await;
    assert_eq!(only_resolved[0]["id"], resolved["id"]);

    let response = get(common::build_test_app(pool), "/api/alerts?status=pending").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn resolve_then_delete(pool: PgPool) {
    let token = common::user_token(&pool).await;
    let id = create_alert(&pool, &token, json!({ "title": "Smoke", "message": "Fire at depot" }))
        .await["id"]
        .as_i64()
        .unwrap();
    let uri = format!("/api/alerts/{id}");

    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        &uri,
        json!({ "status": "resolved" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "RESOLVED");
    assert_eq!(json["title"], "Smoke");

    let response = delete_auth(common::build_test_app(pool.clone()), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = put_json_auth(
        common::build_test_app(pool),
        &uri,
        json!({ "status": "active" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
