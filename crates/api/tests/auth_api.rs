//! HTTP-level tests for login, token refresh, logout and `/auth/me`.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{body_json, get, get_auth, post_json, post_json_auth, TEST_PASSWORD};
use ghost_legion_core::roles::Role;
use ghost_legion_db::models::user::UpdateUser;
use ghost_legion_db::repositories::UserRepo;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_success_returns_token_pair(pool: PgPool) {
    let user = common::create_test_user(&pool, "loginuser", Role::Admin).await;

    let json = common::login(common::build_test_app(pool), "loginuser", TEST_PASSWORD).await;

    assert!(json["accessToken"].is_string());
    assert!(json["refreshToken"].is_string());
    assert_eq!(json["expiresIn"], 15 * 60);
    assert_eq!(json["user"]["id"], user.id);
    assert_eq!(json["user"]["username"], "loginuser");
    assert_eq!(json["user"]["email"], "loginuser@example.org");
    assert_eq!(json["user"]["role"], "admin");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_trims_username(pool: PgPool) {
    common::create_test_user(&pool, "spaced", Role::User).await;
    let json = common::login(common::build_test_app(pool), "  spaced ", TEST_PASSWORD).await;
    assert_eq!(json["user"]["role"], "user");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn wrong_password_and_unknown_user_look_the_same(pool: PgPool) {
    common::create_test_user(&pool, "wrongpw", Role::User).await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/auth/login",
        json!({ "username": "wrongpw", "password": "incorrect password" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let wrong_pw = body_json(response).await;

    let response = post_json(
        common::build_test_app(pool),
        "/api/auth/login",
        json!({ "username": "nobody", "password": "whatever it is" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await, wrong_pw);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deactivated_account_cannot_log_in(pool: PgPool) {
    let user = common::create_test_user(&pool, "inactive", Role::User).await;
    let deactivate = UpdateUser {
        is_active: Some(false),
        ..Default::default()
    };
    UserRepo::update(&pool, user.id, &deactivate).await.unwrap().unwrap();

    let response = post_json(
        common::build_test_app(pool),
        "/api/auth/login",
        json!({ "username": "inactive", "password": TEST_PASSWORD }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn five_failures_lock_the_account(pool: PgPool) {
    common::create_test_user(&pool, "lockme", Role::User).await;

    for _ in 0..5 {
        let response = post_json(
            common::build_test_app(pool.clone()),
            "/api/auth/login",
            json!({ "username": "lockme", "password": "wrong password" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    // Even the right password is refused while locked.
    let response = post_json(
        common::build_test_app(pool),
        "/api/auth/login",
        json!({ "username": "lockme", "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let error = body_json(response).await["error"].as_str().unwrap().to_string();
    assert!(error.contains("locked"), "got: {error}");
}

async fn wrong_login(pool: &PgPool, username: &str) -> StatusCode {
    post_json(
        common::build_test_app(pool.clone()),
        "/api/auth/login",
        json!({ "username": username, "password": "wrong password" }),
    )
    .await
    .status()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn expired_lock_starts_a_fresh_count(pool: PgPool) {
    common::create_test_user(&pool, "typo", Role::User).await;
    for _ in 0..5 {
        assert_eq!(wrong_login(&pool, "typo").await, StatusCode::UNAUTHORIZED);
    }

    let user = UserRepo::find_by_username(&pool, "typo").await.unwrap().unwrap();
    assert_eq!(user.failed_login_count, 0);
    assert!(user.locked_until.is_some());

    sqlx::query("UPDATE users SET locked_until = NOW() - INTERVAL '1 second' WHERE username = $1")
        .bind("typo")
        .execute(&pool)
        .await
        .unwrap();

    // One slip after the lock runs out is not a sixth strike.
    assert_eq!(wrong_login(&pool, "typo").await, StatusCode::UNAUTHORIZED);
    common::login(common::build_test_app(pool), "typo", TEST_PASSWORD).await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn refresh_rotates_the_token(pool: PgPool) {
    common::create_test_user(&pool, "refresher", Role::User).await;
    let login = common::login(common::build_test_app(pool.clone()), "refresher", TEST_PASSWORD).await;
    let refresh_token = login["refreshToken"].as_str().unwrap().to_string();

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/auth/refresh",
        json!({ "refreshToken": refresh_token }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_ne!(json["refreshToken"].as_str().unwrap(), refresh_token);

    // The presented token was revoked by the rotation.
    let response = post_json(
        common::build_test_app(pool),
        "/api/auth/refresh",
        json!({ "refreshToken": refresh_token }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn refresh_with_garbage_is_401(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/auth/refresh",
        json!({ "refreshToken": "not-a-real-token" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn logout_revokes_refresh_tokens(pool: PgPool) {
    common::create_test_user(&pool, "leaver", Role::User).await;
    let login = common::login(common::build_test_app(pool.clone()), "leaver", TEST_PASSWORD).await;
    let access = login["accessToken"].as_str().unwrap();
    let refresh = login["refreshToken"].as_str().unwrap();

    let response =
        post_json_auth(common::build_test_app(pool.clone()), "/api/auth/logout", json!({}), access)
            .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = post_json(
        common::build_test_app(pool),
        "/api/auth/refresh",
        json!({ "refreshToken": refresh }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn me_returns_the_session_user(pool: PgPool) {
    let (user, token) = common::user_with_token(&pool, "whoami", Role::User).await;

    let response = get_auth(common::build_test_app(pool.clone()), "/api/auth/me", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], user.id);
    assert_eq!(json["role"], "user");
    assert_eq!(json["isActive"], true);
    assert!(json.get("passwordHash").is_none());

    let response = get(common::build_test_app(pool), "/api/auth/me").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn authorization_scheme_is_case_insensitive(pool: PgPool) {
    let token = common::user_token(&pool).await;

    for (header, expected) in [
        (format!("bearer {token}"), StatusCode::OK),
        (format!("BEARER  {token}"), StatusCode::OK),
        (format!("Basic {token}"), StatusCode::UNAUTHORIZED),
        ("Bearer ".to_string(), StatusCode::UNAUTHORIZED),
    ] {
        let request = Request::builder()
            .uri("/api/auth/me")
            .header("Authorization", &header)
            .body(Body::empty())
            .unwrap();
        let response = common::build_test_app(pool.clone()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), expected, "{header}");
    }
}
