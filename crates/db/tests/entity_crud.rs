//! Integration tests for the operational record repositories.
//!
//! Covers create/update/delete for locations, personnel, routes, resources
//! and alerts, the user/session bookkeeping, and the stats aggregate.

use chrono::{Duration, Utc};
use ghost_legion_core::roles::Role;
use ghost_legion_db::models::alert::{CreateAlert, UpdateAlert};
use ghost_legion_db::models::location::{CreateLocation, UpdateLocation};
use ghost_legion_db::models::map_element::CreateMapElement;
use ghost_legion_db::models::person::{CreatePerson, UpdatePerson};
use ghost_legion_db::models::resource::{CreateResource, UpdateResource};
use ghost_legion_db::models::route::{CreateEvacuationRoute, UpdateEvacuationRoute};
use ghost_legion_db::models::session::CreateSession;
use ghost_legion_db::models::user::{CreateUser, UpdateUser};
use ghost_legion_db::repositories::{
    AlertRepo, EvacuationRouteRepo, LocationRepo, MapElementRepo, PersonRepo, ResourceRepo,
    SessionRepo, StatsRepo, UserRepo,
};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_user(username: &str, role: Role) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        email: format!("{username}@example.nl"),
        password_hash: "not-a-real-hash".to_string(),
        role,
    }
}

fn new_location(name: &str, status: &str, capacity: i32, occupancy: i32) -> CreateLocation {
    CreateLocation {
        name: name.to_string(),
        location_type: "SHELTER".to_string(),
        latitude: 52.37,
        longitude: 4.89,
        address: None,
        capacity,
        occupancy,
        status: status.to_string(),
        description: None,
        facilities: vec!["water".to_string(), "beds".to_string()],
        contact: None,
    }
}

fn new_person(name: &str, status: &str) -> CreatePerson {
    CreatePerson {
        name: name.to_string(),
        role: "Medic".to_string(),
        status: status.to_string(),
        email: None,
        phone: None,
        location: None,
        skills: vec!["first aid".to_string()],
        notes: None,
    }
}

fn new_alert(title: &str, severity: &str, status: &str, created_by: i64) -> CreateAlert {
    CreateAlert {
        title: title.to_string(),
        message: "Stay indoors".to_string(),
        severity: severity.to_string(),
        status: status.to_string(),
        region: Some("Utrecht".to_string()),
        expires_at: None,
        created_by,
    }
}

// ---------------------------------------------------------------------------
// Locations
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_location_crud(pool: PgPool) {
    let created = LocationRepo::create(&pool, &new_location("Bunker A", "OPERATIONAL", 120, 40))
        .await
        .unwrap();
    assert_eq!(created.facilities, vec!["water", "beds"]);

    let updated = LocationRepo::update(
        &pool,
        created.id,
        &UpdateLocation {
            occupancy: Some(80),
            status: Some("LIMITED".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.occupancy, 80);
    assert_eq!(updated.status, "LIMITED");
    assert_eq!(updated.capacity, 120);
    assert_eq!(updated.name, "Bunker A");

    assert!(LocationRepo::delete(&pool, created.id).await.unwrap());
    assert!(LocationRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_location_negative_capacity_rejected(pool: PgPool) {
    let result = LocationRepo::create(&pool, &new_location("Bad", "OPERATIONAL", -1, 0)).await;
    assert!(result.is_err());
}

// ---------------------------------------------------------------------------
// Personnel
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_person_crud(pool: PgPool) {
    let created = PersonRepo::create(&pool, &new_person("Anouk", "ACTIVE"))
        .await
        .unwrap();

    let updated = PersonRepo::update(
        &pool,
        created.id,
        &UpdatePerson {
            status: Some("DEPLOYED".to_string()),
            skills: Some(vec!["radio".to_string()]),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.status, "DEPLOYED");
    assert_eq!(updated.skills, vec!["radio"]);
    assert_eq!(updated.role, "Medic");

    assert!(PersonRepo::delete(&pool, created.id).await.unwrap());
    assert!(!PersonRepo::delete(&pool, created.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Evacuation routes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_route_crud(pool: PgPool) {
    let created = EvacuationRouteRepo::create(
        &pool,
        &CreateEvacuationRoute {
            name: "A2 south".to_string(),
            start_location: "Amsterdam".to_string(),
            end_location: "Utrecht".to_string(),
            distance_km: Some(45.5),
            estimated_minutes: Some(50),
            capacity: None,
            status: "OPEN".to_string(),
            waypoints: Some(json!([[52.37, 4.89], [52.09, 5.12]])),
            description: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(created.waypoints, Some(json!([[52.37, 4.89], [52.09, 5.12]])));

    let updated = EvacuationRouteRepo::update(
        &pool,
        created.id,
        &UpdateEvacuationRoute {
            status: Some("CLOSED".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.status, "CLOSED");
    assert_eq!(updated.distance_km, Some(45.5));

    assert!(EvacuationRouteRepo::delete(&pool, created.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_resource_crud(pool: PgPool) {
    let created = ResourceRepo::create(
        &pool,
        &CreateResource {
            name: "Bottled water".to_string(),
            resource_type: "WATER".to_string(),
            quantity: 500,
            unit: Some("litres".to_string()),
            location: Some("Depot 3".to_string()),
            status: "AVAILABLE".to_string(),
            minimum_quantity: Some(100),
        },
    )
    .await
    .unwrap();

    let updated = ResourceRepo::update(
        &pool,
        created.id,
        &UpdateResource {
            quantity: Some(50),
            status: Some("LOW".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.quantity, 50);
    assert_eq!(updated.unit.as_deref(), Some("litres"));

    assert!(ResourceRepo::update(&pool, 424_242, &UpdateResource::default())
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Alerts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_alert_status_filter(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("dispatcher", Role::User))
        .await
        .unwrap();

    let active = AlertRepo::create(&pool, &new_alert("Storm", "WARNING", "ACTIVE", user.id))
        .await
        .unwrap();
    AlertRepo::create(&pool, &new_alert("Old flood", "DANGER", "RESOLVED", user.id))
        .await
        .unwrap();

    let all = AlertRepo::list(&pool, None).await.unwrap();
    assert_eq!(all.len(), 2);

    let only_active = AlertRepo::list(&pool, Some("ACTIVE")).await.unwrap();
    assert_eq!(only_active.len(), 1);
    assert_eq!(only_active[0].id, active.id);
    assert_eq!(only_active[0].created_by, Some(user.id));

    let resolved = AlertRepo::update(
        &pool,
        active.id,
        &UpdateAlert {
            status: Some("RESOLVED".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(resolved.status, "RESOLVED");
    assert!(AlertRepo::list(&pool, Some("ACTIVE")).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Users and sessions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_username_violates_unique_constraint(pool: PgPool) {
    UserRepo::create(&pool, &new_user("alice", Role::User))
        .await
        .unwrap();

    let mut dup = new_user("alice", Role::User);
    dup.email = "other@example.nl".to_string();
    let err = UserRepo::create(&pool, &dup).await.unwrap_err();
    let db_err = err.as_database_error().expect("should be a database error");
    assert_eq!(db_err.constraint(), Some("uq_users_username"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_login_bookkeeping(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("bob", Role::Admin))
        .await
        .unwrap();
    assert_eq!(user.role_id, Role::Admin.id());
    assert_eq!(user.role().unwrap(), Role::Admin);

    let until = Utc::now() + Duration::minutes(15);
    assert!(!UserRepo::record_failed_login(&pool, user.id, 3, until).await.unwrap());
    assert!(!UserRepo::record_failed_login(&pool, user.id, 3, until).await.unwrap());
    let counting = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(counting.failed_login_count, 2);
    assert!(counting.locked_until.is_none());

    // The third failure locks and restarts the count.
    assert!(UserRepo::record_failed_login(&pool, user.id, 3, until).await.unwrap());
    let locked = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(locked.failed_login_count, 0);
    assert!(locked.is_locked(Utc::now()));
    assert!(!locked.is_locked(until + Duration::seconds(1)));

    UserRepo::record_successful_login(&pool, user.id).await.unwrap();
    let reset = UserRepo::find_by_username(&pool, "bob").await.unwrap().unwrap();
    assert_eq!(reset.failed_login_count, 0);
    assert!(reset.locked_until.is_none());
    assert!(reset.last_login_at.is_some());

    let renamed = UserRepo::update(
        &pool,
        user.id,
        &UpdateUser {
            email: Some("robert@example.nl".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(renamed.email, "robert@example.nl");
    assert_eq!(renamed.username, "bob");

    let demoted = UserRepo::update(
        &pool,
        user.id,
        &UpdateUser {
            role: Some(Role::User),
            is_active: Some(false),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(demoted.role().unwrap(), Role::User);
    assert!(!demoted.is_active);

    assert!(UserRepo::set_password(&pool, user.id, "another-hash").await.unwrap());
    assert!(!UserRepo::set_password(&pool, 999_999, "another-hash").await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_session_revocation(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("carol", Role::User))
        .await
        .unwrap();
    let session = SessionRepo::create(
        &pool,
        &CreateSession {
            user_id: user.id,
            refresh_token_hash: "abc123".to_string(),
            expires_at: Utc::now() + Duration::days(7),
            user_agent: None,
            ip_address: None,
        },
    )
    .await
    .unwrap();

    let found = SessionRepo::find_active_by_hash(&pool, "abc123")
        .await
        .unwrap();
    assert_eq!(found.map(|s| s.id), Some(session.id));

    assert_eq!(SessionRepo::revoke_all_for_user(&pool, user.id).await.unwrap(), 1);
    assert!(SessionRepo::find_active_by_hash(&pool, "abc123")
        .await
        .unwrap()
        .is_none());
    assert_eq!(SessionRepo::purge_stale(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_session_rotation_is_single_use(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("dave", Role::User))
        .await
        .unwrap();
    let session_for = |hash: &str| CreateSession {
        user_id: user.id,
        refresh_token_hash: hash.to_string(),
        expires_at: Utc::now() + Duration::days(7),
        user_agent: Some("field-tablet/2.1".to_string()),
        ip_address: Some("10.0.0.7".to_string()),
    };
    let first = SessionRepo::create(&pool, &session_for("first")).await.unwrap();

    let second = SessionRepo::rotate(&pool, first.id, &session_for("second"))
        .await
        .unwrap()
        .expect("first rotation succeeds");
    assert_eq!(second.user_agent.as_deref(), Some("field-tablet/2.1"));
    assert!(SessionRepo::find_active_by_hash(&pool, "first")
        .await
        .unwrap()
        .is_none());

    // Replaying the old session writes nothing.
    let replay = SessionRepo::rotate(&pool, first.id, &session_for("third"))
        .await
        .unwrap();
    assert!(replay.is_none());
    assert!(SessionRepo::find_active_by_hash(&pool, "third")
        .await
        .unwrap()
        .is_none());
    assert!(SessionRepo::find_active_by_hash(&pool, "second")
        .await
        .unwrap()
        .is_some());
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_stats_on_empty_database(pool: PgPool) {
    let stats = StatsRepo::collect(&pool).await.unwrap();
    assert_eq!(stats.locations.total, 0);
    assert_eq!(stats.locations.total_capacity, 0);
    assert_eq!(stats.map_elements.total, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_stats_counts(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("dave", Role::Admin))
        .await
        .unwrap();

    LocationRepo::create(&pool, &new_location("A", "OPERATIONAL", 100, 10))
        .await
        .unwrap();
    LocationRepo::create(&pool, &new_location("B", "OFFLINE", 50, 5))
        .await
        .unwrap();
    PersonRepo::create(&pool, &new_person("Eva", "DEPLOYED"))
        .await
        .unwrap();
    AlertRepo::create(&pool, &new_alert("Dike breach", "CRITICAL", "ACTIVE", user.id))
        .await
        .unwrap();
    MapElementRepo::create(
        &pool,
        &CreateMapElement {
            element_type: "MARKER".to_string(),
            coordinates: json!([52.0, 5.0]),
            color: "#3B82F6".to_string(),
            size: None,
            label: None,
            description: None,
            category: None,
            risk: "MEDIUM".to_string(),
            created_by: user.id,
        },
    )
    .await
    .unwrap();

    let stats = StatsRepo::collect(&pool).await.unwrap();
    assert_eq!(stats.locations.total, 2);
    assert_eq!(stats.locations.operational, 1);
    assert_eq!(stats.locations.total_capacity, 150);
    assert_eq!(stats.locations.total_occupancy, 15);
    assert_eq!(stats.personnel.total, 1);
    assert_eq!(stats.personnel.deployed, 1);
    assert_eq!(stats.personnel.active, 0);
    assert_eq!(stats.alerts.active, 1);
    assert_eq!(stats.alerts.critical_active, 1);
    assert_eq!(stats.map_elements.total, 1);
    assert_eq!(stats.map_elements.medium_risk, 1);
}
