//! Handlers for the `/people` resource (table `personnel`).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use ghost_legion_core::error::CoreError;
use ghost_legion_core::personnel::PersonStatus;
use ghost_legion_core::text_enum::TextEnum;
use ghost_legion_core::types::DbId;
use ghost_legion_core::validation::{is_present, normalize_text, reject_blank, require_fields};
use ghost_legion_db::models::person::{CreatePerson, Person, UpdatePerson};
use ghost_legion_db::repositories::PersonRepo;
use serde::Deserialize;

use crate::error::{AppResult, StoreContext};
use crate::middleware::rbac::RequireAuth;
use crate::response::SuccessResponse;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct PersonPayload {
    pub name: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub skills: Option<Vec<String>>,
    pub notes: Option<String>,
}

fn clean_skills(skills: Vec<String>) -> Vec<String> {
    skills
        .into_iter()
        .filter_map(|s| normalize_text(Some(s)))
        .collect()
}

/// GET /api/people
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Person>>> {
    let people = PersonRepo::list(&state.pool).await.context("load personnel")?;
    Ok(Json(people))
}

/// POST /api/people
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(input): Json<PersonPayload>,
) -> AppResult<(StatusCode, Json<Person>)> {
    require_fields(&[
        ("name", is_present(input.name.as_deref())),
        ("role", is_present(input.role.as_deref())),
    ])?;
    let status = PersonStatus::parse_or_default(input.status.as_deref());

    let person = PersonRepo::create(
        &state.pool,
        &CreatePerson {
            name: input.name.unwrap_or_default().trim().to_string(),
            role: input.role.unwrap_or_default().trim().to_string(),
            status: status.as_str().to_string(),
            email: normalize_text(input.email),
            phone: normalize_text(input.phone),
            location: normalize_text(input.location),
            skills: clean_skills(input.skills.unwrap_or_default()),
            notes: normalize_text(input.notes),
        },
    )
    .await
    .context("create person")?;

    tracing::info!(person_id = person.id, user_id = user.user_id, "Person created");

    Ok((StatusCode::CREATED, Json(person)))
}

/// PUT /api/people/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
    Json(input): Json<PersonPayload>,
) -> AppResult<Json<Person>> {
    reject_blank("name", input.name.as_deref())?;
    reject_blank("role", input.role.as_deref())?;
    let status = input
        .status
        .as_deref()
        .map(|s| PersonStatus::parse_or_default(Some(s)).as_str().to_string());

    let person = PersonRepo::update(
        &state.pool,
        id,
        &UpdatePerson {
            name: input.name.map(|n| n.trim().to_string()),
            role: input.role.map(|r| r.trim().to_string()),
            status,
            email: normalize_text(input.email),
            phone: normalize_text(input.phone),
            location: normalize_text(input.location),
            skills: input.skills.map(clean_skills),
            notes: normalize_text(input.notes),
        },
    )
    .await
    .context("update person")?
    .ok_or(CoreError::NotFound {
        entity: "Person",
        id,
    })?;

    tracing::info!(person_id = id, user_id = user.user_id, "Person updated");

    Ok(Json(person))
}

/// DELETE /api/people/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<SuccessResponse>> {
    if !PersonRepo::delete(&state.pool, id)
        .await
        .context("delete person")?
    {
        return Err(CoreError::NotFound {
            entity: "Person",
            id,
        }
        .into());
    }

    tracing::info!(person_id = id, user_id = user.user_id, "Person deleted");
    Ok(Json(SuccessResponse::ok()))
}
