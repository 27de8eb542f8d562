//! User CRUD handlers
//!
//! Thin façade over the document store; no retrieval logic lives here.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::server::error::ApiError;
use crate::server::AppState;
use crate::store::{UserCreate, UserRecord, UserUpdate};

/// GET / - welcome message
pub async fn welcome() -> Json<Value> {
    Json(json!({ "message": "Welcome to the FAQ assistant API!" }))
}

/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserRecord>, ApiError> {
    let store = state.store.read().await;
    let data: Option<UserCreate> = store
        .get(&state.users_collection, &user_id)
        .map_err(ApiError::internal)?;

    match data {
        Some(data) => Ok(Json(UserRecord::from_parts(user_id, data))),
        None => Err(ApiError::not_found(format!(
            "User with ID '{}' not found",
            user_id
        ))),
    }
}

/// GET /users - list every registered user
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserRecord>>, ApiError> {
    let store = state.store.read().await;
    let documents: Vec<(String, UserCreate)> = store
        .stream_all(&state.users_collection)
        .map_err(ApiError::internal)?;

    let users = documents
        .into_iter()
        .map(|(id, data)| UserRecord::from_parts(id, data))
        .collect();

    Ok(Json(users))
}

/// POST /users - create a user under a generated id
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<UserCreate>,
) -> Result<(StatusCode, Json<UserRecord>), ApiError> {
    let store = state.store.write().await;
    let id = store
        .insert(&state.users_collection, &payload)
        .map_err(ApiError::internal)?;

    Ok((
        StatusCode::CREATED,
        Json(UserRecord::from_parts(id, payload)),
    ))
}

/// PUT /users/{user_id} - partial update; unset fields stay unchanged
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(update): Json<UserUpdate>,
) -> Result<Json<UserRecord>, ApiError> {
    let store = state.store.write().await;
    let mut data: UserCreate = store
        .get(&state.users_collection, &user_id)
        .map_err(ApiError::internal)?
        .ok_or_else(|| ApiError::not_found(format!("User with ID '{}' not found", user_id)))?;

    if !update.is_empty() {
        update.apply(&mut data);
        store
            .put(&state.users_collection, &user_id, &data)
            .map_err(ApiError::internal)?;
    }

    Ok(Json(UserRecord::from_parts(user_id, data)))
}

/// DELETE /users/{user_id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let store = state.store.write().await;
    let deleted = store
        .delete(&state.users_collection, &user_id)
        .map_err(ApiError::internal)?;

    if !deleted {
        return Err(ApiError::not_found(format!(
            "User with ID '{}' not found",
            user_id
        )));
    }

    Ok(StatusCode::NO_CONTENT)
}
