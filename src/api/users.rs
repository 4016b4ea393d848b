//! User account endpoints

use axum::{
    extract::{Path, State},
    routing::{get, patch, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::{DeletionSummary, PublicUser};
use crate::infrastructure::account::{RegisterRequest, UpdateProfileRequest};

/// Create the `/users` router
pub fn create_users_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/{user_id}", patch(update_profile).delete(delete_account))
        .route("/name/{user_id}", get(get_user_name))
}

#[derive(Deserialize)]
pub struct RegisterBody {
    pub name: String,
    pub password: String,
    pub email: String,
}

#[derive(Deserialize)]
pub struct LoginBody {
    pub name: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct UpdateProfileBody {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct UserNameResponse {
    pub id: String,
    pub name: String,
}

/// POST /users/register
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterBody>,
) -> Result<Json<PublicUser>, ApiError> {
    debug!(name = %body.name, "Registering user");

    let user = state
        .account_service
        .register(RegisterRequest {
            name: body.name,
            password: body.password,
            email: body.email,
        })
        .await?;

    Ok(Json(user))
}

/// POST /users/login
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginBody>,
) -> Result<Json<PublicUser>, ApiError> {
    let user = state
        .account_service
        .authenticate(&body.name, &body.password)
        .await?;

    Ok(Json(user))
}

/// PATCH /users/{user_id}
pub async fn update_profile(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(body): Json<UpdateProfileBody>,
) -> Result<Json<PublicUser>, ApiError> {
    debug!(user_id = %user_id, "Updating user profile");

    let user = state
        .account_service
        .update_profile(
            &user_id,
            UpdateProfileRequest {
                name: body.name,
                email: body.email,
                password: body.password,
            },
        )
        .await?;

    Ok(Json(user))
}

/// DELETE /users/{user_id}
pub async fn delete_account(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<DeletionSummary>, ApiError> {
    debug!(user_id = %user_id, "Deleting user");

    let outcome = state.account_service.delete(&user_id).await?;

    Ok(Json(DeletionSummary::from(&outcome)))
}

/// GET /users/name/{user_id}
pub async fn get_user_name(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserNameResponse>, ApiError> {
    let user = state.account_service.find_public(&user_id).await?;

    Ok(Json(UserNameResponse {
        id: user.id,
        name: user.name,
    }))
}
