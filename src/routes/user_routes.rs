use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use validator::Validate;

use crate::dto::record_dto::UserRequest;
use crate::dto::ApiResponse;
use crate::models::User;
use crate::repositories::UserRepository;
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppError};

pub fn create_user_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", put(update_user).delete(delete_user))
}

async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<UserRequest>,
) -> Result<Json<User>, AppError> {
    request.validate()?;
    let repository = UserRepository::new(state.pool.clone());
    Ok(Json(repository.create(&request).await?))
}

async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let repository = UserRepository::new(state.pool.clone());
    Ok(Json(repository.find_all().await?))
}

async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UserRequest>,
) -> Result<Json<User>, AppError> {
    request.validate()?;
    let repository = UserRepository::new(state.pool.clone());
    let user = repository
        .update(id, &request)
        .await?
        .ok_or_else(|| not_found_error("User", id))?;
    Ok(Json(user))
}

async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse>, AppError> {
    let repository = UserRepository::new(state.pool.clone());
    if !repository.delete(id).await? {
        return Err(not_found_error("User", id));
    }
    Ok(Json(ApiResponse::message(format!("User {} deleted", id))))
}
