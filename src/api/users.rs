use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, RegisterUserRequest};
use crate::models::user::{NewUser, RegisteredUser, User};

/// POST /users
/// Self-registers a shopper. The API key is returned only in this response.
pub async fn register_user(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<RegisteredUser>>), ApiError> {
    let input = NewUser::try_from(payload)?;
    let registered = state.shared.user_service.register(input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(registered))))
}

/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user = state.shared.user_service.get_user(&user_id).await?;
    Ok(Json(ApiResponse::success(user)))
}
