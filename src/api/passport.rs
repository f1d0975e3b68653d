use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState};
use crate::models::passport::{Passport, Resolved, StampWithGarment, UserBadgeWithBadge};

/// GET /users/{user_id}/passport
pub async fn get_passport(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse<Passport>>, ApiError> {
    let passport = state
        .shared
        .passport_service
        .get_user_passport(&user_id)
        .await?;
    Ok(Json(ApiResponse::success(passport)))
}

/// GET /users/{user_id}/stamps
pub async fn get_stamps(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse<Resolved<StampWithGarment>>>, ApiError> {
    let stamps = state
        .shared
        .passport_service
        .get_user_stamps(&user_id)
        .await?;
    Ok(Json(ApiResponse::success(stamps)))
}

/// GET /users/{user_id}/badges
pub async fn get_badges(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse<Resolved<UserBadgeWithBadge>>>, ApiError> {
    let badges = state
        .shared
        .passport_service
        .get_user_badges(&user_id)
        .await?;
    Ok(Json(ApiResponse::success(badges)))
}
