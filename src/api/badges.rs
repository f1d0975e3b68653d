use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

use super::validation::validate_name;
use super::{ApiError, ApiResponse, AppState, AwardBadgeRequest, CreateBadgeRequest};
use crate::models::passport::{Badge, NewBadge, UserBadge};

/// GET /badges
pub async fn list_badges(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<Badge>>>, ApiError> {
    let badges = state.shared.passport_service.list_badges().await?;
    Ok(Json(ApiResponse::success(badges)))
}

/// POST /badges
pub async fn create_badge(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateBadgeRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Badge>>), ApiError> {
    let input = NewBadge::try_from(payload)?;
    let badge = state.shared.passport_service.create_badge(input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(badge))))
}

/// POST /users/{user_id}/badges
pub async fn award_badge(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Json(payload): Json<AwardBadgeRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserBadge>>), ApiError> {
    let badge_id = validate_name("badgeId", &payload.badge_id)?;
    let awarded = state
        .shared
        .passport_service
        .award_badge(&user_id, &badge_id)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(awarded))))
}
