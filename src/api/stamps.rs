use axum::{Extension, Json, extract::State, http::StatusCode};
use std::sync::Arc;

use super::auth::AuthUser;
use super::{ApiError, ApiResponse, AppState, CreateStampRequest};
use crate::models::passport::{NewStamp, Stamp};

/// POST /stamps
/// Unlocks a garment in the caller's own passport.
pub async fn create_stamp(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    Json(payload): Json<CreateStampRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Stamp>>), ApiError> {
    let input = NewStamp::try_from(payload)?;
    let stamp = state
        .shared
        .passport_service
        .create_stamp(&caller.id, input)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(stamp))))
}
