use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};
use std::sync::Arc;

use super::auth::resolve_caller;
use super::{ApiError, ApiResponse, AppState, TrackEventRequest};
use crate::models::analytics::{AnalyticsEvent, NewAnalyticsEvent};

/// POST /analytics
/// The event is attributed to the caller's key, or left anonymous without one.
pub async fn track_event(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(payload): Json<TrackEventRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AnalyticsEvent>>), ApiError> {
    let mut input = NewAnalyticsEvent::try_from(payload)?;
    input.user_id = resolve_caller(&state, &headers).await?.map(|user| user.id);
    let event = state.shared.scan_service.track_event(input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(event))))
}

/// GET /garments/{id}/analytics
pub async fn garment_events(
    State(state): State<Arc<AppState>>,
    Path(garment_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<AnalyticsEvent>>>, ApiError> {
    let events = state
        .shared
        .scan_service
        .garment_events(&garment_id)
        .await?;
    Ok(Json(ApiResponse::success(events)))
}
