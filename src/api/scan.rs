use axum::{
    Json,
    extract::{Path, State},
    http::HeaderMap,
};
use std::sync::Arc;

use super::auth::resolve_caller;
use super::{ApiError, ApiResponse, AppState};
use crate::models::catalog::{GarmentDetail, TagLookup};

async fn scan(
    state: &AppState,
    headers: &HeaderMap,
    lookup: TagLookup,
) -> Result<Json<ApiResponse<GarmentDetail>>, ApiError> {
    // Scans are public; a valid key only attributes the event to a user.
    let caller = resolve_caller(state, headers).await.ok().flatten();

    let detail = state
        .shared
        .scan_service
        .scan(&lookup, caller.as_ref().map(|u| u.id.as_str()))
        .await?;
    Ok(Json(ApiResponse::success(detail)))
}

/// GET /scan/nfc/{uid}
pub async fn scan_nfc(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(uid): Path<String>,
) -> Result<Json<ApiResponse<GarmentDetail>>, ApiError> {
    scan(&state, &headers, TagLookup::Nfc(uid)).await
}

/// GET /scan/qr/{code}
pub async fn scan_qr(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<GarmentDetail>>, ApiError> {
    scan(&state, &headers, TagLookup::Qr(code)).await
}

/// GET /scan/code/{code}
pub async fn scan_code(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<GarmentDetail>>, ApiError> {
    scan(&state, &headers, TagLookup::Code(code)).await
}
