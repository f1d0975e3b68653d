use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, CreateGarmentRequest, GarmentQuery};
use crate::models::catalog::{Garment, GarmentDetail, GarmentFilter, NewGarment};

/// GET /garments?category=&brand=&search=
pub async fn list_garments(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GarmentQuery>,
) -> Result<Json<ApiResponse<Vec<GarmentDetail>>>, ApiError> {
    let filter = GarmentFilter::try_from(query)?;
    let garments = state.shared.catalog_service.list_garments(filter).await?;
    Ok(Json(ApiResponse::success(garments)))
}

/// GET /garments/{id}
pub async fn get_garment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<GarmentDetail>>, ApiError> {
    let garment = state.shared.catalog_service.get_garment(&id).await?;
    Ok(Json(ApiResponse::success(garment)))
}

/// POST /garments
pub async fn create_garment(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateGarmentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Garment>>), ApiError> {
    let input = NewGarment::try_from(payload)?;
    let garment = state.shared.catalog_service.create_garment(input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(garment))))
}
