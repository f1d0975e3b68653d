use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, CreateArtisanRequest, CreateBrandRequest};
use crate::models::catalog::{Artisan, Brand, NewArtisan, NewBrand};

/// GET /brands
pub async fn list_brands(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<Brand>>>, ApiError> {
    let brands = state.shared.catalog_service.list_brands().await?;
    Ok(Json(ApiResponse::success(brands)))
}

/// GET /brands/{id}
pub async fn get_brand(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Brand>>, ApiError> {
    let brand = state.shared.catalog_service.get_brand(&id).await?;
    Ok(Json(ApiResponse::success(brand)))
}

/// POST /brands
pub async fn create_brand(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateBrandRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Brand>>), ApiError> {
    let input = NewBrand::try_from(payload)?;
    let brand = state.shared.catalog_service.create_brand(input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(brand))))
}

/// GET /artisans
pub async fn list_artisans(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<Artisan>>>, ApiError> {
    let artisans = state.shared.catalog_service.list_artisans().await?;
    Ok(Json(ApiResponse::success(artisans)))
}

/// POST /artisans
pub async fn create_artisan(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateArtisanRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Artisan>>), ApiError> {
    let input = NewArtisan::try_from(payload)?;
    let artisan = state.shared.catalog_service.create_artisan(input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(artisan))))
}
