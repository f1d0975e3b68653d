//! Brand-only writes that attach passport content to an existing garment.

use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

use super::{
    ApiError, ApiResponse, AppState, CreateCareInstructionsRequest, CreateCulturalContentRequest,
    CreateImpactMetricsRequest, CreateTagCodeRequest,
};
use crate::models::catalog::{
    CareInstructions, CulturalContent, ImpactMetrics, NewCareInstructions, NewCulturalContent,
    NewImpactMetrics, NewTagCode, TagCode,
};

/// POST /impact-metrics
pub async fn create_impact_metrics(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateImpactMetricsRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ImpactMetrics>>), ApiError> {
    let input = NewImpactMetrics::try_from(payload)?;
    let metrics = state
        .shared
        .catalog_service
        .create_impact_metrics(input)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(metrics))))
}

/// POST /cultural-content
pub async fn create_cultural_content(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateCulturalContentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CulturalContent>>), ApiError> {
    let input = NewCulturalContent::try_from(payload)?;
    let content = state
        .shared
        .catalog_service
        .create_cultural_content(input)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(content))))
}

/// POST /care-instructions
pub async fn create_care_instructions(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateCareInstructionsRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CareInstructions>>), ApiError> {
    let input = NewCareInstructions::try_from(payload)?;
    let care = state
        .shared
        .catalog_service
        .create_care_instructions(input)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(care))))
}

/// POST /tag-codes
pub async fn create_tag_code(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateTagCodeRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TagCode>>), ApiError> {
    let input = NewTagCode::try_from(payload)?;
    let tag = state.shared.catalog_service.create_tag_code(input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(tag))))
}
