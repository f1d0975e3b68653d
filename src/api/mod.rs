use axum::{
    Router,
    http::HeaderValue,
    middleware,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::state::SharedState;

mod analytics;
pub mod auth;
mod badges;
mod brands;
mod error;
mod garments;
mod observability;
mod onboarding;
mod passport;
mod scan;
mod stamps;
mod types;
mod users;
mod validation;

pub use error::ApiError;
pub use types::*;

use metrics_exporter_prometheus::PrometheusHandle;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct AppState {
    pub shared: Arc<SharedState>,

    pub start_time: std::time::Instant,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    #[must_use]
    pub fn config(&self) -> &Arc<RwLock<Config>> {
        &self.shared.config
    }

    #[must_use]
    pub fn store(&self) -> &crate::db::Store {
        &self.shared.store
    }
}

#[must_use]
pub fn create_app_state(
    shared: Arc<SharedState>,
    prometheus_handle: Option<PrometheusHandle>,
) -> Arc<AppState> {
    Arc::new(AppState {
        shared,
        start_time: std::time::Instant::now(),
        prometheus_handle,
    })
}

pub async fn create_app_state_from_config(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let shared = Arc::new(SharedState::new(config).await?);
    Ok(create_app_state(shared, prometheus_handle))
}

pub async fn router(state: Arc<AppState>) -> Router {
    let cors_origins = {
        let config = state.config().read().await;
        config.server.cors_allowed_origins.clone()
    };

    let api_router = Router::new()
        .merge(create_public_router())
        .merge(create_user_router(state.clone()))
        .merge(create_brand_router(state.clone()))
        .with_state(state);

    let cors_layer = if cors_origins.is_empty() || cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .nest("/api", api_router)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(observability::logging_middleware))
}

/// Catalog reads, scans, passport views, and event tracking need no key.
fn create_public_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(observability::health))
        .route("/metrics", get(observability::get_metrics))
        .route("/users", post(users::register_user))
        .route("/users/{user_id}", get(users::get_user))
        .route("/users/{user_id}/passport", get(passport::get_passport))
        .route("/users/{user_id}/stamps", get(passport::get_stamps))
        .route("/users/{user_id}/badges", get(passport::get_badges))
        .route("/garments", get(garments::list_garments))
        .route("/garments/{id}", get(garments::get_garment))
        .route("/scan/nfc/{uid}", get(scan::scan_nfc))
        .route("/scan/qr/{code}", get(scan::scan_qr))
        .route("/scan/code/{code}", get(scan::scan_code))
        .route("/brands", get(brands::list_brands))
        .route("/brands/{id}", get(brands::get_brand))
        .route("/artisans", get(brands::list_artisans))
        .route("/badges", get(badges::list_badges))
        .route("/analytics", post(analytics::track_event))
}

fn create_user_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/stamps", post(stamps::create_stamp))
        .route_layer(middleware::from_fn_with_state(state, auth::require_user))
}

/// Catalog and passport writes. `require_user` runs first since route
/// layers added later wrap the earlier ones.
fn create_brand_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/brands", post(brands::create_brand))
        .route("/artisans", post(brands::create_artisan))
        .route("/garments", post(garments::create_garment))
        .route("/garments/{id}/analytics", get(analytics::garment_events))
        .route("/impact-metrics", post(onboarding::create_impact_metrics))
        .route("/cultural-content", post(onboarding::create_cultural_content))
        .route(
            "/care-instructions",
            post(onboarding::create_care_instructions),
        )
        .route("/tag-codes", post(onboarding::create_tag_code))
        .route("/badges", post(badges::create_badge))
        .route("/users/{user_id}/badges", post(badges::award_badge))
        .route_layer(middleware::from_fn(auth::require_brand))
        .route_layer(middleware::from_fn_with_state(state, auth::require_user))
}
