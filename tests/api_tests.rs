use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use subbi::api::AppState;
use subbi::config::Config;
use subbi::models::user::{MembershipTier, NewUser, UserRole};
use tower::ServiceExt;

async fn build_state() -> Arc<AppState> {
    let mut config = Config::default();
    config.general.database_path = "sqlite::memory:".to_string();
    config.seed.seed_demo_data = true;

    subbi::api::create_app_state_from_config(config, None)
        .await
        .expect("Failed to create app state")
}

async fn spawn_app() -> Router {
    subbi::api::router(build_state().await).await
}

/// Builds the app with a brand account issued out of band, as `subbi user create` does.
async fn spawn_app_with_brand() -> (Router, String) {
    let state = build_state().await;
    let brand = state
        .shared
        .user_service
        .register(NewUser {
            email: Some("studio@example.com".to_string()),
            name: "Studio".to_string(),
            avatar_url: None,
            role: UserRole::Brand,
            membership_tier: MembershipTier::Silver,
        })
        .await
        .expect("Failed to create brand account");
    (subbi::api::router(state).await, brand.api_key)
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    api_key: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(key) = api_key {
        builder = builder.header("X-Api-Key", key);
    }

    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

/// Self-registers a shopper and returns (id, api key).
async fn register(app: &Router, name: &str) -> (String, String) {
    let (status, body) = send(app, "POST", "/api/users", None, Some(json!({ "name": name }))).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    (
        body["data"]["id"].as_str().unwrap().to_string(),
        body["data"]["apiKey"].as_str().unwrap().to_string(),
    )
}

fn ids(list: &Value) -> Vec<String> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|g| g["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_health() {
    let app = spawn_app().await;

    let (status, body) = send(&app, "GET", "/api/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["database"], "connected");
}

#[tokio::test]
async fn test_demo_passport_totals() {
    let app = spawn_app().await;

    let (status, body) = send(&app, "GET", "/api/users/user-1/passport", None, None).await;
    assert_eq!(status, StatusCode::OK);

    let passport = &body["data"];
    assert_eq!(passport["user"]["name"], "Sarah Martinez");
    assert_eq!(passport["user"]["membershipTier"], "gold");

    let impact = &passport["totalImpact"];
    assert_eq!(impact["waterSaved"].as_f64(), Some(5700.0));
    assert_eq!(impact["co2Offset"].as_f64(), Some(30.0));
    assert_eq!(impact["artisansSupported"], 8);
    assert_eq!(impact["countriesExplored"], 2);

    let stamps = passport["stamps"].as_array().unwrap();
    assert_eq!(stamps.len(), 2);
    assert_eq!(stamps[0]["garment"]["id"], "garment-1");
    assert_eq!(stamps[0]["garment"]["brand"]["id"], "brand-1");
    assert_eq!(stamps[1]["garment"]["artisan"]["country"], "Morocco");

    let badges = passport["badges"].as_array().unwrap();
    assert_eq!(badges.len(), 1);
    assert_eq!(badges[0]["badge"]["name"], "First Steps");

    assert_eq!(passport["unresolved"], json!([]));
}

#[tokio::test]
async fn test_unknown_user_passport_is_not_found() {
    let app = spawn_app().await;

    let (status, body) = send(&app, "GET", "/api/users/nobody/passport", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("nobody"));
}

#[tokio::test]
async fn test_new_user_has_empty_passport() {
    let app = spawn_app().await;
    let (user_id, _) = register(&app, "Ana").await;

    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/users/{user_id}/passport"),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["stamps"], json!([]));
    assert_eq!(
        body["data"]["totalImpact"],
        json!({
            "waterSaved": 0.0,
            "co2Offset": 0.0,
            "artisansSupported": 0,
            "countriesExplored": 0
        })
    );
}

#[tokio::test]
async fn test_search_indigo() {
    let app = spawn_app().await;

    let (status, body) = send(&app, "GET", "/api/garments?search=InDiGo", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body["data"]), vec!["garment-3", "garment-4"]);

    let (_, body) = send(
        &app,
        "GET",
        "/api/garments?category=accessories",
        None,
        None,
    )
    .await;
    assert_eq!(ids(&body["data"]), vec!["garment-3"]);

    let (_, body) = send(&app, "GET", "/api/garments?brand=brand-2", None, None).await;
    assert_eq!(ids(&body["data"]), vec!["garment-2", "garment-3"]);

    let (_, body) = send(&app, "GET", "/api/garments?search=%20%20", None, None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 4);

    let (_, body) = send(&app, "GET", "/api/garments?search=tenugui", None, None).await;
    assert_eq!(ids(&body["data"]), vec!["garment-3"]);

    let (_, body) = send(&app, "GET", "/api/garments?search=tenugui%20", None, None).await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_invalid_category_is_rejected() {
    let app = spawn_app().await;

    let (status, body) = send(&app, "GET", "/api/garments?category=shoes", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("shoes"));
}

#[tokio::test]
async fn test_garment_detail() {
    let app = spawn_app().await;

    let (status, body) = send(&app, "GET", "/api/garments/garment-4", None, None).await;
    assert_eq!(status, StatusCode::OK);

    let detail = &body["data"];
    assert_eq!(detail["name"], "Lalita Kaftan");
    assert_eq!(detail["price"], "345.00");
    assert_eq!(detail["impactMetrics"]["artisansSupported"], 60);
    assert_eq!(
        detail["impactMetrics"]["supplyChainSteps"]
            .as_array()
            .unwrap()
            .len(),
        4
    );
    assert_eq!(detail["culturalContent"].as_array().unwrap().len(), 3);
    assert_eq!(detail["culturalContent"][0]["type"], "history");
    assert_eq!(detail["careInstructions"]["id"], "care-4");
    assert_eq!(detail["tagCode"]["code"], "SUB-IN-LKF-004");

    let (status, _) = send(&app, "GET", "/api/garments/garment-99", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_scan_paths() {
    let app = spawn_app().await;

    for path in [
        "/api/scan/nfc/SUB-JP-ITG-003",
        "/api/scan/qr/SUB-JP-ITG-003",
        "/api/scan/code/SUB-JP-ITG-003",
    ] {
        let (status, body) = send(&app, "GET", path, None, None).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert_eq!(body["data"]["id"], "garment-3");
        assert_eq!(body["data"]["artisan"]["name"], "Kenji Yamamoto");
    }

    let (status, _) = send(&app, "GET", "/api/scan/code/SUB-XX-NOPE", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_inactive_tag_does_not_resolve() {
    let (app, brand_key) = spawn_app_with_brand().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/tag-codes",
        Some(&brand_key),
        Some(json!({
            "garmentId": "garment-1",
            "code": "SUB-GT-OLD-000",
            "nfcUid": "04:A2:00:OLD",
            "qrCode": "QR-OLD-000",
            "isActive": false
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");

    for path in [
        "/api/scan/nfc/04:A2:00:OLD",
        "/api/scan/qr/QR-OLD-000",
        "/api/scan/code/SUB-GT-OLD-000",
    ] {
        let (status, _) = send(&app, "GET", path, None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
    }

    let (status, _) = send(
        &app,
        "POST",
        "/api/tag-codes",
        Some(&brand_key),
        Some(json!({ "garmentId": "garment-2", "code": "SUB-GT-OLD-000" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_stamp_flow() {
    let app = spawn_app().await;
    let (user_id, key) = register(&app, "Ana").await;

    let stamp = json!({ "userId": user_id, "garmentId": "garment-3", "tagCodeId": "nfc-3" });

    let (status, _) = send(&app, "POST", "/api/stamps", None, Some(stamp.clone())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send(&app, "POST", "/api/stamps", Some(&key), Some(stamp.clone())).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["data"]["garmentId"], "garment-3");

    let (status, _) = send(&app, "POST", "/api/stamps", Some(&key), Some(stamp)).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(
        &app,
        "POST",
        "/api/stamps",
        Some(&key),
        Some(json!({ "userId": "user-1", "garmentId": "garment-3" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(
        &app,
        "POST",
        "/api/stamps",
        Some(&key),
        Some(json!({ "userId": user_id, "garmentId": "garment-1", "tagCodeId": "nfc-3" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = send(
        &app,
        "GET",
        &format!("/api/users/{user_id}/passport"),
        None,
        None,
    )
    .await;
    let impact = &body["data"]["totalImpact"];
    assert_eq!(impact["waterSaved"].as_f64(), Some(1800.0));
    assert_eq!(impact["countriesExplored"], 1);

    let (status, body) = send(&app, "GET", "/api/garments/garment-3/analytics", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED, "{body}");
}

#[tokio::test]
async fn test_onboarding_requires_brand_role() {
    let (app, brand_key) = spawn_app_with_brand().await;
    let (_, shopper_key) = register(&app, "Ana").await;

    let brand = json!({ "name": "Andes Loom", "origin": "Peru" });

    let (status, _) = send(&app, "POST", "/api/brands", None, Some(brand.clone())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        &app,
        "POST",
        "/api/brands",
        Some(&shopper_key),
        Some(brand.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(&app, "POST", "/api/brands", Some(&brand_key), Some(brand)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["name"], "Andes Loom");

    let (status, _) = send(
        &app,
        "POST",
        "/api/garments",
        Some(&brand_key),
        Some(json!({
            "brandId": "brand-1",
            "artisanId": "artisan-1",
            "name": "Faja",
            "category": "hats",
            "price": "40.00",
            "origin": "Guatemala"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        "POST",
        "/api/garments",
        Some(&brand_key),
        Some(json!({
            "brandId": "brand-1",
            "artisanId": "artisan-1",
            "name": "Faja",
            "category": "textiles",
            "price": "-5",
            "origin": "Guatemala"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        "POST",
        "/api/garments",
        Some(&brand_key),
        Some(json!({
            "brandId": "brand-404",
            "artisanId": "artisan-1",
            "name": "Faja",
            "category": "textiles",
            "price": 40,
            "origin": "Guatemala"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_onboard_new_garment_end_to_end() {
    let (app, brand_key) = spawn_app_with_brand().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/garments",
        Some(&brand_key),
        Some(json!({
            "brandId": "brand-1",
            "artisanId": "artisan-1",
            "name": "Faja Tejida",
            "description": "Backstrap woven belt",
            "category": "textiles",
            "price": 40,
            "origin": "Guatemala",
            "materials": ["Cotton"]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["data"]["price"], "40.00");
    let garment_id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, _) = send(
        &app,
        "POST",
        "/api/impact-metrics",
        Some(&brand_key),
        Some(json!({ "garmentId": garment_id, "waterSaved": 400, "co2Offset": 2.5 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(
        &app,
        "POST",
        "/api/cultural-content",
        Some(&brand_key),
        Some(json!({
            "garmentId": garment_id,
            "type": "technique",
            "title": "Backstrap weaving",
            "content": "Tension is held by the weaver's body."
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(
        &app,
        "POST",
        "/api/care-instructions",
        Some(&brand_key),
        Some(json!({ "garmentId": garment_id, "washingInstructions": "Cold hand wash" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(
        &app,
        "POST",
        "/api/tag-codes",
        Some(&brand_key),
        Some(json!({ "garmentId": garment_id, "code": "SUB-GT-FJT-005" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, "GET", "/api/scan/code/SUB-GT-FJT-005", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], garment_id.as_str());
    assert_eq!(body["data"]["impactMetrics"]["waterSaved"].as_f64(), Some(400.0));
    assert_eq!(body["data"]["culturalContent"][0]["type"], "technique");
    assert_eq!(body["data"]["careInstructions"]["washingInstructions"], "Cold hand wash");

    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/garments/{garment_id}/analytics"),
        Some(&brand_key),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["action"], "scan");
}

#[tokio::test]
async fn test_badges() {
    let (app, brand_key) = spawn_app_with_brand().await;

    let (status, body) = send(&app, "GET", "/api/badges", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 3);

    let award = json!({ "badgeId": "badge-3" });
    let (status, _) = send(
        &app,
        "POST",
        "/api/users/user-1/badges",
        Some(&brand_key),
        Some(award.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(
        &app,
        "POST",
        "/api/users/user-1/badges",
        Some(&brand_key),
        Some(award),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(
        &app,
        "POST",
        "/api/users/user-1/badges",
        Some(&brand_key),
        Some(json!({ "badgeId": "badge-404" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, "GET", "/api/users/user-1/badges", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_register_and_authenticate() {
    let app = spawn_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/users",
        None,
        Some(json!({ "name": "Lee", "email": "lee@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["role"], "shopper");
    assert_eq!(body["data"]["membershipTier"], "silver");
    assert_eq!(body["data"]["apiKey"].as_str().unwrap().len(), 64);

    let (status, _) = send(
        &app,
        "POST",
        "/api/users",
        None,
        Some(json!({ "name": "Lee Again", "email": "lee@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(
        &app,
        "POST",
        "/api/users",
        None,
        Some(json!({ "name": "Lee", "role": "admin" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, "GET", "/api/users/user-1", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].get("apiKey").is_none());

    let (status, _) = send(
        &app,
        "POST",
        "/api/stamps",
        Some("not-a-real-key"),
        Some(json!({ "userId": "user-1", "garmentId": "garment-3" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_self_registration_cannot_gain_brand_role() {
    let app = spawn_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/users",
        None,
        Some(json!({ "name": "Mallory", "role": "brand" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN, "{body}");
    assert_eq!(body["success"], false);

    let (status, body) = send(
        &app,
        "POST",
        "/api/users",
        None,
        Some(json!({ "name": "Mallory", "role": "shopper" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["role"], "shopper");
    let (user_id, key) = register(&app, "Mallory Two").await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/brands",
        Some(&key),
        Some(json!({ "name": "Totally Real Atelier", "isVerified": true })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/users/{user_id}/badges"),
        Some(&key),
        Some(json!({ "badgeId": "badge-3" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (_, body) = send(&app, "GET", &format!("/api/users/{user_id}/badges"), None, None).await;
    assert_eq!(body["data"]["items"], json!([]));
}

#[tokio::test]
async fn test_track_event() {
    let app = spawn_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/analytics",
        None,
        Some(json!({ "garmentId": "garment-2", "action": "share", "metadata": { "channel": "copy" } })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["data"]["action"], "share");

    let (status, _) = send(
        &app,
        "POST",
        "/api/analytics",
        None,
        Some(json!({ "garmentId": "garment-2", "action": "teleport" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        "POST",
        "/api/analytics",
        None,
        Some(json!({ "garmentId": "garment-404", "action": "share" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_track_event_is_attributed_to_caller() {
    let app = spawn_app().await;
    let (user_id, key) = register(&app, "Ana").await;

    let forged = json!({ "userId": "user-1", "garmentId": "garment-2", "action": "view_care" });

    let (status, body) = send(&app, "POST", "/api/analytics", None, Some(forged.clone())).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["data"]["userId"], Value::Null);

    let (status, body) = send(&app, "POST", "/api/analytics", Some(&key), Some(forged)).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["data"]["userId"], user_id.as_str());
}
