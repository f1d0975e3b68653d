use serde::{Deserialize, Serialize};

use super::ApiError;
use super::validation::{
    optional_text, parse_enum, parse_optional_enum, validate_name, validate_non_negative,
    validate_non_negative_count, validate_price,
};
use crate::models::analytics::NewAnalyticsEvent;
use crate::models::catalog::{
    GarmentFilter, NewArtisan, NewBrand, NewCareInstructions, NewCulturalContent, NewGarment,
    NewImpactMetrics, NewTagCode, SupplyChainStep,
};
use crate::models::passport::{NewBadge, NewStamp};
use crate::models::user::{NewUser, UserRole};

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthDto {
    pub status: &'static str,
    pub database: &'static str,
    pub version: &'static str,
    pub uptime_seconds: u64,
}

#[derive(Debug, Default, Deserialize)]
pub struct GarmentQuery {
    pub category: Option<String>,
    pub brand: Option<String>,
    pub search: Option<String>,
}

impl TryFrom<GarmentQuery> for GarmentFilter {
    type Error = ApiError;

    fn try_from(query: GarmentQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            category: parse_optional_enum(query.category.as_deref())?,
            brand_id: optional_text(query.brand),
            search: query.search,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    pub email: Option<String>,
    pub name: String,
    pub avatar_url: Option<String>,
    pub role: Option<String>,
    pub membership_tier: Option<String>,
}

impl TryFrom<RegisterUserRequest> for NewUser {
    type Error = ApiError;

    fn try_from(req: RegisterUserRequest) -> Result<Self, Self::Error> {
        let email = optional_text(req.email);
        if let Some(email) = &email
            && !email.contains('@')
        {
            return Err(ApiError::validation(format!("Invalid email: '{email}'")));
        }

        // Brand accounts are only issued through `subbi user create`.
        let role: Option<UserRole> = parse_optional_enum(req.role.as_deref())?;
        if role.is_some_and(|r| r != UserRole::Shopper) {
            return Err(ApiError::Forbidden(
                "Brand accounts cannot be self-registered".to_string(),
            ));
        }

        Ok(Self {
            email,
            name: validate_name("Name", &req.name)?,
            avatar_url: optional_text(req.avatar_url),
            role: UserRole::Shopper,
            membership_tier: parse_optional_enum(req.membership_tier.as_deref())?
                .unwrap_or_default(),
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBrandRequest {
    pub name: String,
    pub description: Option<String>,
    pub origin: Option<String>,
    pub philosophy: Option<String>,
    #[serde(default)]
    pub sustainability_practices: Vec<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
}

impl TryFrom<CreateBrandRequest> for NewBrand {
    type Error = ApiError;

    fn try_from(req: CreateBrandRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: validate_name("Brand name", &req.name)?,
            description: optional_text(req.description),
            origin: optional_text(req.origin),
            philosophy: optional_text(req.philosophy),
            sustainability_practices: req.sustainability_practices,
            website: optional_text(req.website),
            logo_url: optional_text(req.logo_url),
            is_verified: req.is_verified,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArtisanRequest {
    pub name: String,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub country: String,
    pub region: Option<String>,
    pub craft: String,
    pub years_of_experience: Option<i32>,
    pub generation: Option<i32>,
    #[serde(default)]
    pub is_verified: bool,
}

impl TryFrom<CreateArtisanRequest> for NewArtisan {
    type Error = ApiError;

    fn try_from(req: CreateArtisanRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: validate_name("Artisan name", &req.name)?,
            bio: optional_text(req.bio),
            photo_url: optional_text(req.photo_url),
            country: validate_name("Country", &req.country)?,
            region: optional_text(req.region),
            craft: validate_name("Craft", &req.craft)?,
            years_of_experience: validate_non_negative_count(
                "yearsOfExperience",
                req.years_of_experience,
            )?,
            generation: validate_non_negative_count("generation", req.generation)?,
            is_verified: req.is_verified,
        })
    }
}

const fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGarmentRequest {
    pub brand_id: String,
    pub artisan_id: String,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub price: serde_json::Value,
    #[serde(default)]
    pub images: Vec<String>,
    pub origin: String,
    #[serde(default)]
    pub materials: Vec<String>,
    #[serde(default)]
    pub techniques: Vec<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_verified: bool,
}

impl TryFrom<CreateGarmentRequest> for NewGarment {
    type Error = ApiError;

    fn try_from(req: CreateGarmentRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            brand_id: validate_name("brandId", &req.brand_id)?,
            artisan_id: validate_name("artisanId", &req.artisan_id)?,
            name: validate_name("Garment name", &req.name)?,
            description: optional_text(req.description),
            category: parse_enum(&req.category)?,
            price: validate_price(&req.price)?,
            images: req.images,
            origin: validate_name("Origin", &req.origin)?,
            materials: req.materials,
            techniques: req.techniques,
            is_active: req.is_active,
            is_verified: req.is_verified,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateImpactMetricsRequest {
    pub garment_id: String,
    pub water_saved: Option<f64>,
    pub co2_offset: Option<f64>,
    pub artisans_supported: Option<i32>,
    #[serde(default)]
    pub supply_chain_steps: Vec<SupplyChainStep>,
}

impl TryFrom<CreateImpactMetricsRequest> for NewImpactMetrics {
    type Error = ApiError;

    fn try_from(req: CreateImpactMetricsRequest) -> Result<Self, Self::Error> {
        let mut steps = req.supply_chain_steps;
        steps.sort_by_key(|s| s.step);

        Ok(Self {
            garment_id: validate_name("garmentId", &req.garment_id)?,
            water_saved: validate_non_negative("waterSaved", req.water_saved)?,
            co2_offset: validate_non_negative("co2Offset", req.co2_offset)?,
            artisans_supported: validate_non_negative_count(
                "artisansSupported",
                req.artisans_supported,
            )?,
            supply_chain_steps: steps,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCulturalContentRequest {
    pub garment_id: String,
    #[serde(rename = "type")]
    pub content_type: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub is_ai_generated: bool,
}

impl TryFrom<CreateCulturalContentRequest> for NewCulturalContent {
    type Error = ApiError;

    fn try_from(req: CreateCulturalContentRequest) -> Result<Self, Self::Error> {
        if req.content.trim().is_empty() {
            return Err(ApiError::validation("Content cannot be empty"));
        }

        Ok(Self {
            garment_id: validate_name("garmentId", &req.garment_id)?,
            content_type: parse_enum(&req.content_type)?,
            title: validate_name("Title", &req.title)?,
            content: req.content,
            images: req.images,
            is_ai_generated: req.is_ai_generated,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCareInstructionsRequest {
    pub garment_id: String,
    pub washing_instructions: Option<String>,
    pub materials: Option<String>,
    pub special_care: Option<String>,
    pub repair_guidance: Option<String>,
}

impl TryFrom<CreateCareInstructionsRequest> for NewCareInstructions {
    type Error = ApiError;

    fn try_from(req: CreateCareInstructionsRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            garment_id: validate_name("garmentId", &req.garment_id)?,
            washing_instructions: optional_text(req.washing_instructions),
            materials: optional_text(req.materials),
            special_care: optional_text(req.special_care),
            repair_guidance: optional_text(req.repair_guidance),
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTagCodeRequest {
    pub garment_id: String,
    pub code: String,
    pub nfc_uid: Option<String>,
    pub qr_code: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl TryFrom<CreateTagCodeRequest> for NewTagCode {
    type Error = ApiError;

    fn try_from(req: CreateTagCodeRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            garment_id: validate_name("garmentId", &req.garment_id)?,
            code: validate_name("Code", &req.code)?,
            nfc_uid: optional_text(req.nfc_uid),
            qr_code: optional_text(req.qr_code),
            is_active: req.is_active,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBadgeRequest {
    pub name: String,
    pub description: Option<String>,
    pub icon_url: Option<String>,
    pub required_stamps: Option<i32>,
    pub required_countries: Option<i32>,
    pub rarity: Option<String>,
}

impl TryFrom<CreateBadgeRequest> for NewBadge {
    type Error = ApiError;

    fn try_from(req: CreateBadgeRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: validate_name("Badge name", &req.name)?,
            description: optional_text(req.description),
            icon_url: optional_text(req.icon_url),
            required_stamps: validate_non_negative_count("requiredStamps", req.required_stamps)?,
            required_countries: validate_non_negative_count(
                "requiredCountries",
                req.required_countries,
            )?,
            rarity: parse_optional_enum(req.rarity.as_deref())?.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardBadgeRequest {
    pub badge_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStampRequest {
    pub user_id: String,
    pub garment_id: String,
    pub tag_code_id: Option<String>,
    pub scan_location: Option<String>,
}

impl TryFrom<CreateStampRequest> for NewStamp {
    type Error = ApiError;

    fn try_from(req: CreateStampRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: validate_name("userId", &req.user_id)?,
            garment_id: validate_name("garmentId", &req.garment_id)?,
            tag_code_id: optional_text(req.tag_code_id),
            scan_location: optional_text(req.scan_location),
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackEventRequest {
    pub garment_id: Option<String>,
    pub action: String,
    pub metadata: Option<serde_json::Value>,
}

impl TryFrom<TrackEventRequest> for NewAnalyticsEvent {
    type Error = ApiError;

    fn try_from(req: TrackEventRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: None,
            garment_id: optional_text(req.garment_id),
            action: parse_enum(&req.action)?,
            metadata: req.metadata,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::GarmentCategory;
    use crate::models::user::MembershipTier;
    use serde_json::json;

    #[test]
    fn garment_request_converts_with_defaults() {
        let req: CreateGarmentRequest = serde_json::from_value(json!({
            "brandId": "brand-1",
            "artisanId": "artisan-1",
            "name": "Huipil",
            "category": "clothing",
            "price": "285.00",
            "origin": "Guatemala"
        }))
        .unwrap();

        let garment = NewGarment::try_from(req).unwrap();
        assert_eq!(garment.category, GarmentCategory::Clothing);
        assert!(garment.is_active);
        assert!(!garment.is_verified);
        assert!(garment.images.is_empty());
    }

    #[test]
    fn garment_request_rejects_unknown_category() {
        let req: CreateGarmentRequest = serde_json::from_value(json!({
            "brandId": "brand-1",
            "artisanId": "artisan-1",
            "name": "Sandals",
            "category": "footwear",
            "price": 10,
            "origin": "Peru"
        }))
        .unwrap();

        let err = NewGarment::try_from(req).unwrap_err();
        assert!(matches!(err, ApiError::ValidationError(msg) if msg.contains("footwear")));
    }

    #[test]
    fn register_request_defaults_role_and_tier() {
        let req: RegisterUserRequest =
            serde_json::from_value(json!({ "name": "Ana", "email": "ana@example.com" })).unwrap();

        let user = NewUser::try_from(req).unwrap();
        assert_eq!(user.role, UserRole::Shopper);
        assert_eq!(user.membership_tier, MembershipTier::Silver);
    }

    #[test]
    fn register_request_cannot_pick_brand_role() {
        let req: RegisterUserRequest =
            serde_json::from_value(json!({ "name": "Mallory", "role": "brand" })).unwrap();
        let err = NewUser::try_from(req).unwrap_err();
        assert!(matches!(err, ApiError::Forbidden(_)));

        let req: RegisterUserRequest =
            serde_json::from_value(json!({ "name": "Ana", "role": "shopper" })).unwrap();
        assert_eq!(NewUser::try_from(req).unwrap().role, UserRole::Shopper);
    }

    #[test]
    fn blank_query_params_are_ignored() {
        let filter = GarmentFilter::try_from(GarmentQuery {
            category: Some(String::new()),
            brand: Some(" ".to_string()),
            search: None,
        })
        .unwrap();

        assert!(filter.category.is_none());
        assert!(filter.brand_id.is_none());
    }

    #[test]
    fn supply_chain_steps_are_ordered() {
        let req: CreateImpactMetricsRequest = serde_json::from_value(json!({
            "garmentId": "garment-1",
            "supplyChainSteps": [
                { "step": 2, "title": "Dye", "location": "Fez", "date": "2024-02", "description": "Indigo" },
                { "step": 1, "title": "Spin", "location": "Fez", "date": "2024-01", "description": "Cotton" }
            ]
        }))
        .unwrap();

        let metrics = NewImpactMetrics::try_from(req).unwrap();
        assert_eq!(metrics.supply_chain_steps[0].step, 1);
        assert!(metrics.water_saved.is_none());
    }
}
