use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::string_enum;

string_enum! {
    GarmentCategory ("category") {
        Clothing => "clothing",
        Accessories => "accessories",
        Textiles => "textiles",
        Jewelry => "jewelry",
    }
}

string_enum! {
    ContentType ("content type") {
        Recipe => "recipe",
        Music => "music",
        Video => "video",
        Myth => "myth",
        Vocabulary => "vocabulary",
        Technique => "technique",
        History => "history",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub origin: Option<String>,
    pub philosophy: Option<String>,
    pub sustainability_practices: Vec<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    pub is_verified: bool,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artisan {
    pub id: String,
    pub name: String,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub country: String,
    pub region: Option<String>,
    pub craft: String,
    pub years_of_experience: Option<i32>,
    pub generation: Option<i32>,
    pub is_verified: bool,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Garment {
    pub id: String,
    pub brand_id: String,
    pub artisan_id: String,
    pub name: String,
    pub description: Option<String>,
    pub category: GarmentCategory,
    pub price: Decimal,
    pub images: Vec<String>,
    pub origin: String,
    pub materials: Vec<String>,
    pub techniques: Vec<String>,
    pub is_active: bool,
    pub is_verified: bool,
    pub created_at: String,
}

/// Case-insensitive substring match against name and description.
///
/// `needle` must already be lowercased.
#[must_use]
pub fn matches_search(name: &str, description: Option<&str>, needle: &str) -> bool {
    name.to_lowercase().contains(needle)
        || description.is_some_and(|d| d.to_lowercase().contains(needle))
}

/// Lowercases raw search text. Only all-whitespace input means no search filter;
/// otherwise the text is matched as given, surrounding spaces included.
#[must_use]
pub fn search_needle(raw: Option<&str>) -> Option<String> {
    raw.filter(|s| !s.trim().is_empty())
        .map(str::to_lowercase)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplyChainStep {
    pub step: i32,
    pub title: String,
    pub location: String,
    pub date: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactMetrics {
    pub id: String,
    pub garment_id: String,
    pub water_saved: Option<f64>,
    pub co2_offset: Option<f64>,
    pub artisans_supported: Option<i32>,
    pub supply_chain_steps: Vec<SupplyChainStep>,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CulturalContent {
    pub id: String,
    pub garment_id: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub title: String,
    pub content: String,
    pub images: Vec<String>,
    pub is_ai_generated: bool,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareInstructions {
    pub id: String,
    pub garment_id: String,
    pub washing_instructions: Option<String>,
    pub materials: Option<String>,
    pub special_care: Option<String>,
    pub repair_guidance: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagCode {
    pub id: String,
    pub garment_id: String,
    pub code: String,
    pub nfc_uid: Option<String>,
    pub qr_code: Option<String>,
    pub is_active: bool,
    pub created_at: String,
}

/// A garment joined to everything a passport page shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GarmentDetail {
    #[serde(flatten)]
    pub garment: Garment,
    pub brand: Brand,
    pub artisan: Artisan,
    pub impact_metrics: Option<ImpactMetrics>,
    pub cultural_content: Vec<CulturalContent>,
    pub care_instructions: Option<CareInstructions>,
    pub tag_code: Option<TagCode>,
}

#[derive(Debug, Clone, Default)]
pub struct GarmentFilter {
    pub category: Option<GarmentCategory>,
    pub brand_id: Option<String>,
    /// Raw search text; blank means no search filter.
    pub search: Option<String>,
}

/// Which column a scanned code is looked up against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagLookup {
    Code(String),
    Nfc(String),
    Qr(String),
}

impl TagLookup {
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Code(v) | Self::Nfc(v) | Self::Qr(v) => v,
        }
    }

    #[must_use]
    pub const fn scan_type(&self) -> &'static str {
        match self {
            Self::Code(_) => "code",
            Self::Nfc(_) => "nfc",
            Self::Qr(_) => "qr",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewBrand {
    pub name: String,
    pub description: Option<String>,
    pub origin: Option<String>,
    pub philosophy: Option<String>,
    pub sustainability_practices: Vec<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    pub is_verified: bool,
}

#[derive(Debug, Clone, Default)]
pub struct NewArtisan {
    pub name: String,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub country: String,
    pub region: Option<String>,
    pub craft: String,
    pub years_of_experience: Option<i32>,
    pub generation: Option<i32>,
    pub is_verified: bool,
}

#[derive(Debug, Clone)]
pub struct NewGarment {
    pub brand_id: String,
    pub artisan_id: String,
    pub name: String,
    pub description: Option<String>,
    pub category: GarmentCategory,
    pub price: Decimal,
    pub images: Vec<String>,
    pub origin: String,
    pub materials: Vec<String>,
    pub techniques: Vec<String>,
    pub is_active: bool,
    pub is_verified: bool,
}

#[derive(Debug, Clone, Default)]
pub struct NewImpactMetrics {
    pub garment_id: String,
    pub water_saved: Option<f64>,
    pub co2_offset: Option<f64>,
    pub artisans_supported: Option<i32>,
    pub supply_chain_steps: Vec<SupplyChainStep>,
}

#[derive(Debug, Clone)]
pub struct NewCulturalContent {
    pub garment_id: String,
    pub content_type: ContentType,
    pub title: String,
    pub content: String,
    pub images: Vec<String>,
    pub is_ai_generated: bool,
}

#[derive(Debug, Clone, Default)]
pub struct NewCareInstructions {
    pub garment_id: String,
    pub washing_instructions: Option<String>,
    pub materials: Option<String>,
    pub special_care: Option<String>,
    pub repair_guidance: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewTagCode {
    pub garment_id: String,
    pub code: String,
    pub nfc_uid: Option<String>,
    pub qr_code: Option<String>,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_matches_name_or_description_ignoring_case() {
        assert!(matches_search("Indigo Tenugui", None, "indigo"));
        assert!(matches_search("Kaftan Azul", Some("Natural INDIGO dye"), "indigo"));
        assert!(!matches_search("Huipil de Flores", Some("Brocade blouse"), "indigo"));
    }

    #[test]
    fn blank_search_is_no_filter() {
        assert_eq!(search_needle(None), None);
        assert_eq!(search_needle(Some("")), None);
        assert_eq!(search_needle(Some("   ")), None);
    }

    #[test]
    fn search_keeps_surrounding_whitespace() {
        let needle = search_needle(Some("InDiGo ")).unwrap();
        assert_eq!(needle, "indigo ");

        assert!(!matches_search("Indigo", None, &needle));
        assert!(matches_search("Indigo Tenugui", None, &needle));
        assert!(matches_search("Kaftan", Some("Hand-dyed indigo linen"), &needle));
    }

    #[test]
    fn category_parses_known_values_only() {
        assert_eq!(
            "jewelry".parse::<GarmentCategory>(),
            Ok(GarmentCategory::Jewelry)
        );
        let err = "shoes".parse::<GarmentCategory>().unwrap_err();
        assert!(err.contains("clothing, accessories, textiles, jewelry"));
    }

    #[test]
    fn cultural_content_serializes_type_field() {
        let content = CulturalContent {
            id: "c".to_string(),
            garment_id: "g".to_string(),
            content_type: ContentType::Vocabulary,
            title: "Terms".to_string(),
            content: "Aizome".to_string(),
            images: vec![],
            is_ai_generated: false,
            created_at: String::new(),
        };

        let json = serde_json::to_value(&content).unwrap();
        assert_eq!(json["type"], "vocabulary");
        assert_eq!(json["garmentId"], "g");
        assert_eq!(json["isAiGenerated"], false);
    }
}
