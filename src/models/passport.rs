use serde::{Deserialize, Serialize};

use super::catalog::GarmentDetail;
use super::string_enum;
use super::user::User;

string_enum! {
    BadgeRarity ("rarity") {
        Common => "common",
        Rare => "rare",
        Epic => "epic",
        Legendary => "legendary",
    }
}

impl Default for BadgeRarity {
    fn default() -> Self {
        Self::Common
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stamp {
    pub id: String,
    pub user_id: String,
    pub garment_id: String,
    pub tag_code_id: Option<String>,
    pub unlocked_at: String,
    pub scan_location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StampWithGarment {
    #[serde(flatten)]
    pub stamp: Stamp,
    pub garment: GarmentDetail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub icon_url: Option<String>,
    pub required_stamps: Option<i32>,
    pub required_countries: Option<i32>,
    pub rarity: BadgeRarity,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBadge {
    pub id: String,
    pub user_id: String,
    pub badge_id: String,
    pub earned_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBadgeWithBadge {
    #[serde(flatten)]
    pub user_badge: UserBadge,
    pub badge: Badge,
}

#[derive(Debug, Clone, Default)]
pub struct NewBadge {
    pub name: String,
    pub description: Option<String>,
    pub icon_url: Option<String>,
    pub required_stamps: Option<i32>,
    pub required_countries: Option<i32>,
    pub rarity: BadgeRarity,
}

#[derive(Debug, Clone, Default)]
pub struct NewStamp {
    pub user_id: String,
    pub garment_id: String,
    pub tag_code_id: Option<String>,
    pub scan_location: Option<String>,
}

/// Cumulative sustainability figures across a user's resolved stamps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalImpact {
    pub water_saved: f64,
    pub co2_offset: f64,
    pub artisans_supported: i64,
    pub countries_explored: usize,
}

string_enum! {
    RecordKind ("record kind") {
        Stamp => "stamp",
        UserBadge => "user_badge",
        Garment => "garment",
        Badge => "badge",
        Brand => "brand",
        Artisan => "artisan",
    }
}

/// A row left out of an aggregate because something it points at is gone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnresolvedReference {
    pub record: RecordKind,
    pub record_id: String,
    pub missing: RecordKind,
    pub missing_id: String,
}

/// Items that resolved fully, plus the references that did not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolved<T> {
    pub items: Vec<T>,
    pub unresolved: Vec<UnresolvedReference>,
}

impl<T> Default for Resolved<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            unresolved: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Passport {
    pub user: User,
    pub stamps: Vec<StampWithGarment>,
    pub badges: Vec<UserBadgeWithBadge>,
    pub total_impact: TotalImpact,
    pub unresolved: Vec<UnresolvedReference>,
}
