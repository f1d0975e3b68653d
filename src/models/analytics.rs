use serde::{Deserialize, Serialize};

use super::string_enum;

string_enum! {
    AnalyticsAction ("analytics action") {
        Scan => "scan",
        ViewPassport => "view_passport",
        ViewImpact => "view_impact",
        ViewCare => "view_care",
        ViewCulture => "view_culture",
        Share => "share",
        Purchase => "purchase",
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsEvent {
    pub id: String,
    pub user_id: Option<String>,
    pub garment_id: Option<String>,
    pub action: AnalyticsAction,
    pub metadata: Option<serde_json::Value>,
    pub recorded_at: String,
}

#[derive(Debug, Clone)]
pub struct NewAnalyticsEvent {
    pub user_id: Option<String>,
    pub garment_id: Option<String>,
    pub action: AnalyticsAction,
    pub metadata: Option<serde_json::Value>,
}
