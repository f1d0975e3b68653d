use serde::{Deserialize, Serialize};

use super::string_enum;

string_enum! {
    /// Account role; brands onboard catalog data, shoppers collect stamps.
    UserRole ("role") {
        Shopper => "shopper",
        Brand => "brand",
    }
}

string_enum! {
    MembershipTier ("membership tier") {
        Silver => "silver",
        Gold => "gold",
        Platinum => "platinum",
    }
}

impl Default for UserRole {
    fn default() -> Self {
        Self::Shopper
    }
}

impl Default for MembershipTier {
    fn default() -> Self {
        Self::Silver
    }
}

/// Public user profile. The API key is never part of this view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: Option<String>,
    pub name: String,
    pub avatar_url: Option<String>,
    pub role: UserRole,
    pub membership_tier: MembershipTier,
    pub created_at: String,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Option<String>,
    pub name: String,
    pub avatar_url: Option<String>,
    pub role: UserRole,
    pub membership_tier: MembershipTier,
}

/// Returned once, at registration time.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUser {
    #[serde(flatten)]
    pub user: User,
    pub api_key: String,
}
