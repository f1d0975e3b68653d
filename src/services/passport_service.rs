//! Domain service for digital passports: stamps, badges and impact totals.
//!
//! A passport is derived on every request from a consistent snapshot of the
//! store. Rows whose references cannot be joined are reported back to the
//! caller instead of being dropped silently.

use std::collections::{HashMap, HashSet};

use thiserror::Error;
use tracing::warn;

use crate::db::PassportSnapshot;
use crate::models::catalog::GarmentDetail;
use crate::models::passport::{
    Badge, NewBadge, NewStamp, Passport, RecordKind, Resolved, Stamp, StampWithGarment,
    TotalImpact, UnresolvedReference, UserBadge, UserBadgeWithBadge,
};

/// Errors specific to passport operations.
#[derive(Debug, Error)]
pub enum PassportError {
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Garment not found: {0}")]
    GarmentNotFound(String),

    #[error("Tag code not found: {0}")]
    TagCodeNotFound(String),

    #[error("Badge not found: {0}")]
    BadgeNotFound(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("Garment {garment_id} is already stamped in passport of user {user_id}")]
    AlreadyStamped { user_id: String, garment_id: String },

    #[error("Badge {badge_id} already awarded to user {user_id}")]
    AlreadyAwarded { user_id: String, badge_id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for PassportError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for PassportError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

/// Domain service trait for passports.
#[async_trait::async_trait]
pub trait PassportService: Send + Sync {
    /// Builds the full passport for a user.
    ///
    /// # Errors
    ///
    /// - Returns [`PassportError::UserNotFound`] if the user does not exist
    /// - Returns [`PassportError::Database`] on store failures
    async fn get_user_passport(&self, user_id: &str) -> Result<Passport, PassportError>;

    /// Stamps joined to garment detail, oldest first.
    async fn get_user_stamps(
        &self,
        user_id: &str,
    ) -> Result<Resolved<StampWithGarment>, PassportError>;

    /// Awarded badges joined to their definitions.
    async fn get_user_badges(
        &self,
        user_id: &str,
    ) -> Result<Resolved<UserBadgeWithBadge>, PassportError>;

    /// Adds a garment to the caller's passport.
    ///
    /// # Errors
    ///
    /// - Returns [`PassportError::Forbidden`] if `caller_id` differs from the stamp's user
    /// - Returns [`PassportError::AlreadyStamped`] on a duplicate (user, garment) pair
    /// - Returns a `*NotFound` variant if the user, garment or tag does not exist
    async fn create_stamp(&self, caller_id: &str, input: NewStamp)
    -> Result<Stamp, PassportError>;

    /// Lists badge definitions.
    async fn list_badges(&self) -> Result<Vec<Badge>, PassportError>;

    /// Defines a new badge.
    async fn create_badge(&self, input: NewBadge) -> Result<Badge, PassportError>;

    /// Awards a badge to a user manually.
    ///
    /// # Errors
    ///
    /// Returns [`PassportError::AlreadyAwarded`] if the user already holds the badge.
    async fn award_badge(&self, user_id: &str, badge_id: &str)
    -> Result<UserBadge, PassportError>;
}

/// Sums impact figures over resolved stamps.
///
/// Missing metrics, or missing individual figures, contribute zero.
/// `countries_explored` counts distinct garment origins.
#[must_use]
pub fn accumulate_impact(stamps: &[StampWithGarment]) -> TotalImpact {
    let mut countries = HashSet::new();

    let mut total = stamps.iter().fold(TotalImpact::default(), |mut acc, stamp| {
        countries.insert(stamp.garment.garment.origin.as_str());
        if let Some(metrics) = &stamp.garment.impact_metrics {
            acc.water_saved += metrics.water_saved.unwrap_or(0.0);
            acc.co2_offset += metrics.co2_offset.unwrap_or(0.0);
            acc.artisans_supported += i64::from(metrics.artisans_supported.unwrap_or(0));
        }
        acc
    });

    total.countries_explored = countries.len();
    total
}

/// Joins stamps to garments and user badges to badge definitions.
fn resolve_snapshot(
    snapshot: &PassportSnapshot,
) -> (Resolved<StampWithGarment>, Resolved<UserBadgeWithBadge>) {
    let details: HashMap<&str, &GarmentDetail> = snapshot
        .garments
        .items
        .iter()
        .map(|detail| (detail.garment.id.as_str(), detail))
        .collect();

    let mut stamps = Resolved {
        items: Vec::with_capacity(snapshot.stamps.len()),
        unresolved: snapshot.garments.unresolved.clone(),
    };
    for stamp in &snapshot.stamps {
        if let Some(detail) = details.get(stamp.garment_id.as_str()) {
            stamps.items.push(StampWithGarment {
                stamp: stamp.clone(),
                garment: (*detail).clone(),
            });
        } else {
            warn!(stamp_id = %stamp.id, garment_id = %stamp.garment_id, "Stamp references an unresolvable garment");
            stamps.unresolved.push(UnresolvedReference {
                record: RecordKind::Stamp,
                record_id: stamp.id.clone(),
                missing: RecordKind::Garment,
                missing_id: stamp.garment_id.clone(),
            });
        }
    }

    let definitions: HashMap<&str, &Badge> = snapshot
        .badges
        .iter()
        .map(|badge| (badge.id.as_str(), badge))
        .collect();

    let mut badges = Resolved {
        items: Vec::with_capacity(snapshot.user_badges.len()),
        unresolved: Vec::new(),
    };
    for user_badge in &snapshot.user_badges {
        if let Some(badge) = definitions.get(user_badge.badge_id.as_str()) {
            badges.items.push(UserBadgeWithBadge {
                user_badge: user_badge.clone(),
                badge: (*badge).clone(),
            });
        } else {
            warn!(user_badge_id = %user_badge.id, badge_id = %user_badge.badge_id, "User badge references a missing badge");
            badges.unresolved.push(UnresolvedReference {
                record: RecordKind::UserBadge,
                record_id: user_badge.id.clone(),
                missing: RecordKind::Badge,
                missing_id: user_badge.badge_id.clone(),
            });
        }
    }

    (stamps, badges)
}

#[must_use]
pub fn assemble_stamps(snapshot: &PassportSnapshot) -> Resolved<StampWithGarment> {
    resolve_snapshot(snapshot).0
}

#[must_use]
pub fn assemble_badges(snapshot: &PassportSnapshot) -> Resolved<UserBadgeWithBadge> {
    resolve_snapshot(snapshot).1
}

/// Builds a passport from a snapshot. Pure; no store access.
#[must_use]
pub fn assemble_passport(snapshot: PassportSnapshot) -> Passport {
    let (stamps, badges) = resolve_snapshot(&snapshot);
    let total_impact = accumulate_impact(&stamps.items);

    let mut unresolved = stamps.unresolved;
    unresolved.extend(badges.unresolved);

    Passport {
        user: snapshot.user,
        stamps: stamps.items,
        badges: badges.items,
        total_impact,
        unresolved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::{Artisan, Brand, Garment, GarmentCategory, ImpactMetrics};
    use crate::models::passport::BadgeRarity;
    use crate::models::user::{MembershipTier, User, UserRole};
    use rust_decimal::Decimal;

    fn user() -> User {
        User {
            id: "user-1".to_string(),
            email: None,
            name: "Sarah".to_string(),
            avatar_url: None,
            role: UserRole::Shopper,
            membership_tier: MembershipTier::Gold,
            created_at: String::new(),
        }
    }

    type Figures = (Option<f64>, Option<f64>, Option<i32>);

    fn detail(id: &str, origin: &str, metrics: Option<Figures>) -> GarmentDetail {
        GarmentDetail {
            garment: Garment {
                id: id.to_string(),
                brand_id: "brand".to_string(),
                artisan_id: "artisan".to_string(),
                name: format!("Garment {id}"),
                description: None,
                category: GarmentCategory::Clothing,
                price: Decimal::new(10000, 2),
                images: vec![],
                origin: origin.to_string(),
                materials: vec![],
                techniques: vec![],
                is_active: true,
                is_verified: true,
                created_at: String::new(),
            },
            brand: Brand {
                id: "brand".to_string(),
                name: "Brand".to_string(),
                description: None,
                origin: None,
                philosophy: None,
                sustainability_practices: vec![],
                website: None,
                logo_url: None,
                is_verified: true,
                created_at: String::new(),
            },
            artisan: Artisan {
                id: "artisan".to_string(),
                name: "Artisan".to_string(),
                bio: None,
                photo_url: None,
                country: origin.to_string(),
                region: None,
                craft: "Weaving".to_string(),
                years_of_experience: None,
                generation: None,
                is_verified: true,
                created_at: String::new(),
            },
            impact_metrics: metrics.map(|(water, co2, artisans)| ImpactMetrics {
                id: format!("impact-{id}"),
                garment_id: id.to_string(),
                water_saved: water,
                co2_offset: co2,
                artisans_supported: artisans,
                supply_chain_steps: vec![],
                created_at: String::new(),
            }),
            cultural_content: vec![],
            care_instructions: None,
            tag_code: None,
        }
    }

    fn stamp(id: &str, garment_id: &str) -> Stamp {
        Stamp {
            id: id.to_string(),
            user_id: "user-1".to_string(),
            garment_id: garment_id.to_string(),
            tag_code_id: None,
            unlocked_at: format!("2025-01-0{}T00:00:00.000000Z", id.len()),
            scan_location: None,
        }
    }

    fn badge(id: &str) -> Badge {
        Badge {
            id: id.to_string(),
            name: "First Steps".to_string(),
            description: None,
            icon_url: None,
            required_stamps: Some(1),
            required_countries: None,
            rarity: BadgeRarity::Common,
            created_at: String::new(),
        }
    }

    fn snapshot(
        stamps: Vec<Stamp>,
        garments: Vec<GarmentDetail>,
        user_badges: Vec<UserBadge>,
        badges: Vec<Badge>,
    ) -> PassportSnapshot {
        PassportSnapshot {
            user: user(),
            stamps,
            garments: Resolved {
                items: garments,
                unresolved: vec![],
            },
            user_badges,
            badges,
        }
    }

    #[test]
    fn zero_stamps_yield_zero_totals() {
        let passport = assemble_passport(snapshot(vec![], vec![], vec![], vec![]));

        assert!(passport.stamps.is_empty());
        assert!(passport.badges.is_empty());
        assert!(passport.unresolved.is_empty());
        assert_eq!(passport.total_impact, TotalImpact::default());
    }

    #[test]
    fn guatemala_and_morocco_stamps_sum_water_and_count_countries() {
        let passport = assemble_passport(snapshot(
            vec![stamp("stamp-1", "garment-1"), stamp("stamp-2", "garment-2")],
            vec![
                detail("garment-1", "Guatemala", Some((Some(2500.0), Some(12.0), Some(3)))),
                detail("garment-2", "Morocco", Some((Some(3200.0), Some(18.0), Some(5)))),
            ],
            vec![],
            vec![],
        ));

        assert_eq!(passport.stamps.len(), 2);
        assert_eq!(passport.total_impact.water_saved, 5700.0);
        assert_eq!(passport.total_impact.co2_offset, 30.0);
        assert_eq!(passport.total_impact.artisans_supported, 8);
        assert_eq!(passport.total_impact.countries_explored, 2);
    }

    #[test]
    fn repeated_origins_count_once() {
        let stamps = vec![stamp("a", "g1"), stamp("bb", "g2"), stamp("ccc", "g3")];
        let garments = vec![
            detail("g1", "Japan", None),
            detail("g2", "Japan", None),
            detail("g3", "India", None),
        ];

        let passport = assemble_passport(snapshot(stamps, garments, vec![], vec![]));
        assert_eq!(passport.total_impact.countries_explored, 2);
    }

    #[test]
    fn missing_metrics_contribute_zero() {
        let stamps = vec![stamp("a", "g1"), stamp("bb", "g2")];
        let garments = vec![
            detail("g1", "Japan", None),
            detail("g2", "India", Some((Some(1200.0), None, Some(60)))),
        ];

        let passport = assemble_passport(snapshot(stamps, garments, vec![], vec![]));
        assert_eq!(passport.total_impact.water_saved, 1200.0);
        assert_eq!(passport.total_impact.co2_offset, 0.0);
        assert_eq!(passport.total_impact.artisans_supported, 60);
        assert_eq!(passport.total_impact.countries_explored, 2);
    }

    #[test]
    fn unresolved_stamps_are_reported_and_excluded_from_totals() {
        let stamps = vec![stamp("a", "g1"), stamp("bb", "gone")];
        let garments = vec![detail("g1", "Guatemala", Some((Some(2500.0), None, None)))];

        let passport = assemble_passport(snapshot(stamps, garments, vec![], vec![]));

        assert_eq!(passport.stamps.len(), 1);
        assert_eq!(passport.total_impact.water_saved, 2500.0);
        assert_eq!(passport.total_impact.countries_explored, 1);
        assert_eq!(
            passport.unresolved,
            vec![UnresolvedReference {
                record: RecordKind::Stamp,
                record_id: "bb".to_string(),
                missing: RecordKind::Garment,
                missing_id: "gone".to_string(),
            }]
        );
    }

    #[test]
    fn user_badges_without_definition_are_reported() {
        let awarded = vec![
            UserBadge {
                id: "ub-1".to_string(),
                user_id: "user-1".to_string(),
                badge_id: "badge-1".to_string(),
                earned_at: String::new(),
            },
            UserBadge {
                id: "ub-2".to_string(),
                user_id: "user-1".to_string(),
                badge_id: "badge-x".to_string(),
                earned_at: String::new(),
            },
        ];

        let resolved =
            assemble_badges(&snapshot(vec![], vec![], awarded, vec![badge("badge-1")]));

        assert_eq!(resolved.items.len(), 1);
        assert_eq!(resolved.items[0].badge.id, "badge-1");
        assert_eq!(resolved.unresolved.len(), 1);
        assert_eq!(resolved.unresolved[0].record, RecordKind::UserBadge);
        assert_eq!(resolved.unresolved[0].missing_id, "badge-x");
    }

    #[test]
    fn stamps_keep_snapshot_order() {
        let stamps = vec![stamp("a", "g2"), stamp("bb", "g1")];
        let garments = vec![detail("g1", "Japan", None), detail("g2", "India", None)];

        let resolved = assemble_stamps(&snapshot(stamps, garments, vec![], vec![]));
        let ids: Vec<_> = resolved.items.iter().map(|s| s.stamp.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "bb"]);
    }
}
