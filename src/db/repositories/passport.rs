use std::collections::HashSet;

use anyhow::{Context, Result};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::entities::{badges, garments, stamps, user_badges, users};
use crate::models::catalog::GarmentDetail;
use crate::models::passport::{Badge, Resolved, Stamp, UserBadge};
use crate::models::user::User;

/// Everything a passport is assembled from, read at a single point in time.
#[derive(Debug, Clone)]
pub struct PassportSnapshot {
    pub user: User,
    /// Oldest unlock first.
    pub stamps: Vec<Stamp>,
    /// Detail for each distinct stamped garment that could be joined.
    pub garments: Resolved<GarmentDetail>,
    pub user_badges: Vec<UserBadge>,
    pub badges: Vec<Badge>,
}

pub struct PassportRepository {
    conn: DatabaseConnection,
}

impl PassportRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Load a user's passport inputs inside one transaction.
    ///
    /// Returns `None` when the user does not exist. Related rows are fetched
    /// with one `IN (...)` query per table.
    pub async fn load_snapshot(&self, user_id: &str) -> Result<Option<PassportSnapshot>> {
        let txn = self
            .conn
            .begin()
            .await
            .context("Failed to open passport read transaction")?;

        let Some(user) = users::Entity::find_by_id(user_id)
            .one(&txn)
            .await
            .context("Failed to query passport user")?
        else {
            txn.rollback().await.ok();
            return Ok(None);
        };

        let stamps: Vec<Stamp> = stamps::Entity::find()
            .filter(stamps::Column::UserId.eq(user_id))
            .order_by_asc(stamps::Column::UnlockedAt)
            .order_by_asc(stamps::Column::Id)
            .all(&txn)
            .await
            .context("Failed to load stamps for passport")?
            .into_iter()
            .map(Stamp::from)
            .collect();

        let garment_ids: Vec<String> = stamps
            .iter()
            .map(|s| s.garment_id.as_str())
            .collect::<HashSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect();

        let garment_rows = if garment_ids.is_empty() {
            Vec::new()
        } else {
            garments::Entity::find()
                .filter(garments::Column::Id.is_in(garment_ids))
                .all(&txn)
                .await
                .context("Failed to load stamped garments")?
        };
        let garments = super::garment::load_details(&txn, garment_rows).await?;

        let user_badges: Vec<UserBadge> = user_badges::Entity::find()
            .filter(user_badges::Column::UserId.eq(user_id))
            .order_by_asc(user_badges::Column::EarnedAt)
            .order_by_asc(user_badges::Column::Id)
            .all(&txn)
            .await
            .context("Failed to load user badges for passport")?
            .into_iter()
            .map(UserBadge::from)
            .collect();

        let badge_ids: Vec<String> = user_badges
            .iter()
            .map(|ub| ub.badge_id.as_str())
            .collect::<HashSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect();

        let badges: Vec<Badge> = if badge_ids.is_empty() {
            Vec::new()
        } else {
            badges::Entity::find()
                .filter(badges::Column::Id.is_in(badge_ids))
                .all(&txn)
                .await
                .context("Failed to load badge definitions for passport")?
                .into_iter()
                .map(Badge::from)
                .collect()
        };

        txn.commit()
            .await
            .context("Failed to close passport read transaction")?;

        Ok(Some(PassportSnapshot {
            user: User::from(user),
            stamps,
            garments,
            user_badges,
            badges,
        }))
    }
}
