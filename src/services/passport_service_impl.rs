//! `SeaORM` implementation of the `PassportService` trait.

use async_trait::async_trait;
use serde_json::json;
use tracing::{info, warn};

use crate::db::{Store, is_unique_violation};
use crate::models::analytics::{AnalyticsAction, NewAnalyticsEvent};
use crate::models::passport::{
    Badge, NewBadge, NewStamp, Passport, Resolved, Stamp, StampWithGarment, UserBadge,
    UserBadgeWithBadge,
};
use crate::services::passport_service::{
    PassportError, PassportService, assemble_badges, assemble_passport, assemble_stamps,
};

pub struct SeaOrmPassportService {
    store: Store,
}

impl SeaOrmPassportService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    async fn snapshot(&self, user_id: &str) -> Result<crate::db::PassportSnapshot, PassportError> {
        self.store
            .load_passport_snapshot(user_id)
            .await?
            .ok_or_else(|| PassportError::UserNotFound(user_id.to_string()))
    }
}

#[async_trait]
impl PassportService for SeaOrmPassportService {
    async fn get_user_passport(&self, user_id: &str) -> Result<Passport, PassportError> {
        let snapshot = self.snapshot(user_id).await?;
        Ok(assemble_passport(snapshot))
    }

    async fn get_user_stamps(
        &self,
        user_id: &str,
    ) -> Result<Resolved<StampWithGarment>, PassportError> {
        let snapshot = self.snapshot(user_id).await?;
        Ok(assemble_stamps(&snapshot))
    }

    async fn get_user_badges(
        &self,
        user_id: &str,
    ) -> Result<Resolved<UserBadgeWithBadge>, PassportError> {
        let snapshot = self.snapshot(user_id).await?;
        Ok(assemble_badges(&snapshot))
    }

    async fn create_stamp(
        &self,
        caller_id: &str,
        input: NewStamp,
    ) -> Result<Stamp, PassportError> {
        if caller_id != input.user_id {
            return Err(PassportError::Forbidden(
                "Stamps can only be added to your own passport".to_string(),
            ));
        }

        if !self.store.user_exists(&input.user_id).await? {
            return Err(PassportError::UserNotFound(input.user_id));
        }
        if !self.store.garment_exists(&input.garment_id).await? {
            return Err(PassportError::GarmentNotFound(input.garment_id));
        }
        if let Some(tag_id) = &input.tag_code_id {
            let tag = self
                .store
                .get_tag_code(tag_id)
                .await?
                .ok_or_else(|| PassportError::TagCodeNotFound(tag_id.clone()))?;
            if tag.garment_id != input.garment_id {
                return Err(PassportError::Validation(format!(
                    "Tag code {tag_id} does not belong to garment {}",
                    input.garment_id
                )));
            }
        }
        if self
            .store
            .stamp_exists(&input.user_id, &input.garment_id)
            .await?
        {
            return Err(PassportError::AlreadyStamped {
                user_id: input.user_id,
                garment_id: input.garment_id,
            });
        }

        let user_id = input.user_id.clone();
        let garment_id = input.garment_id.clone();
        let stamp = match self.store.create_stamp(input).await {
            Ok(stamp) => stamp,
            // Lost a race with a concurrent insert of the same pair.
            Err(e) if is_unique_violation(&e) => {
                return Err(PassportError::AlreadyStamped {
                    user_id,
                    garment_id,
                });
            }
            Err(e) => return Err(e.into()),
        };

        info!(user_id = %stamp.user_id, garment_id = %stamp.garment_id, "Stamp unlocked");

        let event = NewAnalyticsEvent {
            user_id: Some(stamp.user_id.clone()),
            garment_id: Some(stamp.garment_id.clone()),
            action: AnalyticsAction::ViewPassport,
            metadata: Some(json!({ "stampId": stamp.id })),
        };
        if let Err(e) = self.store.record_event(event).await {
            warn!(error = %e, stamp_id = %stamp.id, "Failed to record stamp analytics event");
        }

        Ok(stamp)
    }

    async fn list_badges(&self) -> Result<Vec<Badge>, PassportError> {
        Ok(self.store.list_badges().await?)
    }

    async fn create_badge(&self, input: NewBadge) -> Result<Badge, PassportError> {
        let badge = self.store.create_badge(input).await?;
        info!(badge_id = %badge.id, name = %badge.name, "Badge defined");
        Ok(badge)
    }

    async fn award_badge(
        &self,
        user_id: &str,
        badge_id: &str,
    ) -> Result<UserBadge, PassportError> {
        if !self.store.user_exists(user_id).await? {
            return Err(PassportError::UserNotFound(user_id.to_string()));
        }
        if self.store.get_badge(badge_id).await?.is_none() {
            return Err(PassportError::BadgeNotFound(badge_id.to_string()));
        }

        let already = || PassportError::AlreadyAwarded {
            user_id: user_id.to_string(),
            badge_id: badge_id.to_string(),
        };

        if self.store.badge_awarded(user_id, badge_id).await? {
            return Err(already());
        }

        match self.store.award_badge(user_id, badge_id).await {
            Ok(awarded) => {
                info!(user_id, badge_id, "Badge awarded");
                Ok(awarded)
            }
            Err(e) if is_unique_violation(&e) => Err(already()),
            Err(e) => Err(e.into()),
        }
    }
}
