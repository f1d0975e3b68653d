use anyhow::{Context, Result};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::entities::tag_codes;
use crate::models::catalog::{NewTagCode, TagCode, TagLookup};

impl From<tag_codes::Model> for TagCode {
    fn from(model: tag_codes::Model) -> Self {
        Self {
            id: model.id,
            garment_id: model.garment_id,
            code: model.code,
            nfc_uid: model.nfc_uid,
            qr_code: model.qr_code,
            is_active: model.is_active,
            created_at: model.created_at,
        }
    }
}

pub struct TagCodeRepository {
    conn: DatabaseConnection,
}

impl TagCodeRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Find the active tag matching a scanned value. Inactive tags never match.
    pub async fn find_active(&self, lookup: &TagLookup) -> Result<Option<TagCode>> {
        let column = match lookup {
            TagLookup::Code(_) => tag_codes::Column::Code,
            TagLookup::Nfc(_) => tag_codes::Column::NfcUid,
            TagLookup::Qr(_) => tag_codes::Column::QrCode,
        };

        let row = tag_codes::Entity::find()
            .filter(column.eq(lookup.value()))
            .filter(tag_codes::Column::IsActive.eq(true))
            .one(&self.conn)
            .await
            .with_context(|| format!("Failed to look up tag by {}", lookup.scan_type()))?;

        Ok(row.map(TagCode::from))
    }

    pub async fn get(&self, id: &str) -> Result<Option<TagCode>> {
        let row = tag_codes::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query tag code")?;

        Ok(row.map(TagCode::from))
    }

    /// Values already taken by another tag, as `(field, value)` pairs.
    pub async fn find_taken(&self, input: &NewTagCode) -> Result<Vec<(&'static str, String)>> {
        let mut taken = Vec::new();

        let candidates = [
            ("code", tag_codes::Column::Code, Some(input.code.as_str())),
            ("nfcUid", tag_codes::Column::NfcUid, input.nfc_uid.as_deref()),
            ("qrCode", tag_codes::Column::QrCode, input.qr_code.as_deref()),
        ];

        for (field, column, value) in candidates {
            let Some(value) = value else { continue };
            let existing = tag_codes::Entity::find()
                .filter(column.eq(value))
                .one(&self.conn)
                .await
                .context("Failed to check tag code uniqueness")?;
            if existing.is_some() {
                taken.push((field, value.to_string()));
            }
        }

        Ok(taken)
    }

    pub async fn create(&self, input: NewTagCode) -> Result<TagCode> {
        let active = tag_codes::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            garment_id: Set(input.garment_id),
            code: Set(input.code),
            nfc_uid: Set(input.nfc_uid),
            qr_code: Set(input.qr_code),
            is_active: Set(input.is_active),
            created_at: Set(crate::db::now_timestamp()),
        };

        let model = active
            .insert(&self.conn)
            .await
            .context("Failed to insert tag code")?;

        Ok(TagCode::from(model))
    }
}
