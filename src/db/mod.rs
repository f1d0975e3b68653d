use anyhow::Result;
use chrono::SecondsFormat;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, SqlErr, Statement,
};
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::models::analytics::{AnalyticsEvent, NewAnalyticsEvent};
use crate::models::catalog::{
    Artisan, Brand, CareInstructions, CulturalContent, Garment, GarmentDetail, GarmentFilter,
    ImpactMetrics, NewArtisan, NewBrand, NewCareInstructions, NewCulturalContent, NewGarment,
    NewImpactMetrics, NewTagCode, TagCode, TagLookup,
};
use crate::models::passport::{Badge, NewBadge, NewStamp, Resolved, Stamp, UserBadge};
use crate::models::user::{NewUser, RegisteredUser, User};

pub mod migrator;
pub mod repositories;

pub use repositories::passport::PassportSnapshot;

/// Current time as an RFC 3339 string with fixed microsecond precision, so
/// lexical order matches chronological order.
#[must_use]
pub fn now_timestamp() -> String {
    chrono::Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// True when any cause in the chain is a unique-constraint violation.
#[must_use]
pub fn is_unique_violation(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause.downcast_ref::<DbErr>().is_some_and(|db| {
            matches!(db.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
        })
    })
}

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        let path_str = db_url.trim_start_matches("sqlite:");
        if !path_str.starts_with(":memory:") {
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn user_repo(&self) -> repositories::user::UserRepository {
        repositories::user::UserRepository::new(self.conn.clone())
    }

    fn brand_repo(&self) -> repositories::brand::BrandRepository {
        repositories::brand::BrandRepository::new(self.conn.clone())
    }

    fn garment_repo(&self) -> repositories::garment::GarmentRepository {
        repositories::garment::GarmentRepository::new(self.conn.clone())
    }

    fn tag_code_repo(&self) -> repositories::tag_code::TagCodeRepository {
        repositories::tag_code::TagCodeRepository::new(self.conn.clone())
    }

    fn stamp_repo(&self) -> repositories::stamp::StampRepository {
        repositories::stamp::StampRepository::new(self.conn.clone())
    }

    fn badge_repo(&self) -> repositories::badge::BadgeRepository {
        repositories::badge::BadgeRepository::new(self.conn.clone())
    }

    fn passport_repo(&self) -> repositories::passport::PassportRepository {
        repositories::passport::PassportRepository::new(self.conn.clone())
    }

    fn analytics_repo(&self) -> repositories::analytics::AnalyticsRepository {
        repositories::analytics::AnalyticsRepository::new(self.conn.clone())
    }

    // ========== Users ==========

    pub async fn get_user(&self, id: &str) -> Result<Option<User>> {
        self.user_repo().get_by_id(id).await
    }

    pub async fn user_exists(&self, id: &str) -> Result<bool> {
        self.user_repo().exists(id).await
    }

    pub async fn verify_api_key(&self, api_key: &str) -> Result<Option<User>> {
        self.user_repo().get_by_api_key(api_key).await
    }

    pub async fn create_user(&self, input: NewUser) -> Result<RegisteredUser> {
        self.user_repo().create(input).await
    }

    // ========== Brands & artisans ==========

    pub async fn list_brands(&self) -> Result<Vec<Brand>> {
        self.brand_repo().list().await
    }

    pub async fn get_brand(&self, id: &str) -> Result<Option<Brand>> {
        self.brand_repo().get(id).await
    }

    pub async fn create_brand(&self, input: NewBrand) -> Result<Brand> {
        self.brand_repo().create(input).await
    }

    pub async fn list_artisans(&self) -> Result<Vec<Artisan>> {
        self.brand_repo().list_artisans().await
    }

    pub async fn get_artisan(&self, id: &str) -> Result<Option<Artisan>> {
        self.brand_repo().get_artisan(id).await
    }

    pub async fn create_artisan(&self, input: NewArtisan) -> Result<Artisan> {
        self.brand_repo().create_artisan(input).await
    }

    // ========== Garments ==========

    pub async fn list_garments(&self, filter: &GarmentFilter) -> Result<Resolved<GarmentDetail>> {
        self.garment_repo().list(filter).await
    }

    pub async fn get_garment_detail(&self, id: &str) -> Result<Option<GarmentDetail>> {
        self.garment_repo().get_detail(id).await
    }

    pub async fn garment_exists(&self, id: &str) -> Result<bool> {
        self.garment_repo().exists(id).await
    }

    pub async fn create_garment(&self, input: NewGarment) -> Result<Garment> {
        self.garment_repo().create(input).await
    }

    pub async fn create_impact_metrics(&self, input: NewImpactMetrics) -> Result<ImpactMetrics> {
        self.garment_repo().create_impact_metrics(input).await
    }

    pub async fn create_cultural_content(
        &self,
        input: NewCulturalContent,
    ) -> Result<CulturalContent> {
        self.garment_repo().create_cultural_content(input).await
    }

    pub async fn create_care_instructions(
        &self,
        input: NewCareInstructions,
    ) -> Result<CareInstructions> {
        self.garment_repo().create_care_instructions(input).await
    }

    // ========== Tag codes ==========

    pub async fn find_active_tag(&self, lookup: &TagLookup) -> Result<Option<TagCode>> {
        self.tag_code_repo().find_active(lookup).await
    }

    pub async fn get_tag_code(&self, id: &str) -> Result<Option<TagCode>> {
        self.tag_code_repo().get(id).await
    }

    pub async fn find_taken_tag_values(
        &self,
        input: &NewTagCode,
    ) -> Result<Vec<(&'static str, String)>> {
        self.tag_code_repo().find_taken(input).await
    }

    pub async fn create_tag_code(&self, input: NewTagCode) -> Result<TagCode> {
        self.tag_code_repo().create(input).await
    }

    // ========== Stamps, badges & passports ==========

    pub async fn list_stamps_for_user(&self, user_id: &str) -> Result<Vec<Stamp>> {
        self.stamp_repo().list_for_user(user_id).await
    }

    pub async fn stamp_exists(&self, user_id: &str, garment_id: &str) -> Result<bool> {
        self.stamp_repo().exists_for(user_id, garment_id).await
    }

    pub async fn create_stamp(&self, input: NewStamp) -> Result<Stamp> {
        self.stamp_repo().create(input).await
    }

    pub async fn list_badges(&self) -> Result<Vec<Badge>> {
        self.badge_repo().list().await
    }

    pub async fn get_badge(&self, id: &str) -> Result<Option<Badge>> {
        self.badge_repo().get(id).await
    }

    pub async fn create_badge(&self, input: NewBadge) -> Result<Badge> {
        self.badge_repo().create(input).await
    }

    pub async fn badge_awarded(&self, user_id: &str, badge_id: &str) -> Result<bool> {
        self.badge_repo().is_awarded(user_id, badge_id).await
    }

    pub async fn award_badge(&self, user_id: &str, badge_id: &str) -> Result<UserBadge> {
        self.badge_repo().award(user_id, badge_id).await
    }

    pub async fn load_passport_snapshot(&self, user_id: &str) -> Result<Option<PassportSnapshot>> {
        self.passport_repo().load_snapshot(user_id).await
    }

    // ========== Analytics ==========

    pub async fn record_event(&self, input: NewAnalyticsEvent) -> Result<AnalyticsEvent> {
        self.analytics_repo().record(input).await
    }

    pub async fn list_garment_events(&self, garment_id: &str) -> Result<Vec<AnalyticsEvent>> {
        self.analytics_repo().list_for_garment(garment_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_sort_lexically_in_time_order() {
        let a = now_timestamp();
        std::thread::sleep(Duration::from_millis(2));
        let b = now_timestamp();

        assert!(a < b);
        assert!(a.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&a).is_ok());
    }

    #[test]
    fn plain_errors_are_not_unique_violations() {
        let err = anyhow::anyhow!("boom");
        assert!(!is_unique_violation(&err));

        let err = anyhow::Error::new(DbErr::RecordNotFound("x".to_string()));
        assert!(!is_unique_violation(&err));
    }
}
