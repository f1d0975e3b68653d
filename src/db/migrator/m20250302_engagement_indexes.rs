use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();

        // One stamp per (user, garment) and one award per (user, badge).
        conn.execute_unprepared(
            "CREATE UNIQUE INDEX IF NOT EXISTS idx_stamps_user_garment ON stamps(user_id, garment_id)",
        )
        .await?;

        conn.execute_unprepared(
            "CREATE UNIQUE INDEX IF NOT EXISTS idx_user_badges_user_badge ON user_badges(user_id, badge_id)",
        )
        .await?;

        conn.execute_unprepared(
            "CREATE INDEX IF NOT EXISTS idx_garments_category ON garments(category)",
        )
        .await?;

        conn.execute_unprepared(
            "CREATE INDEX IF NOT EXISTS idx_cultural_content_garment ON cultural_content(garment_id)",
        )
        .await?;

        conn.execute_unprepared(
            "CREATE INDEX IF NOT EXISTS idx_analytics_events_garment ON analytics_events(garment_id)",
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();

        for index in [
            "idx_analytics_events_garment",
            "idx_cultural_content_garment",
            "idx_garments_category",
            "idx_user_badges_user_badge",
            "idx_stamps_user_garment",
        ] {
            conn.execute_unprepared(&format!("DROP INDEX IF EXISTS {index}"))
                .await?;
        }

        Ok(())
    }
}
