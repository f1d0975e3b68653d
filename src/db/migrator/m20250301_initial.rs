use crate::entities::prelude::*;
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::Schema;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();
        let schema = Schema::new(backend);

        // Parents before children so foreign keys resolve.
        let tables = [
            schema.create_table_from_entity(Users),
            schema.create_table_from_entity(Brands),
            schema.create_table_from_entity(Artisans),
            schema.create_table_from_entity(Garments),
            schema.create_table_from_entity(TagCodes),
            schema.create_table_from_entity(ImpactMetrics),
            schema.create_table_from_entity(CulturalContent),
            schema.create_table_from_entity(CareInstructions),
            schema.create_table_from_entity(Stamps),
            schema.create_table_from_entity(Badges),
            schema.create_table_from_entity(UserBadges),
            schema.create_table_from_entity(AnalyticsEvents),
        ];

        for mut table in tables {
            manager
                .create_table(table.if_not_exists().to_owned())
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AnalyticsEvents).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UserBadges).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Badges).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Stamps).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CareInstructions).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CulturalContent).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ImpactMetrics).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TagCodes).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Garments).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Artisans).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Brands).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users).to_owned())
            .await?;

        Ok(())
    }
}
