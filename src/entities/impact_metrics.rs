use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "impact_metrics")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub garment_id: String,
    /// Liters.
    pub water_saved: Option<f64>,
    /// Kilograms.
    pub co2_offset: Option<f64>,
    pub artisans_supported: Option<i32>,
    /// JSON array of `{step, title, location, date, description}`.
    pub supply_chain_steps: Option<String>,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::garments::Entity",
        from = "Column::GarmentId",
        to = "super::garments::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Garments,
}

impl Related<super::garments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Garments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
