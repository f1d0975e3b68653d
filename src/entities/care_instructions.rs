use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "care_instructions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub garment_id: String,
    pub washing_instructions: Option<String>,
    pub materials: Option<String>,
    pub special_care: Option<String>,
    pub repair_guidance: Option<String>,
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
