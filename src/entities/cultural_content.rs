use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cultural_content")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub garment_id: String,
    pub content_type: String,
    pub title: String,
    pub content: String,
    pub images: Option<String>,
    pub is_ai_generated: bool,
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
