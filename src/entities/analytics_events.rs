use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "analytics_events")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: Option<String>,
    pub garment_id: Option<String>,
    pub action: String,
    /// Free-form JSON object.
    pub metadata: Option<String>,
    pub recorded_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Users,
    #[sea_orm(
        belongs_to = "super::garments::Entity",
        from = "Column::GarmentId",
        to = "super::garments::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Garments,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::garments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Garments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
