use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "stamps")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub garment_id: String,
    pub tag_code_id: Option<String>,
    pub unlocked_at: String,
    pub scan_location: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Users,
    #[sea_orm(
        belongs_to = "super::garments::Entity",
        from = "Column::GarmentId",
        to = "super::garments::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Garments,
    #[sea_orm(
        belongs_to = "super::tag_codes::Entity",
        from = "Column::TagCodeId",
        to = "super::tag_codes::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    TagCodes,
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

impl Related<super::tag_codes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TagCodes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
