use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "artisans")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub country: String,
    pub region: Option<String>,
    pub craft: String,
    pub years_of_experience: Option<i32>,
    pub generation: Option<i32>,
    pub is_verified: bool,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
