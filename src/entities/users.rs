use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    #[sea_orm(unique)]
    pub email: Option<String>,

    pub name: String,

    pub avatar_url: Option<String>,

    /// `shopper` or `brand`
    pub role: String,

    /// `silver`, `gold` or `platinum`
    pub membership_tier: String,

    /// Random API key (64-char hex string)
    #[sea_orm(unique)]
    pub api_key: String,

    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
