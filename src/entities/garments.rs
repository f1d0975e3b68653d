use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "garments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub brand_id: String,
    pub artisan_id: String,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    /// Decimal with two fractional digits, stored as text.
    pub price: String,
    /// JSON array of image URLs.
    pub images: Option<String>,
    pub origin: String,
    pub materials: Option<String>,
    pub techniques: Option<String>,
    pub is_active: bool,
    pub is_verified: bool,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::brands::Entity",
        from = "Column::BrandId",
        to = "super::brands::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Brands,
    #[sea_orm(
        belongs_to = "super::artisans::Entity",
        from = "Column::ArtisanId",
        to = "super::artisans::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Artisans,
}

impl Related<super::brands::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Brands.def()
    }
}

impl Related<super::artisans::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Artisans.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
