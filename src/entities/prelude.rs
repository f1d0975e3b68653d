pub use super::analytics_events::Entity as AnalyticsEvents;
pub use super::artisans::Entity as Artisans;
pub use super::badges::Entity as Badges;
pub use super::brands::Entity as Brands;
pub use super::care_instructions::Entity as CareInstructions;
pub use super::cultural_content::Entity as CulturalContent;
pub use super::garments::Entity as Garments;
pub use super::impact_metrics::Entity as ImpactMetrics;
pub use super::stamps::Entity as Stamps;
pub use super::tag_codes::Entity as TagCodes;
pub use super::user_badges::Entity as UserBadges;
pub use super::users::Entity as Users;
