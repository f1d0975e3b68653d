pub mod prelude;

pub mod analytics_events;
pub mod artisans;
pub mod badges;
pub mod brands;
pub mod care_instructions;
pub mod cultural_content;
pub mod garments;
pub mod impact_metrics;
pub mod stamps;
pub mod tag_codes;
pub mod user_badges;
pub mod users;
