pub mod analytics;
pub mod badge;
pub mod brand;
pub mod garment;
pub mod passport;
pub mod stamp;
pub mod tag_code;
pub mod user;
