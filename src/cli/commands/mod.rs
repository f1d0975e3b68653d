mod garments;
mod passport;
mod scan;
mod seed;
mod user;

pub use garments::cmd_list_garments;
pub use passport::cmd_passport;
pub use scan::cmd_scan;
pub use seed::cmd_seed;
pub use user::cmd_create_user;
