pub mod catalog_service;
pub use catalog_service::{CatalogError, CatalogService};

pub mod catalog_service_impl;
pub use catalog_service_impl::SeaOrmCatalogService;

pub mod passport_service;
pub use passport_service::{PassportError, PassportService};

pub mod passport_service_impl;
pub use passport_service_impl::SeaOrmPassportService;

pub mod scan_service;
pub use scan_service::{ScanError, ScanService};

pub mod scan_service_impl;
pub use scan_service_impl::SeaOrmScanService;

pub mod user_service;
pub use user_service::{UserError, UserService};

pub mod user_service_impl;
pub use user_service_impl::SeaOrmUserService;
