use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::db::Store;
use crate::services::{
    CatalogService, PassportService, ScanService, SeaOrmCatalogService, SeaOrmPassportService,
    SeaOrmScanService, SeaOrmUserService, UserService,
};

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<RwLock<Config>>,

    pub store: Store,

    pub user_service: Arc<dyn UserService>,

    pub catalog_service: Arc<dyn CatalogService>,

    pub passport_service: Arc<dyn PassportService>,

    pub scan_service: Arc<dyn ScanService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        if config.seed.seed_demo_data {
            crate::seed::seed_demo_data(&store).await?;
        }

        Ok(Self::with_store(config, store))
    }

    #[must_use]
    pub fn with_store(config: Config, store: Store) -> Self {
        let user_service = Arc::new(SeaOrmUserService::new(store.clone())) as Arc<dyn UserService>;
        let catalog_service =
            Arc::new(SeaOrmCatalogService::new(store.clone())) as Arc<dyn CatalogService>;
        let passport_service =
            Arc::new(SeaOrmPassportService::new(store.clone())) as Arc<dyn PassportService>;
        let scan_service = Arc::new(SeaOrmScanService::new(store.clone())) as Arc<dyn ScanService>;

        Self {
            config: Arc::new(RwLock::new(config)),
            store,
            user_service,
            catalog_service,
            passport_service,
            scan_service,
        }
    }
}
