use std::sync::Arc;

use rackline_infra::{
    CatalogService, InMemoryWarehouseStore, LayoutService, Ledger, LedgerConfig, Reporting,
};

/// Store shared by every service of one process.
pub type SharedStore = Arc<InMemoryWarehouseStore>;

/// Services handed to every handler via `Extension<Arc<AppServices>>`.
#[derive(Debug, Clone)]
pub struct AppServices {
    pub layout: LayoutService<SharedStore>,
    pub catalog: CatalogService<SharedStore>,
    pub ledger: Ledger<SharedStore>,
    pub reporting: Reporting<SharedStore>,
}

pub fn build_services(config: LedgerConfig) -> AppServices {
    build_services_on(Arc::new(InMemoryWarehouseStore::new()), config)
}

pub fn build_services_on(store: SharedStore, config: LedgerConfig) -> AppServices {
    AppServices {
        layout: LayoutService::new(store.clone()),
        catalog: CatalogService::new(store.clone()),
        ledger: Ledger::new(store.clone(), config),
        reporting: Reporting::new(store),
    }
}
