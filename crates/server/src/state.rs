use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::billboard::repo::seaorm::SeaOrmBillboardRepository;
use service::billboard::repository::{memory::InMemoryBillboardRepository, BillboardRepository};
use service::health::{AlwaysUp, DatabaseProbe, SeaOrmProbe};
use service::store::repo::seaorm::SeaOrmStoreRepository;
use service::store::repository::{memory::InMemoryStoreRepository, StoreRepository};
use service::{BillboardService, StoreService, UserService};

pub type Users = UserService<dyn StoreRepository>;
pub type Billboards = BillboardService<dyn BillboardRepository, dyn StoreRepository>;

/// Shared handler state; services are wired once at startup.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<Users>,
    pub billboards: Arc<Billboards>,
    pub probe: Arc<dyn DatabaseProbe>,
}

impl AppState {
    pub fn new(
        stores: Arc<dyn StoreRepository>,
        billboards: Arc<dyn BillboardRepository>,
        probe: Arc<dyn DatabaseProbe>,
    ) -> Self {
        let store_service: Arc<StoreService<dyn StoreRepository>> = Arc::new(StoreService::new(stores));
        Self {
            users: Arc::new(UserService::new(Arc::clone(&store_service))),
            billboards: Arc::new(BillboardService::new(billboards, store_service)),
            probe,
        }
    }

    /// Postgres-backed state.
    pub fn from_db(db: DatabaseConnection) -> Self {
        Self::new(
            Arc::new(SeaOrmStoreRepository::new(db.clone())),
            Arc::new(SeaOrmBillboardRepository::new(db.clone())),
            Arc::new(SeaOrmProbe::new(db)),
        )
    }

    /// Process-local state; data is lost on exit.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryStoreRepository::new()),
            Arc::new(InMemoryBillboardRepository::new()),
            Arc::new(AlwaysUp),
        )
    }
}
