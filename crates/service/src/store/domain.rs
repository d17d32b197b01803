use serde::{Deserialize, Serialize};

pub type Store = models::store::Model;

/// Creation input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewStore {
    pub user_id: String,
    pub name: String,
}

/// `{ "deleted": { "store": … } }`
#[derive(Debug, Clone, Serialize)]
pub struct StoreDeletion {
    pub deleted: DeletedStore,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeletedStore {
    pub store: Store,
}

impl From<Store> for StoreDeletion {
    fn from(store: Store) -> Self { Self { deleted: DeletedStore { store } } }
}
