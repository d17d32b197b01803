use std::sync::Arc;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::store::domain::{NewStore, Store, StoreDeletion};
use crate::store::repository::StoreRepository;
use crate::store::StoreService;

/// Per-user entry point to store operations. The user id comes from the request path.
pub struct UserService<R: StoreRepository + ?Sized> {
    stores: Arc<StoreService<R>>,
}

impl<R: StoreRepository + ?Sized> UserService<R> {
    pub fn new(stores: Arc<StoreService<R>>) -> Self { Self { stores } }

    /// Shared store service, also used by the billboard owner check.
    pub fn stores(&self) -> Arc<StoreService<R>> { Arc::clone(&self.stores) }

    pub async fn create_store(&self, user_id: &str, name: &str) -> Result<Store, ServiceError> {
        self.stores.create(NewStore { user_id: user_id.to_string(), name: name.to_string() }).await
    }

    pub async fn get_store(&self, user_id: &str, store_id: Uuid) -> Result<Store, ServiceError> {
        self.stores.get(user_id, store_id).await
    }

    pub async fn get_store_by_user_id(&self, user_id: &str) -> Result<Store, ServiceError> {
        self.stores.get_by_user_id(user_id).await
    }

    pub async fn get_all_user_stores(&self, user_id: &str) -> Result<Vec<Store>, ServiceError> {
        self.stores.get_all_user_stores(user_id).await
    }

    pub async fn update_store(&self, user_id: &str, store_id: Uuid, name: &str) -> Result<Store, ServiceError> {
        self.stores.update(user_id, store_id, name).await
    }

    pub async fn delete_store(&self, user_id: &str, store_id: Uuid) -> Result<StoreDeletion, ServiceError> {
        self.stores.delete(user_id, store_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::messages;
    use crate::store::repository::memory::InMemoryStoreRepository;

    fn users() -> UserService<InMemoryStoreRepository> {
        UserService::new(Arc::new(StoreService::new(Arc::new(InMemoryStoreRepository::new()))))
    }

    #[tokio::test]
    async fn store_lifecycle_through_user_facade() {
        let users = users();
        let created = users.create_store("user_1", "store1").await.unwrap();
        assert_eq!(users.get_store("user_1", created.id).await.unwrap(), created);
        assert_eq!(users.get_store_by_user_id("user_1").await.unwrap().id, created.id);

        let renamed = users.update_store("user_1", created.id, "store2").await.unwrap();
        assert_eq!(renamed.name, "store2");
        assert_eq!(users.get_all_user_stores("user_1").await.unwrap().len(), 1);

        let deleted = users.delete_store("user_1", created.id).await.unwrap();
        assert_eq!(deleted.deleted.store.id, created.id);
        match users.get_all_user_stores("user_1").await {
            Err(ServiceError::NotFound(m)) => assert_eq!(m, messages::STORES_NOT_FOUND),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[tokio::test]
    async fn facade_shares_its_store_service() {
        let users = users();
        let created = users.create_store("user_1", "s").await.unwrap();
        let stores = users.stores();
        assert!(stores.authorize("user_1", created.id).await.is_ok());
    }
}
