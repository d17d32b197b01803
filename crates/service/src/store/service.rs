use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use super::domain::{NewStore, Store, StoreDeletion};
use super::repository::StoreRepository;
use crate::errors::{messages, ServiceError};

/// Application service owning the store lifecycle rules.
/// Ownership-scoped lookups raise not-found when absent.
pub struct StoreService<R: StoreRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: StoreRepository + ?Sized> StoreService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Create a store. Names are not unique.
    ///
    /// # Examples
    /// ```
    /// use service::store::{StoreService, domain::NewStore, repository::memory::InMemoryStoreRepository};
    /// use std::sync::Arc;
    /// let svc = StoreService::new(Arc::new(InMemoryStoreRepository::new()));
    /// let store = tokio_test::block_on(svc.create(NewStore { user_id: "user_1".into(), name: "store1".into() })).unwrap();
    /// assert_eq!(store.name, "store1");
    /// ```
    #[instrument(skip(self, input), fields(user_id = %input.user_id))]
    pub async fn create(&self, input: NewStore) -> Result<Store, ServiceError> {
        models::store::validate_name(&input.name)?;
        let store = self.repo.create(input).await?;
        info!(store_id = %store.id, "store_created");
        Ok(store)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, user_id: &str, store_id: Uuid) -> Result<Store, ServiceError> {
        self.repo
            .find_owned(user_id, store_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Store"))
    }

    /// First store of the user.
    #[instrument(skip(self))]
    pub async fn get_by_user_id(&self, user_id: &str) -> Result<Store, ServiceError> {
        self.repo
            .find_first_by_owner(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Store"))
    }

    /// An empty result is reported as not-found rather than an empty list.
    #[instrument(skip(self))]
    pub async fn get_all_user_stores(&self, user_id: &str) -> Result<Vec<Store>, ServiceError> {
        let stores = self.repo.list_by_owner(user_id).await?;
        if stores.is_empty() {
            return Err(ServiceError::NotFound(messages::STORES_NOT_FOUND.into()));
        }
        Ok(stores)
    }

    #[instrument(skip(self, name))]
    pub async fn update(&self, user_id: &str, store_id: Uuid, name: &str) -> Result<Store, ServiceError> {
        models::store::validate_name(name)?;
        self.get(user_id, store_id).await?;
        let store = self.repo.rename(user_id, store_id, name).await.map_err(|e| match e {
            ServiceError::RecordNotFound(_) => ServiceError::not_found("Store"),
            other => other,
        })?;
        info!(store_id = %store.id, "store_updated");
        Ok(store)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: &str, store_id: Uuid) -> Result<StoreDeletion, ServiceError> {
        let store = self.repo.delete(user_id, store_id).await.map_err(|e| match e {
            ServiceError::RecordNotFound(cause) => ServiceError::NotFound(cause),
            other => other,
        })?;
        info!(store_id = %store.id, "store_deleted");
        Ok(store.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::repository::memory::InMemoryStoreRepository;

    fn svc() -> StoreService<InMemoryStoreRepository> {
        StoreService::new(Arc::new(InMemoryStoreRepository::new()))
    }

    fn new_store(user_id: &str, name: &str) -> NewStore {
        NewStore { user_id: user_id.into(), name: name.into() }
    }

    fn assert_not_found(res: Result<impl std::fmt::Debug, ServiceError>, expected: &str) {
        match res {
            Err(ServiceError::NotFound(m)) => assert_eq!(m, expected),
            other => panic!("expected NotFound({expected}), got {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_then_get_returns_input_plus_generated_fields() {
        let svc = svc();
        let created = svc.create(new_store("u1", "store1")).await.unwrap();
        assert_eq!(created.name, "store1");
        assert_eq!(created.user_id, "u1");
        assert_eq!(created.created_at, created.updated_at);

        let found = svc.get("u1", created.id).await.unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn create_rejects_blank_name() {
        let svc = svc();
        let res = svc.create(new_store("u1", "  ")).await;
        assert!(matches!(res, Err(ServiceError::Model(models::errors::ModelError::Validation(_)))));
    }

    #[tokio::test]
    async fn names_are_not_unique() {
        let svc = svc();
        let a = svc.create(new_store("u1", "same")).await.unwrap();
        let b = svc.create(new_store("u1", "same")).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn get_is_scoped_to_owner() {
        let svc = svc();
        let created = svc.create(new_store("owner", "store1")).await.unwrap();
        assert_not_found(svc.get("someone_else", created.id).await, messages::STORE_NOT_FOUND);
        assert_not_found(svc.get("owner", Uuid::new_v4()).await, messages::STORE_NOT_FOUND);
    }

    #[tokio::test]
    async fn get_by_user_id_returns_first_store() {
        let svc = svc();
        assert_not_found(svc.get_by_user_id("u1").await, messages::STORE_NOT_FOUND);
        let first = svc.create(new_store("u1", "first")).await.unwrap();
        svc.create(new_store("u1", "second")).await.unwrap();
        assert_eq!(svc.get_by_user_id("u1").await.unwrap().id, first.id);
    }

    #[tokio::test]
    async fn get_all_user_stores_is_not_found_iff_empty() {
        let svc = svc();
        assert_not_found(svc.get_all_user_stores("u1").await, messages::STORES_NOT_FOUND);

        let a = svc.create(new_store("u1", "a")).await.unwrap();
        let b = svc.create(new_store("u1", "b")).await.unwrap();
        svc.create(new_store("u2", "other")).await.unwrap();

        let ids: Vec<Uuid> = svc.get_all_user_stores("u1").await.unwrap().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![a.id, b.id]);
    }

    #[tokio::test]
    async fn update_renames_and_touches_updated_at() {
        let svc = svc();
        let created = svc.create(new_store("u1", "old")).await.unwrap();
        let updated = svc.update("u1", created.id, "new").await.unwrap();
        assert_eq!(updated.name, "new");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(svc.get("u1", created.id).await.unwrap().name, "new");
    }

    #[tokio::test]
    async fn update_missing_store_is_not_found() {
        let svc = svc();
        assert_not_found(svc.update("u1", Uuid::new_v4(), "name").await, messages::STORE_NOT_FOUND);

        let created = svc.create(new_store("owner", "old")).await.unwrap();
        assert_not_found(svc.update("intruder", created.id, "hijack").await, messages::STORE_NOT_FOUND);
        assert_eq!(svc.get("owner", created.id).await.unwrap().name, "old");
    }

    #[tokio::test]
    async fn delete_returns_envelope_and_removes_store() {
        let svc = svc();
        let created = svc.create(new_store("u1", "doomed")).await.unwrap();
        let deletion = svc.delete("u1", created.id).await.unwrap();
        assert_eq!(deletion.deleted.store, created);

        assert_not_found(svc.get("u1", created.id).await, messages::STORE_NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_missing_store_uses_storage_cause() {
        let svc = svc();
        assert_not_found(svc.delete("u1", Uuid::new_v4()).await, messages::DELETE_TARGET_MISSING);

        let created = svc.create(new_store("owner", "kept")).await.unwrap();
        assert_not_found(svc.delete("intruder", created.id).await, messages::DELETE_TARGET_MISSING);
        assert!(svc.get("owner", created.id).await.is_ok());
    }
}
