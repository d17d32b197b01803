use async_trait::async_trait;
use uuid::Uuid;

use super::domain::{NewStore, Store};
use crate::errors::ServiceError;

/// Repository abstraction for store persistence.
///
/// Every lookup on behalf of a caller is scoped by `(user_id, store_id)`.
/// Writes against a missing row fail with [`ServiceError::RecordNotFound`].
#[async_trait]
pub trait StoreRepository: Send + Sync {
    async fn create(&self, input: NewStore) -> Result<Store, ServiceError>;
    async fn find_owned(&self, user_id: &str, store_id: Uuid) -> Result<Option<Store>, ServiceError>;
    /// Oldest store of the user.
    async fn find_first_by_owner(&self, user_id: &str) -> Result<Option<Store>, ServiceError>;
    /// All stores of the user in creation order.
    async fn list_by_owner(&self, user_id: &str) -> Result<Vec<Store>, ServiceError>;
    async fn rename(&self, user_id: &str, store_id: Uuid, name: &str) -> Result<Store, ServiceError>;
    /// Hard delete, returning the removed record.
    async fn delete(&self, user_id: &str, store_id: Uuid) -> Result<Store, ServiceError>;
}

/// In-memory arena used by tests and local runs without a database.
pub mod memory {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Mutex, MutexGuard};

    use chrono::Utc;

    use crate::errors::messages;

    #[derive(Default)]
    struct Arena {
        next_seq: u64,
        rows: HashMap<Uuid, (u64, Store)>, // key: store id, seq keeps insertion order
    }

    #[derive(Default)]
    pub struct InMemoryStoreRepository {
        arena: Mutex<Arena>,
    }

    impl InMemoryStoreRepository {
        pub fn new() -> Self { Self::default() }

        fn arena(&self) -> Result<MutexGuard<'_, Arena>, ServiceError> {
            self.arena.lock().map_err(|_| ServiceError::Db("store arena lock poisoned".into()))
        }
    }

    fn owned_sorted<'a>(arena: &'a Arena, user_id: &str) -> Vec<&'a (u64, Store)> {
        let mut rows: Vec<_> = arena.rows.values().filter(|(_, s)| s.user_id == user_id).collect();
        rows.sort_by_key(|(seq, _)| *seq);
        rows
    }

    #[async_trait]
    impl StoreRepository for InMemoryStoreRepository {
        async fn create(&self, input: NewStore) -> Result<Store, ServiceError> {
            let store = models::store::new_model(&input.user_id, &input.name)?;
            let mut arena = self.arena()?;
            let seq = arena.next_seq;
            arena.next_seq += 1;
            arena.rows.insert(store.id, (seq, store.clone()));
            Ok(store)
        }

        async fn find_owned(&self, user_id: &str, store_id: Uuid) -> Result<Option<Store>, ServiceError> {
            let arena = self.arena()?;
            Ok(arena
                .rows
                .get(&store_id)
                .filter(|(_, s)| s.user_id == user_id)
                .map(|(_, s)| s.clone()))
        }

        async fn find_first_by_owner(&self, user_id: &str) -> Result<Option<Store>, ServiceError> {
            let arena = self.arena()?;
            Ok(owned_sorted(&arena, user_id).first().map(|(_, s)| s.clone()))
        }

        async fn list_by_owner(&self, user_id: &str) -> Result<Vec<Store>, ServiceError> {
            let arena = self.arena()?;
            Ok(owned_sorted(&arena, user_id).into_iter().map(|(_, s)| s.clone()).collect())
        }

        async fn rename(&self, user_id: &str, store_id: Uuid, name: &str) -> Result<Store, ServiceError> {
            let mut arena = self.arena()?;
            let (_, store) = arena
                .rows
                .get_mut(&store_id)
                .filter(|(_, s)| s.user_id == user_id)
                .ok_or_else(|| ServiceError::RecordNotFound(messages::UPDATE_TARGET_MISSING.into()))?;
            store.name = name.to_string();
            store.updated_at = Utc::now().into();
            Ok(store.clone())
        }

        async fn delete(&self, user_id: &str, store_id: Uuid) -> Result<Store, ServiceError> {
            let mut arena = self.arena()?;
            let owned = arena.rows.get(&store_id).is_some_and(|(_, s)| s.user_id == user_id);
            if !owned {
                return Err(ServiceError::RecordNotFound(messages::DELETE_TARGET_MISSING.into()));
            }
            arena
                .rows
                .remove(&store_id)
                .map(|(_, s)| s)
                .ok_or_else(|| ServiceError::RecordNotFound(messages::DELETE_TARGET_MISSING.into()))
        }
    }
}
