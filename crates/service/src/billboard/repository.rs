use async_trait::async_trait;
use uuid::Uuid;

use super::domain::{Billboard, BillboardChanges, NewBillboard};
use crate::errors::ServiceError;

/// Repository abstraction for billboard persistence. Lookups are scoped by store.
#[async_trait]
pub trait BillboardRepository: Send + Sync {
    async fn create(&self, input: NewBillboard) -> Result<Billboard, ServiceError>;
    /// All billboards of the store in creation order.
    async fn list_by_store(&self, store_id: Uuid) -> Result<Vec<Billboard>, ServiceError>;
    async fn get(&self, store_id: Uuid, id: Uuid) -> Result<Option<Billboard>, ServiceError>;
    async fn update(&self, store_id: Uuid, id: Uuid, changes: BillboardChanges) -> Result<Billboard, ServiceError>;
    /// Hard delete, returning the removed record.
    async fn delete(&self, store_id: Uuid, id: Uuid) -> Result<Billboard, ServiceError>;
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
        rows: HashMap<Uuid, (u64, Billboard)>, // key: billboard id
    }

    #[derive(Default)]
    pub struct InMemoryBillboardRepository {
        arena: Mutex<Arena>,
    }

    impl InMemoryBillboardRepository {
        pub fn new() -> Self { Self::default() }

        fn arena(&self) -> Result<MutexGuard<'_, Arena>, ServiceError> {
            self.arena.lock().map_err(|_| ServiceError::Db("billboard arena lock poisoned".into()))
        }
    }

    #[async_trait]
    impl BillboardRepository for InMemoryBillboardRepository {
        async fn create(&self, input: NewBillboard) -> Result<Billboard, ServiceError> {
            let billboard = models::billboard::new_model(input.store_id, &input.label, &input.image_url)?;
            let mut arena = self.arena()?;
            let seq = arena.next_seq;
            arena.next_seq += 1;
            arena.rows.insert(billboard.id, (seq, billboard.clone()));
            Ok(billboard)
        }

        async fn list_by_store(&self, store_id: Uuid) -> Result<Vec<Billboard>, ServiceError> {
            let arena = self.arena()?;
            let mut rows: Vec<_> = arena.rows.values().filter(|(_, b)| b.store_id == store_id).collect();
            rows.sort_by_key(|(seq, _)| *seq);
            Ok(rows.into_iter().map(|(_, b)| b.clone()).collect())
        }

        async fn get(&self, store_id: Uuid, id: Uuid) -> Result<Option<Billboard>, ServiceError> {
            let arena = self.arena()?;
            Ok(arena.rows.get(&id).filter(|(_, b)| b.store_id == store_id).map(|(_, b)| b.clone()))
        }

        async fn update(&self, store_id: Uuid, id: Uuid, changes: BillboardChanges) -> Result<Billboard, ServiceError> {
            let mut arena = self.arena()?;
            let (_, billboard) = arena
                .rows
                .get_mut(&id)
                .filter(|(_, b)| b.store_id == store_id)
                .ok_or_else(|| ServiceError::RecordNotFound(messages::UPDATE_TARGET_MISSING.into()))?;
            if let Some(label) = changes.label {
                billboard.label = label;
            }
            if let Some(image_url) = changes.image_url {
                billboard.image_url = image_url;
            }
            billboard.updated_at = Utc::now().into();
            Ok(billboard.clone())
        }

        async fn delete(&self, store_id: Uuid, id: Uuid) -> Result<Billboard, ServiceError> {
            let mut arena = self.arena()?;
            let scoped = arena.rows.get(&id).is_some_and(|(_, b)| b.store_id == store_id);
            if !scoped {
                return Err(ServiceError::RecordNotFound(messages::DELETE_TARGET_MISSING.into()));
            }
            arena
                .rows
                .remove(&id)
                .map(|(_, b)| b)
                .ok_or_else(|| ServiceError::RecordNotFound(messages::DELETE_TARGET_MISSING.into()))
        }
    }
}
