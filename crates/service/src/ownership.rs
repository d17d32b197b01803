//! Owner check shared by every billboard operation.
//!
//! A store is reachable only through `(user_id, store_id)`. The check yields an
//! [`OwnedStore`] handle; billboard repository calls take their store id from it.

use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::errors::{messages, ServiceError};
use crate::store::domain::Store;
use crate::store::repository::StoreRepository;
use crate::store::StoreService;

/// A store verified to belong to the calling user.
#[derive(Debug, Clone)]
pub struct OwnedStore {
    store: Store,
}

impl OwnedStore {
    pub fn id(&self) -> Uuid { self.store.id }

    pub fn user_id(&self) -> &str { &self.store.user_id }

    pub fn into_inner(self) -> Store { self.store }
}

#[derive(Debug, Error)]
pub enum OwnershipError {
    #[error("store {store_id} does not exist for user {user_id}")]
    StoreNotFound { user_id: String, store_id: Uuid },
    #[error("store lookup failed: {0}")]
    Storage(ServiceError),
}

impl OwnershipError {
    /// Billboard creation reports every failed check as unauthorized.
    pub fn into_unauthorized(self) -> ServiceError { ServiceError::unauthorized() }

    /// Other billboard operations report a missing store as not-found and keep storage failures.
    pub fn into_not_found(self) -> ServiceError {
        match self {
            Self::StoreNotFound { .. } => ServiceError::NotFound(messages::STORE_NOT_FOUND.into()),
            Self::Storage(e) => e,
        }
    }
}

impl<R: StoreRepository + ?Sized> StoreService<R> {
    /// Resolve `store_id` as a store owned by `user_id`.
    pub async fn authorize(&self, user_id: &str, store_id: Uuid) -> Result<OwnedStore, OwnershipError> {
        match self.get(user_id, store_id).await {
            Ok(store) => Ok(OwnedStore { store }),
            Err(ServiceError::NotFound(_)) => {
                debug!(%user_id, %store_id, "ownership_check_failed");
                Err(OwnershipError::StoreNotFound { user_id: user_id.to_string(), store_id })
            }
            Err(e) => Err(OwnershipError::Storage(e)),
        }
    }
}
