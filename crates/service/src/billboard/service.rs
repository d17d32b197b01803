use std::sync::Arc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::domain::{Billboard, BillboardChanges, BillboardDeletion, BillboardEnvelope, BillboardInput, NewBillboard};
use super::repository::BillboardRepository;
use crate::errors::{messages, ServiceError};
use crate::store::repository::StoreRepository;
use crate::store::StoreService;

/// Billboard business rules. Every operation first runs the owner check
/// through the store service, then delegates to the billboard repository.
pub struct BillboardService<B: BillboardRepository + ?Sized, S: StoreRepository + ?Sized> {
    repo: Arc<B>,
    stores: Arc<StoreService<S>>,
}

impl<B: BillboardRepository + ?Sized, S: StoreRepository + ?Sized> BillboardService<B, S> {
    pub fn new(repo: Arc<B>, stores: Arc<StoreService<S>>) -> Self { Self { repo, stores } }

    /// A store that is missing or owned by someone else is reported as unauthorized here,
    /// unlike the other operations which report it as not found.
    #[instrument(skip(self, input))]
    pub async fn create(&self, user_id: &str, store_id: Uuid, input: BillboardInput) -> Result<BillboardEnvelope, ServiceError> {
        models::billboard::validate_label(&input.label)?;
        models::billboard::validate_image_url(&input.image_url)?;

        let owned = self.stores.authorize(user_id, store_id).await.map_err(|e| {
            warn!(error = %e, "billboard_create_rejected");
            e.into_unauthorized()
        })?;

        let billboard = self
            .repo
            .create(NewBillboard { store_id: owned.id(), label: input.label, image_url: input.image_url })
            .await?;
        info!(billboard_id = %billboard.id, "billboard_created");
        Ok(billboard.into())
    }

    #[instrument(skip(self))]
    pub async fn find_all(&self, user_id: &str, store_id: Uuid) -> Result<Vec<Billboard>, ServiceError> {
        let owned = self.stores.authorize(user_id, store_id).await.map_err(|e| e.into_not_found())?;
        let billboards = self.repo.list_by_store(owned.id()).await?;
        if billboards.is_empty() {
            return Err(ServiceError::NotFound(messages::NO_BILLBOARDS_FOUND.into()));
        }
        Ok(billboards)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, user_id: &str, store_id: Uuid, id: Uuid) -> Result<BillboardEnvelope, ServiceError> {
        let owned = self.stores.authorize(user_id, store_id).await.map_err(|e| e.into_not_found())?;
        let billboard = self
            .repo
            .get(owned.id(), id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(messages::BILLBOARD_NOT_FOUND.into()))?;
        Ok(billboard.into())
    }

    /// Any repository failure surfaces as not-found carrying the storage-level cause.
    #[instrument(skip(self, changes))]
    pub async fn update(&self, user_id: &str, store_id: Uuid, id: Uuid, changes: BillboardChanges) -> Result<BillboardEnvelope, ServiceError> {
        if let Some(label) = changes.label.as_deref() {
            models::billboard::validate_label(label)?;
        }
        if let Some(image_url) = changes.image_url.as_deref() {
            models::billboard::validate_image_url(image_url)?;
        }

        let owned = self.stores.authorize(user_id, store_id).await.map_err(|e| e.into_not_found())?;
        let billboard = self.repo.update(owned.id(), id, changes).await.map_err(|e| {
            warn!(error = %e, "billboard_update_failed");
            ServiceError::NotFound(e.detail())
        })?;
        info!(billboard_id = %billboard.id, "billboard_updated");
        Ok(billboard.into())
    }

    /// Any repository failure after the owner check is reported as "Billboard not found".
    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: &str, store_id: Uuid, id: Uuid) -> Result<BillboardDeletion, ServiceError> {
        let owned = self.stores.authorize(user_id, store_id).await.map_err(|e| e.into_not_found())?;
        let billboard = self.repo.delete(owned.id(), id).await.map_err(|e| {
            warn!(error = %e, "billboard_delete_failed");
            ServiceError::NotFound(messages::BILLBOARD_NOT_FOUND.into())
        })?;
        info!(billboard_id = %billboard.id, "billboard_deleted");
        Ok(billboard.into())
    }
}
