use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use models::billboard;
use crate::billboard::domain::{Billboard, BillboardChanges, NewBillboard};
use crate::billboard::repository::BillboardRepository;
use crate::errors::{messages, ServiceError};

/// SeaORM-backed repository implementation.
pub struct SeaOrmBillboardRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmBillboardRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl BillboardRepository for SeaOrmBillboardRepository {
    async fn create(&self, input: NewBillboard) -> Result<Billboard, ServiceError> {
        let created = billboard::create(&self.db, input.store_id, &input.label, &input.image_url).await?;
        Ok(created)
    }

    async fn list_by_store(&self, store_id: Uuid) -> Result<Vec<Billboard>, ServiceError> {
        billboard::Entity::find()
            .filter(billboard::Column::StoreId.eq(store_id))
            .order_by_asc(billboard::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn get(&self, store_id: Uuid, id: Uuid) -> Result<Option<Billboard>, ServiceError> {
        billboard::Entity::find()
            .filter(billboard::Column::Id.eq(id))
            .filter(billboard::Column::StoreId.eq(store_id))
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn update(&self, store_id: Uuid, id: Uuid, changes: BillboardChanges) -> Result<Billboard, ServiceError> {
        let mut am: billboard::ActiveModel = self
            .get(store_id, id)
            .await?
            .ok_or_else(|| ServiceError::RecordNotFound(messages::UPDATE_TARGET_MISSING.into()))?
            .into();
        if let Some(label) = changes.label {
            am.label = Set(label);
        }
        if let Some(image_url) = changes.image_url {
            am.image_url = Set(image_url);
        }
        am.updated_at = Set(Utc::now().into());
        am.update(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn delete(&self, store_id: Uuid, id: Uuid) -> Result<Billboard, ServiceError> {
        let found = self
            .get(store_id, id)
            .await?
            .ok_or_else(|| ServiceError::RecordNotFound(messages::DELETE_TARGET_MISSING.into()))?;
        let res = billboard::Entity::delete_many()
            .filter(billboard::Column::Id.eq(id))
            .filter(billboard::Column::StoreId.eq(store_id))
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        if res.rows_affected == 0 {
            return Err(ServiceError::RecordNotFound(messages::DELETE_TARGET_MISSING.into()));
        }
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{domain::NewStore, repo::seaorm::SeaOrmStoreRepository, repository::StoreRepository};
    use crate::test_support::get_db;

    #[tokio::test]
    async fn seaorm_billboard_repository_crud() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await else { return Ok(()) };
        let stores = SeaOrmStoreRepository::new(db.clone());
        let repo = SeaOrmBillboardRepository::new(db);

        let owner = format!("user_{}", Uuid::new_v4().simple());
        let store = stores.create(NewStore { user_id: owner.clone(), name: "bb".into() }).await?;
        let sibling = stores.create(NewStore { user_id: owner.clone(), name: "other".into() }).await?;

        let created = repo
            .create(NewBillboard { store_id: store.id, label: "hero".into(), image_url: "https://example.com/hero.jpg".into() })
            .await?;
        assert_eq!(repo.list_by_store(store.id).await?.len(), 1);
        assert!(repo.list_by_store(sibling.id).await?.is_empty());
        assert!(repo.get(sibling.id, created.id).await?.is_none());

        let updated = repo
            .update(store.id, created.id, BillboardChanges { label: Some("hero v2".into()), image_url: None })
            .await?;
        assert_eq!(updated.label, "hero v2");
        assert_eq!(updated.image_url, created.image_url);
        assert!(updated.updated_at >= updated.created_at);

        match repo.update(sibling.id, created.id, BillboardChanges::default()).await {
            Err(ServiceError::RecordNotFound(cause)) => assert_eq!(cause, messages::UPDATE_TARGET_MISSING),
            other => panic!("unexpected: {other:?}"),
        }

        let deleted = repo.delete(store.id, created.id).await?;
        assert_eq!(deleted.id, created.id);
        assert!(repo.get(store.id, created.id).await?.is_none());

        stores.delete(&owner, store.id).await?;
        stores.delete(&owner, sibling.id).await?;
        Ok(())
    }
}
