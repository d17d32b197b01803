use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use models::store;
use crate::errors::{messages, ServiceError};
use crate::store::domain::{NewStore, Store};
use crate::store::repository::StoreRepository;

/// SeaORM-backed repository implementation.
pub struct SeaOrmStoreRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmStoreRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl StoreRepository for SeaOrmStoreRepository {
    async fn create(&self, input: NewStore) -> Result<Store, ServiceError> {
        let created = store::create(&self.db, &input.user_id, &input.name).await?;
        Ok(created)
    }

    async fn find_owned(&self, user_id: &str, store_id: Uuid) -> Result<Option<Store>, ServiceError> {
        store::Entity::find()
            .filter(store::Column::Id.eq(store_id))
            .filter(store::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_first_by_owner(&self, user_id: &str) -> Result<Option<Store>, ServiceError> {
        store::Entity::find()
            .filter(store::Column::UserId.eq(user_id))
            .order_by_asc(store::Column::CreatedAt)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn list_by_owner(&self, user_id: &str) -> Result<Vec<Store>, ServiceError> {
        store::Entity::find()
            .filter(store::Column::UserId.eq(user_id))
            .order_by_asc(store::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn rename(&self, user_id: &str, store_id: Uuid, name: &str) -> Result<Store, ServiceError> {
        let mut am: store::ActiveModel = self
            .find_owned(user_id, store_id)
            .await?
            .ok_or_else(|| ServiceError::RecordNotFound(messages::UPDATE_TARGET_MISSING.into()))?
            .into();
        am.name = Set(name.to_string());
        am.updated_at = Set(Utc::now().into());
        am.update(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn delete(&self, user_id: &str, store_id: Uuid) -> Result<Store, ServiceError> {
        let found = self
            .find_owned(user_id, store_id)
            .await?
            .ok_or_else(|| ServiceError::RecordNotFound(messages::DELETE_TARGET_MISSING.into()))?;
        let res = store::Entity::delete_many()
            .filter(store::Column::Id.eq(store_id))
            .filter(store::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        // Lost a race with a concurrent delete
        if res.rows_affected == 0 {
            return Err(ServiceError::RecordNotFound(messages::DELETE_TARGET_MISSING.into()));
        }
        Ok(found)
    }
}
