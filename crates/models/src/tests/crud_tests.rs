use crate::{billboard, store};
use sea_orm::{ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder};
use anyhow::Result;
use uuid::Uuid;

use super::setup_test_db;

#[tokio::test]
async fn test_store_crud() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let user_id = format!("user_{}", Uuid::new_v4().simple());
    let created = store::create(&db, &user_id, "store1").await?;
    assert_eq!(created.user_id, user_id);
    assert_eq!(created.name, "store1");

    let found = store::Entity::find()
        .filter(store::Column::Id.eq(created.id))
        .filter(store::Column::UserId.eq(user_id.clone()))
        .one(&db)
        .await?;
    assert_eq!(found.as_ref(), Some(&created));

    // Foreign owner never sees it
    let foreign = store::Entity::find()
        .filter(store::Column::Id.eq(created.id))
        .filter(store::Column::UserId.eq("someone_else"))
        .one(&db)
        .await?;
    assert!(foreign.is_none());

    created.clone().delete(&db).await?;
    assert!(store::Entity::find_by_id(created.id).one(&db).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_store_validation_happens_before_insert() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };
    let res = store::create(&db, "user_x", "  ").await;
    assert!(matches!(res, Err(crate::errors::ModelError::Validation(_))));
    Ok(())
}

#[tokio::test]
async fn test_billboards_cascade_with_store() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let user_id = format!("user_{}", Uuid::new_v4().simple());
    let s = store::create(&db, &user_id, "with billboards").await?;
    let b1 = billboard::create(&db, s.id, "first", "https://example.com/1.jpg").await?;
    let b2 = billboard::create(&db, s.id, "second", "https://example.com/2.jpg").await?;

    let listed = billboard::Entity::find()
        .filter(billboard::Column::StoreId.eq(s.id))
        .order_by_asc(billboard::Column::CreatedAt)
        .all(&db)
        .await?;
    let ids: Vec<Uuid> = listed.iter().map(|b| b.id).collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&b1.id) && ids.contains(&b2.id));

    store::Entity::delete_by_id(s.id).exec(&db).await?;
    assert!(billboard::Entity::find_by_id(b1.id).one(&db).await?.is_none());
    assert!(billboard::Entity::find_by_id(b2.id).one(&db).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_billboard_requires_existing_store() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };
    let res = billboard::create(&db, Uuid::new_v4(), "orphan", "https://example.com/o.jpg").await;
    assert!(matches!(res, Err(crate::errors::ModelError::Db(_))));
    Ok(())
}
