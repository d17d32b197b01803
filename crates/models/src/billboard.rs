use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{errors, store};

pub const MAX_LABEL_LEN: usize = 255;
pub const MAX_IMAGE_URL_LEN: usize = 2048;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "billboard")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub label: String,
    pub image_url: String,
    pub store_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Store }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Store => Entity::belongs_to(store::Entity)
                .from(Column::StoreId)
                .to(store::Column::Id)
                .into(),
        }
    }
}

impl Related<store::Entity> for Entity {
    fn to() -> RelationDef { Relation::Store.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_label(label: &str) -> Result<(), errors::ModelError> {
    if label.trim().is_empty() {
        return Err(errors::ModelError::Validation("label: Required field".into()));
    }
    if label.chars().count() > MAX_LABEL_LEN {
        return Err(errors::ModelError::Validation(format!("label: must be at most {MAX_LABEL_LEN} characters")));
    }
    Ok(())
}

/// Absolute http(s) URL with a host.
pub fn validate_image_url(u: &str) -> Result<(), errors::ModelError> {
    if u.trim().is_empty() {
        return Err(errors::ModelError::Validation("imageUrl: Required field".into()));
    }
    let invalid = || errors::ModelError::Validation("imageUrl: Invalid URL".into());
    if u.len() > MAX_IMAGE_URL_LEN || u.trim() != u {
        return Err(invalid());
    }
    let parsed = url::Url::parse(u).map_err(|_| invalid())?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid());
    }
    match parsed.host_str() {
        Some(h) if !h.is_empty() => Ok(()),
        _ => Err(invalid()),
    }
}

/// Build a fresh record with generated id and timestamps; nothing is persisted.
pub fn new_model(store_id: Uuid, label: &str, image_url: &str) -> Result<Model, errors::ModelError> {
    validate_label(label)?;
    validate_image_url(image_url)?;
    let now: DateTimeWithTimeZone = Utc::now().into();
    Ok(Model {
        id: Uuid::new_v4(),
        label: label.to_string(),
        image_url: image_url.to_string(),
        store_id,
        created_at: now,
        updated_at: now,
    })
}

pub async fn create(db: &DatabaseConnection, store_id: Uuid, label: &str, image_url: &str) -> Result<Model, errors::ModelError> {
    let m = new_model(store_id, label, image_url)?;
    let am = ActiveModel {
        id: Set(m.id),
        label: Set(m.label),
        image_url: Set(m.image_url),
        store_id: Set(m.store_id),
        created_at: Set(m.created_at),
        updated_at: Set(m.updated_at),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
