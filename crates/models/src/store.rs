use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{billboard, errors};

pub const MAX_NAME_LEN: usize = 255;

/// A store owned by exactly one user. `user_id` is an external identity, not a FK.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "store")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub user_id: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Billboard,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Billboard => Entity::has_many(billboard::Entity).into() }
    }
}

impl Related<billboard::Entity> for Entity {
    fn to() -> RelationDef { Relation::Billboard.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("name: Required field".into()));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(errors::ModelError::Validation(format!("name: must be at most {MAX_NAME_LEN} characters")));
    }
    Ok(())
}

/// Build a fresh record with generated id and timestamps; nothing is persisted.
pub fn new_model(user_id: &str, name: &str) -> Result<Model, errors::ModelError> {
    validate_name(name)?;
    if user_id.trim().is_empty() {
        return Err(errors::ModelError::Validation("userId: Required field".into()));
    }
    let now: DateTimeWithTimeZone = Utc::now().into();
    Ok(Model {
        id: Uuid::new_v4(),
        name: name.to_string(),
        user_id: user_id.to_string(),
        created_at: now,
        updated_at: now,
    })
}

pub async fn create(db: &DatabaseConnection, user_id: &str, name: &str) -> Result<Model, errors::ModelError> {
    let m = new_model(user_id, name)?;
    let am = ActiveModel {
        id: Set(m.id),
        name: Set(m.name),
        user_id: Set(m.user_id),
        created_at: Set(m.created_at),
        updated_at: Set(m.updated_at),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
