//! Readiness probes for the health endpoint.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;

#[async_trait]
pub trait DatabaseProbe: Send + Sync {
    async fn ping(&self) -> Result<(), ServiceError>;
}

pub struct SeaOrmProbe {
    db: DatabaseConnection,
}

impl SeaOrmProbe {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl DatabaseProbe for SeaOrmProbe {
    async fn ping(&self) -> Result<(), ServiceError> {
        self.db.ping().await.map_err(|e| ServiceError::Db(e.to_string()))
    }
}

/// Probe for in-memory runs; there is no backend that can go down.
#[derive(Default)]
pub struct AlwaysUp;

#[async_trait]
impl DatabaseProbe for AlwaysUp {
    async fn ping(&self) -> Result<(), ServiceError> { Ok(()) }
}
