use thiserror::Error;

/// Messages surfaced to API clients verbatim.
pub mod messages {
    pub const STORE_NOT_FOUND: &str = "Store not found";
    pub const STORES_NOT_FOUND: &str = "Stores not found";
    pub const BILLBOARD_NOT_FOUND: &str = "Billboard not found";
    pub const NO_BILLBOARDS_FOUND: &str = "No billboards found";
    pub const UNAUTHORIZED: &str = "Unauthorized";
    pub const UPDATE_TARGET_MISSING: &str = "Record to update not found.";
    pub const DELETE_TARGET_MISSING: &str = "Record to delete does not exist.";
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    /// The row targeted by an update/delete does not exist. Carries the storage-level cause.
    #[error("record not found: {0}")]
    RecordNotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn unauthorized() -> Self { Self::Unauthorized(messages::UNAUTHORIZED.into()) }

    /// Payload without the variant prefix.
    pub fn detail(&self) -> String {
        match self {
            Self::NotFound(m) | Self::Unauthorized(m) | Self::RecordNotFound(m) | Self::Db(m) => m.clone(),
            Self::Model(models::errors::ModelError::Validation(m)) | Self::Model(models::errors::ModelError::Db(m)) => m.clone(),
        }
    }
}
