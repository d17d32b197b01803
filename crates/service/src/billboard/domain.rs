use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type Billboard = models::billboard::Model;

/// Request body for creation. Missing fields decode as empty and fail validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillboardInput {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub image_url: String,
}

/// Repository-level creation input, store already verified.
#[derive(Debug, Clone)]
pub struct NewBillboard {
    pub store_id: Uuid,
    pub label: String,
    pub image_url: String,
}

/// Partial update; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillboardChanges {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// `{ "billboard": … }`
#[derive(Debug, Clone, Serialize)]
pub struct BillboardEnvelope {
    pub billboard: Billboard,
}

/// `{ "deleted": { "billboard": … } }`
#[derive(Debug, Clone, Serialize)]
pub struct BillboardDeletion {
    pub deleted: BillboardEnvelope,
}

impl From<Billboard> for BillboardEnvelope {
    fn from(billboard: Billboard) -> Self { Self { billboard } }
}

impl From<Billboard> for BillboardDeletion {
    fn from(billboard: Billboard) -> Self { Self { deleted: billboard.into() } }
}
