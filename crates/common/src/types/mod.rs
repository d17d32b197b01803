use serde::{Deserialize, Serialize};

/// Liveness report returned by `GET /api/health`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Health {
    pub status: String,
    pub details: HealthDetails,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HealthDetails {
    pub db: DbHealth,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DbHealth {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl DbHealth {
    pub fn up() -> Self { Self { status: "up".into(), error: None } }

    pub fn down(error: impl Into<String>) -> Self {
        Self { status: "down".into(), error: Some(error.into()) }
    }

    pub fn is_up(&self) -> bool { self.status == "up" }
}

impl Health {
    pub fn from_db(db: DbHealth) -> Self {
        let status = if db.is_up() { "ok" } else { "error" };
        Self { status: status.into(), details: HealthDetails { db } }
    }

    pub fn is_ok(&self) -> bool { self.status == "ok" }
}
