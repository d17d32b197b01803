//! Environment/runtime helpers
//!
//! Sanity checks run once at startup, before the database is touched.

use tracing::warn;

/// Warn when neither a config file nor `DATABASE_URL` is available.
pub async fn ensure_env(config_path: &str) -> anyhow::Result<()> {
    let has_file = tokio::fs::metadata(config_path).await.is_ok();
    if !has_file && std::env::var("DATABASE_URL").is_err() {
        warn!(%config_path, "no config file and no DATABASE_URL; startup will fail validation");
    }
    Ok(())
}
