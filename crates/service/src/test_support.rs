#![cfg(test)]
use migration::MigratorTrait;
use models::db::{connect_with_config, resolve_config};
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

// Migrations run once per test process; `false` means no database is reachable.
static MIGRATED: OnceCell<bool> = OnceCell::const_new();

/// Fresh connection for the current test's runtime, or `None` when DB tests are skipped.
pub async fn get_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }

    let ready = *MIGRATED
        .get_or_init(|| async {
            let mut cfg = resolve_config();
            cfg.max_connections = cfg.max_connections.max(2);
            cfg.min_connections = cfg.min_connections.min(1);
            cfg.connect_timeout_secs = 3;
            let Ok(db) = connect_with_config(&cfg).await else {
                eprintln!("database unreachable; skipping DB tests");
                return false;
            };
            match migration::Migrator::up(&db, None).await {
                Ok(()) => true,
                Err(e) => {
                    eprintln!("migrate up failed: {e}; skipping DB tests");
                    false
                }
            }
        })
        .await;
    if !ready {
        return None;
    }

    let mut cfg = resolve_config();
    cfg.max_connections = cfg.max_connections.max(5);
    cfg.min_connections = cfg.min_connections.min(1);
    cfg.acquire_timeout_secs = 10;
    connect_with_config(&cfg).await.ok()
}
