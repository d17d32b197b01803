use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 3000, worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
    /// Apply pending migrations when the server starts.
    #[serde(default)]
    pub auto_migrate: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
            auto_migrate: false,
        }
    }
}

fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 2 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 30 }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

impl AppConfig {
    /// Config file first, environment variables as fallback.
    pub fn load_and_validate() -> Result<Self> {
        let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        let mut cfg = Self::load_or_env(&path)?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Read `path`, or build from the environment when the file does not exist.
    /// An unreadable or malformed file is an error.
    pub fn load_or_env(path: &str) -> Result<Self> {
        match load_from_file(path) {
            Ok(cfg) => Ok(cfg),
            Err(e) => match e.downcast_ref::<std::io::Error>() {
                Some(io) if io.kind() == std::io::ErrorKind::NotFound => Ok(Self::from_env()),
                _ => Err(e.context(format!("failed to load config file {path}"))),
            },
        }
    }

    /// Build a config purely from `HOST`, `PORT`, `DATABASE_URL`,
    /// `TOKIO_WORKER_THREADS` and `DB_AUTO_MIGRATE`.
    pub fn from_env() -> Self {
        let defaults = ServerConfig::default();
        let server = ServerConfig {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(defaults.port),
            worker_threads: std::env::var("TOKIO_WORKER_THREADS")
                .ok()
                .and_then(|v| v.parse::<usize>().ok())
                .or(defaults.worker_threads),
        };
        let database = DatabaseConfig {
            url: std::env::var("DATABASE_URL").unwrap_or_default(),
            auto_migrate: env_flag("DB_AUTO_MIGRATE"),
            ..DatabaseConfig::default()
        };
        Self { server, database }
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        // URL may come from the environment when the TOML omits it
        self.database.normalize_from_env();
        self.database.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }
}

impl DatabaseConfig {
    pub fn normalize_from_env(&mut self) {
        if self.url.trim().is_empty() {
            if let Ok(url) = std::env::var("DATABASE_URL") {
                self.url = url;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set it in config.toml or DATABASE_URL"));
        }
        let lower = self.url.to_lowercase();
        if !(lower.starts_with("postgresql://") || lower.starts_with("postgres://")) {
            return Err(anyhow!("database.url must start with postgresql:// or postgres://"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_db() -> DatabaseConfig {
        DatabaseConfig { url: "postgres://u:p@localhost:5432/shop".into(), ..DatabaseConfig::default() }
    }

    #[test]
    fn parses_toml_with_defaults() {
        let cfg = parse(
            r#"
            [server]
            host = "0.0.0.0"
            port = 8080

            [database]
            url = "postgres://u:p@db:5432/shop"
            auto_migrate = true
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.database.max_connections, 10);
        assert_eq!(cfg.database.min_connections, 2);
        assert!(cfg.database.auto_migrate);
        assert!(!cfg.database.sqlx_logging);
    }

    #[test]
    fn empty_file_falls_back_to_defaults() {
        let cfg = parse("").unwrap();
        assert_eq!(cfg.server.port, 3000);
        assert!(cfg.database.url.is_empty());
    }

    fn temp_config(contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("storefront-config-{}-{}.toml", std::process::id(), contents.len()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = temp_config("[server\nport = \"oops\"");
        let res = AppConfig::load_or_env(path.to_str().unwrap());
        std::fs::remove_file(&path).ok();
        let err = res.unwrap_err();
        assert!(err.to_string().contains("failed to load config file"));
    }

    #[test]
    fn missing_file_falls_back_to_env() {
        let path = std::env::temp_dir().join("storefront-config-does-not-exist.toml");
        let cfg = AppConfig::load_or_env(path.to_str().unwrap()).unwrap();
        assert!(cfg.server.port > 0);
    }

    #[test]
    fn readable_file_is_used() {
        let path = temp_config("[server]\nhost = \"10.0.0.1\"\nport = 8088\n");
        let res = AppConfig::load_or_env(path.to_str().unwrap());
        std::fs::remove_file(&path).ok();
        let cfg = res.unwrap();
        assert_eq!(cfg.server.host, "10.0.0.1");
        assert_eq!(cfg.server.port, 8088);
    }

    #[test]
    fn rejects_non_postgres_url() {
        let db = DatabaseConfig { url: "mysql://localhost/shop".into(), ..DatabaseConfig::default() };
        assert!(db.validate().is_err());
    }

    #[test]
    fn rejects_inverted_pool_bounds() {
        let db = DatabaseConfig { min_connections: 5, max_connections: 2, ..valid_db() };
        assert!(db.validate().is_err());
    }

    #[test]
    fn rejects_zero_timeouts() {
        let db = DatabaseConfig { acquire_timeout_secs: 0, ..valid_db() };
        assert!(db.validate().is_err());
        assert!(valid_db().validate().is_ok());
    }

    #[test]
    fn server_normalize_fills_host_and_threads() {
        let mut s = ServerConfig { host: "  ".into(), port: 3000, worker_threads: Some(0) };
        s.normalize().unwrap();
        assert_eq!(s.host, "127.0.0.1");
        assert_eq!(s.worker_threads, Some(4));

        let mut zero = ServerConfig { port: 0, ..ServerConfig::default() };
        assert!(zero.normalize().is_err());
    }
}
