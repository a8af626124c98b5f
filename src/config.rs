//! Process configuration, read from the environment (and an optional `.env`).

#[derive(Debug, Clone)]
pub struct Config {
    /// sqlx SQLite URL, e.g. `sqlite://messenger.db`.
    pub database_url: String,
    pub bind_address: String,
    pub max_connections: u32,
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_level: String,
    pub log_json: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| dotenv::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://messenger.db".to_owned()),
            bind_address: lookup("MESSENGER_BIND").unwrap_or_else(|| "0.0.0.0:8080".to_owned()),
            max_connections: lookup("MESSENGER_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(16),
            log_level: lookup("MESSENGER_LOG").unwrap_or_else(|| "info".to_owned()),
            log_json: lookup("MESSENGER_LOG_JSON")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }
}
