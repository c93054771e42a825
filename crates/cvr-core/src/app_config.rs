use std::net::SocketAddr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Process-wide configuration, loaded once at startup from the environment.
///
/// The scrape provider's base URL and API key live here and are passed
/// explicitly into the scrape client; nothing in the workspace reads them
/// from process globals after startup.
#[derive(Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub scrape_base_url: String,
    pub scrape_api_key: String,
    pub scrape_timeout_secs: u64,
    pub scrape_user_agent: String,
    /// How many recent posts to request from the provider per profile.
    pub scrape_posts_count: u32,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_acquire_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("database_url", &"[redacted]")
            .field("scrape_base_url", &self.scrape_base_url)
            .field("scrape_api_key", &"[redacted]")
            .field("scrape_timeout_secs", &self.scrape_timeout_secs)
            .field("scrape_user_agent", &self.scrape_user_agent)
            .field("scrape_posts_count", &self.scrape_posts_count)
            .field("db_max_connections", &self.db_max_connections)
            .field("db_min_connections", &self.db_min_connections)
            .field("db_acquire_timeout_secs", &self.db_acquire_timeout_secs)
            .finish()
    }
}
