// Configuration module entry point
// Layers defaults, the optional config file and ADSPEND_* environment overrides

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{Config, PerformanceConfig, ServiceConfig};

/// `ADSPEND_<SECTION>__<KEY>` overrides; list keys take comma-separated values
fn environment() -> config::Environment {
    config::Environment::with_prefix("ADSPEND")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("http.path_prefixes")
}

impl Config {
    /// Load configuration from specified file path (without extension)
    /// Default config file is "config.toml" when no path specified
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        Self::load_with_env(config_path, environment())
    }

    fn load_with_env(
        config_path: &str,
        env: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(env)
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("http.server_name", "adspend-api")?
            .set_default("http.max_body_size", 1_048_576)? // 1MB
            .set_default("http.path_prefixes", vec!["", "/api"])?
            .set_default("service.name", "Ads Transparency Dashboard API")?
            .set_default("service.version", "1.0.0")?
            .set_default("service.environment", "production")?
            .set_default("service.region_env", "VERCEL_REGION")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
