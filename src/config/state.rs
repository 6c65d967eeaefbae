// Application state module
// Immutable per-process state shared by every connection

use super::types::Config;

/// Region reported when the hosting platform does not expose one
pub const UNKNOWN_REGION: &str = "unknown";

/// Application state
#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    /// Hosting region, resolved once at startup
    pub region: String,
}

impl AppState {
    /// Create `AppState`, reading the region from the configured variable
    pub fn new(config: Config) -> Self {
        let region = std::env::var(&config.service.region_env)
            .ok()
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| UNKNOWN_REGION.to_string());
        Self::with_region(config, region)
    }

    pub const fn with_region(config: Config, region: String) -> Self {
        Self { config, region }
    }
}
