use shared_types::{ApiConfig, ApiEndpoints, AppConfig, DEFAULT_API_BASE_URL};
use std::sync::OnceLock;

static API_CONFIG: OnceLock<ApiConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
#[cfg(not(target_arch = "wasm32"))]
const CONFIG_PATH: &str = "config.toml";

/// Backend address baked in at build time, if any.
const BUILD_BASE_URL: Option<&str> = option_env!("API_BASE_URL");

/// Resolve the API configuration once and cache it.
///
/// Order: `config.toml` (native targets only), then the build-time
/// `API_BASE_URL`, then [`DEFAULT_API_BASE_URL`].
pub fn api_config() -> &'static ApiConfig {
    API_CONFIG.get_or_init(|| read_config_file().unwrap_or_else(build_time_config))
}

/// Endpoint URLs for the configured backend.
pub fn endpoints() -> ApiEndpoints {
    api_config().endpoints()
}

/// Parse the contents of `config.toml`.
pub fn parse_config(contents: &str) -> Result<ApiConfig, toml::de::Error> {
    toml::from_str::<AppConfig>(contents).map(|config| config.api)
}

fn build_time_config() -> ApiConfig {
    ApiConfig::new(BUILD_BASE_URL.unwrap_or(DEFAULT_API_BASE_URL))
}

#[cfg(not(target_arch = "wasm32"))]
fn read_config_file() -> Option<ApiConfig> {
    match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => match parse_config(&contents) {
            Ok(config) => {
                tracing::info!(base_url = %config.base_url, "Loaded {CONFIG_PATH}");
                Some(config)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to parse {CONFIG_PATH}, using build defaults");
                None
            }
        },
        Err(e) => {
            tracing::debug!(error = %e, "{CONFIG_PATH} not readable, using build defaults");
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn read_config_file() -> Option<ApiConfig> {
    None
}
