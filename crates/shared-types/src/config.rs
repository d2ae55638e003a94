use serde::{Deserialize, Serialize};

/// Backend address used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// `[api]` table of `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Resolve the concrete endpoint URLs for this backend.
    pub fn endpoints(&self) -> ApiEndpoints {
        let base = self.base_url.trim_end_matches('/');
        ApiEndpoints {
            create_user: format!("{base}/api/users"),
        }
    }
}

/// Fully-qualified backend URLs consumed by the client.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiEndpoints {
    pub create_user: String,
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
}
