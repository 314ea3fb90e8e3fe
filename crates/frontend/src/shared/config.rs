use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Базовый адрес бэкенда JAGOTA без завершающего слеша
    pub base_url: String,
    /// Таймаут запроса; 0 отключает прерывание
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u32,
}

fn default_timeout_ms() -> u32 {
    30_000
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://localhost:8080"
timeout_ms = 30000
"#;

impl AppConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Load configuration for the running bundle
    ///
    /// Embedded defaults, then build-time overrides from
    /// `ESHIPPING_API_URL` and `ESHIPPING_API_TIMEOUT_MS`.
    pub fn load() -> Self {
        let config = Self::from_toml_str(DEFAULT_CONFIG).unwrap_or_else(|e| {
            log::error!("Embedded config is invalid, using built-in values: {}", e);
            Self::default()
        });
        config.with_overrides(
            option_env!("ESHIPPING_API_URL"),
            option_env!("ESHIPPING_API_TIMEOUT_MS"),
        )
    }

    pub fn with_overrides(mut self, base_url: Option<&str>, timeout_ms: Option<&str>) -> Self {
        if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api.base_url = url.to_string();
        }
        if let Some(raw) = timeout_ms {
            match raw.trim().parse::<u32>() {
                Ok(ms) => self.api.timeout_ms = ms,
                Err(_) => log::warn!("Ignoring invalid request timeout override: {}", raw),
            }
        }
        self
    }

    /// Full URL for an API path ("/api/...")
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api.base_url.trim_end_matches('/'), path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:8080".to_string(),
                timeout_ms: default_timeout_ms(),
            },
        }
    }
}
