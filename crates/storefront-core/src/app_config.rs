use crate::view_mode::ViewMode;

#[derive(Debug, Clone, PartialEq, Eq)]
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

impl Environment {
    /// Tracing filter used when `STOREFRONT_LOG_LEVEL` is not set.
    #[must_use]
    pub fn default_log_level(&self) -> &'static str {
        match self {
            Environment::Development => "debug",
            Environment::Test => "warn",
            Environment::Production => "info",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Default catalog source: a workbook path or an `http(s)` URL. `None`
    /// means the demo catalog.
    pub source: Option<String>,
    /// Brand written into records whose brand cell is blank.
    pub default_brand: String,
    pub export_path: String,
    pub view_mode: ViewMode,
    pub fetch_timeout_secs: u64,
    pub user_agent: String,
}
