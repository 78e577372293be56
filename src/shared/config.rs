//! Application configuration. Schedule API endpoint, paths.

use serde::Deserialize;

/// Default HTTP timeout for schedule API requests, in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Base URL of the schedule REST API, e.g. "http://localhost:5164".
    /// Read from CAMPUS_SCHED_API_BASE_URL. Unset means the demo gateway.
    #[serde(default)]
    pub api_base_url: Option<String>,

    /// Directory for local data (the favorites file). Read from CAMPUS_SCHED_DATA_DIR.
    #[serde(default)]
    pub data_dir: Option<String>,

    /// HTTP timeout in seconds (default 10). Read from CAMPUS_SCHED_HTTP_TIMEOUT_SECS.
    #[serde(default)]
    pub http_timeout_secs: Option<u64>,

    /// Group name to select at startup instead of the first-group default.
    /// Read from CAMPUS_SCHED_GROUP.
    #[serde(default)]
    pub group: Option<String>,

    /// Simulated latency of the demo gateway in ms (default 100).
    /// Read from CAMPUS_SCHED_DEMO_DELAY_MS.
    #[serde(default)]
    pub demo_delay_ms: Option<u64>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("CAMPUS_SCHED"));
        if let Ok(path) = std::env::var("CAMPUS_SCHED_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns the HTTP timeout in seconds. Defaults to 10 if unset.
    pub fn http_timeout_secs_or_default(&self) -> u64 {
        self.http_timeout_secs.unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS)
    }

    /// Returns the data directory. Defaults to "./data" if unset.
    pub fn data_dir_or_default(&self) -> &str {
        self.data_dir.as_deref().unwrap_or("./data")
    }

    /// Returns the demo gateway latency in ms. Defaults to 100 if unset.
    pub fn demo_delay_ms_or_default(&self) -> u64 {
        self.demo_delay_ms.unwrap_or(100)
    }

    /// Returns true if a schedule API base URL is configured.
    pub fn is_api_configured(&self) -> bool {
        self.api_base_url.as_deref().is_some_and(|s| !s.is_empty())
    }
}
