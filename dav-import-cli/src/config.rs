use std::collections::HashMap;

use getset::Getters;
use serde::Deserialize;

const ENV_PREFIX: &str = "DAV_IMPORT";

#[derive(Default, Clone, Deserialize, Debug, Getters)]
#[getset(get = "pub")]
pub struct DavImportConfig {
    /// Root url of the ESN backend, e.g. `https://esn.example.com`.
    #[serde(default)]
    base_url: String,
    #[serde(default)]
    http_client: HttpClientConfig,
    #[serde(default)]
    telemetry: TelemetryConfig,
}

#[derive(Deserialize, Debug, Clone, Getters)]
#[getset(get = "pub")]
pub struct HttpClientConfig {
    #[serde(default = "Default::default")]
    http_header: HashMap<String, String>,
    #[serde(default = "HttpClientConfig::default_user_agent")]
    user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            http_header: Default::default(),
            user_agent: Self::default_user_agent(),
        }
    }
}

impl HttpClientConfig {
    pub fn default_user_agent() -> String {
        "DavImport/1.0".to_string()
    }
}

#[derive(Deserialize, Debug, Clone, Getters)]
#[getset(get = "pub")]
pub struct TelemetryConfig {
    #[serde(default = "TelemetryConfig::default_enable")]
    enable: bool,
    /// Level used when no directive matches.
    #[serde(default = "TelemetryConfig::default_max_level")]
    max_level: String,
    /// Extra `EnvFilter` directives. `RUST_LOG` is read when empty.
    #[serde(default)]
    level_filter: String,
    /// Print file, line, thread and target of each event.
    #[serde(default)]
    enable_debug_logging: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enable: Self::default_enable(),
            max_level: Self::default_max_level(),
            level_filter: Default::default(),
            enable_debug_logging: false,
        }
    }
}

impl TelemetryConfig {
    fn default_enable() -> bool {
        true
    }

    fn default_max_level() -> String {
        "info".to_string()
    }
}

impl DavImportConfig {
    /// Load from an optional yaml file, overridden by `DAV_IMPORT__*` variables.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;
        Ok(config.try_deserialize()?)
    }
}
