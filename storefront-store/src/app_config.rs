use serde::Deserialize;
use std::env;
use storefront_catalog::DiscountSchedule;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub pricing: DiscountSchedule,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    /// Fallback tracing filter when RUST_LOG is unset
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "storefront_app=info,storefront_core=info,storefront_store=info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { filter: default_filter() }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Layers `<dir>/default`, `<dir>/<RUN_MODE>` and `<dir>/local`, then
    /// `STOREFRONT__*` environment variables. Only the default file is required.
    pub fn load_from(dir: &str) -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name(&format!("{}/default", dir)))
            .add_source(config::File::with_name(&format!("{}/{}", dir, run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name(&format!("{}/local", dir)).required(false))
            // e.g. STOREFRONT__LOG__FILTER=debug
            .add_source(config::Environment::with_prefix("STOREFRONT").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
