use config::{Config, Environment, File};

pub mod error;
pub mod types;

// Re-export the most important types for easy access.
pub use error::{Error, Result};
pub use types::{MarketDataSettings, ServerSettings, Settings};

/// Loads the application settings, layered from lowest to highest priority:
///
/// 1. `config/base.toml` — defaults checked into the repository.
/// 2. `config/{APP_ENVIRONMENT}.toml` — per-environment overrides, optional.
/// 3. `APP__`-prefixed environment variables, `__` as the section separator
///    (e.g. `APP_MARKET_DATA__PASSWORD=...` so credentials can stay out of
///    the config files entirely).
pub fn load_settings() -> Result<Settings> {
    let environment = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "development".into());

    let raw = Config::builder()
        .add_source(File::with_name("config/base"))
        .add_source(File::with_name(&format!("config/{}", environment)).required(false))
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()?;

    let settings: Settings = raw.try_deserialize()?;
    Ok(settings)
}
