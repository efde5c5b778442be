use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    /// The application's general settings.
    pub app: AppSettings,
    /// Settings for the market-data bridge connection.
    pub market_data: MarketDataSettings,
    /// Settings for the HTTP server.
    pub server: ServerSettings,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AppSettings {
    /// The environment the application is running in (e.g. "development").
    pub environment: String,
    /// The log level for the application.
    pub log_level: String,
}

/// Credentials and endpoint for the trading-terminal REST bridge.
#[derive(Deserialize, Debug, Clone)]
pub struct MarketDataSettings {
    /// The REST base URL of the bridge, e.g. "http://127.0.0.1:5005".
    pub rest_base_url: String,
    /// The terminal account login.
    pub login: i64,
    /// The terminal account password.
    pub password: String,
    /// The broker server name, e.g. "OctaFX-Demo".
    pub server: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}
