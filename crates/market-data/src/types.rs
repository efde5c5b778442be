use serde::{Deserialize, Serialize};

/// Body for `POST /connect` on the terminal bridge.
#[derive(Debug, Serialize)]
pub struct ConnectRequest<'a> {
    pub login: i64,
    pub password: &'a str,
    pub server: &'a str,
}

/// Response from `POST /connect`: the session token used on later calls.
#[derive(Debug, Deserialize)]
pub struct ConnectResponse {
    pub token: String,
}

/// A raw bar row as the bridge serializes it: a JSON array of
/// `[time, open, high, low, close, tick_volume]`.
#[derive(Debug, Deserialize)]
pub struct RawBar(
    pub i64, // 0: bar open time, epoch seconds
    pub f64, // 1: open
    pub f64, // 2: high
    pub f64, // 3: low
    pub f64, // 4: close
    pub i64, // 5: tick volume (unused)
);

/// One entry of the bridge's instrument catalogue.
#[derive(Debug, Deserialize)]
pub struct SymbolInfo {
    pub name: String,
}
