use async_trait::async_trait;
use serde_json::Value;

use app_config::types::MarketDataSettings;
use core_types::{Granularity, PriceBar, Symbol};

use crate::error::{Error, Result};
use crate::types::{ConnectRequest, ConnectResponse, RawBar, SymbolInfo};
use crate::{BarSource, Session};

const SESSION_HEADER: &str = "X-Terminal-Session";

/// A `BarSource` backed by a REST bridge in front of the trading terminal.
///
/// The bridge exposes `POST /connect` (login/password/server, returns a
/// session token), `GET /rates`, `GET /symbols` and `POST /disconnect`.
/// Failed calls come back as a `{"code": ..., "msg": ...}` envelope.
///
/// The connector itself is stateless; each request's token lives in the
/// `Session` handle minted by `connect`, so one connector can serve
/// concurrent requests without their sessions interfering.
pub struct RestConnector {
    /// The persistent HTTP client.
    http_client: reqwest::Client,
    settings: MarketDataSettings,
}

impl RestConnector {
    pub fn new(settings: MarketDataSettings) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            settings,
        }
    }

    /// Checks a raw response body for the bridge's error envelope before
    /// handing it to the caller for deserialization.
    fn check_envelope(body: &str) -> Result<Value> {
        let value: Value = serde_json::from_str(body)?;
        if let Some(code) = value.get("code").and_then(Value::as_i64) {
            if code != 0 {
                let msg = value
                    .get("msg")
                    .and_then(Value::as_str)
                    .unwrap_or("Unknown error")
                    .to_string();
                return Err(Error::BridgeError { code, msg });
            }
        }
        Ok(value)
    }
}

#[async_trait]
impl BarSource for RestConnector {
    async fn connect(&self) -> Result<Session> {
        let url = format!("{}/connect", self.settings.rest_base_url);
        let body = ConnectRequest {
            login: self.settings.login,
            password: &self.settings.password,
            server: &self.settings.server,
        };

        let text = self
            .http_client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(Error::RequestFailed)?
            .text()
            .await
            .map_err(Error::RequestFailed)?;

        let value = Self::check_envelope(&text)?;
        let response: ConnectResponse = serde_json::from_value(value)?;

        tracing::debug!(server = %self.settings.server, "connected to market-data bridge");
        Ok(Session::new(response.token))
    }

    async fn fetch_bars(
        &self,
        session: &Session,
        symbol: &Symbol,
        granularity: Granularity,
        count: u32,
    ) -> Result<Option<Vec<PriceBar>>> {
        let url = format!(
            "{}/rates?symbol={}&timeframe={}&count={}",
            self.settings.rest_base_url,
            symbol,
            granularity.code(),
            count
        );

        let text = self
            .http_client
            .get(&url)
            .header(SESSION_HEADER, session.token())
            .send()
            .await
            .map_err(Error::RequestFailed)?
            .text()
            .await
            .map_err(Error::RequestFailed)?;

        let value = Self::check_envelope(&text)?;

        // The bridge answers `null` (or an empty list) when the terminal has
        // no bars for this request. That is a skip, not a failure.
        if value.is_null() {
            return Ok(None);
        }
        let raw: Vec<RawBar> = serde_json::from_value(value)?;
        if raw.is_empty() {
            return Ok(None);
        }

        let bars = raw
            .into_iter()
            .map(|r| PriceBar {
                time: r.0,
                open: r.1,
                high: r.2,
                low: r.3,
                close: r.4,
            })
            .collect();

        Ok(Some(bars))
    }

    async fn symbols(&self, session: &Session) -> Result<Vec<String>> {
        let url = format!("{}/symbols", self.settings.rest_base_url);

        let text = self
            .http_client
            .get(&url)
            .header(SESSION_HEADER, session.token())
            .send()
            .await
            .map_err(Error::RequestFailed)?
            .text()
            .await
            .map_err(Error::RequestFailed)?;

        let value = Self::check_envelope(&text)?;
        let infos: Vec<SymbolInfo> = serde_json::from_value(value)?;
        Ok(infos.into_iter().map(|s| s.name).collect())
    }

    async fn disconnect(&self, session: Session) {
        let url = format!("{}/disconnect", self.settings.rest_base_url);
        let result = self
            .http_client
            .post(&url)
            .header(SESSION_HEADER, session.token())
            .send()
            .await;

        // A failed disconnect leaves a stale session on the terminal side;
        // nothing we can do about it here beyond logging.
        if let Err(e) = result {
            tracing::warn!(error = %e, "failed to disconnect from market-data bridge");
        }
    }
}
