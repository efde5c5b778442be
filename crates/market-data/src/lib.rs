use async_trait::async_trait;
use core_types::{Granularity, PriceBar, Symbol};

pub mod error;
pub mod rest_connector;
pub mod types;

// Re-export public types
pub use error::{Error, Result};
pub use rest_connector::RestConnector;

/// An open session against the market-data source.
///
/// Sessions are request-scoped: `BarSource::connect` mints one, every fetch
/// within the request presents it, and `BarSource::disconnect` consumes it.
/// Because the handle moves into `disconnect`, a released session cannot be
/// reused, and concurrent requests each hold their own handle instead of
/// sharing connector state.
#[derive(Debug)]
pub struct Session {
    token: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

/// The capability the trend core needs from a market-data source.
///
/// Each classification request brackets its fetches with `connect` and
/// `disconnect`; callers must call `disconnect` on every exit path after a
/// successful connect, so the terminal session is never leaked.
#[async_trait]
pub trait BarSource: Send + Sync {
    /// Opens a session against the data source with the configured
    /// credentials. Fails if the source is unreachable or rejects the login.
    async fn connect(&self) -> Result<Session>;

    /// Fetches the most recent `count` bars for `symbol` at `granularity`,
    /// ordered most-recent-last.
    ///
    /// Returns `Ok(None)` when the source has no data for this request;
    /// "no data" is an expected outcome, never an error.
    async fn fetch_bars(
        &self,
        session: &Session,
        symbol: &Symbol,
        granularity: Granularity,
        count: u32,
    ) -> Result<Option<Vec<PriceBar>>>;

    /// Lists the instrument catalogue of the source.
    async fn symbols(&self, session: &Session) -> Result<Vec<String>>;

    /// Closes the session, consuming the handle. Infallible by contract: a
    /// failed disconnect is logged by the implementation, not surfaced.
    async fn disconnect(&self, session: Session);
}
