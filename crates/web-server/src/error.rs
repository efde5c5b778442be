use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Trend(#[from] trend::Error),

    #[error("Failed to bind the server address: {0}")]
    ServerBindError(std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            // The whole request aborts when the data source is down; no
            // partial aggregate is ever returned.
            Error::Trend(trend::Error::DataSource(_)) => StatusCode::SERVICE_UNAVAILABLE,
            Error::Trend(trend::Error::NoData) => StatusCode::NOT_FOUND,
            Error::Trend(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::ServerBindError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::error!(error = %self, status = %status, "request failed");
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, Error>;
