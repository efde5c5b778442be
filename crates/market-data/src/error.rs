use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(#[from] serde_json::Error),
    #[error("Bridge error: code {code}, msg: {msg}")]
    BridgeError { code: i64, msg: String },
}

pub type Result<T> = std::result::Result<T, Error>;
