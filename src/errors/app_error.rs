use thiserror::Error;

/// Failures that stop the client from starting. None of these ever reach
/// the form: they happen before a session exists.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid configuration for {key}: {reason}")]
    Config { key: &'static str, reason: String },
    #[error("failed to build http client")]
    HttpClient(#[from] reqwest::Error),
}

/// Everything that can go wrong between sending the request and reading a
/// usable body. Logged, then folded into `Outcome::GenericFailure`.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("request failed")]
    Request(#[from] reqwest::Error),
    #[error("response body is not json")]
    MalformedBody(#[from] serde_json::Error),
    #[error("response body is empty or falsy")]
    FalsyBody,
}

impl AppError {
    pub fn config(key: &'static str, reason: impl Into<String>) -> Self {
        AppError::Config {
            key,
            reason: reason.into(),
        }
    }
}
