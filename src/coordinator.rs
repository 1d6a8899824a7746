//! Issues the creation request and classifies whatever comes back.
//!
//! Nothing escapes this module as an error: transport failures, bad bodies
//! and unexpected statuses all become an [`Outcome`].

use std::future::Future;

use reqwest::StatusCode;
use serde_json::Value;
use tracing::{Instrument, debug, info, info_span, warn};
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::errors::{AppError, FieldError, TransportError};
use crate::models::{ApiErrorResponse, CreateShortUrlRequest, is_truthy};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Classified result of one creation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// Short code already in use.
    Conflict,
    /// Backend rejected the input with its own message.
    ValidationFailure(String),
    GenericFailure,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }

    /// Error to show on the short-code field, if any. A backend rejection
    /// with an empty message leaves the field clean.
    pub fn field_error(&self) -> Option<FieldError> {
        match self {
            Outcome::Success => None,
            Outcome::Conflict => Some(FieldError::Conflict),
            Outcome::ValidationFailure(message) if message.is_empty() => None,
            Outcome::ValidationFailure(message) => {
                Some(FieldError::BackendRejected(message.clone()))
            }
            Outcome::GenericFailure => Some(FieldError::Generic),
        }
    }
}

/// Anything that can attempt to create a mapping.
pub trait LinkCreator {
    fn create(
        &self,
        destination_url: &str,
        short_code: &str,
    ) -> impl Future<Output = Outcome> + Send;
}

/// Maps a status and raw body onto an [`Outcome`].
///
/// The body is checked first: a body that does not parse, or parses to a
/// falsy value, is a generic failure whatever the status.
pub fn classify(status: StatusCode, body: &[u8]) -> Outcome {
    let value = match parse_body(body) {
        Ok(value) => value,
        Err(err) => {
            warn!(%status, error = %err, "unusable response body");
            return Outcome::GenericFailure;
        }
    };

    match status {
        StatusCode::CREATED => Outcome::Success,
        StatusCode::CONFLICT => Outcome::Conflict,
        _ => match ApiErrorResponse::from_value(&value) {
            Some(rejection) => {
                debug!(%status, details = ?rejection.error_details, "backend rejected mapping");
                Outcome::ValidationFailure(rejection.error)
            }
            None => {
                warn!(%status, "failure response without error message");
                Outcome::GenericFailure
            }
        },
    }
}

fn parse_body(body: &[u8]) -> Result<Value, TransportError> {
    let value: Value = serde_json::from_slice(body)?;
    if is_truthy(&value) {
        Ok(value)
    } else {
        Err(TransportError::FalsyBody)
    }
}

/// HTTP implementation of [`LinkCreator`] against `POST <api-base>/api/add`.
#[derive(Debug, Clone)]
pub struct RequestCoordinator {
    http: reqwest::Client,
    endpoint: String,
}

impl RequestCoordinator {
    pub fn new(config: &ClientConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            http,
            endpoint: config.add_endpoint(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// One request, no retries. Each call tries to create a new mapping.
    pub async fn submit(&self, destination_url: &str, short_code: &str) -> Outcome {
        let request_id = Uuid::new_v4();
        let body = CreateShortUrlRequest::new(destination_url, short_code);
        let span = info_span!("create_link", %request_id, short_code = %body.short_url);

        async move {
            match self.send(request_id, &body).await {
                Ok((status, bytes)) => {
                    let outcome = classify(status, &bytes);
                    info!(%status, ?outcome, "create request settled");
                    outcome
                }
                Err(err) => {
                    warn!(error = ?err, "create request failed");
                    Outcome::GenericFailure
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn send(
        &self,
        request_id: Uuid,
        body: &CreateShortUrlRequest,
    ) -> Result<(StatusCode, Vec<u8>), TransportError> {
        let response = self
            .http
            .post(&self.endpoint)
            .header(REQUEST_ID_HEADER, request_id.to_string())
            .json(body)
            .send()
            .await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        Ok((status, bytes.to_vec()))
    }
}

impl LinkCreator for RequestCoordinator {
    fn create(
        &self,
        destination_url: &str,
        short_code: &str,
    ) -> impl Future<Output = Outcome> + Send {
        self.submit(destination_url, short_code)
    }
}
