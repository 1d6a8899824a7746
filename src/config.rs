//! Client configuration, read from the environment (and `.env` via `dotenvy`
//! in the binary).

use std::env;
use std::time::Duration;

use crate::errors::AppError;

/// Prefix rendered in front of a short code once a link is created.
pub const DISPLAY_BASE: &str = "atomurl.ga/go";

pub const DEVELOPMENT_API_BASE: &str = "http://localhost:8001";
pub const PRODUCTION_API_BASE: &str = "https://atomurl.ga";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn api_base(&self) -> &'static str {
        match self {
            Environment::Development => DEVELOPMENT_API_BASE,
            Environment::Production => PRODUCTION_API_BASE,
        }
    }

    fn parse(raw: &str) -> Result<Self, AppError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "dev" | "development" => Ok(Environment::Development),
            "prod" | "production" => Ok(Environment::Production),
            other => Err(AppError::config(
                "APP_ENV",
                format!("expected development or production, got {other:?}"),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub environment: Environment,
    /// Base the `/api/add` path is appended to. No trailing slash.
    pub api_base: String,
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl ClientConfig {
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            api_base: environment.api_base().to_owned(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. `APP_ENV` picks the default
    /// API base, `API_BASE_URL` overrides it, `REQUEST_TIMEOUT_SECS` sets the
    /// per-request timeout.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let environment = match lookup("APP_ENV") {
            Some(raw) => Environment::parse(&raw)?,
            None => Environment::default(),
        };
        let mut config = Self::for_environment(environment);

        if let Some(base) = lookup("API_BASE_URL").filter(|b| !b.trim().is_empty()) {
            config = config.with_api_base(&base)?;
        }

        if let Some(raw) = lookup("REQUEST_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                AppError::config("REQUEST_TIMEOUT_SECS", format!("not a number: {raw:?}"))
            })?;
            if secs == 0 {
                return Err(AppError::config("REQUEST_TIMEOUT_SECS", "must be > 0"));
            }
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn with_api_base(mut self, base: &str) -> Result<Self, AppError> {
        let base = base.trim().trim_end_matches('/');
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(AppError::config(
                "API_BASE_URL",
                format!("must start with http:// or https://, got {base:?}"),
            ));
        }
        self.api_base = base.to_owned();
        Ok(self)
    }

    pub fn add_endpoint(&self) -> String {
        format!("{}/api/add", self.api_base)
    }
}

/// `"<display base>/<short code>"`.
pub fn short_url_for(short_code: &str) -> String {
    format!("{DISPLAY_BASE}/{short_code}")
}
