use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::checking::State;

/// Everything that can go wrong while sampling one endpoint. The display
/// strings double as the Nagios status message.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Cannot connect to Graylog API")]
    Connect(#[source] reqwest::Error),
    #[error("No response received from Graylog API")]
    NoResponse,
    #[error("Graylog API replied with HTTP code {0}")]
    Status(u16),
    #[error("Cannot parse JSON from Graylog API")]
    Json(#[source] serde_json::Error),
    #[error("Missing or invalid field '{0}' in Graylog API response")]
    Projection(String),
}

impl ApiError {
    /// Transport failures are CRITICAL, decoding failures UNKNOWN.
    pub fn state(&self) -> State {
        match self {
            Self::Connect(_) | Self::NoResponse | Self::Status(_) => State::Crit,
            Self::Json(_) | Self::Projection(_) => State::Unknown,
        }
    }
}

pub struct ApiClient {
    client: Client,
    base_url: String,
    user: String,
    password: String,
    debug: bool,
}

impl ApiClient {
    pub fn new(
        client: Client,
        base_url: String,
        user: String,
        password: String,
        debug: bool,
    ) -> Self {
        Self {
            client,
            base_url,
            user,
            password,
            debug,
        }
    }

    /// Issues an authenticated GET against `base + endpoint` and decodes
    /// the body into a generic JSON tree. No retries.
    pub async fn get(&self, endpoint: &str) -> Result<Value, ApiError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, endpoint))
            .basic_auth(&self.user, Some(&self.password))
            .send()
            .await
            .map_err(ApiError::Connect)?;

        let status = response.status();
        let body = response.bytes().await.map_err(|_| ApiError::NoResponse)?;

        if self.debug {
            println!("{}", String::from_utf8_lossy(&body));
        }

        if body.is_empty() {
            return Err(ApiError::NoResponse);
        }
        if status != StatusCode::OK {
            return Err(ApiError::Status(status.as_u16()));
        }

        serde_json::from_slice(&body).map_err(ApiError::Json)
    }
}

fn projection_error(pointer: &str) -> ApiError {
    ApiError::Projection(pointer.trim_start_matches('/').replace('/', "."))
}

/// Projects a required numeric field out of a decoded response.
/// `pointer` is a JSON pointer, e.g. `/counts/events`.
pub fn require_f64(value: &Value, pointer: &str) -> Result<f64, ApiError> {
    value
        .pointer(pointer)
        .and_then(Value::as_f64)
        .ok_or_else(|| projection_error(pointer))
}

pub fn require_bool(value: &Value, pointer: &str) -> Result<bool, ApiError> {
    value
        .pointer(pointer)
        .and_then(Value::as_bool)
        .ok_or_else(|| projection_error(pointer))
}

pub fn require_str(value: &Value, pointer: &str) -> Result<String, ApiError> {
    value
        .pointer(pointer)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| projection_error(pointer))
}

pub fn require_array<'a>(value: &'a Value, pointer: &str) -> Result<&'a Vec<Value>, ApiError> {
    value
        .pointer(pointer)
        .and_then(Value::as_array)
        .ok_or_else(|| projection_error(pointer))
}
