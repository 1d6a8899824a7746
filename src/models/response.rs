use serde::Deserialize;
use serde_json::Value;

/// Failure body returned by the backend for any non-201 status.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiErrorResponse {
    pub error: String,
    #[serde(default)]
    pub error_details: Option<String>,
}

impl ApiErrorResponse {
    /// Extracts the error body, if the value carries a string `error`.
    pub fn from_value(value: &Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }
}

/// JSON truthiness as the browser client saw it: `null`, `false`, `0` and
/// `""` are falsy, every object and array is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
