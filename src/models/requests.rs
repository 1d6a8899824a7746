use serde::Serialize;

/// Body of `POST /api/add`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CreateShortUrlRequest {
    #[serde(rename = "destinationURL")]
    pub destination_url: String,
    #[serde(rename = "shortURL")]
    pub short_url: String,
}

impl CreateShortUrlRequest {
    /// Both values are sent with surrounding whitespace trimmed.
    pub fn new(destination_url: &str, short_url: &str) -> Self {
        Self {
            destination_url: destination_url.trim().to_owned(),
            short_url: short_url.trim().to_owned(),
        }
    }
}
