use thiserror::Error;

/// Error attached to a single form field.
///
/// The form keeps these tagged; the `Display` impl is the wording shown to
/// the user and is only used at the rendering boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("URL should be of format <http>://domain.<tld>")]
    DestinationFormat,
    #[error("This cannot be empty")]
    ShortCodeEmpty,
    #[error("Shortened url can only contain small letters and hyphens ( - )")]
    ShortCodeCharset,
    #[error("It cannot start or end with hyphen ( - )")]
    ShortCodeHyphenBoundary,
    #[error("Short url already take, please try something else")]
    Conflict,
    /// Backend validation the client did not anticipate; message is verbatim.
    #[error("{0}")]
    BackendRejected(String),
    #[error("Something terrible happened while we tried linking the url, try again later")]
    Generic,
}

impl FieldError {
    /// True for errors raised before any request was sent.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            FieldError::DestinationFormat
                | FieldError::ShortCodeEmpty
                | FieldError::ShortCodeCharset
                | FieldError::ShortCodeHyphenBoundary
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_message_is_rendered_verbatim() {
        let err = FieldError::BackendRejected("Short URL not in correct format".into());
        assert_eq!(err.to_string(), "Short URL not in correct format");
    }

    #[test]
    fn only_validation_errors_are_local() {
        assert!(FieldError::ShortCodeEmpty.is_local());
        assert!(FieldError::DestinationFormat.is_local());
        assert!(!FieldError::Conflict.is_local());
        assert!(!FieldError::Generic.is_local());
        assert!(!FieldError::BackendRejected(String::new()).is_local());
    }
}
