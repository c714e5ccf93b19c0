/// Failures surfaced by [`crate::Backend`] calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, CORS, DNS...).
    #[error("{0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    ///
    /// `message` carries the `error` field of a JSON body when there was one;
    /// `body_is_json` is false when the body could not be read or parsed as JSON.
    #[error("{status_text}")]
    Status {
        status: u16,
        status_text: String,
        message: Option<String>,
        body_is_json: bool,
    },

    /// A 2xx response whose body did not have the expected shape.
    #[error("Unexpected response body: {0}")]
    Decode(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }

    /// True for a non-2xx reply whose body was not JSON (an HTML error page, a proxy
    /// banner, an empty body).
    pub fn has_unreadable_body(&self) -> bool {
        matches!(
            self,
            ApiError::Status {
                body_is_json: false,
                ..
            }
        )
    }

    /// Server-provided message, ignoring blank strings.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message.as_str()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            ApiError::InvalidUrl(err.to_string())
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}
