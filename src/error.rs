use thiserror::Error;

/// Boxed error returned by [`crate::tidal::HttpClient`] implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result type used by every TIDAL client operation.
pub type Result<T> = std::result::Result<T, TidalError>;

/// Errors produced while talking to the TIDAL API.
///
/// Operation failures are wrapped in [`TidalError::Endpoint`] or
/// [`TidalError::Decode`] so the message names the endpoint that failed.
/// Use [`TidalError::status_code`] to reach the HTTP status through the
/// wrapping.
#[derive(Debug, Error)]
pub enum TidalError {
    /// A mandatory argument was empty. No request has been sent.
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),

    /// The client-credentials exchange did not produce a token.
    #[error("authentication failed: {0}")]
    Authentication(#[source] Box<TidalError>),

    /// The HTTP client could not complete the request.
    #[error("failed to send request to {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: BoxError,
    },

    /// The API answered with a status other than 200 or 207.
    #[error("returned an unexpected status code: {0}")]
    UnexpectedStatus(u16),

    /// The response body did not match the expected JSON shape.
    #[error("failed to decode the {endpoint} response body: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Another error, tagged with the endpoint that produced it.
    #[error("failed to connect to the {endpoint} endpoint: {source}")]
    Endpoint {
        endpoint: &'static str,
        #[source]
        source: Box<TidalError>,
    },
}

impl TidalError {
    /// Wraps the error with the name of the endpoint that produced it.
    pub(crate) fn at(self, endpoint: &'static str) -> Self {
        TidalError::Endpoint {
            endpoint,
            source: Box::new(self),
        }
    }

    /// Returns the unexpected HTTP status code behind this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            TidalError::UnexpectedStatus(code) => Some(*code),
            TidalError::Authentication(source) => source.status_code(),
            TidalError::Endpoint { source, .. } => source.status_code(),
            _ => None,
        }
    }

    /// Returns `true` when a mandatory argument was missing.
    pub fn is_missing_parameter(&self) -> bool {
        matches!(self, TidalError::MissingParameter(_))
    }
}
