use thiserror::Error;

use crate::utils::fetch::FetchError;

/// Failure taxonomy for one relay invocation. Everything here collapses to a
/// well-formed error response; the handler contract never surfaces a panic
/// or a crashed invocation to the hosting trigger.
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("missing required pdf_url parameter")]
    MissingPdfUrl,

    #[error("invalid pdf_url: {0}")]
    InvalidPdfUrl(#[from] url::ParseError),

    #[error("upstream fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("unexpected upstream content type: {found}")]
    UnexpectedContentType { found: String },

    #[error("body encoding failed: {0}")]
    Encode(#[from] std::io::Error),
}

impl RelayError {
    /// Missing or malformed caller input, as opposed to an upstream or
    /// encoding fault. Controls the client-error vs server-error split.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            RelayError::MissingPdfUrl | RelayError::InvalidPdfUrl(_)
        )
    }
}
