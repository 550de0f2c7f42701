//! Target link validation.

use url::Url;

/// Errors that can occur while validating a target link.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,
}

/// Validates that a target link is a well-formed absolute http(s) URL.
///
/// The link is stored exactly as supplied; no normalization is applied.
/// Relative references and schemes like `javascript:` or `file:` are
/// rejected.
///
/// # Errors
///
/// Returns [`LinkError::InvalidFormat`] for malformed URLs and
/// [`LinkError::UnsupportedProtocol`] for non-HTTP(S) schemes.
pub fn validate_link(input: &str) -> Result<(), LinkError> {
    let url = Url::parse(input).map_err(|e| LinkError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(LinkError::UnsupportedProtocol),
    }
}
