use axum::body::Bytes;
use serde::de::DeserializeOwned;

use super::error::RequestError;

/// Parses a JSON request body.
///
/// Unlike axum's `Json` extractor this does not look at the content type,
/// and reports failures with the API's own error messages.
pub fn parse_json<T: DeserializeOwned>(body: &Bytes) -> Result<T, RequestError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(RequestError::EmptyBody);
    }

    let parsed: Option<T> =
        serde_json::from_slice(body).map_err(|e| RequestError::InvalidJson(e.to_string()))?;
    parsed.ok_or(RequestError::NullRequest)
}
