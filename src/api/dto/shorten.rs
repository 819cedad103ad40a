//! DTOs for link shortening endpoint.

use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use crate::error::AppError;

/// Request to shorten a URL.
///
/// Wire shape: `{ "params": { "url": "<original url>" } }`.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(nested)]
    pub params: ShortenParams,
}

/// Parameters of a shorten request.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenParams {
    /// The original URL, stored byte-for-byte. No scheme or reachability checks.
    #[validate(length(min = 1, message = "URL must not be empty"))]
    pub url: String,
}

impl ShortenRequest {
    /// Parses a raw request body into a [`ShortenRequest`].
    ///
    /// The body is either the JSON object itself or a JSON string whose
    /// contents are the serialized object. Both normalize to the same value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the body is not JSON, the inner
    /// text is not JSON, or `params.url` is missing or not a string.
    pub fn from_body(body: &[u8]) -> Result<Self, AppError> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| AppError::bad_request(format!("Body is not valid JSON: {e}")))?;

        let value = match value {
            Value::String(text) => serde_json::from_str(&text).map_err(|e| {
                AppError::bad_request(format!("Serialized body is not valid JSON: {e}"))
            })?,
            other => other,
        };

        serde_json::from_value(value)
            .map_err(|e| AppError::bad_request(format!("Invalid shorten request: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_structured_body() {
        let request =
            ShortenRequest::from_body(br#"{"params":{"url":"https://example.com"}}"#).unwrap();

        assert_eq!(request.params.url, "https://example.com");
    }

    #[test]
    fn test_from_serialized_text_body() {
        let body = serde_json::to_vec(&Value::String(
            r#"{"params":{"url":"https://example.com"}}"#.to_string(),
        ))
        .unwrap();

        let request = ShortenRequest::from_body(&body).unwrap();

        assert_eq!(request.params.url, "https://example.com");
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let request = ShortenRequest::from_body(
            br#"{"params":{"url":"https://example.com","domain":"x"},"headers":{}}"#,
        )
        .unwrap();

        assert_eq!(request.params.url, "https://example.com");
    }

    #[test]
    fn test_missing_url_field() {
        let err = ShortenRequest::from_body(br#"{"params":{}}"#).unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));

        let err = ShortenRequest::from_body(br#"{"url":"https://example.com"}"#).unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn test_null_url_is_rejected() {
        let err = ShortenRequest::from_body(br#"{"params":{"url":null}}"#).unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn test_malformed_bodies() {
        for body in [&b""[..], b"not json", br#""not json either""#, b"[1,2]"] {
            let result = ShortenRequest::from_body(body);
            assert!(matches!(result, Err(AppError::Validation { .. })));
        }
    }

    #[test]
    fn test_empty_url_fails_validation() {
        let request = ShortenRequest::from_body(br#"{"params":{"url":""}}"#).unwrap();
        assert!(request.validate().is_err());
    }
}
