//! HTTP response types for the strategy API client.
//!
//! [`HttpResponse`] carries the raw status, headers and body text exactly as
//! received. Status codes are only interpreted when the body is read through
//! [`HttpResponse::into_content`].

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::clients::errors::{HttpError, HttpResponseError};

/// A raw response from the strategy API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lower-cased header name.
    pub headers: HashMap<String, Vec<String>>,
    /// The response body as text.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new response, lower-casing header names.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: impl Into<String>) -> Self {
        let headers = headers
            .into_iter()
            .map(|(name, values)| (name.to_lowercase(), values))
            .collect();

        Self {
            code,
            headers,
            body: body.into(),
        }
    }

    /// Returns `true` for 2xx status codes.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Reads the body of a successful response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] carrying the status code, body and
    /// request id when the status is not 2xx.
    pub fn into_content(self) -> Result<String, HttpError> {
        if self.is_ok() {
            return Ok(self.body);
        }

        let error_reference = self.request_id().map(String::from);
        Err(HttpResponseError {
            code: self.code,
            message: self.body,
            error_reference,
        }
        .into())
    }

    /// Decodes the body as JSON regardless of the status code.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), vec![(*v).to_string()]))
            .collect()
    }

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in 200..=299 {
            let response = HttpResponse::new(code, HashMap::new(), "");
            assert!(
                response.is_ok(),
                "Expected is_ok() to be true for code {code}"
            );
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_other_codes() {
        for code in [301, 400, 404, 429, 500, 503] {
            assert!(!HttpResponse::new(code, HashMap::new(), "").is_ok());
        }
    }

    #[test]
    fn test_header_names_are_case_insensitive() {
        let response = HttpResponse::new(200, headers(&[("X-Request-Id", "req-42")]), "{}");

        assert_eq!(response.request_id(), Some("req-42"));
        assert_eq!(response.header("X-REQUEST-ID"), Some("req-42"));
        assert!(response.header("content-type").is_none());
    }

    #[test]
    fn test_into_content_returns_body_for_success() {
        let response = HttpResponse::new(200, HashMap::new(), r#"[{"id":1}]"#);
        assert_eq!(response.into_content().unwrap(), r#"[{"id":1}]"#);
    }

    #[test]
    fn test_into_content_fails_for_error_status() {
        let response = HttpResponse::new(
            404,
            headers(&[("x-request-id", "abc-123")]),
            r#"{"detail":"Not Found"}"#,
        );

        match response.into_content() {
            Err(HttpError::Response(error)) => {
                assert_eq!(error.code, 404);
                assert_eq!(error.message, r#"{"detail":"Not Found"}"#);
                assert_eq!(error.error_reference.as_deref(), Some("abc-123"));
            }
            other => panic!("Expected response error, got {other:?}"),
        }
    }

    #[test]
    fn test_json_decodes_body() {
        let response = HttpResponse::new(200, HashMap::new(), r#"{"data":{"x":1}}"#);
        let value: serde_json::Value = response.json().unwrap();
        assert_eq!(value, json!({"data": {"x": 1}}));

        let invalid = HttpResponse::new(200, HashMap::new(), "<html>");
        assert!(invalid.json::<serde_json::Value>().is_err());
    }
}
