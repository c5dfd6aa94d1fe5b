//! Request execution and response classification
//!
//! Every operation goes through the same three steps:
//! 1. [`HttpUtils::execute_request`] sends the request once and reads the body
//! 2. [`HttpUtils::classify`] turns `(status, body)` into either the parsed
//!    JSON body or an [`ApiError`]
//! 3. [`HttpUtils::extract_result`] pulls the typed `result` field out of it

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, Result};
use crate::types::CloudflareResponse;
use crate::utils::log_sanitizer::truncate_for_log;

/// Status accepted by reads and deletes.
pub const OK_ONLY: &[u16] = &[200];
/// Statuses accepted by creates.
pub const OK_OR_CREATED: &[u16] = &[200, 201];

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Sends the request exactly once and returns `(status, body)`.
    ///
    /// Only failures to obtain a response are errors here; any status code is
    /// returned as-is for [`classify`](Self::classify) to judge.
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String)> {
        log::debug!("{method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            log::error!("{method_name} {url} failed: {e}");
            ApiError::Transport {
                detail: describe_transport_error(&e),
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("Response Status: {status_code}");

        let response_text = response.text().await.map_err(|e| ApiError::Transport {
            detail: format!("failed to read response body: {e}"),
        })?;

        log::debug!("Response Body: {}", truncate_for_log(&response_text));

        Ok((status_code, response_text))
    }

    /// Classifies a response against the statuses the operation accepts.
    ///
    /// - body is not JSON → [`ApiError::MalformedResponse`]
    /// - status not in `accepted` → [`ApiError::Api`] carrying the body unchanged
    /// - otherwise the parsed body
    ///
    /// An empty body parses as `null`.
    pub fn classify(status: u16, response_text: &str, accepted: &[u16]) -> Result<Value> {
        let body = if response_text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(response_text).map_err(|e| {
                log::error!("JSON parse failed (HTTP {status}): {e}");
                log::error!("Raw response: {}", truncate_for_log(response_text));
                ApiError::MalformedResponse {
                    status,
                    detail: e.to_string(),
                }
            })?
        };

        if !accepted.contains(&status) {
            match first_error_message(&body) {
                Some(message) => log::warn!("API rejected request (HTTP {status}): {message}"),
                None => log::warn!("API rejected request (HTTP {status})"),
            }
            return Err(ApiError::Api { status, body });
        }

        Ok(body)
    }

    /// Deserializes the envelope's `result` field, which must be present.
    pub fn extract_result<T>(body: Value) -> Result<T>
    where
        T: DeserializeOwned,
    {
        Self::extract_optional_result(body)?.ok_or_else(|| ApiError::UnexpectedResult {
            detail: "response has no result field".to_string(),
        })
    }

    /// Like [`extract_result`](Self::extract_result), but a missing or `null`
    /// `result` (or an empty body) is not an error.
    pub fn extract_optional_result<T>(body: Value) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        if body.is_null() {
            return Ok(None);
        }
        let envelope: CloudflareResponse<T> =
            serde_json::from_value(body).map_err(|e| ApiError::UnexpectedResult {
                detail: e.to_string(),
            })?;
        Ok(envelope.result)
    }
}

fn describe_transport_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        format!("request timed out: {e}")
    } else if e.is_connect() {
        format!("connection failed: {e}")
    } else {
        e.to_string()
    }
}

/// First `errors[].message` of a Cloudflare error body, for logging.
fn first_error_message(body: &Value) -> Option<&str> {
    body.get("errors")?
        .as_array()?
        .first()?
        .get("message")?
        .as_str()
}
