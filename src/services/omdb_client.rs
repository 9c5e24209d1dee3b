//! Client for the third-party movie search API (OMDb).
//!
//! The upstream answers every query with HTTP 200 and a JSON body whose
//! `Response` field is `"True"` or `"False"`; in the latter case `Error`
//! carries the reason (for example `"Movie not found!"`).

use std::time::Duration;

use serde_json::Value;

use crate::error::AppError;

pub struct OmdbClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    /// Build a client with one shared connection pool and a per-request timeout.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    /// Search titles by `name`.
    ///
    /// # Query Parameters Sent
    ///
    /// - `apikey`: configured API key
    /// - `s`: the search term (omitted when `name` is `None`)
    ///
    /// # Errors
    ///
    /// - `AppError::Upstream` when the upstream flags the search as failed
    /// - `AppError::UpstreamRequest` when the request fails or the body is not JSON
    pub async fn search(&self, name: Option<&str>) -> Result<Value, AppError> {
        let mut request = self
            .http
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str())]);
        if let Some(name) = name {
            request = request.query(&[("s", name)]);
        }

        let payload: Value = request.send().await?.json().await?;
        tracing::debug!(?payload, "Search upstream responded");

        interpret(payload)
    }
}

/// Pass successful payloads through untouched; turn logical failures into errors.
fn interpret(payload: Value) -> Result<Value, AppError> {
    if payload.get("Response").and_then(Value::as_str) == Some("True") {
        return Ok(payload);
    }

    let message = payload
        .get("Error")
        .and_then(Value::as_str)
        .unwrap_or("Unknown upstream error");
    Err(AppError::Upstream(message.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn successful_payload_is_returned_verbatim() {
        let payload = json!({
            "Search": [{ "Title": "Dune", "Year": "2021", "imdbID": "tt1160419" }],
            "totalResults": "1",
            "Response": "True"
        });

        assert_eq!(interpret(payload.clone()).unwrap(), payload);
    }

    #[test]
    fn logical_failure_carries_upstream_message() {
        let payload = json!({ "Response": "False", "Error": "Movie not found!" });

        match interpret(payload) {
            Err(AppError::Upstream(msg)) => assert_eq!(msg, "Movie not found!"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn payload_without_response_flag_is_a_failure() {
        assert!(matches!(
            interpret(json!({ "Search": [] })),
            Err(AppError::Upstream(_))
        ));
    }
}
