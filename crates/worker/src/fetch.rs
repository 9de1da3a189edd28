//! JSON-over-HTTP fetching for workers.
//!
//! [`HttpFetcher`] is the production implementation on top of [`reqwest`].
//! [`StaticFetcher`] serves canned bodies from memory so workers and the
//! HTTP server can be exercised without reaching the public APIs.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

use crate::error::WorkerError;

/// Query string parameters as `(name, value)` pairs.
pub type QueryParams = [(&'static str, String)];

/// Fetch a JSON document with a GET request.
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    /// GET `url` with `params` and return the parsed body.
    ///
    /// `api` names the calling worker and is carried into errors.
    async fn get_json(
        &self,
        api: &'static str,
        url: &str,
        params: &QueryParams,
    ) -> Result<Value, WorkerError>;
}

/// [`JsonFetcher`] over a shared [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reuse an existing client (and its connection pool).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl JsonFetcher for HttpFetcher {
    async fn get_json(
        &self,
        api: &'static str,
        url: &str,
        params: &QueryParams,
    ) -> Result<Value, WorkerError> {
        tracing::debug!(api, url, "Fetching");

        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|error| WorkerError::Request { api, error })?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::warn!(api, status = status.as_u16(), "Upstream API returned an error");
            return Err(WorkerError::Upstream {
                api,
                status: status.as_u16(),
                message: upstream_message(&body),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|error| WorkerError::Request { api, error })
    }
}

/// Pull a human-readable message out of an error body.
///
/// Understands `{"error": {"message": "..."}}` and `{"error": "..."}`;
/// anything else is returned verbatim.
pub fn upstream_message(body: &str) -> String {
    let parsed: Option<Value> = serde_json::from_str(body).ok();
    let error = parsed.as_ref().and_then(|v| v.get("error"));

    match error {
        Some(Value::String(message)) => message.clone(),
        Some(inner) => inner
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| body.to_string()),
        None => body.to_string(),
    }
}

// ---------------------------------------------------------------------------
// In-memory fetcher
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
enum CannedResponse {
    Json(Value),
    Status { status: u16, message: String },
}

/// [`JsonFetcher`] that answers from a URL → response table.
///
/// Query parameters do not take part in matching but are recorded, so
/// callers can assert which requests a worker made.
#[derive(Debug, Default)]
pub struct StaticFetcher {
    responses: HashMap<String, CannedResponse>,
    calls: Mutex<Vec<String>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer GETs to `url` with `body`.
    pub fn with_json(mut self, url: impl Into<String>, body: Value) -> Self {
        self.responses.insert(url.into(), CannedResponse::Json(body));
        self
    }

    /// Answer GETs to `url` with a non-200 status.
    pub fn with_status(mut self, url: impl Into<String>, status: u16, message: &str) -> Self {
        self.responses.insert(
            url.into(),
            CannedResponse::Status {
                status,
                message: message.to_string(),
            },
        );
        self
    }

    /// Every request made so far, formatted as `url?name=value&...`.
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    /// Number of requests made to `url`, regardless of parameters.
    pub fn call_count(&self, url: &str) -> usize {
        self.calls()
            .iter()
            .filter(|c| c.split('?').next() == Some(url))
            .count()
    }
}

#[async_trait]
impl JsonFetcher for StaticFetcher {
    async fn get_json(
        &self,
        api: &'static str,
        url: &str,
        params: &QueryParams,
    ) -> Result<Value, WorkerError> {
        let query: Vec<String> = params.iter().map(|(k, v)| format!("{k}={v}")).collect();
        let call = if query.is_empty() {
            url.to_string()
        } else {
            format!("{url}?{}", query.join("&"))
        };
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }

        match self.responses.get(url) {
            Some(CannedResponse::Json(body)) => Ok(body.clone()),
            Some(CannedResponse::Status { status, message }) => Err(WorkerError::Upstream {
                api,
                status: *status,
                message: message.clone(),
            }),
            None => Err(WorkerError::Upstream {
                api,
                status: 404,
                message: format!("no canned response for {url}"),
            }),
        }
    }
}
