/// Errors raised while fetching, checking or persisting worker output.
///
/// `api` is the worker's display name (e.g. `RandomUserApi`).
#[derive(Debug, thiserror::Error)]
pub enum WorkerError {
    /// The HTTP request itself failed (network, DNS, TLS, body decode).
    #[error("Request to {api} failed: {error}")]
    Request {
        api: &'static str,
        #[source]
        error: reqwest::Error,
    },

    /// The API answered with a status other than 200.
    #[error("{api} returned status {status}: {message}")]
    Upstream {
        api: &'static str,
        status: u16,
        message: String,
    },

    /// The response JSON is missing something the worker needs.
    #[error("Wrong form data in response {api}, {detail} not found")]
    InvalidResponse { api: &'static str, detail: String },

    /// Persisting harvested people failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl WorkerError {
    pub(crate) fn invalid(api: &'static str, detail: impl Into<String>) -> Self {
        WorkerError::InvalidResponse {
            api,
            detail: detail.into(),
        }
    }
}
