//! Error types for parameter store operations.

use thiserror::Error;

/// Result type alias using [`ParamStoreError`].
pub type Result<T> = std::result::Result<T, ParamStoreError>;

/// Errors that can occur while building a client or fetching parameters.
///
/// All errors implement `std::error::Error` and can be chained with `source()`.
#[derive(Debug, Error)]
pub enum ParamStoreError {
    /// Credentials could not be resolved when the client was constructed.
    #[error("credential resolution failed for profile '{profile}': {source}")]
    Auth {
        /// Profile name (empty for the default credential chain)
        profile: String,
        /// Underlying provider error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A single request to the remote store failed.
    #[error("{}: {message}", .code.as_deref().unwrap_or("unknown"))]
    Request {
        /// Provider error code (e.g. `AccessDeniedException`), when one was returned
        code: Option<String>,
        /// Human-readable description of the failure
        message: String,
    },

    /// Fetching a path failed on one of its pages. No partial results survive.
    #[error("fetching {path} failed on page {page}: {source}")]
    Fetch {
        /// Normalized path that was being fetched
        path: String,
        /// 1-based page number of the failing request
        page: usize,
        /// Underlying error
        #[source]
        source: Box<ParamStoreError>,
    },

    /// The store kept returning continuation tokens past the configured bound.
    #[error("fetching {path} exceeded the limit of {max_pages} pages")]
    PageLimitExceeded {
        /// Normalized path that was being fetched
        path: String,
        /// Configured page limit
        max_pages: usize,
    },

    /// Configuration values are out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other error (catch-all).
    ///
    /// Nothing in this crate produces it; it lets callers and custom
    /// [`ParameterStore`](crate::ParameterStore) implementations raise
    /// `anyhow` errors with `?`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ParamStoreError {
    /// Wraps a page request error with the path and page it happened on.
    ///
    /// # Example
    ///
    /// ```
    /// use ssm_params::ParamStoreError;
    ///
    /// let err = ParamStoreError::Request {
    ///     code: Some("AccessDeniedException".to_string()),
    ///     message: "not authorized".to_string(),
    /// };
    /// let wrapped = ParamStoreError::fetch_failed("/app/", 2, err);
    ///
    /// assert_eq!(
    ///     wrapped.to_string(),
    ///     "fetching /app/ failed on page 2: AccessDeniedException: not authorized"
    /// );
    /// ```
    pub fn fetch_failed(path: impl Into<String>, page: usize, err: ParamStoreError) -> Self {
        Self::Fetch {
            path: path.into(),
            page,
            source: Box::new(err),
        }
    }

    /// Returns the provider error code, looking through [`ParamStoreError::Fetch`] wrappers.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Request { code, .. } => code.as_deref(),
            Self::Fetch { source, .. } => source.code(),
            _ => None,
        }
    }

    /// True for credential failures at construction time.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth { .. })
    }
}
