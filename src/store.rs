//! Store trait definition for parameter store integrations.
//!
//! This module defines the [`ParameterStore`] trait: a single paged
//! `GetParametersByPath` request. Pagination, prefix stripping and failure
//! policy live in [`fetch`](crate::fetch) so every store shares them.

use crate::config::FetchOptions;
use crate::{Parameter, Result};
use async_trait::async_trait;

/// One page request against a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Normalized path (always ends with `/`)
    pub path: String,
    /// Descend into nested paths
    pub recursive: bool,
    /// Decrypt `SecureString` values
    pub with_decryption: bool,
    /// Maximum items in the returned page
    pub max_results: i32,
    /// Continuation token from the previous page
    pub next_token: Option<String>,
}

impl PageRequest {
    /// Builds the first request of a fetch.
    pub fn first(path: impl Into<String>, options: &FetchOptions) -> Self {
        Self {
            path: path.into(),
            recursive: options.recursive,
            with_decryption: options.with_decryption,
            max_results: options.page_size,
            next_token: None,
        }
    }
}

/// One page of results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    /// Parameters with their full names
    pub parameters: Vec<Parameter>,
    /// Present when more results are available
    pub next_token: Option<String>,
}

/// A remote hierarchical parameter store.
///
/// All implementations must be `Send + Sync` so a client can be shared
/// across async tasks.
///
/// # Implementations
///
/// - **SDK-based**: [`AwsParameterStore`](crate::backends::aws::AwsParameterStore)
/// - **Testing**: [`MockParameterStore`](crate::backends::mock::MockParameterStore)
///   with page chunking and error injection
#[async_trait]
pub trait ParameterStore: Send + Sync {
    /// Returns the store name (e.g. "ssm", "mock").
    fn name(&self) -> &str;

    /// Fetches a single page of parameters under `request.path`.
    ///
    /// # Errors
    ///
    /// Returns [`ParamStoreError::Request`](crate::ParamStoreError::Request)
    /// carrying the provider error code when the request fails.
    async fn get_parameters_by_path_page(&self, request: &PageRequest) -> Result<Page>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_request_follows_options() {
        let options = FetchOptions {
            page_size: 4,
            recursive: false,
            ..Default::default()
        };
        let request = PageRequest::first("/app/", &options);

        assert_eq!(request.path, "/app/");
        assert_eq!(request.max_results, 4);
        assert!(!request.recursive);
        assert!(request.with_decryption);
        assert_eq!(request.next_token, None);
    }
}
