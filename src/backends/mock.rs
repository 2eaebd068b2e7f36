//! Mock store for testing.
//!
//! This store keeps parameters in memory and pages through them the way the
//! real service does, with error injection for failure paths.

use crate::store::{Page, PageRequest, ParameterStore};
use crate::{ParamStoreError, Parameter, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Mock parameter store for testing.
///
/// Clones share the same parameters and request log, so a test can keep a
/// handle after moving the store into a client.
///
/// Continuation tokens are the decimal offset of the next item. The page
/// size is the smaller of the request's `max_results` and
/// [`page_size`](MockParameterStore::page_size) when set.
///
/// # Example
///
/// ```
/// use ssm_params::backends::mock::MockParameterStore;
/// use ssm_params::{Config, SsmClient};
///
/// #[tokio::main]
/// async fn main() -> ssm_params::Result<()> {
///     let mut store = MockParameterStore::new();
///     store.set_parameter("/app/db/host", "localhost").await;
///
///     // Fail the second page request
///     store.fail_on_page = Some((2, "AccessDeniedException".to_string()));
///     store.page_size = Some(1);
///     store.set_parameter("/app/db/port", "5432").await;
///
///     let client = SsmClient::with_store(Box::new(store), Config::default());
///     let result = client.get_parameters_by_path("/app/db").await;
///     assert!(result.is_err());
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct MockParameterStore {
    parameters: Arc<RwLock<BTreeMap<String, Parameter>>>,
    requests: Arc<RwLock<Vec<PageRequest>>>,

    /// Caps the page size below what the request asks for
    pub page_size: Option<usize>,
    /// 1-based request number to fail, with the provider error code to report
    pub fail_on_page: Option<(usize, String)>,
    /// Always hand back this token instead of the real continuation (must be a decimal offset)
    pub stuck_token: Option<String>,
}

impl MockParameterStore {
    /// Creates a new mock store with no parameters.
    pub fn new() -> Self {
        Self {
            parameters: Arc::new(RwLock::new(BTreeMap::new())),
            requests: Arc::new(RwLock::new(Vec::new())),
            page_size: None,
            fail_on_page: None,
            stuck_token: None,
        }
    }

    /// Pre-populates the store with a `String` parameter.
    pub async fn set_parameter(&self, name: impl Into<String>, value: impl Into<String>) {
        self.insert(Parameter::new(name, value)).await;
    }

    /// Pre-populates the store with a full parameter record.
    pub async fn insert(&self, param: Parameter) {
        let mut parameters = self.parameters.write().await;
        parameters.insert(param.name.clone(), param);
    }

    /// Returns every page request received so far.
    pub async fn requests(&self) -> Vec<PageRequest> {
        self.requests.read().await.clone()
    }

    fn matches(request: &PageRequest, name: &str) -> bool {
        match name.strip_prefix(&request.path) {
            Some(rest) if request.recursive => !rest.is_empty(),
            Some(rest) => !rest.is_empty() && !rest.contains('/'),
            None => false,
        }
    }
}

impl Default for MockParameterStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ParameterStore for MockParameterStore {
    fn name(&self) -> &str {
        "mock"
    }

    async fn get_parameters_by_path_page(&self, request: &PageRequest) -> Result<Page> {
        let request_number = {
            let mut requests = self.requests.write().await;
            requests.push(request.clone());
            requests.len()
        };

        if let Some((page, code)) = &self.fail_on_page {
            if *page == request_number {
                return Err(ParamStoreError::Request {
                    code: Some(code.clone()),
                    message: format!("injected failure on request {}", request_number),
                });
            }
        }

        let offset = match request.next_token.as_deref() {
            Some(token) => token.parse::<usize>().map_err(|_| ParamStoreError::Request {
                code: Some("InvalidNextToken".to_string()),
                message: format!("the token '{}' is not valid", token),
            })?,
            None => 0,
        };

        let limit = match self.page_size {
            Some(size) => size.min(request.max_results as usize),
            None => request.max_results as usize,
        }
        .max(1);

        let parameters = self.parameters.read().await;
        let matching: Vec<&Parameter> = parameters
            .values()
            .filter(|p| Self::matches(request, &p.name))
            .collect();

        let end = (offset + limit).min(matching.len());
        let page_items = matching
            .get(offset..end)
            .unwrap_or_default()
            .iter()
            .map(|p| (*p).clone())
            .collect();

        let next_token = if self.stuck_token.is_some() {
            self.stuck_token.clone()
        } else if end < matching.len() {
            Some(end.to_string())
        } else {
            None
        };

        Ok(Page {
            parameters: page_items,
            next_token,
        })
    }
}
