//! Paginated fetch-and-flatten over any [`ParameterStore`].

use crate::config::FetchOptions;
use crate::path::{normalize_path, relative_key};
use crate::store::{PageRequest, ParameterStore};
use crate::{ParamStoreError, Parameter, Result};
use std::collections::HashMap;
use tracing::{debug, error};

/// Fetches every parameter under `path` as a map of relative name to value.
///
/// `path` gets a trailing `/` if it lacks one. Continuation tokens are
/// followed until the store stops returning one, up to
/// `options.max_pages` pages. Duplicate relative names keep the last value
/// seen.
///
/// # Errors
///
/// - [`ParamStoreError::Fetch`]: a page request failed; results from earlier
///   pages are discarded
/// - [`ParamStoreError::PageLimitExceeded`]: the store was still returning
///   continuation tokens at the page limit
/// - [`ParamStoreError::InvalidConfig`]: `options` failed validation
///
/// # Example
///
/// ```
/// use ssm_params::backends::mock::MockParameterStore;
/// use ssm_params::fetch::fetch_parameters_by_path;
/// use ssm_params::FetchOptions;
///
/// #[tokio::main]
/// async fn main() -> ssm_params::Result<()> {
///     let store = MockParameterStore::new();
///     store.set_parameter("/app/db/host", "localhost").await;
///     store.set_parameter("/app/db/port", "5432").await;
///
///     let params = fetch_parameters_by_path(&store, "/app/db", &FetchOptions::default()).await?;
///     assert_eq!(params["host"], "localhost");
///     assert_eq!(params["port"], "5432");
///     Ok(())
/// }
/// ```
pub async fn fetch_parameters_by_path(
    store: &dyn ParameterStore,
    path: &str,
    options: &FetchOptions,
) -> Result<HashMap<String, String>> {
    let mut parameters = HashMap::new();

    walk_pages(store, path, options, |key, param| {
        parameters.insert(key.to_string(), param.value);
    })
    .await?;

    Ok(parameters)
}

/// Fetches every parameter under `path` as full records.
///
/// Names are rewritten to their relative keys. Pagination and failure
/// behaviour match [`fetch_parameters_by_path`].
pub async fn fetch_parameter_list(
    store: &dyn ParameterStore,
    path: &str,
    options: &FetchOptions,
) -> Result<Vec<Parameter>> {
    let mut parameters = Vec::new();

    walk_pages(store, path, options, |key, param| {
        parameters.push(Parameter {
            name: key.to_string(),
            ..param
        });
    })
    .await?;

    Ok(parameters)
}

async fn walk_pages<F>(
    store: &dyn ParameterStore,
    path: &str,
    options: &FetchOptions,
    mut on_parameter: F,
) -> Result<()>
where
    F: FnMut(&str, Parameter),
{
    options.validate()?;

    let path = normalize_path(path);
    let mut request = PageRequest::first(path.as_str(), options);
    let mut page_number = 0;

    loop {
        page_number += 1;

        let page = match store.get_parameters_by_path_page(&request).await {
            Ok(page) => page,
            Err(e) => {
                error!(
                    store = store.name(),
                    path = %path,
                    page = page_number,
                    code = e.code().unwrap_or("unknown"),
                    "Error getting parameters from {}: {}",
                    store.name(),
                    e.code().unwrap_or("unknown")
                );
                return Err(ParamStoreError::fetch_failed(path, page_number, e));
            }
        };

        debug!(
            path = %path,
            page = page_number,
            count = page.parameters.len(),
            more = page.next_token.is_some(),
            "fetched parameter page"
        );

        for param in page.parameters {
            let key = relative_key(&param.name, &path).to_string();
            on_parameter(&key, param);
        }

        match page.next_token {
            Some(token) if page_number >= options.max_pages => {
                error!(
                    path = %path,
                    max_pages = options.max_pages,
                    token = %token,
                    "page limit reached with continuation token still present"
                );
                return Err(ParamStoreError::PageLimitExceeded {
                    path,
                    max_pages: options.max_pages,
                });
            }
            Some(token) => request.next_token = Some(token),
            None => break,
        }
    }

    Ok(())
}
