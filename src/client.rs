//! Client handle over a parameter store.

use crate::config::FetchOptions;
use crate::fetch::{fetch_parameter_list, fetch_parameters_by_path};
use crate::store::ParameterStore;
use crate::{Config, Parameter, Result};
use std::collections::HashMap;

/// Handle for fetching parameter paths.
///
/// The handle is immutable after construction and can be reused for any
/// number of sequential fetches. Nothing is cached between calls.
pub struct SsmClient {
    store: Box<dyn ParameterStore>,
    options: FetchOptions,
}

impl SsmClient {
    /// Connects to AWS SSM with the given configuration.
    ///
    /// Credentials are resolved immediately. No parameters are fetched.
    ///
    /// # Errors
    ///
    /// - [`ParamStoreError::Auth`](crate::ParamStoreError::Auth): the profile
    ///   or default chain could not produce credentials
    /// - [`ParamStoreError::InvalidConfig`](crate::ParamStoreError::InvalidConfig):
    ///   page size or page limit out of range
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ssm_params::{Config, SsmClient};
    ///
    /// #[tokio::main]
    /// async fn main() -> ssm_params::Result<()> {
    ///     let client = SsmClient::new(Config::new("us-east-1").with_profile("dev")).await?;
    ///     let db = client.get_parameters_by_path("/app/db").await?;
    ///     println!("host = {:?}", db.get("host"));
    ///     Ok(())
    /// }
    /// ```
    #[cfg(feature = "aws")]
    pub async fn new(config: Config) -> Result<Self> {
        config.fetch.validate()?;
        let store = crate::backends::aws::AwsParameterStore::connect(&config).await?;

        tracing::info!(
            region = store.region(),
            profile = config.profile_name(),
            endpoint = config.endpoint.as_deref().unwrap_or("default"),
            "connected to SSM parameter store"
        );

        Ok(Self::with_store(Box::new(store), config))
    }

    /// Builds a handle over any store, without credential resolution.
    pub fn with_store(store: Box<dyn ParameterStore>, config: Config) -> Self {
        Self {
            store,
            options: config.fetch,
        }
    }

    /// Name of the underlying store.
    pub fn store_name(&self) -> &str {
        self.store.name()
    }

    /// Fetch options applied to every call.
    pub fn options(&self) -> &FetchOptions {
        &self.options
    }

    /// Fetches every parameter under `path` as relative name to value.
    ///
    /// See [`fetch_parameters_by_path`] for pagination and failure behaviour.
    pub async fn get_parameters_by_path(&self, path: &str) -> Result<HashMap<String, String>> {
        fetch_parameters_by_path(self.store.as_ref(), path, &self.options).await
    }

    /// Fetches every parameter under `path` as full records with relative names.
    pub async fn get_parameter_list(&self, path: &str) -> Result<Vec<Parameter>> {
        fetch_parameter_list(self.store.as_ref(), path, &self.options).await
    }
}
