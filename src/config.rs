//! Configuration types for client construction and path fetches.

use crate::{ParamStoreError, Result};

/// Environment variable holding an optional SSM endpoint override.
pub const ENDPOINT_ENV_VAR: &str = "SSM_ENDPOINT";

/// Largest page the SSM `GetParametersByPath` API accepts.
pub const MAX_PAGE_SIZE: i32 = 10;

/// Default number of pages a single fetch may walk before giving up.
pub const DEFAULT_MAX_PAGES: usize = 1000;

/// Options that shape each path fetch.
///
/// These are carried by the client and applied to every
/// [`get_parameters_by_path`](crate::SsmClient::get_parameters_by_path) call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    /// Items requested per page (1..=10)
    pub page_size: i32,

    /// Upper bound on pages per fetch
    pub max_pages: usize,

    /// Descend into nested paths
    pub recursive: bool,

    /// Decrypt `SecureString` values
    pub with_decryption: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            page_size: MAX_PAGE_SIZE,
            max_pages: DEFAULT_MAX_PAGES,
            recursive: true,
            with_decryption: true,
        }
    }
}

impl FetchOptions {
    /// Checks that the page size and page limit are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ParamStoreError::InvalidConfig`] when `page_size` is outside
    /// `1..=10` or `max_pages` is zero.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(ParamStoreError::InvalidConfig(format!(
                "page size must be between 1 and {}, got {}",
                MAX_PAGE_SIZE, self.page_size
            )));
        }

        if self.max_pages == 0 {
            return Err(ParamStoreError::InvalidConfig(
                "max pages must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration for creating an [`SsmClient`](crate::SsmClient).
///
/// Use the builder pattern for ergonomic configuration:
///
/// ```
/// use ssm_params::Config;
///
/// let config = Config::new("eu-west-1")
///     .with_profile("staging")
///     .with_endpoint("http://localhost:4566")
///     .with_page_size(5);
///
/// assert_eq!(config.profile.as_deref(), Some("staging"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Service region (not validated locally)
    pub region: String,

    /// Named credential profile; `None` uses the default credential chain
    pub profile: Option<String>,

    /// Service endpoint override (LocalStack, test doubles)
    pub endpoint: Option<String>,

    /// Per-fetch options
    pub fetch: FetchOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            region: "us-east-1".to_string(),
            profile: None,
            endpoint: None,
            fetch: FetchOptions::default(),
        }
    }
}

impl Config {
    /// Creates a configuration bound to `region`.
    ///
    /// # Example
    ///
    /// ```
    /// use ssm_params::Config;
    ///
    /// let config = Config::new("us-west-2");
    /// assert_eq!(config.region, "us-west-2");
    /// assert_eq!(config.fetch.page_size, 10);
    /// ```
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            ..Default::default()
        }
    }

    /// Creates a configuration from `region`, `profile` and the process environment.
    ///
    /// An empty `profile` selects the default credential chain. The
    /// `SSM_ENDPOINT` variable is read here, once, and only used when it is
    /// set and non-empty.
    pub fn from_env(region: impl Into<String>, profile: impl Into<String>) -> Self {
        let mut config = Self::new(region).with_profile(profile);

        if let Some(endpoint) = std::env::var(ENDPOINT_ENV_VAR)
            .ok()
            .filter(|v| !v.is_empty())
        {
            config = config.with_endpoint(endpoint);
        }

        config
    }

    /// Sets the credential profile. An empty name clears it.
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        let profile = profile.into();
        self.profile = if profile.is_empty() { None } else { Some(profile) };
        self
    }

    /// Overrides the service endpoint URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Sets how many parameters are requested per page.
    pub fn with_page_size(mut self, page_size: i32) -> Self {
        self.fetch.page_size = page_size;
        self
    }

    /// Sets the maximum number of pages a single fetch may walk.
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.fetch.max_pages = max_pages;
        self
    }

    /// Sets whether nested paths are included.
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.fetch.recursive = recursive;
        self
    }

    /// Sets whether `SecureString` values are decrypted.
    pub fn with_decryption(mut self, with_decryption: bool) -> Self {
        self.fetch.with_decryption = with_decryption;
        self
    }

    /// Profile name for display and error context (empty for the default chain).
    pub fn profile_name(&self) -> &str {
        self.profile.as_deref().unwrap_or("")
    }
}
