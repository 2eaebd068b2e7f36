//! ssm-params - fetch a parameter store path as a flat map.
//!
//! Given a path prefix such as `/myapp/db`, this crate fetches every
//! parameter below it (recursively, with `SecureString` values decrypted),
//! follows pagination, and returns a `HashMap` keyed by the name relative to
//! the prefix.
//!
//! # Features
//!
//! - **Prefix stripping**: `/myapp/db/host` under `/myapp/db` becomes `host`
//! - **Transparent pagination**: continuation tokens are followed for you,
//!   with a page limit guarding against a store that never stops
//! - **Fail fast**: any page error aborts the fetch; no partial maps
//! - **Pluggable stores**: the [`ParameterStore`] trait has an AWS SSM
//!   implementation and an in-memory mock for tests
//!
//! # Quick Start
//!
//! ```no_run
//! use ssm_params::{Config, SsmClient};
//!
//! #[tokio::main]
//! async fn main() -> ssm_params::Result<()> {
//!     // Region, profile, and SSM_ENDPOINT from the environment
//!     let config = Config::from_env("us-east-1", "");
//!     let client = SsmClient::new(config).await?;
//!
//!     let db = client.get_parameters_by_path("/myapp/db").await?;
//!     for (key, value) in &db {
//!         println!("{} = {}", key, value);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Enables |
//! |---------|---------|---------|
//! | `aws` | yes | [`SsmClient::new`] and the SSM store |
//! | `mock` | yes | [`backends::mock::MockParameterStore`] |
//! | `cli` | no | the `ssm-params` binary |

pub mod backends;
pub mod client;
pub mod config;
pub mod error;
pub mod fetch;
pub mod parameter;
pub mod path;
pub mod store;

pub use client::SsmClient;
pub use config::{Config, FetchOptions};
pub use error::{ParamStoreError, Result};
pub use parameter::{Parameter, ParameterType};
pub use store::{Page, PageRequest, ParameterStore};
