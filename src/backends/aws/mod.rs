//! AWS Systems Manager Parameter Store backend.
//!
//! This backend integrates with SSM using the official AWS SDK.
//!
//! # Requirements
//!
//! - AWS credentials configured via:
//!   - A named profile in `~/.aws/credentials` / `~/.aws/config`
//!   - Environment variables (`AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY`)
//!   - IAM instance role (for EC2/ECS)
//! - `ssm:GetParametersByPath` permission, plus `kms:Decrypt` for
//!   `SecureString` values
//!
//! # Example
//!
//! ```no_run
//! use ssm_params::{Config, SsmClient};
//!
//! #[tokio::main]
//! async fn main() -> ssm_params::Result<()> {
//!     let config = Config::from_env("us-west-2", "staging");
//!     let client = SsmClient::new(config).await?;
//!
//!     let params = client.get_parameters_by_path("/myapp/db").await?;
//!     println!("{} parameters", params.len());
//!
//!     Ok(())
//! }
//! ```

mod credentials;
mod store;

pub use store::AwsParameterStore;
