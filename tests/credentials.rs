//! Client construction against local credential files.
//!
//! These tests point the SDK at temporary config files, so they need no
//! network access.

#![cfg(feature = "aws")]

use serial_test::serial;
use ssm_params::{Config, ParamStoreError, SsmClient};
use std::io::Write;
use tempfile::NamedTempFile;

/// Points the SDK at a credentials file holding only `[default]`.
fn isolated_profiles() -> (NamedTempFile, NamedTempFile) {
    let mut credentials = NamedTempFile::new().unwrap();
    writeln!(
        credentials,
        "[default]\naws_access_key_id = AKIDEXAMPLE\naws_secret_access_key = secret"
    )
    .unwrap();

    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "[default]\nregion = us-east-1").unwrap();

    std::env::set_var("AWS_SHARED_CREDENTIALS_FILE", credentials.path());
    std::env::set_var("AWS_CONFIG_FILE", config.path());

    (credentials, config)
}

#[tokio::test]
#[serial]
async fn test_unknown_profile_fails_with_auth_error() {
    let _files = isolated_profiles();

    let config = Config::new("us-east-1").with_profile("no-such-profile");
    let result = SsmClient::new(config).await;

    match result {
        Err(ParamStoreError::Auth { profile, .. }) => assert_eq!(profile, "no-such-profile"),
        Err(other) => panic!("expected Auth error, got {}", other),
        Ok(_) => panic!("expected Auth error, got a client"),
    }
}

#[tokio::test]
#[serial]
async fn test_known_profile_builds_client() {
    let _files = isolated_profiles();

    let config = Config::new("us-east-1")
        .with_profile("default")
        .with_endpoint("http://localhost:4566");
    let client = SsmClient::new(config).await.expect("Failed to build client");

    assert_eq!(client.store_name(), "ssm");
}

#[tokio::test]
#[serial]
async fn test_invalid_page_size_rejected_before_credentials() {
    let _files = isolated_profiles();

    let config = Config::new("us-east-1")
        .with_profile("no-such-profile")
        .with_page_size(25);

    assert!(matches!(
        SsmClient::new(config).await,
        Err(ParamStoreError::InvalidConfig(_))
    ));
}
