//! SSM Parameter Store integration tests using LocalStack.
//!
//! These tests require LocalStack to be running on localhost:4566.
//!
//! Run with:
//!   docker run -d -p 4566:4566 localstack/localstack
//!   cargo test --test integration_localstack -- --ignored
//!
//! Or run in CI where LocalStack is configured as a service.

#![cfg(feature = "aws")]

use aws_sdk_ssm::types::ParameterType as SsmParameterType;
use ssm_params::{Config, ParameterType, SsmClient};

fn localstack_endpoint() -> String {
    std::env::var("LOCALSTACK_ENDPOINT").unwrap_or_else(|_| "http://localhost:4566".to_string())
}

fn localstack_config() -> Config {
    std::env::set_var("AWS_ACCESS_KEY_ID", "test");
    std::env::set_var("AWS_SECRET_ACCESS_KEY", "test");

    Config::new("us-east-1").with_endpoint(localstack_endpoint())
}

/// Raw SDK client for seeding and cleaning up fixtures.
async fn fixture_client() -> aws_sdk_ssm::Client {
    let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new("us-east-1"))
        .load()
        .await;
    let ssm_config = aws_sdk_ssm::config::Builder::from(&sdk_config)
        .endpoint_url(localstack_endpoint())
        .build();
    aws_sdk_ssm::Client::from_conf(ssm_config)
}

async fn put(client: &aws_sdk_ssm::Client, name: &str, value: &str, kind: SsmParameterType) {
    client
        .put_parameter()
        .name(name)
        .value(value)
        .r#type(kind)
        .overwrite(true)
        .send()
        .await
        .expect("Failed to seed parameter");
}

async fn cleanup(client: &aws_sdk_ssm::Client, names: &[&str]) {
    for name in names {
        client.delete_parameter().name(*name).send().await.ok();
    }
}

#[tokio::test]
#[ignore] // Run only when LocalStack is available
async fn test_localstack_fetch_path() {
    let config = localstack_config();
    let fixtures = fixture_client().await;
    let names = ["/it-fetch/db/host", "/it-fetch/db/port", "/it-fetch/db/password"];

    put(&fixtures, names[0], "localhost", SsmParameterType::String).await;
    put(&fixtures, names[1], "5432", SsmParameterType::String).await;
    put(&fixtures, names[2], "hunter2", SsmParameterType::SecureString).await;

    let client = SsmClient::new(config).await.expect("Failed to build client");
    let params = client
        .get_parameters_by_path("/it-fetch/db")
        .await
        .expect("Failed to fetch path");

    assert_eq!(params.len(), 3);
    assert_eq!(params["host"], "localhost");
    assert_eq!(params["port"], "5432");
    assert_eq!(params["password"], "hunter2");

    cleanup(&fixtures, &names).await;
}

#[tokio::test]
#[ignore]
async fn test_localstack_pagination() {
    let config = localstack_config().with_page_size(2);
    let fixtures = fixture_client().await;

    let names: Vec<String> = (0..7).map(|i| format!("/it-paged/key{}", i)).collect();
    for (i, name) in names.iter().enumerate() {
        put(&fixtures, name, &i.to_string(), SsmParameterType::String).await;
    }

    let client = SsmClient::new(config).await.expect("Failed to build client");
    let params = client
        .get_parameters_by_path("/it-paged/")
        .await
        .expect("Failed to fetch path");

    assert_eq!(params.len(), 7);
    assert_eq!(params["key6"], "6");

    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    cleanup(&fixtures, &refs).await;
}

#[tokio::test]
#[ignore]
async fn test_localstack_parameter_list_metadata() {
    let config = localstack_config();
    let fixtures = fixture_client().await;
    let names = ["/it-list/secret"];

    put(&fixtures, names[0], "s3cr3t", SsmParameterType::SecureString).await;

    let client = SsmClient::new(config).await.expect("Failed to build client");
    let params = client
        .get_parameter_list("/it-list")
        .await
        .expect("Failed to fetch path");

    assert_eq!(params.len(), 1);
    assert_eq!(params[0].name, "secret");
    assert_eq!(params[0].param_type, ParameterType::SecureString);
    assert!(params[0].version >= 1);

    cleanup(&fixtures, &names).await;
}

#[tokio::test]
#[ignore]
async fn test_localstack_empty_path() {
    let client = SsmClient::new(localstack_config())
        .await
        .expect("Failed to build client");

    let params = client
        .get_parameters_by_path("/it-nothing-here")
        .await
        .expect("Failed to fetch path");

    assert!(params.is_empty());
}
