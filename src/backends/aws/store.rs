//! SSM Parameter Store implementation.

use crate::backends::aws::credentials::{load_sdk_config, resolve_credentials};
use crate::store::{Page, PageRequest, ParameterStore};
use crate::{Config, ParamStoreError, Parameter, ParameterType, Result};
use async_trait::async_trait;
use aws_sdk_ssm::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_ssm::types::{Parameter as SsmParameter, ParameterType as SsmParameterType};
use aws_sdk_ssm::Client;
use tracing::{debug, warn};

/// AWS Systems Manager Parameter Store.
///
/// Integrates with SSM using the official AWS SDK.
pub struct AwsParameterStore {
    client: Client,
    region: String,
}

impl AwsParameterStore {
    /// Builds an SSM client for `config`, resolving credentials eagerly.
    ///
    /// The endpoint override, when set, applies to the SSM client only.
    ///
    /// # Errors
    ///
    /// Returns [`ParamStoreError::Auth`] if credentials cannot be resolved.
    pub async fn connect(config: &Config) -> Result<Self> {
        let sdk_config = load_sdk_config(config).await;
        let credentials = resolve_credentials(&sdk_config, config.profile_name()).await?;

        let mut ssm_config =
            aws_sdk_ssm::config::Builder::from(&sdk_config).credentials_provider(credentials);

        // Use custom endpoint if provided (for LocalStack testing)
        if let Some(ref endpoint) = config.endpoint {
            debug!(endpoint = %endpoint, "overriding SSM endpoint");
            ssm_config = ssm_config.endpoint_url(endpoint);
        }

        Ok(Self {
            client: Client::from_conf(ssm_config.build()),
            region: config.region.clone(),
        })
    }

    /// Wraps an already-built SDK client.
    pub fn from_client(client: Client, region: impl Into<String>) -> Self {
        Self {
            client,
            region: region.into(),
        }
    }

    /// Region the client is bound to.
    pub fn region(&self) -> &str {
        &self.region
    }
}

#[async_trait]
impl ParameterStore for AwsParameterStore {
    fn name(&self) -> &str {
        "ssm"
    }

    async fn get_parameters_by_path_page(&self, request: &PageRequest) -> Result<Page> {
        let response = self
            .client
            .get_parameters_by_path()
            .path(&request.path)
            .recursive(request.recursive)
            .with_decryption(request.with_decryption)
            .max_results(request.max_results)
            .set_next_token(request.next_token.clone())
            .send()
            .await
            .map_err(|e| ParamStoreError::Request {
                code: e.code().map(str::to_string),
                message: e
                    .message()
                    .map(str::to_string)
                    .unwrap_or_else(|| DisplayErrorContext(&e).to_string()),
            })?;

        let parameters = response
            .parameters()
            .iter()
            .filter_map(convert_parameter)
            .collect();

        Ok(Page {
            parameters,
            next_token: response.next_token().map(str::to_string),
        })
    }
}

fn convert_parameter(param: &SsmParameter) -> Option<Parameter> {
    let (Some(name), Some(value)) = (param.name(), param.value()) else {
        warn!(name = ?param.name(), "skipping parameter without name or value");
        return None;
    };

    Some(Parameter {
        name: name.to_string(),
        value: value.to_string(),
        param_type: param
            .r#type()
            .map(convert_type)
            .unwrap_or(ParameterType::String),
        version: param.version(),
        last_modified: param.last_modified_date().and_then(|d| {
            chrono::DateTime::from_timestamp(d.secs(), d.subsec_nanos())
        }),
    })
}

fn convert_type(param_type: &SsmParameterType) -> ParameterType {
    match param_type {
        SsmParameterType::SecureString => ParameterType::SecureString,
        SsmParameterType::StringList => ParameterType::StringList,
        _ => ParameterType::String,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_parameter() {
        let param = SsmParameter::builder()
            .name("/app/db/password")
            .value("hunter2")
            .r#type(SsmParameterType::SecureString)
            .version(3)
            .last_modified_date(aws_sdk_ssm::primitives::DateTime::from_secs(1_700_000_000))
            .build();

        let converted = convert_parameter(&param).unwrap();
        assert_eq!(converted.name, "/app/db/password");
        assert_eq!(converted.value, "hunter2");
        assert_eq!(converted.param_type, ParameterType::SecureString);
        assert_eq!(converted.version, 3);
        assert_eq!(
            converted.last_modified.map(|d| d.timestamp()),
            Some(1_700_000_000)
        );
    }

    #[test]
    fn test_convert_parameter_without_value() {
        let param = SsmParameter::builder().name("/app/empty").build();
        assert!(convert_parameter(&param).is_none());
    }

    #[test]
    fn test_convert_type() {
        assert_eq!(convert_type(&SsmParameterType::String), ParameterType::String);
        assert_eq!(
            convert_type(&SsmParameterType::StringList),
            ParameterType::StringList
        );
    }
}
