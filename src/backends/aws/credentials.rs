//! Credential resolution for the SSM store.

use crate::{Config, ParamStoreError, Result};
use aws_config::profile::ProfileFileCredentialsProvider;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::provider::{future, ProvideCredentials, SharedCredentialsProvider};
use aws_credential_types::Credentials;
use std::sync::Mutex;
use tracing::debug;

/// Loads the shared SDK configuration for `config`.
///
/// A named profile is read only from the shared config and credentials
/// files. Without one, the default credential chain applies.
pub(crate) async fn load_sdk_config(config: &Config) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()));

    if let Some(ref profile) = config.profile {
        loader = loader.credentials_provider(
            ProfileFileCredentialsProvider::builder()
                .profile_name(profile)
                .build(),
        );
    }

    loader.load().await
}

/// Credentials resolved at construction, handed out once before falling
/// back to the underlying provider.
///
/// The SSM client's identity cache asks for credentials on its first
/// request; serving the eagerly resolved set there avoids a second round of
/// STS or SSO calls. Later refreshes go to `inner`.
#[derive(Debug)]
pub(crate) struct PrimedCredentials {
    primed: Mutex<Option<Credentials>>,
    inner: SharedCredentialsProvider,
}

impl ProvideCredentials for PrimedCredentials {
    fn provide_credentials<'a>(&'a self) -> future::ProvideCredentials<'a>
    where
        Self: 'a,
    {
        let primed = self
            .primed
            .lock()
            .map(|mut slot| slot.take())
            .unwrap_or_default();

        match primed {
            Some(credentials) => future::ProvideCredentials::ready(Ok(credentials)),
            None => self.inner.provide_credentials(),
        }
    }
}

/// Resolves credentials now instead of on the first request.
///
/// # Errors
///
/// Returns [`ParamStoreError::Auth`] if no provider is configured or the
/// provider cannot produce credentials.
pub(crate) async fn resolve_credentials(
    sdk_config: &SdkConfig,
    profile: &str,
) -> Result<PrimedCredentials> {
    let provider = sdk_config
        .credentials_provider()
        .ok_or_else(|| ParamStoreError::Auth {
            profile: profile.to_string(),
            source: "no credentials provider configured".into(),
        })?;

    let credentials = provider
        .provide_credentials()
        .await
        .map_err(|e| ParamStoreError::Auth {
            profile: profile.to_string(),
            source: Box::new(e),
        })?;

    debug!(profile, "resolved AWS credentials");
    Ok(PrimedCredentials {
        primed: Mutex::new(Some(credentials)),
        inner: provider,
    })
}
