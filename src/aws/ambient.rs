//! Default region and credentials from the AWS environment

use aws_config::{BehaviorVersion, SdkConfig};
use aws_credential_types::provider::ProvideCredentials;
use log::debug;

use crate::error::{Result, TaguError};

use super::credentials::CredentialSet;

/// Region and credentials resolved from the default provider chains.
///
/// Built once per invocation and passed explicitly to every run.
#[derive(Debug, Clone)]
pub struct AmbientConfig {
    /// Default region, empty when none is configured
    pub region: String,
    pub credentials: CredentialSet,
}

impl AmbientConfig {
    pub fn new(region: impl Into<String>, credentials: CredentialSet) -> Self {
        Self {
            region: region.into(),
            credentials,
        }
    }

    /// Resolve the default region and credentials of an SDK config
    pub async fn from_sdk_config(config: &SdkConfig) -> Result<Self> {
        let region = config
            .region()
            .map(|r| r.as_ref().to_string())
            .unwrap_or_default();

        let provider = config.credentials_provider().ok_or_else(|| {
            TaguError::Credentials("No AWS credentials provider configured".to_string())
        })?;

        let creds = provider.provide_credentials().await.map_err(|e| {
            TaguError::Credentials(format!("Failed to load default AWS credentials: {}", e))
        })?;

        debug!(
            "Loaded default credentials (access key {}), default region '{}'",
            creds.access_key_id(),
            region
        );

        Ok(Self::new(region, CredentialSet::from(&creds)))
    }
}

/// Load the shared SDK config from environment, profile files and IMDS
pub async fn load_sdk_config() -> SdkConfig {
    aws_config::defaults(BehaviorVersion::latest()).load().await
}
