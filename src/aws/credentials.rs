//! Credential resolution: assumed role or default chain

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_credential_types::Credentials;
use aws_sdk_sts::error::DisplayErrorContext;
use log::debug;
use std::fmt;

use crate::config::aws;
use crate::error::{Result, TaguError};

use super::ambient::AmbientConfig;

/// Access key, secret key and optional session token
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialSet {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
}

impl CredentialSet {
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: Option<String>,
    ) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token,
        }
    }

    /// Static SDK credentials carrying the same values
    pub fn to_aws_credentials(&self) -> Credentials {
        Credentials::new(
            &self.access_key_id,
            &self.secret_access_key,
            self.session_token.clone(),
            None,
            aws::CREDENTIALS_PROVIDER_NAME,
        )
    }
}

impl From<&Credentials> for CredentialSet {
    fn from(creds: &Credentials) -> Self {
        Self::new(
            creds.access_key_id(),
            creds.secret_access_key(),
            creds.session_token().map(str::to_string),
        )
    }
}

impl fmt::Debug for CredentialSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialSet")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "** redacted **"),
            )
            .finish()
    }
}

/// Exchanges the caller identity for credentials of a named role
#[async_trait]
pub trait RoleAssumer: Send + Sync {
    async fn assume_role(&self, role_arn: &str, session_name: &str) -> Result<CredentialSet>;
}

/// `RoleAssumer` backed by STS AssumeRole
pub struct StsRoleAssumer {
    client: aws_sdk_sts::Client,
}

impl StsRoleAssumer {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: aws_sdk_sts::Client::new(config),
        }
    }
}

#[async_trait]
impl RoleAssumer for StsRoleAssumer {
    async fn assume_role(&self, role_arn: &str, session_name: &str) -> Result<CredentialSet> {
        debug!("Assuming role {} (session {})", role_arn, session_name);

        let output = self
            .client
            .assume_role()
            .role_arn(role_arn)
            .role_session_name(session_name)
            .send()
            .await
            .map_err(|e| {
                TaguError::AssumeRole(format!("{}: {}", role_arn, DisplayErrorContext(&e)))
            })?;

        let creds = output.credentials().ok_or_else(|| {
            TaguError::AssumeRole(format!("{}: response contained no credentials", role_arn))
        })?;

        Ok(CredentialSet::new(
            creds.access_key_id(),
            creds.secret_access_key(),
            Some(creds.session_token().to_string()),
        ))
    }
}

/// IAM role ARN for `role_name` in `account`
pub fn role_arn(account: &str, role_name: &str) -> String {
    format!("{}{}:role/{}", aws::ROLE_ARN_PREFIX, account, role_name)
}

/// STS session name used when assuming a role in `account`
pub fn session_name(account: &str) -> String {
    format!("{}{}", aws::SESSION_NAME_PREFIX, account)
}

/// Pick the credentials for one run.
///
/// With a role name, the role in `account` is assumed and its temporary
/// credentials returned; errors pass through untouched. Without one, the
/// ambient credentials are returned as-is and `assumer` is never called.
pub async fn resolve_credentials<A>(
    account: &str,
    role_name: &str,
    ambient: &AmbientConfig,
    assumer: &A,
) -> Result<CredentialSet>
where
    A: RoleAssumer + ?Sized,
{
    if role_name.is_empty() {
        debug!("No role name configured, using default credentials");
        return Ok(ambient.credentials.clone());
    }

    assumer
        .assume_role(&role_arn(account, role_name), &session_name(account))
        .await
}
