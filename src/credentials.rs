//! Role assumption through AWS STS.
//!
//! When a role ARN is configured, the ambient identity is exchanged for
//! short-lived credentials scoped to that role. Those credentials are then
//! used for every secret fetch in the same invocation.

use std::fmt;
use std::time::SystemTime;

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_secretsmanager::config::Credentials;
use aws_sdk_sts::error::DisplayErrorContext;
use aws_sdk_sts::operation::assume_role::AssumeRoleOutput;
use aws_sdk_sts::operation::assume_role::builders::AssumeRoleFluentBuilder;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{Result, RetrieveError};

/// Provider name recorded on credentials handed to the SDK.
const PROVIDER_NAME: &str = "AssumeRole";

/// Temporary credentials returned by a role assumption.
#[derive(Clone, PartialEq, Eq)]
pub struct AssumedCredentials {
    access_key_id: String,
    secret_access_key: String,
    session_token: String,
    expiration: Option<SystemTime>,
}

impl AssumedCredentials {
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: impl Into<String>,
        expiration: Option<SystemTime>,
    ) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token: session_token.into(),
            expiration,
        }
    }

    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    pub fn secret_access_key(&self) -> &str {
        &self.secret_access_key
    }

    pub fn session_token(&self) -> &str {
        &self.session_token
    }

    pub fn expiration(&self) -> Option<SystemTime> {
        self.expiration
    }

    /// Convert into static credentials for an SDK client.
    pub fn to_sdk_credentials(&self) -> Credentials {
        Credentials::new(
            &self.access_key_id,
            &self.secret_access_key,
            Some(self.session_token.clone()),
            self.expiration,
            PROVIDER_NAME,
        )
    }
}

// Never print the secret key or session token.
impl fmt::Debug for AssumedCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssumedCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .field("session_token", &"** redacted **")
            .field("expiration", &self.expiration)
            .finish()
    }
}

/// Exchanges a role ARN for temporary credentials.
#[async_trait]
pub trait RoleAssumer: Send + Sync {
    async fn assume_role(
        &self,
        role_arn: &str,
        session_name: &str,
    ) -> Result<AssumedCredentials>;
}

/// `RoleAssumer` backed by the STS `AssumeRole` API.
pub struct StsRoleAssumer {
    client: aws_sdk_sts::Client,
}

impl StsRoleAssumer {
    pub fn new(client: aws_sdk_sts::Client) -> Self {
        Self { client }
    }

    pub fn from_sdk_config(sdk_config: &SdkConfig) -> Self {
        Self::new(aws_sdk_sts::Client::new(sdk_config))
    }

    /// `AssumeRole` request for exactly the given ARN and session name.
    fn assume_role_request(
        &self,
        role_arn: &str,
        session_name: &str,
    ) -> AssumeRoleFluentBuilder {
        self.client
            .assume_role()
            .role_arn(role_arn)
            .role_session_name(session_name)
    }
}

/// Pull the temporary credentials out of an `AssumeRole` response.
fn credentials_from_output(resp: &AssumeRoleOutput) -> Result<AssumedCredentials> {
    let creds = resp
        .credentials()
        .ok_or_else(|| RetrieveError::assume_role("response did not include credentials"))?;

    Ok(AssumedCredentials::new(
        creds.access_key_id(),
        creds.secret_access_key(),
        creds.session_token(),
        SystemTime::try_from(*creds.expiration()).ok(),
    ))
}

#[async_trait]
impl RoleAssumer for StsRoleAssumer {
    async fn assume_role(
        &self,
        role_arn: &str,
        session_name: &str,
    ) -> Result<AssumedCredentials> {
        let resp = self
            .assume_role_request(role_arn, session_name)
            .send()
            .await
            .map_err(|e| RetrieveError::assume_role(DisplayErrorContext(e)))?;

        credentials_from_output(&resp)
    }
}

/// Assume the configured role, if any.
///
/// Returns `Ok(None)` without contacting STS when no role ARN is set; the
/// fetcher then falls back to the ambient credentials.
pub async fn assume_role_if_configured(
    assumer: &dyn RoleAssumer,
    config: &Config,
) -> Result<Option<AssumedCredentials>> {
    let Some(role_arn) = config.role_arn() else {
        debug!("no role ARN configured, using ambient credentials");
        return Ok(None);
    };

    info!(
        role_arn,
        session_name = config.session_name(),
        "assuming role"
    );
    let credentials = assumer.assume_role(role_arn, config.session_name()).await?;
    debug!(
        access_key_id = credentials.access_key_id(),
        expiration = ?credentials.expiration(),
        "role assumed"
    );

    Ok(Some(credentials))
}
