use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_secretsmanager::Client;
use aws_sdk_secretsmanager::error::DisplayErrorContext;
use tracing::debug;

use super::manager::SecretFetcher;
use crate::credentials::AssumedCredentials;
use crate::error::{Result, RetrieveError};

/// `SecretFetcher` backed by AWS Secrets Manager `GetSecretValue`.
pub struct AwsSecretFetcher {
    sdk_config: SdkConfig,
    client: Client,
}

impl AwsSecretFetcher {
    pub fn new(sdk_config: SdkConfig) -> Self {
        let client = Client::new(&sdk_config);
        Self { sdk_config, client }
    }

    /// Client signing with the assumed-role credentials, or the ambient one.
    fn client_for(&self, credentials: Option<&AssumedCredentials>) -> Client {
        match credentials {
            Some(creds) => {
                let conf = aws_sdk_secretsmanager::config::Builder::from(&self.sdk_config)
                    .credentials_provider(creds.to_sdk_credentials())
                    .build();
                Client::from_conf(conf)
            }
            None => self.client.clone(),
        }
    }
}

#[async_trait]
impl SecretFetcher for AwsSecretFetcher {
    async fn get_secret(
        &self,
        secret_id: &str,
        credentials: Option<&AssumedCredentials>,
    ) -> Result<String> {
        debug!(
            secret_id,
            assumed_role = credentials.is_some(),
            "fetching secret"
        );

        let resp = self
            .client_for(credentials)
            .get_secret_value()
            .secret_id(secret_id)
            .send()
            .await
            .map_err(|e| RetrieveError::fetch(secret_id, DisplayErrorContext(e)))?;

        let secret_value = resp
            .secret_string()
            .ok_or_else(|| RetrieveError::BinarySecret(secret_id.to_string()))?;
        Ok(secret_value.to_string())
    }
}
