use async_trait::async_trait;

use crate::credentials::AssumedCredentials;
use crate::error::Result;

/// Retrieves the current string value of a secret.
#[async_trait]
pub trait SecretFetcher: Send + Sync {
    /// Fetch `secret_id`, signing with `credentials` when given and with the
    /// ambient identity otherwise.
    async fn get_secret(
        &self,
        secret_id: &str,
        credentials: Option<&AssumedCredentials>,
    ) -> Result<String>;
}
