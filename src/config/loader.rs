//! Shared AWS SDK configuration.

use aws_config::SdkConfig;
use aws_config::retry::RetryConfig;
use aws_sdk_secretsmanager::config::Region;
use tracing::debug;

use super::types::Config;

/// Load the SDK config for the configured region.
///
/// Credentials come from the default provider chain (environment, profile
/// files, container/instance metadata). Every client built from the result
/// makes exactly one attempt per call.
pub async fn load_sdk_config(config: &Config) -> SdkConfig {
    debug!(region = config.region(), "loading AWS SDK configuration");

    aws_config::from_env()
        .region(Region::new(config.region().to_string()))
        .retry_config(RetryConfig::standard().with_max_attempts(1))
        .load()
        .await
}
