//! Retrieve command - assume role, fetch secrets, print the last one.

use std::future::Future;
use std::io;
use std::time::Duration;

use tokio::time::Instant;
use tracing::debug;

use crate::config::{Config, load_sdk_config};
use crate::credentials::{
    AssumedCredentials, RoleAssumer, StsRoleAssumer, assume_role_if_configured,
};
use crate::error::{Result, RetrieveError};
use crate::output::{OutputRecord, parse_payload, write_lines};
use crate::secrets::{AwsSecretFetcher, SecretFetcher};

/// A single point in time bounding every remote call of one invocation.
///
/// The deadline is fixed when created and never extended, so time spent in
/// one call is no longer available to the calls after it.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    at: Instant,
    limit: Duration,
}

impl Deadline {
    /// Deadline `limit` from now.
    pub fn after(limit: Duration) -> Self {
        Self {
            at: Instant::now() + limit,
            limit,
        }
    }

    /// Run `fut` to completion, or fail with `Timeout` once the deadline passes.
    pub async fn run<F: Future>(&self, fut: F) -> Result<F::Output> {
        tokio::time::timeout_at(self.at, fut)
            .await
            .map_err(|_| RetrieveError::Timeout(self.limit))
    }
}

/// Fetch every configured secret in order and keep the last payload.
///
/// Each payload is parsed as soon as it arrives and replaces the previous
/// record, so only the keys of the final secret survive.
pub async fn fetch_secrets(
    fetcher: &dyn SecretFetcher,
    secret_ids: &[String],
    credentials: Option<&AssumedCredentials>,
    deadline: &Deadline,
) -> Result<OutputRecord> {
    let mut record = OutputRecord::new();

    for secret_id in secret_ids {
        let payload = deadline
            .run(fetcher.get_secret(secret_id, credentials))
            .await??;
        record = parse_payload(&payload)?;
        debug!(secret_id = %secret_id, keys = record.len(), "secret parsed");
    }

    Ok(record)
}

/// Role assumption followed by the fetch loop, all under `deadline`.
pub async fn retrieve(
    config: &Config,
    assumer: &dyn RoleAssumer,
    fetcher: &dyn SecretFetcher,
    deadline: &Deadline,
) -> Result<OutputRecord> {
    let credentials = deadline
        .run(assume_role_if_configured(assumer, config))
        .await??;

    fetch_secrets(fetcher, config.secret_ids(), credentials.as_ref(), deadline).await
}

/// Handle a full invocation against AWS and print the result to stdout.
pub async fn handle_retrieve(config: &Config) -> Result<()> {
    let deadline = Deadline::after(config.timeout());

    let sdk_config = deadline.run(load_sdk_config(config)).await?;
    let assumer = StsRoleAssumer::from_sdk_config(&sdk_config);
    let fetcher = AwsSecretFetcher::new(sdk_config);

    let record = retrieve(config, &assumer, &fetcher, &deadline).await?;

    let stdout = io::stdout();
    write_lines(&record, &mut stdout.lock())
}
