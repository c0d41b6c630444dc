//! Runtime configuration built from command-line flags.

use std::time::Duration;

use crate::cli::Cli;
use crate::error::RetrieveError;

/// Region used when `-r` is not given.
pub const DEFAULT_REGION: &str = "ap-southeast-1";

/// Deadline for all AWS API calls when `-t` is not given.
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// STS role session name used when `-n` is not given.
pub const DEFAULT_SESSION_NAME: &str = "lambda_get_secret_as_env";

/// Validated, immutable configuration for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    region: String,
    secret_ids: Vec<String>,
    role_arn: Option<String>,
    timeout: Duration,
    session_name: String,
}

impl Config {
    /// Build a config directly, applying the same validation as the CLI path.
    pub fn new(
        region: impl Into<String>,
        secret_ids: Vec<String>,
        role_arn: Option<String>,
        timeout: Duration,
        session_name: impl Into<String>,
    ) -> Result<Self, RetrieveError> {
        let region = region.into();
        if region.is_empty() || secret_ids.is_empty() {
            return Err(RetrieveError::usage(
                "You must supply a region and secret ids. \
                 -r REGION -s SECRET-IDS [-a ROLE-ARN -t TIMEOUT-MS -n SESSION-NAME]",
            ));
        }

        Ok(Self {
            region,
            secret_ids,
            role_arn: role_arn.filter(|arn| !arn.is_empty()),
            timeout,
            session_name: session_name.into(),
        })
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Secret ids in the order they were given.
    pub fn secret_ids(&self) -> &[String] {
        &self.secret_ids
    }

    /// Role to assume, or `None` to use the ambient credentials.
    pub fn role_arn(&self) -> Option<&str> {
        self.role_arn.as_deref()
    }

    /// Single deadline shared by every remote call.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn session_name(&self) -> &str {
        &self.session_name
    }
}

/// Split the `-s` value into ids. An empty value yields no ids.
pub fn split_secret_ids(value: &str) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    value.split(',').map(str::to_string).collect()
}

impl TryFrom<Cli> for Config {
    type Error = RetrieveError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let secret_ids = match cli.secret_ids.as_slice() {
            [] => Vec::new(),
            [value] => split_secret_ids(value),
            _ => return Err(RetrieveError::usage("Secret ids flag already set")),
        };

        Config::new(
            cli.region,
            secret_ids,
            cli.role_arn,
            Duration::from_millis(cli.timeout),
            cli.session_name,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_secret_ids() {
        assert_eq!(split_secret_ids("one"), vec!["one"]);
        assert_eq!(split_secret_ids("one,two,three"), vec!["one", "two", "three"]);
        assert!(split_secret_ids("").is_empty());
        // Segments are kept as given, including empty ones.
        assert_eq!(split_secret_ids("a,,b"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_new_rejects_empty_region() {
        let err = Config::new(
            "",
            vec!["s".to_string()],
            None,
            Duration::from_millis(DEFAULT_TIMEOUT_MS),
            DEFAULT_SESSION_NAME,
        )
        .unwrap_err();
        assert!(err.is_usage());
    }

    #[test]
    fn test_new_rejects_empty_secret_ids() {
        let err = Config::new(
            DEFAULT_REGION,
            Vec::new(),
            None,
            Duration::from_millis(DEFAULT_TIMEOUT_MS),
            DEFAULT_SESSION_NAME,
        )
        .unwrap_err();
        assert!(err.is_usage());
    }

    #[test]
    fn test_empty_role_arn_is_none() {
        let config = Config::new(
            DEFAULT_REGION,
            vec!["s".to_string()],
            Some(String::new()),
            Duration::from_millis(DEFAULT_TIMEOUT_MS),
            DEFAULT_SESSION_NAME,
        )
        .unwrap();
        assert_eq!(config.role_arn(), None);
    }
}
