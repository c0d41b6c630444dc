//! CLI argument parsing structures.

use clap::{ArgAction, Parser};

use crate::config::{DEFAULT_REGION, DEFAULT_SESSION_NAME, DEFAULT_TIMEOUT_MS};

/// Command-line flags for retrieve-secret.
///
/// `-s` is collected with `Append` so a repeated flag reaches validation and
/// is rejected there instead of silently overriding the first value.
#[derive(Parser, Debug)]
#[command(name = "retrieve-secret", version)]
#[command(
    about = "Retrieve secrets from AWS Secrets Manager and print them as key|value lines",
    long_about = None
)]
pub struct Cli {
    /// The AWS region to use
    #[arg(short = 'r', value_name = "REGION", default_value = DEFAULT_REGION)]
    pub region: String,

    /// Comma separated list of secret ids to access
    #[arg(short = 's', value_name = "SECRET_IDS", action = ArgAction::Append)]
    pub secret_ids: Vec<String>,

    /// The ARN of the role to assume for secret access
    #[arg(short = 'a', value_name = "ROLE_ARN")]
    pub role_arn: Option<String>,

    /// How long to wait for all API calls, in milliseconds
    #[arg(short = 't', value_name = "MILLIS", default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout: u64,

    /// The session name to use for AWS STS
    #[arg(short = 'n', value_name = "SESSION_NAME", default_value = DEFAULT_SESSION_NAME)]
    pub session_name: String,
}
