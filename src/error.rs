//! Unified error type for retrieve-secret.
//!
//! Every stage of the pipeline returns `Result<T, RetrieveError>`. None of the
//! variants are recovered from: `main` prints the error and exits non-zero.

use std::fmt;
use std::time::Duration;

/// Process exit status for every error, whatever its category.
pub const EXIT_FAILURE: u8 = 1;

/// The unified error type for all retrieve-secret operations.
#[derive(Debug)]
pub enum RetrieveError {
    // ── Arguments ──────────────────────────────────────────────────────
    /// Command-line arguments failed validation.
    Usage(String),

    // ── AWS ────────────────────────────────────────────────────────────
    /// STS refused or failed the role assumption.
    AssumeRole(String),

    /// Secrets Manager failed to return the secret.
    Fetch { secret_id: String, message: String },

    /// The secret only has a binary value.
    BinarySecret(String),

    // ── Payload ────────────────────────────────────────────────────────
    /// The secret value is not valid JSON.
    Json(serde_json::Error),

    /// The secret value is valid JSON but not an object.
    NotAnObject(&'static str),

    // ── Runtime ────────────────────────────────────────────────────────
    /// The shared deadline elapsed before all remote calls completed.
    Timeout(Duration),

    /// Writing the output failed.
    Io(std::io::Error),
}

// ── Display ────────────────────────────────────────────────────────────

impl fmt::Display for RetrieveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RetrieveError::Usage(msg) => write!(f, "{}", msg),
            RetrieveError::AssumeRole(msg) => {
                write!(f, "failed to assume role due to error: {}", msg)
            }
            RetrieveError::Fetch { secret_id, message } => write!(
                f,
                "failed to retrieve secret '{}' due to error: {}",
                secret_id, message
            ),
            RetrieveError::BinarySecret(secret_id) => write!(
                f,
                "secret '{}' is stored as binary, not a string",
                secret_id
            ),
            RetrieveError::Json(e) => write!(f, "failed to convert secret to JSON: {}", e),
            RetrieveError::NotAnObject(kind) => write!(
                f,
                "failed to convert secret to JSON: expected an object, found {}",
                kind
            ),
            RetrieveError::Timeout(limit) => write!(
                f,
                "timed out after {}ms waiting for AWS API calls",
                limit.as_millis()
            ),
            RetrieveError::Io(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for RetrieveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RetrieveError::Json(e) => Some(e),
            RetrieveError::Io(e) => Some(e),
            _ => None,
        }
    }
}

// ── From implementations for common error types ────────────────────────

impl From<std::io::Error> for RetrieveError {
    fn from(e: std::io::Error) -> Self {
        RetrieveError::Io(e)
    }
}

impl From<serde_json::Error> for RetrieveError {
    fn from(e: serde_json::Error) -> Self {
        RetrieveError::Json(e)
    }
}

// Flag parse failures are usage errors like any other. Only the first line
// of clap's message is kept; the usage line is printed separately.
impl From<clap::Error> for RetrieveError {
    fn from(e: clap::Error) -> Self {
        let rendered = e.to_string();
        let first_line = rendered.lines().next().unwrap_or_default();
        RetrieveError::Usage(first_line.trim_start_matches("error: ").to_string())
    }
}

// ── Convenience constructors ───────────────────────────────────────────

impl RetrieveError {
    /// Create an argument validation error.
    pub fn usage(message: impl Into<String>) -> Self {
        RetrieveError::Usage(message.into())
    }

    /// Create a role assumption error from any STS failure.
    ///
    /// The message is kept verbatim; callers pass the SDK error wrapped in
    /// `DisplayErrorContext` so the full cause chain is included.
    pub fn assume_role(e: impl fmt::Display) -> Self {
        RetrieveError::AssumeRole(e.to_string())
    }

    /// Create a fetch error for `secret_id` from any Secrets Manager failure.
    ///
    /// Not-found, access-denied and throttling all end up here unchanged.
    pub fn fetch(secret_id: impl Into<String>, e: impl fmt::Display) -> Self {
        RetrieveError::Fetch {
            secret_id: secret_id.into(),
            message: e.to_string(),
        }
    }

    /// True for argument errors, which also get the usage line printed.
    pub fn is_usage(&self) -> bool {
        matches!(self, RetrieveError::Usage(_))
    }

    /// Exit status for this error. Categories are not distinguished.
    pub fn exit_code(&self) -> u8 {
        EXIT_FAILURE
    }
}

/// Convenience type alias for Results using RetrieveError.
pub type Result<T> = std::result::Result<T, RetrieveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_keeps_message_verbatim() {
        let err = RetrieveError::fetch("db-creds", "ResourceNotFoundException: nope");
        assert_eq!(
            err.to_string(),
            "failed to retrieve secret 'db-creds' due to error: ResourceNotFoundException: nope"
        );
    }

    #[test]
    fn test_timeout_display() {
        let err = RetrieveError::Timeout(Duration::from_millis(250));
        assert_eq!(err.to_string(), "timed out after 250ms waiting for AWS API calls");
    }

    #[test]
    fn test_is_usage() {
        assert!(RetrieveError::usage("missing").is_usage());
        assert!(!RetrieveError::BinarySecret("bin".into()).is_usage());
    }

    #[test]
    fn test_exit_code_same_for_every_error() {
        let errors = [
            RetrieveError::usage("missing"),
            RetrieveError::assume_role("AccessDenied"),
            RetrieveError::fetch("db", "ThrottlingException"),
            RetrieveError::NotAnObject("an array"),
            RetrieveError::Timeout(Duration::from_millis(1)),
        ];
        for err in &errors {
            assert_eq!(err.exit_code(), EXIT_FAILURE, "{err:?}");
        }
    }
}
