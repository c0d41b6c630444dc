//! retrieve-secret - fetch secrets from AWS Secrets Manager for shell scripts.
//!
//! This crate provides functionality to:
//! - Optionally assume an IAM role through STS before fetching
//! - Fetch one or more secrets under a single shared deadline
//! - Print the last secret's JSON object as `key|value` lines
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use retrieve_secret::{Config, handle_retrieve};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::new(
//!         "eu-west-1",
//!         vec!["prod/db".to_string()],
//!         None,
//!         Duration::from_millis(5000),
//!         "my-session",
//!     )?;
//!     handle_retrieve(&config).await?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod credentials;
pub mod error;
pub mod output;
pub mod secrets;

// Re-export commonly used types at the crate root
pub use commands::handle_retrieve;
pub use config::Config;
pub use credentials::{AssumedCredentials, RoleAssumer};
pub use error::{Result, RetrieveError};
pub use secrets::SecretFetcher;
