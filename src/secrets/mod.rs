//! Secret retrieval from AWS Secrets Manager.

mod aws;
mod manager;

pub use aws::AwsSecretFetcher;
pub use manager::SecretFetcher;
