//! Configuration parsing and AWS SDK setup.

mod loader;
mod types;

pub use loader::load_sdk_config;
pub use types::{
    Config, DEFAULT_REGION, DEFAULT_SESSION_NAME, DEFAULT_TIMEOUT_MS, split_secret_ids,
};
