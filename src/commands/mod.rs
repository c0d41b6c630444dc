//! Command handlers for the retrieve-secret CLI.

mod retrieve;

pub use retrieve::{Deadline, fetch_secrets, handle_retrieve, retrieve};
