use std::time::Duration;

use anyhow::{Context, Result};

/// Build the HTTP client shared by all providers.
pub fn create_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("canopy-scout/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to create HTTP client")
}
