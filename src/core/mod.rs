//! core/mod.rs
//!
//! Everything that is not GUI:
//! - talk to the remote playback service (`remote`)
//! - turn its answers into snapshots and broadcast them (`client`)
//! - fetch album art bytes (`artwork`)
//! - load settings (`config`)
//!
//! No Iced imports anywhere under here, so it all runs in plain unit tests.

pub mod artwork;
pub mod client;
pub mod config;
pub mod error;
pub mod listeners;
pub mod remote;
pub mod types;

use std::sync::Arc;

use reqwest::blocking::Client;

use client::StateClient;
use config::AppConfig;
use error::Result;
use remote::SpotifyRemote;

/// Shared blocking HTTP client for API calls and artwork.
pub fn http_client(config: &AppConfig) -> Result<Client> {
    Ok(Client::builder()
        .timeout(config.request_timeout())
        .user_agent(concat!("spotimote/", env!("CARGO_PKG_VERSION")))
        .build()?)
}

/// Wire the production Spotify remote into a state client.
pub fn connect(config: &AppConfig, http: Client) -> Result<StateClient> {
    let remote = SpotifyRemote::from_config(config, http)?;
    Ok(StateClient::new(Arc::new(remote), config.repoll_delay()))
}
