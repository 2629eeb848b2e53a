//! gui/boot.rs
//! Startup: config -> HTTP client -> state client -> listeners -> first poll.
//!
//! Anything that fails here leaves the window up in a disconnected state with
//! the reason on the status line.

use std::sync::Arc;
use std::sync::mpsc;

use iced::Task;
use reqwest::blocking::Client;

use super::state::{Message, Spotimote, Status};
use crate::core;
use crate::core::client::StateClient;
use crate::core::config::AppConfig;
use crate::core::types::PlaybackEvent;

impl Spotimote {
    pub(crate) fn boot() -> (Self, Task<Message>) {
        let config = AppConfig::load().unwrap_or_else(|e| {
            tracing::error!(error = %e, "config unusable, falling back to defaults");
            let mut config = AppConfig::default();
            config.apply_env(|key| std::env::var(key).ok());
            config
        });

        let mut state = Spotimote::offline(config.theme);

        let connected = core::http_client(&config)
            .and_then(|http| core::connect(&config, http.clone()).map(|client| (client, http)));

        match connected {
            Ok((client, http)) => {
                tracing::info!(base_url = %config.api_base_url, "connected");
                state.attach(client, http);
                (state, Task::done(Message::Poll))
            }
            Err(e) => {
                tracing::error!(error = %e, "not connected");
                state.status = Some(Status::Setup(e.to_string()));
                (state, Task::none())
            }
        }
    }

    /// Register the panel and controls listeners.
    ///
    /// Listeners run on whichever thread polled (worker or re-poll timer), so
    /// they only enqueue; `Message::Tick` applies on the UI thread.
    pub(crate) fn attach(&mut self, client: StateClient, http: Client) {
        let (tx, rx) = mpsc::channel::<Message>();

        let panel_tx = tx.clone();
        let panel = client.subscribe(move |event| {
            let msg = match event {
                PlaybackEvent::Updated(s) => Message::NowPlayingChanged(Arc::clone(s)),
                PlaybackEvent::Failed(e) => Message::RemoteFailed(e.clone()),
            };
            let _ = panel_tx.send(msg);
        });

        let controls = client.subscribe(move |event| {
            if let PlaybackEvent::Updated(s) = event {
                let _ = tx.send(Message::PlayStateChanged(s.is_playing));
            }
        });

        tracing::debug!(listeners = client.listener_count(), "listeners registered");

        self.listener_handles = vec![panel, controls];
        self.events = Some(rx);
        self.client = Some(client);
        self.http = Some(http);
    }
}
