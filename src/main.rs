//! Spotimote
//!
//! # What this program is
//! A small desktop applet (built with `iced`) that shows what a Spotify
//! account is playing right now and offers previous / play-pause / next.
//!
//! # How it fits together
//! - `core::client::StateClient` polls the Web API and broadcasts a
//!   `PlaybackSnapshot` to its listeners.
//! - Commands fire once, then the client re-polls after a short delay on a
//!   timer thread.
//! - The GUI registers listeners that only enqueue messages; a subscription
//!   tick drains that queue on the UI thread, where state is mutated and the
//!   view redraws.
//!
//! # Not handled here
//! - OAuth: supply an access token via `SPOTIFY_ACCESS_TOKEN` or the config file.

mod core;
mod gui;

use tracing_subscriber::EnvFilter;

use crate::gui::view::constants::{WINDOW_H, WINDOW_W};

const APP_NAME: &str = "Spotimote";

fn main() -> iced::Result {
    init_logging();

    iced::application(gui::Spotimote::boot, gui::update, gui::view)
        .title(APP_NAME)
        .subscription(gui::subscription)
        .theme(gui::theme)
        .window_size((WINDOW_W, WINDOW_H))
        .run()
}

/// `RUST_LOG` wins; otherwise info for this crate only.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("spotimote=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
