//! GUI state + messages.
//! Pure data definitions used by update + view.

use std::sync::Arc;
use std::sync::mpsc::Receiver;

use iced::widget::image;
use reqwest::blocking::Client;

use crate::core::client::StateClient;
use crate::core::config::ThemeChoice;
use crate::core::error::ClientError;
use crate::core::listeners::ListenerHandle;
use crate::core::types::PlaybackSnapshot;

/// Size-1 artwork cache.
///
/// `last_rendered_url` is compared before any fetch, so a poll that reports
/// the same cover again costs nothing.
#[derive(Debug, Default)]
pub(crate) struct ArtworkSlot {
    pub last_rendered_url: Option<String>,
    pub handle: Option<image::Handle>,
}

impl ArtworkSlot {
    /// Point the slot at `url`. Returns the URL to fetch, if any.
    ///
    /// - same URL as last time -> nothing to do
    /// - no URL -> image cleared
    /// - new URL -> old image stays up until the new one lands
    pub fn request(&mut self, url: Option<&str>) -> Option<String> {
        if self.last_rendered_url.as_deref() == url {
            return None;
        }

        self.last_rendered_url = url.map(str::to_string);
        if url.is_none() {
            self.handle = None;
        }
        self.last_rendered_url.clone()
    }

    /// Accept a finished fetch. Results for a URL we moved away from are dropped.
    pub fn loaded(&mut self, url: &str, handle: Option<image::Handle>) -> bool {
        if self.last_rendered_url.as_deref() != Some(url) {
            return false;
        }
        self.handle = handle;
        true
    }
}

/// What the status line is showing, and who may clear it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Status {
    /// Startup failed (no token, bad config). Stays for the session.
    Setup(String),
    /// A poll failed. Cleared by the next good snapshot.
    Remote(String),
    /// A button command failed. Cleared by the next press, not by re-polls.
    Command(String),
}

impl Status {
    pub(crate) fn text(&self) -> &str {
        match self {
            Status::Setup(s) | Status::Remote(s) | Status::Command(s) => s,
        }
    }
}

/// App state
pub(crate) struct Spotimote {
    /// `None` when startup could not build a client (no token, bad TLS, ...).
    pub client: Option<StateClient>,
    pub http: Option<Client>,

    /// Listener -> UI thread queue, drained on `Message::Tick`.
    pub events: Option<Receiver<Message>>,
    pub listener_handles: Vec<ListenerHandle>,

    // Now playing panel
    pub snapshot: Arc<PlaybackSnapshot>,
    pub artwork: ArtworkSlot,

    // Controls
    pub is_playing: bool,

    /// Last error shown on the status line.
    pub status: Option<Status>,

    pub theme: ThemeChoice,
}

impl Spotimote {
    /// State with nothing connected yet.
    pub(crate) fn offline(theme: ThemeChoice) -> Self {
        Self {
            client: None,
            http: None,
            events: None,
            listener_handles: Vec::new(),
            snapshot: Arc::new(PlaybackSnapshot::inactive()),
            artwork: ArtworkSlot::default(),
            is_playing: false,
            status: None,
            theme,
        }
    }

    pub(crate) fn is_connected(&self) -> bool {
        self.client.is_some()
    }
}

impl Drop for Spotimote {
    fn drop(&mut self) {
        for handle in self.listener_handles.drain(..) {
            handle.unsubscribe();
        }
    }
}

/// Which transport button was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Command {
    Previous,
    PlayPause,
    Next,
}

impl Command {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Command::Previous => "Previous",
            Command::PlayPause => "Play/Pause",
            Command::Next => "Next",
        }
    }
}

/// Message = “something happened”.
#[derive(Debug, Clone)]
pub(crate) enum Message {
    /// Drain the listener queue.
    Tick,

    // Polling
    Poll,
    PollFinished(Result<(), ClientError>),

    // Buttons
    Pressed(Command),
    CommandFinished(Command, Result<(), ClientError>),

    // Listener notifications (already on the UI thread when handled)
    NowPlayingChanged(Arc<PlaybackSnapshot>),
    PlayStateChanged(bool),
    RemoteFailed(ClientError),

    // Artwork
    ArtworkLoaded(String, Result<image::Handle, ClientError>),
}
