//! Core data types shared between core logic and the UI.
//!
//! Rule of thumb:
//! - These structs should be “boring bags of data”
//! - No GUI code
//! - No HTTP code
//!
//! 'PlaybackSnapshot' represents what the account is playing at one poll.

use std::sync::Arc;

use super::error::ClientError;

/// Track label shown when the account has no active playback session.
pub const NO_SESSION_TEXT: &str = "No session is active";

/// Playback state at one point in time.
///
/// Built fresh on every poll and never mutated afterwards. Listeners receive
/// it behind an `Arc`, so every listener of one dispatch sees the same value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackSnapshot {
    pub is_playing: bool,
    pub track_name: String,
    /// Artist names in the order the remote service lists them.
    pub artist_names: Vec<String>,
    /// First album image, if the album has any.
    pub artwork_url: Option<String>,
}

impl PlaybackSnapshot {
    /// Snapshot used when nothing is playing on the account.
    pub fn inactive() -> Self {
        Self {
            is_playing: false,
            track_name: NO_SESSION_TEXT.to_string(),
            artist_names: Vec::new(),
            artwork_url: None,
        }
    }

    /// Artists joined for the artist label.
    /// Ex: ["A", "B"] -> "A, B"
    pub fn artists_line(&self) -> String {
        self.artist_names.join(", ")
    }
}

/// What listeners receive on every poll.
#[derive(Debug, Clone)]
pub enum PlaybackEvent {
    /// Poll succeeded.
    Updated(Arc<PlaybackSnapshot>),
    /// Poll reached the remote service and failed.
    Failed(ClientError),
}
