//! core/remote/mod.rs
//! Remote playback service boundary.
//!
//! The state client only talks to [`RemoteService`]; the Spotify Web API
//! implementation lives in `spotify.rs`, tests plug in fakes.

pub mod model;
mod spotify;

pub use model::CurrentlyPlaying;
pub use spotify::SpotifyRemote;

use super::error::Result;

/// One-shot playback queries and commands. All calls block.
pub trait RemoteService: Send + Sync {
    /// `Ok(None)` = no active session.
    fn currently_playing(&self) -> Result<Option<CurrentlyPlaying>>;

    fn play(&self) -> Result<()>;

    fn pause(&self) -> Result<()>;

    fn next_track(&self) -> Result<()>;

    fn previous_track(&self) -> Result<()>;
}
