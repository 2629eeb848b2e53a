//! gui/update/playback.rs
//! GUI <-> state client bridge.
//!
//! - Button presses run the command on a worker thread (HTTP blocks).
//! - The client schedules its own re-poll; results come back through the
//!   listeners, never through these tasks.
//! - Snapshot / play-state messages only touch state here, on the UI thread.

use std::sync::Arc;

use iced::Task;

use super::super::state::{Command, Message, Spotimote, Status};
use super::artwork;
use super::util::spawn_blocking;
use crate::core::error::ClientError;
use crate::core::types::PlaybackSnapshot;

pub(crate) fn poll(state: &mut Spotimote) -> Task<Message> {
    let Some(client) = state.client.clone() else {
        return Task::none();
    };

    Task::perform(
        spawn_blocking(move || client.poll().map(|_| ())),
        Message::PollFinished,
    )
}

pub(crate) fn poll_finished(
    _state: &mut Spotimote,
    result: Result<(), ClientError>,
) -> Task<Message> {
    // Listeners already got the outcome (Updated or Failed).
    if let Err(e) = result {
        tracing::debug!(error = %e, "poll task finished with error");
    }
    Task::none()
}

pub(crate) fn run_command(state: &mut Spotimote, cmd: Command) -> Task<Message> {
    let Some(client) = state.client.clone() else {
        state.status = Some(Status::Command(ClientError::MissingToken.to_string()));
        return Task::none();
    };

    // A fresh press replaces whatever the last command reported.
    if matches!(state.status, Some(Status::Command(_))) {
        state.status = None;
    }

    // Decide play vs pause from what is on screen right now.
    let is_playing = state.is_playing;

    tracing::debug!(command = cmd.label(), is_playing, "button pressed");

    Task::perform(
        spawn_blocking(move || match cmd {
            Command::Previous => client.previous_track(),
            Command::PlayPause => client.toggle_playback(is_playing),
            Command::Next => client.next_track(),
        }),
        move |result| Message::CommandFinished(cmd, result),
    )
}

pub(crate) fn command_finished(
    state: &mut Spotimote,
    cmd: Command,
    result: Result<(), ClientError>,
) -> Task<Message> {
    match result {
        Ok(()) => {
            if matches!(state.status, Some(Status::Command(_))) {
                state.status = None;
            }
        }
        Err(e) => state.status = Some(Status::Command(format!("{} failed: {e}", cmd.label()))),
    }
    Task::none()
}

pub(crate) fn now_playing_changed(
    state: &mut Spotimote,
    snapshot: Arc<PlaybackSnapshot>,
) -> Task<Message> {
    // Re-polls follow every command, so only poll errors are cleared here.
    if matches!(state.status, Some(Status::Remote(_))) {
        state.status = None;
    }
    let url = snapshot.artwork_url.clone();
    state.snapshot = snapshot;

    artwork::show(state, url.as_deref())
}

pub(crate) fn play_state_changed(state: &mut Spotimote, is_playing: bool) -> Task<Message> {
    state.is_playing = is_playing;
    Task::none()
}

pub(crate) fn remote_failed(state: &mut Spotimote, err: ClientError) -> Task<Message> {
    // Don't bury a command error under the re-poll that followed it.
    if !matches!(state.status, Some(Status::Command(_) | Status::Setup(_))) {
        state.status = Some(Status::Remote(format!("Remote error: {err}")));
    }
    Task::none()
}
