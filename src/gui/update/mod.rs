//! gui/update/mod.rs
//! Update logic (router).
//! Mutates state in response to `Message` events.

use iced::Task;

use super::state::{Message, Spotimote};

mod artwork;
mod playback;
mod util;

pub(crate) fn update(state: &mut Spotimote, message: Message) -> Task<Message> {
    match message {
        Message::Tick => drain_events(state),

        // Polling
        Message::Poll => playback::poll(state),
        Message::PollFinished(result) => playback::poll_finished(state, result),

        // Buttons
        Message::Pressed(cmd) => playback::run_command(state, cmd),
        Message::CommandFinished(cmd, result) => playback::command_finished(state, cmd, result),

        // Listener notifications
        Message::NowPlayingChanged(snapshot) => playback::now_playing_changed(state, snapshot),
        Message::PlayStateChanged(is_playing) => playback::play_state_changed(state, is_playing),
        Message::RemoteFailed(err) => playback::remote_failed(state, err),

        // Artwork
        Message::ArtworkLoaded(url, result) => artwork::artwork_loaded(state, url, result),
    }
}

/// Apply everything listeners queued since the last tick, in arrival order.
fn drain_events(state: &mut Spotimote) -> Task<Message> {
    let Some(rx) = state.events.as_ref() else {
        return Task::none();
    };

    let drained: Vec<Message> = rx.try_iter().collect();
    if drained.is_empty() {
        return Task::none();
    }

    let tasks: Vec<Task<Message>> = drained.into_iter().map(|m| update(state, m)).collect();
    Task::batch(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::mpsc;

    use crate::core::config::ThemeChoice;
    use crate::core::error::ClientError;
    use crate::core::types::PlaybackSnapshot;
    use crate::gui::state::{Command, Status};

    fn snapshot(name: &str, playing: bool, art: Option<&str>) -> Arc<PlaybackSnapshot> {
        Arc::new(PlaybackSnapshot {
            is_playing: playing,
            track_name: name.into(),
            artist_names: vec!["Artist".into()],
            artwork_url: art.map(str::to_string),
        })
    }

    #[test]
    fn tick_applies_queued_messages_in_order() {
        let mut state = Spotimote::offline(ThemeChoice::Dark);
        let (tx, rx) = mpsc::channel();
        state.events = Some(rx);

        tx.send(Message::NowPlayingChanged(snapshot("One", true, None))).unwrap();
        tx.send(Message::PlayStateChanged(true)).unwrap();
        tx.send(Message::NowPlayingChanged(snapshot("Two", false, None))).unwrap();
        tx.send(Message::PlayStateChanged(false)).unwrap();

        let _ = update(&mut state, Message::Tick);

        assert_eq!(state.snapshot.track_name, "Two");
        assert!(!state.is_playing);
    }

    #[test]
    fn tick_without_queue_is_noop() {
        let mut state = Spotimote::offline(ThemeChoice::Dark);
        let _ = update(&mut state, Message::Tick);
        assert_eq!(*state.snapshot, PlaybackSnapshot::inactive());
    }

    #[test]
    fn remote_failure_keeps_last_snapshot() {
        let mut state = Spotimote::offline(ThemeChoice::Dark);
        let _ = update(&mut state, Message::NowPlayingChanged(snapshot("Kept", true, None)));
        let _ = update(&mut state, Message::RemoteFailed(ClientError::Unauthorized));

        assert_eq!(state.snapshot.track_name, "Kept");
        assert!(matches!(&state.status, Some(Status::Remote(m)) if m.contains("rejected")));

        // Next good snapshot clears the error.
        let _ = update(&mut state, Message::NowPlayingChanged(snapshot("Fresh", true, None)));
        assert!(state.status.is_none());
    }

    #[test]
    fn snapshot_points_artwork_slot_at_url() {
        let mut state = Spotimote::offline(ThemeChoice::Dark);
        let _ = update(
            &mut state,
            Message::NowPlayingChanged(snapshot("A", true, Some("https://img/a"))),
        );
        assert_eq!(state.artwork.last_rendered_url.as_deref(), Some("https://img/a"));

        let _ = update(&mut state, Message::NowPlayingChanged(snapshot("B", true, None)));
        assert!(state.artwork.last_rendered_url.is_none());
    }

    #[test]
    fn button_without_client_reports_status() {
        let mut state = Spotimote::offline(ThemeChoice::Dark);
        let _ = update(&mut state, Message::Pressed(Command::Next));
        assert!(matches!(state.status, Some(Status::Command(_))));
    }

    fn no_device() -> ClientError {
        ClientError::Status {
            status: 404,
            message: "No active device found".into(),
        }
    }

    #[test]
    fn failed_command_survives_the_repoll() {
        let mut state = Spotimote::offline(ThemeChoice::Dark);
        let _ = update(&mut state, Message::CommandFinished(Command::Next, Err(no_device())));
        let _ = update(
            &mut state,
            Message::NowPlayingChanged(Arc::new(PlaybackSnapshot::inactive())),
        );

        let Some(Status::Command(msg)) = &state.status else {
            panic!("command error erased: {:?}", state.status);
        };
        assert!(msg.starts_with("Next failed"));
        assert!(msg.contains("No active device found"));
    }

    #[test]
    fn poll_error_does_not_replace_command_error() {
        let mut state = Spotimote::offline(ThemeChoice::Dark);
        let _ = update(&mut state, Message::CommandFinished(Command::Previous, Err(no_device())));
        let _ = update(&mut state, Message::RemoteFailed(ClientError::Http("timeout".into())));
        assert!(matches!(state.status, Some(Status::Command(_))));
    }

    #[test]
    fn successful_command_clears_command_error() {
        let mut state = Spotimote::offline(ThemeChoice::Dark);
        let _ = update(&mut state, Message::CommandFinished(Command::Next, Err(no_device())));
        let _ = update(&mut state, Message::CommandFinished(Command::Next, Ok(())));
        assert!(state.status.is_none());
    }
}
