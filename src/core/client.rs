//! core/client.rs
//! State client: remote playback service + listener registry.
//!
//! - `poll()` maps the remote response into a fresh snapshot and broadcasts it.
//! - Commands fire once, then schedule ONE delayed `poll()` on a timer thread.
//! - Listeners run on whatever thread polled. Callers that own thread-bound
//!   state (the GUI) must only enqueue from a listener.
//!
//! No Iced imports.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use super::error::Result;
use super::listeners::{ListenerHandle, ListenerRegistry};
use super::remote::{CurrentlyPlaying, RemoteService};
use super::types::{PlaybackEvent, PlaybackSnapshot};

#[derive(Clone)]
pub struct StateClient {
    remote: Arc<dyn RemoteService>,
    listeners: ListenerRegistry,
    repoll_delay: Duration,
}

impl StateClient {
    pub fn new(remote: Arc<dyn RemoteService>, repoll_delay: Duration) -> Self {
        Self {
            remote,
            listeners: ListenerRegistry::new(),
            repoll_delay,
        }
    }

    pub fn subscribe(
        &self,
        listener: impl Fn(&PlaybackEvent) + Send + Sync + 'static,
    ) -> ListenerHandle {
        self.listeners.subscribe(listener)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Fetch, map, broadcast. Failures are broadcast too, then returned.
    pub fn poll(&self) -> Result<Arc<PlaybackSnapshot>> {
        match self.remote.currently_playing() {
            Ok(response) => {
                let snapshot = Arc::new(snapshot_from(response));
                tracing::debug!(
                    is_playing = snapshot.is_playing,
                    track = %snapshot.track_name,
                    "polled playback"
                );
                self.listeners
                    .dispatch(&PlaybackEvent::Updated(Arc::clone(&snapshot)));
                Ok(snapshot)
            }
            Err(e) => {
                tracing::warn!(error = %e, "poll failed");
                self.listeners.dispatch(&PlaybackEvent::Failed(e.clone()));
                Err(e)
            }
        }
    }

    pub fn play(&self) -> Result<()> {
        self.command("play", |r| r.play())
    }

    pub fn pause(&self) -> Result<()> {
        self.command("pause", |r| r.pause())
    }

    pub fn next_track(&self) -> Result<()> {
        self.command("next", |r| r.next_track())
    }

    pub fn previous_track(&self) -> Result<()> {
        self.command("previous", |r| r.previous_track())
    }

    /// Play/pause button: act on the last state we rendered.
    pub fn toggle_playback(&self, is_playing: bool) -> Result<()> {
        if is_playing { self.pause() } else { self.play() }
    }

    fn command(
        &self,
        name: &'static str,
        send: impl FnOnce(&dyn RemoteService) -> Result<()>,
    ) -> Result<()> {
        let result = send(self.remote.as_ref());
        if let Err(e) = &result {
            tracing::warn!(command = name, error = %e, "command failed");
        }

        // Re-poll either way: a failed command may still have changed state.
        self.schedule_repoll();
        result
    }

    fn schedule_repoll(&self) {
        let client = self.clone();
        let delay = self.repoll_delay;

        let spawned = thread::Builder::new()
            .name("repoll-timer".into())
            .spawn(move || {
                thread::sleep(delay);
                // Outcome already went to listeners.
                let _ = client.poll();
            });

        if let Err(e) = spawned {
            tracing::error!(error = %e, "could not spawn re-poll timer");
        }
    }
}

/// `None` or a session without a track -> inactive snapshot.
fn snapshot_from(response: Option<CurrentlyPlaying>) -> PlaybackSnapshot {
    let Some(CurrentlyPlaying {
        is_playing,
        item: Some(track),
    }) = response
    else {
        return PlaybackSnapshot::inactive();
    };

    PlaybackSnapshot {
        is_playing,
        track_name: track.name,
        artist_names: track.artists.into_iter().map(|a| a.name).collect(),
        artwork_url: track.album.images.into_iter().next().map(|i| i.url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ClientError;
    use crate::core::remote::model::{Album, Artist, Image, Track};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::mpsc;
    use std::time::Instant;

    #[derive(Default)]
    struct FakeRemote {
        response: Mutex<Option<CurrentlyPlaying>>,
        fail_poll: Mutex<Option<ClientError>>,
        fail_commands: bool,
        polls: AtomicUsize,
        commands: Mutex<Vec<&'static str>>,
    }

    impl FakeRemote {
        fn record(&self, name: &'static str) -> Result<()> {
            self.commands.lock().unwrap().push(name);
            if self.fail_commands {
                Err(ClientError::Status {
                    status: 404,
                    message: "No active device found".into(),
                })
            } else {
                Ok(())
            }
        }
    }

    impl RemoteService for FakeRemote {
        fn currently_playing(&self) -> Result<Option<CurrentlyPlaying>> {
            self.polls.fetch_add(1, Ordering::SeqCst);
            if let Some(e) = self.fail_poll.lock().unwrap().clone() {
                return Err(e);
            }
            Ok(self.response.lock().unwrap().clone())
        }
        fn play(&self) -> Result<()> {
            self.record("play")
        }
        fn pause(&self) -> Result<()> {
            self.record("pause")
        }
        fn next_track(&self) -> Result<()> {
            self.record("next")
        }
        fn previous_track(&self) -> Result<()> {
            self.record("previous")
        }
    }

    fn playing(name: &str, artists: &[&str], images: &[&str]) -> CurrentlyPlaying {
        CurrentlyPlaying {
            is_playing: true,
            item: Some(Track {
                name: name.into(),
                artists: artists.iter().map(|a| Artist { name: (*a).into() }).collect(),
                album: Album {
                    images: images
                        .iter()
                        .map(|u| Image {
                            url: (*u).into(),
                            width: Some(640),
                            height: Some(640),
                        })
                        .collect(),
                },
            }),
        }
    }

    fn client_with(remote: FakeRemote, delay_ms: u64) -> (StateClient, Arc<FakeRemote>) {
        let remote = Arc::new(remote);
        let client = StateClient::new(remote.clone(), Duration::from_millis(delay_ms));
        (client, remote)
    }

    #[test]
    fn poll_without_session_is_inactive() {
        let (client, _) = client_with(FakeRemote::default(), 10);
        let snap = client.poll().unwrap();
        assert_eq!(*snap, PlaybackSnapshot::inactive());
    }

    #[test]
    fn poll_with_session_but_no_item_is_inactive() {
        let remote = FakeRemote::default();
        *remote.response.lock().unwrap() = Some(CurrentlyPlaying {
            is_playing: true,
            item: None,
        });
        let (client, _) = client_with(remote, 10);
        assert_eq!(*client.poll().unwrap(), PlaybackSnapshot::inactive());
    }

    #[test]
    fn poll_keeps_artist_order_and_first_image() {
        let remote = FakeRemote::default();
        *remote.response.lock().unwrap() = Some(playing(
            "Under Pressure",
            &["Queen", "David Bowie"],
            &["https://img/640", "https://img/64"],
        ));
        let (client, _) = client_with(remote, 10);

        let snap = client.poll().unwrap();
        assert!(snap.is_playing);
        assert_eq!(snap.track_name, "Under Pressure");
        assert_eq!(snap.artist_names, vec!["Queen", "David Bowie"]);
        assert_eq!(snap.artwork_url.as_deref(), Some("https://img/640"));
    }

    #[test]
    fn album_without_images_has_no_artwork() {
        let remote = FakeRemote::default();
        *remote.response.lock().unwrap() = Some(playing("Track", &["A"], &[]));
        let (client, _) = client_with(remote, 10);
        assert_eq!(client.poll().unwrap().artwork_url, None);
    }

    #[test]
    fn listeners_get_same_snapshot_in_order() {
        let (client, _) = client_with(FakeRemote::default(), 10);
        let seen: Arc<Mutex<Vec<(&str, Arc<PlaybackSnapshot>)>>> = Arc::default();

        for tag in ["a", "b"] {
            let seen = seen.clone();
            let _ = client.subscribe(move |ev| {
                if let PlaybackEvent::Updated(s) = ev {
                    seen.lock().unwrap().push((tag, Arc::clone(s)));
                }
            });
        }

        let snap = client.poll().unwrap();
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].0, "a");
        assert_eq!(seen[1].0, "b");
        assert!(Arc::ptr_eq(&seen[0].1, &seen[1].1));
        assert!(Arc::ptr_eq(&seen[0].1, &snap));
    }

    #[test]
    fn unsubscribed_listener_gets_nothing_more() {
        let (client, _) = client_with(FakeRemote::default(), 10);
        let hits = Arc::new(AtomicUsize::new(0));

        let handle = {
            let hits = hits.clone();
            client.subscribe(move |_| {
                hits.fetch_add(1, Ordering::SeqCst);
            })
        };

        client.poll().unwrap();
        handle.unsubscribe();
        client.poll().unwrap();

        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn poll_failure_is_broadcast_and_returned() {
        let remote = FakeRemote::default();
        *remote.fail_poll.lock().unwrap() = Some(ClientError::Unauthorized);
        let (client, _) = client_with(remote, 10);

        let (tx, rx) = mpsc::channel();
        let _ = client.subscribe(move |ev| {
            let _ = tx.send(ev.clone());
        });

        assert_eq!(client.poll().unwrap_err(), ClientError::Unauthorized);
        assert!(matches!(
            rx.try_recv(),
            Ok(PlaybackEvent::Failed(ClientError::Unauthorized))
        ));
    }

    fn assert_single_repoll(fail_commands: bool, run: impl Fn(&StateClient) -> Result<()>) {
        let (client, remote) = client_with(
            FakeRemote {
                fail_commands,
                ..FakeRemote::default()
            },
            20,
        );
        let (tx, rx) = mpsc::channel();
        let _ = client.subscribe(move |ev| {
            let _ = tx.send(ev.clone());
        });

        let result = run(&client);
        assert_eq!(result.is_err(), fail_commands);

        let first = rx.recv_timeout(Duration::from_secs(2));
        assert!(matches!(first, Ok(PlaybackEvent::Updated(_))));
        assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
        assert_eq!(remote.polls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn every_command_repolls_once() {
        assert_single_repoll(false, |c| c.play());
        assert_single_repoll(false, |c| c.pause());
        assert_single_repoll(false, |c| c.next_track());
        assert_single_repoll(false, |c| c.previous_track());
    }

    #[test]
    fn failed_command_still_repolls_once() {
        assert_single_repoll(true, |c| c.play());
        assert_single_repoll(true, |c| c.next_track());
    }

    #[test]
    fn command_returns_before_repoll() {
        let (client, remote) = client_with(FakeRemote::default(), 300);
        let started = Instant::now();
        client.next_track().unwrap();

        assert!(started.elapsed() < Duration::from_millis(300));
        assert_eq!(remote.polls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn toggle_uses_last_known_state() {
        let (client, remote) = client_with(FakeRemote::default(), 10);
        client.toggle_playback(true).unwrap();
        client.toggle_playback(false).unwrap();
        assert_eq!(*remote.commands.lock().unwrap(), vec!["pause", "play"]);
    }
}
