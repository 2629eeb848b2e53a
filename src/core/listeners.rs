//! core/listeners.rs
//! Ordered observer registry for playback events.
//!
//! - Registration order is dispatch order.
//! - The same callback may be registered twice; each registration is separate.
//! - Dispatch copies the list first, so callbacks may (un)subscribe freely.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

use super::types::PlaybackEvent;

pub type Listener = Arc<dyn Fn(&PlaybackEvent) + Send + Sync>;

type Entries = Mutex<Vec<(u64, Listener)>>;

#[derive(Default)]
struct Inner {
    next_id: AtomicU64,
    entries: Entries,
}

#[derive(Clone, Default)]
pub struct ListenerRegistry {
    inner: Arc<Inner>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(
        &self,
        listener: impl Fn(&PlaybackEvent) + Send + Sync + 'static,
    ) -> ListenerHandle {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);

        lock(&self.inner.entries).push((id, Arc::new(listener)));

        ListenerHandle {
            id,
            registry: Arc::downgrade(&self.inner),
        }
    }

    /// Calls every listener in registration order, on the caller's thread.
    pub fn dispatch(&self, event: &PlaybackEvent) {
        let listeners: Vec<Listener> = lock(&self.inner.entries)
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect();

        for listener in listeners {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        lock(&self.inner.entries).len()
    }
}

/// Removes one registration. Outliving the registry is fine.
#[must_use = "dropping the handle keeps the listener registered forever"]
#[derive(Debug)]
pub struct ListenerHandle {
    id: u64,
    registry: Weak<Inner>,
}

impl ListenerHandle {
    pub fn unsubscribe(self) {
        let Some(inner) = self.registry.upgrade() else {
            return;
        };
        lock(&inner.entries).retain(|(id, _)| *id != self.id);
    }
}

/// A listener that panicked mid-dispatch poisons the lock; the list itself is
/// still consistent, so keep going.
fn lock<T>(m: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
