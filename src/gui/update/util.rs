//! gui/update/util.rs
use iced::futures::channel::oneshot;

use crate::core::error::{ClientError, Result};

/// Run a blocking remote call on a background thread and await the result.
///
/// Avoids repeating the oneshot + thread boilerplate for every
/// “call the API off-thread, then send Message::Finished(Result<...>)” case.
pub(crate) async fn spawn_blocking<T>(f: impl FnOnce() -> Result<T> + Send + 'static) -> Result<T>
where
    T: Send + 'static,
{
    let (tx, rx) = oneshot::channel::<Result<T>>();

    std::thread::spawn(move || {
        let _ = tx.send(f());
    });

    rx.await
        .map_err(|_| ClientError::Worker("worker dropped without returning".into()))?
}
