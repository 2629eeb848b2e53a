//! gui/update/artwork.rs
//! Album art: equality-gated fetch, decode handle on arrival.

use iced::Task;
use iced::widget::image;

use super::super::state::{Message, Spotimote};
use super::util::spawn_blocking;
use crate::core::artwork::fetch_artwork;
use crate::core::error::ClientError;

/// Point the artwork slot at `url`, fetching only if it changed.
pub(crate) fn show(state: &mut Spotimote, url: Option<&str>) -> Task<Message> {
    let Some(url) = state.artwork.request(url) else {
        return Task::none();
    };

    let Some(http) = state.http.clone() else {
        return Task::none();
    };

    tracing::debug!(%url, "fetching artwork");

    let fetch_url = url.clone();
    Task::perform(
        spawn_blocking(move || fetch_artwork(&http, &fetch_url)),
        move |result| Message::ArtworkLoaded(url.clone(), result.map(image::Handle::from_bytes)),
    )
}

pub(crate) fn artwork_loaded(
    state: &mut Spotimote,
    url: String,
    result: Result<image::Handle, ClientError>,
) -> Task<Message> {
    let handle = match result {
        Ok(h) => Some(h),
        Err(e) => {
            // Placeholder is shown instead; same URL won't be retried.
            tracing::warn!(%url, error = %e, "artwork fetch failed");
            None
        }
    };

    if !state.artwork.loaded(&url, handle) {
        tracing::debug!(%url, "dropping stale artwork");
    }
    Task::none()
}
