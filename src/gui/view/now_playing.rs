//! Artwork + track name + artists.

use iced::Alignment;
use iced::widget::{Column, column, text};

use super::super::state::{Message, Spotimote};
use super::super::util::ellipsize;
use super::constants::{ARTIST_TEXT, COVER_SIZE, LABEL_MAX_CHARS, NOW_PLAYING_SPACING, TRACK_TEXT};
use super::widgets::cover;

pub(crate) fn build_now_playing(state: &Spotimote) -> Column<'_, Message> {
    let snapshot = &state.snapshot;

    let track_name = text(ellipsize(&snapshot.track_name, LABEL_MAX_CHARS)).size(TRACK_TEXT);
    let artists = text(ellipsize(&snapshot.artists_line(), LABEL_MAX_CHARS)).size(ARTIST_TEXT);

    column![
        cover(state.artwork.handle.as_ref(), COVER_SIZE),
        track_name,
        artists,
    ]
    .spacing(NOW_PLAYING_SPACING)
    .align_x(Alignment::Start)
}
