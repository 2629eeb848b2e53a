//! View constants (layout/sizing).

pub(crate) const WINDOW_W: f32 = 500.0;
pub(crate) const WINDOW_H: f32 = 420.0;

pub(crate) const COVER_SIZE: f32 = 200.0;

/// Labels are cut to this many characters with an ellipsis.
pub(crate) const LABEL_MAX_CHARS: usize = 32;

pub(crate) const TRACK_TEXT: f32 = 20.0;
pub(crate) const ARTIST_TEXT: f32 = 14.0;
pub(crate) const STATUS_TEXT: f32 = 12.0;
pub(crate) const BUTTON_TEXT: f32 = 22.0;

pub(crate) const MAIN_SPACING: f32 = 32.0;
pub(crate) const NOW_PLAYING_SPACING: f32 = 8.0;
pub(crate) const CONTROLS_SPACING: f32 = 24.0;
