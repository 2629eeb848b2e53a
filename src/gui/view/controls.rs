//! Transport buttons: previous / play-pause / next.
//!
//! Emits only Messages. Buttons are inert (no on_press) while disconnected.

use iced::Alignment;
use iced::widget::{Button, Row, button, row, text};

use super::super::state::{Command, Message, Spotimote};
use super::constants::{BUTTON_TEXT, CONTROLS_SPACING};

/// Glyph for the play/pause button: what pressing it will do.
pub(crate) fn play_pause_glyph(is_playing: bool) -> &'static str {
    if is_playing { "⏸" } else { "▶" }
}

fn transport_button(glyph: &'static str, cmd: Command, enabled: bool) -> Button<'static, Message> {
    let b = button(text(glyph).size(BUTTON_TEXT));
    if enabled { b.on_press(Message::Pressed(cmd)) } else { b }
}

pub(crate) fn build_controls(state: &Spotimote) -> Row<'_, Message> {
    let enabled = state.is_connected();

    let prev_btn = transport_button("⏮", Command::Previous, enabled).style(button::secondary);
    let play_btn = transport_button(play_pause_glyph(state.is_playing), Command::PlayPause, enabled)
        .style(button::primary);
    let next_btn = transport_button("⏭", Command::Next, enabled).style(button::secondary);

    row![prev_btn, play_btn, next_btn]
        .spacing(CONTROLS_SPACING)
        .align_y(Alignment::Center)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_tracks_play_state() {
        assert_eq!(play_pause_glyph(true), "⏸");
        assert_eq!(play_pause_glyph(false), "▶");
    }
}
