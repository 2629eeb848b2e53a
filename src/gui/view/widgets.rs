//! Reusable small widgets used across view modules.

use iced::widget::{column, container, image, text};
use iced::{Alignment, Element, Length};

use super::super::state::Message;

pub(crate) fn cover_placeholder(size: f32) -> iced::widget::Container<'static, Message> {
    container(
        column![text("♪").size(48), text("no artwork").size(12)]
            .spacing(4)
            .align_x(Alignment::Center),
    )
    .width(Length::Fixed(size))
    .height(Length::Fixed(size))
    .center_x(Length::Fixed(size))
    .center_y(Length::Fixed(size))
    .style(container::rounded_box)
}

/// If `handle` exists, show it; otherwise show the placeholder.
pub(crate) fn cover(handle: Option<&image::Handle>, size: f32) -> Element<'static, Message> {
    match handle {
        Some(h) => container(
            image(h.clone())
                .width(Length::Fixed(size))
                .height(Length::Fixed(size)),
        )
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .into(),
        None => cover_placeholder(size).into(),
    }
}
