//! GUI renderer (reads state, produces widgets; no mutation).

pub(crate) mod constants;
mod controls;
mod now_playing;
mod widgets;

use iced::widget::{column, container, text};
use iced::{Alignment, Element, Length};

use super::state::{Message, Spotimote};
use constants::{MAIN_SPACING, STATUS_TEXT};

pub(crate) fn view(state: &Spotimote) -> Element<'_, Message> {
    let main = column![
        now_playing::build_now_playing(state),
        controls::build_controls(state),
    ]
    .spacing(MAIN_SPACING)
    .align_x(Alignment::Center);

    let status = match &state.status {
        Some(status) => text(status.text()).size(STATUS_TEXT).style(text::danger),
        None => text("").size(STATUS_TEXT),
    };

    let page = column![
        container(main).center_x(Length::Fill).center_y(Length::Fill),
        container(status).center_x(Length::Fill),
    ]
    .padding(16);

    container(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
