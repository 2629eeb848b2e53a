//! gui/mod.rs
//!
//! This folder contains ONLY frontend concerns:
//! - app state ('Spotimote') + startup wiring ('boot')
//! - messages ('Message')
//! - update logic ('update()')
//! - view layout ('view()')
//! - subscriptions (draining listener notifications)
//! - small UI helpers ('util')

mod boot;
pub(crate) mod state;
pub(crate) mod subscription;
pub(crate) mod update;
pub(crate) mod util;
pub(crate) mod view;

use iced::Theme;

use crate::core::config::ThemeChoice;

// Re-export the entry points main.rs needs.
pub(crate) use state::Spotimote;
pub(crate) use subscription::subscription;
pub(crate) use update::update;
pub(crate) use view::view;

/// Configured theme (stands in for a stylesheet).
pub(crate) fn theme(state: &Spotimote) -> Theme {
    match state.theme {
        ThemeChoice::Dark => Theme::Dark,
        ThemeChoice::Light => Theme::Light,
    }
}
