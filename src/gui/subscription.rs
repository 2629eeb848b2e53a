//! gui/subscription.rs
//! Drain the listener queue by emitting a periodic Tick message.

use iced::{Subscription, time};
use std::time::Duration;

use super::state::{Message, Spotimote};

const DRAIN_MS: u64 = 50;

pub(crate) fn subscription(state: &Spotimote) -> Subscription<Message> {
    if state.events.is_none() {
        return Subscription::none();
    }

    time::every(Duration::from_millis(DRAIN_MS)).map(|_| Message::Tick)
}
