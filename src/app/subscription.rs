// SPDX-License-Identifier: MPL-2.0
//! Native event routing that is not handled by widgets.

use super::Message;
use iced::{event, Subscription};

/// Routes files dropped on the window to the loader.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        if let event::Event::Window(iced::window::Event::FileDropped(path)) = event {
            return Some(Message::FileDropped(path));
        }
        None
    })
}
