//! Application header
//!
//! Title and subtitle row shown above the two cards.

use iced::widget::{column, text};
use iced::Element;

use crate::Message;

/// Render the application header
pub fn view_header() -> Element<'static, Message> {
    column![
        text("Bridge Deck Designer").size(22),
        text("Simplified beam-bridge deck calculations")
            .size(11)
            .color([0.28, 0.33, 0.41]),
    ]
    .spacing(2)
    .into()
}
