//! Input Panel (Left Card)
//!
//! Four free-text numeric fields (span, width, girders, live load) and the
//! Calculate / Clear / Save JSON buttons. Fields are parsed on demand by the
//! button handlers, never while typing.

use iced::widget::{button, column, container, row, text, text_input, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::{App, Message};

/// Render the input panel
pub fn view_input_panel(app: &App) -> Element<'_, Message> {
    let buttons = row![
        button(text("Calculate").size(11))
            .on_press(Message::Calculate)
            .padding(Padding::from([6, 12]))
            .style(button::primary),
        button(text("Clear").size(11))
            .on_press(Message::Clear)
            .padding(Padding::from([6, 12]))
            .style(button::secondary),
        button(text("Save JSON").size(11))
            .on_press(Message::SaveJson)
            .padding(Padding::from([6, 12]))
            .style(button::secondary),
    ]
    .spacing(6);

    let panel = column![
        text("Input Parameters").size(14),
        Space::new().height(8),
        labeled_input("Span (m):", &app.span_text, Message::SpanChanged),
        labeled_input("Width (m):", &app.width_text, Message::WidthChanged),
        labeled_input("Girders:", &app.girders_text, Message::GirdersChanged),
        labeled_input("Live load (kN/m):", &app.live_text, Message::LiveLoadChanged),
        Space::new().height(14),
        buttons,
    ]
    .spacing(6);

    container(panel)
        .width(Length::Fixed(360.0))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(12)
        .into()
}

/// Helper to create a labeled text input
fn labeled_input<'a>(
    label: &'a str,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        text(label).size(11).width(Length::Fixed(110.0)),
        text_input("", value)
            .on_input(on_change)
            .width(Length::Fill)
            .padding(4)
            .size(11),
    ]
    .align_y(Alignment::Center)
    .into()
}
