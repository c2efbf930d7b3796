//! Modal alert component
//!
//! Blocking overlay used for validation errors, save confirmations, and file
//! errors. The backdrop swallows clicks so the user has to acknowledge the
//! message before the form accepts further input.

use iced::widget::{button, column, container, text, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::Message;

/// Severity of an alert; controls the title color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Info,
    Error,
}

/// A pending alert owned by the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub title: String,
    pub body: String,
}

impl Alert {
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Alert {
            kind: AlertKind::Info,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Alert {
            kind: AlertKind::Error,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Render the modal backdrop (semi-transparent overlay that catches clicks)
pub fn view_backdrop() -> Element<'static, Message> {
    button(Space::new())
        .on_press(Message::DismissAlert)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_, _| {
            iced::widget::button::Style::default()
                .with_background(iced::Color::from_rgba(0.0, 0.0, 0.0, 0.5))
        })
        .into()
}

/// Render the alert dialog centered over the backdrop
pub fn view_alert(alert: &Alert) -> Element<'_, Message> {
    let title_color = match alert.kind {
        AlertKind::Info => iced::Color::from_rgb(0.1, 0.1, 0.1),
        AlertKind::Error => iced::Color::from_rgb(0.8, 0.2, 0.2),
    };

    let content = column![
        text(&alert.title).size(16).color(title_color),
        Space::new().height(10),
        text(&alert.body).size(12),
        Space::new().height(16),
        button(text("OK").size(11))
            .on_press(Message::DismissAlert)
            .padding(Padding::from([6, 16]))
            .style(button::primary),
    ]
    .align_x(Alignment::Center)
    .width(Length::Fixed(320.0));

    let alert_box = container(content)
        .padding(20)
        .style(container::bordered_box);

    // Center the dialog in the window
    container(alert_box)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .into()
}
