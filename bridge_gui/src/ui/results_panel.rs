//! Results Panel (Right Card)
//!
//! Five labeled result rows and the schematic canvas. Rows show the unset
//! placeholder glyph until a Calculate succeeds; the whole panel re-renders
//! from the controller's current `Option<DeckResult>`, never from widget
//! state of its own.

use iced::widget::{canvas, column, container, row, text, Space};
use iced::{Element, Length};

use bridge_core::schematic::{CANVAS_HEIGHT, CANVAS_WIDTH};

use super::shared::schematic::SchematicCanvas;
use crate::{App, Message};

/// Placeholder glyph for unset result rows
const PLACEHOLDER: &str = "\u{2014}";

/// Render the results panel
pub fn view_results_panel(app: &App) -> Element<'_, Message> {
    let (self_weight, uniform, moment, shear, per_girder) = match &app.result {
        Some(r) => (
            format_value(r.deck_self_weight_kn),
            format_value(r.uniform_load_kn_per_m),
            format_value(r.total_moment_knm),
            format_value(r.total_shear_kn),
            format!(
                "{} / {}",
                format_value(r.per_girder_moment_knm),
                format_value(r.per_girder_shear_kn)
            ),
        ),
        None => (
            PLACEHOLDER.to_string(),
            PLACEHOLDER.to_string(),
            PLACEHOLDER.to_string(),
            PLACEHOLDER.to_string(),
            PLACEHOLDER.to_string(),
        ),
    };

    let rows = column![
        result_row("Deck self-weight (kN):", self_weight),
        result_row("Uniform load (kN/m):", uniform),
        result_row("Total moment (kN\u{b7}m):", moment),
        result_row("Total shear (kN):", shear),
        result_row("Per-girder M / V:", per_girder),
    ]
    .spacing(8);

    let schematic = canvas(SchematicCanvas::new(app.schematic.clone()))
        .width(Length::Fixed(CANVAS_WIDTH))
        .height(Length::Fixed(CANVAS_HEIGHT));

    let panel = column![
        text("Results").size(14),
        Space::new().height(8),
        rows,
        Space::new().height(12),
        text("Schematic").size(11).color([0.28, 0.33, 0.41]),
        Space::new().height(4),
        schematic,
    ]
    .spacing(0);

    container(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(12)
        .into()
}

/// One label/value row
fn result_row(label: &str, value: String) -> Element<'_, Message> {
    row![
        text(label).size(11),
        Space::new().width(Length::Fill),
        text(value).size(11),
    ]
    .into()
}

/// Display a rounded result value.
///
/// Whole values keep one decimal place ("1500.0", "55.0") so the rows read
/// as measurements; fractional values already carry at most two decimals
/// from the calculation's rounding.
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}
