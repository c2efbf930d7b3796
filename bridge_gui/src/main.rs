//! # Bridge Deck Designer GUI
//!
//! Single-window form over `bridge_core`: four numeric fields, six derived
//! results, a schematic canvas, and a write-only JSON save. Built with the
//! Iced framework.
//!
//! The `App` struct is the form controller: it owns the raw field text, the
//! current `Option<DeckResult>`, and the last rendered schematic. Button
//! handlers parse on demand and hand validated input to the pure functions
//! in `bridge_core`; the view re-renders everything from those values, so no
//! widget holds state of its own. Every `update` runs to completion before
//! the next message is processed.

use std::path::PathBuf;

use iced::widget::{column, row, stack, Space};
use iced::{window, Element, Size};

use bridge_core::calculations::deck::{self, DeckInput, DeckResult};
use bridge_core::errors::{BridgeError, BridgeResult};
use bridge_core::file_io::{save_record, SavedRecord};
use bridge_core::schematic::{self, Primitive};

mod ui;

use ui::modal::Alert;

fn main() -> iced::Result {
    iced::application(App::default, App::update, App::view)
        .title("Bridge Deck Designer")
        .window(window::Settings {
            size: Size::new(820.0, 460.0),
            resizable: false,
            ..window::Settings::default()
        })
        .run()
}

/// Messages dispatched by user actions
#[derive(Debug, Clone)]
pub enum Message {
    SpanChanged(String),
    WidthChanged(String),
    GirdersChanged(String),
    LiveLoadChanged(String),
    Calculate,
    Clear,
    SaveJson,
    DismissAlert,
}

/// Application state (the form controller)
pub struct App {
    /// Raw field text, parsed only when a button is pressed
    pub span_text: String,
    pub width_text: String,
    pub girders_text: String,
    pub live_text: String,

    /// Result of the most recent successful Calculate, if any
    pub result: Option<DeckResult>,

    /// Last schematic render, redrawn by Calculate and Clear
    pub schematic: Vec<Primitive>,

    /// Pending blocking alert, if any
    pub alert: Option<Alert>,
}

impl Default for App {
    fn default() -> Self {
        let defaults = DeckInput::default();
        App {
            span_text: defaults.span_m.to_string(),
            width_text: defaults.width_m.to_string(),
            girders_text: defaults.girders.to_string(),
            live_text: defaults.live_load_kn_m.to_string(),
            result: None,
            schematic: schematic::render(defaults.span_m, defaults.girders),
            alert: None,
        }
    }
}

impl App {
    pub fn update(&mut self, message: Message) {
        match message {
            Message::SpanChanged(value) => self.span_text = value,
            Message::WidthChanged(value) => self.width_text = value,
            Message::GirdersChanged(value) => self.girders_text = value,
            Message::LiveLoadChanged(value) => self.live_text = value,
            Message::Calculate => self.calculate(),
            Message::Clear => self.clear(),
            Message::SaveJson => self.save_json(),
            Message::DismissAlert => self.alert = None,
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let content = column![
            ui::header::view_header(),
            Space::new().height(10),
            row![
                ui::input_panel::view_input_panel(self),
                Space::new().width(12),
                ui::results_panel::view_results_panel(self),
            ],
        ]
        .padding(12);

        match &self.alert {
            Some(alert) => stack![
                Element::from(content),
                ui::modal::view_backdrop(),
                ui::modal::view_alert(alert),
            ]
            .into(),
            None => content.into(),
        }
    }

    /// Parse the four fields into a `DeckInput`.
    ///
    /// Span, width, and live load parse as `f64`; the girder field parses
    /// through `f64` and truncates toward zero, so "4.9" becomes 4. With
    /// `require_positive` (the Calculate path) the parsed input must also
    /// pass `DeckInput::validate`; the Save path accepts any parsed values.
    fn parse_inputs(&self, require_positive: bool) -> BridgeResult<DeckInput> {
        let input = DeckInput {
            span_m: parse_field("span", &self.span_text)?,
            width_m: parse_field("width", &self.width_text)?,
            girders: parse_girders(&self.girders_text)?,
            live_load_kn_m: parse_field("live", &self.live_text)?,
        };
        if require_positive {
            input.validate()?;
        }
        Ok(input)
    }

    /// Calculate button: validate, compute, replace results and schematic.
    ///
    /// On any parse or validation failure the previous results and schematic
    /// stay untouched; only the alert changes.
    fn calculate(&mut self) {
        let input = match self.parse_inputs(true) {
            Ok(input) => input,
            Err(_) => {
                self.alert = Some(Alert::error(
                    "Invalid input",
                    "Please enter valid positive numbers.",
                ));
                return;
            }
        };

        self.result = Some(deck::calculate(&input));
        self.schematic = schematic::render(input.span_m, input.girders);
    }

    /// Clear button: defaults back into the fields, results unset,
    /// schematic redrawn from the defaults.
    fn clear(&mut self) {
        *self = App::default();
    }

    /// Save JSON button: parse (no positivity constraints), prompt for a
    /// destination, write the record. Parse failure never opens the prompt.
    fn save_json(&mut self) {
        let inputs = match self.parse_inputs(false) {
            Ok(inputs) => inputs,
            Err(_) => {
                self.alert = Some(Alert::error("Invalid input", "Enter valid values first."));
                return;
            }
        };

        let path = prompt_save_path();
        self.write_save(inputs, path);
    }

    /// Write the record to the chosen destination.
    ///
    /// `None` means the dialog was dismissed: the operation ends silently
    /// with no write and no feedback. Success and write failure both raise
    /// an alert.
    fn write_save(&mut self, inputs: DeckInput, path: Option<PathBuf>) {
        let Some(path) = path else {
            return;
        };

        match save_record(&SavedRecord::new(inputs), &path) {
            Ok(()) => self.alert = Some(Alert::info("Saved", "File saved successfully.")),
            Err(e) => self.alert = Some(Alert::error("Save failed", e.to_string())),
        }
    }
}

/// Open the native save dialog; `None` means the user dismissed it
fn prompt_save_path() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("JSON files", &["json"])
        .set_file_name("bridge_inputs.json")
        .save_file()
}

/// Parse one field as `f64`
fn parse_field(field: &'static str, text: &str) -> BridgeResult<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| BridgeError::invalid_input(field, text, "Not a number"))
}

/// Parse the girder field: through `f64`, truncated toward zero
fn parse_girders(text: &str) -> BridgeResult<i64> {
    let raw = parse_field("girders", text)?;
    if !raw.is_finite() {
        return Err(BridgeError::invalid_input(
            "girders",
            text,
            "Not a finite number",
        ));
    }
    Ok(raw.trunc() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let app = App::default();
        assert_eq!(app.span_text, "30");
        assert_eq!(app.width_text, "10");
        assert_eq!(app.girders_text, "4");
        assert_eq!(app.live_text, "5");
        assert!(app.result.is_none());
        assert_eq!(app.schematic, schematic::render(30.0, 4));
    }

    #[test]
    fn test_calculate_replaces_result_and_schematic() {
        let mut app = App::default();
        app.update(Message::Calculate);

        let result = app.result.as_ref().unwrap();
        assert_eq!(result.deck_self_weight_kn, 1500.0);
        assert_eq!(result.per_girder_shear_kn, 206.25);
        assert!(app.alert.is_none());
    }

    #[test]
    fn test_unparseable_span_leaves_prior_state() {
        let mut app = App::default();
        app.update(Message::Calculate);
        let prior_result = app.result.clone();
        let prior_schematic = app.schematic.clone();

        app.update(Message::SpanChanged("abc".to_string()));
        app.update(Message::Calculate);

        assert_eq!(app.result, prior_result);
        assert_eq!(app.schematic, prior_schematic);
        assert!(app.alert.is_some());
    }

    #[test]
    fn test_negative_span_rejected() {
        let mut app = App::default();
        app.update(Message::SpanChanged("-5".to_string()));
        app.update(Message::Calculate);

        assert!(app.result.is_none());
        assert!(app.alert.is_some());
    }

    #[test]
    fn test_girder_text_truncates_toward_zero() {
        let mut app = App::default();
        app.update(Message::GirdersChanged("4.9".to_string()));
        let input = app.parse_inputs(true).unwrap();
        assert_eq!(input.girders, 4);
    }

    #[test]
    fn test_zero_girders_rejected_on_calculate() {
        let mut app = App::default();
        app.update(Message::GirdersChanged("0.7".to_string()));
        app.update(Message::Calculate);

        assert!(app.result.is_none());
        assert!(app.alert.is_some());
    }

    #[test]
    fn test_clear_resets_from_any_state() {
        let mut app = App::default();
        app.update(Message::SpanChanged("50".to_string()));
        app.update(Message::GirdersChanged("7".to_string()));
        app.update(Message::Calculate);
        assert!(app.result.is_some());

        app.update(Message::Clear);

        assert_eq!(app.span_text, "30");
        assert_eq!(app.width_text, "10");
        assert_eq!(app.girders_text, "4");
        assert_eq!(app.live_text, "5");
        assert!(app.result.is_none());
        assert_eq!(app.schematic, schematic::render(30.0, 4));
    }

    #[test]
    fn test_save_parsing_skips_positivity() {
        let mut app = App::default();
        app.update(Message::SpanChanged("-5".to_string()));
        app.update(Message::GirdersChanged("-2".to_string()));

        // Calculate would reject this; the Save path accepts it
        assert!(app.parse_inputs(true).is_err());
        let input = app.parse_inputs(false).unwrap();
        assert_eq!(input.span_m, -5.0);
        assert_eq!(input.girders, -2);
    }

    #[test]
    fn test_save_parsing_still_rejects_garbage() {
        let mut app = App::default();
        app.update(Message::LiveLoadChanged("lots".to_string()));
        assert!(app.parse_inputs(false).is_err());
    }

    #[test]
    fn test_whitespace_trimmed() {
        let mut app = App::default();
        app.update(Message::SpanChanged("  25.5 ".to_string()));
        let input = app.parse_inputs(true).unwrap();
        assert_eq!(input.span_m, 25.5);
    }

    #[test]
    fn test_cancelled_save_prompt_is_silent() {
        let mut app = App::default();
        let inputs = app.parse_inputs(false).unwrap();

        app.write_save(inputs, None);

        assert!(app.alert.is_none());
    }

    #[test]
    fn test_accepted_save_prompt_writes_record() {
        use crate::ui::modal::AlertKind;
        use std::time::{SystemTime, UNIX_EPOCH};

        let mut app = App::default();
        let path = std::env::temp_dir().join("bridge_gui_test_save.json");
        let inputs = app.parse_inputs(false).unwrap();

        let before = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs() as i64;
        app.write_save(inputs, Some(path.clone()));
        let after = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs() as i64;

        assert!(matches!(&app.alert, Some(a) if a.kind == AlertKind::Info));

        let written = std::fs::read_to_string(&path).unwrap();
        let record: SavedRecord = serde_json::from_str(&written).unwrap();
        assert_eq!(record.inputs, DeckInput::default());
        assert!(record.timestamp >= before && record.timestamp <= after + 1);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_failed_write_raises_alert() {
        use crate::ui::modal::AlertKind;

        let mut app = App::default();
        let path = std::env::temp_dir()
            .join("bridge_gui_missing_dir")
            .join("record.json");
        let inputs = app.parse_inputs(false).unwrap();

        app.write_save(inputs, Some(path));

        assert!(matches!(&app.alert, Some(a) if a.kind == AlertKind::Error));
    }

    #[test]
    fn test_dismiss_alert() {
        let mut app = App::default();
        app.update(Message::SpanChanged("abc".to_string()));
        app.update(Message::Calculate);
        assert!(app.alert.is_some());

        app.update(Message::DismissAlert);
        assert!(app.alert.is_none());
    }
}
