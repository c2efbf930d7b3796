//! # Schematic Renderer
//!
//! Produces the primitive list for the bridge schematic: deck slab, two end
//! supports, girder markers, and the span/girder labels. The output is plain
//! data positioned on a fixed 380×140 logical canvas; the GUI translates it
//! into canvas geometry, so everything here is testable without a UI
//! framework.

/// Logical canvas width the primitives are positioned against
pub const CANVAS_WIDTH: f32 = 380.0;

/// Logical canvas height the primitives are positioned against
pub const CANVAS_HEIGHT: f32 = 140.0;

const DECK_X0: f32 = 20.0;
const DECK_X1: f32 = CANVAS_WIDTH - 20.0;
const DECK_Y: f32 = 40.0;
const DECK_HEIGHT: f32 = 22.0;
const SUPPORT_WIDTH: f32 = 10.0;
const SUPPORT_HEIGHT: f32 = 20.0;
// Girder markers live on the usable span, inset 20 from each deck edge
const MARKER_X0: f32 = DECK_X0 + 20.0;
const MARKER_SPAN: f32 = DECK_X1 - DECK_X0 - 40.0;

/// What a filled rectangle represents; the GUI picks colors from this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RectKind {
    Deck,
    Support,
}

/// Horizontal anchoring of a text label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelAlign {
    Left,
    Right,
}

/// One drawing primitive. Later primitives layer over earlier ones.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Filled rectangle
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        kind: RectKind,
    },
    /// Girder marker line segment
    Line { x1: f32, y1: f32, x2: f32, y2: f32 },
    /// Text label anchored at (x, y)
    Label {
        x: f32,
        y: f32,
        text: String,
        align: LabelAlign,
    },
}

/// Render the schematic for a given span and girder count.
///
/// Pure: the same inputs always yield the same primitive list. The girder
/// count is clamped to a minimum of 1, so zero or negative counts still draw
/// a single centered marker. Draw order is deck, supports, markers, labels.
pub fn render(span_m: f64, girder_count: i64) -> Vec<Primitive> {
    let girders = girder_count.max(1);
    let support_y = DECK_Y + DECK_HEIGHT;

    let mut primitives = vec![
        Primitive::Rect {
            x: DECK_X0,
            y: DECK_Y,
            width: DECK_X1 - DECK_X0,
            height: DECK_HEIGHT,
            kind: RectKind::Deck,
        },
        Primitive::Rect {
            x: DECK_X0 + 4.0,
            y: support_y,
            width: SUPPORT_WIDTH,
            height: SUPPORT_HEIGHT,
            kind: RectKind::Support,
        },
        Primitive::Rect {
            x: DECK_X1 - 4.0 - SUPPORT_WIDTH,
            y: support_y,
            width: SUPPORT_WIDTH,
            height: SUPPORT_HEIGHT,
            kind: RectKind::Support,
        },
    ];

    for i in 0..girders {
        let x = if girders == 1 {
            MARKER_X0 + MARKER_SPAN / 2.0
        } else {
            MARKER_X0 + i as f32 * (MARKER_SPAN / (girders - 1) as f32)
        };
        primitives.push(Primitive::Line {
            x1: x,
            y1: support_y,
            x2: x,
            y2: support_y + SUPPORT_HEIGHT,
        });
    }

    primitives.push(Primitive::Label {
        x: DECK_X0,
        y: DECK_Y - 10.0,
        text: format!("Span: {} m", format_span(span_m)),
        align: LabelAlign::Left,
    });
    primitives.push(Primitive::Label {
        x: DECK_X1,
        y: DECK_Y - 10.0,
        text: format!("Girders: {}", girders),
        align: LabelAlign::Right,
    });

    primitives
}

/// Whole spans keep one decimal place ("30.0") so the label reads as a
/// measurement; fractional spans print as entered.
fn format_span(span_m: f64) -> String {
    if span_m.fract() == 0.0 {
        format!("{:.1}", span_m)
    } else {
        span_m.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker_xs(primitives: &[Primitive]) -> Vec<f32> {
        primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Line { x1, .. } => Some(*x1),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_single_girder_centered() {
        let xs = marker_xs(&render(30.0, 1));
        assert_eq!(xs, vec![190.0]);
    }

    #[test]
    fn test_zero_and_negative_counts_clamp_to_one() {
        assert_eq!(marker_xs(&render(30.0, 0)), vec![190.0]);
        assert_eq!(marker_xs(&render(30.0, -3)), vec![190.0]);
    }

    #[test]
    fn test_five_girders_evenly_spaced() {
        let xs = marker_xs(&render(30.0, 5));
        assert_eq!(xs, vec![40.0, 115.0, 190.0, 265.0, 340.0]);
    }

    #[test]
    fn test_markers_span_support_depth() {
        let primitives = render(30.0, 2);
        for p in &primitives {
            if let Primitive::Line { y1, y2, .. } = p {
                assert_eq!(*y1, 62.0);
                assert_eq!(*y2, 82.0);
            }
        }
    }

    #[test]
    fn test_deck_and_support_geometry() {
        let primitives = render(30.0, 4);
        assert_eq!(
            primitives[0],
            Primitive::Rect {
                x: 20.0,
                y: 40.0,
                width: 340.0,
                height: 22.0,
                kind: RectKind::Deck,
            }
        );
        assert_eq!(
            primitives[1],
            Primitive::Rect {
                x: 24.0,
                y: 62.0,
                width: 10.0,
                height: 20.0,
                kind: RectKind::Support,
            }
        );
        assert_eq!(
            primitives[2],
            Primitive::Rect {
                x: 346.0,
                y: 62.0,
                width: 10.0,
                height: 20.0,
                kind: RectKind::Support,
            }
        );
    }

    #[test]
    fn test_labels_anchor_to_deck_edges() {
        let primitives = render(30.0, 4);
        let labels: Vec<_> = primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Label { x, text, align, .. } => Some((*x, text.clone(), *align)),
                _ => None,
            })
            .collect();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0], (20.0, "Span: 30.0 m".to_string(), LabelAlign::Left));
        assert_eq!(labels[1], (360.0, "Girders: 4".to_string(), LabelAlign::Right));
    }

    #[test]
    fn test_fractional_span_label() {
        let primitives = render(12.5, 4);
        assert!(primitives.iter().any(|p| matches!(
            p,
            Primitive::Label { text, .. } if text == "Span: 12.5 m"
        )));
    }

    #[test]
    fn test_clamped_count_shown_in_label() {
        let primitives = render(30.0, 0);
        assert!(primitives.iter().any(|p| matches!(
            p,
            Primitive::Label { text, .. } if text == "Girders: 1"
        )));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(render(22.5, 7), render(22.5, 7));
    }
}
