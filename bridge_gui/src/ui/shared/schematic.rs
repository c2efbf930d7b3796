//! Canvas drawing for the bridge schematic
//!
//! Translates the primitive list produced by `bridge_core::schematic` into
//! Iced canvas geometry. All positioning lives in the core renderer; this
//! program only maps primitive kinds to colors and strokes.

use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke, Text};
use iced::{Color, Point, Rectangle, Renderer, Size, Theme};

use bridge_core::schematic::{LabelAlign, Primitive, RectKind};

use crate::Message;

/// Canvas program drawing a fixed primitive list
pub struct SchematicCanvas {
    primitives: Vec<Primitive>,
}

impl SchematicCanvas {
    pub fn new(primitives: Vec<Primitive>) -> Self {
        Self { primitives }
    }
}

impl canvas::Program<Message> for SchematicCanvas {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let background = Color::from_rgb8(0xf9, 0xfa, 0xfb);
        let deck_fill = Color::from_rgb8(0x25, 0x63, 0xeb);
        let deck_outline = Color::from_rgb8(0x18, 0x46, 0xb3);
        let support_fill = Color::from_rgb8(0x33, 0x41, 0x55);
        let ink = Color::from_rgb8(0x0f, 0x17, 0x2a);

        frame.fill_rectangle(Point::ORIGIN, frame.size(), background);

        for primitive in &self.primitives {
            match primitive {
                Primitive::Rect {
                    x,
                    y,
                    width,
                    height,
                    kind,
                } => {
                    let rect = Path::rectangle(Point::new(*x, *y), Size::new(*width, *height));
                    match kind {
                        RectKind::Deck => {
                            frame.fill(&rect, deck_fill);
                            frame.stroke(
                                &rect,
                                Stroke::default().with_color(deck_outline).with_width(2.0),
                            );
                        }
                        RectKind::Support => frame.fill(&rect, support_fill),
                    }
                }
                Primitive::Line { x1, y1, x2, y2 } => {
                    let line = Path::line(Point::new(*x1, *y1), Point::new(*x2, *y2));
                    frame.stroke(&line, Stroke::default().with_color(ink).with_width(3.0));
                }
                Primitive::Label { x, y, text, align } => {
                    let align_x = match align {
                        LabelAlign::Left => iced::alignment::Horizontal::Left,
                        LabelAlign::Right => iced::alignment::Horizontal::Right,
                    };
                    frame.fill_text(Text {
                        content: text.clone(),
                        position: Point::new(*x, *y),
                        color: ink,
                        size: iced::Pixels(9.0),
                        align_x: align_x.into(),
                        ..Text::default()
                    });
                }
            }
        }

        vec![frame.into_geometry()]
    }
}
