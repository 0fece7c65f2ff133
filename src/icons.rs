//! Icon glyphs drawn from graphics primitives.
//!
//! Each icon fits a fixed [`CELL`]-square box anchored at its top-left
//! corner, so layout code can treat icons and text blocks uniformly.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle, Triangle};

use crate::surface::{Frame, PanelColor};

/// Icon bounding-box edge length in pixels.
pub const CELL: u32 = 18;

/// The glyphs used by the two page layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    /// Open doors/windows counter
    Window,
    /// Kitchen door block
    Door,
    /// Alarm disarmed
    Shield,
    /// Alarm in any non-disarmed state
    Warning,
    /// Event page header
    Calendar,
    /// Countdown line
    Hourglass,
    /// All-day event line
    Sun,
}

impl Icon {
    /// Draw the icon with its top-left corner at `origin`.
    pub fn draw(self, frame: &mut Frame, origin: Point, color: PanelColor) {
        let stroke = PrimitiveStyle::with_stroke(color, 1);
        let fill = PrimitiveStyle::with_fill(color);

        match self {
            Icon::Window => {
                let _ = Rectangle::new(origin + Point::new(1, 1), Size::new(16, 16))
                    .into_styled(stroke)
                    .draw(frame);
                let _ = Line::new(origin + Point::new(9, 1), origin + Point::new(9, 16))
                    .into_styled(stroke)
                    .draw(frame);
                let _ = Line::new(origin + Point::new(1, 9), origin + Point::new(16, 9))
                    .into_styled(stroke)
                    .draw(frame);
            }
            Icon::Door => {
                let _ = Rectangle::new(origin + Point::new(3, 1), Size::new(12, 16))
                    .into_styled(stroke)
                    .draw(frame);
                let _ = Rectangle::new(origin + Point::new(11, 8), Size::new(2, 2))
                    .into_styled(fill)
                    .draw(frame);
            }
            Icon::Shield => {
                let _ = Rectangle::new(origin + Point::new(3, 1), Size::new(12, 8))
                    .into_styled(stroke)
                    .draw(frame);
                let _ = Triangle::new(
                    origin + Point::new(3, 8),
                    origin + Point::new(14, 8),
                    origin + Point::new(8, 16),
                )
                .into_styled(stroke)
                .draw(frame);
            }
            Icon::Warning => {
                let _ = Triangle::new(
                    origin + Point::new(8, 1),
                    origin + Point::new(1, 15),
                    origin + Point::new(15, 15),
                )
                .into_styled(stroke)
                .draw(frame);
                let _ = Line::new(origin + Point::new(8, 6), origin + Point::new(8, 10))
                    .into_styled(stroke)
                    .draw(frame);
                let _ = Rectangle::new(origin + Point::new(8, 12), Size::new(1, 1))
                    .into_styled(fill)
                    .draw(frame);
            }
            Icon::Calendar => {
                let _ = Rectangle::new(origin + Point::new(1, 3), Size::new(16, 14))
                    .into_styled(stroke)
                    .draw(frame);
                let _ = Rectangle::new(origin + Point::new(1, 3), Size::new(16, 4))
                    .into_styled(fill)
                    .draw(frame);
                let _ = Line::new(origin + Point::new(5, 1), origin + Point::new(5, 4))
                    .into_styled(stroke)
                    .draw(frame);
                let _ = Line::new(origin + Point::new(12, 1), origin + Point::new(12, 4))
                    .into_styled(stroke)
                    .draw(frame);
            }
            Icon::Hourglass => {
                let _ = Triangle::new(
                    origin + Point::new(3, 1),
                    origin + Point::new(14, 1),
                    origin + Point::new(8, 8),
                )
                .into_styled(stroke)
                .draw(frame);
                let _ = Triangle::new(
                    origin + Point::new(8, 8),
                    origin + Point::new(3, 16),
                    origin + Point::new(14, 16),
                )
                .into_styled(stroke)
                .draw(frame);
            }
            Icon::Sun => {
                let _ = Circle::new(origin + Point::new(5, 5), 8)
                    .into_styled(stroke)
                    .draw(frame);
                let _ = Line::new(origin + Point::new(9, 1), origin + Point::new(9, 3))
                    .into_styled(stroke)
                    .draw(frame);
                let _ = Line::new(origin + Point::new(9, 15), origin + Point::new(9, 17))
                    .into_styled(stroke)
                    .draw(frame);
                let _ = Line::new(origin + Point::new(1, 9), origin + Point::new(3, 9))
                    .into_styled(stroke)
                    .draw(frame);
                let _ = Line::new(origin + Point::new(15, 9), origin + Point::new(17, 9))
                    .into_styled(stroke)
                    .draw(frame);
            }
        }
    }
}
