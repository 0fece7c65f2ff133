//! Page layouts.
//!
//! Two fixed layouts plus a shared footer over the panel's coordinate
//! space. Rendering is pure painting: the only inputs are the frame and
//! the derived views, and nothing here touches the network, the clock or
//! the filesystem.

use chrono::NaiveDateTime;
use embedded_graphics::mono_font::ascii::{FONT_4X6, FONT_5X8, FONT_6X13_BOLD, FONT_9X15_BOLD};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use embedded_graphics::text::{Baseline, Text};

use crate::icons::Icon;
use crate::surface::{Frame, PanelColor};
use crate::views::{EventView, StatusView};

/// Headline text (openings count, alarm state, event title)
const FONT_HEADER: MonoFont<'static> = FONT_9X15_BOLD;
/// Secondary text (door status, countdown)
const FONT_SUB: MonoFont<'static> = FONT_6X13_BOLD;
/// Small labels
const FONT_TINY: MonoFont<'static> = FONT_4X6;
/// Footer timestamp
const FONT_FOOTER: MonoFont<'static> = FONT_5X8;

/// Gap between the footer text's right edge and the panel's right edge.
pub const FOOTER_MARGIN: u32 = 5;

fn text(frame: &mut Frame, s: &str, origin: Point, font: &MonoFont, color: PanelColor) {
    let style = MonoTextStyle::new(font, color);
    let _ = Text::with_baseline(s, origin, style, Baseline::Top).draw(frame);
}

/// Advance width of `s` in the given monospaced font.
pub fn text_width(font: &MonoFont, s: &str) -> u32 {
    let advance = font.character_size.width + font.character_spacing;
    s.chars().count() as u32 * advance
}

/// X origin that right-aligns `s` a [`FOOTER_MARGIN`] from the right edge.
pub fn right_aligned_x(font: &MonoFont, s: &str, surface_width: u32) -> i32 {
    surface_width.saturating_sub(text_width(font, s) + FOOTER_MARGIN) as i32
}

/// Paint the home status layout.
pub fn draw_status_page(frame: &mut Frame, view: &StatusView) {
    // Openings block
    let openings_color = view.openings_severity.color();
    Icon::Window.draw(frame, Point::new(10, 12), openings_color);
    text(
        frame,
        &format!("{} Openings", view.openings),
        Point::new(40, 14),
        &FONT_HEADER,
        openings_color,
    );

    // Kitchen door block
    let door_color = view.door_severity.color();
    Icon::Door.draw(frame, Point::new(12, 39), door_color);
    text(frame, "KITCHEN DOOR", Point::new(33, 38), &FONT_TINY, door_color);
    text(
        frame,
        &format!("Opened {}", view.last_opened),
        Point::new(32, 46),
        &FONT_SUB,
        door_color,
    );

    // Alarm block
    let alarm_color = view.alarm_severity.color();
    view.alarm_icon.draw(frame, Point::new(12, 66), alarm_color);
    text(
        frame,
        &format!("ALARM: {}", view.alarm_state),
        Point::new(40, 68),
        &FONT_HEADER,
        alarm_color,
    );
}

/// Paint the next-event layout.
pub fn draw_event_page(frame: &mut Frame, view: &EventView) {
    // Header is always alert-colored to draw the eye.
    Icon::Calendar.draw(frame, Point::new(10, 10), PanelColor::Red);
    text(frame, "NEXT EVENT", Point::new(32, 12), &FONT_FOOTER, PanelColor::Red);

    text(frame, &view.title, Point::new(10, 29), &FONT_HEADER, PanelColor::Black);

    if view.all_day {
        Icon::Sun.draw(frame, Point::new(12, 53), PanelColor::Black);
        text(frame, "All Day Event", Point::new(32, 56), &FONT_SUB, PanelColor::Black);
    } else {
        let color = view.countdown.severity().color();
        Icon::Hourglass.draw(frame, Point::new(12, 53), color);
        text(frame, &view.countdown.label(), Point::new(32, 56), &FONT_SUB, color);
    }
}

/// Paint the shared footer: a separator rule and a right-aligned
/// "Last Update" timestamp.
pub fn draw_footer(frame: &mut Frame, now: NaiveDateTime) {
    let width = frame.width() as i32;
    let height = frame.height() as i32;

    let _ = Line::new(Point::new(0, height - 14), Point::new(width - 1, height - 14))
        .into_styled(PrimitiveStyle::with_stroke(PanelColor::Black, 1))
        .draw(frame);

    let stamp = format!("Last Update: {}", now.format("%Y-%m-%d %H:%M"));
    let x = right_aligned_x(&FONT_FOOTER, &stamp, frame.width());
    text(frame, &stamp, Point::new(x, height - 12), &FONT_FOOTER, PanelColor::Black);
}
