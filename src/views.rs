//! Derived presentation state.
//!
//! Pure transforms from raw entity strings to the colors, icons and text
//! the renderer paints. Nothing in this module performs I/O or reads the
//! clock; "now" is always passed in so every rule is testable in isolation.

use chrono::NaiveDateTime;

use crate::client::EntityReading;
use crate::icons::Icon;
use crate::surface::PanelColor;

/// Timestamp format used by the backend's calendar attributes.
const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Countdown color flips to alert under this many remaining minutes.
const IMMINENT_MINUTES: i64 = 15;

/// Door alert threshold in hours. Source strings round to whole hours, so
/// 2.5 catches everything labelled "3 hours ago" and up.
const DOOR_ALERT_HOURS: f64 = 2.5;

/// Titles longer than this are truncated to [`TITLE_KEEP`] chars plus `..`.
const TITLE_MAX: usize = 22;
const TITLE_KEEP: usize = 20;

/// Two-valued visual emphasis classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Routine content, drawn in black
    Normal,
    /// Attention-worthy content, drawn in red
    Alert,
}

impl Severity {
    /// Panel color carrying this classification.
    pub fn color(self) -> PanelColor {
        match self {
            Severity::Normal => PanelColor::Black,
            Severity::Alert => PanelColor::Red,
        }
    }
}

/// Coerce a state string to a count.
///
/// The sentinel and any non-numeric string map to 0; numeric strings
/// (integer or decimal) are floored. Never panics.
pub fn opening_count(state: &str) -> u32 {
    state
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && *n >= 0.0)
        .map(|n| n.floor() as u32)
        .unwrap_or(0)
}

/// Classify a natural-language "time since last opened" string.
///
/// Hour-scale elapsed times alert from [`DOOR_ALERT_HOURS`] upward,
/// day-scale always alerts, minute-scale and unparsable text never do.
pub fn door_severity(last_opened: &str) -> Severity {
    if last_opened.contains("hour") {
        let hours = last_opened
            .split_whitespace()
            .next()
            .and_then(|token| token.parse::<f64>().ok())
            .unwrap_or(0.0);
        if hours >= DOOR_ALERT_HOURS {
            Severity::Alert
        } else {
            Severity::Normal
        }
    } else if last_opened.contains("day") {
        Severity::Alert
    } else {
        Severity::Normal
    }
}

/// Map an alarm panel state to its color and glyph.
///
/// Strict two-way branch: `"disarmed"` is the only normal state; everything
/// else, the fetch sentinel included, is an alert.
pub fn alarm_style(state: &str) -> (Severity, Icon) {
    if state == "disarmed" {
        (Severity::Normal, Icon::Shield)
    } else {
        (Severity::Alert, Icon::Warning)
    }
}

/// Truncate an event title to fit one layout line.
///
/// Titles over [`TITLE_MAX`] chars keep their first [`TITLE_KEEP`] chars
/// plus a two-char ellipsis; shorter titles pass through unchanged.
pub fn truncate_title(title: &str) -> String {
    if title.chars().count() > TITLE_MAX {
        let mut out: String = title.chars().take(TITLE_KEEP).collect();
        out.push_str("..");
        out
    } else {
        title.to_string()
    }
}

/// Time remaining until an event starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    /// The start time is in the past
    Started,
    /// Remaining time, broken down into whole units
    Upcoming {
        /// Whole days remaining
        days: i64,
        /// Whole hours remaining after days (0-23)
        hours: i64,
        /// Whole minutes remaining after hours (0-59)
        minutes: i64,
    },
    /// The start timestamp could not be parsed
    Invalid,
}

impl Countdown {
    /// Compute the countdown from a `YYYY-MM-DD HH:MM:SS` start string.
    pub fn until(start: &str, now: NaiveDateTime) -> Self {
        let Ok(start) = NaiveDateTime::parse_from_str(start, START_TIME_FORMAT) else {
            return Countdown::Invalid;
        };

        let diff = start - now;
        if diff < chrono::Duration::zero() {
            return Countdown::Started;
        }

        Countdown::Upcoming {
            days: diff.num_days(),
            hours: diff.num_hours() % 24,
            minutes: diff.num_minutes() % 60,
        }
    }

    /// Display text for this countdown.
    pub fn label(&self) -> String {
        match *self {
            Countdown::Started => "Started".to_string(),
            Countdown::Invalid => "Time Error".to_string(),
            Countdown::Upcoming { days, hours, minutes } => {
                if days > 0 {
                    format!("In {}d {}h", days, hours)
                } else if hours > 0 {
                    format!("In {}h {}m", hours, minutes)
                } else {
                    format!("In {}m", minutes)
                }
            }
        }
    }

    /// Alert only when the event is imminent: no day or hour component
    /// left and under [`IMMINENT_MINUTES`] minutes remaining.
    pub fn severity(&self) -> Severity {
        match *self {
            Countdown::Upcoming {
                days: 0,
                hours: 0,
                minutes,
            } if minutes < IMMINENT_MINUTES => Severity::Alert,
            _ => Severity::Normal,
        }
    }
}

/// Derived state for the status page.
#[derive(Debug, Clone)]
pub struct StatusView {
    /// Open doors/windows count
    pub openings: u32,
    /// Color for the openings block: alert iff anything is open
    pub openings_severity: Severity,
    /// Raw "last opened" text, displayed verbatim
    pub last_opened: String,
    /// Color for the kitchen-door block
    pub door_severity: Severity,
    /// Raw alarm state, displayed verbatim
    pub alarm_state: String,
    /// Color for the alarm block
    pub alarm_severity: Severity,
    /// Shield or warning glyph
    pub alarm_icon: Icon,
}

impl StatusView {
    /// Derive the status page view from its three entity readings.
    pub fn derive(
        openings: &EntityReading,
        door: &EntityReading,
        alarm: &EntityReading,
    ) -> Self {
        let count = opening_count(&openings.state);
        let (alarm_severity, alarm_icon) = alarm_style(&alarm.state);

        Self {
            openings: count,
            openings_severity: if count > 0 {
                Severity::Alert
            } else {
                Severity::Normal
            },
            last_opened: door.state.clone(),
            door_severity: door_severity(&door.state),
            alarm_state: alarm.state.clone(),
            alarm_severity,
            alarm_icon,
        }
    }
}

/// Derived state for the event page.
#[derive(Debug, Clone)]
pub struct EventView {
    /// Event title, already truncated to fit
    pub title: String,
    /// Whether the event is an all-day entry
    pub all_day: bool,
    /// Countdown to the event start (ignored when `all_day`)
    pub countdown: Countdown,
}

impl EventView {
    /// Derive the event page view from the calendar reading.
    pub fn derive(calendar: &EntityReading, now: NaiveDateTime) -> Self {
        let title = truncate_title(calendar.attr_str("message").unwrap_or("No Meetings"));
        let all_day = calendar.attr_bool("all_day").unwrap_or(false);
        let countdown = Countdown::until(calendar.attr_str("start_time").unwrap_or(""), now);

        Self {
            title,
            all_day,
            countdown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> NaiveDateTime {
        NaiveDateTime::parse_from_str("2026-01-04 11:30:00", START_TIME_FORMAT).unwrap()
    }

    fn start_in(delta: Duration) -> String {
        (now() + delta).format(START_TIME_FORMAT).to_string()
    }

    #[test]
    fn test_opening_count_coercion() {
        assert_eq!(opening_count("0"), 0);
        assert_eq!(opening_count("5"), 5);
        assert_eq!(opening_count("2.9"), 2);
        assert_eq!(opening_count(" 3 "), 3);
        assert_eq!(opening_count("Error"), 0);
        assert_eq!(opening_count("unavailable"), 0);
        assert_eq!(opening_count(""), 0);
        assert_eq!(opening_count("-1"), 0);
        assert_eq!(opening_count("NaN"), 0);
    }

    #[test]
    fn test_door_severity_minutes_are_normal() {
        assert_eq!(door_severity("27 minutes ago"), Severity::Normal);
        assert_eq!(door_severity("45 minutes ago"), Severity::Normal);
    }

    #[test]
    fn test_door_severity_hour_threshold() {
        assert_eq!(door_severity("1 hour ago"), Severity::Normal);
        assert_eq!(door_severity("2 hours ago"), Severity::Normal);
        assert_eq!(door_severity("3 hours ago"), Severity::Alert);
        assert_eq!(door_severity("12 hours ago"), Severity::Alert);
    }

    #[test]
    fn test_door_severity_days_always_alert() {
        assert_eq!(door_severity("1 day ago"), Severity::Alert);
        assert_eq!(door_severity("2 days ago"), Severity::Alert);
    }

    #[test]
    fn test_door_severity_unparsable_is_normal() {
        assert_eq!(door_severity("Error"), Severity::Normal);
        assert_eq!(door_severity("just now"), Severity::Normal);
        // "hour" present but no leading number: parse falls back to normal
        assert_eq!(door_severity("an hour ago"), Severity::Normal);
    }

    #[test]
    fn test_alarm_style() {
        assert_eq!(alarm_style("disarmed"), (Severity::Normal, Icon::Shield));
        assert_eq!(alarm_style("armed_home"), (Severity::Alert, Icon::Warning));
        assert_eq!(alarm_style("triggered"), (Severity::Alert, Icon::Warning));
        assert_eq!(alarm_style("Error"), (Severity::Alert, Icon::Warning));
    }

    #[test]
    fn test_truncate_title_exact_lengths() {
        let long = "a".repeat(25);
        let truncated = truncate_title(&long);
        assert_eq!(truncated.chars().count(), 22);
        assert_eq!(truncated, format!("{}..", "a".repeat(20)));

        let exact = "b".repeat(22);
        assert_eq!(truncate_title(&exact), exact);

        let short = "c".repeat(20);
        assert_eq!(truncate_title(&short), short);
    }

    #[test]
    fn test_countdown_ninety_minutes() {
        let c = Countdown::until(&start_in(Duration::minutes(90)), now());
        assert_eq!(c.label(), "In 1h 30m");
        assert_eq!(c.severity(), Severity::Normal);
    }

    #[test]
    fn test_countdown_imminent() {
        let c = Countdown::until(&start_in(Duration::minutes(10)), now());
        assert_eq!(c.label(), "In 10m");
        assert_eq!(c.severity(), Severity::Alert);
    }

    #[test]
    fn test_countdown_minutes_at_threshold() {
        let c = Countdown::until(&start_in(Duration::minutes(15)), now());
        assert_eq!(c.label(), "In 15m");
        assert_eq!(c.severity(), Severity::Normal);
    }

    #[test]
    fn test_countdown_days() {
        let c = Countdown::until(&start_in(Duration::days(2) + Duration::hours(3)), now());
        assert_eq!(c.label(), "In 2d 3h");
        assert_eq!(c.severity(), Severity::Normal);
    }

    #[test]
    fn test_countdown_started() {
        let c = Countdown::until(&start_in(-Duration::minutes(5)), now());
        assert_eq!(c, Countdown::Started);
        assert_eq!(c.label(), "Started");
        assert_eq!(c.severity(), Severity::Normal);
    }

    #[test]
    fn test_countdown_invalid() {
        let c = Countdown::until("not a timestamp", now());
        assert_eq!(c, Countdown::Invalid);
        assert_eq!(c.label(), "Time Error");
        assert_eq!(c.severity(), Severity::Normal);

        assert_eq!(Countdown::until("", now()), Countdown::Invalid);
    }

    #[test]
    fn test_status_view_all_normal() {
        let openings: EntityReading = serde_json::from_str(r#"{"state": "0"}"#).unwrap();
        let door: EntityReading =
            serde_json::from_str(r#"{"state": "45 minutes ago"}"#).unwrap();
        let alarm: EntityReading = serde_json::from_str(r#"{"state": "disarmed"}"#).unwrap();

        let view = StatusView::derive(&openings, &door, &alarm);
        assert_eq!(view.openings, 0);
        assert_eq!(view.openings_severity, Severity::Normal);
        assert_eq!(view.door_severity, Severity::Normal);
        assert_eq!(view.alarm_severity, Severity::Normal);
        assert_eq!(view.alarm_icon, Icon::Shield);
    }

    #[test]
    fn test_status_view_from_sentinels() {
        let sentinel = EntityReading::error();
        let view = StatusView::derive(&sentinel, &sentinel, &sentinel);

        assert_eq!(view.openings, 0);
        assert_eq!(view.last_opened, "Error");
        assert_eq!(view.door_severity, Severity::Normal);
        assert_eq!(view.alarm_severity, Severity::Alert);
        assert_eq!(view.alarm_icon, Icon::Warning);
    }

    #[test]
    fn test_event_view_defaults() {
        let view = EventView::derive(&EntityReading::error(), now());
        assert_eq!(view.title, "No Meetings");
        assert!(!view.all_day);
        assert_eq!(view.countdown, Countdown::Invalid);
    }

    #[test]
    fn test_event_view_all_day() {
        let json = r#"{"state": "on", "attributes": {
            "message": "Company offsite planning session",
            "all_day": true,
            "start_time": "2026-01-05 00:00:00"
        }}"#;
        let reading: EntityReading = serde_json::from_str(json).unwrap();
        let view = EventView::derive(&reading, now());

        assert!(view.all_day);
        assert_eq!(view.title.chars().count(), 22);
        assert!(view.title.ends_with(".."));
    }
}
