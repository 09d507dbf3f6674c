use chrono::{NaiveDateTime, Weekday};
use tracing::debug;

// ── Timestamp parsing ─────────────────────────────────────────────────────────

/// Formats accepted for the `Start Time` column, tried in order.
const START_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a trip timestamp such as `"2017-01-01 09:07:57"`.
///
/// The trip files carry local wall-clock times without an offset, so the
/// result is a [`NaiveDateTime`]. Returns `None` for empty or unrecognised
/// strings.
pub fn parse_start_time(s: &str) -> Option<NaiveDateTime> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }

    for fmt in START_TIME_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(ts);
        }
    }

    debug!("could not parse start time \"{}\"", trimmed);
    None
}

// ── Names ─────────────────────────────────────────────────────────────────────

const WEEKDAYS: [(Weekday, &str); 7] = [
    (Weekday::Mon, "Monday"),
    (Weekday::Tue, "Tuesday"),
    (Weekday::Wed, "Wednesday"),
    (Weekday::Thu, "Thursday"),
    (Weekday::Fri, "Friday"),
    (Weekday::Sat, "Saturday"),
    (Weekday::Sun, "Sunday"),
];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Full English name of `day`, e.g. `"Wednesday"`.
pub fn weekday_name(day: Weekday) -> &'static str {
    WEEKDAYS[day.num_days_from_monday() as usize].1
}

/// Case-insensitive lookup of a full weekday name.
pub fn parse_weekday(name: &str) -> Option<Weekday> {
    let wanted = name.trim();
    WEEKDAYS
        .iter()
        .find(|(_, n)| n.eq_ignore_ascii_case(wanted))
        .map(|(d, _)| *d)
}

/// Full English name of a 1-based month number. `None` outside `1..=12`.
pub fn month_name(number: u32) -> Option<&'static str> {
    if (1..=12).contains(&number) {
        Some(MONTH_NAMES[(number - 1) as usize])
    } else {
        None
    }
}
