//! Date and time helpers.
//!
//! Due dates are stored as local naive datetime strings and rendered in a
//! relative, human-readable form ("today at 14:30", "tomorrow at 09:00").

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, Weekday};

/// Storage format for due/alarm datetimes.
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Storage format for plain dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Display format for times unless the config overrides it.
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";

/// Parse a stored datetime string.
pub fn parse_datetime(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, DATETIME_FORMAT)
}

/// Format a datetime in the storage format.
pub fn format_datetime(value: NaiveDateTime) -> String {
    value.format(DATETIME_FORMAT).to_string()
}

/// Calculate the next occurrence of a target weekday from a given date.
pub fn next_weekday(from: NaiveDate, target: Weekday) -> NaiveDate {
    let from_w = from.weekday().num_days_from_monday() as i64;
    let tgt_w = target.num_days_from_monday() as i64;
    let mut delta = (7 + tgt_w - from_w) % 7;
    if delta == 0 {
        delta = 7;
    }
    from + chrono::Duration::days(delta)
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// Relative day wording for a date, measured from today.
fn relative_day(date: NaiveDate, today: NaiveDate) -> String {
    let days_diff = (date - today).num_days();

    match days_diff {
        -1 => "yesterday".to_string(),
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        diff if diff > 1 && diff <= 7 => format!("next {}", weekday_name(date.weekday())),
        diff if (-7..-1).contains(&diff) => format!("last {}", weekday_name(date.weekday())),
        diff if diff > 7 && diff <= 30 => format!("in {diff} days"),
        diff if (-30..-7).contains(&diff) => format!("{} days ago", -diff),
        _ => {
            if date.year() == today.year() {
                date.format("%b %d").to_string()
            } else {
                date.format("%b %d, %Y").to_string()
            }
        }
    }
}

/// Render a stored datetime relative to today, e.g. "tomorrow at 09:00".
/// The time part uses the configured display format.
///
/// Strings that fail to parse are returned unchanged so a corrupt value still
/// shows up somewhere visible instead of disappearing.
pub fn format_relative(value: &str, time_format: &str) -> String {
    format_relative_from(value, Local::now().date_naive(), time_format)
}

/// Same as [`format_relative`] but against an explicit reference date, for
/// deterministic formatting in tests.
pub fn format_relative_from(value: &str, today: NaiveDate, time_format: &str) -> String {
    let Ok(parsed) = parse_datetime(value) else {
        return value.to_string();
    };

    let day = relative_day(parsed.date(), today);
    format!("{} at {}", day, parsed.format(time_format))
}
