//! Display formatting: the 12-hour clock and the fixed English name tables.

/// Month names indexed by calendar month number; slot 0 is a placeholder so
/// month 1 lands on "January".
pub const MONTH_NAMES: [&str; 13] = [
    "",
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

/// Sunday-first weekday names, matching the weekday bucket order.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Formats a 24-hour `HH:MM[:SS]` string as `H:MM AM/PM`.
///
/// Only the hour is parsed; the minutes segment is passed through untouched.
/// Hour 0 and 12 map to "12" (midnight and noon). There is no error path:
/// callers supply well-formed times from validated records, and anything
/// else produces a garbage label rather than a failure.
pub fn clock_12h(time_str: &str) -> String {
    let mut parts = time_str.split(':');
    let hour: u32 = parts.next().and_then(|h| h.parse().ok()).unwrap_or(0);
    let minutes = parts.next().unwrap_or("00");
    let period = if hour >= 12 { "PM" } else { "AM" };
    let display = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{display}:{minutes} {period}")
}
