//! Pure bucket aggregation and summary scalars over a filtered record set.
//!
//! Everything here is recomputed from scratch on each render; there is no
//! incremental state. Malformed date or time segments are skipped rather
//! than reported, the export is trusted to be pre-validated.

use time::{Date, Month};

use super::filter::FilterSpec;
use super::format;
use super::record::SwipeRecord;

/// Summary card values. The times are already formatted for display and
/// `None` when the filtered set is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub earliest: Option<String>,
    pub latest: Option<String>,
    pub year_total: usize,
    pub month_total: usize,
}

/// Builds the summary scalars.
///
/// `year_total` is counted from the UNFILTERED set on purpose: it shows the
/// selected year's grand total independent of month/day/date-range
/// narrowing. `month_total` counts from the filtered set. Do not make these
/// symmetric.
pub fn summarize(all: &[SwipeRecord], filtered: &[SwipeRecord], spec: &FilterSpec) -> Summary {
    let (earliest, latest) = if filtered.is_empty() {
        (None, None)
    } else {
        // Zero-padded HH:MM[:SS] sorts chronologically as text.
        let mut times: Vec<&str> = filtered.iter().map(|r| r.time.as_str()).collect();
        times.sort_unstable();
        (
            Some(format::clock_12h(times[0])),
            Some(format::clock_12h(times[times.len() - 1])),
        )
    };

    let year_total = match spec.year.as_deref() {
        Some(year) => all.iter().filter(|r| r.year_str() == year).count(),
        None => all.len(),
    };

    let month_total = match spec.month {
        Some(month) => filtered.iter().filter(|r| r.month() == Some(month)).count(),
        None => filtered.len(),
    };

    Summary {
        earliest,
        latest,
        year_total,
        month_total,
    }
}

/// Hour-of-day counts. Sparse: only hours observed in the filtered set are
/// present, in ascending numeric order.
pub fn hour_buckets(filtered: &[SwipeRecord]) -> Vec<(u8, u32)> {
    let mut counts = [0u32; 24];
    for row in filtered {
        if let Some(slot) = row.hour().and_then(|h| counts.get_mut(h as usize)) {
            *slot += 1;
        }
    }
    counts
        .iter()
        .enumerate()
        .filter(|(_, &count)| count > 0)
        .map(|(hour, &count)| (hour as u8, count))
        .collect()
}

/// Day-of-month counts, always dense over 1..=31 regardless of month length
/// (slot 0 is day 1). Days that never occur stay at zero.
pub fn day_of_month_buckets(filtered: &[SwipeRecord]) -> [u32; 31] {
    let mut counts = [0u32; 31];
    for row in filtered {
        if let Some(day) = row.day() {
            if (1..=31).contains(&day) {
                counts[day as usize - 1] += 1;
            }
        }
    }
    counts
}

/// Day-of-week counts, Sunday-first, always 7 slots. Dates that do not
/// resolve to a real calendar day are skipped.
pub fn weekday_buckets(filtered: &[SwipeRecord]) -> [u32; 7] {
    let mut counts = [0u32; 7];
    for row in filtered {
        if let Some(index) = weekday_index(&row.date) {
            counts[index] += 1;
        }
    }
    counts
}

fn weekday_index(date: &str) -> Option<usize> {
    let mut parts = date.split('-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u8 = parts.next()?.parse().ok()?;
    let day: u8 = parts.next()?.parse().ok()?;
    let date = Date::from_calendar_date(year, Month::try_from(month).ok()?, day).ok()?;
    Some(date.weekday().number_days_from_sunday() as usize)
}
