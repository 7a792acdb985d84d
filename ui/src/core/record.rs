//! The swipe record: one timestamped access event from the CSV export.

use serde::Deserialize;

/// One parsed CSV row. Loaded once at startup and never mutated; the full
/// record set is the single source of truth for all filtering.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SwipeRecord {
    pub id: String,
    pub name: String,
    /// `YYYY-MM-DD`, zero-padded.
    pub date: String,
    /// `HH:MM:SS` or `HH:MM`, 24-hour.
    pub time: String,
}

impl SwipeRecord {
    /// Year segment of the date, as recorded (e.g. "2024").
    pub fn year_str(&self) -> &str {
        self.date.split('-').next().unwrap_or("")
    }

    /// Month 1-12; `None` when the segment is missing or unparseable.
    pub fn month(&self) -> Option<u8> {
        self.date.split('-').nth(1)?.parse().ok()
    }

    /// Day of month 1-31; `None` when the segment is missing or unparseable.
    pub fn day(&self) -> Option<u8> {
        self.date.split('-').nth(2)?.parse().ok()
    }

    /// Hour 0-23 from the time string.
    pub fn hour(&self) -> Option<u8> {
        self.time.split(':').next()?.parse().ok()
    }
}
