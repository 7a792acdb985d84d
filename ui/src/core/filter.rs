//! Filter evaluation over the loaded record set.

use super::record::SwipeRecord;

/// Combined state of the filter controls at a point in time.
///
/// `None` selects mean "all"; empty date bounds are inactive. Nothing
/// enforces `start_date <= end_date` — a reversed range matches no record
/// rather than being an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    /// Year as recorded in the date segment (string comparison).
    pub year: Option<String>,
    /// Calendar month 1-12 (integer comparison, so "03" and "3" agree).
    pub month: Option<u8>,
    /// Day of month 1-31.
    pub day: Option<u8>,
    /// Inclusive lower date bound, `YYYY-MM-DD`; empty = inactive.
    pub start_date: String,
    /// Inclusive upper date bound, `YYYY-MM-DD`; empty = inactive.
    pub end_date: String,
}

impl FilterSpec {
    /// The "clear" control: resets month, day and both date bounds while
    /// leaving the year selection untouched.
    pub fn clear_narrowing(&mut self) {
        self.month = None;
        self.day = None;
        self.start_date.clear();
        self.end_date.clear();
    }
}

/// Order-preserving linear scan; all applicable predicates are ANDed, so an
/// empty spec returns the input unchanged. Pure: the input is never mutated.
///
/// Date bounds compare lexicographically, which is chronological for
/// zero-padded `YYYY-MM-DD` strings.
pub fn apply(records: &[SwipeRecord], spec: &FilterSpec) -> Vec<SwipeRecord> {
    records
        .iter()
        .filter(|row| {
            if let Some(year) = spec.year.as_deref() {
                if row.year_str() != year {
                    return false;
                }
            }
            if let Some(month) = spec.month {
                if row.month() != Some(month) {
                    return false;
                }
            }
            if let Some(day) = spec.day {
                if row.day() != Some(day) {
                    return false;
                }
            }
            if !spec.start_date.is_empty() && row.date.as_str() < spec.start_date.as_str() {
                return false;
            }
            if !spec.end_date.is_empty() && row.date.as_str() > spec.end_date.as_str() {
                return false;
            }
            true
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, date: &str, time: &str) -> SwipeRecord {
        SwipeRecord {
            id: id.into(),
            name: "Test".into(),
            date: date.into(),
            time: time.into(),
        }
    }

    fn sample() -> Vec<SwipeRecord> {
        vec![
            record("1", "2024-01-15", "08:30:00"),
            record("2", "2024-01-15", "23:00:00"),
            record("3", "2024-02-01", "12:00:00"),
            record("4", "2023-12-31", "07:45:00"),
        ]
    }

    #[test]
    fn empty_spec_is_identity() {
        let records = sample();
        let out = apply(&records, &FilterSpec::default());
        assert_eq!(out, records);
    }

    #[test]
    fn absent_year_yields_empty() {
        let spec = FilterSpec {
            year: Some("1999".into()),
            ..Default::default()
        };
        assert!(apply(&sample(), &spec).is_empty());
    }

    #[test]
    fn month_comparison_is_numeric() {
        // "01" in the date segment matches month 1.
        let spec = FilterSpec {
            month: Some(1),
            ..Default::default()
        };
        let out = apply(&sample(), &spec);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|r| r.date.starts_with("2024-01")));
    }

    #[test]
    fn predicates_are_anded() {
        let spec = FilterSpec {
            year: Some("2024".into()),
            month: Some(1),
            day: Some(15),
            ..Default::default()
        };
        assert_eq!(apply(&sample(), &spec).len(), 2);
    }

    #[test]
    fn date_bounds_are_inclusive() {
        let spec = FilterSpec {
            start_date: "2024-01-15".into(),
            end_date: "2024-02-01".into(),
            ..Default::default()
        };
        assert_eq!(apply(&sample(), &spec).len(), 3);
    }

    #[test]
    fn reversed_range_yields_empty() {
        let spec = FilterSpec {
            start_date: "2024-02-01".into(),
            end_date: "2024-01-01".into(),
            ..Default::default()
        };
        assert!(apply(&sample(), &spec).is_empty());
    }

    #[test]
    fn order_is_preserved() {
        let spec = FilterSpec {
            year: Some("2024".into()),
            ..Default::default()
        };
        let out = apply(&sample(), &spec);
        let ids: Vec<&str> = out.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn clear_narrowing_keeps_year() {
        let mut spec = FilterSpec {
            year: Some("2024".into()),
            month: Some(1),
            day: Some(15),
            start_date: "2024-01-01".into(),
            end_date: "2024-01-31".into(),
        };
        spec.clear_narrowing();
        assert_eq!(spec.year.as_deref(), Some("2024"));
        assert_eq!(spec.month, None);
        assert_eq!(spec.day, None);
        assert!(spec.start_date.is_empty() && spec.end_date.is_empty());
    }
}
