//! One-shot CSV load: fetch the swipe export and map its rows to records.
//!
//! Parsing details (header-to-field mapping, empty-line skipping) are the
//! csv crate's job; this module only shapes the result.

use thiserror::Error;

use super::record::SwipeRecord;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to fetch swipe data: {0}")]
    Http(#[from] reqwest::Error),
    #[error("failed to parse swipe data: {0}")]
    Csv(#[from] csv::Error),
}

/// Parses the CSV text. A header row is required; extra columns beyond
/// id/name/date/time are ignored.
pub fn parse_records(text: &str) -> Result<Vec<SwipeRecord>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

/// Fetches and parses the swipe export. This is the single asynchronous
/// suspension point in the system; everything downstream is synchronous.
pub async fn fetch_records(url: &str) -> Result<Vec<SwipeRecord>, LoadError> {
    let text = reqwest::get(url).await?.text().await?;
    parse_records(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_headers_to_fields() {
        let csv = "id,name,date,time\n42,Ada Lovelace,2024-01-15,08:30:00\n";
        let records = parse_records(csv).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "42");
        assert_eq!(records[0].name, "Ada Lovelace");
        assert_eq!(records[0].date, "2024-01-15");
        assert_eq!(records[0].time, "08:30:00");
    }

    #[test]
    fn skips_empty_lines() {
        let csv = "id,name,date,time\n1,A,2024-01-01,09:00\n\n2,B,2024-01-02,10:00\n";
        let records = parse_records(csv).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn column_order_follows_headers() {
        let csv = "date,time,id,name\n2024-01-01,09:00,7,Grace\n";
        let records = parse_records(csv).unwrap();
        assert_eq!(records[0].id, "7");
        assert_eq!(records[0].date, "2024-01-01");
    }

    #[test]
    fn truncated_rows_error() {
        let csv = "id,name,date,time\n1,A,2024-01-01\n";
        assert!(matches!(parse_records(csv), Err(LoadError::Csv(_))));
    }
}
