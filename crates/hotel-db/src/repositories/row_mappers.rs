//! Row mapping helpers for `SQLite` queries.

use chrono::{DateTime, NaiveDateTime, Utc};
use hotel_core::{Hotel, RepositoryError};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

/// Shared SELECT column list for hotel queries.
pub const HOTEL_SELECT_COLUMNS: &str = "id, name, address, created_at, updated_at";

/// Storage format for timestamp columns (always UTC).
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Format a timestamp for storage.
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.format(TIMESTAMP_FORMAT).to_string()
}

/// Helper to parse datetime strings that may have a "UTC" suffix.
///
/// Accepts rows written with or without fractional seconds, which covers
/// values produced by `datetime('now')` as well as [`format_timestamp`].
pub fn parse_datetime(datetime_str: &str) -> Option<DateTime<Utc>> {
    let trimmed = datetime_str.trim_end_matches(" UTC");
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f")
        .map(|dt| DateTime::<Utc>::from_naive_utc_and_offset(dt, Utc))
        .ok()
}

fn timestamp_column(row: &SqliteRow, column: &str) -> Result<DateTime<Utc>, RepositoryError> {
    let raw: String = row
        .try_get(column)
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

    parse_datetime(&raw).ok_or_else(|| {
        RepositoryError::Serialization(format!("Invalid {column} timestamp: {raw}"))
    })
}

/// Parse a database row into a Hotel.
pub fn row_to_hotel(row: &SqliteRow) -> Result<Hotel, RepositoryError> {
    Ok(Hotel {
        id: row
            .try_get("id")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        name: row
            .try_get("name")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        address: row
            .try_get("address")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        created_at: timestamp_column(row, "created_at")?,
        updated_at: timestamp_column(row, "updated_at")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_round_trip_keeps_microseconds() {
        let dt = Utc
            .with_ymd_and_hms(2024, 3, 9, 14, 5, 30)
            .unwrap()
            .checked_add_signed(chrono::Duration::microseconds(123_456))
            .unwrap();

        let stored = format_timestamp(&dt);
        assert_eq!(stored, "2024-03-09 14:05:30.123456");
        assert_eq!(parse_datetime(&stored), Some(dt));
    }

    #[test]
    fn test_parse_datetime_accepts_sqlite_defaults() {
        let parsed = parse_datetime("2024-03-09 14:05:30").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 30).unwrap());

        let parsed = parse_datetime("2024-03-09 14:05:30 UTC").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 30).unwrap());
    }

    #[test]
    fn test_parse_datetime_rejects_garbage() {
        assert!(parse_datetime("yesterday").is_none());
    }
}
