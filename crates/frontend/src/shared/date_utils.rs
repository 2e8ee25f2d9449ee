/// Utilities for document dates
///
/// Issue dates are calendar days in UTC, serialized as `YYYY-MM-DD`
use chrono::{NaiveDate, Utc};

/// Current UTC calendar date, used as the document issue date
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Format a date as DD/MM/YYYY for display
/// Example: 2024-03-15 -> "15/03/2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(format_date(date), "15/03/2024");
    }

    #[test]
    fn test_today_serializes_as_iso_date() {
        let json = serde_json::to_value(today()).unwrap();
        let text = json.as_str().unwrap();
        assert_eq!(text.len(), 10);
        assert!(NaiveDate::parse_from_str(text, "%Y-%m-%d").is_ok());
    }
}
