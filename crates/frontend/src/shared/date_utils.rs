/// Utilities for date formatting
///
/// Provides consistent order date formatting across the dashboard
use contracts::domain::a001_platform_order::aggregate::parse_order_date;

/// Format an order date for table cells
/// Example: "2025-01-20" or "2025-01-20T14:02:26Z" -> "20 Jan 2025"
pub fn format_date(date_str: &str) -> String {
    match parse_order_date(date_str) {
        Some(date) => date.format("%d %b %Y").to_string(),
        None => date_str.to_string(),
    }
}

/// Format an order date for the details view
/// Example: "2025-01-05" -> "5 January 2025"
pub fn format_date_long(date_str: &str) -> String {
    match parse_order_date(date_str) {
        Some(date) => date.format("%-d %B %Y").to_string(),
        None => date_str.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-01-20"), "20 Jan 2025");
        assert_eq!(format_date("2025-01-05T14:02:26.123Z"), "05 Jan 2025");
    }

    #[test]
    fn test_format_date_long() {
        assert_eq!(format_date_long("2025-01-05"), "5 January 2025");
        assert_eq!(format_date_long("2024-12-31T23:59:59Z"), "31 December 2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_date_long(""), "");
    }
}
