/// Utilities for date and time formatting

use chrono::NaiveDateTime;

/// Format the dashboard clock, US style
/// Example: 2024-03-15 14:02 -> "Friday, March 15, 2024 at 02:02 PM"
pub fn format_clock(now: NaiveDateTime) -> String {
    now.format("%A, %B %-d, %Y at %I:%M %p").to_string()
}

/// Current local time, as shown in the dashboard header
pub fn local_clock() -> String {
    format_clock(chrono::Local::now().naive_local())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_clock() {
        let dt = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(14, 2, 26)
            .unwrap();
        assert_eq!(format_clock(dt), "Friday, March 15, 2024 at 02:02 PM");
    }

    #[test]
    fn test_format_clock_morning() {
        let dt = NaiveDate::from_ymd_opt(2025, 1, 6)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap();
        assert_eq!(format_clock(dt), "Monday, January 6, 2025 at 09:05 AM");
    }
}
