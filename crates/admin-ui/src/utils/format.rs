//! Display formatting helpers

use chrono::{DateTime, Utc};

/// Short date for table cells, e.g. "Jan 3, 2023"
pub fn format_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let timestamp = Utc.with_ymd_and_hms(2023, 1, 3, 15, 30, 0).unwrap();
        assert_eq!(format_date(&timestamp), "Jan 3, 2023");

        let timestamp = Utc.with_ymd_and_hms(2024, 11, 21, 0, 0, 0).unwrap();
        assert_eq!(format_date(&timestamp), "Nov 21, 2024");
    }
}
