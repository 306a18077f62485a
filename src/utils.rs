// src/utils.rs

use chrono::Timelike;

/// Formats a clock time as "3:07 PM": 12-hour, zero-padded minutes.
/// Hour 0 displays as 12.
pub fn format_clock<T: Timelike>(time: &T) -> String {
    let hours = time.hour();
    let suffix = if hours >= 12 { "PM" } else { "AM" };
    let hours = match hours % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", hours, time.minute(), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_midnight_displays_as_twelve() {
        assert_eq!(format_clock(&at(0, 5)), "12:05 AM");
    }

    #[test]
    fn test_afternoon_wraps_to_twelve_hour() {
        assert_eq!(format_clock(&at(13, 7)), "1:07 PM");
        assert_eq!(format_clock(&at(23, 59)), "11:59 PM");
    }

    #[test]
    fn test_noon_is_pm() {
        assert_eq!(format_clock(&at(12, 0)), "12:00 PM");
    }

    #[test]
    fn test_minutes_zero_padded() {
        assert_eq!(format_clock(&at(3, 7)), "3:07 PM");
        assert_eq!(format_clock(&at(9, 30)), "9:30 AM");
    }
}
