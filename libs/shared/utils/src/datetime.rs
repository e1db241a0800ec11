use chrono::{Local, NaiveDate, NaiveTime};

/// Day/month/year, the format users type and every message displays.
pub const USER_DATE_FORMAT: &str = "%d/%m/%Y";
pub const USER_TIME_FORMAT: &str = "%H:%M";

/// Parse a user-typed date. Accepts `/` or `-` separators.
pub fn parse_user_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, USER_DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%d-%m-%Y"))
        .ok()
}

/// Parse a user-typed time. Accepts `07:30`, `7:30`, and the colloquial
/// `7h30`.
pub fn parse_user_time(input: &str) -> Option<NaiveTime> {
    let trimmed = input.trim();
    NaiveTime::parse_from_str(trimmed, USER_TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(&trimmed.to_lowercase().replace('h', ":"), USER_TIME_FORMAT))
        .ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(USER_DATE_FORMAT).to_string()
}

pub fn format_time(time: NaiveTime) -> String {
    time.format(USER_TIME_FORMAT).to_string()
}

/// The clinic's current date. The clinic and its patients share one
/// timezone, so the server's local clock is authoritative.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_slash_and_dash_dates() {
        let expected = NaiveDate::from_ymd_opt(2020, 10, 10).unwrap();
        assert_eq!(parse_user_date("10/10/2020"), Some(expected));
        assert_eq!(parse_user_date(" 10-10-2020 "), Some(expected));
        assert_eq!(parse_user_date("2020-10-10"), None);
        assert_eq!(parse_user_date("ngày mai"), None);
    }

    #[test]
    fn parses_times_with_colon_and_h() {
        let expected = NaiveTime::from_hms_opt(7, 30, 0).unwrap();
        assert_eq!(parse_user_time("07:30"), Some(expected));
        assert_eq!(parse_user_time("7:30"), Some(expected));
        assert_eq!(parse_user_time("7h30"), Some(expected));
        assert_eq!(parse_user_time("sáng sớm"), None);
    }

    #[test]
    fn round_trips_display_formats() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert_eq!(format_date(date), "05/01/2026");
        assert_eq!(parse_user_date(&format_date(date)), Some(date));

        let time = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
        assert_eq!(format_time(time), "08:00");
    }
}
