use crate::errors::TrackerError;
use chrono::{Datelike, Duration, NaiveDate, Weekday};

pub const SCOPE_YEAR: i32 = 2025;
pub const SCOPE_MONTH: u32 = 2;
pub const DAYS_IN_SCOPE: u32 = 28;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayClass {
    pub is_weekend: bool,
    pub is_future: bool,
    pub is_past: bool,
    pub is_today: bool,
}

pub fn classify(date: NaiveDate, today: NaiveDate) -> DayClass {
    let is_future = date > today;
    let is_past = date < today;
    DayClass {
        is_weekend: is_weekend(date),
        is_future,
        is_past,
        is_today: !is_future && !is_past,
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn first_day() -> NaiveDate {
    // February 1st of a fixed year always exists.
    NaiveDate::from_ymd_opt(SCOPE_YEAR, SCOPE_MONTH, 1).unwrap_or(NaiveDate::MIN)
}

pub fn last_day() -> NaiveDate {
    first_day() + Duration::days(i64::from(DAYS_IN_SCOPE) - 1)
}

/// Every in-scope date, ascending.
pub fn scope_dates() -> impl Iterator<Item = NaiveDate> {
    let start = first_day();
    (0..i64::from(DAYS_IN_SCOPE)).map(move |offset| start + Duration::days(offset))
}

pub fn in_scope(date: NaiveDate) -> bool {
    date >= first_day() && date <= last_day()
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_date_key(key: &str) -> Result<NaiveDate, TrackerError> {
    NaiveDate::parse_from_str(key.trim(), "%Y-%m-%d")
        .map_err(|err| TrackerError::InvalidDate(format!("{key}: {err}")))
}

pub fn weekday_label(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feb(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, day).unwrap()
    }

    #[test]
    fn scope_covers_february_2025() {
        let dates: Vec<_> = scope_dates().collect();
        assert_eq!(dates.len(), 28);
        assert_eq!(dates[0], feb(1));
        assert_eq!(dates[27], feb(28));
        assert!(dates.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(!in_scope(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()));
        assert!(!in_scope(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()));
    }

    #[test]
    fn classify_relative_to_today() {
        let today = feb(10);

        let past = classify(feb(9), today);
        assert!(past.is_past && !past.is_future && !past.is_today);

        let current = classify(today, today);
        assert!(current.is_today && !current.is_past && !current.is_future);

        let future = classify(feb(11), today);
        assert!(future.is_future && !future.is_past && !future.is_today);
    }

    #[test]
    fn weekends_in_february_2025() {
        // 2025-02-01 is a Saturday.
        assert!(classify(feb(1), feb(1)).is_weekend);
        assert!(is_weekend(feb(2)));
        assert!(!is_weekend(feb(3)));
        assert_eq!(weekday_label(feb(1)), "Sat");
        assert_eq!(weekday_label(feb(3)), "Mon");
        assert_eq!(scope_dates().filter(|date| is_weekend(*date)).count(), 8);
    }

    #[test]
    fn date_keys_round_trip() {
        assert_eq!(date_key(feb(7)), "2025-02-07");
        assert_eq!(parse_date_key("2025-02-07").unwrap(), feb(7));
        assert!(matches!(
            parse_date_key("07/02/2025"),
            Err(TrackerError::InvalidDate(_))
        ));
    }
}
