use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const NAIVE_DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Splits an ISO-8601-like date string into `(year, zero-based month, day)`
/// as seen on the calendar of `tz`.
///
/// Timestamps carrying an offset are shifted into `tz` first; naive values
/// are taken at face value. Returns `None` for anything unparseable.
pub fn decompose_date<Tz: TimeZone>(input: &str, tz: &Tz) -> Option<(i32, u32, u32)> {
    let input = input.trim();

    // 1. Full timestamp with offset (2024-04-30T18:35:53.575Z)
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(calendar_fields(dt.with_timezone(tz).date_naive()));
    }

    // 2. Naive date-time, already local
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
            return Some(calendar_fields(dt.date()));
        }
    }

    // 3. Plain date
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .map(calendar_fields)
}

fn calendar_fields(date: NaiveDate) -> (i32, u32, u32) {
    (date.year(), date.month0(), date.day())
}

/// Number of days in the given month, i.e. "day zero" of the month after it.
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    let (next_year, next_month) = if month0 >= 11 {
        (year + 1, 1)
    } else {
        (year, month0 + 2)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(0)
}

pub fn ordinal_suffix(day: u32) -> &'static str {
    if day > 3 && day < 21 {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Three-letter name of a zero-based month. `MonthKey` fields are public, so a
/// hand-built key can carry a month past 11; that renders as `???`.
pub fn short_month_name(month0: u32) -> &'static str {
    MONTH_NAMES.get(month0 as usize).copied().unwrap_or("???")
}

/// Tooltip text for one tile, e.g. `22nd Apr 24`.
pub fn tile_label(year: i32, month0: u32, day: u32) -> String {
    let year = year.to_string();
    let short_year = &year[year.len().saturating_sub(2)..];
    format!(
        "{}{} {} {}",
        day,
        ordinal_suffix(day),
        short_month_name(month0),
        short_year
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_days_in_month_leap_years() {
        assert_eq!(days_in_month(2024, 1), 29);
        assert_eq!(days_in_month(2023, 1), 28);
        assert_eq!(days_in_month(2000, 1), 29);
        assert_eq!(days_in_month(1900, 1), 28);
        assert_eq!(days_in_month(2024, 0), 31);
        assert_eq!(days_in_month(2024, 3), 30);
        assert_eq!(days_in_month(2024, 11), 31);
    }

    #[test]
    fn test_ordinal_suffix() {
        let cases = [
            (1, "st"),
            (2, "nd"),
            (3, "rd"),
            (4, "th"),
            (11, "th"),
            (12, "th"),
            (13, "th"),
            (20, "th"),
            (21, "st"),
            (22, "nd"),
            (23, "rd"),
            (24, "th"),
            (30, "th"),
            (31, "st"),
        ];
        for (day, suffix) in cases {
            assert_eq!(ordinal_suffix(day), suffix, "day {}", day);
        }
    }

    #[test]
    fn test_short_month_name() {
        assert_eq!(short_month_name(0), "Jan");
        assert_eq!(short_month_name(11), "Dec");
        assert_eq!(short_month_name(12), "???");
    }

    #[test]
    fn test_tile_label() {
        assert_eq!(tile_label(2024, 0, 1), "1st Jan 24");
        assert_eq!(tile_label(2024, 3, 11), "11th Apr 24");
        assert_eq!(tile_label(2023, 11, 22), "22nd Dec 23");
        assert_eq!(tile_label(2009, 5, 13), "13th Jun 09");
    }

    #[test]
    fn test_decompose_plain_date() {
        assert_eq!(decompose_date("2024-04-10", &Utc), Some((2024, 3, 10)));
        assert_eq!(decompose_date(" 2024-12-31 ", &Utc), Some((2024, 11, 31)));
    }

    #[test]
    fn test_decompose_naive_datetime_keeps_calendar_fields() {
        let tz = FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(decompose_date("2024-04-30T23:30:00", &tz), Some((2024, 3, 30)));
        assert_eq!(decompose_date("2024-04-30 23:30:00.250", &tz), Some((2024, 3, 30)));
    }

    #[test]
    fn test_decompose_timestamp_shifts_into_zone() {
        let input = "2024-04-30T18:35:53.575Z";
        assert_eq!(decompose_date(input, &Utc), Some((2024, 3, 30)));

        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(decompose_date(input, &tokyo), Some((2024, 4, 1)));
    }

    #[test]
    fn test_decompose_rejects_garbage() {
        assert_eq!(decompose_date("", &Utc), None);
        assert_eq!(decompose_date("not a date", &Utc), None);
        assert_eq!(decompose_date("2024-02-30", &Utc), None);
    }
}
