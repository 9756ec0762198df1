use chrono::NaiveDate;

use crate::model::month::{MonthKey, Range};

/// Months to render, oldest first, ending with the month containing `today`.
///
/// The walk is inclusive at both ends, so `range` months of lookback yield
/// `range + 1` keys.
pub fn month_range(today: NaiveDate, range: Range) -> Vec<MonthKey> {
    let end = MonthKey::from_date(today);
    let shifted = end.month as i32 - range.months() as i32;
    let start = if shifted >= 0 {
        MonthKey {
            year: end.year,
            month: shifted as u32,
        }
    } else {
        MonthKey {
            year: end.year - 1,
            month: (shifted + 12) as u32,
        }
    };

    let mut keys = Vec::with_capacity(range.months() as usize + 1);
    let mut current = start;
    while current <= end {
        keys.push(current);
        current = current.succ();
    }
    keys
}
