use chrono::TimeZone;
use log::warn;
use std::collections::BTreeMap;

use crate::model::month::MonthKey;
use crate::model::status::{Status, StatusRecord};
use crate::time::decompose_date;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayEntry {
    pub day: u32,
    pub status: Option<Status>,
}

/// Records bucketed by month, in input order within each bucket.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthBuckets {
    buckets: BTreeMap<MonthKey, Vec<DayEntry>>,
    malformed: Vec<String>,
}

impl MonthBuckets {
    /// Entries for `key`; empty when no record fell into that month.
    pub fn get(&self, key: MonthKey) -> &[DayEntry] {
        self.buckets.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Raw date strings that could not be placed on the calendar.
    pub fn malformed(&self) -> &[String] {
        &self.malformed
    }
}

pub fn group_by_month_in<Tz: TimeZone>(records: &[StatusRecord], tz: &Tz) -> MonthBuckets {
    let mut grouped = MonthBuckets::default();

    for record in records {
        match decompose_date(&record.date, tz) {
            Some((year, month, day)) => {
                grouped
                    .buckets
                    .entry(MonthKey { year, month })
                    .or_default()
                    .push(DayEntry {
                        day,
                        status: record.status,
                    });
            }
            None => {
                warn!("Skipping record with unparseable date: {:?}", record.date);
                grouped.malformed.push(record.date.clone());
            }
        }
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(date: &str, status: Option<Status>) -> StatusRecord {
        StatusRecord::new(date, status)
    }

    #[test]
    fn test_groups_by_month_key() {
        let records = vec![
            record("2024-04-10", Some(Status::Late)),
            record("2024-05-01", Some(Status::Present)),
            record("2024-04-02", None),
        ];
        let grouped = group_by_month_in(&records, &Utc);

        assert_eq!(grouped.len(), 2);
        let april = grouped.get(MonthKey::new(2024, 3).unwrap());
        assert_eq!(
            april,
            &[
                DayEntry { day: 10, status: Some(Status::Late) },
                DayEntry { day: 2, status: None },
            ]
        );
        let may = grouped.get(MonthKey::new(2024, 4).unwrap());
        assert_eq!(may, &[DayEntry { day: 1, status: Some(Status::Present) }]);
    }

    #[test]
    fn test_duplicates_are_kept_in_order() {
        let records = vec![
            record("2024-04-10", Some(Status::Late)),
            record("2024-04-10", Some(Status::Present)),
        ];
        let grouped = group_by_month_in(&records, &Utc);
        let april = grouped.get(MonthKey::new(2024, 3).unwrap());
        assert_eq!(april.len(), 2);
        assert_eq!(april[0].status, Some(Status::Late));
        assert_eq!(april[1].status, Some(Status::Present));
    }

    #[test]
    fn test_malformed_dates_are_set_aside() {
        let records = vec![
            record("garbage", Some(Status::Absent)),
            record("2024-04-10", Some(Status::Late)),
            record("2024-13-01", Some(Status::Present)),
        ];
        let grouped = group_by_month_in(&records, &Utc);
        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped.malformed(), &["garbage".to_string(), "2024-13-01".to_string()]);
    }

    #[test]
    fn test_empty_input() {
        let grouped = group_by_month_in(&[], &Utc);
        assert!(grouped.is_empty());
        assert!(grouped.get(MonthKey::new(2024, 0).unwrap()).is_empty());
    }
}
