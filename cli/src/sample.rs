use chrono::{Datelike, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tilechart_core::{Status, StatusRecord};

/// One record per day of `year` with a random status. The generator is
/// seeded from the year, so the same year always produces the same data.
pub fn sample_records(year: i32) -> Vec<StatusRecord> {
    let Some(start) = NaiveDate::from_ymd_opt(year, 1, 1) else {
        return Vec::new();
    };
    let mut rng = StdRng::seed_from_u64(year as u64);

    start
        .iter_days()
        .take_while(|date| date.year() == year)
        .map(|date| {
            let status = Status::ALL.choose(&mut rng).copied();
            StatusRecord::new(date.format("%Y-%m-%d").to_string(), status)
        })
        .collect()
}
