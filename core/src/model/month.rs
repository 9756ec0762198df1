use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

use crate::error::TilechartError;
use crate::time::days_in_month;

/// A calendar month. `month` is zero-based (0 = January, 11 = December).
///
/// Field order matters: the derived `Ord` compares year first, then month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (month < 12).then_some(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
        }
    }

    /// The month right after this one, rolling over into the next year.
    pub fn succ(self) -> Self {
        if self.month >= 11 {
            Self {
                year: self.year + 1,
                month: 0,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn days(self) -> u32 {
        days_in_month(self.year, self.month)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month + 1)
    }
}

/// Lookback window in months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Range {
    Three,
    Six,
    #[default]
    Twelve,
}

impl Range {
    pub fn months(self) -> u32 {
        match self {
            Range::Three => 3,
            Range::Six => 6,
            Range::Twelve => 12,
        }
    }
}

impl TryFrom<u32> for Range {
    type Error = TilechartError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(Range::Three),
            6 => Ok(Range::Six),
            12 => Ok(Range::Twelve),
            other => Err(TilechartError::InvalidRange(other.to_string())),
        }
    }
}

impl FromStr for Range {
    type Err = TilechartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let months: u32 = s
            .trim()
            .parse()
            .map_err(|_| TilechartError::InvalidRange(s.to_string()))?;
        Range::try_from(months)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.months())
    }
}
