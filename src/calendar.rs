//! Calendar-day arithmetic for the scheduling passes.
//!
//! Every date computation in the passes, the cascader, and the float
//! classifier goes through [`Calendar`], so continuous and weekday-only
//! scheduling share one code path.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Which days count when shifting dates and measuring float.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Calendar {
    /// Every day is a working day.
    #[default]
    Continuous,
    /// Saturday and Sunday are skipped when counting days, and computed
    /// start dates roll forward off weekends.
    Weekdays,
}

impl Calendar {
    /// Whether `date` is a working day under this calendar.
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        match self {
            Calendar::Continuous => true,
            Calendar::Weekdays => {
                !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
            }
        }
    }

    /// The first working day at or after `date`.
    pub fn roll_forward(&self, date: NaiveDate) -> NaiveDate {
        let mut current = date;
        while !self.is_working_day(current) {
            current += Duration::days(1);
        }
        current
    }

    /// Move `date` by `days` counted working days (negative moves backward).
    ///
    /// Zero-day shifts return the date unchanged, weekend or not.
    pub fn shift(&self, date: NaiveDate, days: i64) -> NaiveDate {
        match self {
            Calendar::Continuous => date + Duration::days(days),
            Calendar::Weekdays => {
                let step = if days >= 0 { 1 } else { -1 };
                let mut remaining = days.abs();
                let mut current = date;
                while remaining > 0 {
                    current += Duration::days(step);
                    if self.is_working_day(current) {
                        remaining -= 1;
                    }
                }
                current
            }
        }
    }

    /// Signed count of working days from `from` to `to`.
    ///
    /// Inverse of [`shift`](Self::shift) when both endpoints are working
    /// days: `days_between(d, shift(d, n)) == n`.
    pub fn days_between(&self, from: NaiveDate, to: NaiveDate) -> i64 {
        match self {
            Calendar::Continuous => (to - from).num_days(),
            Calendar::Weekdays => {
                let (start, end, sign) = if from <= to {
                    (from, to, 1)
                } else {
                    (to, from, -1)
                };
                let mut count = 0;
                let mut current = start;
                while current < end {
                    current += Duration::days(1);
                    if self.is_working_day(current) {
                        count += 1;
                    }
                }
                count * sign
            }
        }
    }
}
