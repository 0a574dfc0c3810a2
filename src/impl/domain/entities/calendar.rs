use chrono::{Datelike, NaiveDate};

/// A calendar month within a specific year. `month` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

/// Position of a billing month relative to an explicit "as of" date.
///
/// The as-of date is always injected by the caller; nothing in the crate
/// reads the wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthCategory {
    Past,
    Current,
    Future,
}

// --

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Last day of December of this year-month's year.
    pub fn year_end(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, 12, 31).expect("dec 31 exists for every year")
    }

    pub fn category(&self, as_of: NaiveDate) -> MonthCategory {
        let now = YearMonth::of(as_of);
        match self.cmp(&now) {
            std::cmp::Ordering::Less => MonthCategory::Past,
            std::cmp::Ordering::Equal => MonthCategory::Current,
            std::cmp::Ordering::Greater => MonthCategory::Future,
        }
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Months are 1-based everywhere in the crate.
pub fn checked_month(month: u32) -> Result<u32, crate::errors::LedgerError> {
    if (1..=12).contains(&month) {
        Ok(month)
    } else {
        Err(crate::errors::LedgerError::MonthOutOfRange { month })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn same_year_and_month_is_current() {
        assert_eq!(
            YearMonth::new(2026, 8).category(d(2026, 8, 6)),
            MonthCategory::Current
        );
    }

    #[test]
    fn earlier_month_is_past_later_is_future() {
        let as_of = d(2026, 8, 6);
        assert_eq!(YearMonth::new(2026, 7).category(as_of), MonthCategory::Past);
        assert_eq!(
            YearMonth::new(2025, 12).category(as_of),
            MonthCategory::Past
        );
        assert_eq!(
            YearMonth::new(2026, 9).category(as_of),
            MonthCategory::Future
        );
        assert_eq!(
            YearMonth::new(2027, 1).category(as_of),
            MonthCategory::Future
        );
    }

    #[test]
    fn ordering_is_year_then_month() {
        assert!(YearMonth::new(2025, 12) < YearMonth::new(2026, 1));
        assert!(YearMonth::new(2026, 1) < YearMonth::new(2026, 2));
    }
}
