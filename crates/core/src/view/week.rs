//! Sunday-anchored week arithmetic

use chrono::{Datelike, Days, NaiveDate};

use crate::{Error, Result};

pub const DAYS_PER_WEEK: usize = 7;

/// First day of the week `week_offset` weeks away from the one containing `today`
///
/// Weeks start on the most recent Sunday on or before `today`.
pub fn week_start(today: NaiveDate, week_offset: i64) -> Result<NaiveDate> {
    let out_of_range = || Error::DateOutOfRange(week_offset);

    let since_sunday = u64::from(today.weekday().num_days_from_sunday());
    let sunday = today
        .checked_sub_days(Days::new(since_sunday))
        .ok_or_else(out_of_range)?;

    let shift = week_offset.checked_mul(7).ok_or_else(out_of_range)?;
    let start = if shift >= 0 {
        sunday.checked_add_days(Days::new(shift.unsigned_abs()))
    } else {
        sunday.checked_sub_days(Days::new(shift.unsigned_abs()))
    };
    start.ok_or_else(out_of_range)
}

/// The seven consecutive dates of the selected week, Sunday first
pub fn week_dates(today: NaiveDate, week_offset: i64) -> Result<[NaiveDate; DAYS_PER_WEEK]> {
    let start = week_start(today, week_offset)?;
    let mut dates = [start; DAYS_PER_WEEK];
    for (i, date) in dates.iter_mut().enumerate().skip(1) {
        *date = start
            .checked_add_days(Days::new(i as u64))
            .ok_or(Error::DateOutOfRange(week_offset))?;
    }
    Ok(dates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_current_week_from_wednesday() {
        let wednesday = date("2024-06-12");
        assert_eq!(wednesday.weekday(), Weekday::Wed);

        let dates = week_dates(wednesday, 0).unwrap();
        assert_eq!(dates[0], date("2024-06-09"));
        assert_eq!(dates[0].weekday(), Weekday::Sun);
        assert_eq!(dates[6], date("2024-06-15"));
        for pair in dates.windows(2) {
            assert_eq!(pair[1] - pair[0], chrono::Duration::days(1));
        }
    }

    #[test]
    fn test_next_week_is_seven_days_later() {
        let wednesday = date("2024-06-12");
        let current = week_dates(wednesday, 0).unwrap();
        let next = week_dates(wednesday, 1).unwrap();

        for (a, b) in current.iter().zip(next.iter()) {
            assert_eq!(*b - *a, chrono::Duration::days(7));
        }
    }

    #[test]
    fn test_previous_weeks() {
        let wednesday = date("2024-06-12");
        assert_eq!(week_start(wednesday, -1).unwrap(), date("2024-06-02"));
        assert_eq!(week_start(wednesday, -52).unwrap(), date("2023-06-11"));
    }

    #[test]
    fn test_sunday_starts_its_own_week() {
        let sunday = date("2024-06-09");
        assert_eq!(week_start(sunday, 0).unwrap(), sunday);

        let saturday = date("2024-06-15");
        assert_eq!(week_start(saturday, 0).unwrap(), sunday);
    }

    #[test]
    fn test_week_crossing_year_boundary() {
        let dates = week_dates(date("2024-12-31"), 0).unwrap();
        assert_eq!(dates[0], date("2024-12-29"));
        assert_eq!(dates[6], date("2025-01-04"));
    }

    #[test]
    fn test_offset_out_of_range() {
        let today = date("2024-06-12");
        assert!(matches!(
            week_dates(today, i64::MAX),
            Err(Error::DateOutOfRange(i64::MAX))
        ));
        assert!(week_dates(today, -100_000_000).is_err());
    }
}
