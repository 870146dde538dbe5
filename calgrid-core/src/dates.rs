//! Pure date engine for the month view.
//!
//! Everything here is deterministic for its inputs: no clock reads, no
//! locale. Months are 1-based (`1` = January), matching chrono.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// All calendar dates of a month, from the 1st to the last day, ascending.
///
/// Returns an empty vec for an invalid year/month combination.
pub fn days_in_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let last = last_day_of_month(first);

    first.iter_days().take_while(|d| *d <= last).collect()
}

/// The full week-aligned grid for a month: starts on `week_start` in the
/// week containing the 1st, ends on the last day of the week containing
/// the month's last day. Pads with days from the adjacent months, so the
/// length is always a multiple of 7.
pub fn month_grid(year: i32, month: u32, week_start: Weekday) -> Vec<NaiveDate> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let last = last_day_of_month(first);

    let lead = days_since_week_start(first, week_start);
    let trail = 6 - days_since_week_start(last, week_start);

    // Unrepresentable only at the edges of chrono's date range.
    let Some(start) = first.checked_sub_days(Days::new(lead)) else {
        return Vec::new();
    };
    let Some(end) = last.checked_add_days(Days::new(trail)) else {
        return Vec::new();
    };

    start.iter_days().take_while(|d| *d <= end).collect()
}

/// Canonical `YYYY-MM-DD` date-key used by the event store.
/// Stable, locale-independent, zero-padded.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a date-key back into a date. Inverse of [`date_key`].
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()
}

/// `YYYY-MM` month-key used by the export filter.
pub fn month_key(year: i32, month: u32) -> String {
    format!("{:04}-{:02}", year, month)
}

/// Parse a month-key into (year, month). Inverse of [`month_key`].
pub fn parse_month_key(key: &str) -> Option<(i32, u32)> {
    let (y, m) = key.split_once('-')?;
    if y.len() != 4 || m.len() != 2 {
        return None;
    }
    let year: i32 = y.parse().ok()?;
    let month: u32 = m.parse().ok()?;
    // Validate through chrono rather than re-implementing month rules.
    NaiveDate::from_ymd_opt(year, month, 1)?;
    Some((year, month))
}

/// Days elapsed since the most recent `week_start` (0..=6).
fn days_since_week_start(date: NaiveDate, week_start: Weekday) -> u64 {
    let d = date.weekday().num_days_from_monday() as i64;
    let w = week_start.num_days_from_monday() as i64;
    ((d - w).rem_euclid(7)) as u64
}

fn last_day_of_month(first: NaiveDate) -> NaiveDate {
    let (next_year, next_month) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };

    // The 1st of the following month always exists if `first` does.
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .unwrap_or(first)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_month_lengths() {
        assert_eq!(days_in_month(2024, 12).len(), 31);
        assert_eq!(days_in_month(2024, 2).len(), 29); // leap year
        assert_eq!(days_in_month(2025, 2).len(), 28);
        assert_eq!(days_in_month(2024, 13).len(), 0);
    }

    #[test]
    fn test_days_in_month_is_ascending_from_first() {
        let days = days_in_month(2024, 12);
        assert_eq!(days[0], NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
        assert!(days.windows(2).all(|w| w[1] == w[0].succ_opt().unwrap()));
    }

    #[test]
    fn test_month_grid_is_week_aligned() {
        for (year, month) in [(2024, 12), (2024, 2), (2025, 1), (1999, 6)] {
            let grid = month_grid(year, month, Weekday::Sun);
            assert_eq!(grid.len() % 7, 0, "{year}-{month}");
            assert_eq!(grid[0].weekday(), Weekday::Sun);
            assert_eq!(grid.last().unwrap().weekday(), Weekday::Sat);
        }
    }

    #[test]
    fn test_month_grid_contiguous_and_covers_month() {
        let grid = month_grid(2024, 12, Weekday::Sun);
        assert!(grid.windows(2).all(|w| w[1] == w[0].succ_opt().unwrap()));
        assert!(grid.contains(&NaiveDate::from_ymd_opt(2024, 12, 1).unwrap()));
        assert!(grid.contains(&NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()));
    }

    #[test]
    fn test_month_grid_pads_with_adjacent_months() {
        // December 2024 starts on a Sunday, so no leading pad; it ends on a
        // Tuesday, so the grid runs into January.
        let grid = month_grid(2024, 12, Weekday::Sun);
        assert_eq!(grid[0], NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
        assert_eq!(
            *grid.last().unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 4).unwrap()
        );
        assert_eq!(grid.len(), 35);
    }

    #[test]
    fn test_month_grid_honours_week_start() {
        let grid = month_grid(2024, 12, Weekday::Mon);
        assert_eq!(grid[0], NaiveDate::from_ymd_opt(2024, 11, 25).unwrap());
        assert_eq!(grid[0].weekday(), Weekday::Mon);
        assert_eq!(grid.last().unwrap().weekday(), Weekday::Sun);
    }

    #[test]
    fn test_month_grid_is_restartable() {
        assert_eq!(
            month_grid(2024, 12, Weekday::Sun),
            month_grid(2024, 12, Weekday::Sun)
        );
    }

    #[test]
    fn test_date_key_is_zero_padded_and_round_trips() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let key = date_key(date);
        assert_eq!(key, "2024-03-05");
        assert_eq!(parse_date_key(&key), Some(date));
    }

    #[test]
    fn test_date_key_injective_over_a_year() {
        let mut seen = std::collections::HashSet::new();
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        for date in start.iter_days().take(366) {
            assert!(seen.insert(date_key(date)), "duplicate key for {date}");
        }
    }

    #[test]
    fn test_month_key_round_trips() {
        assert_eq!(month_key(2024, 3), "2024-03");
        assert_eq!(parse_month_key("2024-03"), Some((2024, 3)));
        assert_eq!(parse_month_key("2024-13"), None);
        assert_eq!(parse_month_key("2024-3"), None);
        assert_eq!(parse_month_key("december"), None);
    }
}
