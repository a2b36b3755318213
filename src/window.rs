//! Merging holidays and nearby weekends into one vacation window.

use crate::calendar::Calendar;
use crate::error::{Error, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use log::debug;
use serde::Serialize;
use std::fmt;

/// First and last day of a merged vacation, both inclusive
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct VacationWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl VacationWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> VacationWindow {
        debug_assert!(start <= end, "window starts after it ends");
        VacationWindow { start, end }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days in the window
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl fmt::Display for VacationWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ~ {}", format_day(self.start), format_day(self.end))
    }
}

/// `YYYY/M/D` without zero padding
pub fn format_day(day: NaiveDate) -> String {
    day.format("%Y/%-m/%-d").to_string()
}

/// Reject negative gaps coming from user input
pub fn validate_gap(gap: i64) -> Result<u32> {
    if gap < 0 {
        return Err(Error::NegativeGap(gap));
    }
    Ok(u32::try_from(gap).unwrap_or(u32::MAX))
}

fn add_days(day: NaiveDate, days: i64) -> Result<NaiveDate> {
    day.checked_add_signed(Duration::days(days))
        .ok_or(Error::DateOutOfRange)
}

/// Returns the nearest Sunday on or before `day`, and the difference in days.
pub fn sunday_before(day: NaiveDate) -> Result<(NaiveDate, u32)> {
    let diff = match day.weekday() {
        Weekday::Sun => 0,
        Weekday::Mon => 1,
        Weekday::Tue => 2,
        Weekday::Wed => 3,
        Weekday::Thu => 4,
        Weekday::Fri => 5,
        Weekday::Sat => 6,
    };
    Ok((add_days(day, -i64::from(diff))?, diff))
}

/// Include the weekend just before `anchor` when it is at most `allowed_gap`
/// days away from it.
pub fn compute_start(anchor: NaiveDate, allowed_gap: u32) -> Result<NaiveDate> {
    let (sunday, diff) = sunday_before(anchor)?;
    // diff 1 means the Sunday touches the anchor
    if u64::from(diff) <= u64::from(allowed_gap) + 1 {
        add_days(sunday, -1)
    } else {
        Ok(anchor)
    }
}

/// Sweep forward from `start`, stepping to the nearest vacation-ish day within
/// `allowed_gap + 1` days, until no such day exists or the next one lies past
/// `target_year`. A `start` in the previous year sweeps into `target_year`.
pub fn compute_end(
    start: NaiveDate,
    calendar: &Calendar,
    allowed_gap: u32,
    target_year: i32,
) -> NaiveDate {
    let mut cursor = start;
    'sweep: while cursor.year() <= target_year {
        for offset in 1..=i64::from(allowed_gap) + 1 {
            // past chrono's last date counts as the next year
            let Some(day) = cursor.checked_add_signed(Duration::days(offset)) else {
                break 'sweep;
            };
            if day.year() > target_year {
                break 'sweep;
            }
            debug!("--- checking {day}");
            if calendar.is_vacationish(day) {
                debug!("--- vacation-ish! {day}");
                cursor = day;
                continue 'sweep;
            }
        }
        // did not reach the next vacation-ish day
        break;
    }
    cursor
}

/// The greedy window: starts at `anchor` (or the weekend before it) and sweeps
/// forward through the calendar's year.
pub fn golden_week(calendar: &Calendar, anchor: &str, allowed_gap: u32) -> Result<VacationWindow> {
    let year = calendar.year();
    let anchor = calendar
        .instance(anchor)
        .ok_or_else(|| Error::AnchorNotFound {
            name: anchor.to_string(),
            year,
        })?;
    let start = compute_start(anchor.observed, allowed_gap)?;
    debug!("start is {start}");
    let end = compute_end(start, calendar, allowed_gap, year);
    debug!("end is {end}");
    Ok(VacationWindow::new(start, end))
}

/// The longest run of vacation-ish days in the calendar's year that contains
/// at least one holiday, where consecutive days are at most `allowed_gap + 1`
/// apart. The earliest run wins ties.
pub fn longest_window(calendar: &Calendar, allowed_gap: u32) -> Option<VacationWindow> {
    let year = calendar.year();
    let reach = i64::from(allowed_gap) + 1;
    let first = NaiveDate::from_ymd_opt(year, 1, 1)?;

    let mut best: Option<VacationWindow> = None;
    let mut keep = |run: Option<(NaiveDate, NaiveDate, bool)>| {
        if let Some((start, end, true)) = run {
            let window = VacationWindow::new(start, end);
            debug!("candidate {window}");
            if best.map_or(true, |best| window.len_days() > best.len_days()) {
                best = Some(window);
            }
        }
    };

    let mut run: Option<(NaiveDate, NaiveDate, bool)> = None;
    let days = first
        .iter_days()
        .take_while(|day| day.year() == year)
        .filter(|day| calendar.is_vacationish(*day));
    for day in days {
        let holiday = calendar.is_holiday(day);
        run = match run {
            Some((start, end, has_holiday)) if (day - end).num_days() <= reach => {
                Some((start, day, has_holiday || holiday))
            }
            finished => {
                keep(finished);
                Some((day, day, holiday))
            }
        };
    }
    keep(run);
    best
}
