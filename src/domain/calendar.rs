use chrono::{Datelike, Months, NaiveDate};

pub const WEEKDAY_LABELS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// One month of day numbers laid out Monday-first, six rows deep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub cells: [[Option<u32>; 7]; 6],
}

impl MonthGrid {
    pub fn containing(date: NaiveDate) -> Self {
        let first = date.with_day(1).unwrap_or(date);
        let offset = first.weekday().num_days_from_monday() as usize;
        let days = days_in_month(first.year(), first.month());

        let mut cells = [[None; 7]; 6];
        for day in 1..=days {
            let pos = offset + day as usize - 1;
            cells[pos / 7][pos % 7] = Some(day);
        }

        Self {
            year: first.year(),
            month: first.month(),
            cells,
        }
    }

    pub fn month_name(&self) -> &'static str {
        [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ][(self.month as usize).saturating_sub(1) % 12]
    }
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    match (
        NaiveDate::from_ymd_opt(year, month, 1),
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
    ) {
        (Some(first), Some(next)) => (next - first).num_days() as u32,
        _ => 30,
    }
}

pub fn step_days(date: NaiveDate, delta: i64) -> NaiveDate {
    date.checked_add_signed(chrono::Duration::days(delta))
        .unwrap_or(date)
}

/// Month stepping clamps the day to the target month's length, so the cursor
/// never lands on an invalid date (Jan 31 -> Feb 28).
pub fn step_months(date: NaiveDate, delta: i32) -> NaiveDate {
    let months = Months::new(delta.unsigned_abs());
    let stepped = if delta >= 0 {
        date.checked_add_months(months)
    } else {
        date.checked_sub_months(months)
    };
    stepped.unwrap_or(date)
}
