// src/services/week.rs

//! Week boundary calculation for the AJAX menu endpoint.

use chrono::{Datelike, Days, NaiveDate};

/// Date format expected by the menu endpoint.
const DATE_FORMAT: &str = "%Y.%m.%d";

/// Week boundary dates, formatted `YYYY.MM.DD`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekDates {
    /// Monday of the current week
    pub start_of_week: String,

    /// Sunday of the current week
    pub end_of_week: String,

    /// Sunday minus two days (the endpoint's "default" selection)
    pub default_date: String,

    /// The given day itself
    pub current_date: String,
}

impl WeekDates {
    /// Compute week boundaries for `today`.
    ///
    /// Pure function of its argument; callers inject the clock so runs
    /// are reproducible in tests. Day numbering is 0=Sunday..6=Saturday,
    /// and Sunday counts as the last day of the week it closes.
    pub fn compute(today: NaiveDate) -> Self {
        let dow = today.weekday().num_days_from_sunday() as u64;

        let (start, end) = if dow == 0 {
            (today - Days::new(6), today)
        } else {
            (today - Days::new(dow - 1), today + Days::new(7 - dow))
        };
        let default = end - Days::new(2);

        Self {
            start_of_week: start.format(DATE_FORMAT).to_string(),
            end_of_week: end.format(DATE_FORMAT).to_string(),
            default_date: default.format(DATE_FORMAT).to_string(),
            current_date: today.format(DATE_FORMAT).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn wednesday_spans_monday_to_sunday() {
        // 2024-05-15 is a Wednesday
        let week = WeekDates::compute(date(2024, 5, 15));
        assert_eq!(week.start_of_week, "2024.05.13");
        assert_eq!(week.end_of_week, "2024.05.19");
        assert_eq!(week.default_date, "2024.05.17");
        assert_eq!(week.current_date, "2024.05.15");
    }

    #[test]
    fn sunday_closes_its_own_week() {
        // 2024-05-19 is a Sunday
        let week = WeekDates::compute(date(2024, 5, 19));
        assert_eq!(week.start_of_week, "2024.05.13");
        assert_eq!(week.end_of_week, "2024.05.19");
        assert_eq!(week.default_date, "2024.05.17");
    }

    #[test]
    fn monday_starts_its_own_week() {
        // 2024-05-13 is a Monday
        let week = WeekDates::compute(date(2024, 5, 13));
        assert_eq!(week.start_of_week, "2024.05.13");
        assert_eq!(week.end_of_week, "2024.05.19");
    }

    #[test]
    fn crosses_month_boundary() {
        // 2024-01-31 is a Wednesday; the week ends in February
        let week = WeekDates::compute(date(2024, 1, 31));
        assert_eq!(week.start_of_week, "2024.01.29");
        assert_eq!(week.end_of_week, "2024.02.04");
        assert_eq!(week.default_date, "2024.02.02");
    }

    #[test]
    fn zero_pads_month_and_day() {
        let week = WeekDates::compute(date(2024, 3, 6));
        assert_eq!(week.current_date, "2024.03.06");
    }

    #[test]
    fn pure_function_of_today() {
        let today = date(2024, 5, 15);
        assert_eq!(WeekDates::compute(today), WeekDates::compute(today));
    }
}
