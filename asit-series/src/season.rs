//! Freeze-season calendar.
//!
//! Arctic sea-ice thickness is measured over the freeze season, which runs
//! from October through the following April. A "season year" labels the
//! whole season by the calendar year in which it started, so February 2023
//! belongs to season year 2022.

use chrono::Month;

/// The seven freeze-season months in chart order. This is the shared
/// x-axis domain for every layer of the thickness chart.
pub const SEASON_MONTHS: [&str; 7] = [
    "October",
    "November",
    "December",
    "January",
    "February",
    "March",
    "April",
];

/// Position of a month within the freeze season (October = 0, April = 6).
/// Returns `None` for months outside the season.
pub fn season_month_index(month_name: &str) -> Option<u32> {
    SEASON_MONTHS
        .iter()
        .position(|m| *m == month_name)
        .map(|i| i as u32)
}

/// Calendar month number (1-12) for an English month name.
pub fn calendar_month_number(month_name: &str) -> Option<u32> {
    month_name
        .parse::<Month>()
        .ok()
        .map(|m| m.number_from_month())
}

/// Season year for a calendar (year, month) pair.
///
/// October through December map to the same calendar year, January through
/// April to the previous one. May through September fall outside the freeze
/// season and map to `None`.
pub fn season_year_for(year: i32, month_number: u32) -> Option<i32> {
    match month_number {
        10..=12 => Some(year),
        1..=4 => Some(year - 1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_months_ordering() {
        assert_eq!(SEASON_MONTHS[0], "October");
        assert_eq!(SEASON_MONTHS[6], "April");
        assert_eq!(season_month_index("October"), Some(0));
        assert_eq!(season_month_index("January"), Some(3));
        assert_eq!(season_month_index("April"), Some(6));
    }

    #[test]
    fn test_out_of_season_months() {
        assert_eq!(season_month_index("July"), None);
        assert_eq!(season_month_index(""), None);
    }

    #[test]
    fn test_calendar_month_number() {
        assert_eq!(calendar_month_number("October"), Some(10));
        assert_eq!(calendar_month_number("February"), Some(2));
        assert_eq!(calendar_month_number("Smarch"), None);
    }

    #[test]
    fn test_season_year_for() {
        // Season 2022 runs Oct 2022 through Apr 2023
        assert_eq!(season_year_for(2022, 10), Some(2022));
        assert_eq!(season_year_for(2022, 12), Some(2022));
        assert_eq!(season_year_for(2023, 1), Some(2022));
        assert_eq!(season_year_for(2023, 4), Some(2022));
        assert_eq!(season_year_for(2023, 7), None);
    }
}
