use super::day::WeeklyMenuDay;
use super::table::WEEKLY_MENU_TABLE;
use chrono::{Datelike, Duration, NaiveDate};

/// Weekday headings for the planner grid, Monday first
pub const WEEK_DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// The seven dates (Monday..Sunday) of the week `offset_weeks` away from the
/// week containing `today`.
///
/// The Monday is found by subtracting today's Sunday-based weekday index and
/// adding one day, so a Sunday "today" resolves to the following day.
pub fn week_dates(today: NaiveDate, offset_weeks: i64) -> [NaiveDate; 7] {
    let weekday_index = today.weekday().num_days_from_sunday() as i64;
    let monday = today + Duration::days(1 - weekday_index + offset_weeks * 7);

    std::array::from_fn(|i| monday + Duration::days(i as i64))
}

/// Planned menu for `date`, or the fallback record when none exists
pub fn menu_for_date(date: NaiveDate) -> WeeklyMenuDay {
    let key = date.format("%Y-%m-%d").to_string();
    WEEKLY_MENU_TABLE
        .get(&key)
        .cloned()
        .unwrap_or_else(|| WeeklyMenuDay::fallback(date))
}

/// Whether `date` falls on the same local calendar day as `today`
pub fn is_today(date: NaiveDate, today: NaiveDate) -> bool {
    date == today
}

/// Short month + day label, e.g. "Jan 15"
pub fn format_short_date(date: NaiveDate) -> String {
    format!("{} {}", date.format("%b"), date.day())
}

/// Range label for a resolved week, e.g. "Jan 15 - Jan 21"
pub fn week_range_label(dates: &[NaiveDate; 7]) -> String {
    format!(
        "{} - {}",
        format_short_date(dates[0]),
        format_short_date(dates[6])
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn current_week_starts_on_monday_for_midweek_days() {
        // 2024-01-17 is a Wednesday
        let dates = week_dates(date(2024, 1, 17), 0);
        assert_eq!(dates[0], date(2024, 1, 15));
        assert_eq!(dates[0].weekday(), Weekday::Mon);
        assert_eq!(dates[6], date(2024, 1, 21));
    }

    #[test]
    fn monday_resolves_to_itself() {
        let monday = date(2024, 1, 15);
        assert_eq!(week_dates(monday, 0)[0], monday);
    }

    #[test]
    fn sunday_resolves_to_the_following_day() {
        // Sunday has weekday index 0, so the formula lands on the next day
        let sunday = date(2024, 1, 21);
        assert_eq!(sunday.weekday(), Weekday::Sun);
        assert_eq!(week_dates(sunday, 0)[0], date(2024, 1, 22));
    }

    #[test]
    fn every_weekday_yields_a_monday_start() {
        for dom in 15..=21 {
            let dates = week_dates(date(2024, 1, dom), 0);
            assert_eq!(dates[0].weekday(), Weekday::Mon, "from 2024-01-{dom}");
        }
    }

    #[test]
    fn offset_shifts_the_monday_by_exactly_seven_days() {
        let today = date(2024, 1, 17);
        let base = week_dates(today, 0)[0];
        for offset in [-3_i64, -1, 1, 2, 10] {
            let shifted = week_dates(today, offset)[0];
            assert_eq!(shifted - base, Duration::days(offset * 7));
        }
    }

    #[test]
    fn week_dates_are_consecutive() {
        let dates = week_dates(date(2024, 3, 7), 0);
        for pair in dates.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }

    #[test]
    fn menu_for_planned_date_comes_from_the_table() {
        let menu = menu_for_date(date(2024, 1, 15));
        assert_eq!(menu.breakfast[0], "Poha with Vegetables");
        assert_eq!(menu.lunch.len(), 4);
        assert_eq!(menu.snacks, vec!["Samosa", "Tea"]);
    }

    #[test]
    fn menu_for_unplanned_date_is_the_fallback() {
        let menu = menu_for_date(date(2030, 6, 1));
        let placeholder = vec!["Menu not available".to_string()];
        assert_eq!(menu.breakfast, placeholder);
        assert_eq!(menu.lunch, placeholder);
        assert_eq!(menu.snacks, placeholder);
    }

    #[test]
    fn is_today_compares_calendar_days() {
        let today = date(2024, 1, 17);
        assert!(is_today(today, today));
        assert!(!is_today(date(2024, 1, 18), today));
    }

    #[test]
    fn week_range_label_formats_first_and_last_dates() {
        let dates = week_dates(date(2024, 1, 17), 0);
        assert_eq!(week_range_label(&dates), "Jan 15 - Jan 21");
    }

    #[test]
    fn week_range_label_crosses_month_boundaries() {
        // 2024-01-31 is a Wednesday; its week runs Jan 29 .. Feb 4
        let dates = week_dates(date(2024, 1, 31), 0);
        assert_eq!(week_range_label(&dates), "Jan 29 - Feb 4");
    }
}
