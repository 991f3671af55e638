pub mod day;
pub mod resolver;
pub mod table;

pub use day::WeeklyMenuDay;
pub use resolver::{
    format_short_date, is_today, menu_for_date, week_dates, week_range_label, WEEK_DAY_NAMES,
};
