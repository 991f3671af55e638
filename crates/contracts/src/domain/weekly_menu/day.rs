use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Planned menu for a single calendar day.
///
/// Read-only reference data; the order of entries within each meal slot is
/// display-significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyMenuDay {
    pub date: NaiveDate,
    pub breakfast: Vec<String>,
    pub lunch: Vec<String>,
    pub snacks: Vec<String>,
}

impl WeeklyMenuDay {
    /// Placeholder shown when no menu has been planned for `date`
    pub fn fallback(date: NaiveDate) -> Self {
        let placeholder = vec!["Menu not available".to_string()];
        Self {
            date,
            breakfast: placeholder.clone(),
            lunch: placeholder.clone(),
            snacks: placeholder,
        }
    }
}
