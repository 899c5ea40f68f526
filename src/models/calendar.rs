//! Working-day calendar model.
//!
//! Scaling constants used to project a daily headcount onto longer
//! horizons. The three values are independent user-supplied assumptions,
//! not derived from each other (a 5-day week does not imply a 22-day
//! month or a 260-day year).

use serde::{Deserialize, Serialize};

/// Working days per week, month, and year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkCalendar {
    /// Working days per week.
    pub days_per_week: u32,
    /// Working days per month.
    pub days_per_month: u32,
    /// Working days per year.
    pub days_per_year: u32,
}

impl WorkCalendar {
    /// Creates a new calendar.
    pub fn new(days_per_week: u32, days_per_month: u32, days_per_year: u32) -> Self {
        Self {
            days_per_week,
            days_per_month,
            days_per_year,
        }
    }
}

impl Default for WorkCalendar {
    /// 5-day weeks, 22-day months, 260-day years.
    fn default() -> Self {
        Self {
            days_per_week: 5,
            days_per_month: 22,
            days_per_year: 260,
        }
    }
}
