//! Staffing requirement derivation.
//!
//! Converts an allocated hour total into fractional headcounts from a
//! worker's effective daily hours and the working-day calendar.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Effective hours/person/day | shift hours × shifts × (1 − downtime) |
//! | People per day | total assigned hours / effective hours |
//! | People per week/month/year | people per day × calendar days |
//!
//! Headcounts are reals, never rounded; display precision is applied at
//! the reporting boundary only.

use crate::models::{ShiftPlan, WorkCalendar};

/// Derived staffing requirements.
///
/// All headcounts are fractional. When the shift plan yields zero
/// productive time (downtime 1.0), every headcount is `f64::INFINITY` —
/// an explicit sentinel, not an error.
#[derive(Debug, Clone)]
pub struct StaffingResult {
    /// Productive hours one person contributes per day.
    pub effective_hours_per_person_per_day: f64,
    /// People required per working day.
    pub people_per_day: f64,
    /// People required per week (people_per_day × days_per_week).
    pub people_per_week: f64,
    /// People required per month (people_per_day × days_per_month).
    pub people_per_month: f64,
    /// People required per year (people_per_day × days_per_year).
    pub people_per_year: f64,
}

impl StaffingResult {
    /// Derives staffing numbers from an allocated hour total.
    ///
    /// # Arguments
    /// * `total_assigned` - Total allocated worker-hours per day.
    /// * `shift` - The shift pattern of one worker.
    /// * `calendar` - Working-day scaling constants.
    pub fn calculate(total_assigned: f64, shift: &ShiftPlan, calendar: &WorkCalendar) -> Self {
        let effective = shift.effective_hours_per_person_per_day();
        let people_per_day = if effective > 0.0 {
            total_assigned / effective
        } else {
            f64::INFINITY
        };

        Self {
            effective_hours_per_person_per_day: effective,
            people_per_day,
            people_per_week: people_per_day * calendar.days_per_week as f64,
            people_per_month: people_per_day * calendar.days_per_month as f64,
            people_per_year: people_per_day * calendar.days_per_year as f64,
        }
    }

    /// Whether the shift plan yields any productive time at all.
    pub fn is_staffable(&self) -> bool {
        self.people_per_day.is_finite()
    }
}
