//! Optimization request model.
//!
//! An [`OptimizeRequest`] is an immutable snapshot of every input the
//! optimizer needs, constructed fresh per optimization. The solver never
//! reads ambient state; whatever holds the values between interactions
//! (a form, a config file, a test) builds one of these and passes it in.

use serde::{Deserialize, Serialize};

use super::{ShiftPlan, TaskSet, WorkCalendar};

/// Input container for one optimization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizeRequest {
    /// Tasks to allocate hours to.
    pub tasks: TaskSet,
    /// Total worker-hours available per day.
    pub daily_capacity: f64,
    /// Multiplicative safety margin applied to each task's required hours
    /// (0.2 = 20% extra).
    pub buffer_fraction: f64,
    /// Daily shift pattern of one worker.
    pub shift: ShiftPlan,
    /// Working-day scaling constants.
    pub calendar: WorkCalendar,
}

impl OptimizeRequest {
    /// Creates a request with default parameters (30 worker-hours/day
    /// capacity, 20% buffer, default shift plan and calendar).
    pub fn new(tasks: TaskSet) -> Self {
        Self {
            tasks,
            daily_capacity: 30.0,
            buffer_fraction: 0.2,
            shift: ShiftPlan::default(),
            calendar: WorkCalendar::default(),
        }
    }

    /// Sets the daily capacity in worker-hours.
    pub fn with_daily_capacity(mut self, daily_capacity: f64) -> Self {
        self.daily_capacity = daily_capacity;
        self
    }

    /// Sets the buffer fraction.
    pub fn with_buffer_fraction(mut self, buffer_fraction: f64) -> Self {
        self.buffer_fraction = buffer_fraction;
        self
    }

    /// Sets the shift plan.
    pub fn with_shift(mut self, shift: ShiftPlan) -> Self {
        self.shift = shift;
        self
    }

    /// Sets the working-day calendar.
    pub fn with_calendar(mut self, calendar: WorkCalendar) -> Self {
        self.calendar = calendar;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let tasks = TaskSet::from_entries([("Packing", 10.0)]);
        let request = OptimizeRequest::new(tasks.clone())
            .with_daily_capacity(40.0)
            .with_buffer_fraction(0.1)
            .with_shift(ShiftPlan::new(12.0, 2, 0.0))
            .with_calendar(WorkCalendar::new(7, 30, 365));

        assert_eq!(request.tasks, tasks);
        assert_eq!(request.daily_capacity, 40.0);
        assert!((request.buffer_fraction - 0.1).abs() < 1e-10);
        assert_eq!(request.shift.shifts_per_day, 2);
        assert_eq!(request.calendar.days_per_year, 365);
    }

    #[test]
    fn test_request_defaults() {
        let request = OptimizeRequest::new(TaskSet::new());
        assert_eq!(request.daily_capacity, 30.0);
        assert!((request.buffer_fraction - 0.2).abs() < 1e-10);
        assert_eq!(request.shift, ShiftPlan::default());
        assert_eq!(request.calendar, WorkCalendar::default());
    }

    #[test]
    fn test_serde_roundtrip() {
        let request = OptimizeRequest::new(TaskSet::from_entries([("Packing", 10.0)]));
        let json = serde_json::to_string(&request).unwrap();
        let back: OptimizeRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }
}
