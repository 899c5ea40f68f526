//! Text rendering of optimization results.
//!
//! The output boundary: per-task allocated hours, the allocated total,
//! and the staffing block, each as a labeled line at 2 decimal places.
//! Display precision lives here only; nothing inside the computation
//! rounds. Infinite headcounts render as `inf`.

use crate::solver::{OptimizeError, OptimizeOutput};
use crate::validation::ValidationErrorKind;

/// Renders a full result report.
///
/// # Example
///
/// ```
/// use u_staffing::models::{OptimizeRequest, TaskSet};
/// use u_staffing::report::render_report;
/// use u_staffing::solver::optimize;
///
/// let tasks = TaskSet::from_entries([("Packing", 10.0), ("Shipping", 5.0)]);
/// let output = optimize(&OptimizeRequest::new(tasks)).unwrap();
/// let report = render_report(&output);
/// assert!(report.contains("Packing: 12.00 hours"));
/// assert!(report.contains("People Required Per Day: 2.81"));
/// ```
pub fn render_report(output: &OptimizeOutput) -> String {
    let mut out = String::new();

    out.push_str("Optimal Allocation of Hours per Day:\n");
    for allocation in &output.allocation.allocations {
        out.push_str(&format!(
            "{}: {:.2} hours\n",
            allocation.task, allocation.hours
        ));
    }
    out.push_str(&format!(
        "Total Hours Allocated (Day): {:.2}\n",
        output.allocation.total_assigned
    ));

    let staffing = &output.staffing;
    out.push_str("Staffing Requirements:\n");
    out.push_str(&format!(
        "Effective Working Hours/Person/Day: {:.2}\n",
        staffing.effective_hours_per_person_per_day
    ));
    out.push_str(&format!(
        "People Required Per Day: {:.2}\n",
        staffing.people_per_day
    ));
    out.push_str(&format!(
        "People Required Per Week (approx): {:.2}\n",
        staffing.people_per_week
    ));
    out.push_str(&format!(
        "People Required Per Month (approx): {:.2}\n",
        staffing.people_per_month
    ));
    out.push_str(&format!(
        "People Required Per Year (approx): {:.2}\n",
        staffing.people_per_year
    ));

    out
}

/// Renders a user-facing message for a failed optimization.
///
/// Empty input gets a prompt to add tasks; infeasibility (or a backend
/// fault) gets a single error line instead of any allocation table.
pub fn render_error(error: &OptimizeError) -> String {
    match error {
        OptimizeError::Validation(errors) => {
            if errors.iter().any(|e| e.kind == ValidationErrorKind::NoTasks) {
                "Please enter at least one task with required hours.".to_string()
            } else {
                errors
                    .iter()
                    .map(|e| e.message.as_str())
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
        OptimizeError::Infeasible | OptimizeError::Backend(_) => {
            "No optimal solution found. Try adjusting constraints.".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OptimizeRequest, ShiftPlan, TaskSet, WorkCalendar};
    use crate::solver::optimize;

    fn sample_output() -> OptimizeOutput {
        let tasks = TaskSet::from_entries([("Packing", 10.0), ("Shipping", 5.0)]);
        let request = OptimizeRequest::new(tasks)
            .with_daily_capacity(30.0)
            .with_buffer_fraction(0.2)
            .with_shift(ShiftPlan::new(8.0, 1, 0.2))
            .with_calendar(WorkCalendar::new(5, 22, 260));
        optimize(&request).unwrap()
    }

    #[test]
    fn test_report_lines() {
        let report = render_report(&sample_output());

        assert!(report.contains("Optimal Allocation of Hours per Day:"));
        assert!(report.contains("Packing: 12.00 hours"));
        assert!(report.contains("Shipping: 6.00 hours"));
        assert!(report.contains("Total Hours Allocated (Day): 18.00"));
        assert!(report.contains("Effective Working Hours/Person/Day: 6.40"));
        assert!(report.contains("People Required Per Day: 2.81"));
        assert!(report.contains("People Required Per Week (approx): 14.06"));
        assert!(report.contains("People Required Per Month (approx): 61.88"));
        assert!(report.contains("People Required Per Year (approx): 731.25"));
    }

    #[test]
    fn test_report_preserves_task_order() {
        let report = render_report(&sample_output());
        let packing = report.find("Packing").unwrap();
        let shipping = report.find("Shipping").unwrap();
        assert!(packing < shipping);
    }

    #[test]
    fn test_infinite_headcount_renders_inf() {
        let tasks = TaskSet::from_entries([("Packing", 10.0)]);
        let request = OptimizeRequest::new(tasks)
            .with_daily_capacity(30.0)
            .with_shift(ShiftPlan::new(8.0, 1, 1.0));
        let output = optimize(&request).unwrap();

        let report = render_report(&output);
        assert!(report.contains("Effective Working Hours/Person/Day: 0.00"));
        assert!(report.contains("People Required Per Day: inf"));
    }

    #[test]
    fn test_empty_input_message() {
        let request = OptimizeRequest::new(TaskSet::new());
        let err = optimize(&request).unwrap_err();
        assert_eq!(
            render_error(&err),
            "Please enter at least one task with required hours."
        );
    }

    #[test]
    fn test_infeasible_message() {
        let tasks = TaskSet::from_entries([("Packing", 10.0), ("Shipping", 5.0)]);
        let request = OptimizeRequest::new(tasks)
            .with_daily_capacity(15.0)
            .with_buffer_fraction(0.2);
        let err = optimize(&request).unwrap_err();
        assert_eq!(
            render_error(&err),
            "No optimal solution found. Try adjusting constraints."
        );
    }

    #[test]
    fn test_out_of_range_messages_passed_through() {
        let tasks = TaskSet::from_entries([("Packing", 10.0)]);
        let request = OptimizeRequest::new(tasks).with_daily_capacity(-1.0);
        let err = optimize(&request).unwrap_err();
        let message = render_error(&err);
        assert!(message.contains("Daily capacity"));
    }
}
