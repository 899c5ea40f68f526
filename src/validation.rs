//! Input validation for optimization requests.
//!
//! Checks structural integrity of a request before solving. Detects:
//! - Empty or oversized task sets
//! - Out-of-range scheduling parameters (capacity, buffer, downtime)
//! - Degenerate shift plans and calendars
//!
//! In an interactive front-end most of these bounds are enforced by the
//! input widgets; here they are structured checks so any caller gets the
//! same guarantees.

use crate::models::OptimizeRequest;

/// Maximum number of tasks accepted in one request.
pub const MAX_TASKS: usize = 10;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No task with a non-blank name and positive hours was provided.
    NoTasks,
    /// More tasks than the request surface supports.
    TooManyTasks,
    /// Daily capacity is not a positive finite number.
    NonPositiveCapacity,
    /// Buffer fraction is negative or non-finite.
    NegativeBuffer,
    /// Shift length is not a positive finite number.
    NonPositiveShiftHours,
    /// Zero shifts per day.
    ZeroShifts,
    /// Downtime fraction outside `[0.0, 1.0]`.
    DowntimeOutOfRange,
    /// A calendar constant is zero.
    ZeroCalendarDays,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates an optimization request.
///
/// Checks:
/// 1. At least one task, at most [`MAX_TASKS`]
/// 2. Daily capacity is positive and finite
/// 3. Buffer fraction is non-negative and finite
/// 4. Shift length is positive and finite; at least one shift per day
/// 5. Downtime fraction is within `[0.0, 1.0]`
/// 6. All calendar constants are at least 1
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(request: &OptimizeRequest) -> ValidationResult {
    let mut errors = Vec::new();

    if request.tasks.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoTasks,
            "No tasks with required hours were provided",
        ));
    } else if request.tasks.len() > MAX_TASKS {
        errors.push(ValidationError::new(
            ValidationErrorKind::TooManyTasks,
            format!(
                "{} tasks provided, at most {} supported",
                request.tasks.len(),
                MAX_TASKS
            ),
        ));
    }

    if !request.daily_capacity.is_finite() || request.daily_capacity <= 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveCapacity,
            format!(
                "Daily capacity must be a positive number of worker-hours, got {}",
                request.daily_capacity
            ),
        ));
    }

    if !request.buffer_fraction.is_finite() || request.buffer_fraction < 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NegativeBuffer,
            format!(
                "Buffer fraction must be non-negative, got {}",
                request.buffer_fraction
            ),
        ));
    }

    if !request.shift.hours_per_shift.is_finite() || request.shift.hours_per_shift <= 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveShiftHours,
            format!(
                "Hours per shift must be positive, got {}",
                request.shift.hours_per_shift
            ),
        ));
    }

    if request.shift.shifts_per_day == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroShifts,
            "Shifts per day must be at least 1",
        ));
    }

    if !request.shift.downtime_fraction.is_finite()
        || !(0.0..=1.0).contains(&request.shift.downtime_fraction)
    {
        errors.push(ValidationError::new(
            ValidationErrorKind::DowntimeOutOfRange,
            format!(
                "Downtime fraction must be within [0, 1], got {}",
                request.shift.downtime_fraction
            ),
        ));
    }

    for (label, days) in [
        ("week", request.calendar.days_per_week),
        ("month", request.calendar.days_per_month),
        ("year", request.calendar.days_per_year),
    ] {
        if days == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroCalendarDays,
                format!("Working days per {label} must be at least 1"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
