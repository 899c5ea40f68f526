//! One-shot optimization pipeline.
//!
//! Runs a full request through validation, the allocation LP, and the
//! staffing derivation. One call per trigger; nothing is cached or shared
//! between calls.

use std::fmt;

use crate::models::OptimizeRequest;
use crate::validation::{validate_request, ValidationError};

use super::allocation::{solve_allocation, AllocationResult, SolveError};
use super::staffing::StaffingResult;

/// Complete output of one optimization run.
#[derive(Debug, Clone)]
pub struct OptimizeOutput {
    /// Per-task hour allocation.
    pub allocation: AllocationResult,
    /// Derived staffing requirements.
    pub staffing: StaffingResult,
}

/// Failure modes of an optimization run.
#[derive(Debug, Clone, PartialEq)]
pub enum OptimizeError {
    /// The request failed structural validation; the solver was not invoked.
    Validation(Vec<ValidationError>),
    /// The buffered requirements exceed the daily capacity.
    Infeasible,
    /// The LP backend failed for a reason other than infeasibility.
    Backend(String),
}

impl From<SolveError> for OptimizeError {
    fn from(err: SolveError) -> Self {
        match err {
            SolveError::Infeasible => Self::Infeasible,
            SolveError::Backend(msg) => Self::Backend(msg),
        }
    }
}

impl fmt::Display for OptimizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(errors) => {
                write!(f, "invalid request: ")?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}", e.message)?;
                }
                Ok(())
            }
            Self::Infeasible => {
                write!(f, "no feasible allocation: minimum requirements exceed daily capacity")
            }
            Self::Backend(msg) => write!(f, "LP backend error: {msg}"),
        }
    }
}

impl std::error::Error for OptimizeError {}

/// Runs one optimization: validate, solve the allocation LP, derive staffing.
///
/// # Example
///
/// ```
/// use u_staffing::models::{OptimizeRequest, TaskSet};
/// use u_staffing::solver::optimize;
///
/// let tasks = TaskSet::from_entries([("Packing", 10.0), ("Shipping", 5.0)]);
/// let request = OptimizeRequest::new(tasks)
///     .with_daily_capacity(30.0)
///     .with_buffer_fraction(0.2);
///
/// let output = optimize(&request).unwrap();
/// assert!((output.allocation.total_assigned - 18.0).abs() < 1e-6);
/// assert!((output.staffing.people_per_day - 2.8125).abs() < 1e-6);
/// ```
pub fn optimize(request: &OptimizeRequest) -> Result<OptimizeOutput, OptimizeError> {
    validate_request(request).map_err(OptimizeError::Validation)?;

    let allocation = solve_allocation(
        &request.tasks,
        request.daily_capacity,
        request.buffer_fraction,
    )?;
    let staffing =
        StaffingResult::calculate(allocation.total_assigned, &request.shift, &request.calendar);

    Ok(OptimizeOutput {
        allocation,
        staffing,
    })
}
