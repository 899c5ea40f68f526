//! Allocation solving and staffing derivation.
//!
//! # Algorithm
//!
//! The allocation is a small linear program (one non-negative variable
//! per task, one lower-bound constraint per task, one aggregate capacity
//! constraint) solved with `good_lp`. The objective — minimize total
//! assigned hours — pins every variable to its buffered lower bound, so
//! the optimum is unique whenever the problem is feasible.
//!
//! # Staffing
//!
//! `StaffingResult` converts the allocated total into fractional
//! headcounts per day/week/month/year from the shift plan and the
//! working-day calendar. A zero-productivity shift plan produces an
//! infinite headcount, not an error.
//!
//! # Reference
//!
//! Hillier & Lieberman (2021), "Introduction to Operations Research", Ch. 3

mod allocation;
mod optimize;
mod staffing;

pub use allocation::{solve_allocation, Allocation, AllocationResult, SolveError, SolveStatus};
pub use optimize::{optimize, OptimizeError, OptimizeOutput};
pub use staffing::StaffingResult;
