//! LP-based hour allocation.
//!
//! # Model
//!
//! One continuous variable `x_t ≥ 0` per task (hours assigned to `t`):
//!
//! - Objective: minimize `Σ x_t`
//! - Per task: `x_t ≥ required_hours · (1 + buffer_fraction)`
//! - Aggregate: `Σ x_t ≤ daily_capacity`
//!
//! The lower bounds are independent and the objective only penalizes
//! total hours, so the unique optimum (when feasible) sits exactly at
//! the lower bounds. Feasibility therefore reduces to
//! `Σ required · (1 + buffer) ≤ daily_capacity`.
//!
//! # Reference
//! Hillier & Lieberman (2021), "Introduction to Operations Research", Ch. 3

use std::fmt;

use good_lp::{
    constraint, default_solver, variable, variables, Expression, ResolutionError, Solution,
    SolverModel, Variable,
};
use serde::{Deserialize, Serialize};

use crate::models::{Task, TaskSet};

/// Outcome classification of an allocation solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SolveStatus {
    /// Proven optimal allocation found.
    #[default]
    Optimal,
    /// No assignment of hours satisfies all constraints.
    Infeasible,
}

/// Hours assigned to one task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    /// Task name.
    pub task: String,
    /// Allocated hours per day.
    pub hours: f64,
}

impl Allocation {
    /// Creates a new allocation.
    pub fn new(task: impl Into<String>, hours: f64) -> Self {
        Self {
            task: task.into(),
            hours,
        }
    }
}

/// An optimal per-task hour allocation.
///
/// Allocations appear in task insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AllocationResult {
    /// Per-task allocations.
    pub allocations: Vec<Allocation>,
    /// Sum of all allocated hours.
    pub total_assigned: f64,
    /// Solve outcome (always `Optimal` for a returned result).
    pub status: SolveStatus,
}

impl AllocationResult {
    /// Creates an empty optimal result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an allocation, keeping `total_assigned` consistent.
    pub fn add_allocation(&mut self, allocation: Allocation) {
        self.total_assigned += allocation.hours;
        self.allocations.push(allocation);
    }

    /// Allocated hours for a task.
    pub fn hours_for(&self, task: &str) -> Option<f64> {
        self.allocations
            .iter()
            .find(|a| a.task == task)
            .map(|a| a.hours)
    }

    /// Number of allocated tasks.
    pub fn task_count(&self) -> usize {
        self.allocations.len()
    }
}

/// Failure modes of an allocation solve.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveError {
    /// No assignment of hours satisfies all constraints simultaneously.
    Infeasible,
    /// The LP backend failed for a reason other than infeasibility.
    Backend(String),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Infeasible => {
                write!(f, "no feasible allocation: minimum requirements exceed daily capacity")
            }
            Self::Backend(msg) => write!(f, "LP backend error: {msg}"),
        }
    }
}

impl std::error::Error for SolveError {}

/// Solves the hour-allocation LP.
///
/// Returns the per-task allocation and total on success, or
/// [`SolveError::Infeasible`] when the buffered requirements exceed
/// `daily_capacity`. No partial or clamped allocation is ever produced.
/// Deterministic: identical inputs yield identical outputs.
///
/// Callers are expected to validate the request first (see
/// [`crate::validation`]); an empty task set short-circuits to an empty
/// optimal result without invoking the backend.
///
/// # Example
///
/// ```
/// use u_staffing::models::TaskSet;
/// use u_staffing::solver::solve_allocation;
///
/// let tasks = TaskSet::from_entries([("Packing", 10.0), ("Shipping", 5.0)]);
/// let result = solve_allocation(&tasks, 30.0, 0.2).unwrap();
///
/// assert!((result.hours_for("Packing").unwrap() - 12.0).abs() < 1e-6);
/// assert!((result.total_assigned - 18.0).abs() < 1e-6);
/// ```
pub fn solve_allocation(
    tasks: &TaskSet,
    daily_capacity: f64,
    buffer_fraction: f64,
) -> Result<AllocationResult, SolveError> {
    if tasks.is_empty() {
        return Ok(AllocationResult::new());
    }

    let mut vars = variables!();
    let mut task_vars: Vec<(&Task, Variable)> = Vec::new();
    for task in tasks.iter() {
        let var = vars.add(variable().min(0.0));
        task_vars.push((task, var));
    }

    let total = task_vars
        .iter()
        .fold(Expression::from(0.0), |acc, (_, v)| acc + *v);

    let mut problem = vars.minimise(total.clone()).using(default_solver);

    for (task, var) in &task_vars {
        let floor = task.required_hours * (1.0 + buffer_fraction);
        problem = problem.with(constraint!(*var >= floor));
    }
    problem = problem.with(constraint!(total <= daily_capacity));

    let solution = match problem.solve() {
        Ok(solution) => solution,
        Err(ResolutionError::Infeasible) => return Err(SolveError::Infeasible),
        Err(other) => return Err(SolveError::Backend(other.to_string())),
    };

    let mut result = AllocationResult::new();
    for (task, var) in &task_vars {
        result.add_allocation(Allocation::new(task.name.clone(), solution.value(*var)));
    }
    Ok(result)
}
