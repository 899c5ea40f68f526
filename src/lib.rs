//! Workforce staffing optimizer.
//!
//! Computes an hours-per-task allocation satisfying per-task minimum
//! requirements and a daily capacity limit via linear programming, then
//! derives fractional staffing headcounts (day/week/month/year) from the
//! allocated total.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `TaskSet`, `ShiftPlan`,
//!   `WorkCalendar`, `OptimizeRequest`
//! - **`validation`**: Input integrity checks (empty input, range bounds)
//! - **`solver`**: The allocation LP, staffing derivation, and the
//!   one-shot `optimize` entry point
//! - **`report`**: Fixed-precision text rendering of results
//!
//! # Architecture
//!
//! A pure request-response library: an `OptimizeRequest` is constructed
//! fresh per optimization, validated, solved, and discarded. No state
//! survives between calls. The LP backend is `good_lp` over the pure-Rust
//! `microlp` solver; with one variable per task and the objective pinning
//! every variable to its buffered lower bound, the solve is tiny and
//! deterministic.
//!
//! # Example
//!
//! ```
//! use u_staffing::models::{OptimizeRequest, TaskSet};
//! use u_staffing::report::render_report;
//! use u_staffing::solver::optimize;
//!
//! let tasks = TaskSet::from_entries([("Packing", 10.0), ("Shipping", 5.0)]);
//! let request = OptimizeRequest::new(tasks)
//!     .with_daily_capacity(30.0)
//!     .with_buffer_fraction(0.2);
//!
//! match optimize(&request) {
//!     Ok(output) => println!("{}", render_report(&output)),
//!     Err(err) => eprintln!("{err}"),
//! }
//! ```
//!
//! # References
//!
//! - Hillier & Lieberman (2021), "Introduction to Operations Research"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1

pub mod models;
pub mod report;
pub mod solver;
pub mod validation;
