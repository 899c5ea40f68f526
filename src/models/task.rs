//! Task model and task collection.
//!
//! A task is a named unit of work with a required effort in hours.
//! [`TaskSet`] collects tasks in insertion order and filters out entries
//! that carry no work (blank name or non-positive hours) — those never
//! reach the solver.

use serde::{Deserialize, Serialize};

/// A named task with required effort hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task name.
    pub name: String,
    /// Required effort in hours. Always positive inside a `TaskSet`.
    pub required_hours: f64,
}

impl Task {
    /// Creates a new task.
    pub fn new(name: impl Into<String>, required_hours: f64) -> Self {
        Self {
            name: name.into(),
            required_hours,
        }
    }
}

/// Insertion-ordered task collection.
///
/// Inserting a name that already exists overwrites its hours in place
/// (last write wins), keeping the entry's original position. Entries with
/// a blank name (after trimming) or non-positive/non-finite hours are
/// rejected at insertion.
///
/// # Example
///
/// ```
/// use u_staffing::models::TaskSet;
///
/// let mut tasks = TaskSet::new();
/// assert!(tasks.insert("Packing", 10.0));
/// assert!(!tasks.insert("", 4.0)); // blank name rejected
/// assert!(!tasks.insert("Shipping", 0.0)); // zero hours rejected
/// assert_eq!(tasks.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskSet {
    tasks: Vec<Task>,
}

impl TaskSet {
    /// Creates an empty task set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a task set from `(name, hours)` pairs.
    ///
    /// Invalid entries are skipped; duplicate names follow the same
    /// last-write-wins rule as [`insert`](Self::insert).
    pub fn from_entries<N, I>(entries: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, f64)>,
    {
        let mut set = Self::new();
        for (name, hours) in entries {
            set.insert(name, hours);
        }
        set
    }

    /// Inserts a task, returning whether the entry was accepted.
    ///
    /// The name is stored as given; only the blank check trims. An
    /// existing task with the same name has its hours overwritten in
    /// place (last write wins).
    pub fn insert(&mut self, name: impl Into<String>, required_hours: f64) -> bool {
        let name = name.into();
        if name.trim().is_empty() || !required_hours.is_finite() || required_hours <= 0.0 {
            return false;
        }
        if let Some(existing) = self.tasks.iter_mut().find(|t| t.name == name) {
            existing.required_hours = required_hours;
        } else {
            self.tasks.push(Task::new(name, required_hours));
        }
        true
    }

    /// Finds a task by name.
    pub fn get(&self, name: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.name == name)
    }

    /// Tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Iterates tasks in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Number of tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the set holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Sum of raw required hours across all tasks.
    pub fn total_required_hours(&self) -> f64 {
        self.tasks.iter().map(|t| t.required_hours).sum()
    }

    /// Minimum total hours any feasible allocation must assign:
    /// Σ required_hours · (1 + buffer_fraction).
    pub fn min_feasible_hours(&self, buffer_fraction: f64) -> f64 {
        self.tasks
            .iter()
            .map(|t| t.required_hours * (1.0 + buffer_fraction))
            .sum()
    }
}

impl<'a> IntoIterator for &'a TaskSet {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut tasks = TaskSet::new();
        assert!(tasks.insert("Packing", 10.0));
        assert!(tasks.insert("Shipping", 5.0));

        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks.get("Packing").unwrap().required_hours, 10.0);
        assert!(tasks.get("Unknown").is_none());
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut tasks = TaskSet::new();
        assert!(!tasks.insert("", 4.0));
        assert!(!tasks.insert("   ", 4.0));
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_nonpositive_hours_rejected() {
        let mut tasks = TaskSet::new();
        assert!(!tasks.insert("Packing", 0.0));
        assert!(!tasks.insert("Packing", -1.0));
        assert!(!tasks.insert("Packing", f64::NAN));
        assert!(!tasks.insert("Packing", f64::INFINITY));
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_last_write_wins_keeps_position() {
        let mut tasks = TaskSet::new();
        tasks.insert("Packing", 10.0);
        tasks.insert("Shipping", 5.0);
        tasks.insert("Packing", 7.5);

        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks.get("Packing").unwrap().required_hours, 7.5);
        // Overwrite keeps the original insertion position
        assert_eq!(tasks.tasks()[0].name, "Packing");
        assert_eq!(tasks.tasks()[1].name, "Shipping");
    }

    #[test]
    fn test_from_entries_skips_invalid() {
        let tasks = TaskSet::from_entries([("Packing", 10.0), ("", 3.0), ("Shipping", 0.0)]);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks.tasks()[0].name, "Packing");
    }

    #[test]
    fn test_totals() {
        let tasks = TaskSet::from_entries([("Packing", 10.0), ("Shipping", 5.0)]);
        assert!((tasks.total_required_hours() - 15.0).abs() < 1e-10);
        assert!((tasks.min_feasible_hours(0.2) - 18.0).abs() < 1e-10);
        assert!((tasks.min_feasible_hours(0.0) - 15.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_totals() {
        let tasks = TaskSet::new();
        assert_eq!(tasks.total_required_hours(), 0.0);
        assert_eq!(tasks.min_feasible_hours(0.5), 0.0);
    }

    #[test]
    fn test_serde_roundtrip() {
        let tasks = TaskSet::from_entries([("Packing", 10.0), ("Shipping", 5.0)]);
        let json = serde_json::to_string(&tasks).unwrap();
        let back: TaskSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tasks);
    }
}
