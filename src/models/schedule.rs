//! Decoded schedule model.
//!
//! A schedule is the timing of one concrete solution: per-operation
//! start/end times on the assigned machines, produced by
//! [`crate::solver::decode`]. Unlike the raw [`super::Solution`] it is
//! directly consumable by reporting components (timelines, Gantt renderers).
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

use serde::{Deserialize, Serialize};

/// A complete decoded schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schedule {
    /// One assignment per operation, in dispatch order.
    pub assignments: Vec<Assignment>,
}

/// An operation-machine-time assignment.
///
/// Job and position are denormalized from the operation id for query
/// convenience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Global operation id.
    pub operation: usize,
    /// Parent job id.
    pub job: usize,
    /// Operation's 1-based position within its job.
    pub position: usize,
    /// Machine the operation runs on.
    pub machine: usize,
    /// Start time (time units).
    pub start: u64,
    /// End time (time units).
    pub end: u64,
}

impl Assignment {
    /// Processing duration (end - start).
    #[inline]
    pub fn duration(&self) -> u64 {
        self.end - self.start
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an assignment.
    pub fn push(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Makespan: latest end time across all assignments.
    pub fn makespan(&self) -> u64 {
        self.assignments.iter().map(|a| a.end).max().unwrap_or(0)
    }

    /// Finds the assignment for a given operation.
    pub fn assignment_for_operation(&self, operation: usize) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.operation == operation)
    }

    /// All assignments on a given machine, in dispatch order.
    pub fn assignments_for_machine(&self, machine: usize) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.machine == machine)
            .collect()
    }

    /// All assignments belonging to a given job.
    pub fn assignments_for_job(&self, job: usize) -> Vec<&Assignment> {
        self.assignments.iter().filter(|a| a.job == job).collect()
    }

    /// Completion time of a job (latest end of its assignments).
    pub fn job_completion_time(&self, job: usize) -> Option<u64> {
        self.assignments_for_job(job).iter().map(|a| a.end).max()
    }

    /// Number of assignments.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the schedule holds no assignments.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> Schedule {
        let mut s = Schedule::new();
        s.push(Assignment {
            operation: 1,
            job: 1,
            position: 1,
            machine: 1,
            start: 0,
            end: 10,
        });
        s.push(Assignment {
            operation: 3,
            job: 2,
            position: 1,
            machine: 2,
            start: 0,
            end: 5,
        });
        s.push(Assignment {
            operation: 2,
            job: 1,
            position: 2,
            machine: 2,
            start: 10,
            end: 18,
        });
        s
    }

    #[test]
    fn test_makespan() {
        assert_eq!(sample_schedule().makespan(), 18);
        assert_eq!(Schedule::new().makespan(), 0);
    }

    #[test]
    fn test_assignment_lookup() {
        let s = sample_schedule();
        let a = s.assignment_for_operation(3).unwrap();
        assert_eq!(a.machine, 2);
        assert_eq!(a.duration(), 5);
        assert!(s.assignment_for_operation(99).is_none());
    }

    #[test]
    fn test_per_machine_and_per_job() {
        let s = sample_schedule();
        assert_eq!(s.assignments_for_machine(2).len(), 2);
        assert_eq!(s.assignments_for_machine(3).len(), 0);
        assert_eq!(s.assignments_for_job(1).len(), 2);
    }

    #[test]
    fn test_job_completion_time() {
        let s = sample_schedule();
        assert_eq!(s.job_completion_time(1), Some(18));
        assert_eq!(s.job_completion_time(2), Some(5));
        assert_eq!(s.job_completion_time(9), None);
    }

    #[test]
    fn test_empty() {
        let s = Schedule::new();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
    }
}
