//! Fatal error kinds.
//!
//! Two failure classes exist, both fatal for the run they occur in:
//! an instance that cannot be scheduled at all (rejected at construction),
//! and a structurally broken solution handed to the evaluator (a defect in
//! whatever produced it, never a recoverable condition). Having no
//! *alternative* machine for an operation during perturbation or local
//! search is not an error; the operation is simply left on its current
//! machine.

use thiserror::Error;

/// Instance construction failures (see [`crate::models::InstanceBuilder`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstanceError {
    /// Instance has no jobs, no machines, or zero operations per job.
    #[error("instance is empty: {0} job(s), {1} machine(s), {2} operation(s) per job")]
    EmptyInstance(usize, usize, usize),

    /// A job supplied a different number of operations than declared.
    #[error("job {job} has {actual} operation(s), expected {expected}")]
    OperationCountMismatch {
        job: usize,
        expected: usize,
        actual: usize,
    },

    /// A processing entry references a machine outside the machine set.
    #[error("job {job} operation {position} references unknown machine {machine}")]
    UnknownMachine {
        job: usize,
        position: usize,
        machine: usize,
    },

    /// An operation cannot run anywhere.
    #[error("job {job} operation {position} has no eligible machine")]
    NoEligibleMachine { job: usize, position: usize },
}

/// Solution evaluation failures (see [`crate::solver::evaluate`]).
///
/// None of these can occur for a solution produced by the generator,
/// the perturbation operator, or local search; the evaluator detects
/// them defensively and aborts the run rather than working around them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// The order places an operation before its predecessor.
    #[error("operation {operation} scheduled before its predecessor {predecessor}")]
    PrecedenceViolation {
        operation: usize,
        predecessor: usize,
    },

    /// An operation in the order has no machine assignment.
    #[error("operation {operation} has no machine assignment")]
    MissingAssignment { operation: usize },

    /// An operation is assigned to a machine that cannot process it.
    #[error("operation {operation} assigned to ineligible machine {machine}")]
    IneligibleAssignment { operation: usize, machine: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_error_messages() {
        let e = InstanceError::NoEligibleMachine {
            job: 2,
            position: 3,
        };
        assert_eq!(e.to_string(), "job 2 operation 3 has no eligible machine");

        let e = InstanceError::OperationCountMismatch {
            job: 1,
            expected: 4,
            actual: 2,
        };
        assert!(e.to_string().contains("expected 4"));
    }

    #[test]
    fn test_evaluation_error_messages() {
        let e = EvaluationError::PrecedenceViolation {
            operation: 6,
            predecessor: 5,
        };
        assert_eq!(
            e.to_string(),
            "operation 6 scheduled before its predecessor 5"
        );
    }
}
