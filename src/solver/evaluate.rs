//! Schedule evaluation.
//!
//! Decodes a solution into concrete start/end times with a single forward
//! pass over the dispatch order — no backtracking, no tie-break choices
//! beyond the fixed recurrence below — and reads the makespan off the
//! result. For each operation in order:
//!
//! 1. `earliest` = completion time of its predecessor (0 if none);
//! 2. `start` = max(assigned machine's free time, `earliest`);
//! 3. `end` = `start` + processing time on the assigned machine.
//!
//! An operation walked before its predecessor means the order itself is
//! broken; that is reported as [`EvaluationError::PrecedenceViolation`]
//! and aborts the run.

use std::collections::HashMap;

use crate::error::EvaluationError;
use crate::models::{Assignment, Instance, Schedule, Solution};

/// Decodes a solution into a timed [`Schedule`].
///
/// Deterministic and O(number of operations). Structurally valid solutions
/// never fail; the error paths exist to surface defects in order or
/// assignment construction instead of silently producing a wrong schedule.
pub fn decode(instance: &Instance, solution: &Solution) -> Result<Schedule, EvaluationError> {
    let mut machine_free: HashMap<usize, u64> =
        instance.machines().map(|m| (m, 0)).collect();
    let mut completion: HashMap<usize, u64> =
        HashMap::with_capacity(solution.operation_order.len());
    let mut schedule = Schedule::new();

    for &op in &solution.operation_order {
        let machine = *solution
            .machine_assignment
            .get(&op)
            .ok_or(EvaluationError::MissingAssignment { operation: op })?;

        let earliest = match instance.predecessor(op) {
            Some(pred) => *completion.get(&pred).ok_or(
                EvaluationError::PrecedenceViolation {
                    operation: op,
                    predecessor: pred,
                },
            )?,
            None => 0,
        };

        let duration = instance.processing_time(op, machine).ok_or(
            EvaluationError::IneligibleAssignment {
                operation: op,
                machine,
            },
        )?;

        let start = machine_free[&machine].max(earliest);
        let end = start + duration;

        let (job, position) = instance.job_and_position(op);
        schedule.push(Assignment {
            operation: op,
            job,
            position,
            machine,
            start,
            end,
        });

        completion.insert(op, end);
        machine_free.insert(machine, end);
    }

    Ok(schedule)
}

/// Computes the makespan of a solution: completion time of the
/// last-finishing job.
pub fn evaluate(instance: &Instance, solution: &Solution) -> Result<u64, EvaluationError> {
    Ok(decode(instance, solution)?.makespan())
}
