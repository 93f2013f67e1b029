//! Per-machine timeline report.
//!
//! The data a Gantt-style renderer needs from a finished run: for every
//! machine, the operations it processes in start-time order with their
//! job, position, and time window. This module only derives the rows; the
//! rendering itself is an external collaborator consuming the serialized
//! form.

use serde::{Deserialize, Serialize};

use crate::error::EvaluationError;
use crate::models::{Instance, Solution};
use crate::solver::decode;

/// One operation's slot on a machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineSlot {
    /// Global operation id.
    pub operation: usize,
    /// Parent job id.
    pub job: usize,
    /// Operation's position within its job.
    pub position: usize,
    /// Start time (time units).
    pub start: u64,
    /// End time (time units).
    pub end: u64,
}

/// A machine's full timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineTimeline {
    /// Machine id.
    pub machine: usize,
    /// Slots in ascending start order; may be empty for an idle machine.
    pub slots: Vec<TimelineSlot>,
}

/// Builds the per-machine timelines for a solution.
///
/// Returns one entry per machine in ascending machine order, including
/// machines that process nothing.
pub fn machine_timelines(
    instance: &Instance,
    solution: &Solution,
) -> Result<Vec<MachineTimeline>, EvaluationError> {
    let schedule = decode(instance, solution)?;

    Ok(instance
        .machines()
        .map(|machine| {
            let mut slots: Vec<TimelineSlot> = schedule
                .assignments_for_machine(machine)
                .into_iter()
                .map(|a| TimelineSlot {
                    operation: a.operation,
                    job: a.job,
                    position: a.position,
                    start: a.start,
                    end: a.end,
                })
                .collect();
            slots.sort_by_key(|s| s.start);
            MachineTimeline { machine, slots }
        })
        .collect())
}
