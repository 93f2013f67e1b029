//! FJSP instance model.
//!
//! A static description of one flexible job shop problem: jobs composed of
//! a uniform number of chained operations, machines, and per-operation
//! machine-specific processing times. Eligibility is encoded by presence in
//! the processing table — a machine that cannot run an operation simply has
//! no entry for it.
//!
//! # Identifiers
//!
//! Jobs, machines, and global operations are 1-based integers. Operation
//! `op` decomposes as `job = (op-1) / ops_per_job + 1`,
//! `position = (op-1) % ops_per_job + 1`. Precedence is one chain per job:
//! every operation after the first must wait for the previous position of
//! the same job.
//!
//! # Reference
//! Brandimarte (1993), "Routing and scheduling in a flexible job shop"

use serde::Serialize;
use std::collections::HashMap;

use crate::error::InstanceError;

/// An immutable flexible job shop instance.
///
/// Constructed via [`Instance::builder`], which rejects infeasible input
/// (an operation with no eligible machine, a job with the wrong operation
/// count). Every accessor on a built instance is therefore total.
#[derive(Debug, Clone, Serialize)]
pub struct Instance {
    num_machines: usize,
    operations_per_job: usize,
    /// `processing[job-1][position-1]`: machine → duration (time units).
    processing: Vec<Vec<HashMap<usize, u64>>>,
}

impl Instance {
    /// Starts building an instance with the given machine count and
    /// (uniform) operations-per-job count.
    pub fn builder(num_machines: usize, operations_per_job: usize) -> InstanceBuilder {
        InstanceBuilder {
            num_machines,
            operations_per_job,
            jobs: Vec::new(),
        }
    }

    /// Number of jobs.
    pub fn num_jobs(&self) -> usize {
        self.processing.len()
    }

    /// Number of machines.
    pub fn num_machines(&self) -> usize {
        self.num_machines
    }

    /// Operations per job (uniform across jobs).
    pub fn operations_per_job(&self) -> usize {
        self.operations_per_job
    }

    /// Total number of operations across all jobs.
    pub fn total_operations(&self) -> usize {
        self.num_jobs() * self.operations_per_job
    }

    /// Job ids in ascending order.
    pub fn jobs(&self) -> impl Iterator<Item = usize> {
        1..=self.num_jobs()
    }

    /// Machine ids in ascending order.
    ///
    /// This order is fixed for the lifetime of the instance; local search
    /// scans machines in exactly this order.
    pub fn machines(&self) -> impl Iterator<Item = usize> {
        1..=self.num_machines
    }

    /// Global operation ids in ascending order.
    pub fn operations(&self) -> impl Iterator<Item = usize> {
        1..=self.total_operations()
    }

    /// Decomposes a global operation id into `(job, position)`.
    ///
    /// Position is the operation's 1-based index within its job's chain.
    pub fn job_and_position(&self, op: usize) -> (usize, usize) {
        let job = (op - 1) / self.operations_per_job + 1;
        let position = (op - 1) % self.operations_per_job + 1;
        (job, position)
    }

    /// The operation that must finish before `op` starts, if any.
    ///
    /// `None` for the first operation of each job; otherwise the previous
    /// global id, which is the previous position of the same job.
    pub fn predecessor(&self, op: usize) -> Option<usize> {
        let (_, position) = self.job_and_position(op);
        if position > 1 {
            Some(op - 1)
        } else {
            None
        }
    }

    /// Processing duration of `op` on `machine`, or `None` if the machine
    /// cannot run it.
    pub fn processing_time(&self, op: usize, machine: usize) -> Option<u64> {
        let (job, position) = self.job_and_position(op);
        self.processing[job - 1][position - 1].get(&machine).copied()
    }

    /// Whether `machine` can run `op`.
    pub fn is_eligible(&self, op: usize, machine: usize) -> bool {
        self.processing_time(op, machine).is_some()
    }

    /// Machines able to run `op`, in ascending machine order.
    ///
    /// Never empty for a built instance.
    pub fn eligible_machines(&self, op: usize) -> Vec<usize> {
        self.machines()
            .filter(|&m| self.is_eligible(op, m))
            .collect()
    }
}

/// Builder for [`Instance`].
///
/// Jobs are added as per-operation `(machine, duration)` lists; `build`
/// performs the fail-fast feasibility checks.
#[derive(Debug, Clone)]
pub struct InstanceBuilder {
    num_machines: usize,
    operations_per_job: usize,
    jobs: Vec<Vec<Vec<(usize, u64)>>>,
}

impl InstanceBuilder {
    /// Adds a job: one `(machine, duration)` list per operation, in chain
    /// order.
    pub fn with_job(mut self, operations: Vec<Vec<(usize, u64)>>) -> Self {
        self.jobs.push(operations);
        self
    }

    /// Validates and builds the instance.
    ///
    /// # Errors
    /// - [`InstanceError::EmptyInstance`]: no jobs, no machines, or zero
    ///   operations per job
    /// - [`InstanceError::OperationCountMismatch`]: a job's operation list
    ///   does not match the declared operations-per-job count
    /// - [`InstanceError::UnknownMachine`]: a duration references a machine
    ///   outside `1..=num_machines`
    /// - [`InstanceError::NoEligibleMachine`]: an operation has no machine
    ///   able to run it
    pub fn build(self) -> Result<Instance, InstanceError> {
        if self.jobs.is_empty() || self.num_machines == 0 || self.operations_per_job == 0 {
            return Err(InstanceError::EmptyInstance(
                self.jobs.len(),
                self.num_machines,
                self.operations_per_job,
            ));
        }

        let mut processing = Vec::with_capacity(self.jobs.len());
        for (job_idx, operations) in self.jobs.into_iter().enumerate() {
            let job = job_idx + 1;
            if operations.len() != self.operations_per_job {
                return Err(InstanceError::OperationCountMismatch {
                    job,
                    expected: self.operations_per_job,
                    actual: operations.len(),
                });
            }

            let mut rows = Vec::with_capacity(operations.len());
            for (pos_idx, durations) in operations.into_iter().enumerate() {
                let position = pos_idx + 1;
                if durations.is_empty() {
                    return Err(InstanceError::NoEligibleMachine { job, position });
                }
                let mut row = HashMap::with_capacity(durations.len());
                for (machine, duration) in durations {
                    if machine == 0 || machine > self.num_machines {
                        return Err(InstanceError::UnknownMachine {
                            job,
                            position,
                            machine,
                        });
                    }
                    row.insert(machine, duration);
                }
                rows.push(row);
            }
            processing.push(rows);
        }

        Ok(Instance {
            num_machines: self.num_machines,
            operations_per_job: self.operations_per_job,
            processing,
        })
    }
}
