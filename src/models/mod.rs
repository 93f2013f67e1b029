//! Scheduling domain models.
//!
//! Core data types for the flexible job shop problem and its solutions:
//!
//! | Type | Role |
//! |------|------|
//! | [`Instance`] | Static problem data: jobs, machines, processing times |
//! | [`Solution`] | Search work item: machine assignment + dispatch order |
//! | [`Schedule`] | Decoded timing of one solution (start/end per operation) |
//!
//! `Instance` is immutable for a run and constructed through
//! [`InstanceBuilder`], which rejects infeasible input up front. `Solution`
//! is the value passed between search components; `Schedule` is derived
//! from a solution by the evaluator for reporting.

mod instance;
mod schedule;
mod solution;

pub use instance::{Instance, InstanceBuilder};
pub use schedule::{Assignment, Schedule};
pub use solution::Solution;
