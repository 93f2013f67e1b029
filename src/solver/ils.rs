//! Iterated local search driver.
//!
//! Orchestrates the full search: generate a random feasible solution,
//! improve it with one local-search sweep, then iterate
//! perturb → improve → accept-or-revert. Acceptance is strictly greedy —
//! a candidate replaces the best only on a strictly smaller makespan, so
//! the best makespan is monotonically non-increasing across iterations.
//! The run stops after `max_iterations` iterations or once
//! `max_stagnation` consecutive iterations pass without improvement;
//! both are normal termination.
//!
//! # Reference
//! Lourenço, Martin & Stützle (2003), "Iterated Local Search",
//! Handbook of Metaheuristics

use rand::Rng;

use super::generate::generate_initial;
use super::local_search::improve_with_makespan;
use super::perturb::perturb;
use crate::error::EvaluationError;
use crate::models::{Instance, Solution};

/// Tunable knobs of the ILS run.
#[derive(Debug, Clone)]
pub struct IlsConfig {
    /// Maximum number of perturb/improve iterations.
    pub max_iterations: usize,
    /// Consecutive non-improving iterations before stopping early.
    pub max_stagnation: usize,
    /// Operations whose machine is reassigned per perturbation.
    pub machine_perturbations: usize,
    /// Operations marked preferred when the order is rebuilt per
    /// perturbation.
    pub order_perturbations: usize,
}

impl Default for IlsConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            max_stagnation: 20,
            machine_perturbations: 1,
            order_perturbations: 1,
        }
    }
}

impl IlsConfig {
    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the stagnation limit.
    pub fn with_max_stagnation(mut self, max_stagnation: usize) -> Self {
        self.max_stagnation = max_stagnation;
        self
    }

    /// Sets the machine perturbation magnitude.
    pub fn with_machine_perturbations(mut self, count: usize) -> Self {
        self.machine_perturbations = count;
        self
    }

    /// Sets the order perturbation magnitude.
    pub fn with_order_perturbations(mut self, count: usize) -> Self {
        self.order_perturbations = count;
        self
    }
}

/// Outcome of a finished run.
#[derive(Debug, Clone)]
pub struct IlsResult {
    /// Best solution found.
    pub best: Solution,
    /// Its makespan.
    pub makespan: u64,
    /// Iterations actually executed.
    pub iterations: usize,
    /// Whether the run stopped on stagnation rather than the iteration
    /// budget.
    pub stagnated: bool,
}

/// Single-threaded ILS solver over one instance.
///
/// All randomness flows through the caller-supplied `Rng`, so a seeded
/// source makes whole runs reproducible.
#[derive(Debug, Clone, Default)]
pub struct IlsSolver {
    config: IlsConfig,
}

impl IlsSolver {
    /// Creates a solver with the given configuration.
    pub fn new(config: IlsConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &IlsConfig {
        &self.config
    }

    /// Runs the full search.
    ///
    /// # Errors
    /// Propagates [`EvaluationError`] from the evaluator; with the
    /// generator and operators in this crate that indicates a defect, not
    /// a property of the instance.
    pub fn run<R: Rng>(
        &self,
        instance: &Instance,
        rng: &mut R,
    ) -> Result<IlsResult, EvaluationError> {
        let initial = generate_initial(instance, rng);
        let (mut best, mut best_makespan) = improve_with_makespan(instance, &initial)?;
        tracing::debug!(makespan = best_makespan, "initial sweep complete");

        let mut stagnation = 0usize;
        let mut iterations = 0usize;
        let mut stagnated = false;

        for iteration in 1..=self.config.max_iterations {
            iterations = iteration;
            let shaken = perturb(
                instance,
                &best,
                self.config.machine_perturbations,
                self.config.order_perturbations,
                rng,
            );
            let (candidate, makespan) = improve_with_makespan(instance, &shaken)?;

            if makespan < best_makespan {
                tracing::debug!(iteration, makespan, "accepted improvement");
                best = candidate;
                best_makespan = makespan;
                stagnation = 0;
            } else {
                stagnation += 1;
                tracing::trace!(iteration, makespan, stagnation, "candidate rejected");
            }

            if stagnation >= self.config.max_stagnation {
                stagnated = true;
                break;
            }
        }

        tracing::debug!(
            makespan = best_makespan,
            iterations,
            stagnated,
            "search finished"
        );
        Ok(IlsResult {
            best,
            makespan: best_makespan,
            iterations,
            stagnated,
        })
    }
}
