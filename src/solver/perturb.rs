//! Solution perturbation.
//!
//! Kicks a solution out of the basin local search settled into, in two
//! independent moves applied to one fresh copy:
//!
//! - **machine move**: a sample of distinct operations is reassigned, each
//!   to a uniformly random eligible machine *other than* its current one.
//!   An operation with no alternative keeps its machine; that is not an
//!   error.
//! - **order move**: a sample of distinct operations is marked preferred
//!   and the whole dispatch order is rebuilt with the biased ready-set
//!   sampler, concentrating the reshuffle on the marked operations while
//!   the rest of the order stays precedence-consistent.
//!
//! The input solution is never mutated.

use std::collections::HashSet;

use rand::Rng;
use rand::prelude::IndexedRandom;

use super::generate::random_order;
use crate::models::{Instance, Solution};

/// Returns a perturbed copy of `solution`.
///
/// `machine_moves` and `order_moves` are the perturbation magnitudes;
/// both are capped at the total operation count. The result satisfies
/// both solution invariants.
pub fn perturb<R: Rng>(
    instance: &Instance,
    solution: &Solution,
    machine_moves: usize,
    order_moves: usize,
    rng: &mut R,
) -> Solution {
    let mut perturbed = solution.clone();
    let operations: Vec<usize> = instance.operations().collect();

    // Reassign a sample of operations to alternative machines.
    let targets: Vec<usize> = operations
        .choose_multiple(rng, machine_moves.min(operations.len()))
        .copied()
        .collect();
    for op in targets {
        let current = perturbed.machine_assignment[&op];
        let alternatives: Vec<usize> = instance
            .eligible_machines(op)
            .into_iter()
            .filter(|&m| m != current)
            .collect();
        if let Some(&machine) = alternatives.choose(rng) {
            perturbed.machine_assignment.insert(op, machine);
        }
    }

    // Rebuild the order with randomness concentrated on a marked sample.
    let preferred: HashSet<usize> = operations
        .choose_multiple(rng, order_moves.min(operations.len()))
        .copied()
        .collect();
    perturbed.operation_order = random_order(instance, &preferred, rng);

    perturbed
}
