//! Initial solution generation.
//!
//! Produces a random feasible starting point: each operation gets a
//! uniformly random eligible machine, and the dispatch order is a
//! randomized topological sort over the per-job precedence chains. No
//! optimization happens here — quality comes from local search.

use std::collections::{HashMap, HashSet};

use rand::Rng;
use rand::prelude::IndexedRandom;

use crate::models::{Instance, Solution};

/// Generates a random feasible solution.
///
/// Both solution invariants hold on the output: the order is a linear
/// extension of the precedence chains, and every assignment is eligible.
pub fn generate_initial<R: Rng>(instance: &Instance, rng: &mut R) -> Solution {
    let mut machine_assignment = HashMap::with_capacity(instance.total_operations());
    for op in instance.operations() {
        let eligible = instance.eligible_machines(op);
        machine_assignment.insert(op, *eligible.choose(rng).unwrap());
    }

    Solution {
        machine_assignment,
        operation_order: random_order(instance, &HashSet::new(), rng),
    }
}

/// Builds a random precedence-respecting dispatch order.
///
/// Repeatedly picks from the ready set (operations whose predecessor is
/// absent or already placed). When the ready set intersects `preferred`,
/// the pick is uniform over that intersection; otherwise uniform over the
/// whole ready set. An empty `preferred` set gives the plain randomized
/// topological sort; a non-empty one concentrates the order randomness on
/// the marked operations (used by perturbation).
pub(crate) fn random_order<R: Rng>(
    instance: &Instance,
    preferred: &HashSet<usize>,
    rng: &mut R,
) -> Vec<usize> {
    let mut remaining: Vec<usize> = instance.operations().collect();
    let mut placed: HashSet<usize> = HashSet::with_capacity(remaining.len());
    let mut order = Vec::with_capacity(remaining.len());

    while !remaining.is_empty() {
        let ready: Vec<usize> = remaining
            .iter()
            .copied()
            .filter(|&op| instance.predecessor(op).map_or(true, |p| placed.contains(&p)))
            .collect();
        let marked: Vec<usize> = ready
            .iter()
            .copied()
            .filter(|op| preferred.contains(op))
            .collect();

        // Ready is never empty: chain precedence cannot deadlock.
        let chosen = if marked.is_empty() {
            *ready.choose(rng).unwrap()
        } else {
            *marked.choose(rng).unwrap()
        };

        let idx = remaining.iter().position(|&op| op == chosen).unwrap();
        remaining.remove(idx);
        placed.insert(chosen);
        order.push(chosen);
    }

    order
}
