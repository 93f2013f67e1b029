//! Candidate solution model.
//!
//! A solution pairs a machine assignment (operation → eligible machine)
//! with a global dispatch order (a precedence-respecting permutation of all
//! operations). Both invariants hold after generation, perturbation, and
//! every local-search move; a violation is a defect in the producing
//! operator, not a runtime condition.
//!
//! Solutions are value types: `clone()` yields a fully independent copy
//! (both containers own their data), so search operators can mutate a
//! clone without aliasing the accepted best.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::Instance;

/// A candidate schedule: machine assignment plus dispatch order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// Operation → assigned machine.
    pub machine_assignment: HashMap<usize, usize>,
    /// Global execution order over all operations.
    pub operation_order: Vec<usize>,
}

impl Solution {
    /// Whether the order is a permutation of the instance's operations.
    pub fn is_permutation(&self, instance: &Instance) -> bool {
        if self.operation_order.len() != instance.total_operations() {
            return false;
        }
        let seen: HashSet<usize> = self.operation_order.iter().copied().collect();
        instance.operations().all(|op| seen.contains(&op))
    }

    /// Whether every operation appears after its predecessor in the order.
    pub fn respects_precedence(&self, instance: &Instance) -> bool {
        let mut placed = HashSet::with_capacity(self.operation_order.len());
        for &op in &self.operation_order {
            if let Some(pred) = instance.predecessor(op) {
                if !placed.contains(&pred) {
                    return false;
                }
            }
            placed.insert(op);
        }
        true
    }

    /// Whether every operation is assigned to a machine that can run it.
    pub fn respects_eligibility(&self, instance: &Instance) -> bool {
        instance.operations().all(|op| {
            self.machine_assignment
                .get(&op)
                .is_some_and(|&m| instance.is_eligible(op, m))
        })
    }

    /// All structural invariants at once.
    pub fn is_valid(&self, instance: &Instance) -> bool {
        self.is_permutation(instance)
            && self.respects_precedence(instance)
            && self.respects_eligibility(instance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_instance() -> Instance {
        Instance::builder(2, 2)
            .with_job(vec![vec![(1, 10), (2, 12)], vec![(2, 8)]])
            .with_job(vec![vec![(1, 5)], vec![(1, 6), (2, 6)]])
            .build()
            .unwrap()
    }

    fn sample_solution() -> Solution {
        Solution {
            machine_assignment: [(1, 1), (2, 2), (3, 1), (4, 2)].into(),
            operation_order: vec![3, 1, 4, 2],
        }
    }

    #[test]
    fn test_valid_solution() {
        let inst = sample_instance();
        let sol = sample_solution();
        assert!(sol.is_permutation(&inst));
        assert!(sol.respects_precedence(&inst));
        assert!(sol.respects_eligibility(&inst));
        assert!(sol.is_valid(&inst));
    }

    #[test]
    fn test_not_a_permutation() {
        let inst = sample_instance();
        let mut sol = sample_solution();
        sol.operation_order = vec![1, 1, 2, 3]; // duplicate
        assert!(!sol.is_permutation(&inst));
        sol.operation_order = vec![1, 2, 3]; // too short
        assert!(!sol.is_permutation(&inst));
    }

    #[test]
    fn test_precedence_breach_detected() {
        let inst = sample_instance();
        let mut sol = sample_solution();
        sol.operation_order = vec![2, 1, 3, 4]; // 2 before its predecessor 1
        assert!(!sol.respects_precedence(&inst));
        assert!(!sol.is_valid(&inst));
    }

    #[test]
    fn test_ineligible_assignment_detected() {
        let inst = sample_instance();
        let mut sol = sample_solution();
        sol.machine_assignment.insert(2, 1); // op 2 only runs on machine 2
        assert!(!sol.respects_eligibility(&inst));
    }

    #[test]
    fn test_missing_assignment_detected() {
        let inst = sample_instance();
        let mut sol = sample_solution();
        sol.machine_assignment.remove(&3);
        assert!(!sol.respects_eligibility(&inst));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = sample_solution();
        let copy = original.clone();
        original.machine_assignment.insert(1, 2);
        original.operation_order.swap(2, 3);
        assert_eq!(copy.machine_assignment[&1], 1);
        assert_eq!(copy.operation_order, vec![3, 1, 4, 2]);
    }
}
