//! Machine-reassignment local search.
//!
//! One deterministic sweep over the neighborhood of single-operation
//! machine reassignments: operations in ascending id order, eligible
//! machines in ascending machine order. Each candidate clones the best
//! solution found so far in the sweep and changes exactly one assignment;
//! it is adopted only on a strictly smaller makespan, so ties never churn
//! the solution.
//!
//! The sweep runs once per call — it does not loop to a local optimum.
//! Escaping local optima is the ILS controller's job, through repeated
//! perturb-and-improve cycles.

use super::evaluate::evaluate;
use crate::error::EvaluationError;
use crate::models::{Instance, Solution};

/// Runs one improvement sweep and returns the best solution found.
///
/// The result equals the input (as a copy) when no reassignment improves
/// the makespan. The input is never mutated, and the dispatch order is
/// left untouched — this neighborhood only moves assignments.
pub fn improve(instance: &Instance, solution: &Solution) -> Result<Solution, EvaluationError> {
    let mut best = solution.clone();
    let mut best_makespan = evaluate(instance, solution)?;

    for op in instance.operations() {
        let current = best.machine_assignment[&op];
        for machine in instance.eligible_machines(op) {
            if machine == current {
                continue;
            }
            let mut candidate = best.clone();
            candidate.machine_assignment.insert(op, machine);
            let makespan = evaluate(instance, &candidate)?;
            if makespan < best_makespan {
                best = candidate;
                best_makespan = makespan;
            }
        }
    }

    Ok(best)
}

/// Runs one improvement sweep and also returns the resulting makespan.
pub fn improve_with_makespan(
    instance: &Instance,
    solution: &Solution,
) -> Result<(Solution, u64), EvaluationError> {
    let improved = improve(instance, solution)?;
    let makespan = evaluate(instance, &improved)?;
    Ok((improved, makespan))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::generate_initial;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn skewed_instance() -> Instance {
        // Machine 2 dominates machine 1 for job 1; an assignment stuck on
        // machine 1 leaves obvious improving moves.
        Instance::builder(2, 2)
            .with_job(vec![vec![(1, 100), (2, 10)], vec![(1, 100), (2, 10)]])
            .with_job(vec![vec![(1, 10)], vec![(1, 10)]])
            .build()
            .unwrap()
    }

    #[test]
    fn test_improves_bad_assignment() {
        let inst = skewed_instance();
        let sol = Solution {
            machine_assignment: [(1, 1), (2, 1), (3, 1), (4, 1)].into(),
            operation_order: vec![1, 2, 3, 4],
        };
        let before = evaluate(&inst, &sol).unwrap();
        let (improved, after) = improve_with_makespan(&inst, &sol).unwrap();
        assert!(after < before);
        // Both job 1 operations move to machine 2.
        assert_eq!(improved.machine_assignment[&1], 2);
        assert_eq!(improved.machine_assignment[&2], 2);
        assert!(improved.is_valid(&inst));
    }

    #[test]
    fn test_never_worsens() {
        let inst = skewed_instance();
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..30 {
            let sol = generate_initial(&inst, &mut rng);
            let before = evaluate(&inst, &sol).unwrap();
            let after = evaluate(&inst, &improve(&inst, &sol).unwrap()).unwrap();
            assert!(after <= before);
        }
    }

    #[test]
    fn test_order_untouched() {
        let inst = skewed_instance();
        let mut rng = SmallRng::seed_from_u64(8);
        let sol = generate_initial(&inst, &mut rng);
        let improved = improve(&inst, &sol).unwrap();
        assert_eq!(improved.operation_order, sol.operation_order);
    }

    #[test]
    fn test_tie_not_adopted() {
        // A lone operation with two equally fast machines: reassigning is
        // an exact tie, so the original assignment survives.
        let inst = Instance::builder(2, 1)
            .with_job(vec![vec![(1, 5), (2, 5)]])
            .build()
            .unwrap();
        let sol = Solution {
            machine_assignment: [(1, 1)].into(),
            operation_order: vec![1],
        };
        let improved = improve(&inst, &sol).unwrap();
        assert_eq!(improved, sol);
    }

    #[test]
    fn test_noop_when_single_eligible_machine() {
        let inst = Instance::builder(2, 2)
            .with_job(vec![vec![(1, 3)], vec![(1, 4)]])
            .with_job(vec![vec![(2, 6)], vec![(2, 2)]])
            .build()
            .unwrap();
        let mut rng = SmallRng::seed_from_u64(2);
        let sol = generate_initial(&inst, &mut rng);
        let improved = improve(&inst, &sol).unwrap();
        assert_eq!(improved, sol);
    }

    #[test]
    fn test_deterministic() {
        let inst = skewed_instance();
        let mut rng = SmallRng::seed_from_u64(17);
        let sol = generate_initial(&inst, &mut rng);
        assert_eq!(improve(&inst, &sol).unwrap(), improve(&inst, &sol).unwrap());
    }
}
