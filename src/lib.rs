//! Flexible job shop scheduling via iterated local search (ILS).
//!
//! Each job is an ordered chain of operations; each operation may run on any
//! of several eligible machines at a machine-specific duration, and every
//! machine processes one operation at a time. The crate searches for a
//! low-makespan schedule with a single-threaded ILS: random feasible start,
//! one-sweep machine-reassignment local search, and a perturb/improve/accept
//! loop with stagnation-based termination.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Instance`, `Solution`, `Schedule`,
//!   `Assignment`
//! - **`solver`**: Search components — initial generation, makespan
//!   evaluation, perturbation, local search, and the `IlsSolver` driver
//! - **`timeline`**: Per-machine timeline rows for external renderers
//! - **`error`**: Fatal error kinds (infeasible instance, broken solution)
//!
//! # Example
//!
//! ```
//! use fjsp_ils::models::Instance;
//! use fjsp_ils::solver::{IlsConfig, IlsSolver};
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//!
//! let instance = Instance::builder(2, 2)
//!     .with_job(vec![vec![(1, 10), (2, 12)], vec![(2, 5)]])
//!     .with_job(vec![vec![(1, 7)], vec![(1, 4), (2, 4)]])
//!     .build()
//!     .unwrap();
//!
//! let solver = IlsSolver::new(IlsConfig::default().with_max_iterations(50));
//! let mut rng = SmallRng::seed_from_u64(7);
//! let result = solver.run(&instance, &mut rng).unwrap();
//! assert!(result.makespan >= 10);
//! ```
//!
//! # References
//!
//! - Lourenço, Martin & Stützle (2003), "Iterated Local Search",
//!   Handbook of Metaheuristics
//! - Brandimarte (1993), "Routing and scheduling in a flexible job shop
//!   by tabu search"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod error;
pub mod models;
pub mod solver;
pub mod timeline;
