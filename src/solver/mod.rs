//! Search components.
//!
//! Everything operates on the same explicit [`crate::models::Solution`]
//! value — no component keeps hidden state, and mutating operators work
//! on clones, never on their input:
//!
//! - [`generate_initial`]: random feasible starting point
//! - [`evaluate`] / [`decode`]: single-pass makespan oracle and schedule
//!   decoder
//! - [`perturb`]: machine + order shake of a copy
//! - [`improve`]: one deterministic machine-reassignment sweep
//! - [`IlsSolver`]: the iterate-accept-or-revert driver
//!
//! All random choices draw from a caller-injected [`rand::Rng`], so a
//! seeded generator reproduces a run exactly.

mod evaluate;
mod generate;
mod ils;
mod local_search;
mod perturb;

pub use evaluate::{decode, evaluate};
pub use generate::generate_initial;
pub use ils::{IlsConfig, IlsResult, IlsSolver};
pub use local_search::{improve, improve_with_makespan};
pub use perturb::perturb;
