//! loglik_optimizer — argmin-backed maximization of log-likelihoods.
//!
//! Purpose
//! -------
//! Run L-BFGS on a caller-supplied log-likelihood behind one trait and
//! one entrypoint. Implement [`LogLikelihood`] for a model, pick stopping
//! rules and a line search through [`MLEOptions`], and call [`maximize`];
//! everything argmin-specific (solver generics, executor state, cost-side
//! sign conventions) stays inside this module.
//!
//! Key behaviors
//! -------------
//! - Flip the maximized log-likelihood `l(theta)` into the minimized cost
//!   `c(theta) = -l(theta)` in [`adapter`], negating analytic gradients
//!   to match.
//! - Fall back to finite differences of the cost when a model leaves
//!   [`LogLikelihood::grad`] unimplemented, validating the result before
//!   the solver sees it.
//! - Build an L-BFGS solver for the configured
//!   [`traits::LineSearcher`] in [`builders`], execute it in
//!   [`run::run_lbfgs`], and collapse argmin's terminal state into an
//!   [`OptimOutcome`] with the sign flipped back to likelihood space.
//! - Validate stopping rules on construction ([`Tolerances`],
//!   [`MLEOptions`]) and solver output on the way out ([`validation`]).
//!
//! Invariants & assumptions
//! ------------------------
//! - Callers implement the log-likelihood and, when available, its
//!   gradient `dl/dtheta`; nothing outside [`adapter`] ever works with
//!   the cost directly.
//! - [`LogLikelihood::value`] and [`LogLikelihood::grad`] report bad
//!   inputs as `OptError` values rather than panicking.
//! - `theta` lives in an unconstrained space. Models with bounded
//!   parameters decode inside their own `value`/`grad`; the box
//!   transform used by the Rasch layer is in
//!   [`numerical_stability`](crate::optimization::numerical_stability).
//! - [`OptimOutcome::value`] is the best log-likelihood, never the cost.
//!
//! Conventions
//! -----------
//! - [`Theta`] and [`Grad`] alias `Array1<f64>`; a finite vector is
//!   assumed wherever validation has already passed.
//! - Failures travel as [`OptResult`](crate::optimization::errors::OptResult);
//!   argmin's own error type is converted at the boundary and never
//!   crosses it.
//!
//! Downstream usage
//! ----------------
//! - The Rasch fitting layer is the in-crate caller: full-batch fits run
//!   [`maximize`] once with a gradient tolerance and iteration cap, and
//!   mini-batch fits run it repeatedly over sampled person slices with a
//!   target objective so a round can stop early.
//! - External users need only the re-exported surface: [`maximize`],
//!   [`LogLikelihood`], [`MLEOptions`], [`Tolerances`], [`OptimOutcome`],
//!   and the aliases in [`types`].
//!
//! Testing notes
//! -------------
//! - [`builders`] tests pin solver construction and tolerance wiring;
//!   [`traits`] tests pin stopping-rule validation, line-search parsing,
//!   and the termination-to-convergence mapping; [`adapter`] tests pin
//!   the sign flips and the finite-difference fallback.
//! - The crate's integration tests drive this module end to end by
//!   fitting Rasch models under both line searches and both batching
//!   modes.

pub mod adapter;
pub mod api;
pub mod builders;
pub mod run;
pub mod traits;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::api::maximize;
pub use self::traits::{LineSearcher, LogLikelihood, MLEOptions, OptimOutcome, Tolerances};
pub use self::types::{Cost, DEFAULT_LBFGS_MEM, FnEvalMap, Grad, Theta};

// ---- Convenience prelude ---------------------------------------------------
//
// `use rasch_scoring::optimization::loglik_optimizer::prelude::*;` pulls in
// the whole optimizer surface at once.

pub mod prelude {
    pub use super::api::maximize;
    pub use super::traits::{LineSearcher, LogLikelihood, MLEOptions, OptimOutcome, Tolerances};
    pub use super::types::{Cost, Grad, Theta};
}
