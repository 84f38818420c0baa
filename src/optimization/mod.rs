//! optimization — the estimation machinery under the Rasch layer.
//!
//! Purpose
//! -------
//! House everything the model layer needs to turn a likelihood into
//! fitted parameters: an argmin-backed L-BFGS wrapper
//! ([`loglik_optimizer`]), the saturating logistic and box-bound
//! reparameterization ([`numerical_stability`]), and one error surface
//! for the whole stack ([`errors`]).
//!
//! Key behaviors
//! -------------
//! - [`loglik_optimizer`] maximizes a caller's log-likelihood behind a
//!   single trait and entrypoint, with configurable line search and
//!   stopping rules.
//! - [`numerical_stability`] keeps probability and transform
//!   arithmetic exact at the extremes: logistic saturation beyond the
//!   cutoff, and the saturating map between unconstrained solver space
//!   and the bounded parameter box.
//! - [`errors`] folds configuration mistakes, numerical failures, and
//!   solver breakdowns into [`errors::OptError`] with the
//!   [`errors::OptResult`] alias.
//!
//! Invariants & assumptions
//! ------------------------
//! - The solver iterates over an unconstrained vector; decoding into
//!   bounded abilities and difficulties is the model layer's job, using
//!   the transforms here.
//! - Invalid state is expressed as an error value at every layer; no
//!   panics, no `unsafe`.
//! - No I/O and no logging here beyond the optional `obs_slog` solver
//!   observer; reporting belongs to the front-ends.
//!
//! Downstream usage
//! ----------------
//! - `rasch::models` implements `LogLikelihood` and calls `maximize`,
//!   once per full-batch fit or once per mini-batch round.
//! - `rasch::core::likelihood` evaluates response probabilities through
//!   the saturating logistic; `rasch::core::params` decodes solver
//!   iterates through the bounding transform.
//! - Front-ends import the curated surface via `optimization::prelude`
//!   or the per-submodule preludes.
//!
//! Testing notes
//! -------------
//! - Each submodule tests its own concern: transform identities and
//!   derivative checks in `numerical_stability`, solver wiring and
//!   validation in `loglik_optimizer`.
//! - Whole-stack behavior is covered by the integration tests that fit
//!   graded matrices through the Rasch layer.

pub mod errors;
pub mod loglik_optimizer;
pub mod numerical_stability;

// ---- Convenience prelude ---------------------------------------------------
//
// `use rasch_scoring::optimization::prelude::*;` pulls in the optimizer
// surface, the numerical helpers, and the error types at once.

pub mod prelude {
    pub use super::errors::{OptError, OptResult};
    pub use super::loglik_optimizer::prelude::*;
    pub use super::numerical_stability::prelude::*;
}
