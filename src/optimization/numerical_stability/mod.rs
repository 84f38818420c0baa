//! numerical_stability — guarded nonlinear transforms for model fitting.
//!
//! Purpose
//! -------
//! Collect the numerically delicate scalar transforms shared by the Rasch
//! likelihood code and the optimizer layer, so that saturation cutoffs and
//! box-bound policies live in exactly one place. Downstream modules can
//! assume well-conditioned `f64` arithmetic without re-deriving guards.
//!
//! Key behaviors
//! -------------
//! - Provide a logistic evaluation (`saturating_logistic`) that saturates
//!   to exactly `0.0` / `1.0` outside ±20 logits instead of exponentiating
//!   extreme arguments.
//! - Implement the smooth box-bound reparameterization
//!   (`bounded_from_unbounded`) mapping unconstrained optimizer space into
//!   the interval [−5, 5], together with its derivative (`bounded_slope`)
//!   for chain-rule gradient propagation.
//! - Centralize the numeric policy constants (`SATURATION_CUTOFF`,
//!   `PARAM_BOUND`) so the likelihood, the fitting layer, and the tests
//!   share a single definition of "saturated" and "in bounds".
//!
//! Invariants & assumptions
//! ------------------------
//! - All public transforms assume finite `f64` inputs; shape and domain
//!   validation is enforced in the Rasch and optimizer layers, not here.
//! - `bounded_from_unbounded(0.0) == 0.0`, so a zero-initialized
//!   parameter vector is preserved by the reparameterization.
//! - Because every bounded parameter lies in [−5, 5], any difference of
//!   two such parameters stays strictly inside the saturation cutoff and
//!   the likelihood remains finite at every reachable iterate.
//!
//! Conventions
//! -----------
//! - All routines are pure scalar functions; vectorized use is left to
//!   callers iterating `ndarray` structures.
//! - This module never logs, performs I/O, or touches global state; it is
//!   suitable for use inside tight inner loops.
//! - Panics and `unsafe` are avoided under normal usage; invalid inputs
//!   should be caught by upstream validation and surfaced as
//!   domain-specific error types.
//!
//! Downstream usage
//! ----------------
//! - `rasch::core::likelihood` evaluates response probabilities through
//!   `saturating_logistic`.
//! - `rasch::models` maps optimizer iterates into model space via
//!   `bounded_from_unbounded` and scales analytic gradients by
//!   `bounded_slope`.
//! - Higher-level front-ends are expected to depend only on the
//!   re-exported surface or the prelude, not on internal implementation
//!   details of [`transformations`].
//!
//! Testing notes
//! -------------
//! - Unit tests in [`transformations`] cover:
//!   - saturation behavior at and beyond the ±20 cutoff,
//!   - agreement of the guarded logistic with the naïve formula on the
//!     interior,
//!   - range, centering, and monotonicity of the box-bound transform,
//!   - correctness of `bounded_slope` via finite-difference quotients.
//! - Higher-level tests in the Rasch modules exercise these transforms
//!   through the likelihood and the fitting pipeline rather than
//!   re-testing the scalar primitives.

pub mod transformations;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::transformations::{
    bounded_from_unbounded, bounded_slope, saturating_logistic, PARAM_BOUND, SATURATION_CUTOFF,
};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rasch_scoring::optimization::numerical_stability::prelude::*;
//
// to import the main numerical-stability surface in a single line.

pub mod prelude {
    pub use super::transformations::{
        bounded_from_unbounded, bounded_slope, saturating_logistic, PARAM_BOUND,
        SATURATION_CUTOFF,
    };
}
