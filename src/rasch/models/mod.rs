//! models — the user-facing Rasch estimator.
//!
//! Purpose
//! -------
//! Expose the complete Rasch model API: construct a model for a fixed
//! item count, fit it to a graded response matrix (full-batch or
//! mini-batch), and read back fitted abilities, difficulties, and the
//! fit report. This layer sits on top of `rasch::core`, wiring the
//! likelihood and sampling primitives into the generic log-likelihood
//! optimizer.
//!
//! Key behaviors
//! -------------
//! - Expose [`RaschModel`], which implements [`LogLikelihood`] over
//!   response slices and provides `fit`, `beta`, and `theta`.
//! - Decide full-batch versus mini-batch fitting from the options and
//!   population size, with warm-started rounds and an early objective
//!   stop in the mini-batch path.
//! - Summarize every fit in a [`FitReport`] (mode, convergence,
//!   degeneracy, final objective, iteration count, solver status).
//!
//! Invariants & assumptions
//! ------------------------
//! - Response matrices are validated binary matrices from
//!   `rasch::core::matrix`; the model additionally checks them against
//!   its own item count.
//! - Unbounded optimizer vectors have length `n_items + n_persons` with
//!   finite entries; this is enforced by [`LogLikelihood::check`].
//! - Every decoded iterate lies inside the parameter box, so the
//!   objective is finite throughout an optimization run.
//! - A model instance is single-owner during `fit`; concurrent use of
//!   the same instance is not supported.
//!
//! Conventions
//! -----------
//! - Optimization is performed in unbounded space with the layout
//!   `[beta (n_items) | theta (n_persons)]`; fits start from the zero
//!   vector.
//! - An exhausted iteration cap is reported (`converged == false`), not
//!   raised as an error; callers decide how much to trust the
//!   estimates.
//! - Errors are reported as `RaschResult` / `OptResult`; panics
//!   indicate programming errors, not bad user data.
//!
//! Downstream usage
//! ----------------
//! - Build a [`RaschModel`] via `RaschModel::new(n_items, options)`,
//!   then call `fit(&matrix)` and read `beta()` / `theta()` / `report`.
//! - The scoring layer consumes the fitted abilities together with the
//!   report's degeneracy flag; Python bindings depend on the items
//!   re-exported below or via the [`prelude`].
//!
//! Testing notes
//! -------------
//! - Unit tests in [`rasch`] cover [`LogLikelihood`] conformance
//!   (`check`, `value`, `grad` vs. finite differences), full-batch
//!   convergence and ordering behavior, mini-batch mode selection and
//!   seeded reproducibility, the degeneracy flag, and accessor errors.
//! - The crate-level integration tests exercise the full pipeline
//!   (key → matrix → fit → scores) through this API.

pub mod rasch;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::rasch::{FitReport, RaschModel, MINI_BATCH_INNER_ITERS};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rasch_scoring::rasch::models::prelude::*;
//
// to import the main Rasch model surface in a single line.

pub mod prelude {
    pub use super::rasch::{FitReport, RaschModel};
}
