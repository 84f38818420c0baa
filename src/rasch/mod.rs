//! rasch — dichotomous Rasch stack: grading, likelihood, models, errors.
//!
//! Purpose
//! -------
//! Provide a cohesive Rasch-scoring layer that bundles answer-key
//! grading, the binary response matrix, the joint likelihood, model
//! fitting, and shared error types under a single namespace. This is
//! the main entry point for ability/difficulty estimation in the crate,
//! and the surface most consumers (including Python bindings) should
//! depend on.
//!
//! Key behaviors
//! -------------
//! - Collect core building blocks in [`core`]: answer-key and
//!   submission normalization, graded response matrices and mini-batch
//!   slices, parameter decoding, the joint likelihood and gradient, fit
//!   configuration, and seeded person sampling.
//! - Expose the user-facing estimator in [`models`] via [`RaschModel`],
//!   including full-batch and mini-batch joint MLE and the per-fit
//!   [`FitReport`].
//! - Centralize Rasch-specific error types in [`errors`]
//!   ([`RaschError`] and the [`RaschResult`] alias) so callers see a
//!   uniform error surface across the stack.
//! - Re-export the everyday types directly from this module and via
//!   [`prelude`] for ergonomic imports in downstream crates and
//!   bindings.
//!
//! Invariants & assumptions
//! ------------------------
//! - Response matrices are strictly binary; answer comparison happens
//!   on trimmed, uppercased tokens so grading is whitespace- and
//!   case-insensitive.
//! - The optimizer's flat vector is laid out
//!   `[beta (n_items) | theta (n_persons)]` and every decoded iterate
//!   lies inside the parameter box, keeping the likelihood finite at
//!   all reachable points.
//! - Mini-batch slices carry their person indices plus the total
//!   population count, so batch gradients address the full parameter
//!   vector with zeros for unsampled persons.
//! - Dimension mismatches and malformed inputs surface as
//!   [`RaschError`] rather than panics; panics indicate programming
//!   errors.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based; person order follows submission order and
//!   item order follows question order.
//! - Fits start from the zero vector and report rather than raise when
//!   the iteration cap is exhausted.
//! - The stack itself performs no I/O; callers orchestrate data loading
//!   and any logging.
//!
//! Downstream usage
//! ----------------
//! - Typical end-to-end flow:
//!   1. Build an [`AnswerKey`] and one [`Submission`] per person.
//!   2. Grade them into a [`ResponseMatrix`].
//!   3. Construct a [`RaschModel`] with [`FitOptions`] and call
//!      `fit(&matrix)`.
//!   4. Read `beta()` / `theta()` and the [`FitReport`], then hand the
//!      abilities to the scoring layer.
//! - Python bindings import from this module (or its [`prelude`]) and
//!   rely on the `RaschError` conversion into `PyErr` defined in
//!   [`errors`].
//!
//! Testing notes
//! -------------
//! - Unit tests in [`core`] cover token normalization, grading,
//!   binary-matrix validation, slicing, parameter decoding, likelihood
//!   values and gradients, option validation, and seeded sampling.
//! - Unit tests in [`models`] cover [`LogLikelihood`] conformance,
//!   full-batch and mini-batch fitting behavior, and error paths.
//! - Unit tests in [`errors`] cover `Display` formatting and the
//!   `OptError` conversion. The crate-level integration tests exercise
//!   full pipelines through this module's public API.

pub mod core;
pub mod errors;
pub mod models;

// ---- Re-exports (primary public surface) ----------------------------------
//
// These are the “everyday” types most users need. More specialized items
// (likelihood functions, samplers, slices) remain under their respective
// submodules.

pub use self::core::{AnswerKey, FitMode, FitOptions, RaschParams, ResponseMatrix, Submission};

pub use self::errors::{RaschError, RaschResult};

pub use self::models::{FitReport, RaschModel};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rasch_scoring::rasch::prelude::*;
//
// to import the main Rasch surface in a single line, without pulling in
// lower-level internals.

pub mod prelude {
    pub use super::{
        AnswerKey, FitMode, FitOptions, FitReport, RaschError, RaschModel, RaschParams,
        RaschResult, ResponseMatrix, Submission,
    };
}
