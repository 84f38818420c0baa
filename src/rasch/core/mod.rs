//! core — shared Rasch grading data, parameters, and likelihood.
//!
//! Purpose
//! -------
//! Collect the core building blocks for dichotomous Rasch scoring:
//! answer-key and submission containers, the graded response matrix and
//! its mini-batch slices, parameter shapes, the joint likelihood with
//! its analytic gradient, fit configuration, and batch sampling. The
//! model layer and the Python bindings build on top of these
//! primitives.
//!
//! Key behaviors
//! -------------
//! - Normalize raw answers into comparable tokens ([`AnswerKey`],
//!   [`Submission`]) and grade them into a binary matrix
//!   ([`ResponseMatrix`]), with mini-batch views carrying their person
//!   indices ([`ResponseSlice`]).
//! - Decode the optimizer's flat `[beta | theta]` vector into bounded
//!   model parameters ([`RaschParams`]).
//! - Evaluate the joint negative log-likelihood and its gradient
//!   ([`neg_log_likelihood`], [`grad_neg_log_likelihood`]) plus the
//!   scalar response law ([`response_probability`]).
//! - Configure estimation runs ([`FitOptions`], [`FitMode`]) and draw
//!   reproducible person batches ([`PersonSampler`]).
//!
//! Invariants & assumptions
//! ------------------------
//! - Response matrices are strictly binary (`0.0` / `1.0`); any other
//!   value, NaN included, is rejected at construction.
//! - Parameters decoded through [`RaschParams::from_unbounded`] lie
//!   inside the parameter box, so ability/difficulty gaps stay below
//!   the logistic saturation cutoff and the likelihood stays finite at
//!   every reachable iterate.
//! - Slices carry the total population count alongside their person
//!   indices, so gradients over a batch still address the full
//!   `[beta | theta]` vector.
//! - Dimension relationships (items vs. `beta`, population vs. `theta`,
//!   rows vs. person indices) are enforced by constructors and the
//!   likelihood entry points; mismatches surface as `RaschError` rather
//!   than being silently truncated.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based throughout. Person order follows submission
//!   order; item order follows question order.
//! - Answer tokens are trimmed and uppercased before comparison; key
//!   entries must be ASCII-alphanumeric, submission entries may be
//!   anything (a malformed entry is simply wrong).
//! - The flat parameter vector is laid out `[beta (n_items) | theta
//!   (n_persons)]`; the likelihood works in bounded model space while
//!   the optimizer works in unbounded space.
//! - This module avoids I/O and logging; it operates purely on
//!   `ndarray` containers and scalar values, reporting error conditions
//!   via `RaschResult`.
//!
//! Downstream usage
//! ----------------
//! - Grading code builds an [`AnswerKey`] and [`Submission`]s, then a
//!   [`ResponseMatrix`]; fitting code slices it (full population or
//!   sampled batches via [`PersonSampler`]) and evaluates the
//!   likelihood on each optimizer iterate through [`RaschParams`].
//! - `rasch::models` drives the full estimation loop on top of these
//!   pieces and is the intended entry point for callers; Python
//!   bindings depend on the types re-exported below or via the
//!   [`prelude`] rather than reaching into submodules directly.
//!
//! Testing notes
//! -------------
//! - Unit tests in submodules cover: token normalization and key
//!   validation, grading against hand-checked grids, binary-matrix
//!   validation (NaN included), slice construction and ordering,
//!   parameter decoding, hand-computed likelihood values, saturation
//!   edge cases, gradient-versus-finite-difference agreement, option
//!   validation and defaults, and seeded sampling reproducibility.
//! - The integration tests at the model layer exercise the full
//!   pipeline (key → matrix → fit → scores) on top of this module.

pub mod key;
pub mod likelihood;
pub mod matrix;
pub mod options;
pub mod params;
pub mod sampling;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::key::{AnswerKey, Submission};
pub use self::likelihood::{grad_neg_log_likelihood, neg_log_likelihood, response_probability};
pub use self::matrix::{ResponseMatrix, ResponseSlice};
pub use self::options::{FitMode, FitOptions};
pub use self::params::RaschParams;
pub use self::sampling::PersonSampler;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rasch_scoring::rasch::core::prelude::*;
//
// to import the main Rasch core surface in a single line.

pub mod prelude {
    pub use super::key::{AnswerKey, Submission};
    pub use super::likelihood::{grad_neg_log_likelihood, neg_log_likelihood, response_probability};
    pub use super::matrix::{ResponseMatrix, ResponseSlice};
    pub use super::options::{FitMode, FitOptions};
    pub use super::params::RaschParams;
    pub use super::sampling::PersonSampler;
}
