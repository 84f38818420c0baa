//! scoring — ability-to-report transformation and grade banding.
//!
//! Purpose
//! -------
//! Collect everything that happens after estimation: standardizing
//! fitted abilities onto the Ball scale, interpolating the bounded
//! proportional score, assigning grade bands, and ranking the cohort
//! into the final report rows, together with the subtree's validation
//! and error handling, including Python bridges for PyO3-based bindings.
//!
//! Key behaviors
//! -------------
//! - Expose the score transformer via [`ScoreReport`] and its
//!   constructor
//!   [`ScoreReport::from_abilities`](transform::ScoreReport::from_abilities),
//!   which emits one [`ScoreRecord`] per person in submission order.
//! - Centralize cohort input guards in [`validate_scoring_input`], so
//!   shape, finiteness, and ceiling checks happen once before any
//!   statistics are computed.
//! - Provide configurable grade banding through [`GradeScale`] (default
//!   report bands plus validated custom tables) and the [`Grade`] label
//!   type.
//! - Provide a dedicated error type [`ScoreError`] and result alias
//!   [`ScoreResult`], plus a conversion layer to Python exceptions when
//!   the `python-bindings` feature is enabled.
//!
//! Invariants & assumptions
//! ------------------------
//! - Abilities entering this subtree are finite, one per person, in the
//!   same order as the response matrix's rows; the transformer calls
//!   [`validate_scoring_input`] before computing anything.
//! - Scoring reports failures via [`ScoreResult`] and never panics on
//!   user-facing invalid inputs.
//! - Randomness (the tie-breaking jitter) always flows through a
//!   seedable RNG so regression tests can pin exact output.
//! - At the Python boundary, all [`ScoreError`] values are mapped into
//!   `PyValueError` with the Rust `Display` message preserved verbatim.
//!
//! Conventions
//! -----------
//! - This subtree is focused on *reporting*; estimation lives under
//!   `rasch` and returns the ability vector this subtree consumes.
//! - Error messages are phrased in terms of domain constraints such as
//!   "abilities must be finite" or "bounds must be strictly ascending".
//! - Rows stay in submission order; ranking is encoded in the `rank`
//!   field rather than by reordering.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use rasch_scoring::scoring::{GradeScale, ScoreReport};
//!
//!   # let thetas = vec![0.0_f64, 0.4];
//!   # let persons: Vec<String> = vec!["ana".into(), "bo".into()];
//!   let report =
//!       ScoreReport::from_abilities(&thetas, &persons, 30.0, Some(7), &GradeScale::default())?;
//!   # Ok::<(), rasch_scoring::scoring::ScoreError>(())
//!   ```
//!
//!   and only refers to `scoring::errors` or `scoring::validation`
//!   directly when matching on [`ScoreError`] or reusing
//!   [`validate_scoring_input`].
//! - Python bindings expose a thin `score` function around the same
//!   entry point; they rely on `From<ScoreError> for PyErr` to raise
//!   `ValueError` instances instead of returning [`ScoreResult`]
//!   explicitly.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`errors`] verify `Display` messages and payload
//!   embedding for [`ScoreError`] variants.
//! - Unit tests in [`validation`] exercise all branches of
//!   [`validate_scoring_input`].
//! - Unit tests in [`grade`] pin the default band edges and custom-table
//!   construction; tests in [`transform`] cover standardization, jitter,
//!   proportional scores, ranking, and end-to-end report assembly.

pub mod errors;
pub mod grade;
pub mod transform;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{ScoreError, ScoreResult};
pub use self::grade::{Grade, GradeScale};
pub use self::transform::{ScoreRecord, ScoreReport};
pub use self::validation::validate_scoring_input;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rasch_scoring::scoring::prelude::*;
//
// to import the main scoring surface in a single line.

pub mod prelude {
    pub use super::errors::{ScoreError, ScoreResult};
    pub use super::grade::{Grade, GradeScale};
    pub use super::transform::{ScoreRecord, ScoreReport};
}
