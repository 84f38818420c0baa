//! scoring::errors — score-transformer error types and Python bridges.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for the score transformer and
//! its grade scale, together with a conversion layer to Python exceptions
//! for PyO3-based bindings. This keeps scoring-specific validation
//! failures localized while exposing a clean error surface to both Rust
//! and Python.
//!
//! Key behaviors
//! -------------
//! - Define [`ScoreResult`] and [`ScoreError`] as the canonical result and
//!   error types for score transformation and grade-scale construction.
//! - Attach human-readable `Display` messages to each error variant so
//!   that diagnostics are meaningful without additional context.
//! - Implement `From<ScoreError> for PyErr` to map Rust-side validation
//!   errors into `PyValueError` values visible to Python callers.
//!
//! Invariants & assumptions
//! ------------------------
//! - Scoring modules validate their inputs (cohort shape, finiteness,
//!   grade tables) and return [`ScoreResult<T>`] instead of panicking.
//! - `ScoreError` values are small, cheap to clone, and suitable for use
//!   in both unit tests and higher-level orchestration code.
//! - The Python-facing conversion preserves the Rust error message
//!   verbatim inside the `PyValueError` string representation.
//!
//! Conventions
//! -----------
//! - This module is focused on scoring errors; estimation errors
//!   (`RaschError`, `OptError`) live in their own `errors` modules under
//!   the relevant subtrees.
//! - Error messages are phrased in terms of domain constraints (e.g.,
//!   "abilities must be finite", "bounds must be strictly ascending")
//!   rather than low-level details.
//!
//! Downstream usage
//! ----------------
//! - The score transformer and its validation helper return
//!   [`ScoreResult<T>`] to propagate failures cleanly to callers.
//! - Python bindings expose functions which return reports or raise
//!   `ValueError` instances; they do not pattern-match on [`ScoreError`]
//!   directly.
//!
//! Testing notes
//! -------------
//! - Unit tests verify that each variant's `Display` message embeds its
//!   payload (offending value, index, or counts).

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type ScoreResult<T> = Result<T, ScoreError>;

/// ScoreError — error conditions for the score transformer.
///
/// Purpose
/// -------
/// Represent all validation failures that can occur when turning a fitted
/// ability vector into a ranked score report, including malformed cohort
/// inputs and malformed grade tables.
///
/// Variants
/// --------
/// - `EmptyScores`
///   The ability vector is empty; a cohort needs at least one person.
/// - `NonFiniteTheta { index, value }`
///   An ability entry is NaN or ±∞ and cannot be standardized.
/// - `PersonCountMismatch { thetas, persons }`
///   The ability vector and the person-label list disagree in length.
/// - `InvalidMaxPossible { value }`
///   The maximum possible score is NaN or ±∞, which would poison the
///   proportional score.
/// - `EmptyGradeTable`
///   A grade scale was built from an empty (bound, label) table.
/// - `NonFiniteGradeBound { index, value }`
///   A grade band's lower bound is NaN or ±∞.
/// - `NonAscendingGradeBounds { index }`
///   A grade band's lower bound does not strictly exceed its
///   predecessor's.
/// - `EmptyGradeLabel { index }`
///   A grade band's label is empty after trimming.
///
/// Invariants
/// ----------
/// - Each variant carries just enough information (offending value,
///   index, or counts) for downstream logging and debugging without
///   leaking large data structures.
///
/// Notes
/// -----
/// - Implements [`std::error::Error`] and [`std::fmt::Display`] for
///   idiomatic `?`-based propagation.
/// - A blanket [`From<ScoreError>`] for `PyErr` maps all cases to
///   `PyValueError` at the Python boundary, with the message taken from
///   the `Display` implementation.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreError {
    //------ Cohort input validation ------
    EmptyScores,
    NonFiniteTheta { index: usize, value: f64 },
    PersonCountMismatch { thetas: usize, persons: usize },
    InvalidMaxPossible { value: f64 },
    //------ Grade-scale construction ------
    EmptyGradeTable,
    NonFiniteGradeBound { index: usize, value: f64 },
    NonAscendingGradeBounds { index: usize },
    EmptyGradeLabel { index: usize },
}

impl std::error::Error for ScoreError {}

impl std::fmt::Display for ScoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreError::EmptyScores => {
                write!(f, "Need at least one ability to score a cohort.")
            }
            ScoreError::NonFiniteTheta { index, value } => {
                write!(f, "Invalid ability {value} at index {index}. Must be a finite number.")
            }
            ScoreError::PersonCountMismatch { thetas, persons } => {
                write!(
                    f,
                    "Ability and person counts disagree: {thetas} abilities vs {persons} labels."
                )
            }
            ScoreError::InvalidMaxPossible { value } => {
                write!(f, "Invalid max possible score: {value}. Must be a finite number.")
            }
            ScoreError::EmptyGradeTable => {
                write!(f, "Grade scale needs at least one (bound, label) band.")
            }
            ScoreError::NonFiniteGradeBound { index, value } => {
                write!(f, "Invalid grade bound {value} at band {index}. Must be a finite number.")
            }
            ScoreError::NonAscendingGradeBounds { index } => {
                write!(f, "Grade bounds must be strictly ascending; band {index} does not increase.")
            }
            ScoreError::EmptyGradeLabel { index } => {
                write!(f, "Grade label at band {index} must not be empty.")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<ScoreError> for PyErr {
    fn from(err: ScoreError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
