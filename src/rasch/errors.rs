//! rasch::errors — shared error types and Python bridges for Rasch fitting.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias used across answer-key
//! handling, response-matrix construction, likelihood evaluation, and
//! model fitting, together with a conversion layer to Python exceptions
//! for PyO3-based bindings. This keeps input validation and runtime
//! failures localized while exposing a clean error surface to both Rust
//! and Python.
//!
//! Key behaviors
//! -------------
//! - Define [`RaschResult`] and [`RaschError`] as the canonical result and
//!   error types for the Rasch core and model layers.
//! - Attach human-readable `Display` messages to each error variant so
//!   that diagnostics are meaningful without additional context.
//! - Wrap optimizer failures (`OptError`) so that `fit` can propagate
//!   solver problems without leaking the optimization layer’s types into
//!   every caller signature.
//! - Implement `From<RaschError> for PyErr` to map Rust-side validation
//!   and runtime errors into `ValueError` values visible to Python
//!   callers.
//!
//! Invariants & assumptions
//! ------------------------
//! - Modules that use this error type validate their inputs (key tokens,
//!   matrix entries, dimensions, options) and return [`RaschResult<T>`]
//!   instead of panicking.
//! - `RaschError` values are small, cheap to clone, and suitable for use
//!   in both unit tests and higher-level orchestration code.
//! - The Python-facing conversion preserves the Rust error message
//!   verbatim inside the `ValueError` string representation.
//!
//! Conventions
//! -----------
//! - This module is focused on Rasch-fitting errors; score-transform
//!   errors and optimizer errors live in their own `errors` modules under
//!   the relevant subtrees.
//! - Error messages are phrased in terms of domain constraints (e.g.,
//!   "entries must be 0.0 or 1.0", "key must not be empty") rather than
//!   low-level details.
//! - PyO3 conversion always uses `ValueError` for these errors, since
//!   every variant ultimately describes invalid input or an invalid
//!   configuration from the perspective of Python code.
//!
//! Downstream usage
//! ----------------
//! - `rasch::core` construction and validation helpers return
//!   [`RaschResult<T>`] to propagate failures cleanly to callers.
//! - `rasch::models` wraps optimizer failures via `From<OptError>` so a
//!   single `?` suffices inside `fit`.
//! - The optimization layer converts the likelihood-relevant variants
//!   into `OptError` values (see `optimization::errors`) when a model’s
//!   `value`/`grad` calls fail mid-solve.
//!
//! Testing notes
//! -------------
//! - Unit tests in this module verify that:
//!   - each [`RaschError`] variant’s `Display` message embeds its payload
//!     (e.g., offending value or index), and
//!   - wrapping an `OptError` preserves the inner message.
//! - Additional tests in the core and model modules exercise these errors
//!   indirectly via input validation and fitting.

use crate::optimization::errors::OptError;
#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type RaschResult<T> = Result<T, RaschError>;

/// RaschError — error conditions for Rasch model construction and fitting.
///
/// Purpose
/// -------
/// Represent all validation and computation failures that can occur when
/// normalizing an answer key, binarizing submissions, evaluating the
/// joint likelihood, or running the batched estimator.
///
/// Variants
/// --------
/// - `EmptyKey`
///   The answer key contains no entries.
/// - `InvalidKeyToken { index, token }`
///   A key entry is empty after trimming or contains non-alphanumeric
///   ASCII characters.
/// - `EmptyPersonLabel`
///   A submission's person label is empty after trimming.
/// - `NoSubmissions`
///   A response matrix was requested for zero submissions.
/// - `NoItems`
///   A binary response matrix has zero columns.
/// - `NonBinaryResponse { row, col, value }`
///   A matrix entry is neither exactly `0.0` nor exactly `1.0` (this
///   includes NaN and infinities).
/// - `ThetaLengthMismatch { expected, actual }`
///   The joint parameter vector does not have length
///   `n_items + n_persons`.
/// - `NonFiniteParam { index, value }`
///   A parameter-vector element is NaN or infinite.
/// - `ItemCountMismatch { expected, found }`
///   Responses and parameters disagree on the number of items.
/// - `PersonCountMismatch { expected, found }`
///   Two structures disagree on a person count (labels versus rows,
///   population size, or rows versus person indices in a batch).
/// - `PersonIndexOutOfRange { index, bound }`
///   A batch row refers to a person index outside the population.
/// - `InvalidMaxIter { max_iter }`
///   The outer iteration cap is zero.
/// - `InvalidTol { tol }`
///   The convergence tolerance is non-finite or non-positive.
/// - `NotFitted`
///   Estimates were requested from a model that has not been fitted.
/// - `OptimizationFailed(OptError)`
///   The underlying solver reported an error during `fit`.
///
/// Invariants
/// ----------
/// - Each variant carries just enough information (offending value or
///   index) to allow downstream logging and debugging without leaking
///   large data structures.
/// - Row/column indices always refer to positions in the caller-visible
///   inputs (submission order, key order), not to internal layouts.
///
/// Notes
/// -----
/// - This enum implements [`std::error::Error`] and [`std::fmt::Display`]
///   so it can be used with idiomatic `?`-based error propagation.
/// - A [`From<OptError>`] implementation wraps solver failures, and a
///   feature-gated [`From<RaschError>`] for `PyErr` maps all cases to
///   `ValueError` at the Python boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum RaschError {
    // ---- Answer key ----
    EmptyKey,
    InvalidKeyToken {
        index: usize,
        token: String,
    },

    // ---- Submissions / response matrix ----
    EmptyPersonLabel,
    NoSubmissions,
    NoItems,
    NonBinaryResponse {
        row: usize,
        col: usize,
        value: f64,
    },

    // ---- Parameters / likelihood ----
    ThetaLengthMismatch {
        expected: usize,
        actual: usize,
    },
    NonFiniteParam {
        index: usize,
        value: f64,
    },
    ItemCountMismatch {
        expected: usize,
        found: usize,
    },
    PersonCountMismatch {
        expected: usize,
        found: usize,
    },
    PersonIndexOutOfRange {
        index: usize,
        bound: usize,
    },

    // ---- Options ----
    InvalidMaxIter {
        max_iter: usize,
    },
    InvalidTol {
        tol: f64,
    },

    // ---- Fitting ----
    NotFitted,
    OptimizationFailed(OptError),
}

impl std::error::Error for RaschError {}

impl std::fmt::Display for RaschError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Answer key ----
            RaschError::EmptyKey => {
                write!(f, "Answer key must not be empty.")
            }
            RaschError::InvalidKeyToken { index, token } => {
                write!(
                    f,
                    "Invalid answer key entry at position {index}: '{token}'. Entries must be \
                     non-empty ASCII alphanumeric tokens."
                )
            }

            // ---- Submissions / response matrix ----
            RaschError::EmptyPersonLabel => {
                write!(f, "Submission person label must not be empty.")
            }
            RaschError::NoSubmissions => {
                write!(f, "At least one submission is required to build a response matrix.")
            }
            RaschError::NoItems => {
                write!(f, "A response matrix must have at least one item column.")
            }
            RaschError::NonBinaryResponse { row, col, value } => {
                write!(
                    f,
                    "Invalid response at row {row}, column {col}: {value}. Entries must be \
                     exactly 0.0 or 1.0."
                )
            }

            // ---- Parameters / likelihood ----
            RaschError::ThetaLengthMismatch { expected, actual } => {
                write!(f, "Parameter vector length mismatch: expected {expected}, got {actual}.")
            }
            RaschError::NonFiniteParam { index, value } => {
                write!(f, "Parameter at index {index} is {value}. Must be a finite number.")
            }
            RaschError::ItemCountMismatch { expected, found } => {
                write!(
                    f,
                    "Item count mismatch: responses have {expected}, parameters have {found}."
                )
            }
            RaschError::PersonCountMismatch { expected, found } => {
                write!(f, "Person count mismatch: expected {expected}, found {found}.")
            }
            RaschError::PersonIndexOutOfRange { index, bound } => {
                write!(f, "Person index {index} is outside the population of size {bound}.")
            }

            // ---- Options ----
            RaschError::InvalidMaxIter { max_iter } => {
                write!(f, "Invalid maximum iterations: {max_iter}. Must be greater than zero.")
            }
            RaschError::InvalidTol { tol } => {
                write!(f, "Invalid tolerance: {tol}. Must be finite and positive.")
            }

            // ---- Fitting ----
            RaschError::NotFitted => {
                write!(f, "Model has not been fitted yet; call fit first.")
            }
            RaschError::OptimizationFailed(err) => {
                write!(f, "Optimization failed: {err}")
            }
        }
    }
}

impl From<OptError> for RaschError {
    fn from(err: OptError) -> Self {
        RaschError::OptimizationFailed(err)
    }
}

#[cfg(feature = "python-bindings")]
impl From<RaschError> for PyErr {
    fn from(err: RaschError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Basic `Display` formatting for RaschError variants.
    // - Embedding of payload values (indices, offending values) into error
    //   messages.
    // - Preservation of the inner message when wrapping an `OptError`.
    //
    // They intentionally DO NOT cover:
    // - The `From<RaschError> for PyErr` conversion, since exercising it
    //   requires linking against the Python C API and is better handled
    //   by Python-level tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `RaschError::InvalidKeyToken` includes both the index
    // and the offending token in its `Display` representation.
    //
    // Given
    // -----
    // - An `InvalidKeyToken` with index 4 and token "?!".
    //
    // Expect
    // ------
    // - `format!("{err}")` contains "4" and "?!".
    fn invalid_key_token_includes_payload_in_display() {
        // Arrange
        let err = RaschError::InvalidKeyToken { index: 4, token: "?!".to_string() };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(
            msg.contains('4') && msg.contains("?!"),
            "Display message should include index and token.\nGot: {msg}"
        );
    }

    #[test]
    // Purpose
    // -------
    // Verify that `RaschError::NonBinaryResponse` reports the offending
    // coordinates and value.
    //
    // Given
    // -----
    // - A `NonBinaryResponse` at row 2, column 7 with value 0.5.
    //
    // Expect
    // ------
    // - `format!("{err}")` contains "2", "7", and "0.5".
    fn non_binary_response_includes_coordinates_in_display() {
        // Arrange
        let err = RaschError::NonBinaryResponse { row: 2, col: 7, value: 0.5 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(
            msg.contains('2') && msg.contains('7') && msg.contains("0.5"),
            "Display message should include row, column, and value.\nGot: {msg}"
        );
    }

    #[test]
    // Purpose
    // -------
    // Verify that `RaschError::InvalidTol` includes the offending
    // tolerance in its `Display` representation.
    //
    // Given
    // -----
    // - An `InvalidTol` with tol = -0.001.
    //
    // Expect
    // ------
    // - `format!("{err}")` contains "-0.001".
    fn invalid_tol_includes_payload_in_display() {
        // Arrange
        let err = RaschError::InvalidTol { tol: -0.001 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(
            msg.contains("-0.001"),
            "Display message should include offending tolerance.\nGot: {msg}"
        );
    }

    #[test]
    // Purpose
    // -------
    // Ensure that wrapping an `OptError` preserves the inner error
    // message in the outer `Display` output.
    //
    // Given
    // -----
    // - An `OptError::NonFiniteCost` wrapped via `From<OptError>`.
    //
    // Expect
    // ------
    // - The outer message contains the inner message.
    fn optimization_failed_preserves_inner_message() {
        // Arrange
        let inner = OptError::NonFiniteCost { value: f64::NAN };
        let inner_msg = inner.to_string();

        // Act
        let err: RaschError = inner.into();
        let msg = err.to_string();

        // Assert
        assert!(
            msg.contains(&inner_msg),
            "Wrapped message should contain the inner error.\nGot: {msg}"
        );
    }
}
