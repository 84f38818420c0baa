//! scoring::validation — shared input guards for the score transformer.
//!
//! Purpose
//! -------
//! Centralize basic input validation for score transformation. This keeps
//! checks on cohort shape, ability finiteness, and the score ceiling in
//! one place instead of duplicating them across the transformer and the
//! Python bindings.
//!
//! Key behaviors
//! -------------
//! - Enforce simple preconditions on the ability vector and person labels
//!   before any cohort statistics are computed.
//! - Map invalid inputs into structured `ScoreError` values for
//!   consistent error handling in Rust and Python bindings.
//!
//! Invariants & assumptions
//! ------------------------
//! - The cohort must contain at least one person.
//! - All ability values must be finite (no `NaN`, no ±∞).
//! - There must be exactly one person label per ability.
//! - The maximum possible score must be finite; no lower bound is
//!   enforced, so degenerate ceilings below the proportional floor pass
//!   through to the documented formula.
//!
//! Conventions
//! -----------
//! - This module is purely about validation; it performs no I/O and does
//!   not allocate beyond what is required for error construction.
//! - Errors are reported via the crate-local `ScoreError` enum, which is
//!   also convertible to `PyErr` in Python-facing layers.
//!
//! Downstream usage
//! ----------------
//! - [`ScoreReport::from_abilities`](crate::scoring::transform::ScoreReport::from_abilities)
//!   calls [`validate_scoring_input`] before computing any statistics.
//! - Treat a successful return (`Ok(())`) as a guarantee that cohort
//!   shape and finiteness constraints are satisfied.
//!
//! Testing notes
//! -------------
//! - Unit tests in this module cover all error branches of
//!   [`validate_scoring_input`] and a simple success path.

use crate::scoring::errors::{ScoreError, ScoreResult};

/// Validate basic input constraints for score transformation.
///
/// Parameters
/// ----------
/// - `thetas`: `&[f64]`
///   Fitted abilities, one per person in submission order. Must be
///   non-empty, and all values must be finite (no `NaN` or ±∞).
/// - `persons`: `&[String]`
///   Person labels in the same order. Must have exactly one entry per
///   ability.
/// - `max_possible`: `f64`
///   Ceiling of the proportional score (the number of items actually
///   scored for this cohort). Must be finite.
///
/// Returns
/// -------
/// `ScoreResult<()>`
///   - `Ok(())` if all basic constraints are satisfied.
///   - `Err(ScoreError)` if any constraint is violated, with a variant
///     that encodes which condition failed and, where relevant, the
///     offending value.
///
/// Errors
/// ------
/// - `ScoreError::EmptyScores`
///   Returned when `thetas` is empty.
/// - `ScoreError::NonFiniteTheta { index, value }`
///   Returned for the first ability that is not finite.
/// - `ScoreError::PersonCountMismatch { thetas, persons }`
///   Returned when the label count differs from the ability count.
/// - `ScoreError::InvalidMaxPossible { value }`
///   Returned when `max_possible` is `NaN` or ±∞.
///
/// Panics
/// ------
/// - Never panics. All failures are reported via `ScoreError`.
///
/// Notes
/// -----
/// - No lower bound is placed on `max_possible`: ceilings below the
///   proportional floor are accepted and produce the documented
///   degenerate scale.
///
/// Examples
/// --------
/// ```rust
/// # use rasch_scoring::scoring::validation::validate_scoring_input;
/// # use rasch_scoring::scoring::errors::ScoreError;
/// let thetas = vec![0.4_f64, -0.2, 1.1];
/// let persons: Vec<String> = ["ana", "bo", "cy"].iter().map(|s| s.to_string()).collect();
///
/// // Valid inputs succeed:
/// assert!(validate_scoring_input(&thetas, &persons, 40.0).is_ok());
///
/// // A label count mismatch is rejected:
/// match validate_scoring_input(&thetas, &persons[..2], 40.0) {
///     Err(ScoreError::PersonCountMismatch { thetas: 3, persons: 2 }) => (),
///     other => panic!("expected PersonCountMismatch error, got {other:?}"),
/// }
/// ```
pub fn validate_scoring_input(
    thetas: &[f64], persons: &[String], max_possible: f64,
) -> ScoreResult<()> {
    if thetas.is_empty() {
        return Err(ScoreError::EmptyScores);
    }

    for (index, &value) in thetas.iter().enumerate() {
        if !value.is_finite() {
            return Err(ScoreError::NonFiniteTheta { index, value });
        }
    }

    if persons.len() != thetas.len() {
        return Err(ScoreError::PersonCountMismatch {
            thetas: thetas.len(),
            persons: persons.len(),
        });
    }

    if !max_possible.is_finite() {
        return Err(ScoreError::InvalidMaxPossible { value: max_possible });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Successful validation of well-formed inputs.
    // - Each error branch in `validate_scoring_input`:
    //   * empty ability vector,
    //   * non-finite ability value,
    //   * person-label count mismatch,
    //   * non-finite max possible score.
    //
    // They intentionally DO NOT cover:
    // - Any interaction with Python / PyO3 (conversion to `PyErr`), which
    //   is exercised by Python-level tests.
    // -------------------------------------------------------------------------

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("p{i}")).collect()
    }

    #[test]
    // Purpose
    // -------
    // Verify that `validate_scoring_input` succeeds on a simple, valid
    // cohort (finite abilities, matching labels, finite ceiling).
    //
    // Given
    // -----
    // - Three finite abilities, three labels, and `max_possible = 40`.
    //
    // Expect
    // ------
    // - `validate_scoring_input` returns `Ok(())`.
    fn validate_scoring_input_valid_arguments_succeeds() {
        // Arrange
        let thetas = vec![0.4_f64, -0.2, 1.1];
        let persons = names(3);

        // Act
        let result = validate_scoring_input(&thetas, &persons, 40.0);

        // Assert
        assert!(result.is_ok(), "Expected Ok(()) for valid inputs, got {result:?}");
    }

    #[test]
    // Purpose
    // -------
    // Ensure that an empty ability vector is rejected with
    // `ScoreError::EmptyScores`.
    //
    // Given
    // -----
    // - Zero abilities and zero labels.
    //
    // Expect
    // ------
    // - `validate_scoring_input` returns `Err(ScoreError::EmptyScores)`.
    fn validate_scoring_input_empty_cohort_returns_empty_scores() {
        // Arrange
        let thetas: Vec<f64> = Vec::new();
        let persons: Vec<String> = Vec::new();

        // Act
        let result = validate_scoring_input(&thetas, &persons, 40.0);

        // Assert
        match result {
            Err(ScoreError::EmptyScores) => (),
            other => panic!("expected EmptyScores error, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that a non-finite ability (e.g., NaN) triggers
    // `ScoreError::NonFiniteTheta` with the offending index and payload.
    //
    // Given
    // -----
    // - Abilities containing a `NaN` at index 1.
    //
    // Expect
    // ------
    // - `validate_scoring_input` returns
    //   `Err(ScoreError::NonFiniteTheta { index: 1, .. })`.
    fn validate_scoring_input_non_finite_ability_returns_non_finite_theta() {
        // Arrange
        let thetas = vec![0.4_f64, f64::NAN, 1.1];
        let persons = names(3);

        // Act
        let result = validate_scoring_input(&thetas, &persons, 40.0);

        // Assert
        match result {
            Err(ScoreError::NonFiniteTheta { index, value }) => {
                assert_eq!(index, 1, "Payload index should point at the NaN entry.");
                assert!(!value.is_finite(), "Payload should itself be non-finite. Got: {value}");
            }
            other => panic!("expected NonFiniteTheta error, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure that a person-label count mismatch is rejected with both
    // counts in the payload.
    //
    // Given
    // -----
    // - Three abilities and two labels.
    //
    // Expect
    // ------
    // - `validate_scoring_input` returns
    //   `Err(ScoreError::PersonCountMismatch { thetas: 3, persons: 2 })`.
    fn validate_scoring_input_label_mismatch_returns_person_count_mismatch() {
        // Arrange
        let thetas = vec![0.4_f64, -0.2, 1.1];
        let persons = names(2);

        // Act
        let result = validate_scoring_input(&thetas, &persons, 40.0);

        // Assert
        match result {
            Err(ScoreError::PersonCountMismatch { thetas: 3, persons: 2 }) => (),
            other => panic!("expected PersonCountMismatch error, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that a non-finite max possible score is rejected while a
    // small (degenerate) one is accepted.
    //
    // Given
    // -----
    // - A valid cohort with `max_possible = NaN`, then `max_possible = 10`.
    //
    // Expect
    // ------
    // - `Err(ScoreError::InvalidMaxPossible { .. })` for NaN; `Ok(())`
    //   for the small finite ceiling.
    fn validate_scoring_input_non_finite_ceiling_returns_invalid_max_possible() {
        // Arrange
        let thetas = vec![0.4_f64, -0.2];
        let persons = names(2);

        // Act
        let non_finite = validate_scoring_input(&thetas, &persons, f64::NAN);
        let degenerate = validate_scoring_input(&thetas, &persons, 10.0);

        // Assert
        match non_finite {
            Err(ScoreError::InvalidMaxPossible { value }) => {
                assert!(!value.is_finite(), "Payload should be the offending ceiling.");
            }
            other => panic!("expected InvalidMaxPossible error, got {other:?}"),
        }
        assert!(degenerate.is_ok(), "A small finite ceiling is degenerate but allowed.");
    }
}
