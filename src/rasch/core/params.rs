//! Rasch parameters — the `[beta | theta]` vector split into model terms.
//!
//! Purpose
//! -------
//! Give the flat parameter vector the optimizer works on a typed shape.
//! The optimizer sees one unbounded vector laid out as item difficulties
//! followed by person abilities; this module decodes that vector into a
//! [`RaschParams`] holding the bounded `beta` and `theta` arrays the
//! likelihood and reporting code consume.
//!
//! Key behaviors
//! -------------
//! - Decode an unbounded optimizer vector via
//!   [`RaschParams::from_unbounded`], applying the smooth bounding map so
//!   every decoded parameter lies inside the box.
//! - Enforce the `[beta (n_items) | theta (n_persons)]` layout by exact
//!   length, so a mismatched vector never silently shifts the split
//!   point.
//!
//! Invariants & assumptions
//! ------------------------
//! - `beta.len() == n_items` and `theta.len() == n_persons`; both are
//!   nonzero for any fit that reaches this type.
//! - Decoded values lie within `PARAM_BOUND` of zero, so any
//!   ability/difficulty difference is at most twice the bound and stays
//!   below the logistic saturation cutoff; the likelihood is finite at
//!   every decoded point.
//! - The zero vector decodes to all-zero `beta` and `theta`, matching
//!   the estimator's initialization.
//!
//! Conventions
//! -----------
//! - Index `j` of `beta` is the difficulty of item `j` (question order);
//!   index `i` of `theta` is the ability of person `i` (submission
//!   order).
//!
//! Downstream usage
//! ----------------
//! - `rasch::core::likelihood` decodes each optimizer iterate through
//!   this type before evaluating the objective.
//! - `rasch::models` decodes the final iterate once and exposes the
//!   resulting arrays through its accessors.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the layout split, agreement with the scalar
//!   bounding map, and both rejection paths (length mismatch, non-finite
//!   entries).
use ndarray::Array1;

use crate::{
    optimization::numerical_stability::bounded_from_unbounded,
    rasch::errors::{RaschError, RaschResult},
};

/// RaschParams — bounded item difficulties and person abilities.
///
/// Purpose
/// -------
/// Hold the decoded model parameters of a dichotomous Rasch model: one
/// difficulty per item and one ability per person, both mapped into the
/// parameter box.
///
/// Key behaviors
/// -------------
/// - Splits a flat `[beta | theta]` vector at `n_items` and applies the
///   smooth bounding map elementwise.
/// - Exposes the counts (`n_items`, `n_persons`) the likelihood uses for
///   dimension checks.
///
/// Fields
/// ------
/// - `beta`: `Array1<f64>`
///   Item difficulties in question order, length `n_items`.
/// - `theta`: `Array1<f64>`
///   Person abilities in submission order, length `n_persons`.
///
/// Invariants
/// ----------
/// - Every entry is finite and lies inside the parameter box;
///   construction rejects vectors that would violate this.
///
/// Performance
/// -----------
/// - Decoding is a single elementwise pass over the vector; no
///   allocations beyond the two output arrays.
///
/// Notes
/// -----
/// - The unbounded vector is the optimizer's representation; this type
///   is the model's. Keep conversions at the boundary rather than
///   passing raw vectors into likelihood code.
#[derive(Debug, Clone, PartialEq)]
pub struct RaschParams {
    /// Item difficulties in question order.
    pub beta: Array1<f64>,
    /// Person abilities in submission order.
    pub theta: Array1<f64>,
}

impl RaschParams {
    /// Decode an unbounded optimizer vector into bounded parameters.
    ///
    /// Purpose
    /// -------
    /// Split `u` into `[beta (n_items) | theta (n_persons)]` and map each
    /// entry through the smooth bounding transform so the result lies
    /// inside the parameter box.
    ///
    /// Parameters
    /// ----------
    /// - `u`: `&Array1<f64>`
    ///   Unbounded parameter vector of exact length
    ///   `n_items + n_persons`.
    /// - `n_items`: `usize`
    ///   Number of leading entries to decode as item difficulties.
    /// - `n_persons`: `usize`
    ///   Number of trailing entries to decode as person abilities.
    ///
    /// Returns
    /// -------
    /// `RaschResult<RaschParams>`
    ///   - `Ok(params)` with `beta.len() == n_items` and
    ///     `theta.len() == n_persons`.
    ///
    /// Errors
    /// ------
    /// - `RaschError::ThetaLengthMismatch` when
    ///   `u.len() != n_items + n_persons`.
    /// - `RaschError::NonFiniteParam` when any entry of `u` is NaN or
    ///   infinite.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use ndarray::array;
    /// # use rasch_scoring::rasch::core::params::RaschParams;
    /// #
    /// let u = array![0.0, 0.0, 0.0, 0.0, 0.0];
    /// let params = RaschParams::from_unbounded(&u, 2, 3).unwrap();
    /// assert_eq!(params.beta, array![0.0, 0.0]);
    /// assert_eq!(params.theta, array![0.0, 0.0, 0.0]);
    /// ```
    pub fn from_unbounded(u: &Array1<f64>, n_items: usize, n_persons: usize) -> RaschResult<Self> {
        let expected = n_items + n_persons;
        if u.len() != expected {
            return Err(RaschError::ThetaLengthMismatch { expected, actual: u.len() });
        }
        for (index, &value) in u.iter().enumerate() {
            if !value.is_finite() {
                return Err(RaschError::NonFiniteParam { index, value });
            }
        }
        let beta = u.slice(ndarray::s![..n_items]).mapv(bounded_from_unbounded);
        let theta = u.slice(ndarray::s![n_items..]).mapv(bounded_from_unbounded);
        Ok(RaschParams { beta, theta })
    }

    /// Number of item difficulties.
    pub fn n_items(&self) -> usize {
        self.beta.len()
    }

    /// Number of person abilities.
    pub fn n_persons(&self) -> usize {
        self.theta.len()
    }
}
