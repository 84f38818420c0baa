//! Numerical stability utilities.
//!
//! Provides safe implementations of the nonlinear transforms used by the
//! Rasch fitting layer, guarded against overflow/underflow in naïve form.
//! The functions here follow explicit-cutoff strategies similar to those
//! in major ML libraries (e.g. PyTorch, TensorFlow), keeping `f64`
//! arithmetic in a well-conditioned regime.
//!
//! # Provided items
//! - [`SATURATION_CUTOFF`]: the ±20 logit cutoff. Beyond it the logistic
//!   is treated as exactly saturated instead of exponentiated.
//! - [`PARAM_BOUND`]: half-width of the box constraint on item and person
//!   parameters (all parameters live in `[-PARAM_BOUND, PARAM_BOUND]`).
//! - [`saturating_logistic(x)`]: logistic function with hard saturation
//!   to exactly `0.0` / `1.0` outside the cutoff.
//! - [`bounded_from_unbounded(u)`]: saturating map ℝ → [−5, 5] used to
//!   express the box constraint to an unconstrained quasi-Newton solver.
//! - [`bounded_slope(u)`]: derivative of that map, the chain-rule factor
//!   for gradients taken in unconstrained space.
//!
//! # Rationale
//! The solver backend has no native box constraints, so bounds ride on a
//! reparameterization: the optimizer sees an unconstrained vector `u` and
//! the model sees `param = bounded_from_unbounded(u)`. Because the map is
//! centered (`u = 0 ↦ 0`) the zero-initialized start is preserved, and
//! because `|theta − beta| ≤ 2·PARAM_BOUND < SATURATION_CUTOFF`, every
//! point the optimizer can propose keeps the likelihood finite.

/// Logit cutoff beyond which the logistic saturates to exactly 0 or 1.
///
/// For `|x| > 20` the true logistic differs from its saturated value by
/// less than 3e-9; treating it as exact avoids the exponential entirely
/// and makes the saturation policy explicit rather than incidental.
pub const SATURATION_CUTOFF: f64 = 20.0;

/// Half-width of the box constraint on item difficulty and person ability.
///
/// Every entry of the joint parameter vector is confined to
/// `[-PARAM_BOUND, PARAM_BOUND]`. This is the only identifiability device
/// in the model (there is no mean-zero centering constraint).
pub const PARAM_BOUND: f64 = 5.0;

/// Logistic function with hard saturation: `1 / (1 + exp(-x))`.
///
/// - For `x > SATURATION_CUTOFF`, returns exactly `1.0`.
/// - For `x < -SATURATION_CUTOFF`, returns exactly `0.0`.
/// - Otherwise evaluates the logistic directly; at the cutoff itself the
///   exponential path is still used, so `saturating_logistic(20.0)` is
///   strictly inside `(0, 1)`.
///
/// # Parameters
/// - `x`: real input (a logit, typically `theta - beta`).
///
/// # Returns
/// - The (possibly saturated) probability in `[0.0, 1.0]`.
pub fn saturating_logistic(x: f64) -> f64 {
    if x > SATURATION_CUTOFF {
        1.0
    } else if x < -SATURATION_CUTOFF {
        0.0
    } else {
        1.0 / (1.0 + (-x).exp())
    }
}

/// Map an unconstrained coordinate into the interval [−5, 5].
///
/// Computes `-PARAM_BOUND + 2·PARAM_BOUND·logistic(u)`, strictly
/// increasing on `[-SATURATION_CUTOFF, SATURATION_CUTOFF]` with
/// `bounded_from_unbounded(0.0) == 0.0`; past the cutoff the underlying
/// logistic saturates, pinning the output to exactly `±PARAM_BOUND`. Used
/// to express box bounds to an unconstrained L-BFGS solver.
///
/// # Parameters
/// - `u`: unconstrained optimizer-space coordinate.
///
/// # Returns
/// - The bounded model-space coordinate.
pub fn bounded_from_unbounded(u: f64) -> f64 {
    -PARAM_BOUND + 2.0 * PARAM_BOUND * saturating_logistic(u)
}

/// Derivative of [`bounded_from_unbounded`] with respect to `u`.
///
/// Equals `2·PARAM_BOUND·σ(u)·(1 − σ(u))` where `σ` is the logistic. This
/// is the per-coordinate chain-rule factor that converts a model-space
/// gradient into an optimizer-space gradient. Strictly positive for all
/// finite `u`, vanishing only in the saturated tails.
///
/// # Parameters
/// - `u`: unconstrained optimizer-space coordinate.
///
/// # Returns
/// - `d bounded_from_unbounded(u) / du` as `f64`.
pub fn bounded_slope(u: f64) -> f64 {
    let s = saturating_logistic(u);
    2.0 * PARAM_BOUND * s * (1.0 - s)
}
