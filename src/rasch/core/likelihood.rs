//! Rasch likelihood — response probabilities, objective, and gradient.
//!
//! Purpose
//! -------
//! Implement the dichotomous Rasch model's probability law and the joint
//! negative log-likelihood the estimator minimizes, together with its
//! analytic gradient. Everything here works in bounded model space; the
//! optimizer-facing chain rule through the bounding transform lives with
//! the model layer.
//!
//! Key behaviors
//! -------------
//! - Evaluate a single response probability via
//!   [`response_probability`], using the saturating logistic so extreme
//!   ability/difficulty gaps yield exactly 0 or 1.
//! - Evaluate the joint negative log-likelihood of a response slice via
//!   [`neg_log_likelihood`], branching on the observed response so a
//!   saturated probability never produces a NaN through `0 * ln(0)`.
//! - Evaluate the analytic gradient via [`grad_neg_log_likelihood`],
//!   laid out as `[beta (n_items) | theta (n_persons)]` over the full
//!   population with zero entries for unsampled persons.
//!
//! Invariants & assumptions
//! ------------------------
//! - Responses are exactly `0.0` or `1.0`; `ResponseMatrix` construction
//!   enforces this upstream.
//! - Slice person indices address `params.theta` directly; the slice's
//!   own validation guarantees they are in range once the population
//!   counts agree.
//! - The objective may be `+inf` (a saturated probability contradicted
//!   by the data) but never NaN; the gradient is always finite because
//!   residuals are bounded by 1 in magnitude.
//!
//! Conventions
//! -----------
//! - Probability of a correct response: `sigma(theta_i - beta_j)`.
//!   Larger `theta` means a stronger person; larger `beta` a harder
//!   item.
//! - Gradient signs follow the minimized objective: for the negative
//!   log-likelihood, `d/d beta_j = +sum_i (x - p)` and
//!   `d/d theta_i = -sum_j (x - p)`.
//!
//! Downstream usage
//! ----------------
//! - `rasch::models` wraps these functions in its `LogLikelihood`
//!   implementation, negating them into the maximized objective and
//!   applying the bounding-transform chain rule.
//!
//! Testing notes
//! -------------
//! - Unit tests cover hand-computed objective values, the saturation
//!   edge cases (zero contribution when consistent, `+inf` when
//!   contradicted), gradient agreement with central finite differences,
//!   zero gradient entries for unsampled persons, and the dimension
//!   checks.
use ndarray::Array1;

use crate::{
    optimization::numerical_stability::saturating_logistic,
    rasch::{
        core::{matrix::ResponseSlice, params::RaschParams},
        errors::{RaschError, RaschResult},
    },
};

/// Probability that a person of ability `theta` answers an item of
/// difficulty `beta` correctly.
///
/// Purpose
/// -------
/// Evaluate the Rasch response law `sigma(theta - beta)` with logistic
/// saturation, so gaps beyond the saturation cutoff return exactly `1.0`
/// or `0.0` instead of a denormal-adjacent value.
///
/// Parameters
/// ----------
/// - `theta`: `f64`
///   Person ability.
/// - `beta`: `f64`
///   Item difficulty.
///
/// Returns
/// -------
/// `f64`
///   A probability in `[0.0, 1.0]`; exactly `0.5` when `theta == beta`.
///
/// Examples
/// --------
/// ```rust
/// # use rasch_scoring::rasch::core::likelihood::response_probability;
/// #
/// assert_eq!(response_probability(1.3, 1.3), 0.5);
/// assert_eq!(response_probability(30.0, 0.0), 1.0);
/// assert_eq!(response_probability(0.0, 30.0), 0.0);
/// ```
pub fn response_probability(theta: f64, beta: f64) -> f64 {
    saturating_logistic(theta - beta)
}

/// Joint negative log-likelihood of a response slice.
///
/// Purpose
/// -------
/// Sum `-[x * ln(p) + (1 - x) * ln(1 - p)]` over every (person, item)
/// cell of the slice, where `p` is the Rasch response probability under
/// `params`. This is the objective the estimator minimizes.
///
/// Parameters
/// ----------
/// - `slice`: `&ResponseSlice`
///   Response rows with their person indices and the total population
///   count.
/// - `params`: `&RaschParams`
///   Bounded item difficulties and person abilities for the full
///   population.
///
/// Returns
/// -------
/// `RaschResult<f64>`
///   - `Ok(nll)` with `nll >= 0.0`; the value is `+inf` exactly when a
///     saturated probability contradicts an observed response, and a
///     saturated probability consistent with its response contributes
///     zero.
///
/// Errors
/// ------
/// - `RaschError::ItemCountMismatch` when `params.beta` and the slice
///   disagree on the item count.
/// - `RaschError::PersonCountMismatch` when `params.theta` and the slice
///   disagree on the population size.
///
/// Notes
/// -----
/// - The per-cell term branches on the observed response rather than
///   multiplying by it, so `x = 0` never meets `ln(0)` and the sum is
///   NaN-free.
pub fn neg_log_likelihood(slice: &ResponseSlice, params: &RaschParams) -> RaschResult<f64> {
    check_dimensions(slice, params)?;
    let mut nll = 0.0;
    for (row, &person) in slice.persons().iter().enumerate() {
        let theta_i = params.theta[person];
        for (col, &x) in slice.rows().row(row).iter().enumerate() {
            let p = response_probability(theta_i, params.beta[col]);
            let term = if x == 1.0 { p.ln() } else { (1.0 - p).ln() };
            nll -= term;
        }
    }
    Ok(nll)
}

/// Analytic gradient of the joint negative log-likelihood.
///
/// Purpose
/// -------
/// Evaluate the gradient of [`neg_log_likelihood`] with respect to the
/// full `[beta (n_items) | theta (n_persons)]` parameter vector. Persons
/// absent from the slice contribute nothing, so their ability entries
/// are exactly zero; this is what lets mini-batch rounds update only the
/// sampled coordinates while sharing one parameter vector.
///
/// Parameters
/// ----------
/// - `slice`: `&ResponseSlice`
///   Response rows with their person indices and the total population
///   count.
/// - `params`: `&RaschParams`
///   Bounded item difficulties and person abilities for the full
///   population.
///
/// Returns
/// -------
/// `RaschResult<Array1<f64>>`
///   - `Ok(grad)` of length `n_items + n_persons`, finite in every
///     entry: difficulty partials `+sum_i (x - p)` first, ability
///     partials `-sum_j (x - p)` after.
///
/// Errors
/// ------
/// - `RaschError::ItemCountMismatch` when `params.beta` and the slice
///   disagree on the item count.
/// - `RaschError::PersonCountMismatch` when `params.theta` and the slice
///   disagree on the population size.
///
/// Notes
/// -----
/// - Residuals `x - p` are bounded by 1 in magnitude, so the gradient
///   stays finite even at parameter values where the objective itself is
///   `+inf`.
pub fn grad_neg_log_likelihood(
    slice: &ResponseSlice, params: &RaschParams,
) -> RaschResult<Array1<f64>> {
    check_dimensions(slice, params)?;
    let n_items = params.n_items();
    let mut grad = Array1::<f64>::zeros(n_items + params.n_persons());
    for (row, &person) in slice.persons().iter().enumerate() {
        let theta_i = params.theta[person];
        let mut person_sum = 0.0;
        for (col, &x) in slice.rows().row(row).iter().enumerate() {
            let residual = x - response_probability(theta_i, params.beta[col]);
            grad[col] += residual;
            person_sum += residual;
        }
        grad[n_items + person] -= person_sum;
    }
    Ok(grad)
}

/// Check that `params` and `slice` agree on item count and population
/// size, so row iteration and `theta` indexing are in bounds.
fn check_dimensions(slice: &ResponseSlice, params: &RaschParams) -> RaschResult<()> {
    if params.n_items() != slice.n_items() {
        return Err(RaschError::ItemCountMismatch {
            expected: slice.n_items(),
            found: params.n_items(),
        });
    }
    if params.n_persons() != slice.n_persons() {
        return Err(RaschError::PersonCountMismatch {
            expected: slice.n_persons(),
            found: params.n_persons(),
        });
    }
    Ok(())
}
