//! Shared validation for optimizer inputs and outputs.
//!
//! Stopping rules are checked when [`Tolerances`] are built
//! ([`verify_tol_grad`], [`verify_target_cost`]); gradients and solver
//! results are checked at the adapter and outcome boundaries
//! ([`validate_grad`], [`validate_theta_hat`], [`validate_value`]). Each
//! helper reports a specific [`OptError`] variant so callers see what
//! was malformed, not just that something was.
//!
//! [`Tolerances`]: crate::optimization::loglik_optimizer::traits::Tolerances
use crate::optimization::{
    errors::{OptError, OptResult},
    loglik_optimizer::{Grad, Theta},
};

/// Check an optional gradient-norm tolerance: absent is fine, present
/// must be finite and strictly positive.
///
/// # Errors
/// - [`OptError::InvalidTolGrad`] for a non-finite or non-positive
///   value.
pub fn verify_tol_grad(tol: Option<f64>) -> OptResult<()> {
    if let Some(tol) = tol {
        if !tol.is_finite() {
            return Err(OptError::InvalidTolGrad { tol, reason: "Tolerance must be finite." });
        }
        if tol <= 0.0 {
            return Err(OptError::InvalidTolGrad { tol, reason: "Tolerance must be positive." });
        }
    }
    Ok(())
}

/// Check an optional target objective: absent is fine, present must be
/// finite. Either sign is allowed, since a cost is a negated
/// log-likelihood.
///
/// # Errors
/// - [`OptError::InvalidTargetCost`] for `NaN` or an infinity.
pub fn verify_target_cost(target: Option<f64>) -> OptResult<()> {
    if let Some(target) = target {
        if !target.is_finite() {
            return Err(OptError::InvalidTargetCost {
                target,
                reason: "Target objective value must be finite.",
            });
        }
    }
    Ok(())
}

/// Check a gradient's length against the parameter dimension and every
/// entry for finiteness.
///
/// # Errors
/// - [`OptError::GradientDimMismatch`] on a length mismatch.
/// - [`OptError::InvalidGradient`] carrying the first offending index
///   and value.
pub fn validate_grad(grad: &Grad, dim: usize) -> OptResult<()> {
    if grad.len() != dim {
        return Err(OptError::GradientDimMismatch { expected: dim, found: grad.len() });
    }
    for (index, &value) in grad.iter().enumerate() {
        if !value.is_finite() {
            return Err(OptError::InvalidGradient {
                index,
                value,
                reason: "Gradient elements must be finite.",
            });
        }
    }
    Ok(())
}

/// Unwrap a solver's best parameter vector, requiring it to exist and
/// to be finite in every entry.
///
/// # Errors
/// - [`OptError::MissingThetaHat`] when the solver produced none.
/// - [`OptError::InvalidThetaHat`] carrying the first non-finite entry.
pub fn validate_theta_hat(theta_hat: Option<Theta>) -> OptResult<Theta> {
    match theta_hat {
        Some(t) => {
            for (index, &value) in t.iter().enumerate() {
                if !value.is_finite() {
                    return Err(OptError::InvalidThetaHat {
                        index,
                        value,
                        reason: "Parameter estimates must be finite.",
                    });
                }
            }
            Ok(t)
        }
        None => Err(OptError::MissingThetaHat),
    }
}

/// Check that a scalar objective value is finite; sign is irrelevant.
///
/// # Errors
/// - [`OptError::NonFiniteCost`] for `NaN` or an infinity.
pub fn validate_value(value: f64) -> OptResult<()> {
    if !value.is_finite() {
        return Err(OptError::NonFiniteCost { value });
    }
    Ok(())
}
