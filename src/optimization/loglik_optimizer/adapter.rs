//! Bridge between [`LogLikelihood`] and argmin's problem traits.
//!
//! The solver minimizes, callers maximize: [`LogLikProblem`] presents the
//! cost `c(theta) = -l(theta)` and, when the model supplies an analytic
//! gradient of `l`, negates it to match. A model that leaves `grad`
//! unimplemented gets finite differences of the cost instead (central
//! first, forward as the retry), so no sign flip is needed on that path.
use std::cell::RefCell;

use crate::optimization::{
    errors::OptError,
    loglik_optimizer::{
        traits::LogLikelihood,
        types::{Cost, Grad, Theta},
        validation::validate_grad,
    },
};
use argmin::core::{CostFunction, Error, Gradient};
use finitediff::FiniteDiff;

/// Argmin-facing view of a [`LogLikelihood`] and its data payload.
#[derive(Debug, Clone)]
pub struct LogLikProblem<'a, F: LogLikelihood> {
    pub f: &'a F,
    pub data: &'a F::Data,
}

impl<'a, F: LogLikelihood> CostFunction for LogLikProblem<'a, F> {
    type Param = Theta;
    type Output = Cost;

    /// Evaluate the cost `c(theta) = -l(theta)`.
    ///
    /// A non-finite log-likelihood (an observation contradicted by a
    /// saturated probability, say) is surfaced as
    /// [`OptError::NonFiniteCost`] rather than handed to the solver.
    ///
    /// # Errors
    /// Propagates any `OptError` from the model's `value`.
    fn cost(&self, theta: &Self::Param) -> Result<Self::Output, Error> {
        let output = self.f.value(theta, self.data)?;
        if !output.is_finite() {
            return Err((OptError::NonFiniteCost { value: output }).into());
        }
        Ok(-output)
    }
}

impl<'a, F: LogLikelihood> Gradient for LogLikProblem<'a, F> {
    type Param = Theta;
    type Gradient = Grad;

    /// Evaluate the cost gradient at `theta`.
    ///
    /// With an analytic gradient the model returns `dl/dtheta`; it is
    /// validated (length, finiteness) and negated into `dc/dtheta`.
    /// Without one, the cost itself is finite-differenced: central
    /// differences first, retried as forward differences if a cost
    /// evaluation failed mid-stencil or the central result fails
    /// validation.
    ///
    /// The finite-difference closure must return a bare `f64`, so a cost
    /// error inside the stencil cannot use `?`; the first such error is
    /// parked in a `RefCell` and the closure yields NaN until the
    /// stencil completes, after which the parked error is rethrown.
    ///
    /// # Errors
    /// - Any model error from `grad` other than
    ///   `GradientNotImplemented`.
    /// - Any cost error captured during finite differencing.
    /// - Validation errors for a wrong-length or non-finite gradient.
    fn gradient(&self, theta: &Self::Param) -> Result<Self::Gradient, Error> {
        let dim = theta.len();
        match self.f.grad(theta, self.data) {
            Ok(g) => {
                validate_grad(&g, dim)?;
                Ok(-g)
            }
            Err(e) => {
                let closure_err: RefCell<Option<Error>> = RefCell::new(None);
                match e {
                    OptError::GradientNotImplemented => {
                        let cost_func = |theta: &Theta| -> f64 {
                            match self.cost(theta) {
                                Ok(val) => val,
                                Err(e) => {
                                    let mut slot = closure_err.borrow_mut();
                                    if slot.is_none() {
                                        *slot = Some(e);
                                    }
                                    f64::NAN
                                }
                            }
                        };
                        let mut fd_grad = theta.central_diff(&cost_func);
                        if closure_err.borrow().is_some() {
                            fd_grad = forward_diff_checked(theta, &cost_func, &closure_err)?;
                            return Ok(fd_grad);
                        }
                        match validate_grad(&fd_grad, dim) {
                            Ok(()) => Ok(fd_grad),
                            Err(_) => {
                                fd_grad = forward_diff_checked(theta, &cost_func, &closure_err)?;
                                Ok(fd_grad)
                            }
                        }
                    }
                    _ => Err(e.into()),
                }
            }
        }
    }
}

impl<'a, F: LogLikelihood> LogLikProblem<'a, F> {
    /// Wrap a model and its data for the solver.
    pub fn new(f: &'a F, data: &'a F::Data) -> Self {
        Self { f, data }
    }
}

/// Forward-difference the cost at `theta`, rethrowing any error the
/// stencil captured and validating the result before returning it.
fn forward_diff_checked<G: Fn(&Theta) -> f64>(
    theta: &Theta, func: &G, closure_err: &RefCell<Option<Error>>,
) -> Result<Grad, Error> {
    closure_err.replace(None);
    let fd_grad = theta.forward_diff(func);
    let dim = theta.len();
    if let Some(err) = closure_err.take() {
        return Err(err);
    }
    validate_grad(&fd_grad, dim)?;
    Ok(fd_grad)
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;
    use crate::optimization::errors::OptResult;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The cost-side sign flip and the rejection of non-finite values.
    // - Negation and validation of analytic gradients.
    // - The finite-difference fallback for models without a gradient.
    // - Propagation of genuine gradient errors (anything other than
    //   `GradientNotImplemented`).
    //
    // They intentionally DO NOT cover:
    // - Full solver runs; those live in the integration tests that fit
    //   Rasch models end to end.
    // -------------------------------------------------------------------------

    /// Concave paraboloid `l(theta) = -theta . theta` with an analytic
    /// gradient `-2 theta`.
    struct Paraboloid;

    impl LogLikelihood for Paraboloid {
        type Data = ();

        fn value(&self, theta: &Theta, _data: &()) -> OptResult<Cost> {
            Ok(-theta.dot(theta))
        }

        fn check(&self, _theta: &Theta, _data: &()) -> OptResult<()> {
            Ok(())
        }

        fn grad(&self, theta: &Theta, _data: &()) -> OptResult<Grad> {
            Ok(-2.0 * theta)
        }
    }

    /// Same objective without an analytic gradient, to force the
    /// finite-difference path.
    struct GradlessParaboloid;

    impl LogLikelihood for GradlessParaboloid {
        type Data = ();

        fn value(&self, theta: &Theta, _data: &()) -> OptResult<Cost> {
            Ok(-theta.dot(theta))
        }

        fn check(&self, _theta: &Theta, _data: &()) -> OptResult<()> {
            Ok(())
        }
    }

    /// Model whose gradient fails with a real error, not
    /// `GradientNotImplemented`.
    struct BrokenGradient;

    impl LogLikelihood for BrokenGradient {
        type Data = ();

        fn value(&self, theta: &Theta, _data: &()) -> OptResult<Cost> {
            Ok(-theta.dot(theta))
        }

        fn check(&self, _theta: &Theta, _data: &()) -> OptResult<()> {
            Ok(())
        }

        fn grad(&self, _theta: &Theta, _data: &()) -> OptResult<Grad> {
            Err(OptError::InvalidGradient {
                index: 0,
                value: f64::NAN,
                reason: "deliberately broken",
            })
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the cost-side sign flip.
    //
    // Given
    // -----
    // - The paraboloid at `theta = [1, 2]`, where `l = -5`.
    //
    // Expect
    // ------
    // - `cost` returns exactly `+5`.
    fn cost_negates_the_log_likelihood() {
        let problem = LogLikProblem::new(&Paraboloid, &());

        let cost = problem.cost(&array![1.0, 2.0]).unwrap();

        assert_eq!(cost, 5.0);
    }

    #[test]
    // Purpose
    // -------
    // Ensure a non-finite log-likelihood never reaches the solver.
    //
    // Given
    // -----
    // - A model returning `-inf` from `value`.
    //
    // Expect
    // ------
    // - `cost` returns an error instead of `+inf`.
    fn cost_rejects_non_finite_values() {
        struct DivergentValue;
        impl LogLikelihood for DivergentValue {
            type Data = ();
            fn value(&self, _theta: &Theta, _data: &()) -> OptResult<Cost> {
                Ok(f64::NEG_INFINITY)
            }
            fn check(&self, _theta: &Theta, _data: &()) -> OptResult<()> {
                Ok(())
            }
        }
        let problem = LogLikProblem::new(&DivergentValue, &());

        assert!(problem.cost(&array![0.0]).is_err());
    }

    #[test]
    // Purpose
    // -------
    // Verify that an analytic gradient is negated into cost space.
    //
    // Given
    // -----
    // - The paraboloid at `theta = [1, -3]`, where `dl = [-2, 6]`.
    //
    // Expect
    // ------
    // - `gradient` returns `dc = [2, -6]`.
    fn gradient_negates_analytic_gradients() {
        let problem = LogLikProblem::new(&Paraboloid, &());

        let grad = problem.gradient(&array![1.0, -3.0]).unwrap();

        assert_eq!(grad, array![2.0, -6.0]);
    }

    #[test]
    // Purpose
    // -------
    // Exercise the finite-difference fallback.
    //
    // Given
    // -----
    // - The gradientless paraboloid at `theta = [1, -2]`; the cost is
    //   `theta . theta`, so the exact cost gradient is `[2, -4]`.
    //
    // Expect
    // ------
    // - The finite-difference gradient matches to within 1e-5 (central
    //   differences are exact on quadratics up to rounding).
    fn gradient_falls_back_to_finite_differences() {
        let problem = LogLikProblem::new(&GradlessParaboloid, &());

        let grad = problem.gradient(&array![1.0, -2.0]).unwrap();

        assert!((grad[0] - 2.0).abs() < 1e-5);
        assert!((grad[1] + 4.0).abs() < 1e-5);
    }

    #[test]
    // Purpose
    // -------
    // Confirm that real gradient errors propagate instead of silently
    // switching to finite differences.
    //
    // Given
    // -----
    // - A model whose `grad` returns `InvalidGradient`.
    //
    // Expect
    // ------
    // - `gradient` returns an error.
    fn gradient_propagates_model_errors() {
        let problem = LogLikProblem::new(&BrokenGradient, &());

        assert!(problem.gradient(&array![0.5]).is_err());
    }
}
