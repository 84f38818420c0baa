//! User-facing entrypoint for log-likelihood maximization.
//!
//! [`maximize`] is the only function a caller needs: it validates the
//! starting point, wraps the model in a [`LogLikProblem`] (which hands
//! argmin the minimized cost `-l(theta)`), builds an L-BFGS solver for
//! the configured line search, and runs it.
use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{
        OptimOutcome, Theta,
        adapter::LogLikProblem,
        builders::{build_optimizer_hager_zhang, build_optimizer_more_thuente},
        run::run_lbfgs,
        traits::{LineSearcher, LogLikelihood, MLEOptions},
    },
};

/// Maximize a log-likelihood with L-BFGS.
///
/// Runs `f.check(theta0, data)` first, so a bad starting point or
/// mismatched data fails before any solver work. The line search,
/// stopping rules, and L-BFGS memory all come from `opts`; the outcome
/// reports the best iterate in log-likelihood space.
///
/// # Parameters
/// - `f`: the model implementing [`LogLikelihood`].
/// - `theta0`: starting parameter vector, consumed by the solver.
/// - `data`: payload forwarded to every `value`/`grad` call.
/// - `opts`: stopping rules, line search, memory, verbosity.
///
/// # Errors
/// - Whatever `f.check` rejects.
/// - Solver construction errors from the builders.
/// - Runtime solver failures (line search breakdowns, non-finite
///   values) from [`run_lbfgs`].
///
/// # Examples
/// ```rust
/// use ndarray::array;
/// use rasch_scoring::optimization::{
///     errors::{OptError, OptResult},
///     loglik_optimizer::{maximize, LogLikelihood, MLEOptions},
/// };
///
/// /// Concave paraboloid with its maximum at the origin.
/// struct Paraboloid;
///
/// impl LogLikelihood for Paraboloid {
///     type Data = ();
///     fn value(&self, theta: &ndarray::Array1<f64>, _: &()) -> OptResult<f64> {
///         Ok(-theta.dot(theta))
///     }
///     fn check(&self, _: &ndarray::Array1<f64>, _: &()) -> OptResult<()> {
///         Ok(())
///     }
///     fn grad(&self, theta: &ndarray::Array1<f64>, _: &()) -> OptResult<ndarray::Array1<f64>> {
///         Ok(-2.0 * theta)
///     }
/// }
///
/// let out = maximize(&Paraboloid, array![0.1, -0.2, 0.3], &(), &MLEOptions::default())?;
/// assert!(out.theta_hat.iter().all(|t| t.abs() < 1e-3));
/// # Ok::<(), OptError>(())
/// ```
pub fn maximize<F: LogLikelihood>(
    f: &F, theta0: Theta, data: &F::Data, opts: &MLEOptions,
) -> OptResult<OptimOutcome> {
    f.check(&theta0, data)?;
    let problem = LogLikProblem::new(f, data);
    match opts.line_searcher {
        LineSearcher::MoreThuente => {
            let solver = build_optimizer_more_thuente(opts)?;
            run_lbfgs(theta0, opts, problem, solver)
        }
        LineSearcher::HagerZhang => {
            let solver = build_optimizer_hager_zhang(opts)?;
            run_lbfgs(theta0, opts, problem, solver)
        }
    }
}
