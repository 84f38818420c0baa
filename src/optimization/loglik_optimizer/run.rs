//! Executor glue: run a configured solver on a [`LogLikProblem`] and
//! normalize the terminal state into an [`OptimOutcome`].
use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{
        Grad, LogLikelihood, MLEOptions, OptimOutcome, Theta, adapter::LogLikProblem,
    },
};
#[cfg(feature = "obs_slog")]
use argmin::core::{CostFunction, Gradient};
use argmin::core::{Executor, State};
#[cfg(feature = "obs_slog")]
use argmin_math::ArgminL2Norm;

/// Execute an argmin solver on a log-likelihood problem.
///
/// Shared by both line-search variants: the caller builds the solver
/// (see [`builders`](crate::optimization::loglik_optimizer::builders)),
/// this function wires the executor state and collects the result.
///
/// Stopping rules from `opts.tols` are applied to the executor:
/// `max_iter` as the iteration cap and `target_cost` as the cost level
/// at which the run ends with `TargetCostReached`. Mini-batch fitting
/// relies on the latter to cut a round short once the objective
/// `c(theta) = -l(theta)` is already small enough.
///
/// With the `obs_slog` feature and `opts.verbose`, a terminal slog
/// observer is attached and one pre-iteration line reports the starting
/// log-likelihood and gradient norm.
///
/// # Returns
/// An [`OptimOutcome`] with the best iterate, the best value flipped
/// back into log-likelihood space, the termination status, and the
/// solver's counters.
///
/// # Errors
/// - Any argmin runtime failure (line search breakdown, non-finite
///   evaluations) converted through the crate's error type.
/// - Validation failures while assembling the [`OptimOutcome`].
pub fn run_lbfgs<'a, F, S>(
    theta0: Theta, opts: &MLEOptions, problem: LogLikProblem<'a, F>, solver: S,
) -> OptResult<OptimOutcome>
where
    F: LogLikelihood,
    S: argmin::core::Solver<
            LogLikProblem<'a, F>,
            argmin::core::IterState<Theta, Grad, (), (), (), f64>,
        > + Send
        + 'static,
{
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        log_initial_state(&theta0, &problem)?;
    }
    let mut optimizer = Executor::new(problem, solver);
    optimizer = optimizer.configure(|state| state.param(theta0));
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        let observer = argmin_observer_slog::SlogLogger::term_noblock();
        optimizer = optimizer.add_observer(observer, argmin::core::observers::ObserverMode::Always);
    }
    if let Some(max_iter) = opts.tols.max_iter {
        optimizer = optimizer.configure(|state| state.max_iters(max_iter as u64));
    }
    if let Some(target) = opts.tols.target_cost {
        optimizer = optimizer.configure(|state| state.target_cost(target));
    }

    let mut result = optimizer.run()?.state().clone();
    let iterations = result.get_iter();
    let function_counts = result.get_func_counts().clone();
    let termination = result.get_termination_status().clone();
    let grad = result.take_gradient();
    OptimOutcome::new(
        result.take_best_param(),
        -result.get_best_cost(),
        termination,
        iterations,
        function_counts,
        grad,
    )
}

// ---- Helper Methods ----

#[cfg(feature = "obs_slog")]
fn log_initial_state<F>(theta0: &Theta, problem: &LogLikProblem<'_, F>) -> OptResult<()>
where
    F: LogLikelihood,
{
    let ll0 = -problem.cost(theta0)?;
    let g0n = problem.gradient(theta0).ok().map(|g| g.l2_norm());

    eprintln!(
        "init: ell(theta0) = {:.6}{}",
        ll0,
        g0n.map(|n| format!(", ||grad|| = {:.6}", n)).unwrap_or_default()
    );
    Ok(())
}
