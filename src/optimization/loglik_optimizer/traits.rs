//! Optimizer-facing configuration and result types.
//!
//! [`LogLikelihood`] is the one trait a model implements to be fitted;
//! [`MLEOptions`] and [`Tolerances`] configure a run; [`LineSearcher`]
//! picks the L-BFGS line search; [`OptimOutcome`] is what a run returns.
//!
//! Sign convention: callers think in log-likelihoods. A run maximizes
//! `l(theta)` by minimizing `c(theta) = -l(theta)` internally, and any
//! analytic gradient a model provides is the gradient of `l`; the
//! adapter owns the sign flips.
use crate::optimization::{
    errors::{OptError, OptResult},
    loglik_optimizer::{
        Cost, FnEvalMap, Grad, Theta,
        validation::{validate_theta_hat, validate_value, verify_target_cost, verify_tol_grad},
    },
};
use argmin::core::{TerminationReason, TerminationStatus};
use argmin_math::ArgminL2Norm;
use std::str::FromStr;

/// Log-likelihood interface a fittable model implements.
///
/// `type Data` is whatever payload the evaluations need alongside the
/// parameter vector; the Rasch layer passes the response slice under
/// fit.
///
/// Required:
/// - `value`: evaluate `l(theta)`. Report invalid inputs as an
///   `OptError`, never by panicking.
/// - `check`: reject an obviously bad `(theta, data)` pair. Runs once
///   before optimization starts.
///
/// Optional:
/// - `grad`: analytic gradient of `l`. When left unimplemented the
///   adapter falls back to finite differences of the cost.
pub trait LogLikelihood {
    type Data: 'static;

    // Required methods
    fn value(&self, theta: &Theta, data: &Self::Data) -> OptResult<Cost>;
    fn check(&self, theta: &Theta, data: &Self::Data) -> OptResult<()>;

    // Optional methods
    fn grad(&self, _theta: &Theta, _data: &Self::Data) -> OptResult<Grad> {
        Err(OptError::GradientNotImplemented)
    }
}

/// Line search run inside L-BFGS.
///
/// Parses from a string case-insensitively (`"MoreThuente"`,
/// `"HagerZhang"`); anything else is [`OptError::InvalidLineSearch`].
/// The string form exists for front-ends that take the choice as text,
/// such as the Python constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSearcher {
    MoreThuente,
    HagerZhang,
}

impl FromStr for LineSearcher {
    type Err = OptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "morethuente" => Ok(LineSearcher::MoreThuente),
            "hagerzhang" => Ok(LineSearcher::HagerZhang),
            _ => Err(OptError::InvalidLineSearch {
                name: s.to_string(),
                reason: "Valid options are case insensitive 'MoreThuente' or 'HagerZhang'.",
            }),
        }
    }
}

/// Per-run optimizer configuration.
///
/// - `tols`: stopping rules, see [`Tolerances`].
/// - `line_searcher`: line search used by L-BFGS.
/// - `verbose`: attach a progress observer (only effective with the
///   `obs_slog` feature).
/// - `lbfgs_mem`: L-BFGS history size; `None` means
///   [`DEFAULT_LBFGS_MEM`](crate::optimization::loglik_optimizer::DEFAULT_LBFGS_MEM).
///
/// The default configuration is a More-Thuente search with
/// `tol_grad = 1e-6`, no target objective, and a 300-iteration cap.
#[derive(Debug, Clone, PartialEq)]
pub struct MLEOptions {
    pub tols: Tolerances,
    pub line_searcher: LineSearcher,
    pub verbose: bool,
    pub lbfgs_mem: Option<usize>,
}

impl MLEOptions {
    /// Build validated options.
    ///
    /// Numeric stopping rules are validated by [`Tolerances::new`]; this
    /// constructor only has to reject a zero history size.
    ///
    /// # Errors
    /// - [`OptError::InvalidLBFGSMem`] if `lbfgs_mem == Some(0)`.
    pub fn new(
        tols: Tolerances, line_searcher: LineSearcher, verbose: bool, lbfgs_mem: Option<usize>,
    ) -> OptResult<Self> {
        if let Some(m) = lbfgs_mem {
            if m == 0 {
                return Err(OptError::InvalidLBFGSMem {
                    mem: m,
                    reason: "L-BFGS memory must be greater than zero.",
                });
            }
        }
        Ok(Self { tols, line_searcher, verbose, lbfgs_mem })
    }
}

impl Default for MLEOptions {
    fn default() -> Self {
        Self {
            tols: Tolerances::new(Some(1e-6), None, Some(300)).unwrap(),
            line_searcher: LineSearcher::MoreThuente,
            verbose: false,
            lbfgs_mem: None,
        }
    }
}

/// Stopping rules for one optimization run.
///
/// - `tol_grad`: stop once the gradient norm falls below this.
/// - `target_cost`: stop once the cost falls to or below this value.
///   Mini-batch fitting sets it so a round ends as soon as its objective
///   is already small enough.
/// - `max_iter`: hard iteration cap.
///
/// Each rule is optional, but at least one must be present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    pub tol_grad: Option<f64>,
    pub target_cost: Option<f64>,
    pub max_iter: Option<usize>,
}

impl Tolerances {
    /// Build validated stopping rules.
    ///
    /// `tol_grad` must be finite and strictly positive when given;
    /// `target_cost` finite (either sign, since a cost is a negated
    /// log-likelihood); `max_iter` nonzero when given.
    ///
    /// # Errors
    /// - [`OptError::NoTolerancesProvided`] when all three are `None`.
    /// - [`OptError::InvalidTolGrad`], [`OptError::InvalidTargetCost`],
    ///   or [`OptError::InvalidMaxIter`] for the offending rule.
    pub fn new(
        tol_grad: Option<f64>, target_cost: Option<f64>, max_iter: Option<usize>,
    ) -> OptResult<Self> {
        if tol_grad.is_none() && target_cost.is_none() && max_iter.is_none() {
            return Err(OptError::NoTolerancesProvided);
        }
        verify_tol_grad(tol_grad)?;
        verify_target_cost(target_cost)?;
        if let Some(max_iter) = max_iter {
            if max_iter == 0 {
                return Err(OptError::InvalidMaxIter {
                    max_iter,
                    reason: "Maximum iterations must be greater than zero.",
                });
            }
        }
        Ok(Self { tol_grad, target_cost, max_iter })
    }
}

/// Normalized result of one optimization run.
///
/// - `theta_hat`: best parameter vector found, validated finite.
/// - `value`: best log-likelihood `l(theta_hat)` (not the cost).
/// - `converged`: `true` only when the solver stopped on a convergence
///   criterion (gradient convergence or the target objective). An
///   exhausted iteration cap reports `false`.
/// - `status`: the termination reason, rendered for logs and reports.
/// - `iterations`: solver iterations performed.
/// - `fn_evals`: argmin's evaluation counters, keyed by counter name.
/// - `grad_norm`: norm of the last gradient the solver held, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimOutcome {
    pub theta_hat: Theta,
    pub value: f64,
    pub converged: bool,
    pub status: String,
    pub iterations: usize,
    pub fn_evals: FnEvalMap,
    pub grad_norm: Option<f64>,
}

impl OptimOutcome {
    /// Build a validated outcome from raw solver state.
    ///
    /// Validates `theta_hat` (present, all finite) and `value` (finite),
    /// then maps the termination status: `SolverConverged` and
    /// `TargetCostReached` count as convergence, everything else does
    /// not.
    ///
    /// # Errors
    /// - [`OptError::MissingThetaHat`] / [`OptError::InvalidThetaHat`]
    ///   for an absent or non-finite parameter vector.
    /// - [`OptError::NonFiniteCost`] for a non-finite best value.
    pub fn new(
        theta_hat_opt: Option<Theta>, value: f64, termination: TerminationStatus, iterations: u64,
        fn_evals: FnEvalMap, grad: Option<Grad>,
    ) -> OptResult<Self> {
        let theta_hat = validate_theta_hat(theta_hat_opt)?;
        validate_value(value)?;
        let (converged, status) = match &termination {
            TerminationStatus::NotTerminated => (false, "Not terminated".to_string()),
            TerminationStatus::Terminated(reason) => {
                let converged = matches!(
                    reason,
                    TerminationReason::SolverConverged | TerminationReason::TargetCostReached
                );
                (converged, format!("{reason:?}"))
            }
        };
        let iterations = iterations as usize;
        let grad_norm = grad.map(|g| g.l2_norm());
        Ok(Self { theta_hat, value, converged, status, iterations, fn_evals, grad_norm })
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Stopping-rule validation in `Tolerances::new` and the history-size
    //   check in `MLEOptions::new`.
    // - Case-insensitive parsing of `LineSearcher`.
    // - `OptimOutcome::new`: the termination-to-convergence mapping, the
    //   finiteness checks, and the gradient-norm computation.
    //
    // They intentionally DO NOT cover:
    // - Solver construction (builders tests) or execution (integration
    //   tests through the Rasch fitting layer).
    // -------------------------------------------------------------------------

    /// Outcome inputs that pass validation, for tests that vary one piece.
    fn valid_outcome_parts() -> (Option<Theta>, f64, FnEvalMap) {
        (Some(array![0.1, -0.2]), -3.5, FnEvalMap::new())
    }

    #[test]
    // Purpose
    // -------
    // Reject a stopping-rule set that can never terminate a run, and
    // each individually malformed rule.
    //
    // Given
    // -----
    // - All-`None` rules, a zero gradient tolerance, a NaN target, and a
    //   zero iteration cap.
    //
    // Expect
    // ------
    // - `NoTolerancesProvided`, `InvalidTolGrad`, `InvalidTargetCost`,
    //   and `InvalidMaxIter` respectively; a single valid rule passes.
    fn tolerances_reject_malformed_rules() {
        assert!(matches!(
            Tolerances::new(None, None, None).unwrap_err(),
            OptError::NoTolerancesProvided
        ));
        assert!(matches!(
            Tolerances::new(Some(0.0), None, Some(10)).unwrap_err(),
            OptError::InvalidTolGrad { .. }
        ));
        assert!(matches!(
            Tolerances::new(None, Some(f64::NAN), Some(10)).unwrap_err(),
            OptError::InvalidTargetCost { .. }
        ));
        assert!(matches!(
            Tolerances::new(Some(1e-6), None, Some(0)).unwrap_err(),
            OptError::InvalidMaxIter { .. }
        ));

        let tols = Tolerances::new(None, None, Some(25)).unwrap();
        assert_eq!(tols.max_iter, Some(25));
        assert_eq!(tols.tol_grad, None);
    }

    #[test]
    // Purpose
    // -------
    // Verify that a negative target objective is accepted.
    //
    // Given
    // -----
    // - `target_cost = Some(-12.0)` as the only rule.
    //
    // Expect
    // ------
    // - `Ok`: a cost is a negated log-likelihood and may be negative.
    fn tolerances_allow_negative_targets() {
        let tols = Tolerances::new(None, Some(-12.0), None).unwrap();
        assert_eq!(tols.target_cost, Some(-12.0));
    }

    #[test]
    // Purpose
    // -------
    // Verify line-search parsing in both casings and the rejection of an
    // unknown name.
    //
    // Given
    // -----
    // - `"morethuente"`, `"HAGERZHANG"`, and `"newton"`.
    //
    // Expect
    // ------
    // - The two known names parse regardless of case; the unknown name
    //   returns `InvalidLineSearch` carrying the offending string.
    fn line_searcher_parses_case_insensitively() {
        assert_eq!("morethuente".parse::<LineSearcher>().unwrap(), LineSearcher::MoreThuente);
        assert_eq!("HAGERZHANG".parse::<LineSearcher>().unwrap(), LineSearcher::HagerZhang);

        let err = "newton".parse::<LineSearcher>().unwrap_err();
        assert!(matches!(err, OptError::InvalidLineSearch { ref name, .. } if name == "newton"));
    }

    #[test]
    // Purpose
    // -------
    // Pin the option defaults and the zero-memory rejection.
    //
    // Given
    // -----
    // - `MLEOptions::default()` and a construction with `lbfgs_mem = 0`.
    //
    // Expect
    // ------
    // - Defaults: More-Thuente, quiet, default memory, `tol_grad = 1e-6`
    //   with a 300-iteration cap; the zero memory is `InvalidLBFGSMem`.
    fn mle_options_defaults_and_memory_check() {
        let opts = MLEOptions::default();
        assert_eq!(opts.line_searcher, LineSearcher::MoreThuente);
        assert!(!opts.verbose);
        assert_eq!(opts.lbfgs_mem, None);
        assert_eq!(opts.tols.tol_grad, Some(1e-6));
        assert_eq!(opts.tols.max_iter, Some(300));

        let err = MLEOptions::new(opts.tols, LineSearcher::HagerZhang, false, Some(0)).unwrap_err();
        assert!(matches!(err, OptError::InvalidLBFGSMem { mem: 0, .. }));
    }

    #[test]
    // Purpose
    // -------
    // Verify the termination-to-convergence mapping of the outcome.
    //
    // Given
    // -----
    // - Identical valid solver state terminated for four different
    //   reasons.
    //
    // Expect
    // ------
    // - `SolverConverged` and `TargetCostReached` set `converged = true`;
    //   `MaxItersReached` and `NotTerminated` set it to `false`, with the
    //   reason rendered into `status`.
    fn outcome_maps_termination_reasons() {
        let cases = [
            (TerminationStatus::Terminated(TerminationReason::SolverConverged), true),
            (TerminationStatus::Terminated(TerminationReason::TargetCostReached), true),
            (TerminationStatus::Terminated(TerminationReason::MaxItersReached), false),
            (TerminationStatus::NotTerminated, false),
        ];
        for (termination, expect_converged) in cases {
            let (theta_hat, value, fn_evals) = valid_outcome_parts();
            let outcome =
                OptimOutcome::new(theta_hat, value, termination, 7, fn_evals, None).unwrap();
            assert_eq!(outcome.converged, expect_converged);
            assert!(!outcome.status.is_empty());
            assert_eq!(outcome.iterations, 7);
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the outcome's validation and its gradient norm.
    //
    // Given
    // -----
    // - A missing parameter vector, a non-finite best value, and a valid
    //   state carrying gradient `[3, 4]`.
    //
    // Expect
    // ------
    // - `MissingThetaHat` and `NonFiniteCost` for the invalid states; a
    //   `grad_norm` of exactly 5.0 for the valid one.
    fn outcome_validates_state_and_computes_grad_norm() {
        let termination = TerminationStatus::Terminated(TerminationReason::SolverConverged);

        let err =
            OptimOutcome::new(None, -1.0, termination.clone(), 1, FnEvalMap::new(), None)
                .unwrap_err();
        assert!(matches!(err, OptError::MissingThetaHat));

        let err = OptimOutcome::new(
            Some(array![0.0]),
            f64::INFINITY,
            termination.clone(),
            1,
            FnEvalMap::new(),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, OptError::NonFiniteCost { .. }));

        let outcome = OptimOutcome::new(
            Some(array![0.0]),
            -1.0,
            termination,
            1,
            FnEvalMap::new(),
            Some(array![3.0, 4.0]),
        )
        .unwrap();
        assert_eq!(outcome.grad_norm, Some(5.0));
    }
}
