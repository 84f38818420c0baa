//! Rasch model: joint maximum-likelihood estimation over persons and items.
//!
//! This module wires the dichotomous Rasch likelihood to the
//! `LogLikelihood` trait and drives the batched L-BFGS fit. The optimizer
//! works on one unbounded vector laid out `[beta (n_items) | theta
//! (n_persons)]`; each evaluation decodes it through the smooth bounding
//! map and scores the response slice under the decoded parameters.
//!
//! Key ideas:
//! - Parameters live in unconstrained space; `RaschParams::from_unbounded`
//!   maps every iterate into the parameter box, so ability/difficulty
//!   gaps stay below the logistic saturation cutoff and the objective is
//!   finite at every reachable point.
//! - The gradient uses the chain rule: the analytic `[beta | theta]`
//!   gradient in bounded space, multiplied elementwise by the bounding
//!   map's slope.
//! - Small populations fit in one full-batch run; large ones iterate over
//!   sampled mini-batches with a warm-started parameter vector, ending
//!   early once a round's objective drops below the tolerance.
use ndarray::Array1;

use crate::{
    optimization::{
        errors::{OptError, OptResult},
        loglik_optimizer::{
            maximize, Grad, LogLikelihood, MLEOptions, OptimOutcome, Theta, Tolerances,
        },
        numerical_stability::bounded_slope,
    },
    rasch::{
        core::{
            likelihood::{grad_neg_log_likelihood, neg_log_likelihood},
            matrix::{ResponseMatrix, ResponseSlice},
            options::{FitMode, FitOptions},
            params::RaschParams,
            sampling::PersonSampler,
        },
        errors::{RaschError, RaschResult},
    },
};

/// Solver iteration cap for one mini-batch round.
///
/// Each round only needs to move the parameters toward the batch's
/// optimum; the outer loop supplies the remaining iterations on fresh
/// batches, so rounds are kept deliberately short.
pub const MINI_BATCH_INNER_ITERS: usize = 10;

/// Summary of one estimation run.
///
/// Purpose
/// -------
/// Record how a fit ran and how it ended, separately from the raw
/// optimizer outcome: the resolved batching mode, the convergence flag
/// under this crate's semantics, whether the response matrix was
/// degenerate, the final objective value, and the solver's own
/// termination status.
///
/// Fields
/// ------
/// - `mode`: [`FitMode`]
///   Whether the fit ran full-batch or in mini-batch rounds.
/// - `converged`: `bool`
///   `true` only when the final round ended by gradient tolerance or by
///   reaching the objective target; an exhausted iteration cap counts
///   as not converged.
/// - `degenerate`: `bool`
///   `true` when every response in the matrix was identical, so person
///   ordering carries no information.
/// - `neg_log_lik`: `f64`
///   Negative log-likelihood at the fitted parameters (of the final
///   round's batch under mini-batching).
/// - `outer_iterations`: `u64`
///   Solver iterations for a full-batch fit; completed rounds for a
///   mini-batch fit.
/// - `status`: `String`
///   The solver's termination reason, verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct FitReport {
    /// Resolved batching strategy.
    pub mode: FitMode,
    /// Convergence under this crate's semantics.
    pub converged: bool,
    /// Whether every response in the matrix was identical.
    pub degenerate: bool,
    /// Final negative log-likelihood.
    pub neg_log_lik: f64,
    /// Solver iterations (full batch) or completed rounds (mini-batch).
    pub outer_iterations: u64,
    /// Solver termination reason.
    pub status: String,
}

/// Dichotomous Rasch model with analytic log-likelihood and gradient.
///
/// Holds the item count fixed at construction, the estimation options,
/// and — after [`fit`](RaschModel::fit) — the raw optimizer outcome, the
/// decoded bounded parameters, and a [`FitReport`].
///
/// # Notes
/// - Implements [`LogLikelihood`] over [`ResponseSlice`] data, so the
///   same implementation serves full-batch runs and mini-batch rounds.
/// - Person abilities are tied to submission order; refitting on a new
///   matrix replaces all fitted state.
#[derive(Debug, Clone, PartialEq)]
pub struct RaschModel {
    /// Number of items (columns of the response matrix).
    pub n_items: usize,
    /// Estimation options.
    pub options: FitOptions,
    /// Optimizer outcome of the final round (populated after `fit`).
    pub results: Option<OptimOutcome>,
    /// Fitted bounded parameters (populated after `fit`).
    pub fitted_params: Option<RaschParams>,
    /// Fit summary (populated after `fit`).
    pub report: Option<FitReport>,
}

impl RaschModel {
    /// Construct a new [`RaschModel`] for a fixed number of items.
    ///
    /// # Arguments
    /// - `n_items`: number of items; must be positive.
    /// - `options`: estimation options (validated at their own
    ///   construction).
    ///
    /// # Returns
    /// An unfitted model.
    ///
    /// # Errors
    /// - [`RaschError::NoItems`] if `n_items == 0`.
    pub fn new(n_items: usize, options: FitOptions) -> RaschResult<RaschModel> {
        if n_items == 0 {
            return Err(RaschError::NoItems);
        }
        Ok(RaschModel { n_items, options, results: None, fitted_params: None, report: None })
    }

    /// Fit the model to a graded response matrix and cache results.
    ///
    /// ## Steps
    /// 1. Check the matrix against the model's item count and note
    ///    whether it is degenerate.
    /// 2. Start from the zero vector (every decoded parameter at 0) and
    ///    run either one full-batch optimization or warm-started
    ///    mini-batch rounds, as decided by
    ///    [`FitOptions::uses_mini_batch`].
    /// 3. Decode the final iterate into bounded parameters and store the
    ///    optimizer outcome, the parameters, and a [`FitReport`] on the
    ///    model.
    ///
    /// ## Arguments
    /// - `matrix`: graded binary response matrix, persons in submission
    ///   order.
    ///
    /// ## Returns
    /// - `Ok(())` on success; `self.results`, `self.fitted_params`, and
    ///   `self.report` are populated.
    ///
    /// ## Errors
    /// - [`RaschError::ItemCountMismatch`] when the matrix's item count
    ///   differs from the model's.
    /// - [`RaschError::OptimizationFailed`] wrapping any optimizer-layer
    ///   failure.
    ///
    /// ## Notes
    /// - An exhausted iteration cap is not an error: the fit returns
    ///   `Ok(())` with `report.converged == false` so callers can decide
    ///   how much to trust the estimates.
    /// - Mini-batch rounds share one parameter vector; each round warm
    ///   starts from the previous round's best iterate.
    pub fn fit(&mut self, matrix: &ResponseMatrix) -> RaschResult<()> {
        if matrix.n_items() != self.n_items {
            return Err(RaschError::ItemCountMismatch {
                expected: self.n_items,
                found: matrix.n_items(),
            });
        }
        let n_persons = matrix.n_persons();
        let degenerate = matrix.is_degenerate();
        let theta0 = Array1::<f64>::zeros(self.n_items + n_persons);
        let (outcome, mode, outer_iterations) = if self.options.uses_mini_batch(n_persons) {
            let (outcome, rounds) = self.fit_mini_batch(matrix, theta0)?;
            (outcome, FitMode::MiniBatch, rounds)
        } else {
            let outcome = self.fit_full_batch(matrix, theta0)?;
            let iterations = outcome.iterations as u64;
            (outcome, FitMode::FullBatch, iterations)
        };
        let fitted = RaschParams::from_unbounded(&outcome.theta_hat, self.n_items, n_persons)?;
        self.report = Some(FitReport {
            mode,
            converged: outcome.converged,
            degenerate,
            neg_log_lik: -outcome.value,
            outer_iterations,
            status: outcome.status.clone(),
        });
        self.fitted_params = Some(fitted);
        self.results = Some(outcome);
        Ok(())
    }

    /// Fitted item difficulties, in question order.
    ///
    /// # Errors
    /// - [`RaschError::NotFitted`] if called before a successful `fit`.
    pub fn beta(&self) -> RaschResult<&Array1<f64>> {
        Ok(&self.fitted_params.as_ref().ok_or(RaschError::NotFitted)?.beta)
    }

    /// Fitted person abilities, in submission order.
    ///
    /// # Errors
    /// - [`RaschError::NotFitted`] if called before a successful `fit`.
    pub fn theta(&self) -> RaschResult<&Array1<f64>> {
        Ok(&self.fitted_params.as_ref().ok_or(RaschError::NotFitted)?.theta)
    }

    /// One optimization over the whole population.
    ///
    /// Uses the gradient tolerance and iteration cap from the options;
    /// no objective target, so the run ends on gradient convergence or
    /// the cap.
    fn fit_full_batch(
        &self, matrix: &ResponseMatrix, theta0: Array1<f64>,
    ) -> RaschResult<OptimOutcome> {
        let slice = matrix.full_slice();
        let tols = Tolerances::new(Some(self.options.tol), None, Some(self.options.max_iter))?;
        let opts = self.mle_options(tols)?;
        Ok(maximize(self, theta0, &slice, &opts)?)
    }

    /// Warm-started optimization rounds over sampled person batches.
    ///
    /// Each round draws a fresh batch, runs at most
    /// [`MINI_BATCH_INNER_ITERS`] solver iterations from the previous
    /// round's best iterate, and the loop ends early once a round's
    /// negative log-likelihood drops below the tolerance. Returns the
    /// final round's outcome and the number of completed rounds.
    fn fit_mini_batch(
        &self, matrix: &ResponseMatrix, theta0: Array1<f64>,
    ) -> RaschResult<(OptimOutcome, u64)> {
        let n_persons = matrix.n_persons();
        let mut sampler = PersonSampler::new(self.options.seed);
        let mut warm = theta0;
        let mut rounds: u64 = 0;
        loop {
            rounds += 1;
            let persons = sampler.sample_batch(n_persons, self.options.batch_size);
            let slice = matrix.slice_rows(&persons)?;
            let tols = Tolerances::new(
                Some(self.options.tol),
                Some(self.options.tol),
                Some(MINI_BATCH_INNER_ITERS),
            )?;
            let opts = self.mle_options(tols)?;
            let round = maximize(self, warm, &slice, &opts)?;
            let nll = -round.value;
            if nll < self.options.tol || rounds >= self.options.max_iter as u64 {
                return Ok((round, rounds));
            }
            warm = round.theta_hat;
        }
    }

    /// Map the model's options into optimizer-layer options with the
    /// given tolerances.
    fn mle_options(&self, tols: Tolerances) -> OptResult<MLEOptions> {
        MLEOptions::new(
            tols,
            self.options.line_searcher,
            self.options.verbose,
            self.options.lbfgs_mem,
        )
    }
}

impl LogLikelihood for RaschModel {
    type Data = ResponseSlice;

    /// Log-likelihood evaluation at the unbounded vector `theta`.
    ///
    /// # Steps
    /// 1. Decode `theta` into bounded `[beta | theta]` parameters.
    /// 2. Evaluate the joint negative log-likelihood of the slice.
    /// 3. Return its negation (the maximized objective).
    ///
    /// # Arguments
    /// - `theta`: unbounded optimizer vector (len = `n_items + n_persons`).
    /// - `data`: response slice for this run or round.
    ///
    /// # Returns
    /// - Scalar log-likelihood, finite for every in-box decode: bounded
    ///   parameters keep ability/difficulty gaps below the saturation
    ///   cutoff, so no cell probability reaches exactly 0 or 1.
    ///
    /// # Errors
    /// - Dimension mismatches and non-finite entries surface as
    ///   [`OptError`] via the likelihood-input conversions.
    fn value(&self, theta: &Theta, data: &Self::Data) -> OptResult<f64> {
        let params = RaschParams::from_unbounded(theta, self.n_items, data.n_persons())?;
        let nll = neg_log_likelihood(data, &params)?;
        Ok(-nll)
    }

    /// Validate an unbounded parameter vector against the slice.
    ///
    /// # Behavior
    /// - Checks `theta.len() == n_items + n_persons`.
    /// - Ensures all entries are finite.
    ///
    /// # Arguments
    /// - `theta`: unbounded optimizer vector.
    ///
    /// # Returns
    /// - `Ok(())` if valid, error otherwise.
    fn check(&self, theta: &Theta, data: &Self::Data) -> OptResult<()> {
        let expected = self.n_items + data.n_persons();
        if theta.len() != expected {
            return Err(OptError::ThetaLengthMismatch { expected, actual: theta.len() });
        }
        for (index, &value) in theta.iter().enumerate() {
            if !value.is_finite() {
                return Err(OptError::InvalidThetaInput { index, value });
            }
        }
        Ok(())
    }

    /// Analytic gradient of the log-likelihood w.r.t. unbounded `theta`.
    ///
    /// # Steps
    /// 1. Decode `theta` and evaluate the `[beta | theta]` gradient of
    ///    the negative log-likelihood in bounded space.
    /// 2. Chain rule to unbounded space: multiply each coordinate by the
    ///    bounding map's slope at that coordinate.
    /// 3. Negate into the maximized objective's gradient.
    ///
    /// # Arguments
    /// - `theta`: unbounded optimizer vector.
    /// - `data`: response slice for this run or round.
    ///
    /// # Returns
    /// - Gradient vector of length `n_items + n_persons`; coordinates of
    ///   persons absent from the slice are exactly zero.
    ///
    /// # Errors
    /// - Dimension mismatches and non-finite entries surface as
    ///   [`OptError`] via the likelihood-input conversions.
    fn grad(&self, theta: &Theta, data: &Self::Data) -> OptResult<Grad> {
        let params = RaschParams::from_unbounded(theta, self.n_items, data.n_persons())?;
        let mut grad = grad_neg_log_likelihood(data, &params)?;
        for (g, &u) in grad.iter_mut().zip(theta.iter()) {
            *g *= -bounded_slope(u);
        }
        Ok(grad)
    }
}

#[cfg(test)]
mod tests {
    use ndarray::{array, Array2};

    use super::*;
    use crate::rasch::core::matrix::ResponseMatrix;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The `LogLikelihood` implementation: value at the zero vector,
    //   input validation, and gradient agreement with finite differences
    //   through the bounding chain rule.
    // - Full-batch fitting: convergence reporting on a symmetric matrix
    //   whose optimum is the zero vector, and ability/difficulty ordering
    //   on a larger matrix.
    // - Mini-batch fitting: mode selection, round accounting, and seeded
    //   reproducibility.
    // - Fitted-state accessors and input rejection.
    //
    // They intentionally DO NOT cover:
    // - Likelihood values and gradients in bounded space; those live with
    //   the core likelihood tests.
    // -------------------------------------------------------------------------

    fn matrix_of(data: Array2<f64>) -> ResponseMatrix {
        let labels = (0..data.nrows()).map(|i| format!("p{i}")).collect();
        ResponseMatrix::from_binary(data, labels).unwrap()
    }

    #[test]
    // Purpose
    // -------
    // Pin the objective at the zero vector, where every decoded
    // parameter is 0 and every cell probability is 0.5.
    //
    // Given
    // -----
    // - The 2x2 matrix [[1, 0], [0, 1]] and a zero optimizer vector.
    //
    // Expect
    // ------
    // - `value` returns `-4 ln 2`.
    fn value_at_zero_vector_matches_hand_computation() {
        let matrix = matrix_of(array![[1.0, 0.0], [0.0, 1.0]]);
        let slice = matrix.full_slice();
        let model = RaschModel::new(2, FitOptions::default()).unwrap();

        let value = model.value(&Array1::zeros(4), &slice).unwrap();

        assert!((value + 4.0 * 2.0_f64.ln()).abs() < 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Verify that `check` rejects wrong-length and non-finite vectors.
    //
    // Given
    // -----
    // - A 2x2 slice, a 3-vector, and a 4-vector containing NaN.
    //
    // Expect
    // ------
    // - `ThetaLengthMismatch` and `InvalidThetaInput` respectively.
    fn check_rejects_malformed_vectors() {
        let matrix = matrix_of(array![[1.0, 0.0], [0.0, 1.0]]);
        let slice = matrix.full_slice();
        let model = RaschModel::new(2, FitOptions::default()).unwrap();

        let short = model.check(&Array1::zeros(3), &slice);
        assert!(matches!(
            short.unwrap_err(),
            OptError::ThetaLengthMismatch { expected: 4, actual: 3 }
        ));

        let mut with_nan = Array1::zeros(4);
        with_nan[1] = f64::NAN;
        let invalid = model.check(&with_nan, &slice);
        assert!(matches!(invalid.unwrap_err(), OptError::InvalidThetaInput { index: 1, .. }));
    }

    #[test]
    // Purpose
    // -------
    // Check the unbounded-space gradient (analytic gradient plus
    // bounding chain rule) against central finite differences of
    // `value`.
    //
    // Given
    // -----
    // - A 3x2 matrix and a non-trivial unbounded vector.
    //
    // Expect
    // ------
    // - Every coordinate matches the central difference to within 1e-6.
    fn grad_matches_central_differences_of_value() {
        let matrix = matrix_of(array![[1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]);
        let slice = matrix.full_slice();
        let model = RaschModel::new(2, FitOptions::default()).unwrap();
        let theta = array![0.4, -1.1, 0.8, -0.3, 1.5];

        let grad = model.grad(&theta, &slice).unwrap();

        let h = 1e-5;
        for k in 0..theta.len() {
            let mut plus = theta.clone();
            let mut minus = theta.clone();
            plus[k] += h;
            minus[k] -= h;
            let fd = (model.value(&plus, &slice).unwrap() - model.value(&minus, &slice).unwrap())
                / (2.0 * h);
            assert!(
                (grad[k] - fd).abs() < 1e-6,
                "coordinate {k}: analytic {} vs central difference {fd}",
                grad[k]
            );
        }
    }

    #[test]
    // Purpose
    // -------
    // Fit a symmetric matrix whose joint optimum is the zero vector and
    // verify the report.
    //
    // Given
    // -----
    // - The 2x2 matrix [[1, 0], [0, 1]], where the gradient already
    //   vanishes at the zero start.
    //
    // Expect
    // ------
    // - A full-batch, converged, non-degenerate report with
    //   `neg_log_lik = 4 ln 2`, and near-zero fitted parameters.
    fn fit_converges_on_symmetric_matrix() {
        let matrix = matrix_of(array![[1.0, 0.0], [0.0, 1.0]]);
        let mut model = RaschModel::new(2, FitOptions::default()).unwrap();

        model.fit(&matrix).unwrap();

        let report = model.report.as_ref().unwrap();
        assert_eq!(report.mode, FitMode::FullBatch);
        assert!(report.converged);
        assert!(!report.degenerate);
        assert!((report.neg_log_lik - 4.0 * 2.0_f64.ln()).abs() < 1e-9);
        for &b in model.beta().unwrap().iter() {
            assert!(b.abs() < 1e-6);
        }
        for &t in model.theta().unwrap().iter() {
            assert!(t.abs() < 1e-6);
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that fitted abilities and difficulties order the way the
    // raw data does.
    //
    // Given
    // -----
    // - A 6x4 matrix with distinct person raw scores 3, 2, 1 (each
    //   twice) and item totals 4, 3, 3, 2, fit full-batch with a
    //   generous iteration cap.
    //
    // Expect
    // ------
    // - Persons with higher raw scores get strictly higher abilities;
    //   the easiest item gets a strictly lower difficulty than the
    //   hardest.
    fn fit_orders_abilities_and_difficulties() {
        let matrix = matrix_of(array![
            [1.0, 1.0, 1.0, 0.0],
            [1.0, 1.0, 0.0, 0.0],
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 1.0, 1.0],
            [1.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let mut options = FitOptions::default();
        options.max_iter = 500;
        let mut model = RaschModel::new(4, options).unwrap();

        model.fit(&matrix).unwrap();

        let theta = model.theta().unwrap();
        // Raw scores: persons 0/3 -> 3, persons 1/4 -> 2, persons 2/5 -> 1.
        assert!(theta[0] > theta[1]);
        assert!(theta[1] > theta[2]);
        assert!(theta[3] > theta[4]);
        assert!(theta[4] > theta[5]);
        let beta = model.beta().unwrap();
        // Item totals: item 0 -> 4 correct, item 3 -> 2 correct.
        assert!(beta[0] < beta[3]);
    }

    #[test]
    // Purpose
    // -------
    // Verify mini-batch mode selection, round accounting, and seeded
    // reproducibility.
    //
    // Given
    // -----
    // - A 12x3 matrix, `batch_size = 4`, `seed = Some(11)`, and at most
    //   5 outer rounds; two models fit with identical options.
    //
    // Expect
    // ------
    // - A mini-batch report with 1..=5 completed rounds, full-length
    //   fitted parameter arrays, and bitwise-identical abilities across
    //   the two fits.
    fn mini_batch_fit_is_reproducible_with_seed() {
        let data = array![
            [1.0, 0.0, 1.0],
            [1.0, 1.0, 1.0],
            [0.0, 0.0, 1.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 1.0],
            [1.0, 1.0, 1.0],
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 1.0],
            [0.0, 1.0, 0.0],
            [1.0, 1.0, 0.0],
        ];
        let mut options = FitOptions::default();
        options.batch_size = 4;
        options.seed = Some(11);
        options.max_iter = 5;

        let mut first = RaschModel::new(3, options.clone()).unwrap();
        first.fit(&matrix_of(data.clone())).unwrap();
        let mut second = RaschModel::new(3, options).unwrap();
        second.fit(&matrix_of(data)).unwrap();

        let report = first.report.as_ref().unwrap();
        assert_eq!(report.mode, FitMode::MiniBatch);
        assert!((1..=5).contains(&report.outer_iterations));
        assert_eq!(first.theta().unwrap().len(), 12);
        assert_eq!(first.beta().unwrap().len(), 3);
        assert_eq!(first.theta().unwrap(), second.theta().unwrap());
        assert_eq!(first.beta().unwrap(), second.beta().unwrap());
    }

    #[test]
    // Purpose
    // -------
    // Verify that a mini-batch fit ends on the objective rule rather
    // than the round cap when a round's negative log-likelihood is
    // already below the tolerance.
    //
    // Given
    // -----
    // - A 6x3 mixed matrix, `batch_size = 2`, a generous cap of 50
    //   rounds, and `tol = 1e6`, large enough that the very first
    //   round's objective undercuts it.
    //
    // Expect
    // ------
    // - A mini-batch report that stops after exactly one round with
    //   `converged == true`, a finite objective, and full-length fitted
    //   parameter arrays.
    fn mini_batch_fit_stops_early_when_objective_beats_tolerance() {
        let matrix = matrix_of(array![
            [1.0, 0.0, 1.0],
            [0.0, 1.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
            [1.0, 1.0, 1.0],
            [0.0, 1.0, 1.0],
        ]);
        let mut options = FitOptions::default();
        options.batch_size = 2;
        options.max_iter = 50;
        options.tol = 1e6;
        options.seed = Some(5);
        let mut model = RaschModel::new(3, options).unwrap();

        model.fit(&matrix).unwrap();

        let report = model.report.as_ref().unwrap();
        assert_eq!(report.mode, FitMode::MiniBatch);
        assert_eq!(report.outer_iterations, 1, "the first round already beats the tolerance");
        assert!(report.converged);
        assert!(report.neg_log_lik.is_finite());
        assert_eq!(model.theta().unwrap().len(), 6);
        assert_eq!(model.beta().unwrap().len(), 3);
    }

    #[test]
    // Purpose
    // -------
    // Verify the degenerate flag on an all-identical matrix.
    //
    // Given
    // -----
    // - A 3x2 all-zeros matrix and a short iteration cap.
    //
    // Expect
    // ------
    // - `fit` succeeds and the report marks the matrix degenerate.
    fn fit_flags_degenerate_matrix() {
        let matrix = matrix_of(Array2::zeros((3, 2)));
        let mut options = FitOptions::default();
        options.max_iter = 5;
        let mut model = RaschModel::new(2, options).unwrap();

        model.fit(&matrix).unwrap();

        assert!(model.report.as_ref().unwrap().degenerate);
    }

    #[test]
    // Purpose
    // -------
    // Verify unfitted-state and input rejection.
    //
    // Given
    // -----
    // - An unfitted model, a zero item count, and a matrix with the
    //   wrong item count.
    //
    // Expect
    // ------
    // - `NotFitted` from the accessors, `NoItems` from `new`, and
    //   `ItemCountMismatch` from `fit`.
    fn constructors_and_accessors_reject_invalid_state() {
        let model = RaschModel::new(3, FitOptions::default()).unwrap();
        assert_eq!(model.beta().unwrap_err(), RaschError::NotFitted);
        assert_eq!(model.theta().unwrap_err(), RaschError::NotFitted);

        assert_eq!(RaschModel::new(0, FitOptions::default()).unwrap_err(), RaschError::NoItems);

        let matrix = matrix_of(array![[1.0, 0.0], [0.0, 1.0]]);
        let mut model = RaschModel::new(3, FitOptions::default()).unwrap();
        assert_eq!(
            model.fit(&matrix).unwrap_err(),
            RaschError::ItemCountMismatch { expected: 3, found: 2 }
        );
    }
}
