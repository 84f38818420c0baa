//! Fit options — configuration for the batched Rasch estimator.
//!
//! Purpose
//! -------
//! Collect the configuration knobs for joint maximum-likelihood fitting in
//! one place, making estimation runs explicit and reproducible. This
//! covers iteration caps, the shared convergence tolerance, mini-batch
//! sizing and seeding, and the optimizer backend controls (line search,
//! L-BFGS memory, verbosity).
//!
//! Key behaviors
//! -------------
//! - Represent estimation configuration via [`FitOptions`], with a
//!   validated constructor and documented defaults.
//! - Describe the resolved batching strategy via [`FitMode`], so reports
//!   can state whether a fit ran full-batch or in mini-batch rounds.
//! - Decide the batching strategy from the population size via
//!   [`FitOptions::uses_mini_batch`], including the silent full-batch
//!   fallbacks for `batch_size == 0` and `batch_size >= n_persons`.
//!
//! Invariants & assumptions
//! ------------------------
//! - `max_iter > 0` and `tol` is finite and strictly positive; both are
//!   enforced at construction.
//! - `batch_size` may be any value; zero and oversized values mean
//!   full-batch fitting rather than an error.
//! - `tol` is deliberately a single knob: it feeds the L-BFGS gradient
//!   tolerance in every run and additionally serves as the objective
//!   target that ends mini-batch rounds early.
//!
//! Conventions
//! -----------
//! - `seed = Some(s)` yields reproducible batch sampling and downstream
//!   jitter; `None` draws from system entropy.
//! - Optimizer-backend knobs (`line_searcher`, `lbfgs_mem`, `verbose`)
//!   are forwarded into `MLEOptions` by the model layer; this module
//!   stores them without interpretation.
//!
//! Downstream usage
//! ----------------
//! - `rasch::models` consumes [`FitOptions`] when driving the estimator
//!   and stamps the resolved [`FitMode`] into its fit report.
//! - The Python bindings construct [`FitOptions`] from keyword arguments
//!   with the same defaults.
//!
//! Testing notes
//! -------------
//! - Unit tests cover constructor validation (iteration cap, tolerance,
//!   L-BFGS memory), the documented defaults, and the batching decision
//!   at its boundaries.
use crate::{
    optimization::{errors::OptError, loglik_optimizer::LineSearcher},
    rasch::errors::{RaschError, RaschResult},
};

/// FitMode — resolved batching strategy for a fit.
///
/// Purpose
/// -------
/// Record whether an estimation run optimized over the whole response
/// matrix at once or iterated over sampled mini-batches. The mode is
/// derived from [`FitOptions::batch_size`] and the population size, so
/// the silent full-batch fallbacks are observable in reports.
///
/// Variants
/// --------
/// - `FullBatch`
///   A single optimization over every person.
/// - `MiniBatch`
///   Repeated rounds over sampled subsets with a warm-started parameter
///   vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitMode {
    FullBatch,
    MiniBatch,
}

/// FitOptions — estimation-time configuration for Rasch fitting.
///
/// Purpose
/// -------
/// Bundle every knob of the batched joint-MLE driver: the iteration cap,
/// the shared tolerance, mini-batch sizing and seeding, and the optimizer
/// backend controls.
///
/// Key behaviors
/// -------------
/// - Validates the numeric fields once at construction so the fitting
///   code can consume them without re-checking.
/// - Encodes the batching policy: mini-batching happens only when
///   `0 < batch_size < n_persons`; otherwise the fit silently runs
///   full-batch.
///
/// Fields
/// ------
/// - `max_iter`: `usize`
///   Solver iteration cap for a full-batch fit, and the number of outer
///   rounds for a mini-batch fit. Must be positive.
/// - `tol`: `f64`
///   Shared convergence tolerance: the L-BFGS gradient-norm tolerance in
///   every run, and the objective target that ends mini-batch rounds
///   early. Must be finite and strictly positive.
/// - `batch_size`: `usize`
///   Persons per mini-batch round. `0` or any value `>= n_persons`
///   selects full-batch fitting.
/// - `seed`: `Option<u64>`
///   Optional RNG seed for reproducible batch sampling. `None` draws
///   from system entropy.
/// - `line_searcher`: `LineSearcher`
///   Line-search strategy for the L-BFGS backend.
/// - `lbfgs_mem`: `Option<usize>`
///   Optional L-BFGS history size; `None` uses the optimizer default.
///   Must be positive when provided.
/// - `verbose`: `bool`
///   Forwarded to the optimizer layer to attach a progress observer
///   (behind the `obs_slog` feature).
///
/// Invariants
/// ----------
/// - `max_iter > 0`, `tol` finite and `> 0`, `lbfgs_mem` positive when
///   present.
///
/// Performance
/// -----------
/// - Small `Clone`/`PartialEq` struct; cheap to pass by value or store on
///   a model.
///
/// Notes
/// -----
/// - Public APIs should accept `FitOptions` rather than loose arguments
///   so defaults stay in one place.
#[derive(Debug, Clone, PartialEq)]
pub struct FitOptions {
    /// Solver iteration cap (full batch) or outer round count (mini-batch).
    pub max_iter: usize,
    /// Shared gradient tolerance and mini-batch objective target.
    pub tol: f64,
    /// Persons per mini-batch round; 0 means full batch.
    pub batch_size: usize,
    /// Optional RNG seed for reproducible sampling.
    pub seed: Option<u64>,
    /// Line-search strategy for L-BFGS.
    pub line_searcher: LineSearcher,
    /// Optional L-BFGS history size; `None` uses the optimizer default.
    pub lbfgs_mem: Option<usize>,
    /// Whether the optimizer should attach a progress observer.
    pub verbose: bool,
}

impl FitOptions {
    /// Construct validated [`FitOptions`].
    ///
    /// Parameters
    /// ----------
    /// - `max_iter`: `usize`
    ///   Iteration cap; must be positive.
    /// - `tol`: `f64`
    ///   Convergence tolerance; must be finite and strictly positive.
    /// - `batch_size`: `usize`
    ///   Persons per mini-batch round; any value is accepted (zero and
    ///   oversized values mean full batch).
    /// - `seed`: `Option<u64>`
    ///   Optional sampling seed.
    /// - `line_searcher`: [`LineSearcher`]
    ///   L-BFGS line-search strategy.
    /// - `lbfgs_mem`: `Option<usize>`
    ///   Optional L-BFGS history size; must be positive when provided.
    /// - `verbose`: `bool`
    ///   Optimizer progress reporting flag.
    ///
    /// Returns
    /// -------
    /// `RaschResult<FitOptions>`
    ///   - `Ok(options)` when every numeric field is valid.
    ///
    /// Errors
    /// ------
    /// - `RaschError::InvalidMaxIter` when `max_iter == 0`.
    /// - `RaschError::InvalidTol` when `tol` is non-finite or `<= 0`.
    /// - `RaschError::OptimizationFailed(OptError::InvalidLBFGSMem)` when
    ///   `lbfgs_mem == Some(0)`, matching the error the optimizer layer
    ///   would raise later.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use rasch_scoring::optimization::loglik_optimizer::LineSearcher;
    /// # use rasch_scoring::rasch::core::options::FitOptions;
    /// #
    /// let opts = FitOptions::new(
    ///     50,
    ///     1e-3,
    ///     2000,
    ///     Some(7),
    ///     LineSearcher::MoreThuente,
    ///     None,
    ///     false,
    /// )
    /// .unwrap();
    /// assert_eq!(opts.seed, Some(7));
    /// ```
    pub fn new(
        max_iter: usize, tol: f64, batch_size: usize, seed: Option<u64>,
        line_searcher: LineSearcher, lbfgs_mem: Option<usize>, verbose: bool,
    ) -> RaschResult<Self> {
        if max_iter == 0 {
            return Err(RaschError::InvalidMaxIter { max_iter });
        }
        if !tol.is_finite() || tol <= 0.0 {
            return Err(RaschError::InvalidTol { tol });
        }
        if let Some(mem) = lbfgs_mem {
            if mem == 0 {
                return Err(RaschError::OptimizationFailed(OptError::InvalidLBFGSMem {
                    mem,
                    reason: "L-BFGS memory must be greater than zero.",
                }));
            }
        }
        Ok(FitOptions { max_iter, tol, batch_size, seed, line_searcher, lbfgs_mem, verbose })
    }

    /// `true` when this configuration mini-batches a population of
    /// `n_persons`.
    ///
    /// Mini-batching requires `0 < batch_size < n_persons`; a zero or
    /// oversized `batch_size` silently selects full-batch fitting.
    pub fn uses_mini_batch(&self, n_persons: usize) -> bool {
        self.batch_size > 0 && self.batch_size < n_persons
    }
}

impl Default for FitOptions {
    /// Construct the documented default fitting configuration.
    ///
    /// Returns
    /// -------
    /// `FitOptions`
    ///   A configuration with:
    ///   - `max_iter = 50`
    ///   - `tol = 1e-3`
    ///   - `batch_size = 2000`
    ///   - `seed = None`
    ///   - `line_searcher = LineSearcher::MoreThuente`
    ///   - `lbfgs_mem = None`
    ///   - `verbose = false`
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use rasch_scoring::rasch::core::options::FitOptions;
    /// #
    /// let opts = FitOptions::default();
    /// assert_eq!(opts.max_iter, 50);
    /// assert_eq!(opts.batch_size, 2000);
    /// ```
    fn default() -> Self {
        FitOptions {
            max_iter: 50,
            tol: 1e-3,
            batch_size: 2000,
            seed: None,
            line_searcher: LineSearcher::MoreThuente,
            lbfgs_mem: None,
            verbose: false,
        }
    }
}
