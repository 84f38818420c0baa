//! rasch_scoring — Rasch-model test scoring with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the scoring pipeline to Python via the `rasch_scoring` extension
//! module. When the `python-bindings` feature is enabled, this module defines
//! the Python-facing classes and functions used by the reporting stack.
//!
//! Key behaviors
//! -------------
//! - Expose the core Rust modules (`rasch`, `scoring`, and `optimization`)
//!   as the public crate surface.
//! - Define `#[pyclass]` wrappers and the `#[pymodule]` initializer for the
//!   `rasch_scoring` Python extension: the [`RaschModel`] estimator class,
//!   the [`ScoreReport`] result class, and the module-level `score` and
//!   `build_response_matrix` functions.
//!
//! Invariants & assumptions
//! ------------------------
//! - All heavy numerical work is implemented in the inner Rust modules; this
//!   file performs only FFI glue, input conversion, and error mapping.
//! - When `python-bindings` is enabled, the Python-visible types mirror the
//!   invariants and signatures of their Rust counterparts
//!   (`rasch::models::rasch::RaschModel`, `scoring::transform::ScoreReport`).
//! - On successful conversion from Python objects to Rust types, the
//!   invariants documented in the core modules are assumed to hold.
//!
//! Conventions
//! -----------
//! - Python-exposed items live directly on the `rasch_scoring` module; the
//!   surface is small enough (two classes, two functions) that no submodule
//!   split is warranted.
//! - Indexing and ordering conventions follow the documentation of the
//!   underlying Rust modules: persons in submission order, items in question
//!   order, ranks 1-based.
//! - Errors from core Rust code are propagated as rich error types internally
//!   and converted to `PyErr` (`ValueError`) values at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should usually depend directly on the inner modules
//!   (or their preludes) and can ignore the PyO3 items guarded by the
//!   `python-bindings` feature.
//! - Python callers run the pipeline as:
//!   `build_response_matrix` → `RaschModel(...).fit(...)` → `score(...)`,
//!   reading ranked rows off the returned report.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules
//!   and by the crate-level integration tests that exercise the full
//!   pipeline through the Rust API.
//! - Smoke tests for the PyO3 bindings verify that classes can be
//!   constructed, fitted, and read back correctly from Python.

pub mod optimization;
pub mod rasch;
pub mod scoring;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    rasch::{
        core::{key::AnswerKey, matrix::ResponseMatrix, options::FitMode},
        errors::RaschError,
        models,
    },
    scoring::{grade::GradeScale, transform},
    utils::{
        extract_f64_array, extract_f64_matrix, extract_fit_options, extract_string_list,
        extract_submissions,
    },
};

/// RaschModel — Python-facing wrapper for the Rasch joint-MLE estimator.
///
/// Purpose
/// -------
/// Expose the [`models::rasch::RaschModel`] API to Python callers while
/// preserving the core Rust invariants and error handling.
///
/// Key behaviors
/// -------------
/// - Build the inner model from Python-friendly arguments, with every
///   configuration knob optional and defaulted.
/// - Provide a `fit` method that converts a 2-D float64 array (or nested
///   sequences) into a validated binary response matrix and delegates to
///   the core implementation.
/// - Expose fitted difficulties, abilities, and the fit report's
///   diagnostics as property getters.
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `RaschModel(n_items, max_iter=None, tol=None, batch_size=None,
/// seed=None, line_searcher=None, lbfgs_mem=None, verbose=None)`:
/// - `n_items`: `usize`
///   Number of items on the test; must be positive and must match the
///   column count of every fitted matrix.
/// - `max_iter`: `Option<usize>`
///   Iteration cap (full batch) or outer round count (mini-batch);
///   defaults to 50.
/// - `tol`: `Option<f64>`
///   Shared gradient tolerance and mini-batch objective target; defaults
///   to 1e-3.
/// - `batch_size`: `Option<usize>`
///   Persons per mini-batch round; defaults to 2000. Zero or oversized
///   values select full-batch fitting.
/// - `seed`: `Option<u64>`
///   Optional RNG seed for reproducible batch sampling.
/// - `line_searcher`: `Option<str>`
///   `'MoreThuente'` (default) or `'HagerZhang'`, case-insensitive.
/// - `lbfgs_mem`: `Option<usize>`
///   Optional L-BFGS history size; must be positive when provided.
/// - `verbose`: `Option<bool>`
///   Optimizer progress reporting flag; defaults to `False`.
///
/// Fields
/// ------
/// - `inner`: [`models::rasch::RaschModel`]
///   Fully configured model that owns the fitted parameters and report.
///
/// Invariants
/// ----------
/// - `inner` is always a well-formed model created through validated
///   [`rasch::core::options::FitOptions`]; getter errors (`ValueError`)
///   rather than stale data are returned before the first successful fit.
///
/// Performance
/// -----------
/// - All heavy numerical work occurs inside `inner`; this wrapper performs
///   only input conversion, dispatch, and error mapping.
///
/// Notes
/// -----
/// - Native Rust callers should usually work with
///   [`models::rasch::RaschModel`] directly; this type exists solely for
///   the PyO3 binding surface.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rasch_scoring")]
pub struct RaschModel {
    /// Underlying Rust model.
    pub inner: models::rasch::RaschModel,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl RaschModel {
    #[new]
    #[pyo3(
        signature = (
            n_items,
            max_iter = None,
            tol = None,
            batch_size = None,
            seed = None,
            line_searcher = None,
            lbfgs_mem = None,
            verbose = None,
        ),
        text_signature = "(n_items, /, max_iter=None, tol=None, batch_size=None, seed=None, \
                          line_searcher=None, lbfgs_mem=None, verbose=None)"
    )]
    pub fn new(
        n_items: usize, max_iter: Option<usize>, tol: Option<f64>, batch_size: Option<usize>,
        seed: Option<u64>, line_searcher: Option<&str>, lbfgs_mem: Option<usize>,
        verbose: Option<bool>,
    ) -> PyResult<Self> {
        let options = extract_fit_options(
            max_iter,
            tol,
            batch_size,
            seed,
            line_searcher,
            lbfgs_mem,
            verbose,
        )?;
        let inner = models::rasch::RaschModel::new(n_items, options)?;
        Ok(RaschModel { inner })
    }

    #[pyo3(
        signature = (matrix, persons = None),
        text_signature = "(self, matrix, /, persons=None)"
    )]
    pub fn fit<'py>(
        &mut self, matrix: &Bound<'py, PyAny>, persons: Option<&Bound<'py, PyAny>>,
    ) -> PyResult<()> {
        let data = extract_f64_matrix(matrix)?;
        let labels = match persons {
            Some(raw) => extract_string_list(raw)?,
            None => (0..data.nrows()).map(|row| row.to_string()).collect(),
        };
        let graded = ResponseMatrix::from_binary(data, labels)?;
        self.inner.fit(&graded)?;
        Ok(())
    }

    /// Fitted item difficulties, in question order.
    #[getter]
    pub fn beta(&self) -> PyResult<Vec<f64>> {
        Ok(self.inner.beta()?.to_vec())
    }

    /// Fitted person abilities, in submission order.
    #[getter]
    pub fn theta(&self) -> PyResult<Vec<f64>> {
        Ok(self.inner.theta()?.to_vec())
    }

    /// Whether the last fit met its stopping rule before the iteration cap.
    #[getter]
    pub fn converged(&self) -> PyResult<bool> {
        match &self.inner.report {
            Some(report) => Ok(report.converged),
            None => Err(RaschError::NotFitted.into()),
        }
    }

    /// Whether the fitted matrix carried no ordering information.
    #[getter]
    pub fn degenerate(&self) -> PyResult<bool> {
        match &self.inner.report {
            Some(report) => Ok(report.degenerate),
            None => Err(RaschError::NotFitted.into()),
        }
    }

    /// `'full_batch'` or `'mini_batch'`, as selected for the last fit.
    #[getter]
    pub fn mode(&self) -> PyResult<&'static str> {
        match &self.inner.report {
            Some(report) => Ok(match report.mode {
                FitMode::FullBatch => "full_batch",
                FitMode::MiniBatch => "mini_batch",
            }),
            None => Err(RaschError::NotFitted.into()),
        }
    }

    /// Final negative log-likelihood of the last fit.
    #[getter]
    pub fn neg_log_lik(&self) -> PyResult<f64> {
        match &self.inner.report {
            Some(report) => Ok(report.neg_log_lik),
            None => Err(RaschError::NotFitted.into()),
        }
    }

    /// Human-readable solver termination status of the last fit.
    #[getter]
    pub fn status(&self) -> PyResult<String> {
        match &self.inner.report {
            Some(report) => Ok(report.status.clone()),
            None => Err(RaschError::NotFitted.into()),
        }
    }

    /// Number of items this model scores.
    #[getter]
    pub fn n_items(&self) -> usize {
        self.inner.n_items
    }
}

/// ScoreReport — ranked, graded report rows exposed to Python.
///
/// Purpose
/// -------
/// Present the rows and cohort statistics of a
/// [`transform::ScoreReport`] to Python code in a lightweight, read-only
/// wrapper.
///
/// Key behaviors
/// -------------
/// - Hold the per-person report built by the module-level `score`
///   function.
/// - Expose the rows as a plain Python list of
///   `(person, theta, ball, proportional, grade, rank)` tuples, plus the
///   cohort mean and standard deviation used by the standardization.
///
/// Parameters
/// ----------
/// Instances are constructed by the module-level `score` function and are
/// not created directly by user code.
///
/// Fields
/// ------
/// - `inner`: [`transform::ScoreReport`]
///   Full Rust-side report used by the accessors.
///
/// Invariants
/// ----------
/// - Rows are in submission order; `rank` fields form a permutation of
///   `1..=n_persons`.
///
/// Performance
/// -----------
/// - `rows` is O(n) in the cohort size when cloning into Python; the
///   scalar accessors are O(1).
///
/// Notes
/// -----
/// - Rust callers should use [`transform::ScoreReport`] directly; this
///   wrapper exists solely for the PyO3 binding.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rasch_scoring")]
pub struct ScoreReport {
    /// Underlying Rust report.
    pub inner: transform::ScoreReport,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl ScoreReport {
    /// Report rows as `(person, theta, ball, proportional, grade, rank)`
    /// tuples, in submission order.
    #[getter]
    pub fn rows(&self) -> Vec<(String, f64, f64, f64, String, usize)> {
        self.inner
            .records()
            .iter()
            .map(|record| {
                (
                    record.person.clone(),
                    record.theta,
                    record.ball,
                    record.proportional,
                    record.grade.label().to_string(),
                    record.rank,
                )
            })
            .collect()
    }

    /// Number of persons in the cohort.
    #[getter]
    pub fn n_persons(&self) -> usize {
        self.inner.n_persons()
    }

    /// Cohort mean of the untransformed abilities.
    #[getter]
    pub fn mean_theta(&self) -> f64 {
        self.inner.mean_theta()
    }

    /// Cohort population standard deviation of the untransformed abilities.
    #[getter]
    pub fn std_theta(&self) -> f64 {
        self.inner.std_theta()
    }
}

/// score — transform fitted abilities into a ranked, graded report.
///
/// Purpose
/// -------
/// Module-level entry point for the reporting step: standardize a fitted
/// ability vector onto the Ball scale, interpolate the proportional
/// score, assign grade bands, and rank the cohort.
///
/// Parameters
/// ----------
/// Called from Python via
/// `score(theta, persons, max_possible_score, seed=None)`:
/// - `theta`: 1-D float64 array-like of fitted abilities, one per person
///   in submission order.
/// - `persons`: sequence of person labels, one per ability.
/// - `max_possible_score`: `f64`
///   Ceiling of the proportional score; the number of items actually
///   scored for this cohort.
/// - `seed`: `Option<u64>`
///   Seed for the tie-breaking jitter; `None` draws from entropy.
///
/// Returns
/// -------
/// `PyResult<ScoreReport>`
///   The assembled report, with rows in submission order.
///
/// Errors
/// ------
/// - `ValueError`
///   If the cohort is empty, an ability is non-finite, the label count
///   differs from the ability count, or the ceiling is non-finite.
///
/// Notes
/// -----
/// - Grades come from the default band table (NC through A+); custom
///   tables are a Rust-level concern via
///   [`scoring::grade::GradeScale::new`].
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    signature = (theta, persons, max_possible_score, seed = None),
    text_signature = "(theta, persons, max_possible_score, /, seed=None)"
)]
pub fn score<'py>(
    py: Python<'py>, theta: &Bound<'py, PyAny>, persons: &Bound<'py, PyAny>,
    max_possible_score: f64, seed: Option<u64>,
) -> PyResult<ScoreReport> {
    let theta_arr = extract_f64_array(py, theta)?;
    let theta_slice = theta_arr.as_slice().map_err(|_| {
        PyValueError::new_err("theta must be a 1-D contiguous float64 array or sequence")
    })?;
    let labels = extract_string_list(persons)?;

    let inner = transform::ScoreReport::from_abilities(
        theta_slice,
        &labels,
        max_possible_score,
        seed,
        &GradeScale::default(),
    )?;
    Ok(ScoreReport { inner })
}

/// build_response_matrix — grade submissions against an answer key.
///
/// Purpose
/// -------
/// Module-level entry point for matrix construction: normalize the key
/// and the per-person answers, grade them into a binary matrix, and
/// return the rows together with the person labels.
///
/// Parameters
/// ----------
/// Called from Python via `build_response_matrix(key, submissions)`:
/// - `key`: sequence of correct-answer strings, one per item; entries
///   must be non-empty ASCII-alphanumeric tokens.
/// - `submissions`: sequence of `(person, answers)` pairs; `answers` is a
///   sequence of str compared item-by-item against the key (missing
///   trailing answers grade as incorrect).
///
/// Returns
/// -------
/// `PyResult<(rows, persons)>`
///   - `rows`: list of per-person lists of `0.0`/`1.0` floats, one row
///     per submission in input order.
///   - `persons`: list of person labels in the same order.
///
/// Errors
/// ------
/// - `ValueError`
///   If the key is empty or malformed, a person label is empty, or no
///   submissions are provided.
///
/// Notes
/// -----
/// - The returned rows feed `RaschModel.fit` directly; the labels feed
///   `score`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(signature = (key, submissions), text_signature = "(key, submissions)")]
pub fn build_response_matrix<'py>(
    key: &Bound<'py, PyAny>, submissions: &Bound<'py, PyAny>,
) -> PyResult<(Vec<Vec<f64>>, Vec<String>)> {
    let entries = extract_string_list(key)?;
    let answer_key = AnswerKey::new(&entries)?;
    let graded = ResponseMatrix::from_submissions(&answer_key, &extract_submissions(submissions)?)?;

    // Convert Array2<f64> → Vec<Vec<f64>> (row-major)
    let mut rows = Vec::with_capacity(graded.n_persons());
    for i in 0..graded.n_persons() {
        rows.push(graded.data.row(i).to_vec());
    }
    Ok((rows, graded.persons))
}

/// rasch_scoring — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `rasch_scoring` Python module: the estimator class, the
/// report class, and the two pipeline functions.
///
/// Parameters
/// ----------
/// - `_py`: [`Python`]
///   GIL token provided by PyO3 during module initialization.
/// - `m`: `&Bound<PyModule>`
///   Module object representing `rasch_scoring`.
///
/// Returns
/// -------
/// `PyResult<()>`
///   `Ok(())` on success, or a Python exception if registration fails.
///
/// Errors
/// ------
/// - `PyErr`
///   If registering a class or function fails.
///
/// Panics
/// ------
/// - Never panics under normal operation; all failures are mapped into
///   `PyErr`.
///
/// Notes
/// -----
/// - This function is invoked automatically by Python when importing the
///   compiled extension; it is not called directly by user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn rasch_scoring<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_class::<RaschModel>()?;
    m.add_class::<ScoreReport>()?;
    m.add_function(wrap_pyfunction!(score, m)?)?;
    m.add_function(wrap_pyfunction!(build_response_matrix, m)?)?;
    Ok(())
}
