//! Integration tests for the Rasch scoring pipeline.
//!
//! Purpose
//! -------
//! - Validate the end-to-end scoring pipeline: from an answer key and raw
//!   submissions, through binary matrix construction and joint MLE
//!   fitting, to standardized scores, grades, and ranks.
//! - Exercise realistic cohort regimes (messy answer strings, mixed raw
//!   scores, full-batch and mini-batch population sizes, degenerate
//!   matrices) rather than toy edge cases only.
//!
//! Coverage
//! --------
//! - `rasch::core`:
//!   - `AnswerKey` / `Submission` normalization feeding
//!     `ResponseMatrix::from_submissions` and `from_binary`.
//! - `rasch::models::rasch::RaschModel`:
//!   - Full-batch and mini-batch fitting, fit reports, and accessor
//!     error paths.
//! - `scoring::transform` and `scoring::grade`:
//!   - Ball standardization, proportional scores (including the
//!     documented sub-65 ceiling), grade bands, and ranking.
//! - `optimization::loglik_optimizer`:
//!   - Use of L-BFGS + line search via the model's `FitOptions`.
//!
//! Exclusions
//! ----------
//! - Fine-grained validation of low-level building blocks (likelihood
//!   values, samplers, numerical stability helpers) — these are covered
//!   by unit tests.
//! - Python bindings — those are expected to be tested at a higher
//!   integration or system level.
//! - Exhaustive stress testing over extreme cohort sizes — those belong
//!   in targeted performance tests.
use ndarray::Array2;
use rasch_scoring::{
    optimization::loglik_optimizer::traits::LineSearcher,
    rasch::{
        core::{
            key::{AnswerKey, Submission},
            matrix::ResponseMatrix,
            options::{FitMode, FitOptions},
        },
        errors::RaschError,
        models::rasch::RaschModel,
    },
    scoring::{grade::GradeScale, transform::ScoreReport},
};

/// Purpose
/// -------
/// Provide the six-item answer key shared by the class-level pipeline
/// tests.
///
/// Returns
/// -------
/// - An `AnswerKey` over the tokens `A, C, B, D, A, C` (normalized to
///   uppercase by the constructor).
///
/// Invariants
/// ----------
/// - Panics if key construction fails; all entries are ASCII
///   alphanumeric, so this is a test configuration error, not a runtime
///   error path under test.
fn class_key() -> AnswerKey {
    AnswerKey::new(&["A", "C", "B", "D", "A", "C"])
        .expect("AnswerKey::new should accept alphanumeric tokens")
}

/// Purpose
/// -------
/// Build an eight-person class with known raw scores and deliberately
/// messy answer strings, so the pipeline tests exercise normalization
/// alongside estimation.
///
/// Returns
/// -------
/// - Submissions in class order with raw scores 6, 5, 4, 3, 2, 2, 1, 0
///   against `class_key()`:
///   - `ana` answers everything correctly in lowercase,
///   - `dee` carries stray whitespace on a correct answer,
///   - `gus` submits only two (wrong) answers, so the missing trailing
///     items grade as incorrect.
///
/// Invariants
/// ----------
/// - Panics if any submission is rejected; every label is non-empty, so
///   construction should always succeed.
fn class_submissions() -> Vec<Submission> {
    let class: &[(&str, &[&str])] = &[
        ("ana", &["a", "c", "b", "d", "a", "c"]),   // 6 / 6
        ("bo", &["A", "C", "B", "D", "A", "B"]),    // 5 / 6
        ("cy", &["A", "C", "B", "D", "B", "B"]),    // 4 / 6
        ("dee", &[" a ", "c", "B", "A", "B", "B"]), // 3 / 6
        ("ed", &["A", "C", "D", "B", "B", "B"]),    // 2 / 6
        ("hana", &["A", "B", "B", "B", "C", "D"]),  // 2 / 6
        ("flo", &["B", "C", "D", "A", "B", "B"]),   // 1 / 6
        ("gus", &["B", "A"]),                       // 0 / 6 (short submission)
    ];
    class
        .iter()
        .map(|(person, answers)| {
            Submission::new(person, answers)
                .expect("Submission::new should accept non-empty labels")
        })
        .collect()
}

/// Purpose
/// -------
/// Provide a stable, documented `FitOptions` baseline for integration
/// tests, varying only the knobs a test is about.
///
/// Parameters
/// ----------
/// - `max_iter`: Iteration cap (full batch) or outer round count
///   (mini-batch); must be positive.
/// - `batch_size`: Persons per mini-batch round; `0` selects full-batch
///   fitting regardless of population size.
/// - `seed`: Optional RNG seed for reproducible batch sampling.
///
/// Configuration
/// -------------
/// - Tolerance: `1e-3` (gradient norm, and the mini-batch objective
///   target).
/// - Line search: `LineSearcher::MoreThuente`.
/// - Default L-BFGS memory, no progress observer.
///
/// Invariants
/// ----------
/// - Panics if `FitOptions::new` rejects the arguments; this is treated
///   as a test configuration error.
fn fit_options(max_iter: usize, batch_size: usize, seed: Option<u64>) -> FitOptions {
    FitOptions::new(max_iter, 1e-3, batch_size, seed, LineSearcher::MoreThuente, None, false)
        .expect("FitOptions::new should accept a positive cap and tolerance")
}

/// Purpose
/// -------
/// Construct a deterministic, mixed binary cohort for population-scale
/// tests without hand-writing large literals.
///
/// Parameters
/// ----------
/// - `n_persons`: Number of rows; must be `> 0`.
/// - `n_items`: Number of columns; must be `> 0`.
///
/// Returns
/// -------
/// - A `ResponseMatrix` with entry `(i, j)` correct iff
///   `(7·i + 13·j) mod 23 < 11`, labeled `s0..s{n_persons-1}`.
///
/// Invariants
/// ----------
/// - The residue pattern guarantees every row mixes correct and
///   incorrect answers (no all-ones or all-zeros rows), so the cohort is
///   never degenerate.
fn synthetic_cohort(n_persons: usize, n_items: usize) -> ResponseMatrix {
    let data = Array2::from_shape_fn((n_persons, n_items), |(i, j)| {
        if (i * 7 + j * 13) % 23 < 11 { 1.0 } else { 0.0 }
    });
    let labels = (0..n_persons).map(|i| format!("s{i}")).collect();
    ResponseMatrix::from_binary(data, labels)
        .expect("ResponseMatrix::from_binary should accept a strictly binary pattern")
}

#[test]
// Purpose
// -------
// Run the complete pipeline — answer key, graded matrix, full-batch
// joint fit, score transformation — and verify the ranked report a
// caller would hand to the reporting layer.
//
// Given
// -----
// - The eight-person class with raw scores 6, 5, 4, 3, 2, 2, 1, 0,
//   including messy casing, stray whitespace, and a short submission.
// - Full-batch options with a generous iteration cap; scoring with the
//   item count as the ceiling and a fixed jitter seed.
//
// Expect
// ------
// - Grading: an 8x6 matrix with hand-checked rows for the perfect, the
//   partial, and the short submission.
// - Fitting: a full-batch, non-degenerate report; full-length finite
//   parameters inside the box; abilities ordered like the raw scores
//   and difficulties ordered like the item totals.
// - Scoring: rows in submission order, ranks a permutation of 1..=8
//   with the perfect score first and the empty score last, Balls
//   non-increasing along the rank order, grades drawn from the default
//   band table, and the sub-65 ceiling producing the documented
//   inverted proportional scale (top person 6, bottom person 65).
fn pipeline_scores_a_graded_class_into_ranked_rows() {
    // Arrange
    let key = class_key();
    let submissions = class_submissions();

    // Act: grade.
    let matrix = ResponseMatrix::from_submissions(&key, &submissions)
        .expect("grading should succeed for a labeled, non-empty class");

    // Assert: grading.
    assert_eq!(matrix.n_persons(), 8);
    assert_eq!(matrix.n_items(), 6);
    assert!(!matrix.is_degenerate());
    assert_eq!(matrix.data.row(0).to_vec(), vec![1.0; 6], "perfect submission");
    assert_eq!(matrix.data.row(3).to_vec(), vec![1.0, 1.0, 1.0, 0.0, 0.0, 0.0]);
    assert_eq!(matrix.data.row(7).to_vec(), vec![0.0; 6], "missing answers grade as incorrect");

    // Act: fit.
    let mut model = RaschModel::new(6, fit_options(300, 0, None))
        .expect("RaschModel::new should accept a positive item count");
    model.fit(&matrix).expect("full-batch fit should succeed on a graded class");

    // Assert: fit report and parameter shape.
    let report = model.report.as_ref().expect("fit should leave a report on the model");
    assert_eq!(report.mode, FitMode::FullBatch);
    assert!(!report.degenerate);
    assert!(report.neg_log_lik.is_finite() && report.neg_log_lik >= 0.0);

    let theta = model.theta().expect("abilities should be available after fit");
    let beta = model.beta().expect("difficulties should be available after fit");
    assert_eq!(theta.len(), 8);
    assert_eq!(beta.len(), 6);
    assert!(theta.iter().chain(beta.iter()).all(|v| v.is_finite() && v.abs() <= 5.0));
    // Raw scores 6 > 3 > 0 must order the fitted abilities.
    assert!(theta[0] > theta[3] && theta[3] > theta[7]);
    // Item totals 6 > 3 > 1 must order the fitted difficulties.
    assert!(beta[0] < beta[3] && beta[3] < beta[5]);

    // Act: score.
    let scored = ScoreReport::from_abilities(
        &theta.to_vec(),
        &matrix.persons,
        matrix.n_items() as f64,
        Some(17),
        &GradeScale::default(),
    )
    .expect("scoring should succeed for a finite fitted cohort");

    // Assert: ranked rows.
    assert_eq!(scored.n_persons(), 8);
    let records = scored.records();
    for (record, submission) in records.iter().zip(&submissions) {
        assert_eq!(record.person, submission.person, "rows stay in submission order");
    }
    assert_eq!(records[0].rank, 1, "the perfect score ranks first");
    assert_eq!(records[7].rank, 8, "the empty score ranks last");
    let mut ranks: Vec<usize> = records.iter().map(|r| r.rank).collect();
    ranks.sort_unstable();
    assert_eq!(ranks, (1..=8).collect::<Vec<_>>());

    let mut by_rank: Vec<_> = records.iter().collect();
    by_rank.sort_by_key(|record| record.rank);
    for pair in by_rank.windows(2) {
        assert!(pair[0].ball >= pair[1].ball, "Balls must not increase along the rank order");
    }

    let scale = GradeScale::default();
    for record in records {
        assert!(
            scale.bands().iter().any(|(_, label)| label == record.grade.label()),
            "grade {} is not in the default band table",
            record.grade
        );
    }

    // The sub-65 ceiling inverts the proportional scale, by design.
    assert!((records[0].proportional - 6.0).abs() < 1e-9);
    assert!((records[7].proportional - 65.0).abs() < 1e-9);
}

#[test]
// Purpose
// -------
// Verify that the batching policy selects the documented path for a
// population-scale cohort and that both paths produce complete,
// bounded estimates.
//
// Given
// -----
// - A synthetic 120-person, 10-item cohort.
// - One model fit with `batch_size = 0` (always full batch) and one
//   with `batch_size = 30` and a seed (mini-batch, since 0 < 30 < 120)
//   capped at 8 outer rounds.
//
// Expect
// ------
// - `FitMode::FullBatch` and `FitMode::MiniBatch` respectively, with
//   the mini-batch round count in 1..=8.
// - Both fits yield 120 abilities and 10 difficulties, all finite and
//   inside the parameter box.
fn full_batch_and_mini_batch_paths_both_produce_complete_estimates() {
    // Arrange
    let matrix = synthetic_cohort(120, 10);

    // Act
    let mut full = RaschModel::new(10, fit_options(40, 0, None))
        .expect("RaschModel::new should accept a positive item count");
    full.fit(&matrix).expect("full-batch fit should succeed on the synthetic cohort");

    let mut mini = RaschModel::new(10, fit_options(8, 30, Some(9)))
        .expect("RaschModel::new should accept a positive item count");
    mini.fit(&matrix).expect("mini-batch fit should succeed on the synthetic cohort");

    // Assert
    let full_report = full.report.as_ref().expect("full-batch report");
    assert_eq!(full_report.mode, FitMode::FullBatch);
    let mini_report = mini.report.as_ref().expect("mini-batch report");
    assert_eq!(mini_report.mode, FitMode::MiniBatch);
    assert!((1..=8).contains(&mini_report.outer_iterations));

    for model in [&full, &mini] {
        let theta = model.theta().expect("abilities after fit");
        let beta = model.beta().expect("difficulties after fit");
        assert_eq!(theta.len(), 120);
        assert_eq!(beta.len(), 10);
        assert!(theta.iter().chain(beta.iter()).all(|v| v.is_finite() && v.abs() <= 5.0));
    }
}

#[test]
// Purpose
// -------
// Verify that the full pipeline is reproducible end to end when both
// the sampler and the jitter are seeded.
//
// Given
// -----
// - A synthetic 90-person, 8-item cohort fit twice with identical
//   mini-batch options (`batch_size = 25`, `seed = 42`, 6 rounds), each
//   fit scored with jitter seed 3.
//
// Expect
// ------
// - Bitwise-identical abilities, difficulties, and round counts across
//   the two fits, and equal score reports row for row.
fn seeded_pipeline_reproduces_fits_and_reports_exactly() {
    // Arrange
    let matrix = synthetic_cohort(90, 8);
    let options = fit_options(6, 25, Some(42));

    // Act
    let mut first = RaschModel::new(8, options.clone())
        .expect("RaschModel::new should accept a positive item count");
    first.fit(&matrix).expect("seeded mini-batch fit should succeed");
    let mut second = RaschModel::new(8, options)
        .expect("RaschModel::new should accept a positive item count");
    second.fit(&matrix).expect("repeating the seeded fit should succeed");

    // Assert: estimation determinism.
    assert_eq!(first.theta().unwrap(), second.theta().unwrap());
    assert_eq!(first.beta().unwrap(), second.beta().unwrap());
    assert_eq!(
        first.report.as_ref().unwrap().outer_iterations,
        second.report.as_ref().unwrap().outer_iterations
    );

    // Assert: scoring determinism on top of it.
    let scale = GradeScale::default();
    let scored_first = ScoreReport::from_abilities(
        &first.theta().unwrap().to_vec(),
        &matrix.persons,
        8.0,
        Some(3),
        &scale,
    )
    .expect("scoring the first fit should succeed");
    let scored_second = ScoreReport::from_abilities(
        &second.theta().unwrap().to_vec(),
        &matrix.persons,
        8.0,
        Some(3),
        &scale,
    )
    .expect("scoring the second fit should succeed");
    assert_eq!(scored_first, scored_second);
}

#[test]
// Purpose
// -------
// Confirm that an all-identical matrix completes the whole pipeline:
// the fit flags the degeneracy instead of failing, and the flat cohort
// scores to the centered Ball and the proportional floor.
//
// Given
// -----
// - A 5x4 all-ones matrix (every person answered every item correctly),
//   fit full-batch, then scored with ceiling 4 and a fixed jitter seed.
//
// Expect
// ------
// - `fit` returns `Ok` with `degenerate = true` and five identical
//   abilities.
// - Every Ball within the jitter of 50, every proportional exactly 65,
//   and ranks forming a permutation of 1..=5.
fn all_identical_cohort_completes_and_scores_flat() {
    // Arrange
    let data = Array2::from_elem((5, 4), 1.0);
    let labels = (0..5).map(|i| format!("p{i}")).collect();
    let matrix = ResponseMatrix::from_binary(data, labels)
        .expect("an all-ones matrix is still strictly binary");
    assert!(matrix.is_degenerate());

    // Act: fit.
    let mut model = RaschModel::new(4, fit_options(30, 0, None))
        .expect("RaschModel::new should accept a positive item count");
    model.fit(&matrix).expect("degenerate matrices still fit");

    // Assert: completion with the degeneracy flagged.
    let report = model.report.as_ref().expect("report after fit");
    assert!(report.degenerate);
    assert_eq!(report.mode, FitMode::FullBatch);
    let theta = model.theta().expect("abilities after fit");
    assert_eq!(theta.len(), 5);
    for &t in theta.iter() {
        assert!((t - theta[0]).abs() < 1e-9, "identical rows must get identical abilities");
    }

    // Act: score the flat cohort.
    let scored = ScoreReport::from_abilities(
        &theta.to_vec(),
        &matrix.persons,
        4.0,
        Some(7),
        &GradeScale::default(),
    )
    .expect("flat cohorts score without NaNs");

    // Assert: centered Balls, floor proportional, full rank permutation.
    let mut ranks: Vec<usize> = scored.records().iter().map(|r| r.rank).collect();
    ranks.sort_unstable();
    assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
    for record in scored.records() {
        assert!((record.ball - 50.0).abs() <= 0.05 + 1e-9);
        assert!((record.proportional - 65.0).abs() < 1e-12);
    }
}

#[test]
// Purpose
// -------
// Verify that a model built for the wrong item count rejects a graded
// matrix up front and stays unfitted.
//
// Given
// -----
// - The 6-item class matrix and a model constructed for 5 items.
//
// Expect
// ------
// - `fit` returns `RaschError::ItemCountMismatch { expected: 5,
//   found: 6 }` and the accessors keep reporting `NotFitted`.
fn fit_rejects_an_item_count_mismatch() {
    // Arrange
    let matrix = ResponseMatrix::from_submissions(&class_key(), &class_submissions())
        .expect("grading should succeed for the class");
    let mut model = RaschModel::new(5, fit_options(20, 0, None))
        .expect("RaschModel::new should accept a positive item count");

    // Act
    let result = model.fit(&matrix);

    // Assert
    assert!(matches!(
        result.unwrap_err(),
        RaschError::ItemCountMismatch { expected: 5, found: 6 }
    ));
    assert!(matches!(model.theta(), Err(RaschError::NotFitted)));
}
