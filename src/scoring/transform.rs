//! scoring::transform — ability-to-score transformation and ranked reports.
//!
//! Purpose
//! -------
//! Turn a fitted ability vector into the final per-person report rows:
//! a standardized Ball score, a bounded proportional score, a grade
//! label, and a 1-based rank. Raw percent-correct is a poor proxy for
//! ability when items vary in difficulty, so all reporting happens on
//! the cohort-standardized scale.
//!
//! Key behaviors
//! -------------
//! - `Ball = 50 + 10·z`, with the z-score computed from this cohort's
//!   mean and population standard deviation; a zero-variance cohort sets
//!   `z = 0` for everyone instead of propagating a NaN.
//! - Tie-breaking jitter `U[-0.05, 0.05)` is added per person from a
//!   seedable RNG; Ball is rounded to 2 decimals before and after the
//!   jitter, and grades and ranks are computed from the jittered value.
//! - `proportional = (theta − min)/(max − min)·(max_possible − 65) + 65`,
//!   collapsing to `65` for the whole cohort when the theta range is
//!   zero.
//! - Ranking sorts descending by Ball with a stable sort, so ties keep
//!   input order; ranks are 1-based.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are validated up front (non-empty cohort, finite abilities,
//!   one label per ability, finite ceiling); all downstream arithmetic
//!   is total on the validated domain.
//! - Rows are emitted in input (submission) order; `rank` encodes the
//!   sorted position instead of reordering the rows.
//! - A [`ScoreReport`] is immutable once built.
//!
//! Conventions
//! -----------
//! - The ceiling `max_possible` is the number of items actually scored
//!   for this cohort. The proportional formula is applied verbatim even
//!   when the ceiling is below 65, which produces a deliberately
//!   preserved degenerate (inverted) scale.
//! - `seed: None` draws jitter from entropy; regression tests pass
//!   `Some(seed)` to pin exact output.
//!
//! Downstream usage
//! ----------------
//! - The Python bindings build a [`ScoreReport`] from a fitted model's
//!   abilities and the matrix's person labels, then expose the rows as
//!   plain tuples for the reporting layer to render.
//!
//! Testing notes
//! -------------
//! - Unit tests pin the zero-ability cohort (Ball 50, proportional 65),
//!   monotone standardization, jitter bounds and seeding, proportional
//!   interpolation and its flat-cohort collapse, descending stable
//!   ranks, and validation rejections through the public constructor.

use rand::{Rng, SeedableRng, rngs::StdRng};
use statrs::statistics::Statistics;

use crate::scoring::{
    errors::ScoreResult,
    grade::{Grade, GradeScale},
    validation::validate_scoring_input,
};

/// One person's final report row.
///
/// Built once by [`ScoreReport::from_abilities`] and not mutated
/// afterwards; the reporting layer consumes rows as-is.
///
/// Fields
/// ------
/// - `person`: label from the submission.
/// - `theta`: fitted ability, untransformed.
/// - `ball`: standardized score after rounding and jitter.
/// - `proportional`: bounded interpolation between 65 and the ceiling.
/// - `grade`: band label assigned from the jittered Ball.
/// - `rank`: 1-based position in the descending Ball order.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRecord {
    /// Person label, as submitted.
    pub person: String,
    /// Fitted ability.
    pub theta: f64,
    /// Standardized Ball score (rounded, jittered, rounded).
    pub ball: f64,
    /// Proportional score on the `[65, max_possible]` scale.
    pub proportional: f64,
    /// Grade band of the Ball score.
    pub grade: Grade,
    /// 1-based rank, descending by Ball, ties in input order.
    pub rank: usize,
}

/// ScoreReport — ordered report rows plus cohort summary statistics.
///
/// Purpose
/// -------
/// Hold the per-person [`ScoreRecord`] rows in submission order together
/// with the cohort statistics the standardization used, so callers can
/// render a ranked table and report the cohort's location and spread
/// without recomputing them.
///
/// Invariants
/// ----------
/// - `records` is non-empty and in input order; `rank` fields form a
///   permutation of `1..=n`.
/// - `mean_theta` and `std_theta` are the cohort mean and population
///   standard deviation of the untransformed abilities.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreReport {
    records: Vec<ScoreRecord>,
    mean_theta: f64,
    std_theta: f64,
}

impl ScoreReport {
    /// Transform fitted abilities into ranked, graded report rows.
    ///
    /// Parameters
    /// ----------
    /// - `thetas`: `&[f64]`
    ///   Fitted abilities, one per person in submission order. Must be
    ///   non-empty and finite.
    /// - `persons`: `&[String]`
    ///   Person labels in the same order, one per ability.
    /// - `max_possible`: `f64`
    ///   Ceiling of the proportional score; the number of items actually
    ///   scored for this cohort. Must be finite.
    /// - `seed`: `Option<u64>`
    ///   Seed for the tie-breaking jitter; `None` draws from entropy.
    /// - `scale`: `&GradeScale`
    ///   Band table used to assign grade labels.
    ///
    /// Returns
    /// -------
    /// `ScoreResult<ScoreReport>`
    ///   - `Ok(report)` with one row per person, in input order:
    ///     `Ball = 50 + 10·z` (cohort population statistics, `z = 0` for
    ///     a zero-variance cohort), rounded to 2 decimals, jittered by
    ///     `U[-0.05, 0.05)`, and rounded again; the proportional score
    ///     interpolated between 65 and `max_possible` over the theta
    ///     range (65 everywhere when the range is zero); the grade
    ///     assigned from the jittered Ball; and 1-based descending ranks
    ///     with ties kept in input order.
    ///
    /// Errors
    /// ------
    /// - `ScoreError::EmptyScores`
    ///   Returned when `thetas` is empty.
    /// - `ScoreError::NonFiniteTheta { index, value }`
    ///   Returned for the first non-finite ability.
    /// - `ScoreError::PersonCountMismatch { thetas, persons }`
    ///   Returned when the label count differs from the ability count.
    /// - `ScoreError::InvalidMaxPossible { value }`
    ///   Returned when the ceiling is `NaN` or ±∞.
    ///
    /// Panics
    /// ------
    /// - Never panics on validated input; every arithmetic step is total
    ///   once validation passes.
    ///
    /// Notes
    /// -----
    /// - Grades and ranks are computed from the *jittered* Ball, so two
    ///   persons with equal raw Balls can land in different bands when
    ///   the jitter straddles a cut point.
    /// - A ceiling below 65 is accepted and produces an inverted
    ///   proportional scale; callers who care should choose their
    ///   ceiling accordingly.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use rasch_scoring::scoring::grade::GradeScale;
    /// # use rasch_scoring::scoring::transform::ScoreReport;
    /// let thetas = vec![0.0_f64, 0.0, 0.0];
    /// let persons: Vec<String> =
    ///     ["ana", "bo", "cy"].iter().map(|s| s.to_string()).collect();
    ///
    /// let report =
    ///     ScoreReport::from_abilities(&thetas, &persons, 30.0, Some(7), &GradeScale::default())
    ///         .unwrap();
    ///
    /// let first = &report.records()[0];
    /// assert!((first.ball - 50.0).abs() <= 0.05);
    /// assert!((first.proportional - 65.0).abs() < 1e-12);
    /// ```
    pub fn from_abilities(
        thetas: &[f64], persons: &[String], max_possible: f64, seed: Option<u64>,
        scale: &GradeScale,
    ) -> ScoreResult<Self> {
        validate_scoring_input(thetas, persons, max_possible)?;

        let mean_theta = thetas.mean();
        let std_theta = thetas.population_std_dev();
        let raw_balls = calc_raw_balls(thetas, mean_theta, std_theta);
        let balls = calc_jittered_balls(&raw_balls, seed);
        let proportional = calc_proportional_scores(thetas, max_possible);
        let ranks = calc_ranks(&balls);

        let mut records = Vec::with_capacity(thetas.len());
        for (index, person) in persons.iter().enumerate() {
            records.push(ScoreRecord {
                person: person.clone(),
                theta: thetas[index],
                ball: balls[index],
                proportional: proportional[index],
                grade: scale.assign(balls[index]),
                rank: ranks[index],
            });
        }
        Ok(ScoreReport { records, mean_theta, std_theta })
    }

    /// Report rows in submission order.
    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    /// Number of persons in the cohort.
    pub fn n_persons(&self) -> usize {
        self.records.len()
    }

    /// Cohort mean of the untransformed abilities.
    pub fn mean_theta(&self) -> f64 {
        self.mean_theta
    }

    /// Cohort population standard deviation of the untransformed
    /// abilities.
    pub fn std_theta(&self) -> f64 {
        self.std_theta
    }
}

//
// ---------- Private helpers (compact docs) ----------
//

/// Standardize abilities onto the Ball scale.
///
/// Parameters
/// ----------
/// - `thetas`: abilities in input order.
/// - `mean`: cohort mean of `thetas`.
/// - `std_dev`: cohort population standard deviation of `thetas`.
///
/// Returns
/// -------
/// `Vec<f64>` of `50 + 10·z` per person; all `50.0` when `std_dev` is
/// zero (a flat cohort carries no ordering information).
///
/// Notes
/// -----
/// - Monotone in `theta`: equal abilities map to equal Balls, larger
///   abilities to larger Balls.
#[inline]
fn calc_raw_balls(thetas: &[f64], mean: f64, std_dev: f64) -> Vec<f64> {
    thetas
        .iter()
        .map(|&theta| {
            let z = if std_dev > 0.0 { (theta - mean) / std_dev } else { 0.0 };
            50.0 + 10.0 * z
        })
        .collect()
}

/// Round, jitter, and re-round the raw Ball scores.
///
/// Parameters
/// ----------
/// - `raw_balls`: standardized scores before tie-breaking.
/// - `seed`: jitter seed; `None` draws from entropy.
///
/// Returns
/// -------
/// `Vec<f64>` where each entry is
/// `round2(round2(raw) + U[-0.05, 0.05))`, one independent half-open
/// uniform draw per person in input order.
///
/// Notes
/// -----
/// - The jitter exists purely to break ranking ties; its magnitude
///   cannot move a score by more than 0.05 in either direction.
#[inline]
fn calc_jittered_balls(raw_balls: &[f64], seed: Option<u64>) -> Vec<f64> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    raw_balls
        .iter()
        .map(|&ball| {
            let jitter = rng.gen_range(-0.05..0.05);
            calc_round2(calc_round2(ball) + jitter)
        })
        .collect()
}

/// Interpolate abilities onto the `[65, max_possible]` scale.
///
/// Parameters
/// ----------
/// - `thetas`: abilities in input order.
/// - `max_possible`: ceiling of the scale.
///
/// Returns
/// -------
/// `Vec<f64>` of `(theta − min)/(max − min)·(max_possible − 65) + 65`
/// per person; all `65.0` when the cohort's theta range is zero.
///
/// Notes
/// -----
/// - Applied verbatim for any finite ceiling, including ceilings below
///   65 that invert the scale.
#[inline]
fn calc_proportional_scores(thetas: &[f64], max_possible: f64) -> Vec<f64> {
    let min = thetas.min();
    let max = thetas.max();
    let range = max - min;
    thetas
        .iter()
        .map(|&theta| {
            if range > 0.0 {
                (theta - min) / range * (max_possible - 65.0) + 65.0
            } else {
                65.0
            }
        })
        .collect()
}

/// Assign 1-based descending ranks over the Ball scores.
///
/// Parameters
/// ----------
/// - `balls`: jittered Ball scores in input order.
///
/// Returns
/// -------
/// `Vec<usize>` where entry `i` is person `i`'s rank: 1 for the highest
/// Ball, ties resolved by input order via the stable sort.
#[inline]
fn calc_ranks(balls: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..balls.len()).collect();
    order.sort_by(|&a, &b| balls[b].total_cmp(&balls[a]));
    let mut ranks = vec![0_usize; balls.len()];
    for (position, &person) in order.iter().enumerate() {
        ranks[person] = position + 1;
    }
    ranks
}

/// Round to 2 decimal places, half away from zero.
#[inline]
fn calc_round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
