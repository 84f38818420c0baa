//! scoring::grade — grade labels and configurable band tables.
//!
//! Purpose
//! -------
//! Map standardized Ball scores into categorical grade labels through an
//! ordered table of (lower bound, label) cut points. The default table
//! reproduces the report bands used by the grading pipeline; custom
//! tables let callers re-cut a test without touching the transformer.
//!
//! Key behaviors
//! -------------
//! - [`GradeScale::assign`] picks the band whose half-open interval
//!   `[bound, next bound)` contains the score; scores below the first
//!   bound clamp into the first band, scores at or above the last bound
//!   take the last label.
//! - [`GradeScale::new`] validates custom tables (non-empty, finite
//!   strictly ascending bounds, non-empty labels); the `Default` table is
//!   ascending by construction.
//!
//! Invariants & assumptions
//! ------------------------
//! - Bounds are finite and strictly ascending; labels are non-empty.
//! - A scale is immutable after construction and fixed for the lifetime
//!   of a fit run.
//!
//! Conventions
//! -----------
//! - Bands are stored low to high; `assign` walks the table once, so
//!   lookup is O(number of bands).
//!
//! Downstream usage
//! ----------------
//! - The score transformer assigns a [`Grade`] to each person's jittered
//!   Ball score; the Python bindings expose the default table verbatim.
//!
//! Testing notes
//! -------------
//! - Unit tests pin the default band edges (45.99 vs 46.00, 69.99 vs
//!   70.00, values above the top bound, negative values) and exercise
//!   custom-table assignment and every construction error branch.

use crate::scoring::errors::{ScoreError, ScoreResult};

/// A categorical grade label assigned from a [`GradeScale`].
///
/// Wraps the band's label string; compare via [`Grade::label`] or the
/// `Display` implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grade(String);

impl Grade {
    /// The label text of this grade (e.g. `"B+"`).
    pub fn label(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// GradeScale — ordered (lower bound, label) cut points on the Ball score.
///
/// Purpose
/// -------
/// Hold a validated ascending band table and assign a [`Grade`] to any
/// score. The default table is
/// `[0,46)→NC, [46,50)→C, [50,55)→C+, [55,60)→B, [60,65)→B+, [65,70)→A,
/// [70,∞)→A+`, with scores below 0 clamped into the NC band.
///
/// Invariants
/// ----------
/// - At least one band; bounds finite and strictly ascending; labels
///   non-empty after trimming.
///
/// Notes
/// -----
/// - `assign` never fails: every real score falls into exactly one band
///   once below-table scores are clamped into the first.
#[derive(Debug, Clone, PartialEq)]
pub struct GradeScale {
    bands: Vec<(f64, String)>,
}

impl GradeScale {
    /// Construct a scale from a custom ascending (bound, label) table.
    ///
    /// Parameters
    /// ----------
    /// - `bands`: `Vec<(f64, String)>`
    ///   Lower bounds with their labels, low to high. Each band covers
    ///   `[bound, next bound)`; the last band is unbounded above.
    ///
    /// Returns
    /// -------
    /// `ScoreResult<GradeScale>`
    ///   - `Ok(scale)` when the table is non-empty, every bound is finite
    ///     and strictly exceeds its predecessor, and every label is
    ///     non-empty after trimming.
    ///
    /// Errors
    /// ------
    /// - `ScoreError::EmptyGradeTable` when `bands` is empty.
    /// - `ScoreError::NonFiniteGradeBound { index, value }` for the first
    ///   NaN or infinite bound.
    /// - `ScoreError::NonAscendingGradeBounds { index }` for the first
    ///   bound that does not strictly exceed its predecessor.
    /// - `ScoreError::EmptyGradeLabel { index }` for the first label that
    ///   is empty after trimming.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use rasch_scoring::scoring::grade::GradeScale;
    /// let scale = GradeScale::new(vec![
    ///     (0.0, "fail".to_string()),
    ///     (60.0, "pass".to_string()),
    /// ])
    /// .unwrap();
    /// assert_eq!(scale.assign(59.9).label(), "fail");
    /// assert_eq!(scale.assign(60.0).label(), "pass");
    /// ```
    pub fn new(bands: Vec<(f64, String)>) -> ScoreResult<Self> {
        if bands.is_empty() {
            return Err(ScoreError::EmptyGradeTable);
        }
        for (index, (bound, label)) in bands.iter().enumerate() {
            if !bound.is_finite() {
                return Err(ScoreError::NonFiniteGradeBound { index, value: *bound });
            }
            if label.trim().is_empty() {
                return Err(ScoreError::EmptyGradeLabel { index });
            }
            if index > 0 && bands[index - 1].0 >= *bound {
                return Err(ScoreError::NonAscendingGradeBounds { index });
            }
        }
        Ok(GradeScale { bands })
    }

    /// Assign the grade whose band contains `score`.
    ///
    /// Walks the ascending table and keeps the last band whose lower
    /// bound the score reaches. Scores below the first bound clamp into
    /// the first band; scores at or above the last bound take the last
    /// label.
    pub fn assign(&self, score: f64) -> Grade {
        let mut label = &self.bands[0].1;
        for (bound, band_label) in &self.bands {
            if score >= *bound {
                label = band_label;
            } else {
                break;
            }
        }
        Grade(label.clone())
    }

    /// The validated (bound, label) table, low to high.
    pub fn bands(&self) -> &[(f64, String)] {
        &self.bands
    }

    /// Number of bands in the table.
    pub fn n_bands(&self) -> usize {
        self.bands.len()
    }
}

impl Default for GradeScale {
    /// The report band table used by the grading pipeline.
    fn default() -> Self {
        let bands = [
            (0.0, "NC"),
            (46.0, "C"),
            (50.0, "C+"),
            (55.0, "B"),
            (60.0, "B+"),
            (65.0, "A"),
            (70.0, "A+"),
        ]
        .into_iter()
        .map(|(bound, label)| (bound, label.to_string()))
        .collect();
        // Ascending by construction, so no validation pass is needed.
        GradeScale { bands }
    }
}
