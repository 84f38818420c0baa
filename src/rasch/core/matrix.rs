//! Binary response matrices and row slices for Rasch fitting.
//!
//! Purpose
//! -------
//! Provide the validated persons × items response container used by the
//! likelihood and the batched estimator, keep person labels aligned with
//! its rows, and provide a row-slice view type that carries original
//! person indices so mini-batches can address the full parameter vector.
//!
//! Key behaviors
//! -------------
//! - [`ResponseMatrix::from_submissions`] grades submissions against an
//!   [`AnswerKey`] into exact `0.0` / `1.0` entries; missing trailing
//!   answers grade as incorrect and surplus answers are ignored.
//! - [`ResponseMatrix::from_binary`] accepts a pre-binarized matrix with
//!   row labels and rejects anything that is not exactly `0.0` or `1.0`.
//! - [`ResponseMatrix::is_degenerate`] detects the all-identical matrix
//!   (every response correct, or every response incorrect) for which the
//!   joint estimates are not meaningfully identified.
//! - [`ResponseSlice`] owns a subset of rows together with the original
//!   row indices and the total population size.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every matrix entry is exactly `0.0` or `1.0`; NaN and infinities are
//!   rejected at construction.
//! - Matrices have at least one row and one column, and exactly one
//!   person label per row.
//! - A slice’s `persons` list has one entry per slice row, and every
//!   entry indexes into the parent matrix’s rows.
//!
//! Conventions
//! -----------
//! - Rows are persons (submission order), columns are items (key order).
//! - Slices own their rows; a mini-batch copies the selected rows once
//!   per round rather than borrowing across the optimizer boundary.
//!
//! Downstream usage
//! ----------------
//! - `rasch::core::likelihood` evaluates the joint likelihood over a
//!   [`ResponseSlice`].
//! - `rasch::models` drives full-batch fits over
//!   [`ResponseMatrix::full_slice`] and mini-batch rounds over
//!   [`ResponseMatrix::slice_rows`]; the labels travel to the scoring
//!   layer to pair abilities with persons.
//!
//! Testing notes
//! -------------
//! - Unit tests cover grading correctness (ragged submissions included),
//!   binary and label validation (including NaN), degeneracy detection,
//!   and slice construction (ordering, person indices, bounds checks).
use crate::rasch::{
    core::key::{AnswerKey, Submission},
    errors::{RaschError, RaschResult},
};
use ndarray::{Array2, Axis};

/// `ResponseMatrix` — validated binary responses, persons × items.
///
/// Purpose
/// -------
/// Represent the full graded test as a dense `f64` matrix whose entries
/// are exactly `0.0` (incorrect) or `1.0` (correct), with one person
/// label per row. This type centralizes binarization and validation so
/// the likelihood can branch on exact values without re-checking.
///
/// Key behaviors
/// -------------
/// - Grades submissions against an answer key, or validates an already
///   binary matrix with its labels.
/// - Produces row slices ([`ResponseSlice`]) for full-batch and
///   mini-batch fitting.
///
/// Fields
/// ------
/// - `data`: `Array2<f64>`
///   Binary responses with shape `(n_persons, n_items)`.
/// - `persons`: `Vec<String>`
///   One label per row, in row order.
///
/// Invariants
/// ----------
/// - `data.nrows() > 0` and `data.ncols() > 0`.
/// - Every entry is exactly `0.0` or `1.0`.
/// - `persons.len() == data.nrows()`.
///
/// Performance
/// -----------
/// - Construction is O(n_persons × n_items) for grading or validation.
/// - Slicing copies the selected rows once; the parent matrix is never
///   mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseMatrix {
    /// Binary responses with shape `(n_persons, n_items)`.
    pub data: Array2<f64>,
    /// One person label per row, in row order.
    pub persons: Vec<String>,
}

impl ResponseMatrix {
    /// Grade submissions against an answer key into a binary matrix.
    ///
    /// Parameters
    /// ----------
    /// - `key`: `&AnswerKey`
    ///   Normalized correct answers; defines the item count and order.
    /// - `submissions`: `&[Submission]`
    ///   One normalized, labeled submission per person, in row order.
    ///
    /// Returns
    /// -------
    /// `RaschResult<ResponseMatrix>`
    ///   - `Ok(matrix)` with `1.0` where a submission matches the key and
    ///     `0.0` elsewhere, labels in submission order.
    ///
    /// Errors
    /// ------
    /// - `RaschError::NoSubmissions`
    ///   Returned when `submissions` is empty.
    ///
    /// Notes
    /// -----
    /// - Both sides are already normalized (trimmed, uppercased), so
    ///   grading is plain string equality per position.
    /// - Answer counts need not match the key: a submission shorter than
    ///   the key grades its missing trailing answers as incorrect, and
    ///   answers beyond the key length are ignored.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use rasch_scoring::rasch::core::key::{AnswerKey, Submission};
    /// # use rasch_scoring::rasch::core::matrix::ResponseMatrix;
    /// #
    /// let key = AnswerKey::new(&["A", "B"]).unwrap();
    /// let subs = vec![
    ///     Submission::new("ana", &["a", "C"]).unwrap(),
    ///     Submission::new("bo", &["B"]).unwrap(),
    /// ];
    /// let matrix = ResponseMatrix::from_submissions(&key, &subs).unwrap();
    /// assert_eq!(matrix.data.row(0).to_vec(), vec![1.0, 0.0]);
    /// assert_eq!(matrix.data.row(1).to_vec(), vec![0.0, 0.0]);
    /// assert_eq!(matrix.persons, vec!["ana", "bo"]);
    /// ```
    pub fn from_submissions(key: &AnswerKey, submissions: &[Submission]) -> RaschResult<Self> {
        if submissions.is_empty() {
            return Err(RaschError::NoSubmissions);
        }

        let n_items = key.len();
        let mut data = Array2::<f64>::zeros((submissions.len(), n_items));
        let mut persons = Vec::with_capacity(submissions.len());
        for (row, submission) in submissions.iter().enumerate() {
            for (col, correct) in key.answers.iter().enumerate() {
                if submission.answers.get(col) == Some(correct) {
                    data[[row, col]] = 1.0;
                }
            }
            persons.push(submission.person.clone());
        }
        Ok(ResponseMatrix { data, persons })
    }

    /// Validate an already binary matrix with its row labels.
    ///
    /// Parameters
    /// ----------
    /// - `data`: `Array2<f64>`
    ///   Candidate responses with shape `(n_persons, n_items)`.
    /// - `persons`: `Vec<String>`
    ///   One label per row, in row order.
    ///
    /// Returns
    /// -------
    /// `RaschResult<ResponseMatrix>`
    ///   - `Ok(matrix)` when the shape is non-empty, the label count
    ///     matches the rows, and every entry is exactly `0.0` or `1.0`.
    ///
    /// Errors
    /// ------
    /// - `RaschError::NoSubmissions` when `data.nrows() == 0`.
    /// - `RaschError::NoItems` when `data.ncols() == 0`.
    /// - `RaschError::PersonCountMismatch` when `persons.len()` differs
    ///   from the row count.
    /// - `RaschError::NonBinaryResponse { row, col, value }` for the
    ///   first entry that is not exactly `0.0` or `1.0` (NaN and
    ///   infinities included).
    pub fn from_binary(data: Array2<f64>, persons: Vec<String>) -> RaschResult<Self> {
        if data.nrows() == 0 {
            return Err(RaschError::NoSubmissions);
        }
        if data.ncols() == 0 {
            return Err(RaschError::NoItems);
        }
        if persons.len() != data.nrows() {
            return Err(RaschError::PersonCountMismatch {
                expected: data.nrows(),
                found: persons.len(),
            });
        }

        for ((row, col), &value) in data.indexed_iter() {
            if value != 0.0 && value != 1.0 {
                return Err(RaschError::NonBinaryResponse { row, col, value });
            }
        }
        Ok(ResponseMatrix { data, persons })
    }

    /// Number of persons (rows).
    pub fn n_persons(&self) -> usize {
        self.data.nrows()
    }

    /// Number of items (columns).
    pub fn n_items(&self) -> usize {
        self.data.ncols()
    }

    /// `true` when every entry is identical (all correct or all
    /// incorrect).
    ///
    /// On such a matrix the joint person/item estimates are not
    /// meaningfully identified; fitting still runs, but reports should
    /// flag the result.
    pub fn is_degenerate(&self) -> bool {
        match self.data.first() {
            Some(&first) => self.data.iter().all(|&value| value == first),
            None => true,
        }
    }

    /// Slice covering every row, with persons `0..n_persons` in order.
    pub fn full_slice(&self) -> ResponseSlice {
        ResponseSlice {
            rows: self.data.clone(),
            persons: (0..self.n_persons()).collect(),
            n_persons: self.n_persons(),
        }
    }

    /// Copy the selected rows into a [`ResponseSlice`].
    ///
    /// Parameters
    /// ----------
    /// - `indices`: `&[usize]`
    ///   Row indices into this matrix, in the order the slice should
    ///   carry them. Duplicates are permitted by this method; the sampler
    ///   used for mini-batching never produces them.
    ///
    /// Errors
    /// ------
    /// - `RaschError::PersonIndexOutOfRange { index, bound }` for the
    ///   first index that is not a valid row.
    pub fn slice_rows(&self, indices: &[usize]) -> RaschResult<ResponseSlice> {
        let bound = self.n_persons();
        for &index in indices {
            if index >= bound {
                return Err(RaschError::PersonIndexOutOfRange { index, bound });
            }
        }
        Ok(ResponseSlice {
            rows: self.data.select(Axis(0), indices),
            persons: indices.to_vec(),
            n_persons: bound,
        })
    }
}

/// `ResponseSlice` — owned batch of rows plus their original indices.
///
/// Purpose
/// -------
/// Carry a subset of response rows through the optimizer together with
/// the person index each row belongs to and the total population size.
/// The likelihood uses the indices to address the full joint parameter
/// vector, so a mini-batch updates only the ability entries of sampled
/// persons while the vector keeps its full length.
///
/// Invariants
/// ----------
/// - `persons.len() == rows.nrows()`.
/// - Every entry of `persons` is `< n_persons`.
/// - Entries of `rows` are exactly `0.0` or `1.0` (inherited from the
///   parent matrix).
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseSlice {
    rows: Array2<f64>,
    persons: Vec<usize>,
    n_persons: usize,
}

impl ResponseSlice {
    /// Construct a validated slice from parts.
    ///
    /// Intended for tests and custom batching schemes; normal callers go
    /// through [`ResponseMatrix::full_slice`] or
    /// [`ResponseMatrix::slice_rows`].
    ///
    /// Errors
    /// ------
    /// - `RaschError::PersonCountMismatch` when `persons` does not have
    ///   one entry per row.
    /// - `RaschError::PersonIndexOutOfRange` when an index is not inside
    ///   the population.
    pub fn new(rows: Array2<f64>, persons: Vec<usize>, n_persons: usize) -> RaschResult<Self> {
        if persons.len() != rows.nrows() {
            return Err(RaschError::PersonCountMismatch {
                expected: rows.nrows(),
                found: persons.len(),
            });
        }
        for &index in &persons {
            if index >= n_persons {
                return Err(RaschError::PersonIndexOutOfRange { index, bound: n_persons });
            }
        }
        Ok(ResponseSlice { rows, persons, n_persons })
    }

    /// Batch rows, shape `(batch, n_items)`.
    pub fn rows(&self) -> &Array2<f64> {
        &self.rows
    }

    /// Original person index for each batch row.
    pub fn persons(&self) -> &[usize] {
        &self.persons
    }

    /// Total population size of the parent matrix.
    pub fn n_persons(&self) -> usize {
        self.n_persons
    }

    /// Number of items (columns).
    pub fn n_items(&self) -> usize {
        self.rows.ncols()
    }

    /// Number of rows in this batch.
    pub fn n_rows(&self) -> usize {
        self.rows.nrows()
    }
}
