//! Answer keys and submissions — normalized grading inputs.
//!
//! Purpose
//! -------
//! Hold the two raw inputs of a grading run in validated, comparable
//! form: the ordered answer key for a test and one submission per
//! person. Normalization (trimming, uppercasing) happens once here, so
//! the grading step in `rasch::core::matrix` is a plain token-equality
//! scan.
//!
//! Key behaviors
//! -------------
//! - Validate and normalize the answer key via [`AnswerKey::new`]:
//!   a non-empty sequence of ASCII-alphanumeric tokens, stored
//!   uppercase.
//! - Pair a person label with their ordered answers via
//!   [`Submission::new`]; answers are normalized the same way but
//!   otherwise unconstrained, since a malformed answer is simply wrong.
//!
//! Invariants & assumptions
//! ------------------------
//! - Key length equals the item count for every matrix built from it.
//! - Person labels are non-empty after trimming; they identify rows in
//!   the response matrix and records in the score report.
//! - A submission's answer count may differ from the key length:
//!   grading treats missing trailing answers as incorrect and ignores
//!   surplus ones.
//!
//! Conventions
//! -----------
//! - Comparison happens on trimmed, ASCII-uppercased tokens, so grading
//!   is whitespace- and case-insensitive.
//!
//! Downstream usage
//! ----------------
//! - `ResponseMatrix::from_submissions` consumes one [`AnswerKey`] and a
//!   slice of [`Submission`]s; the labels travel with the matrix into
//!   the score report.
//!
//! Testing notes
//! -------------
//! - Unit tests cover normalization, key-token rejection, empty-label
//!   rejection, and the ragged-length tolerance of submissions.
use crate::rasch::errors::{RaschError, RaschResult};

/// AnswerKey — the ordered correct answers for one test.
///
/// Purpose
/// -------
/// Store the key as normalized tokens, one per item, defining both the
/// item count and the comparison targets for grading.
///
/// Key behaviors
/// -------------
/// - Rejects an empty key and any token that is empty after trimming or
///   contains non-ASCII-alphanumeric characters.
/// - Stores tokens trimmed and uppercased, so grading never
///   re-normalizes.
///
/// Fields
/// ------
/// - `answers`: `Vec<String>`
///   Normalized key tokens in question order.
///
/// Invariants
/// ----------
/// - `answers` is non-empty; every token is non-empty ASCII-alphanumeric
///   uppercase.
///
/// Examples
/// --------
/// ```rust
/// # use rasch_scoring::rasch::core::key::AnswerKey;
/// #
/// let key = AnswerKey::new(&[" a ", "B", "3"]).unwrap();
/// assert_eq!(key.answers, vec!["A", "B", "3"]);
/// assert_eq!(key.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerKey {
    /// Normalized key tokens in question order.
    pub answers: Vec<String>,
}

impl AnswerKey {
    /// Construct a validated, normalized answer key.
    ///
    /// Parameters
    /// ----------
    /// - `entries`: `&[S]` where `S: AsRef<str>`
    ///   Raw key tokens in question order.
    ///
    /// Returns
    /// -------
    /// `RaschResult<AnswerKey>`
    ///   - `Ok(key)` with trimmed, uppercased tokens.
    ///
    /// Errors
    /// ------
    /// - `RaschError::EmptyKey` when `entries` is empty.
    /// - `RaschError::InvalidKeyToken` when a token is empty after
    ///   trimming or contains a non-ASCII-alphanumeric character; the
    ///   error carries the position and the trimmed token.
    pub fn new<S: AsRef<str>>(entries: &[S]) -> RaschResult<Self> {
        if entries.is_empty() {
            return Err(RaschError::EmptyKey);
        }
        let mut answers = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let trimmed = entry.as_ref().trim();
            if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(RaschError::InvalidKeyToken { index, token: trimmed.to_string() });
            }
            answers.push(trimmed.to_ascii_uppercase());
        }
        Ok(AnswerKey { answers })
    }

    /// Number of items in the key.
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// `true` when the key holds no items.
    ///
    /// Always `false` for keys built via [`AnswerKey::new`]; present for
    /// API completeness.
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

/// Submission — one person's ordered answers.
///
/// Purpose
/// -------
/// Pair a person label with their normalized answer tokens. The label
/// identifies the person's row in the response matrix and their record
/// in the score report; the answers are compared against the key during
/// grading.
///
/// Key behaviors
/// -------------
/// - Rejects a label that is empty after trimming.
/// - Normalizes answers like key tokens (trim, uppercase) but accepts
///   any content, including tokens the key would reject: a malformed
///   answer simply never matches and grades as incorrect.
/// - Accepts any answer count; grading pads short submissions with
///   incorrect responses and ignores surplus answers.
///
/// Fields
/// ------
/// - `person`: `String`
///   Trimmed person label.
/// - `answers`: `Vec<String>`
///   Normalized answer tokens in question order.
///
/// Examples
/// --------
/// ```rust
/// # use rasch_scoring::rasch::core::key::Submission;
/// #
/// let submission = Submission::new(" dana ", &["a", " b", "?!"]).unwrap();
/// assert_eq!(submission.person, "dana");
/// assert_eq!(submission.answers, vec!["A", "B", "?!"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Trimmed person label.
    pub person: String,
    /// Normalized answer tokens in question order.
    pub answers: Vec<String>,
}

impl Submission {
    /// Construct a labeled, normalized submission.
    ///
    /// Parameters
    /// ----------
    /// - `person`: `&str`
    ///   Person label; trimmed, must be non-empty.
    /// - `answers`: `&[S]` where `S: AsRef<str>`
    ///   Raw answer tokens in question order.
    ///
    /// Returns
    /// -------
    /// `RaschResult<Submission>`
    ///   - `Ok(submission)` with the trimmed label and trimmed,
    ///     uppercased answers.
    ///
    /// Errors
    /// ------
    /// - `RaschError::EmptyPersonLabel` when the label is empty after
    ///   trimming.
    pub fn new<S: AsRef<str>>(person: &str, answers: &[S]) -> RaschResult<Self> {
        let person = person.trim();
        if person.is_empty() {
            return Err(RaschError::EmptyPersonLabel);
        }
        let answers =
            answers.iter().map(|a| a.as_ref().trim().to_ascii_uppercase()).collect();
        Ok(Submission { person: person.to_string(), answers })
    }

    /// Number of answers in the submission.
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// `true` when the submission holds no answers.
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}
