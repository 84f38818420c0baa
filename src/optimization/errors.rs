//! optimization::errors — unified error surface for the MLE stack.
//!
//! Purpose
//! -------
//! Collect every way an optimization run can fail — malformed stopping
//! rules, bad gradients, solver-side breakdowns, invalid likelihood
//! inputs — into one enum with a shared result alias, so callers match
//! on [`OptError`] instead of juggling argmin's error type.
//!
//! Key behaviors
//! -------------
//! - Define [`OptResult`] and [`OptError`] as the optimizer layer's
//!   canonical result and error types, grouped by where they arise
//!   (gradients, options, cost evaluation, outcomes, backend).
//! - Downcast `argmin::core::Error` values into matching variants and
//!   fold anything unrecognized into `BackendError`.
//! - Mirror the likelihood-input variants of
//!   [`RaschError`](crate::rasch::errors::RaschError) so model
//!   validation failures keep their shape when they cross into the
//!   optimizer layer.
//!
//! Invariants & assumptions
//! ------------------------
//! - Variants are cheap to clone and comparable, so tests can assert on
//!   them directly.
//! - Raw argmin errors never cross this module's boundary; conversion
//!   happens wherever the executor or a solver builder can fail.
//!
//! Testing notes
//! -------------
//! - The conversion and `Display` paths are exercised by the optimizer
//!   and model layers' unit tests; no tests live here.
use argmin::core::{ArgminError, Error};

use crate::rasch::errors::RaschError;

/// Crate-wide result alias for optimizer operations.
pub type OptResult<T> = Result<T, OptError>;

#[derive(Debug, Clone, PartialEq)]
pub enum OptError {
    // ---- Gradient ----
    /// A model left `grad` unimplemented; the adapter switches to finite
    /// differences.
    GradientNotImplemented,

    /// Gradient dimensions do not match parameter dimensions.
    GradientDimMismatch {
        expected: usize,
        found: usize,
    },

    /// Gradient elements need to be finite
    InvalidGradient {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    // ---- MLEOptions ----
    /// Gradient tolerance needs to be positive and finite.
    InvalidTolGrad {
        tol: f64,
        reason: &'static str,
    },
    /// Target objective value needs to be finite.
    InvalidTargetCost {
        target: f64,
        reason: &'static str,
    },
    /// Maximum iterations needs to be positive.
    InvalidMaxIter {
        max_iter: usize,
        reason: &'static str,
    },
    /// At least one stopping rule must be provided.
    NoTolerancesProvided,

    /// Invalid line searcher name.
    InvalidLineSearch {
        name: String,
        reason: &'static str,
    },

    /// lbfgs_mem needs to be at least 1.
    InvalidLBFGSMem {
        mem: usize,
        reason: &'static str,
    },

    // ---- Cost function ----
    /// Cost function returned a non-finite value.
    NonFiniteCost {
        value: f64,
    },

    // ---- Optimizer outcome ----
    /// Estimated parameters must be finite.
    InvalidThetaHat {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    /// Theta hat is missing
    MissingThetaHat,

    // ---- Argmin ---
    /// Wrapper for argmin::InvalidParameter
    InvalidParameter {
        text: String,
    },
    /// Wrapper for argmin::NotImplemented
    NotImplemented {
        text: String,
    },
    /// Wrapper for argmin::NotInitialized
    NotInitialized {
        text: String,
    },
    /// Wrapper for argmin::ConditionViolated
    ConditionViolated {
        text: String,
    },
    /// Wrapper for argmin::CheckPointNotFound
    CheckPointNotFound {
        text: String,
    },
    /// Wrapper for argmin::PotentialBug
    PotentialBug {
        text: String,
    },
    /// Wrapper for argmin::ImpossibleError
    ImpossibleError {
        text: String,
    },
    /// Wrapper for other argmin::Error types
    BackendError {
        text: String,
    },

    // ---- Likelihood inputs ----
    /// Joint parameter vector length mismatch.
    ThetaLengthMismatch {
        expected: usize,
        actual: usize,
    },

    /// Unconstrained optimization input must have finite values.
    InvalidThetaInput {
        index: usize,
        value: f64,
    },

    /// Item count mismatch between responses and parameters.
    ItemCountMismatch {
        expected: usize,
        found: usize,
    },

    /// Person count mismatch between responses and parameters.
    PersonCountMismatch {
        expected: usize,
        found: usize,
    },

    /// Person index outside the parameterized population.
    PersonIndexOutOfRange {
        index: usize,
        bound: usize,
    },

    // ---- Fallback ----
    UnknownError,
}

impl std::error::Error for OptError {}

impl std::fmt::Display for OptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Gradient ----
            OptError::GradientNotImplemented => {
                write!(f, "Gradient optimization not implemented")
            }
            OptError::GradientDimMismatch { expected, found } => {
                write!(f, "Gradient dimension mismatch: expected {expected}, found {found}")
            }
            OptError::InvalidGradient { index, value, reason } => {
                write!(f, "Invalid gradient at index {index}: {value}: {reason}")
            }

            // ---- MLEOptions ----
            OptError::InvalidTolGrad { tol, reason } => {
                write!(f, "Invalid gradient tolerance {tol}: {reason}")
            }
            OptError::InvalidTargetCost { target, reason } => {
                write!(f, "Invalid target objective value {target}: {reason}")
            }
            OptError::InvalidMaxIter { max_iter, reason } => {
                write!(f, "Invalid maximum iterations {max_iter}: {reason}")
            }
            OptError::NoTolerancesProvided => {
                write!(f, "No stopping rules provided")
            }
            OptError::InvalidLineSearch { name, reason } => {
                write!(f, "Invalid line searcher '{name}': {reason}")
            }
            OptError::InvalidLBFGSMem { mem, reason } => {
                write!(f, "Invalid L-BFGS memory {mem}: {reason}")
            }

            // ---- Cost function ----
            OptError::NonFiniteCost { value } => {
                write!(f, "Non-finite cost value: {value}")
            }

            // ---- Optimizer outcome ----
            OptError::InvalidThetaHat { index, value, reason } => {
                write!(f, "Invalid estimated parameter at index {index}: {value}: {reason}")
            }
            OptError::MissingThetaHat => {
                write!(f, "Missing estimated parameters (theta hat)")
            }

            // ---- Argmin ----
            OptError::InvalidParameter { text } => {
                write!(f, "Invalid parameter: {text}")
            }
            OptError::NotImplemented { text } => {
                write!(f, "Not implemented: {text}")
            }
            OptError::NotInitialized { text } => {
                write!(f, "Not initialized: {text}")
            }
            OptError::ConditionViolated { text } => {
                write!(f, "Condition violated: {text}")
            }
            OptError::CheckPointNotFound { text } => {
                write!(f, "Checkpoint not found: {text}")
            }
            OptError::PotentialBug { text } => {
                write!(f, "Potential bug: {text}")
            }
            OptError::ImpossibleError { text } => {
                write!(f, "Impossible error: {text}")
            }
            OptError::BackendError { text } => {
                write!(f, "Backend error: {text}")
            }

            // ---- Likelihood inputs ----
            OptError::ThetaLengthMismatch { expected, actual } => {
                write!(f, "Parameter vector length mismatch: expected {expected}, actual {actual}")
            }
            OptError::InvalidThetaInput { index, value } => {
                write!(f, "Invalid parameter input at index {index}: {value}, must be finite")
            }
            OptError::ItemCountMismatch { expected, found } => {
                write!(f, "Item count mismatch: responses have {expected}, parameters have {found}")
            }
            OptError::PersonCountMismatch { expected, found } => {
                write!(
                    f,
                    "Person count mismatch: responses cover {expected}, parameters have {found}"
                )
            }
            OptError::PersonIndexOutOfRange { index, bound } => {
                write!(f, "Person index {index} outside population of size {bound}")
            }

            // ---- Fallback ----
            OptError::UnknownError => {
                write!(f, "Unknown error")
            }
        }
    }
}

impl From<Error> for OptError {
    fn from(original_err: Error) -> Self {
        match original_err.downcast() {
            Ok(opt_err) => match opt_err {
                ArgminError::InvalidParameter { text } => OptError::InvalidParameter { text },
                ArgminError::NotImplemented { text } => OptError::NotImplemented { text },
                ArgminError::NotInitialized { text } => OptError::NotInitialized { text },
                ArgminError::ConditionViolated { text } => OptError::ConditionViolated { text },
                ArgminError::CheckpointNotFound { text } => OptError::CheckPointNotFound { text },
                ArgminError::PotentialBug { text } => OptError::PotentialBug { text },
                ArgminError::ImpossibleError { text } => OptError::ImpossibleError { text },
                _ => OptError::UnknownError,
            },
            Err(err) => OptError::BackendError { text: err.to_string() },
        }
    }
}

impl From<RaschError> for OptError {
    fn from(err: RaschError) -> Self {
        match err {
            RaschError::ThetaLengthMismatch { expected, actual } => {
                OptError::ThetaLengthMismatch { expected, actual }
            }
            RaschError::NonFiniteParam { index, value } => {
                OptError::InvalidThetaInput { index, value }
            }
            RaschError::ItemCountMismatch { expected, found } => {
                OptError::ItemCountMismatch { expected, found }
            }
            RaschError::PersonCountMismatch { expected, found } => {
                OptError::PersonCountMismatch { expected, found }
            }
            RaschError::PersonIndexOutOfRange { index, bound } => {
                OptError::PersonIndexOutOfRange { index, bound }
            }
            _ => OptError::UnknownError,
        }
    }
}
