//! # Error reporting
//!
//! Infeasible and unbounded linear programs are not errors: they are regular outcomes of the
//! algorithm and are reported through `OptimizationResult`. The errors in this module describe
//! problems that are malformed, solver settings that are invalid, and runs that were cut short.
use thiserror::Error;

use crate::algorithm::two_phase::Phase;

/// An `InconsistencyError` is created when a linear program is inconsistently described.
///
/// This `Error` is not returned when the linear program is infeasible or unbounded. It is meant only
/// for descriptions of linear programs, and should not be used after the tableau has been built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("ProgramError: {description}")]
pub struct InconsistencyError {
    description: String,
}

impl InconsistencyError {
    /// Wrap a text in an `InconsistencyError`.
    ///
    /// # Arguments
    ///
    /// * `description`: A human-readable text meant for the end user.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into() }
    }

    /// The human-readable description.
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Errors that can occur while solving.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    /// The linear program could not be turned into a tableau.
    #[error(transparent)]
    Inconsistent(#[from] InconsistencyError),

    /// The numerical tolerance is not a finite, positive number.
    #[error("Invalid tolerance: {0}")]
    InvalidTolerance(f64),

    /// The configured maximum number of pivots was reached before the phase terminated.
    #[error("Iteration limit reached in {phase} after {iterations} pivots")]
    IterationLimit {
        /// Phase that was running when the limit was hit.
        phase: Phase,
        /// Total number of pivots done so far, over both phases.
        iterations: usize,
    },

    /// The artificial objective is a sum of nonnegative variables and can't decrease without
    /// bound. Seeing this means the tableau was not in a valid state when the first phase started.
    #[error("Artificial cost can not be unbounded")]
    UnboundedArtificialCost,
}

/// Result type for solving operations.
pub type SolveResult<T> = Result<T, SolveError>;
