//! # Solver settings
//!
//! All settings have a default, and can be changed with the `with_*` methods:
//!
//! ```
//! use twophase::algorithm::two_phase::options::{PivotRuleKind, SolverOptions};
//!
//! let options = SolverOptions::default()
//!     .with_eps(1e-7)
//!     .with_max_iterations(1_000)
//!     .with_pivot_rule(PivotRuleKind::FirstProfitable);
//! assert_eq!(options.max_iterations, Some(1_000));
//! ```
use crate::error::SolveError;

/// Default numerical tolerance.
pub const DEFAULT_EPS: f64 = 1e-9;
/// Default number of consecutive degenerate pivots before switching to Bland's rule.
pub const DEFAULT_DEGENERACY_THRESHOLD: usize = 8;

/// Which pivot rule selects the column entering the basis.
///
/// See the `strategy::pivot_rule` module for the implementations.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum PivotRuleKind {
    /// Bland's rule: the first profitable column, leaving ties to the lowest basis column.
    FirstProfitable,
    /// Dantzig's rule: the most negative relative cost, ties to the lowest column index.
    SteepestDescentAlongVariable,
    /// Dantzig's rule, switching to Bland's rule while pivots are degenerate.
    #[default]
    DantzigWithBlandFallback,
}

/// Settings of the two-phase method.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SolverOptions {
    /// Numerical tolerance used for every comparison of relative costs, pivot column entries and
    /// right-hand side values.
    pub eps: f64,
    /// Maximum number of pivots over both phases. `None` means no limit.
    pub max_iterations: Option<usize>,
    /// Rule used to select the column entering the basis.
    pub pivot_rule: PivotRuleKind,
    /// Number of consecutive degenerate pivots after which the `DantzigWithBlandFallback` rule
    /// switches to Bland's rule.
    pub degeneracy_threshold: usize,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            eps: DEFAULT_EPS,
            max_iterations: None,
            pivot_rule: PivotRuleKind::default(),
            degeneracy_threshold: DEFAULT_DEGENERACY_THRESHOLD,
        }
    }
}

impl SolverOptions {
    /// Set the numerical tolerance.
    #[must_use]
    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }

    /// Limit the number of pivots.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Choose the pivot rule.
    #[must_use]
    pub fn with_pivot_rule(mut self, pivot_rule: PivotRuleKind) -> Self {
        self.pivot_rule = pivot_rule;
        self
    }

    /// Set after how many consecutive degenerate pivots Bland's rule takes over.
    #[must_use]
    pub fn with_degeneracy_threshold(mut self, degeneracy_threshold: usize) -> Self {
        self.degeneracy_threshold = degeneracy_threshold;
        self
    }

    /// Check that the settings can be used.
    ///
    /// # Errors
    ///
    /// If the tolerance is not finite and positive.
    pub fn validate(&self) -> Result<(), SolveError> {
        if self.eps.is_finite() && self.eps > 0_f64 {
            Ok(())
        } else {
            Err(SolveError::InvalidTolerance(self.eps))
        }
    }
}
