//! # Algorithms
use crate::algorithm::two_phase::Outcome;
use crate::algorithm::two_phase::options::SolverOptions;
use crate::data::linear_program::general_form::GeneralForm;
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::traits::OrderedField;
use crate::error::SolveResult;

pub mod two_phase;

/// A problem formulation that can be solved.
pub trait Solve<F> {
    /// Solve this problem.
    ///
    /// # Return value
    ///
    /// Whether the problem is feasible, and if so, a solution if the problem is bounded. Also the
    /// work that was done and the final tableau.
    ///
    /// # Errors
    ///
    /// If the problem is described inconsistently, the options are invalid or the iteration limit
    /// was reached.
    fn solve(&self, options: &SolverOptions) -> SolveResult<Outcome<F>>;
}

impl<F: OrderedField> Solve<F> for GeneralForm<F> {
    fn solve(&self, options: &SolverOptions) -> SolveResult<Outcome<F>> {
        let tableau = self.derive_tableau()?;
        two_phase::solve(tableau, self.objective(), self.cost(), options)
    }
}

/// A linear program is either infeasible, unbounded or has a finite optimum.
///
/// This is determined as the result of an algorithm
#[allow(missing_docs)]
#[derive(Clone, PartialEq, Debug)]
pub enum OptimizationResult<F> {
    Infeasible,
    FiniteOptimum(Solution<F>),
    Unbounded,
}
