//! # Pivot engine
//!
//! The pivot engine that both phases run: select a column, select a row, eliminate, repeat. The
//! phases only differ in the objective row they load before calling it.
use crate::algorithm::two_phase::Phase;
use crate::algorithm::two_phase::options::SolverOptions;
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::{debug_assert_in_basic_feasible_solution_state, Tableau};
use crate::data::number_types::traits::OrderedField;
use crate::error::{SolveError, SolveResult};

/// A single basis change.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pivot<F> {
    /// Column that entered the basis.
    pub entering_column: usize,
    /// Row in which it entered.
    pub leaving_row: usize,
    /// Column that left the basis.
    pub leaving_column: usize,
    /// Value of the entering variable after the pivot.
    pub step_length: F,
}

impl<F: OrderedField> Pivot<F> {
    /// Whether the pivot left the solution unchanged.
    pub fn is_degenerate(&self, eps: F) -> bool {
        self.step_length <= eps
    }
}

/// Where the pivoting stands: what happened last, and how much has been done.
///
/// Created before the first phase and carried into the second, so that the second phase resumes
/// counting where the first stopped.
#[derive(Clone, Debug, PartialEq)]
pub struct PivotCursor<F> {
    last: Option<Pivot<F>>,
    iterations: usize,
}

impl<F: OrderedField> PivotCursor<F> {
    /// A cursor that has not seen any pivots.
    pub fn new() -> Self {
        Self {
            last: None,
            iterations: 0,
        }
    }

    /// The most recent pivot.
    pub fn last(&self) -> Option<&Pivot<F>> {
        self.last.as_ref()
    }

    /// Number of pivots done so far.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Whether another pivot would exceed the iteration limit.
    pub(crate) fn is_at_limit(&self, max_iterations: Option<usize>) -> bool {
        max_iterations.is_some_and(|max| self.iterations >= max)
    }

    pub(crate) fn record(&mut self, pivot: Pivot<F>) {
        self.iterations += 1;
        self.last = Some(pivot);
    }
}

impl<F: OrderedField> Default for PivotCursor<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// How the pivoting ended.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum EngineStatus {
    /// No eligible column has a negative relative cost.
    Optimal,
    /// The column has a negative relative cost, but no positive entry to pivot on.
    Unbounded {
        /// Column along which the objective decreases without bound.
        column: usize,
    },
}

/// Reduces the cost of the basic feasible solution to the minimum.
///
/// While calling this method, a number of requirements should be satisfied:
/// - There should be a valid basis (not necessarily optimal)
/// - All constraint values need to be nonnegative (primal feasibility)
/// - The objective row should have zero relative cost for all basis columns
///
/// # Arguments
///
/// * `tableau`: Tableau to pivot on, in place.
/// * `x`: Solution values, one per column, rewritten after every pivot.
/// * `cursor`: Record of the pivots so far, updated with every pivot.
/// * `rule`: Column selection strategy.
/// * `phase`: Which phase is running, for reporting.
/// * `options`: Tolerance and iteration limit.
///
/// # Errors
///
/// When `options.max_iterations` pivots have been done in total and yet another pivot is needed.
pub(crate) fn run<F, PR>(
    tableau: &mut Tableau<F>,
    x: &mut [F],
    cursor: &mut PivotCursor<F>,
    rule: &mut PR,
    phase: Phase,
    options: &SolverOptions,
) -> SolveResult<EngineStatus>
where
    F: OrderedField,
    PR: PivotRule<F>,
{
    let eps = F::tolerance(options.eps);
    tableau.write_current_bfs(x);

    loop {
        debug_assert_in_basic_feasible_solution_state(tableau, eps);

        match rule.select_primal_pivot_column(tableau, eps) {
            Some((column_index, cost)) => {
                let row_index = match tableau.select_primal_pivot_row(column_index, eps, rule.tie_break()) {
                    Some(row_index) => row_index,
                    None => {
                        log::debug!(
                            "{}: column {} has relative cost {} and no positive entries",
                            phase, tableau.column_label(column_index), cost,
                        );
                        break Ok(EngineStatus::Unbounded { column: column_index });
                    },
                };

                if cursor.is_at_limit(options.max_iterations) {
                    log::warn!("{}: stopping after {} pivots", phase, cursor.iterations());
                    break Err(SolveError::IterationLimit { phase, iterations: cursor.iterations() });
                }

                let step_length = tableau.constraint_value(row_index) / tableau.element(row_index, column_index);
                let leaving_column = tableau.bring_into_basis(column_index, row_index, eps);
                tableau.write_current_bfs(x);

                let pivot = Pivot {
                    entering_column: column_index,
                    leaving_row: row_index,
                    leaving_column,
                    step_length,
                };
                cursor.record(pivot);
                rule.after_basis_update(&pivot, eps);

                log::debug!(
                    "{} iteration {}: {} enters in row {}, {} leaves, objective {}",
                    phase,
                    cursor.iterations(),
                    tableau.column_label(column_index),
                    row_index,
                    tableau.column_label(leaving_column),
                    tableau.objective_function_value(),
                );
                log::trace!("{}", tableau);
            },
            None => break Ok(EngineStatus::Optimal),
        }
    }
}
