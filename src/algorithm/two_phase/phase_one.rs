//! # Phase one: finding a basic feasible solution
//!
//! The tableau starts with an artificial variable in the basis of every `>=` and `=` row. The first
//! phase minimizes the sum of those artificial variables. If that sum can be brought down to zero,
//! the basis that is reached is feasible for the original problem.
use crate::algorithm::two_phase::Phase;
use crate::algorithm::two_phase::engine::{self, EngineStatus, PivotCursor};
use crate::algorithm::two_phase::options::SolverOptions;
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::number_types::traits::OrderedField;
use crate::error::{SolveError, SolveResult};

/// A matrix or linear program either has full rank, or be rank deficient.
///
/// In case it is rank deficient, a sorted, deduplicated list of (row)indices should be provided,
/// that when removed, makes the matrix or linear program full rank.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Rank {
    /// The matrix is full rank, no rows need to be removed.
    Full,
    /// The `Vec<usize>` is sorted and contains no duplicate values.
    Deficient(Vec<usize>),
}

/// Everything the second phase needs to start from.
///
/// The tableau is moved into this value at the end of the first phase, and out of it at the start
/// of the second.
#[derive(Clone, Debug, PartialEq)]
pub struct FeasibleBasis<F> {
    /// Tableau with a feasible basis. The objective row still holds the artificial objective.
    pub tableau: Tableau<F>,
    /// Pivots done so far.
    pub cursor: PivotCursor<F>,
    /// Whether rows were removed because they were redundant.
    pub rank: Rank,
    /// Sum of the artificial variables at the end of the phase, zero within the tolerance.
    pub phase_one_value: F,
}

/// LP's can be either feasible (allowing at least one solution) or infeasible (allowing no
/// solutions).
#[derive(Clone, Debug, PartialEq)]
pub enum PhaseOneResult<F> {
    /// The problem is feasible and all information necessary to continue is in this variant.
    Feasible(FeasibleBasis<F>),
    /// The problem is not feasible.
    Infeasible {
        /// Tableau at the optimum of the artificial objective.
        tableau: Tableau<F>,
        /// Pivots done.
        cursor: PivotCursor<F>,
        /// Minimal sum of the artificial variables, larger than the tolerance.
        artificial_value: F,
    },
}

/// Write the objective "minimize the sum of artificial variables" in terms of the current basis.
///
/// Each artificial variable has a one in the objective row. Because each of them is basic in one of
/// the last rows, those rows are subtracted to get a zero relative cost for the basis columns. What
/// remains is minus the sum of those rows in the non-artificial columns, and minus the sum of their
/// right-hand sides as the objective cell.
pub fn load_artificial_objective<F: OrderedField>(tableau: &mut Tableau<F>) {
    let artificial_columns = tableau.lengths().artificial_columns();
    let artificial_rows = tableau.lengths().artificial_rows();

    let objective = tableau.objective_row_mut();
    objective.fill(F::zero());
    for j in artificial_columns {
        objective[j] = F::one();
    }

    for i in artificial_rows {
        debug_assert!(tableau.is_artificial(tableau.basis_column(i)));
        tableau.subtract_from_objective(i, F::one());
    }
}

/// Reduces the artificial cost of the basic feasible solution to zero, if possible. In doing so, a
/// basic feasible solution to the original linear program is found.
///
/// # Arguments
///
/// * `tableau`: Freshly built tableau; artificial variables (if any) are basic.
/// * `x`: Solution values, one per column, rewritten after every pivot.
/// * `options`: Tolerance, pivot limits and rule settings.
///
/// # Return value
///
/// Whether the problem is feasible, and if so, the basis to continue with.
///
/// # Errors
///
/// When the iteration limit is reached. If the artificial objective is reported unbounded, the
/// tableau was not set up correctly.
pub(crate) fn primal<F, PR>(
    mut tableau: Tableau<F>,
    x: &mut [F],
    options: &SolverOptions,
) -> SolveResult<PhaseOneResult<F>>
where
    F: OrderedField,
    PR: PivotRule<F>,
{
    let eps = F::tolerance(options.eps);
    load_artificial_objective(&mut tableau);
    log::info!(
        "{}: {} artificial variables with total value {}",
        Phase::One, tableau.lengths().nr_artificial_variables(), tableau.objective_function_value(),
    );
    log::trace!("{}", tableau);

    let mut cursor = PivotCursor::new();
    let mut rule = PR::new(options);
    match engine::run(&mut tableau, x, &mut cursor, &mut rule, Phase::One, options)? {
        EngineStatus::Optimal => {},
        EngineStatus::Unbounded { .. } => return Err(SolveError::UnboundedArtificialCost),
    }

    let artificial_value = tableau.objective_function_value();
    if artificial_value > eps {
        log::info!("{}: minimal artificial value {} > 0, infeasible", Phase::One, artificial_value);
        return Ok(PhaseOneResult::Infeasible { tableau, cursor, artificial_value });
    }

    let rank = if tableau.has_artificial_in_basis() {
        let rows_to_remove = remove_artificial_basis_variables(&mut tableau, &mut cursor, options)?;
        if rows_to_remove.is_empty() {
            Rank::Full
        } else {
            log::info!("{}: removing redundant rows {:?}", Phase::One, rows_to_remove);
            tableau.remove_rows(&rows_to_remove);
            Rank::Deficient(rows_to_remove)
        }
    } else {
        Rank::Full
    };
    tableau.write_current_bfs(x);

    log::info!("{}: feasible after {} pivots", Phase::One, cursor.iterations());
    Ok(PhaseOneResult::Feasible(FeasibleBasis {
        tableau,
        cursor,
        rank,
        phase_one_value: artificial_value,
    }))
}

/// Removes all artificial variables from the basis by making a basis change "at zero level", or
/// without change of cost of the current solution.
///
/// These pivots count towards the iteration limit like any other.
///
/// # Arguments
///
/// * `tableau`: Tableau to change the basis for.
/// * `cursor`: Records the pivots made.
/// * `options`: Tolerance for the pivot element and the iteration limit.
///
/// # Return value
///
/// A `Vec` with indices of rows that are redundant, sorted.
///
/// # Errors
///
/// When the iteration limit is reached before all artificial variables left the basis.
fn remove_artificial_basis_variables<F: OrderedField>(
    tableau: &mut Tableau<F>,
    cursor: &mut PivotCursor<F>,
    options: &SolverOptions,
) -> SolveResult<Vec<usize>> {
    let eps = F::tolerance(options.eps);
    let mut artificial_basis = (0..tableau.nr_rows())
        .map(|i| (tableau.basis_column(i), i))
        .filter(|&(j, _)| tableau.is_artificial(j))
        .collect::<Vec<_>>();
    artificial_basis.sort_unstable();

    let mut rows_to_remove = Vec::new();
    for (artificial, pivot_row) in artificial_basis {
        let pivot_column = (0..tableau.nr_columns())
            .filter(|&j| !tableau.is_artificial(j) && !tableau.is_in_basis(j))
            .find(|&j| tableau.element(pivot_row, j).is_significant(eps));

        match pivot_column {
            Some(pivot_column) => {
                if cursor.is_at_limit(options.max_iterations) {
                    log::warn!("{}: stopping after {} pivots", Phase::One, cursor.iterations());
                    return Err(SolveError::IterationLimit { phase: Phase::One, iterations: cursor.iterations() });
                }

                // The artificial variable is zero within the tolerance; make that exact so the
                // pivot can't move the solution.
                tableau.clear_constraint_value(pivot_row);
                let leaving_column = tableau.bring_into_basis(pivot_column, pivot_row, eps);
                debug_assert_eq!(leaving_column, artificial);
                cursor.record(engine::Pivot {
                    entering_column: pivot_column,
                    leaving_row: pivot_row,
                    leaving_column,
                    step_length: F::zero(),
                });
                log::debug!(
                    "{}: {} replaces {} at zero level in row {}",
                    Phase::One, tableau.column_label(pivot_column), tableau.column_label(artificial), pivot_row,
                );
            },
            None => rows_to_remove.push(pivot_row),
        }
    }

    rows_to_remove.sort_unstable();
    Ok(rows_to_remove)
}
