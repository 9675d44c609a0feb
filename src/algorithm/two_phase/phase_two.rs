//! # Phase two: improving a basic feasible solution
//!
//! Starts from the basis that the first phase found, with the artificial columns excluded from
//! entering, and minimizes the objective of the original problem.
use crate::algorithm::OptimizationResult;
use crate::algorithm::two_phase::Phase;
use crate::algorithm::two_phase::engine::{self, EngineStatus, PivotCursor};
use crate::algorithm::two_phase::options::SolverOptions;
use crate::algorithm::two_phase::phase_one::FeasibleBasis;
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::traits::OrderedField;
use crate::error::SolveResult;

/// How the second phase ended, and the state it ended in.
#[derive(Clone, Debug, PartialEq)]
pub struct PhaseTwoResult<F> {
    /// Either a finite optimum or unbounded; never infeasible.
    pub result: OptimizationResult<F>,
    /// Tableau at the end of the phase.
    pub tableau: Tableau<F>,
    /// All pivots of both phases.
    pub cursor: PivotCursor<F>,
}

/// Replace the objective row by the objective of the original problem.
///
/// The cost is written in minimize-canonical form and then made zero under the basis columns by
/// subtracting multiples of the constraint rows. Artificial columns can't enter anymore after this.
///
/// # Arguments
///
/// * `tableau`: Tableau with a feasible basis.
/// * `objective`: Direction of optimization.
/// * `cost`: One value per decision variable.
pub fn load_objective<F: OrderedField>(tableau: &mut Tableau<F>, objective: Objective, cost: &[F]) {
    debug_assert_eq!(cost.len(), tableau.lengths().nr_decision_variables());

    for j in tableau.lengths().artificial_columns() {
        tableau.set_eligible(j, false);
    }

    let row = tableau.objective_row_mut();
    row.fill(F::zero());
    for (target, &c) in row.iter_mut().zip(cost) {
        *target = match objective {
            Objective::Minimize => c,
            Objective::Maximize => -c,
        };
    }

    for i in 0..tableau.nr_rows() {
        let basis_column = tableau.basis_column(i);
        let factor = tableau.relative_cost(basis_column);
        if factor != F::zero() {
            tableau.subtract_from_objective(i, factor);
            tableau.objective_row_mut()[basis_column] = F::zero();
        }
    }
}

/// Reduces the cost of the basic feasible solution to the minimum.
///
/// # Arguments
///
/// * `feasible`: Result of the first phase.
/// * `objective`: Direction of optimization of the original problem.
/// * `cost`: Cost of the decision variables of the original problem.
/// * `x`: Solution values, one per column, rewritten after every pivot.
/// * `options`: Tolerance, pivot limit and rule settings.
///
/// # Return value
///
/// The optimum, or a note that the problem is unbounded. The objective value is that of the
/// original problem, so not negated for maximization problems.
///
/// # Errors
///
/// When the iteration limit is reached.
pub(crate) fn primal<F, PR>(
    feasible: FeasibleBasis<F>,
    objective: Objective,
    cost: &[F],
    x: &mut [F],
    options: &SolverOptions,
) -> SolveResult<PhaseTwoResult<F>>
where
    F: OrderedField,
    PR: PivotRule<F>,
{
    let FeasibleBasis { mut tableau, mut cursor, .. } = feasible;
    load_objective(&mut tableau, objective, cost);
    log::info!("{}: starting from objective value {}", Phase::Two, signed(objective, tableau.objective_function_value()));
    log::trace!("{}", tableau);

    let mut rule = PR::new(options);
    let status = engine::run(&mut tableau, x, &mut cursor, &mut rule, Phase::Two, options)?;

    let result = match status {
        EngineStatus::Optimal => {
            let objective_value = signed(objective, tableau.objective_function_value());
            let nr_decision_variables = tableau.lengths().nr_decision_variables();
            log::info!("{}: optimal with objective value {}", Phase::Two, objective_value);
            OptimizationResult::FiniteOptimum(Solution::new(objective_value, x[..nr_decision_variables].to_vec()))
        },
        EngineStatus::Unbounded { column } => {
            log::info!("{}: unbounded along {}", Phase::Two, tableau.column_label(column));
            OptimizationResult::Unbounded
        },
    };

    Ok(PhaseTwoResult { result, tableau, cursor })
}

/// Objective value in the direction of the original problem.
fn signed<F: OrderedField>(objective: Objective, minimized: F) -> F {
    match objective {
        Objective::Minimize => minimized,
        Objective::Maximize => -minimized,
    }
}
