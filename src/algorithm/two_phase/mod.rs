//! # The two-phase Simplex algorithm
//!
//! This module contains all data structures and logic specific to the simplex algorithm. The
//! first phase finds a basic feasible solution by minimizing the sum of artificial variables, the
//! second phase starts from that basis and optimizes the original objective.
//!
//! Both phases run the same pivot engine on the same tableau; the tableau is moved from the first
//! phase into the second through a `FeasibleBasis`.
use std::fmt::{Display, Formatter, Result as FormatResult};

use crate::algorithm::OptimizationResult;
use crate::algorithm::two_phase::options::{PivotRuleKind, SolverOptions};
use crate::algorithm::two_phase::phase_one::PhaseOneResult;
use crate::algorithm::two_phase::phase_two::PhaseTwoResult;
use crate::algorithm::two_phase::strategy::pivot_rule::{DantzigWithBlandFallback, FirstProfitable, PivotRule, SteepestDescentAlongVariable};
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_program::elements::Objective;
use crate::data::number_types::traits::OrderedField;
use crate::error::{InconsistencyError, SolveResult};

pub mod engine;
pub mod options;
pub mod phase_one;
pub mod phase_two;
pub mod strategy;
pub mod tableau;


/// The two phases of the algorithm.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Phase {
    /// Searching a basic feasible solution.
    One,
    /// Optimizing the original objective.
    Two,
}

impl Display for Phase {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        f.write_str(match self {
            Phase::One => "phase one",
            Phase::Two => "phase two",
        })
    }
}

/// Number of pivots done in each phase.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Iterations {
    /// Pivots of the first phase, the ones that drive artificial variables out at zero level
    /// included.
    pub phase_one: usize,
    /// Pivots of the second phase.
    pub phase_two: usize,
}

impl Iterations {
    /// Pivots over both phases.
    pub fn total(&self) -> usize {
        self.phase_one + self.phase_two
    }
}

/// Everything that is known after solving.
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome<F> {
    /// Whether the problem is infeasible, unbounded or has an optimum.
    pub result: OptimizationResult<F>,
    /// Work done.
    pub iterations: Iterations,
    /// The tableau in its final state, for inspection.
    ///
    /// For infeasible problems, this is the tableau at the end of the first phase.
    pub tableau: Tableau<F>,
}

/// Solve a linear program that is given as a tableau.
///
/// # Arguments
///
/// * `tableau`: Freshly built tableau, see `Tableau::new`.
/// * `objective`: Direction of optimization.
/// * `cost`: One value for each decision variable.
/// * `options`: Tolerance, iteration limit and pivot rule.
///
/// # Errors
///
/// If the options are invalid, the cost doesn't fit the tableau or the iteration limit is hit.
pub fn solve<F: OrderedField>(
    tableau: Tableau<F>,
    objective: Objective,
    cost: &[F],
    options: &SolverOptions,
) -> SolveResult<Outcome<F>> {
    options.validate()?;
    let nr_decision_variables = tableau.lengths().nr_decision_variables();
    if cost.len() != nr_decision_variables {
        return Err(InconsistencyError::new(format!(
            "Cost has {} values, but there are {} decision variables", cost.len(), nr_decision_variables,
        )).into());
    }
    if let Some(j) = cost.iter().position(|c| !c.is_finite()) {
        return Err(InconsistencyError::new(format!("Cost of variable {} is {}", j + 1, cost[j])).into());
    }

    match options.pivot_rule {
        PivotRuleKind::FirstProfitable => solve_with::<_, FirstProfitable>(tableau, objective, cost, options),
        PivotRuleKind::SteepestDescentAlongVariable => {
            solve_with::<_, SteepestDescentAlongVariable>(tableau, objective, cost, options)
        },
        PivotRuleKind::DantzigWithBlandFallback => {
            solve_with::<_, DantzigWithBlandFallback>(tableau, objective, cost, options)
        },
    }
}

fn solve_with<F, PR>(
    tableau: Tableau<F>,
    objective: Objective,
    cost: &[F],
    options: &SolverOptions,
) -> SolveResult<Outcome<F>>
where
    F: OrderedField,
    PR: PivotRule<F>,
{
    log::info!(
        "Solving with {} rows and {} columns, of which {} artificial",
        tableau.nr_rows(), tableau.nr_columns(), tableau.lengths().nr_artificial_variables(),
    );
    let mut x = vec![F::zero(); tableau.nr_columns()];

    match phase_one::primal::<_, PR>(tableau, &mut x, options)? {
        PhaseOneResult::Infeasible { tableau, cursor, .. } => Ok(Outcome {
            result: OptimizationResult::Infeasible,
            iterations: Iterations { phase_one: cursor.iterations(), phase_two: 0 },
            tableau,
        }),
        PhaseOneResult::Feasible(feasible) => {
            let phase_one = feasible.cursor.iterations();
            let PhaseTwoResult { result, tableau, cursor } = phase_two::primal::<_, PR>(
                feasible, objective, cost, &mut x, options,
            )?;
            let iterations = Iterations { phase_one, phase_two: cursor.iterations() - phase_one };
            log::info!("Done after {} pivots", iterations.total());

            Ok(Outcome { result, iterations, tableau })
        },
    }
}
