//! # Randomized problems that are feasible by construction
//!
//! A point `x0` is drawn first, and every constraint is made to hold at that point. An extra
//! constraint bounds the sum of the variables, so each problem has a finite optimum that is at
//! least as good as the value at `x0`.
use proptest::prelude::*;

use twophase::algorithm::{OptimizationResult, Solve};
use twophase::algorithm::two_phase::options::{PivotRuleKind, SolverOptions};
use twophase::data::linear_program::elements::{ConstraintType, Objective};
use twophase::data::linear_program::general_form::{Constraint, GeneralForm};

const TOLERANCE: f64 = 1e-6;

#[derive(Clone, Debug)]
struct Problem {
    general_form: GeneralForm<f64>,
    x0: Vec<f64>,
}

fn to_constraint_type(index: u8) -> ConstraintType {
    match index {
        0 => ConstraintType::Less,
        1 => ConstraintType::Greater,
        _ => ConstraintType::Equal,
    }
}

fn problem() -> impl Strategy<Value = Problem> {
    (1_usize..=4, 1_usize..=4)
        .prop_flat_map(|(nr_variables, nr_constraints)| (
            prop::collection::vec(0_i32..=5, nr_variables),
            prop::collection::vec(-5_i32..=5, nr_variables),
            prop::collection::vec(
                (prop::collection::vec(-5_i32..=5, nr_variables), 0_u8..3, 0_i32..=3),
                nr_constraints,
            ),
            any::<bool>(),
        ))
        .prop_map(|(x0, cost, rows, maximize)| {
            let x0 = x0.into_iter().map(f64::from).collect::<Vec<_>>();
            let mut constraints = rows.into_iter()
                .map(|(coefficients, index, slack)| {
                    let coefficients = coefficients.into_iter().map(f64::from).collect::<Vec<_>>();
                    let at_x0 = dot(&coefficients, &x0);
                    let constraint_type = to_constraint_type(index);
                    let rhs = match constraint_type {
                        ConstraintType::Less => at_x0 + f64::from(slack),
                        ConstraintType::Greater => at_x0 - f64::from(slack),
                        ConstraintType::Equal => at_x0,
                    };
                    Constraint::new(coefficients, constraint_type, rhs)
                })
                .collect::<Vec<_>>();
            constraints.push(Constraint::new(vec![1f64; x0.len()], ConstraintType::Less, 100f64));

            let objective = if maximize { Objective::Maximize } else { Objective::Minimize };
            let cost = cost.into_iter().map(f64::from).collect();
            Problem { general_form: GeneralForm::new(objective, cost, constraints), x0 }
        })
}

fn dot(left: &[f64], right: &[f64]) -> f64 {
    left.iter().zip(right).map(|(a, b)| a * b).sum()
}

fn satisfies(constraint: &Constraint<f64>, x: &[f64]) -> bool {
    let value = dot(&constraint.coefficients, x);
    match constraint.constraint_type {
        ConstraintType::Less => value <= constraint.rhs + TOLERANCE,
        ConstraintType::Greater => value >= constraint.rhs - TOLERANCE,
        ConstraintType::Equal => (value - constraint.rhs).abs() <= TOLERANCE,
    }
}

proptest! {
    #[test]
    fn optimum_is_feasible_and_no_worse(problem in problem()) {
        for pivot_rule in [PivotRuleKind::DantzigWithBlandFallback, PivotRuleKind::FirstProfitable] {
            let options = SolverOptions::default()
                .with_pivot_rule(pivot_rule)
                .with_max_iterations(10_000);
            let outcome = problem.general_form.solve(&options).unwrap();

            let solution = match outcome.result {
                OptimizationResult::FiniteOptimum(solution) => solution,
                other => panic!("Expected a finite optimum, got {:?}", other),
            };
            let x = solution.solution_values();
            prop_assert!(x.iter().all(|&value| value >= -TOLERANCE));
            prop_assert!(problem.general_form.constraints().iter().all(|constraint| satisfies(constraint, x)));

            let cost = problem.general_form.cost();
            prop_assert!((solution.objective_value() - dot(cost, x)).abs() <= TOLERANCE);
            let at_x0 = dot(cost, &problem.x0);
            match problem.general_form.objective() {
                Objective::Minimize => {
                    prop_assert!(solution.objective_value() <= at_x0 + TOLERANCE);
                },
                Objective::Maximize => {
                    prop_assert!(solution.objective_value() >= at_x0 - TOLERANCE);
                },
            }

            // Optimality: no column that may enter has a negative relative cost
            let tableau = &outcome.tableau;
            prop_assert!(tableau.candidate_columns().all(|j| tableau.relative_cost(j) >= -options.eps));
            prop_assert!(!tableau.has_artificial_in_basis());
        }
    }
}
