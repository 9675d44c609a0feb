use approx::assert_abs_diff_eq;

use twophase::algorithm::{OptimizationResult, Solve};
use twophase::algorithm::two_phase::options::{PivotRuleKind, SolverOptions};
use twophase::data::linear_program::elements::ConstraintType::{Equal, Greater, Less};
use twophase::data::linear_program::elements::Objective::{Maximize, Minimize};
use twophase::data::linear_program::general_form::{Constraint, GeneralForm};
use twophase::error::SolveError;

use super::solve;

fn assert_optimum(result: &OptimizationResult<f64>, objective_value: f64, values: &[f64]) {
    match result {
        OptimizationResult::FiniteOptimum(solution) => {
            assert_abs_diff_eq!(solution.objective_value(), objective_value, epsilon = 1e-9);
            assert_eq!(solution.solution_values().len(), values.len());
            for (&computed, &expected) in solution.solution_values().iter().zip(values) {
                assert_abs_diff_eq!(computed, expected, epsilon = 1e-9);
            }
        },
        other => panic!("Expected a finite optimum, got {:?}", other),
    }
}

#[test]
fn maximize_without_artificial_variables() {
    let outcome = solve(Maximize, vec![3f64, 2f64], vec![
        (vec![1f64, 1f64], Less, 4f64),
        (vec![1f64, 3f64], Less, 6f64),
    ]);
    assert_optimum(&outcome.result, 12f64, &[4f64, 0f64]);
    assert_eq!(outcome.iterations.phase_one, 0);
}

#[test]
fn minimize_with_greater() {
    let outcome = solve(Minimize, vec![1f64, 1f64], vec![
        (vec![1f64, 1f64], Greater, 2f64),
    ]);
    assert_optimum(&outcome.result, 2f64, &[2f64, 0f64]);
    assert_eq!(outcome.iterations.phase_one, 1);
    assert_eq!(outcome.iterations.phase_two, 0);
}

#[test]
fn unbounded() {
    let outcome = solve(Maximize, vec![1f64, 0f64], vec![
        (vec![1f64, -1f64], Less, 1f64),
    ]);
    assert_eq!(outcome.result, OptimizationResult::Unbounded);
}

#[test]
fn infeasible() {
    let outcome = solve(Minimize, vec![1f64], vec![
        (vec![1f64], Greater, 1f64),
        (vec![1f64], Less, 0f64),
    ]);
    assert_eq!(outcome.result, OptimizationResult::Infeasible);
    assert_eq!(outcome.iterations.phase_two, 0);
}

#[test]
fn nearly_equal_ratios() {
    // The second row is the tighter one, by less than the tolerance
    let problem = GeneralForm::new(Maximize, vec![1f64], vec![
        Constraint::new(vec![1f64], Less, 1f64),
        Constraint::new(vec![10f64], Less, 9.999999995f64),
    ]);
    for pivot_rule in [
        PivotRuleKind::FirstProfitable,
        PivotRuleKind::SteepestDescentAlongVariable,
        PivotRuleKind::DantzigWithBlandFallback,
    ] {
        let options = SolverOptions::default().with_pivot_rule(pivot_rule);
        let outcome = problem.solve(&options).unwrap();
        match outcome.result {
            OptimizationResult::FiniteOptimum(solution) => {
                let x = solution.solution_values()[0];
                assert!(10f64 * x <= 9.999999995f64 + 1e-12, "{} violates the second row", x);
                assert_abs_diff_eq!(x, 0.9999999995f64, epsilon = 1e-12);
            },
            other => panic!("Expected a finite optimum with {:?}, got {:?}", pivot_rule, other),
        }
        assert!((0..outcome.tableau.nr_rows()).all(|i| outcome.tableau.constraint_value(i) >= 0f64));
    }
}

#[test]
fn mixed_constraint_types() {
    let constraints = vec![
        (vec![1f64, 1f64], Less, 6f64),
        (vec![1f64, 2f64], Greater, 4f64),
        (vec![1f64, -1f64], Equal, 1f64),
    ];
    let outcome = solve(Minimize, vec![1f64, 2f64], constraints.clone());
    assert_optimum(&outcome.result, 4f64, &[2f64, 1f64]);

    let outcome = solve(Maximize, vec![1f64, 2f64], constraints);
    assert_optimum(&outcome.result, 8.5f64, &[3.5f64, 2.5f64]);
}

#[test]
fn negative_right_hand_side() {
    // Same as `x1 + x2 >= 2`
    let outcome = solve(Minimize, vec![1f64, 3f64], vec![
        (vec![-1f64, -1f64], Less, -2f64),
    ]);
    assert_optimum(&outcome.result, 2f64, &[2f64, 0f64]);
}

#[test]
fn redundant_equality() {
    let outcome = solve(Maximize, vec![1f64, 2f64], vec![
        (vec![1f64, 1f64], Equal, 2f64),
        (vec![2f64, 2f64], Equal, 4f64),
    ]);
    assert_optimum(&outcome.result, 4f64, &[0f64, 2f64]);
    assert_eq!(outcome.tableau.nr_rows(), 1);
}

#[test]
fn without_constraints() {
    let outcome = solve(Minimize, vec![1f64, 2f64], vec![]);
    assert_optimum(&outcome.result, 0f64, &[0f64, 0f64]);

    let outcome = solve(Maximize, vec![1f64, 2f64], vec![]);
    assert_eq!(outcome.result, OptimizationResult::Unbounded);
}

#[test]
fn single_precision() {
    let problem = GeneralForm::new(Maximize, vec![3f32, 2f32], vec![
        Constraint::new(vec![1f32, 1f32], Less, 4f32),
        Constraint::new(vec![1f32, 3f32], Less, 6f32),
    ]);
    let options = SolverOptions::default().with_eps(1e-5);
    match problem.solve(&options).unwrap().result {
        OptimizationResult::FiniteOptimum(solution) => {
            assert_abs_diff_eq!(solution.objective_value(), 12f32, epsilon = 1e-4);
        },
        other => panic!("Expected a finite optimum, got {:?}", other),
    }
}

#[test]
fn inconsistent() {
    let problem = GeneralForm::new(Minimize, vec![1f64], vec![
        Constraint::new(vec![1f64, 1f64], Less, 1f64),
    ]);
    let result = problem.solve(&SolverOptions::default());
    assert!(matches!(result, Err(SolveError::Inconsistent(_))));
}

#[test]
fn final_tableau_can_be_printed() {
    let outcome = solve(Minimize, vec![1f64, 1f64], vec![
        (vec![1f64, 1f64], Greater, 2f64),
    ]);
    let text = outcome.tableau.to_string();
    assert!(text.starts_with("=== Tableau ==="));
    // The artificial column is excluded in the second phase
    assert!(text.contains("(a1)"));
}
