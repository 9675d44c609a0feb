use approx::assert_abs_diff_eq;

use twophase::algorithm::{OptimizationResult, Solve};
use twophase::algorithm::two_phase::Phase;
use twophase::algorithm::two_phase::options::{PivotRuleKind, SolverOptions};
use twophase::data::linear_program::general_form::GeneralForm;
use twophase::error::SolveError;

use super::{beale, chvatal};

fn assert_solves(problem: &GeneralForm<f64>, pivot_rule: PivotRuleKind, objective_value: f64, values: &[f64]) {
    let options = SolverOptions::default()
        .with_pivot_rule(pivot_rule)
        .with_max_iterations(1_000);
    let outcome = problem.solve(&options).unwrap();

    match outcome.result {
        OptimizationResult::FiniteOptimum(solution) => {
            assert_abs_diff_eq!(solution.objective_value(), objective_value, epsilon = 1e-9);
            for (&computed, &expected) in solution.solution_values().iter().zip(values) {
                assert_abs_diff_eq!(computed, expected, epsilon = 1e-9);
            }
        },
        other => panic!("Expected a finite optimum with {:?}, got {:?}", pivot_rule, other),
    }
}

#[test]
fn beale_with_fallback() {
    assert_solves(&beale(), PivotRuleKind::DantzigWithBlandFallback, -0.05, &[0.04, 0f64, 1f64, 0f64]);
}

#[test]
fn beale_with_bland() {
    assert_solves(&beale(), PivotRuleKind::FirstProfitable, -0.05, &[0.04, 0f64, 1f64, 0f64]);
}

#[test]
fn beale_cycles_with_dantzig() {
    let options = SolverOptions::default()
        .with_pivot_rule(PivotRuleKind::SteepestDescentAlongVariable)
        .with_max_iterations(100);
    let result = beale().solve(&options);
    assert_eq!(result, Err(SolveError::IterationLimit { phase: Phase::Two, iterations: 100 }));
}

#[test]
fn chvatal_with_fallback() {
    assert_solves(&chvatal(), PivotRuleKind::DantzigWithBlandFallback, 1f64, &[1f64, 0f64, 1f64, 0f64]);
}

#[test]
fn chvatal_with_bland() {
    assert_solves(&chvatal(), PivotRuleKind::FirstProfitable, 1f64, &[1f64, 0f64, 1f64, 0f64]);
}

#[test]
fn chvatal_cycles_with_dantzig() {
    let options = SolverOptions::default()
        .with_pivot_rule(PivotRuleKind::SteepestDescentAlongVariable)
        .with_max_iterations(100);
    assert!(matches!(chvatal().solve(&options), Err(SolveError::IterationLimit { phase: Phase::Two, .. })));
}

#[test]
fn low_threshold() {
    for threshold in [0, 1, 2] {
        let options = SolverOptions::default().with_degeneracy_threshold(threshold);
        let outcome = beale().solve(&options).unwrap();
        assert!(matches!(outcome.result, OptimizationResult::FiniteOptimum(_)));
    }
}
