//! # Small problems with known outcomes
//!
//! Problems that are usually solved by hand in a first course on linear programming.
use twophase::algorithm::Solve;
use twophase::algorithm::two_phase::Outcome;
use twophase::algorithm::two_phase::options::SolverOptions;
use twophase::data::linear_program::elements::{ConstraintType, Objective};
use twophase::data::linear_program::general_form::{Constraint, GeneralForm};

mod test;

fn solve(objective: Objective, cost: Vec<f64>, constraints: Vec<(Vec<f64>, ConstraintType, f64)>) -> Outcome<f64> {
    let constraints = constraints.into_iter()
        .map(|(coefficients, constraint_type, rhs)| Constraint::new(coefficients, constraint_type, rhs))
        .collect();

    GeneralForm::new(objective, cost, constraints)
        .solve(&SolverOptions::default())
        .unwrap()
}
