//! # Degenerate problems on which Dantzig's rule cycles
//!
//! With the largest coefficient rule and ties in the ratio test broken by the lowest row, the
//! simplex method returns to a basis it has visited before on these problems.
use twophase::data::linear_program::elements::{ConstraintType, Objective};
use twophase::data::linear_program::general_form::{Constraint, GeneralForm};

mod test;

/// Beale's example.
///
/// Optimal value `-1/20` at `x = (1/25, 0, 1, 0)`.
fn beale() -> GeneralForm<f64> {
    GeneralForm::new(Objective::Minimize, vec![-0.75, 150f64, -0.02, 6f64], vec![
        Constraint::new(vec![0.25, -60f64, -0.04, 9f64], ConstraintType::Less, 0f64),
        Constraint::new(vec![0.5, -90f64, -0.02, 3f64], ConstraintType::Less, 0f64),
        Constraint::new(vec![0f64, 0f64, 1f64], ConstraintType::Less, 1f64),
    ])
}

/// The example from chapter 3 of Linear Programming by Vašek Chvátal.
///
/// Optimal value `1` at `x = (1, 0, 1, 0)`.
fn chvatal() -> GeneralForm<f64> {
    GeneralForm::new(Objective::Maximize, vec![10f64, -57f64, -9f64, -24f64], vec![
        Constraint::new(vec![0.5, -5.5, -2.5, 9f64], ConstraintType::Less, 0f64),
        Constraint::new(vec![0.5, -1.5, -0.5, 1f64], ConstraintType::Less, 0f64),
        Constraint::new(vec![1f64], ConstraintType::Less, 1f64),
    ])
}
