//! # Representation of feasible solutions
//!
//! Once a linear program is fully solved, a solution is derived. It contains the values of the
//! decision variables only; slack, surplus and artificial variables are left out.
use std::fmt::{Display, Formatter, Result as FormatResult};

use itertools::Itertools;

use crate::data::number_types::traits::OrderedField;

/// Represents an optimal solution to a linear program.
///
/// Should represent a solution that is feasible. This struct would probably be used to print the
/// optimal solution for the user.
#[derive(Clone, PartialEq, Debug)]
pub struct Solution<F> {
    /// Value of the objective function for this solution, in the direction of the original problem.
    objective_value: F,
    /// Values of the decision variables, in the order of the original problem.
    solution_values: Vec<F>,
}

impl<F: OrderedField> Solution<F> {
    /// Create a new `Solution` instance.
    ///
    /// # Arguments
    ///
    /// * `objective_value`: Value of the objective function of the original problem.
    /// * `solution_values`: One value for each decision variable.
    pub fn new(objective_value: F, solution_values: Vec<F>) -> Self {
        Self {
            objective_value,
            solution_values,
        }
    }

    /// Value of the objective function.
    pub fn objective_value(&self) -> F {
        self.objective_value
    }

    /// Value of each decision variable.
    pub fn solution_values(&self) -> &[F] {
        &self.solution_values
    }
}

impl<F: OrderedField> Display for Solution<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        writeln!(f, "Objective value: {}", self.objective_value)?;
        write!(
            f,
            "{}",
            self.solution_values.iter()
                .enumerate()
                .map(|(j, value)| format!("x{} = {}", j + 1, value))
                .join("\n"),
        )
    }
}
