//! # A two-phase Simplex solver
//!
//! Linear programs are solved using the two-phase Simplex Method on a dense tableau, as described
//! in the book Combinatorial Optimization by Christos H. Papadimitriou and Kenneth Steiglitz.
//!
//! ```
//! use twophase::algorithm::{OptimizationResult, Solve};
//! use twophase::algorithm::two_phase::options::SolverOptions;
//! use twophase::data::linear_program::elements::{ConstraintType, Objective};
//! use twophase::data::linear_program::general_form::{Constraint, GeneralForm};
//!
//! let problem = GeneralForm::new(Objective::Maximize, vec![3f64, 2f64], vec![
//!     Constraint::new(vec![1f64, 1f64], ConstraintType::Less, 4f64),
//!     Constraint::new(vec![1f64, 3f64], ConstraintType::Less, 6f64),
//! ]);
//! let outcome = problem.solve(&SolverOptions::default())?;
//! match outcome.result {
//!     OptimizationResult::FiniteOptimum(solution) => assert_eq!(solution.objective_value(), 12f64),
//!     _ => unreachable!(),
//! }
//! # Ok::<(), twophase::error::SolveError>(())
//! ```
//!
//! The final tableau is part of the outcome and can be printed; its `Display` implementation shows
//! the basis, the relative costs and the right-hand side.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod error;

#[cfg(test)]
mod tests;
