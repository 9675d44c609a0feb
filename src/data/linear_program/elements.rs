//! # Building blocks to describe linear programs.
use std::fmt;
use std::ops::Not;

use enum_map::Enum;

/// A `Constraint` is a type of (in)equality.
///
/// The order of the variants is the order in which the rows appear in the tableau: first the
/// `<=` rows, then the `>=` rows and last the `=` rows.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Enum)]
pub enum ConstraintType {
    Less,
    Greater,
    Equal,
}

/// Multiplying a constraint by `-1` flips the direction of an inequality.
impl Not for ConstraintType {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            ConstraintType::Less => ConstraintType::Greater,
            ConstraintType::Greater => ConstraintType::Less,
            ConstraintType::Equal => ConstraintType::Equal,
        }
    }
}

impl fmt::Display for ConstraintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConstraintType::Less => "<=",
            ConstraintType::Greater => ">=",
            ConstraintType::Equal => "=",
        })
    }
}

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Objective {
    Maximize,
    #[default]
    Minimize,
}
