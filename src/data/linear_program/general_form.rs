//! # Linear programs in "general form"
//!
//! Data structure for linear programs as a user describes them: an objective direction, a cost
//! vector and constraints of any type with any sign of the right-hand side. All variables are
//! nonnegative.
//!
//! Before solving, a `GeneralForm` is turned into a tableau with a basic (not necessarily
//! feasible) solution, see `GeneralForm::derive_tableau`.
use enum_map::EnumMap;

use crate::algorithm::two_phase::tableau::Tableau;
use crate::algorithm::two_phase::tableau::kind::Lengths;
use crate::data::linear_program::elements::{ConstraintType, Objective};
use crate::data::number_types::traits::OrderedField;
use crate::error::InconsistencyError;

/// A single (in)equality `<coefficients, x> (<=|>=|=) rhs`.
#[derive(Clone, Debug, PartialEq)]
pub struct Constraint<F> {
    /// One value per decision variable. May be shorter than the number of variables, in which case
    /// the missing values are zero.
    pub coefficients: Vec<F>,
    /// Direction of the (in)equality.
    pub constraint_type: ConstraintType,
    /// Right-hand side, may be negative.
    pub rhs: F,
}

impl<F> Constraint<F> {
    /// Create a new constraint.
    pub fn new(coefficients: Vec<F>, constraint_type: ConstraintType, rhs: F) -> Self {
        Self { coefficients, constraint_type, rhs }
    }
}

/// A linear program in general form.
///
/// This structure is used as a first representation of a problem, before it is transformed into a
/// tableau. It is not checked for consistency on creation; that happens in `derive_tableau`.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneralForm<F> {
    /// Which direction does the objective function go?
    objective: Objective,
    /// Cost of each decision variable. Its length determines the number of variables.
    cost: Vec<F>,
    /// All constraints, in the order given by the user.
    constraints: Vec<Constraint<F>>,
}

impl<F: OrderedField> GeneralForm<F> {
    /// Create a new linear program in general form.
    ///
    /// # Arguments
    ///
    /// * `objective`: Minimize or maximize.
    /// * `cost`: Cost coefficient of each decision variable.
    /// * `constraints`: Constraints on the decision variables. Nonnegativity of the variables is
    /// implied and should not be included.
    pub fn new(objective: Objective, cost: Vec<F>, constraints: Vec<Constraint<F>>) -> Self {
        Self { objective, cost, constraints }
    }

    /// Direction of optimization.
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Cost coefficients.
    pub fn cost(&self) -> &[F] {
        &self.cost
    }

    /// Constraints as provided.
    pub fn constraints(&self) -> &[Constraint<F>] {
        &self.constraints
    }

    /// Number of decision variables.
    pub fn nr_variables(&self) -> usize {
        self.cost.len()
    }

    /// Number of constraints.
    pub fn nr_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Build the tableau to start the first phase with.
    ///
    /// Constraints with a negative right-hand side are multiplied by `-1` first. Rows are then
    /// ordered `<=`, `>=`, `=`, keeping the order of the user within each type. Every `<=` row gets
    /// a slack variable that is basic. Every `>=` row gets a surplus variable and an artificial
    /// variable that is basic, and every `=` row an artificial variable that is basic.
    ///
    /// # Errors
    ///
    /// If there are no variables, a constraint has more coefficients than there are variables, or
    /// a value is not finite.
    pub fn derive_tableau(&self) -> Result<Tableau<F>, InconsistencyError> {
        self.check_consistency()?;

        let nr_variables = self.nr_variables();
        let mut rows_by_type = EnumMap::<ConstraintType, Vec<(Vec<F>, F)>>::default();
        for constraint in &self.constraints {
            let mut coefficients = constraint.coefficients.clone();
            coefficients.resize(nr_variables, F::zero());
            let (constraint_type, rhs) = if constraint.rhs < F::zero() {
                for coefficient in &mut coefficients {
                    *coefficient = -*coefficient;
                }
                (!constraint.constraint_type, -constraint.rhs)
            } else {
                (constraint.constraint_type, constraint.rhs)
            };
            rows_by_type[constraint_type].push((coefficients, rhs));
        }

        let lengths = Lengths::new(
            nr_variables,
            rows_by_type[ConstraintType::Less].len(),
            rows_by_type[ConstraintType::Greater].len(),
            rows_by_type[ConstraintType::Equal].len(),
        );
        let nr_columns = lengths.nr_columns();

        let (rows, rhs): (Vec<_>, Vec<_>) = [ConstraintType::Less, ConstraintType::Greater, ConstraintType::Equal]
            .into_iter()
            .flat_map(|constraint_type| rows_by_type[constraint_type].iter())
            .enumerate()
            .map(|(i, (coefficients, b))| {
                let mut row = Vec::with_capacity(nr_columns);
                row.extend_from_slice(coefficients);
                row.resize(nr_columns, F::zero());
                row[lengths.initial_basis_column(i)] = F::one();
                if let Some(j) = lengths.surplus_column(i) {
                    row[j] = -F::one();
                }
                (row, *b)
            })
            .unzip();

        log::debug!(
            "Derived a tableau with {} rows ({} <=, {} >=, {} =) and {} columns",
            lengths.nr_rows(),
            lengths.nr_constraints(ConstraintType::Less),
            lengths.nr_constraints(ConstraintType::Greater),
            lengths.nr_constraints(ConstraintType::Equal),
            nr_columns,
        );
        Tableau::new(lengths, &rows, &rhs)
    }

    /// Whether the problem is described consistently.
    fn check_consistency(&self) -> Result<(), InconsistencyError> {
        if self.cost.is_empty() {
            return Err(InconsistencyError::new("The problem has no decision variables"));
        }
        if let Some(j) = self.cost.iter().position(|c| !c.is_finite()) {
            return Err(InconsistencyError::new(format!("Cost of variable {} is {}", j + 1, self.cost[j])));
        }

        for (i, constraint) in self.constraints.iter().enumerate() {
            if constraint.coefficients.len() > self.nr_variables() {
                return Err(InconsistencyError::new(format!(
                    "Constraint {} has {} coefficients, but there are {} variables",
                    i + 1, constraint.coefficients.len(), self.nr_variables(),
                )));
            }
            if constraint.coefficients.iter().any(|a| !a.is_finite()) || !constraint.rhs.is_finite() {
                return Err(InconsistencyError::new(format!("Constraint {} has a value that is not finite", i + 1)));
            }
        }

        Ok(())
    }
}
