//! # Column kinds: decision, slack, surplus or artificial
//!
//! The columns of a tableau appear in a fixed order, determined by the number of decision
//! variables and the number of constraints of each type. Artificial variables can be used to find
//! a feasible solution in the two-phase algorithm: the first phase finds a basic feasible solution,
//! the second improves it. They are always the last columns, so that excluding them in the second
//! phase is a matter of masking a contiguous range.
use std::ops::Range;

use enum_map::{EnumMap, enum_map};

use crate::data::linear_program::elements::ConstraintType;

/// What a column of the tableau represents.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ColumnKind {
    /// A variable of the original problem.
    Decision,
    /// Positive slack of a `<=` row.
    Slack,
    /// Negative slack of a `>=` row.
    Surplus,
    /// Artificial variable of a `>=` or `=` row. Only allowed in the basis during the first phase.
    Artificial,
}

impl ColumnKind {
    /// Prefix used when printing variable names.
    pub fn prefix(self) -> char {
        match self {
            ColumnKind::Decision => 'x',
            ColumnKind::Slack => 's',
            ColumnKind::Surplus => 'e',
            ColumnKind::Artificial => 'a',
        }
    }
}

/// Column and row counts of a tableau.
///
/// Rows are ordered `<=`, `>=`, `=`. Columns are ordered
///
/// `[decision | slack for <= | surplus for >= | artificial for >= | artificial for =]`
///
/// followed by the right-hand side. This value doesn't change after the tableau is built.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Lengths {
    nr_decision_variables: usize,
    nr_constraints: EnumMap<ConstraintType, usize>,
}

impl Lengths {
    /// Create a new instance.
    ///
    /// # Arguments
    ///
    /// * `nr_decision_variables`: Number of variables in the original problem (`lc`).
    /// * `less`: Number of `<=` constraints (`lbl`).
    /// * `greater`: Number of `>=` constraints (`lbg`).
    /// * `equal`: Number of `=` constraints (`lbe`).
    pub fn new(nr_decision_variables: usize, less: usize, greater: usize, equal: usize) -> Self {
        Self {
            nr_decision_variables,
            nr_constraints: enum_map! {
                ConstraintType::Less => less,
                ConstraintType::Greater => greater,
                ConstraintType::Equal => equal,
            },
        }
    }

    /// Number of variables in the original problem.
    pub fn nr_decision_variables(&self) -> usize {
        self.nr_decision_variables
    }

    /// Number of constraints of a given type.
    pub fn nr_constraints(&self, constraint_type: ConstraintType) -> usize {
        self.nr_constraints[constraint_type]
    }

    /// Total number of constraints, which is the number of rows when none were removed.
    pub fn nr_rows(&self) -> usize {
        self.nr_constraints.values().sum()
    }

    /// Number of artificial variables: one for each `>=` and `=` row.
    pub fn nr_artificial_variables(&self) -> usize {
        self.nr_constraints[ConstraintType::Greater] + self.nr_constraints[ConstraintType::Equal]
    }

    /// Number of variable columns, the right-hand side not included.
    pub fn nr_columns(&self) -> usize {
        self.nr_decision_variables
            + self.nr_constraints[ConstraintType::Less]
            + 2 * self.nr_constraints[ConstraintType::Greater]
            + self.nr_constraints[ConstraintType::Equal]
    }

    /// Rows of a constraint type.
    pub fn rows(&self, constraint_type: ConstraintType) -> Range<usize> {
        let less = self.nr_constraints[ConstraintType::Less];
        let greater = self.nr_constraints[ConstraintType::Greater];
        let start = match constraint_type {
            ConstraintType::Less => 0,
            ConstraintType::Greater => less,
            ConstraintType::Equal => less + greater,
        };

        start..start + self.nr_constraints[constraint_type]
    }

    /// Rows that own an artificial variable: the `>=` and `=` rows, which are the last rows.
    pub fn artificial_rows(&self) -> Range<usize> {
        self.nr_constraints[ConstraintType::Less]..self.nr_rows()
    }

    /// Columns holding artificial variables, which are the last variable columns.
    pub fn artificial_columns(&self) -> Range<usize> {
        (self.nr_columns() - self.nr_artificial_variables())..self.nr_columns()
    }

    /// Index of the first column of a kind.
    fn kind_start(&self, kind: ColumnKind) -> usize {
        let less = self.nr_constraints[ConstraintType::Less];
        let greater = self.nr_constraints[ConstraintType::Greater];
        match kind {
            ColumnKind::Decision => 0,
            ColumnKind::Slack => self.nr_decision_variables,
            ColumnKind::Surplus => self.nr_decision_variables + less,
            ColumnKind::Artificial => self.nr_decision_variables + less + greater,
        }
    }

    /// What column `j` represents.
    ///
    /// # Arguments
    ///
    /// * `j`: Column index, in range `0` until `self.nr_columns()`.
    pub fn kind(&self, j: usize) -> ColumnKind {
        debug_assert!(j < self.nr_columns());

        [ColumnKind::Artificial, ColumnKind::Surplus, ColumnKind::Slack]
            .into_iter()
            .find(|&kind| j >= self.kind_start(kind))
            .unwrap_or(ColumnKind::Decision)
    }

    /// Position of column `j` among the columns of the same kind.
    pub fn index_within_kind(&self, j: usize) -> usize {
        j - self.kind_start(self.kind(j))
    }

    /// Column of the variable that is basic in row `i` when the tableau is first built.
    ///
    /// That is the slack for a `<=` row and the artificial variable otherwise.
    pub fn initial_basis_column(&self, i: usize) -> usize {
        debug_assert!(i < self.nr_rows());

        let less = self.nr_constraints[ConstraintType::Less];
        if i < less {
            self.kind_start(ColumnKind::Slack) + i
        } else {
            self.kind_start(ColumnKind::Artificial) + (i - less)
        }
    }

    /// Column of the surplus variable of a `>=` row.
    pub fn surplus_column(&self, i: usize) -> Option<usize> {
        self.rows(ConstraintType::Greater)
            .contains(&i)
            .then(|| self.kind_start(ColumnKind::Surplus) + (i - self.nr_constraints[ConstraintType::Less]))
    }
}
