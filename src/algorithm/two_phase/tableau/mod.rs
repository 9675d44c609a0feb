//! # Data structures for Simplex
//!
//! Contains the simplex tableau and logic for elementary operations which can be performed upon it.
//!
//! The tableau is stored densely, row by row, in a single buffer. Row `0` of that buffer is the
//! objective row, the constraint rows follow. The last column holds the right-hand side. The
//! header row and label column that are usually drawn around a tableau are not stored; they are
//! derived from the column kinds and the basis when printing.
use std::collections::HashSet;
use std::fmt::{Display, Formatter, Result as FormatResult};

use itertools::Itertools;

use crate::algorithm::two_phase::tableau::kind::{ColumnKind, Lengths};
use crate::data::number_types::traits::OrderedField;
use crate::error::InconsistencyError;

pub mod kind;

/// How to choose between rows that have the same minimum ratio.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TieBreak {
    /// Take the row with the lowest index.
    LowestRow,
    /// Take the row whose basic variable has the lowest column index (Bland's rule).
    LowestBasisColumn,
}

/// The most high-level data structure that is used by the Simplex algorithm: the Simplex tableau.
///
/// It owns all data describing the current basis. The objective row is in "minimize-canonical"
/// form: entry `j` is the relative cost of column `j`, and a column is profitable to bring into the
/// basis if its relative cost is negative. The right-hand side cell of the objective row holds
/// minus the objective value of the minimization that is being performed.
#[derive(Clone, PartialEq, Debug)]
pub struct Tableau<F> {
    /// Layout of the columns, shared read-only by both phases.
    lengths: Lengths,
    /// Number of constraint rows.
    ///
    /// Equals `lengths.nr_rows()` unless redundant rows were removed after the first phase.
    nr_rows: usize,
    /// Row-major `(nr_rows + 1) x (nr_columns + 1)` values.
    data: Vec<F>,
    /// Whether a column may be selected to enter the basis.
    eligible: Vec<bool>,
    /// For each row, the column that is basic in it.
    basis_indices: Vec<usize>,
    /// All columns currently in the basis.
    ///
    /// Could also be derived from `basis_indices`, but is here for faster reading and writing.
    basis_columns: HashSet<usize>,
}

impl<F: OrderedField> Tableau<F> {
    /// Create a tableau from constraint rows that already contain all slack, surplus and artificial
    /// columns.
    ///
    /// The initial basis consists of the slack variable of each `<=` row and the artificial
    /// variable of each other row. The objective row is zero; the phases write it.
    ///
    /// # Arguments
    ///
    /// * `lengths`: Layout of the columns and rows.
    /// * `rows`: Constraint rows, each with `lengths.nr_columns()` coefficients.
    /// * `rhs`: Nonnegative right-hand side for each row.
    ///
    /// # Errors
    ///
    /// If the dimensions don't match the layout, a right-hand side value is negative or not finite,
    /// or a column of the initial basis is not a unit column.
    pub fn new(
        lengths: Lengths,
        rows: &[Vec<F>],
        rhs: &[F],
    ) -> Result<Self, InconsistencyError> {
        let nr_rows = lengths.nr_rows();
        let nr_columns = lengths.nr_columns();
        if rows.len() != nr_rows || rhs.len() != nr_rows {
            return Err(InconsistencyError::new(format!(
                "Expected {} rows, got {} rows and {} right-hand side values",
                nr_rows, rows.len(), rhs.len(),
            )));
        }
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != nr_columns) {
            return Err(InconsistencyError::new(format!(
                "Row {} has {} coefficients, expected {}", i, row.len(), nr_columns,
            )));
        }
        if let Some(i) = rhs.iter().position(|b| !b.is_finite() || *b < F::zero()) {
            return Err(InconsistencyError::new(format!(
                "Right-hand side of row {} is {}, should be finite and nonnegative", i, rhs[i],
            )));
        }

        let width = nr_columns + 1;
        let mut data = vec![F::zero(); (nr_rows + 1) * width];
        for (i, (row, b)) in rows.iter().zip(rhs).enumerate() {
            let start = (i + 1) * width;
            data[start..start + nr_columns].copy_from_slice(row);
            data[start + nr_columns] = *b;
        }

        let basis_indices = (0..nr_rows).map(|i| lengths.initial_basis_column(i)).collect::<Vec<_>>();
        for (i, &j) in basis_indices.iter().enumerate() {
            let is_unit = rows.iter().enumerate()
                .all(|(k, row)| row[j] == if k == i { F::one() } else { F::zero() });
            if !is_unit {
                return Err(InconsistencyError::new(format!(
                    "Column {} should be the unit column of row {} in the initial basis", j, i,
                )));
            }
        }
        let basis_columns = basis_indices.iter().copied().collect();

        Ok(Self {
            eligible: vec![true; nr_columns],
            lengths,
            nr_rows,
            data,
            basis_indices,
            basis_columns,
        })
    }

    /// Number of values in a row of the buffer, the right-hand side included.
    fn width(&self) -> usize {
        self.nr_columns() + 1
    }

    /// Layout of the columns.
    pub fn lengths(&self) -> &Lengths {
        &self.lengths
    }

    /// Number of constraint rows in the tableau.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Number of variables in the tableau, artificial variables included.
    pub fn nr_columns(&self) -> usize {
        self.lengths.nr_columns()
    }

    /// What column `j` represents.
    pub fn kind(&self, j: usize) -> ColumnKind {
        self.lengths.kind(j)
    }

    /// Whether a column is an artificial variable.
    pub fn is_artificial(&self, j: usize) -> bool {
        self.kind(j) == ColumnKind::Artificial
    }

    /// Name of the variable in column `j`, such as `x1`, `s2`, `e1` or `a3`.
    pub fn column_label(&self, j: usize) -> String {
        format!("{}{}", self.kind(j).prefix(), self.lengths.index_within_kind(j) + 1)
    }

    /// Value in constraint row `i` and column `j`.
    ///
    /// Column `self.nr_columns()` is the right-hand side.
    pub fn element(&self, i: usize, j: usize) -> F {
        debug_assert!(i < self.nr_rows());
        debug_assert!(j <= self.nr_columns());

        self.data[(i + 1) * self.width() + j]
    }

    /// Coefficients and right-hand side of constraint row `i`.
    pub fn row(&self, i: usize) -> &[F] {
        debug_assert!(i < self.nr_rows());

        let start = (i + 1) * self.width();
        &self.data[start..start + self.width()]
    }

    /// Objective row, right-hand side cell included.
    pub fn objective_row(&self) -> &[F] {
        &self.data[..self.width()]
    }

    /// Mutable objective row, right-hand side cell included.
    ///
    /// Writing to this row is how the phases load their objective function.
    pub(crate) fn objective_row_mut(&mut self) -> &mut [F] {
        let width = self.width();
        &mut self.data[..width]
    }

    /// Subtract `factor` times constraint row `i` from the objective row.
    pub(crate) fn subtract_from_objective(&mut self, i: usize, factor: F) {
        debug_assert!(i < self.nr_rows());

        let width = self.width();
        let (objective, constraints) = self.data.split_at_mut(width);
        let row = &constraints[i * width..(i + 1) * width];
        for (target, &value) in objective.iter_mut().zip(row) {
            *target -= factor * value;
        }
    }

    /// Relative cost of a column, read from the objective row.
    ///
    /// # Note
    ///
    /// For basis columns this is always zero.
    pub fn relative_cost(&self, j: usize) -> F {
        debug_assert!(j < self.nr_columns());

        self.data[j]
    }

    /// Right-hand side of constraint row `i`: the value of the variable basic in that row.
    pub fn constraint_value(&self, i: usize) -> F {
        self.element(i, self.nr_columns())
    }

    /// Set the right-hand side of constraint row `i` to exactly zero.
    ///
    /// Only meant for values that are already zero within the tolerance.
    pub(crate) fn clear_constraint_value(&mut self, i: usize) {
        debug_assert!(i < self.nr_rows());

        let index = (i + 1) * self.width() + self.nr_columns();
        self.data[index] = F::zero();
    }

    /// Get the cost of the current solution.
    ///
    /// This is the value of the minimization that the objective row currently describes, which is
    /// the sum of artificial variables in the first phase.
    pub fn objective_function_value(&self) -> F {
        -self.data[self.nr_columns()]
    }

    /// Whether a column is in the basis.
    pub fn is_in_basis(&self, column: usize) -> bool {
        debug_assert!(column < self.nr_columns());

        self.basis_columns.contains(&column)
    }

    /// Column that is basic in row `i`.
    pub fn basis_column(&self, i: usize) -> usize {
        self.basis_indices[i]
    }

    /// For each row, the column basic in it.
    pub fn basis_indices(&self) -> &[usize] {
        &self.basis_indices
    }

    /// Whether column `j` may be selected to enter the basis.
    pub fn is_eligible(&self, j: usize) -> bool {
        self.eligible[j]
    }

    /// Allow or forbid column `j` to enter the basis.
    pub(crate) fn set_eligible(&mut self, j: usize, eligible: bool) {
        self.eligible[j] = eligible;
    }

    /// Columns that are neither basic nor excluded from entering.
    pub fn candidate_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.nr_columns()).filter(|&j| self.eligible[j] && !self.is_in_basis(j))
    }

    /// Whether an artificial variable is still basic.
    pub fn has_artificial_in_basis(&self) -> bool {
        self.basis_indices.iter().any(|&j| self.is_artificial(j))
    }

    /// Determine the row to pivot on.
    ///
    /// This is the row with the minimal ratio between the right-hand side and a positive entry in
    /// the column. Only rows with exactly that ratio are considered for the tie-break; a row with a
    /// slightly larger ratio would leave a row with a negative right-hand side after the pivot.
    ///
    /// # Arguments
    ///
    /// * `column`: Column that enters the basis.
    /// * `eps`: Entries not larger than this value are not considered positive.
    /// * `tie_break`: Rule to choose between rows with equal ratio.
    ///
    /// # Return value
    ///
    /// Index of the row to pivot on. If not found, the problem is unbounded in the direction of the
    /// column.
    pub fn select_primal_pivot_row(&self, column: usize, eps: F, tie_break: TieBreak) -> Option<usize> {
        debug_assert!(column < self.nr_columns());

        // (chosen index, minimum ratio, corresponding leaving column)
        let mut min_values: Option<(usize, F, usize)> = None;
        for row in 0..self.nr_rows() {
            let xij = self.element(row, column);
            if xij > eps {
                let ratio = self.constraint_value(row) / xij;
                let leaving_column = self.basis_indices[row];
                if let Some((min_index, min_ratio, min_leaving_column)) = &mut min_values {
                    let replace = ratio < *min_ratio || (
                        ratio == *min_ratio
                            && tie_break == TieBreak::LowestBasisColumn
                            && leaving_column < *min_leaving_column
                    );
                    if replace {
                        *min_index = row;
                        *min_ratio = ratio;
                        *min_leaving_column = leaving_column;
                    }
                } else {
                    min_values = Some((row, ratio, leaving_column));
                }
            }
        }

        min_values.map(|(min_index, _, _)| min_index)
    }

    /// Brings a column into the basis with a Gauss-Jordan elimination step.
    ///
    /// The pivot row is divided by the pivot element and the pivot column is eliminated from all
    /// other rows, the objective row included. The pivot column becomes exactly a unit column.
    /// Right-hand side values in `(-eps, 0)` are set to zero.
    ///
    /// # Arguments
    ///
    /// * `pivot_column_index`: Column entering the basis.
    /// * `pivot_row_index`: Row in which it becomes basic.
    /// * `eps`: Numerical tolerance.
    ///
    /// # Return value
    ///
    /// The column that left the basis.
    pub fn bring_into_basis(&mut self, pivot_column_index: usize, pivot_row_index: usize, eps: F) -> usize {
        debug_assert!(pivot_column_index < self.nr_columns());
        debug_assert!(pivot_row_index < self.nr_rows());
        debug_assert!(!self.is_in_basis(pivot_column_index));

        let width = self.width();
        let pivot_start = (pivot_row_index + 1) * width;
        let pivot = self.data[pivot_start + pivot_column_index];
        debug_assert!(pivot.is_significant(eps), "Pivot element {} is too small", pivot);

        for value in &mut self.data[pivot_start..pivot_start + width] {
            *value /= pivot;
        }
        self.data[pivot_start + pivot_column_index] = F::one();
        let pivot_row = self.data[pivot_start..pivot_start + width].to_vec();

        for (r, row) in self.data.chunks_mut(width).enumerate() {
            if r == pivot_row_index + 1 {
                continue;
            }

            let factor = row[pivot_column_index];
            if factor != F::zero() {
                for (target, &value) in row.iter_mut().zip(&pivot_row) {
                    *target -= factor * value;
                }
                row[pivot_column_index] = F::zero();
            }

            // Constraint rows only: the objective row may have any sign on the right-hand side
            let rhs = &mut row[width - 1];
            if r > 0 && *rhs < F::zero() && *rhs > -eps {
                *rhs = F::zero();
            }
        }

        self.update_basis_indices(pivot_column_index, pivot_row_index)
    }

    /// Update the basis index.
    ///
    /// Removes the index of the variable leaving the basis from the `basis_columns` attribute,
    /// while inserting the entering variable index.
    ///
    /// # Return value
    ///
    /// The column that left the basis.
    fn update_basis_indices(&mut self, pivot_column: usize, pivot_row: usize) -> usize {
        let leaving_column = self.basis_indices[pivot_row];
        self.basis_indices[pivot_row] = pivot_column;

        let was_there = self.basis_columns.remove(&leaving_column);
        debug_assert!(was_there);
        let was_not_there = self.basis_columns.insert(pivot_column);
        debug_assert!(was_not_there);

        leaving_column
    }

    /// Write the current basic feasible solution.
    ///
    /// # Arguments
    ///
    /// * `x`: Value for each column of the tableau. Basic variables get the right-hand side of their
    /// row, all others are zero.
    pub fn write_current_bfs(&self, x: &mut [F]) {
        debug_assert_eq!(x.len(), self.nr_columns());

        x.fill(F::zero());
        for (i, &j) in self.basis_indices.iter().enumerate() {
            x[j] = self.constraint_value(i);
        }
    }

    /// Get the current basic feasible solution.
    pub fn current_bfs(&self) -> Vec<F> {
        let mut x = vec![F::zero(); self.nr_columns()];
        self.write_current_bfs(&mut x);
        x
    }

    /// Remove constraint rows.
    ///
    /// Used for rows that turned out to be redundant after the first phase. The basic variables of
    /// those rows leave the basis.
    ///
    /// # Arguments
    ///
    /// * `rows`: Sorted and deduplicated row indices.
    pub(crate) fn remove_rows(&mut self, rows: &[usize]) {
        debug_assert!(rows.windows(2).all(|w| w[0] < w[1]));
        debug_assert!(rows.iter().all(|&i| i < self.nr_rows()));

        let width = self.width();
        let mut row_index = 0;
        let data = std::mem::take(&mut self.data);
        self.data = data.chunks(width)
            .enumerate()
            .filter(|&(r, _)| r == 0 || rows.binary_search(&(r - 1)).is_err())
            .flat_map(|(_, row)| row.iter().copied())
            .collect();

        self.basis_indices.retain(|_| {
            let keep = rows.binary_search(&row_index).is_err();
            row_index += 1;
            keep
        });
        self.basis_columns = self.basis_indices.iter().copied().collect();
        self.nr_rows -= rows.len();
    }
}

/// Check whether the tableau currently has a valid basic feasible solution.
///
/// Only used for debug purposes.
pub fn debug_assert_in_basic_feasible_solution_state<F: OrderedField>(tableau: &Tableau<F>, eps: F) {
    // Correct number of basis columns (uniqueness is implied because it's a set)
    debug_assert_eq!(tableau.basis_columns.len(), tableau.nr_rows());
    debug_assert_eq!(tableau.basis_indices.len(), tableau.nr_rows());

    // Basis columns are unit columns with zero relative cost
    for (i, &j) in tableau.basis_indices.iter().enumerate() {
        for k in 0..tableau.nr_rows() {
            let expected = if k == i { F::one() } else { F::zero() };
            debug_assert!(
                (tableau.element(k, j) - expected).abs() <= eps,
                "Column {} is not equal to e_{}", j, i,
            );
        }
        debug_assert!(
            tableau.relative_cost(j).abs() <= eps,
            "Relative cost of column {} is not zero", j,
        );
    }

    // `b` >= 0
    for i in 0..tableau.nr_rows() {
        let value = tableau.constraint_value(i);
        debug_assert!(
            value >= -eps,
            "rhs (b) is not always nonnegative: at index {} we have {} < 0", i, value,
        );
    }
}

impl<F: OrderedField> Display for Tableau<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        let precision = f.precision().unwrap_or(3);
        let format = |value: F| format!("{:.*}", precision, value);

        let header = (0..self.nr_columns())
            .map(|j| {
                let label = self.column_label(j);
                if self.is_eligible(j) { label } else { format!("({})", label) }
            })
            .chain(["rhs".to_string()])
            .collect::<Vec<_>>();
        let labels = ["z".to_string()].into_iter()
            .chain(self.basis_indices.iter().map(|&j| self.column_label(j)))
            .collect::<Vec<_>>();
        let rows = self.data.chunks(self.width())
            .map(|row| row.iter().map(|&value| format(value)).collect::<Vec<_>>())
            .collect::<Vec<_>>();

        let label_width = labels.iter().map(String::len).max().unwrap_or(0);
        let column_width = (0..self.width())
            .map(|j| {
                rows.iter().map(|row| row[j].len()).chain([header[j].len()]).max().unwrap_or(0)
            })
            .collect::<Vec<_>>();

        let line = |cells: &[String]| {
            cells.iter().zip(&column_width)
                .map(|(cell, &width)| format!("{:>width$}", cell, width = width))
                .join(" ")
        };

        writeln!(f, "=== Tableau ===")?;
        writeln!(f, "{:>width$} | {}", "", line(&header[..]), width = label_width)?;
        let total_width = label_width + 3 + column_width.iter().map(|w| w + 1).sum::<usize>();
        writeln!(f, "{}", "-".repeat(total_width))?;
        for (r, (label, row)) in labels.iter().zip(&rows).enumerate() {
            writeln!(f, "{:>width$} | {}", label, line(&row[..]), width = label_width)?;
            if r == 0 {
                writeln!(f, "{}", "-".repeat(total_width))?;
            }
        }

        Ok(())
    }
}
