//! # Pivot rules
//!
//! Strategies for moving from basis to basis.
use crate::algorithm::two_phase::options::SolverOptions;
use crate::algorithm::two_phase::engine::Pivot;
use crate::algorithm::two_phase::tableau::{Tableau, TieBreak};
use crate::data::number_types::traits::OrderedField;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, a row needs to be found with the minimum ratio test. That
/// test is the same for all rules; only the way ties are broken can be chosen by the rule.
///
/// Only columns that are eligible to enter (see `Tableau::candidate_columns`) may be selected.
pub trait PivotRule<F> {
    /// Create a new instance.
    fn new(options: &SolverOptions) -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// Column index and relative cost, which is smaller than `-eps`. `None` if no column is
    /// profitable, that is, if the tableau is optimal.
    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>, eps: F) -> Option<(usize, F)>;

    /// How ties in the minimum ratio test should be broken.
    fn tie_break(&self) -> TieBreak {
        TieBreak::LowestRow
    }

    /// Called after every basis change.
    fn after_basis_update(&mut self, _pivot: &Pivot<F>, _eps: F) {
    }
}

/// Simply pivot on the first column, which has a negative relative cost.
///
/// Together with breaking ties in the ratio test by the lowest basis column this is Bland's rule,
/// which never cycles.
pub struct FirstProfitable;
impl<F: OrderedField> PivotRule<F> for FirstProfitable {
    fn new(_options: &SolverOptions) -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>, eps: F) -> Option<(usize, F)> {
        first_profitable(tableau, eps)
    }

    fn tie_break(&self) -> TieBreak {
        TieBreak::LowestBasisColumn
    }
}

/// Simply pivot on the column, which has the most negative relative cost.
///
/// Of columns with the same relative cost, the one with the lowest index is chosen. This is
/// Dantzig's rule; it can cycle on degenerate problems.
pub struct SteepestDescentAlongVariable;
impl<F: OrderedField> PivotRule<F> for SteepestDescentAlongVariable {
    fn new(_options: &SolverOptions) -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>, eps: F) -> Option<(usize, F)> {
        most_negative(tableau, eps)
    }
}

/// Dantzig's rule, until the method stalls.
///
/// After a number of consecutive degenerate pivots, Bland's rule is used until a pivot changes the
/// solution again. Any cycle consists of degenerate pivots only, so it would be made with Bland's
/// rule, which can't cycle.
pub struct DantzigWithBlandFallback {
    threshold: usize,
    degenerate_streak: usize,
}

impl DantzigWithBlandFallback {
    /// Whether Bland's rule is currently used.
    pub fn is_falling_back(&self) -> bool {
        self.degenerate_streak >= self.threshold
    }
}

impl<F: OrderedField> PivotRule<F> for DantzigWithBlandFallback {
    fn new(options: &SolverOptions) -> Self {
        Self {
            threshold: options.degeneracy_threshold,
            degenerate_streak: 0,
        }
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>, eps: F) -> Option<(usize, F)> {
        if self.is_falling_back() {
            first_profitable(tableau, eps)
        } else {
            most_negative(tableau, eps)
        }
    }

    fn tie_break(&self) -> TieBreak {
        if self.is_falling_back() {
            TieBreak::LowestBasisColumn
        } else {
            TieBreak::LowestRow
        }
    }

    fn after_basis_update(&mut self, pivot: &Pivot<F>, eps: F) {
        let was_falling_back = self.is_falling_back();
        if pivot.is_degenerate(eps) {
            self.degenerate_streak += 1;
        } else {
            self.degenerate_streak = 0;
        }

        match (was_falling_back, self.is_falling_back()) {
            (false, true) => log::debug!(
                "{} consecutive degenerate pivots, switching to Bland's rule", self.degenerate_streak,
            ),
            (true, false) => log::debug!("Nondegenerate pivot, switching back to Dantzig's rule"),
            _ => {},
        }
    }
}

fn first_profitable<F: OrderedField>(tableau: &Tableau<F>, eps: F) -> Option<(usize, F)> {
    tableau.candidate_columns()
        .map(|column| (column, tableau.relative_cost(column)))
        .find(|&(_, cost)| cost < -eps)
}

fn most_negative<F: OrderedField>(tableau: &Tableau<F>, eps: F) -> Option<(usize, F)> {
    let mut smallest: Option<(usize, F)> = None;
    for (j, cost) in tableau.candidate_columns()
        .map(|column| (column, tableau.relative_cost(column)))
        .filter(|&(_, cost)| cost < -eps) {
        match smallest {
            Some((_, existing_cost)) if cost >= existing_cost => {},
            _ => smallest = Some((j, cost)),
        }
    }

    smallest
}
