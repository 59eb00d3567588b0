//! Heuristics for choosing which undecided variable to branch on next.

use crate::solver::{
    assignment::Assignment,
    store::VariableId,
    value::ValueEquality,
};

/// A strategy for choosing the next variable to branch on.
///
/// Only undecided variables (domain size greater than one) are eligible; a
/// decided variable is never selected. Implementations must be
/// deterministic so that searches are reproducible.
pub trait VariableSelectionHeuristic<V: ValueEquality> {
    /// Returns the chosen variable, or `None` when every variable is
    /// already decided.
    fn select_variable(&self, assignment: &Assignment<V>) -> Option<VariableId>;
}

/// Selects the undecided variable with the lowest id (registration order).
pub struct SelectFirstHeuristic;

impl<V: ValueEquality> VariableSelectionHeuristic<V> for SelectFirstHeuristic {
    fn select_variable(&self, assignment: &Assignment<V>) -> Option<VariableId> {
        assignment
            .iter()
            .filter(|(_, domain)| domain.len() > 1)
            .min_by_key(|(var, _)| *var)
            .map(|(var, _)| var)
    }
}

/// Minimum-remaining-values: selects the undecided variable with the
/// smallest current domain.
///
/// A fail-first strategy: the most constrained variable is the most likely
/// to prune the search tree early. Decided variables are excluded outright,
/// which is what "treat their size as infinite" amounts to. Ties are broken
/// by the lower variable id, i.e. registration order.
pub struct MinimumRemainingValuesHeuristic;

impl<V: ValueEquality> VariableSelectionHeuristic<V> for MinimumRemainingValuesHeuristic {
    fn select_variable(&self, assignment: &Assignment<V>) -> Option<VariableId> {
        assignment
            .iter()
            .filter(|(_, domain)| domain.len() > 1)
            .min_by_key(|(var, domain)| (domain.len(), *var))
            .map(|(var, _)| var)
    }
}
