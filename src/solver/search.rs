use tracing::debug;

use crate::solver::{
    assignment::Assignment,
    heuristics::{MinimumRemainingValuesHeuristic, VariableSelectionHeuristic},
    propagation::inference,
    stats::SearchStats,
    store::ConstraintStore,
    value::ValueEquality,
};

/// Depth-first backtracking search with propagation at every node.
///
/// The driver borrows a read-only [`ConstraintStore`] for the duration of a
/// search and works exclusively on [`Assignment`]s cloned per branch. Each
/// tentative value choice runs a full AC-3 pass before recursing; the first
/// complete, consistent assignment found is returned as-is.
pub struct BacktrackingSearch<V: ValueEquality> {
    variable_heuristic: Box<dyn VariableSelectionHeuristic<V>>,
}

impl<V: ValueEquality> BacktrackingSearch<V> {
    pub fn new(variable_heuristic: Box<dyn VariableSelectionHeuristic<V>>) -> Self {
        Self { variable_heuristic }
    }

    /// Attempts to solve the CSP held by `store`.
    ///
    /// Copies the store's domain map into a fresh partial assignment, runs
    /// one propagation pass over the full arc set to weed out values that
    /// are not arc-consistent to begin with, then starts the recursive
    /// search.
    ///
    /// Returns the solved assignment, or `None` when the search tree is
    /// exhausted without a solution, together with the diagnostic counters
    /// for this call. No partial assignment is ever returned as a solution.
    pub fn solve(&self, store: &ConstraintStore<V>) -> (Option<Assignment<V>>, SearchStats) {
        let mut stats = SearchStats::default();
        let mut assignment = store.initial_assignment();

        if !inference(store, &mut assignment, store.get_all_arcs(), &mut stats) {
            return (None, stats);
        }
        let solution = self.backtrack(store, assignment, &mut stats);
        (solution, stats)
    }

    fn backtrack(
        &self,
        store: &ConstraintStore<V>,
        assignment: Assignment<V>,
        stats: &mut SearchStats,
    ) -> Option<Assignment<V>> {
        stats.nodes_visited += 1;

        // Propagation leaves a decided variable in place even when it has
        // no support, so decided pairs have to be validated explicitly.
        if !store.is_consistent(&assignment) {
            debug!("rejecting node with a decided-pair conflict");
            stats.failed_nodes += 1;
            return None;
        }
        if assignment.is_complete() {
            return Some(assignment);
        }

        let Some(var) = self.variable_heuristic.select_variable(&assignment) else {
            // Unreachable when `is_complete` is false, but harmless.
            return Some(assignment);
        };
        debug!(var, domain_size = assignment.domain(var).len(), "branching");

        for value in assignment.domain(var).clone() {
            // Each candidate explores an independent copy; failed branches
            // leave no trace on the parent.
            let mut branch = assignment.clone();
            branch.decide(var, value);

            if inference(store, &mut branch, store.get_all_arcs(), stats) {
                if let Some(solution) = self.backtrack(store, branch, stats) {
                    return Some(solution);
                }
            }
        }

        stats.failed_nodes += 1;
        None
    }
}

impl<V: ValueEquality> Default for BacktrackingSearch<V> {
    fn default() -> Self {
        Self::new(Box::new(MinimumRemainingValuesHeuristic))
    }
}
