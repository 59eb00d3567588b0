//! AC-3 arc-consistency propagation.
//!
//! Given a partial assignment and a queue of directed arcs, [`inference`]
//! repeatedly tightens domains until every queued arc is consistent or a
//! domain empties. It establishes binary arc consistency and nothing more:
//! reaching a fixed point does not prove the assignment extendable, so the
//! search driver still has to branch.

use tracing::debug;

use crate::solver::{
    assignment::Assignment,
    stats::SearchStats,
    store::{Arc, ConstraintStore, VariableId},
    value::ValueEquality,
    work_list::WorkList,
};

/// Runs AC-3 over `queue`, narrowing `assignment` in place.
///
/// Pops an arc `(i, j)`, revises `i` against `j`, and on any revision
/// re-enqueues every reverse arc `(k, i)` with `k != j` so that `i`'s
/// neighbours are re-checked against its shrunken domain. Returns `false`
/// the moment a domain empties; returns `true` once the queue is exhausted
/// with every domain still populated.
pub fn inference<V: ValueEquality>(
    store: &ConstraintStore<V>,
    assignment: &mut Assignment<V>,
    queue: impl IntoIterator<Item = Arc>,
    stats: &mut SearchStats,
) -> bool {
    let mut worklist = WorkList::new();
    for arc in queue {
        worklist.push_back(arc);
    }

    while let Some((i, j)) = worklist.pop_front() {
        stats.revise_calls += 1;
        let size_before = assignment.domain(i).len();
        if revise(store, assignment, i, j) {
            let size_after = assignment.domain(i).len();
            stats.prunings += (size_before - size_after) as u64;

            if assignment.domain(i).is_empty() {
                debug!(var = i, "domain wiped out, abandoning propagation");
                return false;
            }
            for (k, _) in store.get_all_neighboring_arcs(i) {
                if k != j {
                    worklist.push_back((k, i));
                }
            }
        }
    }
    debug!("propagation reached a fixed point");
    true
}

/// Revises the domain of `i` with respect to `j`.
///
/// A value `x` of `i` is unsupported when no `y` in `j`'s current domain
/// forms a legal pair `(x, y)` under the `(i, j)` table. Unsupported values
/// are removed, with one deliberate exception: the last remaining value of
/// a domain is never removed, so a decided variable is left untouched
/// rather than forced into an impossible state. Returns `true` iff at
/// least one value was removed.
pub fn revise<V: ValueEquality>(
    store: &ConstraintStore<V>,
    assignment: &mut Assignment<V>,
    i: VariableId,
    j: VariableId,
) -> bool {
    let Some(table) = store.table(i, j) else {
        return false;
    };

    let candidates: Vec<V> = assignment.domain(i).iter().cloned().collect();
    let mut revised = false;
    for x in candidates {
        let supported = assignment
            .domain(j)
            .iter()
            .any(|y| table.contains(&(x.clone(), y.clone())));
        if !supported && assignment.domain(i).len() > 1 {
            assignment.remove_value(i, &x);
            revised = true;
        }
    }
    revised
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::relation::PairRelation;

    fn domain_of(assignment: &Assignment<i64>, var: VariableId) -> Vec<i64> {
        assignment.domain(var).iter().copied().collect()
    }

    /// x -- y -- z chain of symmetric not-equal constraints.
    fn chain_store() -> ConstraintStore<i64> {
        let mut store = ConstraintStore::new();
        store.add_variable("x", [1, 2]).unwrap();
        store.add_variable("y", [1, 2]).unwrap();
        store.add_variable("z", [1]).unwrap();
        for (a, b) in [("x", "y"), ("y", "x"), ("y", "z"), ("z", "y")] {
            store
                .add_constraint_one_way(a, b, &PairRelation::NotEqual)
                .unwrap();
        }
        store
    }

    #[test]
    fn revise_removes_unsupported_values() {
        let store = chain_store();
        let mut assignment = store.initial_assignment();
        let y = store.variable_id("y").unwrap();
        let z = store.variable_id("z").unwrap();

        assert!(revise(&store, &mut assignment, y, z));
        assert_eq!(domain_of(&assignment, y), vec![2]);
        // A second pass has nothing left to do.
        assert!(!revise(&store, &mut assignment, y, z));
    }

    #[test]
    fn revise_never_empties_a_decided_domain() {
        let mut store = ConstraintStore::new();
        store.add_variable("a", [1]).unwrap();
        store.add_variable("b", [1]).unwrap();
        store
            .add_constraint_one_way("a", "b", &PairRelation::NotEqual)
            .unwrap();

        let mut assignment = store.initial_assignment();
        // `a`'s single value has no support, but it is not removed and no
        // revision is reported.
        assert!(!revise(&store, &mut assignment, 0, 1));
        assert_eq!(domain_of(&assignment, 0), vec![1]);
    }

    #[test]
    fn revise_leaves_the_last_unsupported_value_in_place() {
        let mut store = ConstraintStore::new();
        store.add_variable("a", [1, 2]).unwrap();
        store.add_variable("b", [3]).unwrap();
        store
            .add_constraint_one_way("a", "b", &PairRelation::Equal)
            .unwrap();

        let mut assignment = store.initial_assignment();
        // Neither 1 nor 2 pairs with 3, but the domain bottoms out at one
        // value instead of emptying.
        assert!(revise(&store, &mut assignment, 0, 1));
        assert_eq!(domain_of(&assignment, 0), vec![2]);
    }

    #[test]
    fn inference_propagates_through_a_chain() {
        let store = chain_store();
        let mut assignment = store.initial_assignment();
        let mut stats = SearchStats::default();

        let sizes_before: Vec<usize> = (0..3).map(|v| assignment.domain(v).len()).collect();
        assert!(inference(
            &store,
            &mut assignment,
            store.get_all_arcs(),
            &mut stats
        ));

        // z = 1 forces y = 2 forces x = 1.
        assert_eq!(domain_of(&assignment, 0), vec![1]);
        assert_eq!(domain_of(&assignment, 1), vec![2]);
        assert_eq!(domain_of(&assignment, 2), vec![1]);

        // Domains only ever shrink.
        for (var, &before) in sizes_before.iter().enumerate() {
            assert!(assignment.domain(var as VariableId).len() <= before);
        }
        assert_eq!(stats.prunings, 2);
        assert!(stats.revise_calls >= 4);
    }

    #[test]
    fn inference_is_idempotent_at_the_fixed_point() {
        let store = chain_store();
        let mut assignment = store.initial_assignment();
        let mut stats = SearchStats::default();
        assert!(inference(
            &store,
            &mut assignment,
            store.get_all_arcs(),
            &mut stats
        ));

        let snapshot: Vec<Vec<i64>> = (0..3).map(|v| domain_of(&assignment, v)).collect();
        assert!(inference(
            &store,
            &mut assignment,
            store.get_all_arcs(),
            &mut stats
        ));
        let after: Vec<Vec<i64>> = (0..3).map(|v| domain_of(&assignment, v)).collect();
        assert_eq!(snapshot, after);
    }

    #[test]
    fn inference_alone_cannot_reject_a_decided_conflict() {
        // Two decided variables violating their constraint: propagation has
        // nothing to remove and reports a fixed point; the search driver is
        // responsible for rejecting the state via the decided-pair check.
        let mut store = ConstraintStore::new();
        store.add_variable("a", [1]).unwrap();
        store.add_variable("b", [1]).unwrap();
        for (i, j) in [("a", "b"), ("b", "a")] {
            store
                .add_constraint_one_way(i, j, &PairRelation::NotEqual)
                .unwrap();
        }

        let mut assignment = store.initial_assignment();
        let mut stats = SearchStats::default();
        assert!(inference(
            &store,
            &mut assignment,
            store.get_all_arcs(),
            &mut stats
        ));
        assert!(!store.is_consistent(&assignment));
    }
}
