use std::collections::HashSet;

use crate::solver::value::ValueEquality;

/// A comparison over a pair of values, used to filter a constraint table.
///
/// Constraint tables are built by filtering the cross-product of two
/// domains through one of these relations. The common cases are expressed
/// as plain variants so that callers can describe a constraint without
/// closures or boxed trait objects; `Predicate` covers anything else via a
/// function pointer, and `Table` accepts a precomputed set of legal pairs.
#[derive(Debug, Clone)]
pub enum PairRelation<V: ValueEquality> {
    /// The two values must differ. The building block of all-different.
    NotEqual,
    /// The two values must be identical.
    Equal,
    /// An arbitrary predicate over the ordered value pair.
    Predicate(fn(&V, &V) -> bool),
    /// An explicit set of legal ordered pairs.
    Table(HashSet<(V, V)>),
}

impl<V: ValueEquality> PairRelation<V> {
    /// Whether the ordered pair `(a, b)` is jointly legal under this relation.
    pub fn allows(&self, a: &V, b: &V) -> bool {
        match self {
            PairRelation::NotEqual => a != b,
            PairRelation::Equal => a == b,
            PairRelation::Predicate(f) => f(a, b),
            PairRelation::Table(pairs) => pairs.contains(&(a.clone(), b.clone())),
        }
    }
}
