use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crate::{
    error::{Result, SolverError},
    solver::{assignment::Assignment, relation::PairRelation, value::ValueEquality},
};

/// Variables are interned to dense ids in registration order. Registration
/// order is the deterministic tie-break order throughout the solver.
pub type VariableId = u32;

/// A directed arc `(i, j)`: the constraint of `i` with respect to `j`.
///
/// Note this is the CSP notion of an arc, nothing to do with `std::sync`.
pub type Arc = (VariableId, VariableId);

/// The set of jointly legal value pairs for one directed arc.
pub type PairTable<V> = HashSet<(V, V)>;

/// A fully specified CSP instance: variables, their initial domains, and
/// pairwise constraints stored as allowed-value-pair tables.
///
/// The store is pure data. It is populated up front by a problem builder
/// and treated as read-only once a search starts; the search driver only
/// ever mutates [`Assignment`]s derived from it.
///
/// Tables are directional: the table for `(i, j)` and the table for
/// `(j, i)` are filled independently. A logically symmetric constraint must
/// be added in both directions, once per orientation.
#[derive(Debug, Clone)]
pub struct ConstraintStore<V: ValueEquality> {
    names: Vec<String>,
    index: HashMap<String, VariableId>,
    domains: im::HashMap<VariableId, im::Vector<V>>,
    // BTreeMap keyed by arc so that arc enumeration is deterministic.
    tables: BTreeMap<Arc, PairTable<V>>,
    // incoming[j] = all k with a table for (k, j), for neighbour re-checks.
    incoming: HashMap<VariableId, BTreeSet<VariableId>>,
}

impl<V: ValueEquality> ConstraintStore<V> {
    pub fn new() -> Self {
        Self {
            names: Vec::new(),
            index: HashMap::new(),
            domains: im::HashMap::new(),
            tables: BTreeMap::new(),
            incoming: HashMap::new(),
        }
    }

    /// Registers a new variable with its initial domain and returns its id.
    ///
    /// Domain values keep the order they are supplied in; that order is the
    /// order in which the search driver tries candidate values. Registering
    /// the same name twice is a setup error.
    pub fn add_variable(
        &mut self,
        name: impl Into<String>,
        domain: impl IntoIterator<Item = V>,
    ) -> Result<VariableId> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(SolverError::DuplicateVariable(name).into());
        }
        let id = self.names.len() as VariableId;
        self.index.insert(name.clone(), id);
        self.names.push(name);
        self.domains.insert(id, domain.into_iter().collect());
        Ok(id)
    }

    /// Looks up a variable id by name.
    pub fn variable_id(&self, name: &str) -> Result<VariableId> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| SolverError::UnknownVariable(name.to_string()).into())
    }

    /// The name a variable was registered under.
    pub fn variable_name(&self, var: VariableId) -> &str {
        &self.names[var as usize]
    }

    pub fn num_variables(&self) -> usize {
        self.names.len()
    }

    /// Constrains the arc `(i, j)` to the value pairs allowed by `relation`.
    ///
    /// If no table exists yet for `(i, j)`, it is initialised as the full
    /// cross-product of the current domains of `i` and `j` before being
    /// filtered. Repeated calls only ever tighten the table further.
    ///
    /// This adds the constraint one way only, from `i` to `j`. Call it
    /// again with the arguments swapped (and an equivalent mirrored
    /// relation) to encode a logically symmetric constraint; the store does
    /// not infer symmetry.
    pub fn add_constraint_one_way(
        &mut self,
        i: &str,
        j: &str,
        relation: &PairRelation<V>,
    ) -> Result<()> {
        let i = self.variable_id(i)?;
        let j = self.variable_id(j)?;

        if !self.tables.contains_key(&(i, j)) {
            let mut pairs = PairTable::new();
            for vi in self.domains.get(&i).unwrap() {
                for vj in self.domains.get(&j).unwrap() {
                    pairs.insert((vi.clone(), vj.clone()));
                }
            }
            self.tables.insert((i, j), pairs);
            self.incoming.entry(j).or_default().insert(i);
        }

        let table = self.tables.get_mut(&(i, j)).unwrap();
        table.retain(|(a, b)| relation.allows(a, b));
        Ok(())
    }

    /// Adds a pairwise not-equal constraint between every ordered pair of
    /// distinct variables in `vars`, covering both directions.
    pub fn add_all_different_constraint(&mut self, vars: &[impl AsRef<str>]) -> Result<()> {
        for i in vars {
            for j in vars {
                if i.as_ref() != j.as_ref() {
                    self.add_constraint_one_way(i.as_ref(), j.as_ref(), &PairRelation::NotEqual)?;
                }
            }
        }
        Ok(())
    }

    /// Every arc for which a constraint table exists, in sorted order.
    pub fn get_all_arcs(&self) -> Vec<Arc> {
        self.tables.keys().copied().collect()
    }

    /// Every arc `(k, var)` whose table targets `var`.
    ///
    /// These are the reverse arcs that must be re-checked after `var`'s
    /// domain shrinks.
    pub fn get_all_neighboring_arcs(&self, var: VariableId) -> Vec<Arc> {
        match self.incoming.get(&var) {
            Some(sources) => sources.iter().map(|&k| (k, var)).collect(),
            None => Vec::new(),
        }
    }

    /// The pair table for `(i, j)`, if one has been created.
    pub fn table(&self, i: VariableId, j: VariableId) -> Option<&PairTable<V>> {
        self.tables.get(&(i, j))
    }

    /// A fresh partial assignment holding every variable's initial domain.
    ///
    /// The store's own domain map is never mutated by a search; each search
    /// works on copies derived from this one.
    pub fn initial_assignment(&self) -> Assignment<V> {
        Assignment::new(self.domains.clone())
    }

    /// Checks every arc whose two endpoints are both decided against its
    /// pair table.
    ///
    /// `revise` deliberately never empties a size-1 domain, so a pair of
    /// decided variables can sit in violation of their constraint without
    /// propagation ever noticing. The search driver calls this at every
    /// node to reject such states explicitly.
    pub fn is_consistent(&self, assignment: &Assignment<V>) -> bool {
        self.tables.iter().all(|((i, j), table)| {
            match (assignment.decided_value(*i), assignment.decided_value(*j)) {
                (Some(x), Some(y)) => table.contains(&(x.clone(), y.clone())),
                _ => true,
            }
        })
    }
}

impl<V: ValueEquality> Default for ConstraintStore<V> {
    fn default() -> Self {
        Self::new()
    }
}
