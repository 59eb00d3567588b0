use crate::solver::{store::VariableId, value::ValueEquality};

/// The ordered sequence of values still legal for one variable.
///
/// Domains only ever shrink. A domain of exactly one value means the
/// variable is decided; an empty domain is the explicit failure signal and
/// must never be observed outside of propagation reporting it.
pub type Domain<V> = im::Vector<V>;

/// A partial assignment: every variable mapped to its current candidate
/// domain.
///
/// Because the map and the domains are persistent data structures, cloning
/// an `Assignment` is cheap and gives the new owner a fully independent
/// view. The search driver clones at every branch point; no branch can
/// observe mutations made by a sibling or ancestor after the copy.
#[derive(Debug, Clone)]
pub struct Assignment<V: ValueEquality> {
    domains: im::HashMap<VariableId, Domain<V>>,
}

impl<V: ValueEquality> Assignment<V> {
    pub fn new(domains: im::HashMap<VariableId, Domain<V>>) -> Self {
        Self { domains }
    }

    /// The current domain of `var`. Panics on an unregistered id; ids are
    /// only ever minted by the store this assignment was derived from.
    pub fn domain(&self, var: VariableId) -> &Domain<V> {
        self.domains.get(&var).unwrap()
    }

    pub fn num_variables(&self) -> usize {
        self.domains.len()
    }

    /// Iterates over `(variable, domain)` entries. Iteration order is not
    /// meaningful; callers needing determinism must order by variable id.
    pub fn iter(&self) -> impl Iterator<Item = (VariableId, &Domain<V>)> + '_ {
        self.domains.iter().map(|(var, domain)| (*var, domain))
    }

    /// True when every variable's domain has exactly one value.
    pub fn is_complete(&self) -> bool {
        self.domains.values().all(|domain| domain.len() == 1)
    }

    /// The value of `var` if it is decided, i.e. its domain is a singleton.
    pub fn decided_value(&self, var: VariableId) -> Option<&V> {
        let domain = self.domain(var);
        if domain.len() == 1 {
            domain.front()
        } else {
            None
        }
    }

    /// Collapses `var`'s domain to the single candidate `value`.
    pub fn decide(&mut self, var: VariableId, value: V) {
        self.domains.insert(var, Domain::unit(value));
    }

    /// Removes one value from `var`'s domain, if present.
    pub fn remove_value(&mut self, var: VariableId, value: &V) {
        let domain = self.domains.get_mut(&var).unwrap();
        if let Some(pos) = domain.iter().position(|v| v == value) {
            domain.remove(pos);
        }
    }
}
