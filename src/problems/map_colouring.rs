//! Map-colouring problem builder.
//!
//! Builds the textbook Australia map-colouring CSP: one variable per
//! region, three colours, and a symmetric not-equal constraint per border.

use crate::{
    error::Result,
    solver::{relation::PairRelation, store::ConstraintStore},
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Colour {
    Red,
    Green,
    Blue,
}

/// The mainland states and territories, in the registration order used by
/// the solver's tie-breaking.
pub const REGIONS: [&str; 7] = ["WA", "NT", "Q", "NSW", "V", "SA", "T"];

/// Bordering region pairs. Tasmania borders nothing.
pub const BORDERS: [(&str, &str); 9] = [
    ("SA", "WA"),
    ("SA", "NT"),
    ("SA", "Q"),
    ("SA", "NSW"),
    ("SA", "V"),
    ("NT", "WA"),
    ("NT", "Q"),
    ("NSW", "Q"),
    ("NSW", "V"),
];

/// Builds the Australia map-colouring instance.
pub fn australia() -> Result<ConstraintStore<Colour>> {
    let mut store = ConstraintStore::new();
    for region in REGIONS {
        store.add_variable(region, [Colour::Red, Colour::Green, Colour::Blue])?;
    }
    for (i, j) in BORDERS {
        store.add_constraint_one_way(i, j, &PairRelation::NotEqual)?;
        store.add_constraint_one_way(j, i, &PairRelation::NotEqual)?;
    }
    Ok(store)
}
