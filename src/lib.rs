//! Weave is a finite-domain binary constraint satisfaction problem (CSP)
//! solver.
//!
//! Problems are modelled as variables with finite domains, linked by
//! pairwise constraints stored as allowed-value-pair tables. The solver
//! combines AC-3 arc-consistency propagation with recursive backtracking
//! search and a minimum-remaining-values branching heuristic.
//!
//! # Core Concepts
//!
//! - **[`ConstraintStore`]**: the CSP instance — variables, domains, and
//!   per-arc pair tables, built up front and read-only during search.
//! - **[`PairRelation`]**: how a constraint is described — not-equal,
//!   equal, a predicate, or an explicit pair table.
//! - **[`BacktrackingSearch`]**: the search driver; it propagates with
//!   AC-3 at every node and returns the first complete, consistent
//!   assignment.
//!
//! # Example: A Simple 2-Variable Problem
//!
//! Solving `a != b` where `a` can be `1` or `2` and `b` can only be `1`.
//! Propagation alone deduces that `a` must be `2`.
//!
//! ```
//! use weave::solver::relation::PairRelation;
//! use weave::solver::search::BacktrackingSearch;
//! use weave::solver::store::ConstraintStore;
//!
//! let mut store = ConstraintStore::new();
//! let a = store.add_variable("a", [1, 2]).unwrap();
//! let b = store.add_variable("b", [1]).unwrap();
//! // Constraints are directional: encode symmetry with two calls.
//! store.add_constraint_one_way("a", "b", &PairRelation::NotEqual).unwrap();
//! store.add_constraint_one_way("b", "a", &PairRelation::NotEqual).unwrap();
//!
//! let (solution, stats) = BacktrackingSearch::default().solve(&store);
//! let solution = solution.unwrap();
//! assert_eq!(solution.decided_value(a), Some(&2));
//! assert_eq!(solution.decided_value(b), Some(&1));
//! assert!(stats.nodes_visited >= 1);
//! ```
//!
//! [`ConstraintStore`]: solver::store::ConstraintStore
//! [`PairRelation`]: solver::relation::PairRelation
//! [`BacktrackingSearch`]: solver::search::BacktrackingSearch

pub mod error;
pub mod problems;
pub mod solver;
