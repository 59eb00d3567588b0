pub mod assignment;
pub mod heuristics;
pub mod propagation;
pub mod relation;
pub mod search;
pub mod stats;
pub mod store;
pub mod value;
pub mod work_list;
