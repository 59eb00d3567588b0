use prettytable::{Cell, Row, Table};
use serde::Serialize;

/// Diagnostic counters for one `solve` call.
///
/// Stats are threaded through the recursion as an explicit context value
/// scoped to a single search; there is no process-wide state. They are for
/// observability only and carry no correctness weight.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchStats {
    /// Search-tree nodes entered, the root included.
    pub nodes_visited: u64,
    /// Nodes abandoned: every candidate failed, or the node itself was
    /// rejected as inconsistent.
    pub failed_nodes: u64,
    /// Individual revise passes performed by propagation.
    pub revise_calls: u64,
    /// Total values removed from domains by propagation.
    pub prunings: u64,
}

/// Renders the counters as a small text table for terminal output.
pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Nodes visited"),
        Cell::new("Failed nodes"),
        Cell::new("Revise calls"),
        Cell::new("Values pruned"),
    ]));
    table.add_row(Row::new(vec![
        Cell::new(&stats.nodes_visited.to_string()),
        Cell::new(&stats.failed_nodes.to_string()),
        Cell::new(&stats.revise_calls.to_string()),
        Cell::new(&stats.prunings.to_string()),
    ]));
    table.to_string()
}
