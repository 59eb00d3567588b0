//! Sudoku problem builder and solution formatting.
//!
//! A board is nine lines of nine characters, digits `1`-`9` for given
//! cells and `0` for a blank (any of the nine digits). Each cell becomes a
//! variable named `row-col`, and every row, column, and 3x3 box carries an
//! all-different constraint.

use crate::{
    error::{Result, SolverError},
    solver::{assignment::Assignment, store::ConstraintStore},
};

/// The variable name for the cell at `(row, col)`, zero-based.
pub fn cell_name(row: usize, col: usize) -> String {
    format!("{row}-{col}")
}

/// Parses a board text into a CSP instance.
pub fn board_from_str(text: &str) -> Result<ConstraintStore<u8>> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.len() != 9 {
        return Err(
            SolverError::InvalidBoard(format!("expected 9 rows, found {}", lines.len())).into(),
        );
    }

    let mut store = ConstraintStore::new();
    for (row, line) in lines.iter().enumerate() {
        if line.chars().count() != 9 {
            return Err(SolverError::InvalidBoard(format!(
                "row {row} has {} cells, expected 9",
                line.chars().count()
            ))
            .into());
        }
        for (col, ch) in line.chars().enumerate() {
            let digit = ch.to_digit(10).ok_or_else(|| {
                SolverError::InvalidBoard(format!("bad cell `{ch}` at {row}-{col}"))
            })? as u8;
            let domain: Vec<u8> = if digit == 0 {
                (1..=9).collect()
            } else {
                vec![digit]
            };
            store.add_variable(cell_name(row, col), domain)?;
        }
    }

    for row in 0..9 {
        let names: Vec<String> = (0..9).map(|col| cell_name(row, col)).collect();
        store.add_all_different_constraint(&names)?;
    }
    for col in 0..9 {
        let names: Vec<String> = (0..9).map(|row| cell_name(row, col)).collect();
        store.add_all_different_constraint(&names)?;
    }
    for box_row in 0..3 {
        for box_col in 0..3 {
            let mut names = Vec::new();
            for row in (box_row * 3)..(box_row * 3 + 3) {
                for col in (box_col * 3)..(box_col * 3 + 3) {
                    names.push(cell_name(row, col));
                }
            }
            store.add_all_different_constraint(&names)?;
        }
    }

    Ok(store)
}

/// Extracts the solved grid from a complete assignment.
///
/// Returns `None` if any cell is still undecided.
pub fn solution_grid(
    store: &ConstraintStore<u8>,
    assignment: &Assignment<u8>,
) -> Option<[[u8; 9]; 9]> {
    let mut grid = [[0u8; 9]; 9];
    for (row, grid_row) in grid.iter_mut().enumerate() {
        for (col, cell) in grid_row.iter_mut().enumerate() {
            let var = store.variable_id(&cell_name(row, col)).ok()?;
            *cell = *assignment.decided_value(var)?;
        }
    }
    Some(grid)
}

/// Renders a grid in the traditional boxed layout:
///
/// ```text
/// 5 3 4 | 6 7 8 | 9 1 2
/// ...
/// ------+-------+------
/// ```
pub fn format_grid(grid: &[[u8; 9]; 9]) -> String {
    let mut out = String::new();
    for (row, cells) in grid.iter().enumerate() {
        let mut rendered = Vec::new();
        for (col, value) in cells.iter().enumerate() {
            rendered.push(value.to_string());
            if col == 2 || col == 5 {
                rendered.push("|".to_string());
            }
        }
        out.push_str(&rendered.join(" "));
        out.push('\n');
        if row == 2 || row == 5 {
            out.push_str("------+-------+------\n");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::search::BacktrackingSearch;

    const EASY: &str = "\
530070000
600195000
098000060
800060003
400803001
700020006
060000280
000419005
000080079";

    const EASY_SOLVED: [[u8; 9]; 9] = [
        [5, 3, 4, 6, 7, 8, 9, 1, 2],
        [6, 7, 2, 1, 9, 5, 3, 4, 8],
        [1, 9, 8, 3, 4, 2, 5, 6, 7],
        [8, 5, 9, 7, 6, 1, 4, 2, 3],
        [4, 2, 6, 8, 5, 3, 7, 9, 1],
        [7, 1, 3, 9, 2, 4, 8, 5, 6],
        [9, 6, 1, 5, 3, 7, 2, 8, 4],
        [2, 8, 7, 4, 1, 9, 6, 3, 5],
        [3, 4, 5, 2, 8, 6, 1, 7, 9],
    ];

    fn assert_valid_grid(grid: &[[u8; 9]; 9]) {
        let full: std::collections::HashSet<u8> = (1..=9).collect();
        for row in 0..9 {
            let values: std::collections::HashSet<u8> = (0..9).map(|col| grid[row][col]).collect();
            assert_eq!(values, full, "row {row} is not a permutation of 1-9");
        }
        for col in 0..9 {
            let values: std::collections::HashSet<u8> = (0..9).map(|row| grid[row][col]).collect();
            assert_eq!(values, full, "column {col} is not a permutation of 1-9");
        }
        for box_row in 0..3 {
            for box_col in 0..3 {
                let mut values = std::collections::HashSet::new();
                for r in 0..3 {
                    for c in 0..3 {
                        values.insert(grid[box_row * 3 + r][box_col * 3 + c]);
                    }
                }
                assert_eq!(values, full, "box {box_row}/{box_col} is not a permutation");
            }
        }
    }

    #[test]
    fn parses_givens_and_blanks() {
        let store = board_from_str(EASY).unwrap();
        assert_eq!(store.num_variables(), 81);

        let given = store.variable_id(&cell_name(0, 0)).unwrap();
        let blank = store.variable_id(&cell_name(0, 2)).unwrap();
        let assignment = store.initial_assignment();
        assert_eq!(assignment.domain(given).len(), 1);
        assert_eq!(assignment.domain(blank).len(), 9);
    }

    #[test]
    fn rejects_malformed_boards() {
        assert!(board_from_str("123").is_err());
        let bad_cell = EASY.replace('7', "x");
        assert!(board_from_str(&bad_cell).is_err());
        let short_row = EASY.replacen("530070000", "53007000", 1);
        assert!(board_from_str(&short_row).is_err());
    }

    #[test]
    fn solves_the_classic_board_and_preserves_givens() {
        let store = board_from_str(EASY).unwrap();
        let (solution, stats) = BacktrackingSearch::default().solve(&store);
        let solution = solution.unwrap();
        let grid = solution_grid(&store, &solution).unwrap();

        assert_valid_grid(&grid);
        assert_eq!(grid, EASY_SOLVED);
        for (row, line) in EASY.lines().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let given = ch.to_digit(10).unwrap() as u8;
                if given != 0 {
                    assert_eq!(grid[row][col], given, "given at {row}-{col} changed");
                }
            }
        }
        assert!(stats.nodes_visited >= 1);
    }

    #[test]
    fn conflicting_givens_are_unsolvable() {
        // Two 5s in the first row.
        let conflicted = EASY.replacen("530070000", "530070005", 1);
        let store = board_from_str(&conflicted).unwrap();
        let (solution, stats) = BacktrackingSearch::default().solve(&store);
        assert!(solution.is_none());
        assert!(stats.failed_nodes >= 1);
    }

    #[test]
    fn formats_the_boxed_layout() {
        let rendered = format_grid(&EASY_SOLVED);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "5 3 4 | 6 7 8 | 9 1 2");
        assert_eq!(lines[3], "------+-------+------");
        assert_eq!(lines[7], "------+-------+------");
    }

    mod prop_tests {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(12))]

            #[test]
            fn hole_punched_boards_solve_to_valid_grids(
                holes in proptest::collection::hash_set((0..9usize, 0..9usize), 20..=45)
            ) {
                let mut board = String::new();
                for row in 0..9 {
                    for col in 0..9 {
                        let digit = if holes.contains(&(row, col)) {
                            0
                        } else {
                            EASY_SOLVED[row][col]
                        };
                        board.push(char::from(b'0' + digit));
                    }
                    board.push('\n');
                }

                let store = board_from_str(&board).unwrap();
                let (solution, _stats) = BacktrackingSearch::default().solve(&store);
                let solution = solution.unwrap();
                let grid = solution_grid(&store, &solution).unwrap();

                assert_valid_grid(&grid);
                for row in 0..9 {
                    for col in 0..9 {
                        if !holes.contains(&(row, col)) {
                            prop_assert_eq!(grid[row][col], EASY_SOLVED[row][col]);
                        }
                    }
                }
            }
        }
    }
}
