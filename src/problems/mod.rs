pub mod map_colouring;
pub mod sudoku;
