use std::fmt::Write;

use crate::{Board, BOARD_SIZE};

/// Renders a board as a text box, for logs and test output.
///
/// Empty cells are left blank; tile values are right-aligned.
pub fn visualize_grid(board: &Board) -> String {
    let mut result = String::from("╭────┬────┬────┬────╮\n");
    for row in 0..BOARD_SIZE {
        if row > 0 {
            result += "├────┼────┼────┼────┤\n";
        }
        for col in 0..BOARD_SIZE {
            let cell = board.get(row, col);
            if cell == 0 {
                result += "│    ";
            } else {
                let _ = write!(result, "│{:>4}", cell);
            }
        }
        result += "│\n";
    }
    result += "╰────┴────┴────┴────╯";
    result
}
