use crate::Scoreboard;

pub const BOARD_SIZE: usize = 4;

/// The value that ends the game in a win when any tile reaches it.
pub const WIN_VALUE: u32 = 2048;

/// The 4x4 playing grid.
///
/// A cell value of `0` means the cell is empty; every non-zero cell
/// holds a power of two between 2 and [`WIN_VALUE`]. The grid is the
/// single mutable piece of game state, owned by the session for the
/// duration of one game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Board {
    cells: [[u32; BOARD_SIZE]; BOARD_SIZE],
}

/// One of the four directions a move can collapse the grid towards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from explicit cell values, row-major.
    pub fn from_cells(cells: [[u32; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// The value at `(row, col)`, `0` for an empty cell.
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row][col]
    }

    /// Empties every cell.
    pub fn clear(&mut self) {
        self.cells = [[0; BOARD_SIZE]; BOARD_SIZE];
    }

    /// True if no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&v| v != 0)
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [[u32; BOARD_SIZE]; BOARD_SIZE] {
        &mut self.cells
    }

    /// Mirrors the grid across its horizontal midline: row `i` becomes
    /// row `N-1-i`.
    pub fn mirror_vertical(&mut self) {
        let mut out = [[0; BOARD_SIZE]; BOARD_SIZE];
        for (i, row) in self.cells.iter().enumerate() {
            for (j, &cell) in row.iter().enumerate() {
                out[BOARD_SIZE - 1 - i][j] = cell;
            }
        }
        self.cells = out;
    }

    /// Rotates the grid a quarter turn clockwise: `(i, j)` moves to
    /// `(j, N-1-i)`.
    pub fn rotate_right(&mut self) {
        let mut out = [[0; BOARD_SIZE]; BOARD_SIZE];
        for (i, row) in self.cells.iter().enumerate() {
            for (j, &cell) in row.iter().enumerate() {
                out[j][BOARD_SIZE - 1 - i] = cell;
            }
        }
        self.cells = out;
    }

    /// Rotates the grid a quarter turn counterclockwise: `(i, j)` moves
    /// to `(N-1-j, i)`.
    pub fn rotate_left(&mut self) {
        let mut out = [[0; BOARD_SIZE]; BOARD_SIZE];
        for (i, row) in self.cells.iter().enumerate() {
            for (j, &cell) in row.iter().enumerate() {
                out[BOARD_SIZE - 1 - j][i] = cell;
            }
        }
        self.cells = out;
    }

    /// Rotates the grid half a turn: `(i, j)` moves to `(N-1-i, N-1-j)`.
    pub fn rotate_180(&mut self) {
        let mut out = [[0; BOARD_SIZE]; BOARD_SIZE];
        for (i, row) in self.cells.iter().enumerate() {
            for (j, &cell) in row.iter().enumerate() {
                out[BOARD_SIZE - 1 - i][BOARD_SIZE - 1 - j] = cell;
            }
        }
        self.cells = out;
    }

    /// The canonical collapse: slides and merges every column upwards.
    ///
    /// Each column is processed independently in three passes: compact
    /// the non-zero values to the top, merge adjacent equal pairs (the
    /// upper cell doubles, the lower empties, and the merged cell is
    /// skipped so it cannot merge twice in one move), then compact
    /// again. Every merge credits `value * step` to the scoreboard.
    ///
    /// Returns `true` if any cell moved or merged. A grid with no empty
    /// cell on entry also returns `true` even when nothing moved; the
    /// session counts on that to accept the key press on a full board,
    /// so callers must not treat the return value as "the grid is now
    /// different".
    pub fn merge_up(&mut self, scoreboard: &mut Scoreboard) -> bool {
        let mut changed = false;
        let mut full = true;
        for col in 0..BOARD_SIZE {
            // Slide non-zero values to the top, preserving order.
            let mut len = 0;
            for row in 0..BOARD_SIZE {
                let v = self.cells[row][col];
                if v != 0 {
                    self.cells[len][col] = v;
                    if len != row {
                        changed = true;
                    }
                    len += 1;
                }
            }
            if len < BOARD_SIZE {
                full = false;
            }

            // Merge adjacent equal pairs in the compacted run. A cell
            // that just merged is skipped on the next comparison.
            let mut x = 0;
            while x + 1 < len {
                if self.cells[x][col] == self.cells[x + 1][col] {
                    self.cells[x][col] *= 2;
                    self.cells[x + 1][col] = 0;
                    scoreboard.record_merge(self.cells[x][col]);
                    changed = true;
                    x += 1;
                }
                x += 1;
            }

            // Close the gaps left by merging and zero the tail.
            let mut idx = 0;
            for row in 0..len {
                let v = self.cells[row][col];
                if v != 0 {
                    self.cells[idx][col] = v;
                    idx += 1;
                }
            }
            for row in idx..BOARD_SIZE {
                self.cells[row][col] = 0;
            }
        }
        changed || full
    }

    /// Collapses every column downwards, as a half-turn of [`Self::merge_up`].
    pub fn merge_down(&mut self, scoreboard: &mut Scoreboard) -> bool {
        self.rotate_180();
        let changed = self.merge_up(scoreboard);
        self.rotate_180();
        changed
    }

    /// Collapses every row to the left, as a quarter-turn of [`Self::merge_up`].
    pub fn merge_left(&mut self, scoreboard: &mut Scoreboard) -> bool {
        self.rotate_right();
        let changed = self.merge_up(scoreboard);
        self.rotate_left();
        changed
    }

    /// Collapses every row to the right, as a quarter-turn of [`Self::merge_up`].
    pub fn merge_right(&mut self, scoreboard: &mut Scoreboard) -> bool {
        self.rotate_left();
        let changed = self.merge_up(scoreboard);
        self.rotate_right();
        changed
    }

    /// Collapses the grid towards `direction`.
    pub fn merge(&mut self, direction: Direction, scoreboard: &mut Scoreboard) -> bool {
        match direction {
            Direction::Up => self.merge_up(scoreboard),
            Direction::Down => self.merge_down(scoreboard),
            Direction::Left => self.merge_left(scoreboard),
            Direction::Right => self.merge_right(scoreboard),
        }
    }
}
