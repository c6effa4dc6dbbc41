use rand::Rng;

use crate::{Board, BOARD_SIZE, WIN_VALUE};

/// The outcome of the per-turn check that runs before input is read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// Some tile reached [`WIN_VALUE`].
    Win,
    /// The grid is full and there is nowhere left to spawn.
    Lose,
    /// A new tile was placed and the game continues.
    Spawned,
}

impl Board {
    /// Checks for a finished game and otherwise spawns one tile.
    ///
    /// If any cell already holds [`WIN_VALUE`] or more, returns
    /// [`Status::Win`] without touching the grid. Otherwise scans
    /// row-major with wraparound from a random starting cell for an
    /// empty cell and sets it to 2 or 4 with equal probability. When
    /// the grid has no empty cell at all, returns [`Status::Lose`].
    ///
    /// Mutates at most one cell, and only when returning
    /// [`Status::Spawned`].
    pub fn check_win_or_spawn<R: Rng>(&mut self, rng: &mut R) -> Status {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if self.get(row, col) >= WIN_VALUE {
                    return Status::Win;
                }
            }
        }

        let mut i = rng.gen_range(0..BOARD_SIZE);
        let mut j = rng.gen_range(0..BOARD_SIZE);
        for _ in 0..BOARD_SIZE {
            for _ in 0..BOARD_SIZE {
                if self.get(i % BOARD_SIZE, j % BOARD_SIZE) == 0 {
                    let value = if rng.gen::<bool>() { 2 } else { 4 };
                    self.cells_mut()[i % BOARD_SIZE][j % BOARD_SIZE] = value;
                    return Status::Spawned;
                }
                j += 1;
            }
            i += 1;
        }

        Status::Lose
    }
}
