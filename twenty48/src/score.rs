/// The session's accumulated score and move counter.
///
/// Both share one lifecycle: they start at zero, reset together, and
/// only change as a side effect of board mutations. Each merge is worth
/// the merged tile's value multiplied by the move counter at the time,
/// so later moves weigh more than earlier ones.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Scoreboard {
    score: u64,
    step: u64,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated score.
    pub fn score(&self) -> u64 {
        self.score
    }

    /// The number of grid-changing moves made this game.
    pub fn step(&self) -> u64 {
        self.step
    }

    /// Credits a merge that produced a tile of `value`.
    pub fn record_merge(&mut self, value: u32) {
        self.score += u64::from(value) * self.step;
    }

    /// Counts a grid-changing move. Called once per accepted move,
    /// after the merge it belongs to.
    pub fn advance(&mut self) {
        self.step += 1;
    }

    /// Resets both counters for a new game.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_are_weighted_by_the_move_counter() {
        let mut scoreboard = Scoreboard::new();
        // The very first move happens at step 0 and scores nothing.
        scoreboard.record_merge(4);
        assert_eq!(scoreboard.score(), 0);

        scoreboard.advance();
        scoreboard.record_merge(4);
        scoreboard.advance();
        scoreboard.record_merge(8);
        assert_eq!(scoreboard.score(), 4 + 8 * 2);
        assert_eq!(scoreboard.step(), 2);
    }

    #[test]
    fn reset_zeroes_both_counters() {
        let mut scoreboard = Scoreboard::new();
        scoreboard.advance();
        scoreboard.record_merge(1024);
        scoreboard.reset();
        assert_eq!(scoreboard, Scoreboard::new());
    }
}
