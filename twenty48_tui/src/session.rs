use std::io::Stdout;
use std::sync::mpsc::Receiver;

use rand::rngs::StdRng;
use ratatui::prelude::CrosstermBackend;
use ratatui::Terminal;
use tracing::debug;
use twenty48::{Board, Direction, Scoreboard, Status};

use crate::input::InputEvent;
use crate::ui;

/// A key press mapped to its meaning for the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Restart,
    Exit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Won,
    Lost,
    Restarting,
    Exited,
}

/// What applying a command did to the session.
#[derive(Debug, PartialEq, Eq)]
pub enum Reaction {
    /// The command had no effect; keep waiting for input.
    Ignored,
    /// The grid changed; spawn and redraw before the next command.
    Moved,
    Restart,
    Exit,
}

/// One game's worth of state: the grid, the counters and the phase.
pub struct Session {
    pub board: Board,
    pub scoreboard: Scoreboard,
    pub phase: Phase,
}

impl Session {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            scoreboard: Scoreboard::new(),
            phase: Phase::Playing,
        }
    }

    /// Runs the spawn-or-terminal check and folds the result into the
    /// phase.
    pub fn begin_turn(&mut self, rng: &mut StdRng) -> Status {
        let status = self.board.check_win_or_spawn(rng);
        self.phase = match status {
            Status::Win => Phase::Won,
            Status::Lose => Phase::Lost,
            Status::Spawned => Phase::Playing,
        };
        status
    }

    /// Applies a command to the session. Performs no I/O, so the state
    /// machine can be driven directly from tests.
    pub fn apply(&mut self, command: Command) -> Reaction {
        match command {
            Command::Exit => {
                self.phase = Phase::Exited;
                Reaction::Exit
            }
            Command::Restart => {
                self.phase = Phase::Restarting;
                Reaction::Restart
            }
            Command::Move(direction) => {
                // Once the game is decided, only Enter and Esc count.
                if self.phase != Phase::Playing {
                    return Reaction::Ignored;
                }
                if self.board.merge(direction, &mut self.scoreboard) {
                    self.scoreboard.advance();
                    Reaction::Moved
                } else {
                    Reaction::Ignored
                }
            }
        }
    }

    /// Starts a fresh game: empty grid, zeroed counters.
    pub fn reset(&mut self) {
        self.board.clear();
        self.scoreboard.reset();
        self.phase = Phase::Playing;
    }
}

/// The per-turn cycle: check terminal conditions and spawn, draw, then
/// consume events until one advances the game.
///
/// The receiving end of the input channel is the only place this loop
/// blocks. Rendering happens on this thread alone.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    events: &Receiver<InputEvent>,
    rng: &mut StdRng,
) -> anyhow::Result<()> {
    let mut session = Session::new();
    loop {
        let status = session.begin_turn(rng);
        ui::draw(terminal, &session)?;
        debug!(
            ?status,
            score = session.scoreboard.score(),
            step = session.scoreboard.step()
        );

        loop {
            match events.recv()? {
                InputEvent::Resize => ui::draw(terminal, &session)?,
                InputEvent::Fatal(err) => return Err(err.into()),
                InputEvent::Command(command) => match session.apply(command) {
                    Reaction::Ignored => {}
                    Reaction::Moved => break,
                    Reaction::Restart => {
                        session.reset();
                        break;
                    }
                    Reaction::Exit => return Ok(()),
                },
            }
        }
    }
}
