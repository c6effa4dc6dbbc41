use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread;

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};
use twenty48::Direction;

use crate::session::Command;

/// One item of the input stream consumed by the session loop.
pub enum InputEvent {
    /// A recognized key press.
    Command(Command),
    /// The terminal changed size; redraw without consuming a turn.
    Resize,
    /// The input source failed irrecoverably.
    Fatal(io::Error),
}

/// Spawns the producer thread that blocks on the terminal and forwards
/// events into an unbounded FIFO channel.
///
/// Unrecognized keys and key releases are dropped here; everything else
/// arrives at the receiver in order. After a read error the thread
/// sends [`InputEvent::Fatal`] once and exits.
pub fn spawn_reader() -> Receiver<InputEvent> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || loop {
        let forwarded = match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => match map_key(key.code) {
                Some(command) => tx.send(InputEvent::Command(command)),
                None => Ok(()),
            },
            Ok(Event::Resize(_, _)) => tx.send(InputEvent::Resize),
            Ok(_) => Ok(()),
            Err(err) => {
                let _ = tx.send(InputEvent::Fatal(err));
                break;
            }
        };
        if forwarded.is_err() {
            // The session hung up; nothing left to read for.
            break;
        }
    });
    rx
}

fn map_key(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Up => Some(Command::Move(Direction::Up)),
        KeyCode::Down => Some(Command::Move(Direction::Down)),
        KeyCode::Left => Some(Command::Move(Direction::Left)),
        KeyCode::Right => Some(Command::Move(Direction::Right)),
        KeyCode::Enter => Some(Command::Restart),
        KeyCode::Esc => Some(Command::Exit),
        _ => None,
    }
}
