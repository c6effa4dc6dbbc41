use std::io::{self, Stdout};

use ratatui::{prelude::*, widgets::*};
use twenty48::BOARD_SIZE;

use crate::session::{Phase, Session};

// Each cell is 6 columns and 2 rows of lattice, plus the closing edge.
const CELL_WIDTH: u16 = 6;
const GRID_WIDTH: u16 = CELL_WIDTH * BOARD_SIZE as u16 + 1;
const GRID_HEIGHT: u16 = 2 * BOARD_SIZE as u16 + 1;
const HEADER_HEIGHT: u16 = 4;
const WIDGET_WIDTH: u16 = 26;
const WIDGET_HEIGHT: u16 = HEADER_HEIGHT + GRID_HEIGHT;

const LATTICE_EDGE: &str = "+-----+-----+-----+-----+";
const LATTICE_GAP: &str = "|     |     |     |     |";

/// Draws the whole screen. The session loop is the only caller, so no
/// two renders ever overlap.
pub fn draw(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    session: &Session,
) -> io::Result<()> {
    terminal.draw(|frame| {
        let size = frame.size();
        if size.width < WIDGET_WIDTH || size.height < WIDGET_HEIGHT {
            frame.render_widget(Paragraph::new("Terminal too small"), size);
            return;
        }
        let centered = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(WIDGET_WIDTH),
                Constraint::Min(0),
            ])
            .split(size)[1];
        let centered = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(WIDGET_HEIGHT),
                Constraint::Min(0),
            ])
            .split(centered)[1];
        frame.render_widget(SessionWidget { session }, centered);
    })?;
    Ok(())
}

struct SessionWidget<'a> {
    session: &'a Session,
}

impl Widget for SessionWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let header = Style::new().fg(Color::Yellow);
        buf.set_string(area.x, area.y, "Arrow keys move the tiles", header);
        buf.set_string(area.x, area.y + 1, "Enter restarts | Esc quits", header);
        buf.set_string(
            area.x,
            area.y + 2,
            format!(
                "Score: {}   Moves: {}",
                self.session.scoreboard.score(),
                self.session.scoreboard.step()
            ),
            header,
        );

        let grid_y = area.y + HEADER_HEIGHT;
        let lattice = Style::new().fg(Color::Green);
        let tile = Style::new().fg(Color::Red);
        for i in 0..BOARD_SIZE {
            let edge_y = grid_y + 2 * i as u16;
            buf.set_string(area.x, edge_y, LATTICE_EDGE, lattice);
            buf.set_string(area.x, edge_y + 1, LATTICE_GAP, lattice);
            for j in 0..BOARD_SIZE {
                let value = self.session.board.get(i, j);
                if value != 0 {
                    let text = value.to_string();
                    // Center the value in the 5-column cell interior.
                    let x = area.x + CELL_WIDTH * j as u16 + 1 + (5 - text.len() as u16) / 2;
                    buf.set_string(x, edge_y + 1, text, tile);
                }
            }
        }
        buf.set_string(area.x, grid_y + GRID_HEIGHT - 1, LATTICE_EDGE, lattice);

        let banner = match self.session.phase {
            Phase::Won => Some((" You win! ", Style::new().fg(Color::Magenta).bg(Color::Yellow))),
            Phase::Lost => Some((" Game over ", Style::new().fg(Color::Black).bg(Color::Red))),
            _ => None,
        };
        if let Some((text, style)) = banner {
            let x = area.x + (GRID_WIDTH - text.len() as u16) / 2;
            let y = grid_y + GRID_HEIGHT / 2;
            buf.set_string(x, y, text, style);
        }
    }
}
