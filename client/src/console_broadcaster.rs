use std::io::{self, Write};

use common::games::GameBroadcaster;
use common::games::tictactoe::{Board, CELL_COUNT, Mark, win_text};
use common::log;

/// Draws the board as text. Keeps its own copy of the cells since the engine
/// only reports changes.
pub struct ConsoleBroadcaster<W: Write> {
    out: W,
    cells: [Mark; CELL_COUNT],
    write_failed: bool,
}

impl<W: Write> ConsoleBroadcaster<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            cells: [Mark::Empty; CELL_COUNT],
            write_failed: false,
        }
    }

    pub fn out(&self) -> &W {
        &self.out
    }

    pub fn into_out(self) -> W {
        self.out
    }

    /// Set once the output refused a write; nothing is drawn after that.
    pub fn write_failed(&self) -> bool {
        self.write_failed
    }

    pub fn print_hint(&mut self, text: &str) {
        self.write_line(text);
    }

    fn draw_board(&mut self) {
        let board = Board::from_cells(self.cells);
        self.write_line(&format_board(&board));
    }

    fn write_line(&mut self, text: &str) {
        if self.write_failed {
            return;
        }
        if let Err(e) = writeln!(self.out, "{}", text).and_then(|_| self.out.flush()) {
            self.on_write_error(e);
        }
    }

    fn on_write_error(&mut self, e: io::Error) {
        log!("Console output failed, further output is dropped: {}", e);
        self.write_failed = true;
    }
}

/// Empty cells show their index so the player knows what to type.
pub fn format_board(board: &Board) -> String {
    board
        .cells()
        .chunks(3)
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(column, mark)| match mark {
                    Mark::Empty => (row * 3 + column).to_string(),
                    _ => mark.to_string(),
                })
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .map(|line| format!(" {}", line))
        .collect::<Vec<_>>()
        .join("\n---+---+---\n")
}

impl<W: Write> GameBroadcaster for ConsoleBroadcaster<W> {
    fn render_cell(&mut self, index: usize, mark: Mark) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = mark;
        }
        self.draw_board();
    }

    fn render_board_cleared(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
        self.draw_board();
    }

    fn render_status(&mut self, text: &str) {
        self.write_line(&format!(">> {}", text));
    }

    fn notify_winner(&mut self, mark: Mark) {
        self.write_line(&format!("*** {} *** (r to play again)", win_text(mark)));
    }

    fn notify_draw(&mut self) {
        self.write_line("*** Nobody won *** (r to play again)");
    }
}
