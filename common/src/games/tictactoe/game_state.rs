use super::board::{Board, CELL_COUNT};
use super::types::{Controller, GameMode, GameStatus, Mark, MoveError, MoveOutcome, PlayerRole, WinningLine};
use super::win_detector::{check_win, check_win_with_line};

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    mode: GameMode,
    current_mark: Mark,
    status: GameStatus,
    last_move: Option<usize>,
}

impl TicTacToeGameState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            mode,
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Index of the most recent accepted move; `None` right after a reset.
    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn place_mark(&mut self, controller: Controller, index: usize) -> Result<MoveOutcome, MoveError> {
        if !self.status.is_active() {
            return Err(MoveError::GameOver);
        }

        if controller != self.current_controller() {
            return Err(MoveError::NotYourTurn);
        }

        if index >= CELL_COUNT {
            return Err(MoveError::OutOfBounds(index));
        }

        if self.board.get(index) != Some(Mark::Empty) {
            return Err(MoveError::CellOccupied(index));
        }

        let mark = self.current_mark;
        self.board.set(index, mark);
        self.last_move = Some(index);

        if check_win(&self.board, mark) {
            self.status = match mark {
                Mark::X => GameStatus::XWon,
                Mark::O => GameStatus::OWon,
                Mark::Empty => unreachable!(),
            };
            return Ok(MoveOutcome::Won(mark));
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
            return Ok(MoveOutcome::Draw);
        }

        self.switch_turn();
        Ok(MoveOutcome::TurnPassed { next: self.current_mark })
    }

    fn switch_turn(&mut self) {
        self.current_mark = match self.current_mark {
            Mark::X => Mark::O,
            _ => Mark::X,
        };
    }

    pub fn reset(&mut self) {
        self.board.clear();
        self.current_mark = Mark::X;
        self.status = GameStatus::InProgress;
        self.last_move = None;
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset();
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    pub fn current_role(&self) -> PlayerRole {
        PlayerRole::for_mark(self.current_mark, self.mode).unwrap_or(PlayerRole::Player1)
    }

    pub fn current_controller(&self) -> Controller {
        self.current_role().controller()
    }

    pub fn is_bot_turn(&self) -> bool {
        self.is_active() && self.current_controller() == Controller::Bot
    }

    pub fn get_winner(&self) -> Option<Mark> {
        self.status.winner()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        if self.status.winner().is_some() {
            check_win_with_line(&self.board)
        } else {
            None
        }
    }

    #[cfg(test)]
    pub(crate) fn set_board(&mut self, board: Board) {
        self.board = board;
    }
}
