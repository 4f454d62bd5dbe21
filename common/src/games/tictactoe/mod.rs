mod board;
mod bot_controller;
mod game_state;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, CELL_COUNT, CENTER, CORNERS, SIDES, WINNING_COMBINATIONS, get_available_moves, is_valid_move};
pub use bot_controller::{BotInput, calculate_move};
pub use game_state::TicTacToeGameState;
pub use session::{
    BOT_MODE_TEXT, DRAW_TEXT, RESTART_TEXT, TWO_PLAYER_MODE_TEXT, TicTacToeSession, turn_text, win_text,
};
pub use settings::TicTacToeSessionSettings;
pub use types::{Controller, GameMode, GameStatus, Mark, MoveError, MoveOutcome, PlayerRole, WinningLine};
pub use win_detector::{check_win, check_win_with_line};
