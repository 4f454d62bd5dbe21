use super::board::{Board, CENTER, CORNERS, SIDES, get_available_moves, is_valid_move};
use super::game_state::TicTacToeGameState;
use super::types::Mark;
use super::win_detector::check_win;

pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
    pub opponent_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Option<Self> {
        let bot_mark = state.current_mark();
        let opponent_mark = bot_mark.opponent()?;
        Some(Self {
            board: *state.board(),
            bot_mark,
            opponent_mark,
        })
    }
}

/// Picks the bot's cell: win, block, center, corner, side, in that order.
/// Returns `None` only when the board has no empty cell.
pub fn calculate_move(input: &BotInput) -> Option<usize> {
    let available_moves = get_available_moves(&input.board);

    if available_moves.is_empty() {
        return None;
    }

    if let Some(index) = find_winning_move(&input.board, input.bot_mark, &available_moves) {
        return Some(index);
    }

    if let Some(index) = find_winning_move(&input.board, input.opponent_mark, &available_moves) {
        return Some(index);
    }

    if is_valid_move(&input.board, CENTER) {
        return Some(CENTER);
    }

    CORNERS
        .into_iter()
        .chain(SIDES)
        .find(|&index| is_valid_move(&input.board, index))
}

fn find_winning_move(board: &Board, mark: Mark, moves: &[usize]) -> Option<usize> {
    moves
        .iter()
        .copied()
        .find(|&index| check_win(&board.with_mark(index, mark), mark))
}

#[cfg(test)]
mod tests {
    use super::*;
    use Mark::{Empty as E, O, X};

    fn bot_o(cells: [Mark; 9]) -> Option<usize> {
        calculate_move(&BotInput {
            board: Board::from_cells(cells),
            bot_mark: O,
            opponent_mark: X,
        })
    }

    #[test]
    fn test_prefers_own_win_over_block() {
        assert_eq!(bot_o([X, X, E, O, O, E, E, E, E]), Some(5));
    }

    #[test]
    fn test_blocks_when_no_win_available() {
        assert_eq!(bot_o([X, X, E, O, E, E, E, E, E]), Some(2));
    }

    #[test]
    fn test_takes_center_after_corner_opening() {
        assert_eq!(bot_o([X, E, E, E, E, E, E, E, E]), Some(4));
    }

    #[test]
    fn test_takes_center_after_side_opening() {
        assert_eq!(bot_o([E, X, E, E, E, E, E, E, E]), Some(4));
    }

    #[test]
    fn test_takes_first_free_corner_when_center_taken() {
        assert_eq!(bot_o([E, E, E, E, X, E, E, E, E]), Some(0));
        assert_eq!(bot_o([O, E, E, E, X, E, E, E, X]), Some(2));
    }

    #[test]
    fn test_takes_side_when_corners_and_center_taken() {
        // Neither side can complete a line in one move here.
        assert_eq!(bot_o([X, O, X, E, X, E, O, X, O]), Some(3));
        assert_eq!(bot_o([X, E, O, O, X, X, X, E, O]), Some(1));
    }

    #[test]
    fn test_win_scan_uses_ascending_index_order() {
        // O can win at 2 (top row) or at 6 (left column).
        assert_eq!(bot_o([O, O, E, O, X, X, E, X, E]), Some(2));
    }

    #[test]
    fn test_block_scan_uses_ascending_index_order() {
        // X threatens both 2 and 6; the lower index is blocked.
        assert_eq!(bot_o([X, X, E, X, O, E, E, E, E]), Some(2));
    }

    #[test]
    fn test_full_board_has_no_move() {
        assert_eq!(bot_o([X, O, X, X, O, O, O, X, X]), None);
    }

    #[test]
    fn test_evaluation_leaves_board_untouched() {
        let board = Board::from_cells([X, X, E, O, E, E, E, E, E]);
        let input = BotInput {
            board,
            bot_mark: O,
            opponent_mark: X,
        };
        calculate_move(&input);
        assert_eq!(input.board, board);
    }

    #[test]
    fn test_from_game_state_uses_current_mark() {
        use crate::games::tictactoe::{Controller, GameMode};
        let mut state = TicTacToeGameState::new(GameMode::HumanVsBot);
        state.place_mark(Controller::Human, 0).unwrap();

        let input = BotInput::from_game_state(&state).unwrap();

        assert_eq!(input.bot_mark, O);
        assert_eq!(input.opponent_mark, X);
        assert_eq!(calculate_move(&input), Some(4));
    }

    #[test]
    fn test_every_move_is_an_empty_cell() {
        let mut board = Board::new();
        let mut mark = X;
        while let Some(index) = calculate_move(&BotInput {
            board,
            bot_mark: mark,
            opponent_mark: mark.opponent().unwrap(),
        }) {
            assert_eq!(board.get(index), Some(E));
            board = board.with_mark(index, mark);
            if check_win(&board, mark) {
                break;
            }
            mark = mark.opponent().unwrap();
        }
    }
}
