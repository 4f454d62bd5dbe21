use super::board::{Board, WINNING_COMBINATIONS};
use super::types::{Mark, WinningLine};

pub fn check_win(board: &Board, mark: Mark) -> bool {
    if mark == Mark::Empty {
        return false;
    }

    WINNING_COMBINATIONS
        .iter()
        .any(|line| line.iter().all(|&index| board.get(index) == Some(mark)))
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for line in WINNING_COMBINATIONS {
        let first = board.get(line[0])?;
        if first == Mark::Empty {
            continue;
        }
        if line.iter().all(|&index| board.get(index) == Some(first)) {
            return Some(WinningLine::new(first, line));
        }
    }
    None
}
