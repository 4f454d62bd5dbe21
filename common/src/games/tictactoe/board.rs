use super::types::Mark;

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

pub const CENTER: usize = 4;
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];
pub const SIDES: [usize; 4] = [1, 3, 5, 7];

pub const WINNING_COMBINATIONS: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Row-major 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != Mark::Empty).count()
    }

    pub fn clear(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
    }

    /// Copy of the board with `mark` placed at `index`; the receiver is left untouched.
    /// An index past the last cell yields an unchanged copy.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Self {
        let mut next = *self;
        next.set(index, mark);
        next
    }

    pub(super) fn set(&mut self, index: usize, mark: Mark) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = mark;
        }
    }
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| **cell == Mark::Empty)
        .map(|(index, _)| index)
        .collect()
}

pub fn is_valid_move(board: &Board, index: usize) -> bool {
    board.get(index) == Some(Mark::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.marked_count(), 0);
        assert_eq!(get_available_moves(&board), (0..CELL_COUNT).collect::<Vec<_>>());
    }

    #[test]
    fn test_with_mark_does_not_touch_original() {
        let board = Board::new();
        let next = board.with_mark(4, Mark::X);
        assert_eq!(board.get(4), Some(Mark::Empty));
        assert_eq!(next.get(4), Some(Mark::X));
    }

    #[test]
    fn test_with_mark_past_last_cell_changes_nothing() {
        let board = Board::new().with_mark(4, Mark::O);
        for index in [CELL_COUNT, CELL_COUNT + 1, usize::MAX] {
            let next = board.with_mark(index, Mark::X);
            assert_eq!(next, board);
            assert_eq!(next.marked_count(), 1);
        }
    }

    #[test]
    fn test_is_valid_move() {
        let board = Board::new().with_mark(0, Mark::O);
        assert!(!is_valid_move(&board, 0));
        assert!(is_valid_move(&board, 1));
        assert!(!is_valid_move(&board, 9));
    }

    #[test]
    fn test_available_moves_skip_marked_cells() {
        let board = Board::new().with_mark(0, Mark::X).with_mark(8, Mark::O);
        assert_eq!(get_available_moves(&board), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_is_full() {
        use Mark::{O, X};
        let board = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        assert!(board.is_full());
        assert!(!Board::new().is_full());
    }
}
