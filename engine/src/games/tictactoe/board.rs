use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::types::{BOARD_SIZE, BoardError, Cell, ParseBoardError, Player, Position};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn from_rows(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn cell(&self, position: Position) -> Option<Cell> {
        self.cells
            .get(position.row)
            .and_then(|row| row.get(position.col))
            .copied()
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&c| c == cell)
            .count()
    }

    pub fn is_full(&self) -> bool {
        self.count(Cell::Empty) == 0
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.iter().enumerate() {
            if row_index > 0 {
                write!(f, "/")?;
            }
            for cell in row {
                write!(f, "{}", cell.as_char())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parsed = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
        for c in s.chars() {
            let cell = match c {
                'X' | 'x' => Cell::X,
                'O' | 'o' => Cell::O,
                '.' | '_' | '-' => Cell::Empty,
                '/' => continue,
                c if c.is_whitespace() => continue,
                other => return Err(ParseBoardError::InvalidCharacter(other)),
            };
            parsed.push(cell);
        }

        if parsed.len() != BOARD_SIZE * BOARD_SIZE {
            return Err(ParseBoardError::WrongCellCount(parsed.len()));
        }

        let mut board = Board::default();
        for (index, cell) in parsed.into_iter().enumerate() {
            board.cells[index / BOARD_SIZE][index % BOARD_SIZE] = cell;
        }
        Ok(board)
    }
}

pub fn initial_state() -> Board {
    Board::default()
}

pub fn player_to_move(board: &Board) -> Player {
    if board.count(Cell::X) == board.count(Cell::O) {
        Player::X
    } else {
        Player::O
    }
}

pub fn legal_actions(board: &Board) -> BTreeSet<Position> {
    let mut actions = BTreeSet::new();
    for (row, cells) in board.cells.iter().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            if cell == Cell::Empty {
                actions.insert(Position::new(row, col));
            }
        }
    }
    actions
}

// Occupied cells are overwritten, not rejected.
pub fn apply(board: &Board, action: Position) -> Result<Board, BoardError> {
    if !action.is_in_range() {
        return Err(BoardError::OutOfRange {
            row: action.row,
            col: action.col,
        });
    }

    let mark = player_to_move(board).to_cell();
    let mut next = *board;
    next.cells[action.row][action.col] = mark;
    Ok(next)
}

// Each empty cell paired with the board after the player to move takes it.
pub(super) fn successors(board: &Board) -> impl Iterator<Item = (Position, Board)> + '_ {
    let mark = player_to_move(board).to_cell();
    legal_actions(board).into_iter().map(move |action| {
        let mut next = *board;
        next.cells[action.row][action.col] = mark;
        (action, next)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::is_terminal;
    use std::collections::HashSet;

    fn reachable_boards() -> Vec<Board> {
        let mut seen = HashSet::new();
        let mut stack = vec![initial_state()];
        let mut boards = Vec::new();

        while let Some(board) = stack.pop() {
            if !seen.insert(board) {
                continue;
            }
            boards.push(board);
            if is_terminal(&board) {
                continue;
            }
            for action in legal_actions(&board) {
                stack.push(apply(&board, action).unwrap());
            }
        }
        boards
    }

    #[test]
    fn test_initial_state_is_empty() {
        let board = initial_state();

        assert_eq!(board.count(Cell::Empty), 9);
        assert!(board.rows().iter().all(|row| row.len() == 3));
    }

    #[test]
    fn test_initial_state_has_nine_actions() {
        assert_eq!(legal_actions(&initial_state()).len(), 9);
    }

    #[test]
    fn test_x_moves_first() {
        assert_eq!(player_to_move(&initial_state()), Player::X);
    }

    #[test]
    fn test_player_to_move_alternates() {
        let mut board = initial_state();
        let mut expected = Player::X;

        for (row, col) in [(1, 1), (0, 0), (2, 2), (0, 2), (0, 1)] {
            assert_eq!(player_to_move(&board), expected);
            board = apply(&board, Position::new(row, col)).unwrap();
            expected = expected.opponent();
        }
    }

    #[test]
    fn test_player_to_move_on_terminal_board() {
        let board: Board = "XXX/OO./...".parse().unwrap();

        assert_eq!(player_to_move(&board), Player::O);
    }

    #[test]
    fn test_apply_places_current_mark() {
        let board = apply(&initial_state(), Position::new(0, 0)).unwrap();
        assert_eq!(board.cell(Position::new(0, 0)), Some(Cell::X));

        let board = apply(&board, Position::new(2, 1)).unwrap();
        assert_eq!(board.cell(Position::new(2, 1)), Some(Cell::O));
    }

    #[test]
    fn test_apply_leaves_input_unchanged() {
        let board = initial_state();

        let next = apply(&board, Position::new(0, 0)).unwrap();

        assert_eq!(board.cell(Position::new(0, 0)), Some(Cell::Empty));
        assert_ne!(board, next);
    }

    #[test]
    fn test_reachable_boards_count() {
        assert_eq!(reachable_boards().len(), 5478);
    }

    #[test]
    fn test_apply_never_mutates_reachable_boards() {
        for board in reachable_boards() {
            if is_terminal(&board) {
                continue;
            }
            let snapshot = board;

            for action in legal_actions(&board) {
                let next = apply(&board, action).unwrap();

                assert_eq!(board, snapshot);
                assert_eq!(board.cell(action), Some(Cell::Empty));
                assert_eq!(next.cell(action), Some(player_to_move(&board).to_cell()));
                assert_eq!(next.count(Cell::Empty), board.count(Cell::Empty) - 1);
            }
        }
    }

    #[test]
    fn test_player_to_move_alternates_on_reachable_boards() {
        for board in reachable_boards() {
            if is_terminal(&board) {
                continue;
            }
            let mover = player_to_move(&board);

            for action in legal_actions(&board) {
                let next = apply(&board, action).unwrap();

                assert_eq!(player_to_move(&next), mover.opponent());
                assert_eq!(legal_actions(&next).len(), legal_actions(&board).len() - 1);
            }
        }
    }

    #[test]
    fn test_successors_match_apply_on_reachable_boards() {
        for board in reachable_boards() {
            let expected: Vec<(Position, Board)> = legal_actions(&board)
                .into_iter()
                .map(|action| (action, apply(&board, action).unwrap()))
                .collect();

            let children: Vec<(Position, Board)> = successors(&board).collect();

            assert_eq!(children, expected);
        }
    }

    #[test]
    fn test_apply_removes_exactly_one_action() {
        let mut board = initial_state();

        while let Some(&action) = legal_actions(&board).iter().next() {
            let before = legal_actions(&board).len();
            board = apply(&board, action).unwrap();
            assert_eq!(legal_actions(&board).len(), before - 1);
            assert!(!legal_actions(&board).contains(&action));
        }

        assert!(board.is_full());
    }

    #[test]
    fn test_apply_out_of_range() {
        let board = initial_state();

        assert_eq!(
            apply(&board, Position::new(3, 0)),
            Err(BoardError::OutOfRange { row: 3, col: 0 })
        );
        assert_eq!(
            apply(&board, Position::new(1, 7)),
            Err(BoardError::OutOfRange { row: 1, col: 7 })
        );
    }

    #[test]
    fn test_apply_overwrites_occupied_cell() {
        let board: Board = "X../.../...".parse().unwrap();

        let next = apply(&board, Position::new(0, 0)).unwrap();

        assert_eq!(next.cell(Position::new(0, 0)), Some(Cell::O));
    }

    #[test]
    fn test_full_board_has_no_actions() {
        let board: Board = "XOX/OXO/OXO".parse().unwrap();

        assert!(legal_actions(&board).is_empty());
    }

    #[test]
    fn test_parse_and_display() {
        let board: Board = "x o _\n- X .\nO . .".parse().unwrap();

        assert_eq!(board.to_string(), "XO./.X./O..");
        assert_eq!(board.count(Cell::X), 2);
        assert_eq!(board.count(Cell::O), 2);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "XO/...".parse::<Board>(),
            Err(ParseBoardError::WrongCellCount(5))
        );
        assert_eq!(
            "XOZ/.../...".parse::<Board>(),
            Err(ParseBoardError::InvalidCharacter('Z'))
        );
    }

    #[test]
    fn test_cell_out_of_range_is_none() {
        assert_eq!(initial_state().cell(Position::new(0, 3)), None);
    }
}
