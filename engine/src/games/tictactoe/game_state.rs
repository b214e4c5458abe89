use std::fmt;

use super::board::{Board, apply, initial_state, player_to_move};
use super::rules::game_status;
use super::types::{BoardError, Cell, GameStatus, Player, Position, WinningLine};
use super::win_detector::winning_line;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    GameOver(GameStatus),
    OutOfRange { row: usize, col: usize },
    CellOccupied(Position),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::GameOver(status) => write!(f, "Game is already over ({})", status),
            GameError::OutOfRange { row, col } => {
                write!(f, "Position ({}, {}) is out of bounds", row, col)
            }
            GameError::CellOccupied(position) => {
                write!(f, "Cell {} is already marked", position)
            }
        }
    }
}

impl std::error::Error for GameError {}

impl From<BoardError> for GameError {
    fn from(e: BoardError) -> Self {
        match e {
            BoardError::OutOfRange { row, col } => GameError::OutOfRange { row, col },
        }
    }
}

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    status: GameStatus,
    history: Vec<Position>,
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self::from_board(initial_state())
    }

    // History only records moves placed after this point.
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            status: game_status(&board),
            history: Vec::new(),
        }
    }

    pub fn place_mark(&mut self, position: Position) -> Result<(), GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver(self.status));
        }

        match self.board.cell(position) {
            None => {
                return Err(GameError::OutOfRange {
                    row: position.row,
                    col: position.col,
                });
            }
            Some(Cell::Empty) => {}
            Some(_) => return Err(GameError::CellOccupied(position)),
        }

        self.board = apply(&self.board, position)?;
        self.history.push(position);
        self.status = game_status(&self.board);

        Ok(())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn current_player(&self) -> Player {
        player_to_move(&self.board)
    }

    pub fn history(&self) -> &[Position] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Position> {
        self.history.last().copied()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        winning_line(&self.board)
    }
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}
