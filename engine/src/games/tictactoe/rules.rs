use super::board::Board;
use super::types::{GameStatus, Player};
use super::win_detector::winner;

pub const X_WIN_SCORE: i32 = 1;
pub const DRAW_SCORE: i32 = 0;
pub const O_WIN_SCORE: i32 = -1;

pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

pub fn score(board: &Board) -> i32 {
    match winner(board) {
        Some(Player::X) => X_WIN_SCORE,
        Some(Player::O) => O_WIN_SCORE,
        None => DRAW_SCORE,
    }
}

pub fn game_status(board: &Board) -> GameStatus {
    match winner(board) {
        Some(Player::X) => GameStatus::XWon,
        Some(Player::O) => GameStatus::OWon,
        None if board.is_full() => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}
