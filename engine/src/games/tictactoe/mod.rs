mod board;
mod bot_controller;
mod game_state;
mod rules;
mod session;
mod types;
mod win_detector;

pub use board::{Board, apply, initial_state, legal_actions, player_to_move};
pub use bot_controller::{SearchResult, SearchSettings, Searcher, best_move, calculate_move, optimal_moves};
pub use game_state::{GameError, TicTacToeGameState};
pub use rules::{DRAW_SCORE, O_WIN_SCORE, X_WIN_SCORE, game_status, is_terminal, score};
pub use session::{SelfPlayReport, play_game, run_self_play};
pub use types::{BOARD_SIZE, BoardError, Cell, GameStatus, ParseBoardError, Player, Position, WinningLine};
pub use win_detector::{winner, winning_line};
