use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::games::{BotType, SessionRng};
use super::board::{Board, legal_actions, player_to_move, successors};
use super::rules::{is_terminal, score};
use super::types::{Player, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSettings {
    pub pruning: bool,
    pub transposition_table: bool,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            pruning: true,
            transposition_table: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub best_move: Option<Position>,
    pub nodes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    Exact,
    Lower,
    Upper,
}

#[derive(Debug, Clone, Copy)]
struct TableEntry {
    value: i32,
    bound: Bound,
}

pub struct Searcher {
    settings: SearchSettings,
    table: HashMap<Board, TableEntry>,
    nodes: u64,
}

impl Searcher {
    pub fn new(settings: SearchSettings) -> Self {
        Self {
            settings,
            table: HashMap::new(),
            nodes: 0,
        }
    }

    pub fn evaluate(&mut self, board: &Board) -> SearchResult {
        self.nodes = 0;
        let maximizing = player_to_move(board) == Player::X;
        let (score, best_move) = self.search(board, maximizing, i32::MIN, i32::MAX, true);

        SearchResult {
            score,
            best_move,
            nodes: self.nodes,
        }
    }

    pub fn best_move(&mut self, board: &Board) -> Option<Position> {
        if is_terminal(board) {
            return None;
        }
        self.evaluate(board).best_move
    }

    pub fn optimal_moves(&mut self, board: &Board) -> Vec<Position> {
        if is_terminal(board) {
            return Vec::new();
        }

        let target = self.evaluate(board).score;
        let mut moves = Vec::new();
        for (action, child) in successors(board) {
            if self.evaluate(&child).score == target {
                moves.push(action);
            }
        }
        moves
    }

    fn search(
        &mut self,
        board: &Board,
        is_maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
        is_root: bool,
    ) -> (i32, Option<Position>) {
        self.nodes += 1;

        if is_terminal(board) {
            return (score(board), None);
        }

        let original_alpha = alpha;
        let original_beta = beta;

        if self.settings.transposition_table
            && !is_root
            && let Some(entry) = self.table.get(board)
        {
            let usable = match entry.bound {
                Bound::Exact => true,
                Bound::Lower => entry.value >= beta,
                Bound::Upper => entry.value <= alpha,
            };
            if usable {
                return (entry.value, None);
            }
        }

        let mut best_score = if is_maximizing { i32::MIN } else { i32::MAX };
        let mut best_move = None;

        for (action, child) in successors(board) {
            let (child_score, _) = self.search(&child, !is_maximizing, alpha, beta, false);

            if is_maximizing {
                if child_score > best_score {
                    best_score = child_score;
                    best_move = Some(action);
                }
                alpha = alpha.max(child_score);
            } else {
                if child_score < best_score {
                    best_score = child_score;
                    best_move = Some(action);
                }
                beta = beta.min(child_score);
            }

            if self.settings.pruning && beta <= alpha {
                break;
            }
        }

        if self.settings.transposition_table {
            let bound = if !self.settings.pruning {
                Bound::Exact
            } else if best_score <= original_alpha {
                Bound::Upper
            } else if best_score >= original_beta {
                Bound::Lower
            } else {
                Bound::Exact
            };
            self.table.insert(
                *board,
                TableEntry {
                    value: best_score,
                    bound,
                },
            );
        }

        (best_score, best_move)
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(SearchSettings::default())
    }
}

pub fn best_move(board: &Board) -> Option<Position> {
    Searcher::default().best_move(board)
}

pub fn optimal_moves(board: &Board) -> Vec<Position> {
    Searcher::default().optimal_moves(board)
}

pub fn calculate_move(
    bot_type: BotType,
    board: &Board,
    settings: SearchSettings,
    rng: &mut SessionRng,
) -> Option<Position> {
    match bot_type {
        BotType::Minimax => Searcher::new(settings).best_move(board),
        BotType::Random => calculate_random_move(board, rng),
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<Position> {
    if is_terminal(board) {
        return None;
    }
    let available_moves: Vec<Position> = legal_actions(board).into_iter().collect();
    rng.pick(&available_moves)
}
