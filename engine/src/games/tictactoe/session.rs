use crate::games::{BotType, SessionRng};
use super::bot_controller::{SearchSettings, Searcher, calculate_move};
use super::game_state::{GameError, TicTacToeGameState};
use super::types::{GameStatus, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelfPlayReport {
    pub games: u32,
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl SelfPlayReport {
    pub fn record(&mut self, status: GameStatus) {
        self.games += 1;
        match status {
            GameStatus::XWon => self.x_wins += 1,
            GameStatus::OWon => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }
}

pub fn play_game(
    x_bot: BotType,
    o_bot: BotType,
    settings: SearchSettings,
    rng: &mut SessionRng,
) -> Result<TicTacToeGameState, GameError> {
    let mut state = TicTacToeGameState::new();
    let mut searcher = Searcher::new(settings);

    while !state.status().is_over() {
        let bot = match state.current_player() {
            Player::X => x_bot,
            Player::O => o_bot,
        };
        let position = match bot {
            BotType::Minimax => searcher.best_move(state.board()),
            BotType::Random => calculate_move(bot, state.board(), settings, rng),
        };
        let Some(position) = position else {
            break;
        };
        state.place_mark(position)?;
    }

    Ok(state)
}

pub fn run_self_play(
    games: u32,
    x_bot: BotType,
    o_bot: BotType,
    settings: SearchSettings,
    rng: &mut SessionRng,
) -> Result<SelfPlayReport, GameError> {
    let mut report = SelfPlayReport::default();
    for _ in 0..games {
        let state = play_game(x_bot, o_bot, settings, rng)?;
        report.record(state.status());
    }
    Ok(report)
}
