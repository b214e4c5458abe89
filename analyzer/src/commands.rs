use std::time::Instant;
use tictactoe_engine::config::{ConfigError, SelfPlayConfig, Validate};
use tictactoe_engine::games::SessionRng;
use tictactoe_engine::games::tictactoe::{
    Board, SearchSettings, Searcher, game_status, is_terminal, player_to_move, run_self_play, score,
    winning_line,
};
use tictactoe_engine::log;

pub fn best_move(board: &Board, settings: SearchSettings) {
    log!("Board: {}", board);

    if is_terminal(board) {
        let status = game_status(board);
        match winning_line(board) {
            Some(line) => log!(
                "Game is over: {} (line {} to {}), score {}",
                status,
                line.start,
                line.end,
                score(board)
            ),
            None => log!("Game is over: {}, score {}", status, score(board)),
        }
        return;
    }

    let mut searcher = Searcher::new(settings);
    let started = Instant::now();
    let result = searcher.evaluate(board);
    let elapsed = started.elapsed();

    if let Some(position) = result.best_move {
        log!(
            "{} to move, best move {}, value {}, {} nodes in {:.3} ms",
            player_to_move(board),
            position,
            result.score,
            result.nodes,
            elapsed.as_secs_f64() * 1000.0
        );
    }

    let optimal = searcher.optimal_moves(board);
    let listed: Vec<String> = optimal.iter().map(|p| p.to_string()).collect();
    log!("Equally optimal moves: {}", listed.join(" "));
}

pub fn self_play(config: SelfPlayConfig, settings: SearchSettings) -> Result<(), Box<dyn std::error::Error>> {
    config.validate().map_err(ConfigError::Validation)?;

    let mut rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    log!(
        "Playing {} game(s): X={} O={} seed={} pruning={} transposition_table={}",
        config.games,
        config.x_bot,
        config.o_bot,
        rng.seed(),
        settings.pruning,
        settings.transposition_table
    );

    let started = Instant::now();
    let report = run_self_play(config.games, config.x_bot, config.o_bot, settings, &mut rng)?;

    log!(
        "Finished in {:.3} s: X wins {}, O wins {}, draws {}",
        started.elapsed().as_secs_f64(),
        report.x_wins,
        report.o_wins,
        report.draws
    );
    Ok(())
}
