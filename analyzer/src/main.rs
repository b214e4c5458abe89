mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_engine::config::{ConfigManager, EngineConfig, FileContentConfigProvider, YamlConfigSerializer};
use tictactoe_engine::games::BotType;
use tictactoe_engine::games::tictactoe::Board;
use tictactoe_engine::{log, logger};

const CONFIG_FILE_NAME: &str = "tictactoe_analyzer.yaml";

#[derive(Parser)]
#[command(name = "tictactoe_analyzer")]
struct Args {
    #[arg(long, global = true)]
    use_log_prefix: bool,

    /// YAML config path; defaults to tictactoe_analyzer.yaml next to the executable
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Report the optimal move for a board such as "X.O/.X./..."
    BestMove {
        #[arg(long)]
        board: Board,
    },
    /// Let two bots play each other and report the tally
    SelfPlay {
        #[arg(long)]
        games: Option<u32>,
        #[arg(long)]
        x_bot: Option<BotType>,
        #[arg(long)]
        o_bot: Option<BotType>,
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, EngineConfig, YamlConfigSerializer> {
    let path = path.unwrap_or_else(get_config_path);
    ConfigManager::from_yaml_file(&path)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Analyzer".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = get_config_manager(args.config).get_config()?;

    match args.command {
        Command::BestMove { board } => commands::best_move(&board, config.search),
        Command::SelfPlay {
            games,
            x_bot,
            o_bot,
            seed,
        } => {
            let mut self_play = config.self_play;
            if let Some(games) = games {
                self_play.games = games;
            }
            if let Some(x_bot) = x_bot {
                self_play.x_bot = x_bot;
            }
            if let Some(o_bot) = o_bot {
                self_play.o_bot = o_bot;
            }
            if seed.is_some() {
                self_play.seed = seed;
            }
            commands::self_play(self_play, config.search)?;
        }
    }

    log!("Done");
    Ok(())
}
