mod auto_play;
mod config;
mod console_game;

use clap::Parser;
use std::io;
use std::path::PathBuf;
use tictactoe_engine::config::Validate;
use tictactoe_engine::games::SessionRng;
use tictactoe_engine::games::tictactoe::{BotType, Mark};
use tictactoe_engine::{log, logger};

use config::{ConsoleConfig, GameMode, get_config_manager, get_config_path};

#[derive(Parser, Debug)]
#[command(name = "tictactoe", about = "Play 3x3 tic-tac-toe against the computer")]
struct Args {
    /// Path to the YAML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Computer strategy: random, winning-move, win-block-lose or minimax
    #[arg(long, conflicts_with = "difficulty")]
    bot: Option<BotType>,

    /// Computer strategy by level, 0 (random) to 3 (minimax)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=3))]
    difficulty: Option<u8>,

    /// Mark played by the human
    #[arg(long)]
    human: Option<Mark>,

    /// standard, or everyones-a-winner (aim for a draw, computer plays randomly)
    #[arg(long)]
    mode: Option<GameMode>,

    /// Human against human, no computer moves
    #[arg(long)]
    two_players: bool,

    /// Play this many computer-vs-computer games and print the tally
    #[arg(long)]
    auto: Option<u32>,

    #[arg(long, requires = "auto")]
    x_bot: Option<BotType>,

    #[arg(long, requires = "auto")]
    o_bot: Option<BotType>,

    /// Seed for random moves
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Write the effective settings back to the config file
    #[arg(long)]
    save_config: bool,
}

impl Args {
    fn apply_to(&self, config: &mut ConsoleConfig) {
        if let Some(bot) = self.bot {
            config.tictactoe.bot = bot;
        }
        if let Some(bot) = self.difficulty.and_then(BotType::from_difficulty) {
            config.tictactoe.bot = bot;
        }
        if let Some(mark) = self.human {
            config.tictactoe.human_mark = mark;
        }
        if let Some(mode) = self.mode {
            config.tictactoe.mode = mode;
        }
        if self.two_players {
            config.tictactoe.ai_enabled = false;
        }
        if let Some(games) = self.auto {
            config.auto_play.games = games;
        }
        if let Some(bot) = self.x_bot {
            config.auto_play.x_bot = bot;
        }
        if let Some(bot) = self.o_bot {
            config.auto_play.o_bot = bot;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.use_log_prefix {
            config.use_log_prefix = true;
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_path = args.config.clone().unwrap_or_else(get_config_path);
    let config_manager = get_config_manager(&config_path);
    let mut config = config_manager.get_config()?;
    args.apply_to(&mut config);
    config.validate()?;

    let prefix = config.use_log_prefix.then(|| "Console".to_string());
    logger::init_logger(prefix);

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Saved settings to {}", config_path.display());
    }

    let mut rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    if args.auto.is_some() {
        let tally = auto_play::run_series(&config.auto_play, &mut rng);
        println!("{}", auto_play::format_tally(&config.auto_play, &tally));
        return Ok(());
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    console_game::run_interactive(&mut input, &mut output, &config.tictactoe, &mut rng)?;

    log!("Goodbye");
    Ok(())
}
