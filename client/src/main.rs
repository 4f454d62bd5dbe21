mod command;
mod config;
mod console_broadcaster;
mod runner;

use clap::{Parser, ValueEnum};
use common::games::tictactoe::{GameMode, TicTacToeSessionSettings};
use common::{log, logger};
use tokio::io::BufReader;

use config::{CONFIG_FILE, Validate, get_config_manager};
use runner::run_console_game;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    TwoHuman,
    HumanVsBot,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::TwoHuman => GameMode::TwoHuman,
            ModeArg::HumanVsBot => GameMode::HumanVsBot,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Tic-tac-toe in the terminal, against a friend or the bot")]
struct Args {
    /// Who plays O; overrides the config file
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// How long the bot thinks before moving; overrides the config file
    #[arg(long)]
    bot_delay_ms: Option<u32>,

    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let mut config = get_config_manager(&args.config).get_config()?;
    if let Some(mode) = args.mode {
        config.game.mode = mode.into();
    }
    if let Some(bot_delay_ms) = args.bot_delay_ms {
        config.game.bot_delay_ms = bot_delay_ms;
    }
    config.validate()?;

    let settings = TicTacToeSessionSettings::from(&config.game);
    log!("Session {} starting, config {}", settings.session_id, args.config);

    let stdin = BufReader::new(tokio::io::stdin());
    run_console_game(&settings, stdin, std::io::stdout()).await?;

    Ok(())
}
