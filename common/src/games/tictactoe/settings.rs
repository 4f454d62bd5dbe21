use std::time::Duration;

use crate::defaults::DEFAULT_BOT_DELAY;
use crate::id_generator::generate_session_id;
use super::types::GameMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeSessionSettings {
    pub session_id: String,
    pub mode: GameMode,
    pub bot_delay: Duration,
}

impl TicTacToeSessionSettings {
    pub fn new(mode: GameMode, bot_delay: Duration) -> Self {
        Self {
            session_id: generate_session_id(),
            mode,
            bot_delay,
        }
    }
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self::new(GameMode::default(), DEFAULT_BOT_DELAY)
    }
}
