use std::time::Duration;

pub(crate) use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::defaults::{DEFAULT_BOT_DELAY_MS, MAX_BOT_DELAY_MS};
use common::games::tictactoe::{GameMode, TicTacToeSessionSettings};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "tictactoe_client_config.yaml";

pub fn get_config_manager(file_path: &str) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub game: GameConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub mode: GameMode,
    pub bot_delay_ms: u32,
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(format!("bot_delay_ms must not exceed {}", MAX_BOT_DELAY_MS));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::TwoHuman,
            bot_delay_ms: DEFAULT_BOT_DELAY_MS,
        }
    }
}

impl From<&GameConfig> for TicTacToeSessionSettings {
    fn from(config: &GameConfig) -> Self {
        TicTacToeSessionSettings::new(config.mode, Duration::from_millis(config.bot_delay_ms as u64))
    }
}
