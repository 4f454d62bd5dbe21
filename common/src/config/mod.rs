//! YAML-backed settings for a tic-tac-toe front-end: where the text lives,
//! how it is parsed, and the checks a loaded value must pass.

mod config_content_provider;
mod config_manager;
mod config_serializer;

pub use config_content_provider::{ConfigContentProvider, FileContentConfigProvider};
pub use config_manager::ConfigManager;
pub use config_serializer::{ConfigSerializer, YamlConfigSerializer};

/// Range checks run on every config that is loaded or saved, e.g. the bot
/// delay ceiling. The error text is shown to the player as is.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
