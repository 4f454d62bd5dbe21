mod broadcaster;
mod scheduler;

pub mod tictactoe;

pub use broadcaster::GameBroadcaster;
pub use scheduler::{BotScheduler, TimerHandle, TokioBotScheduler};
