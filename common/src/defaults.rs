use std::time::Duration;

pub const DEFAULT_BOT_DELAY_MS: u32 = 500;
pub const DEFAULT_BOT_DELAY: Duration = Duration::from_millis(DEFAULT_BOT_DELAY_MS as u64);
pub const MAX_BOT_DELAY_MS: u32 = 10_000;
