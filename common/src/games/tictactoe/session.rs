use std::time::Duration;

use crate::games::{BotScheduler, GameBroadcaster, TimerHandle};
use crate::log;
use super::bot_controller::{BotInput, calculate_move};
use super::game_state::TicTacToeGameState;
use super::settings::TicTacToeSessionSettings;
use super::types::{Controller, GameMode, Mark, MoveOutcome, PlayerRole};

pub const RESTART_TEXT: &str = "Restart? let's start with player 1 (X)!";
pub const BOT_MODE_TEXT: &str = "You're playing against the Bot!";
pub const TWO_PLAYER_MODE_TEXT: &str = "Two players: player 1 (X) starts";
pub const DRAW_TEXT: &str = "It's a draw!";

pub fn turn_text(role: PlayerRole) -> &'static str {
    match role {
        PlayerRole::Player1 => "It's your turn, player 1",
        PlayerRole::Player2 => "It's your turn, player 2",
        PlayerRole::Bot => "Bot's turn",
    }
}

pub fn win_text(mark: Mark) -> String {
    format!("{} has won!", mark)
}

fn mode_text(mode: GameMode) -> &'static str {
    match mode {
        GameMode::TwoHuman => TWO_PLAYER_MODE_TEXT,
        GameMode::HumanVsBot => BOT_MODE_TEXT,
    }
}

/// Routes presentation events into the game state and game state outcomes
/// back out to the presentation. Owns the only pending bot timer.
pub struct TicTacToeSession<B: GameBroadcaster, S: BotScheduler> {
    session_id: String,
    game_state: TicTacToeGameState,
    bot_delay: Duration,
    broadcaster: B,
    scheduler: S,
    pending_bot_move: Option<TimerHandle>,
}

impl<B: GameBroadcaster, S: BotScheduler> TicTacToeSession<B, S> {
    pub fn new(settings: &TicTacToeSessionSettings, broadcaster: B, scheduler: S) -> Self {
        Self {
            session_id: settings.session_id.clone(),
            game_state: TicTacToeGameState::new(settings.mode),
            bot_delay: settings.bot_delay,
            broadcaster,
            scheduler,
            pending_bot_move: None,
        }
    }

    pub fn start(&mut self) {
        log!("[session:{}] Started in {:?} mode", self.session_id, self.game_state.mode());
        self.broadcaster.render_board_cleared();
        self.broadcaster.render_status(mode_text(self.game_state.mode()));
    }

    pub fn on_cell_activated(&mut self, index: usize) {
        self.apply_move(Controller::Human, index);
    }

    pub fn on_reset_requested(&mut self) {
        self.cancel_pending_bot_move();
        self.game_state.reset();
        log!("[session:{}] Reset", self.session_id);
        self.broadcaster.render_board_cleared();
        self.broadcaster.render_status(RESTART_TEXT);
    }

    pub fn on_bot_mode_requested(&mut self) {
        self.switch_mode(GameMode::HumanVsBot);
    }

    pub fn on_two_player_mode_requested(&mut self) {
        self.switch_mode(GameMode::TwoHuman);
    }

    pub fn on_bot_timer_fired(&mut self, handle: TimerHandle) {
        if self.pending_bot_move != Some(handle) {
            log!("[session:{}] Ignoring stale {}", self.session_id, handle);
            return;
        }
        self.pending_bot_move = None;

        if !self.game_state.is_bot_turn() {
            return;
        }

        let Some(bot_input) = BotInput::from_game_state(&self.game_state) else {
            return;
        };

        match calculate_move(&bot_input) {
            Some(index) => {
                log!("[session:{}] Bot picks cell {}", self.session_id, index);
                self.apply_move(Controller::Bot, index);
            }
            None => {
                log!("[session:{}] Bot found no free cell", self.session_id);
            }
        }
    }

    pub fn game_state(&self) -> &TicTacToeGameState {
        &self.game_state
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn pending_bot_move(&self) -> Option<TimerHandle> {
        self.pending_bot_move
    }

    pub fn broadcaster(&self) -> &B {
        &self.broadcaster
    }

    pub fn broadcaster_mut(&mut self) -> &mut B {
        &mut self.broadcaster
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn into_broadcaster(self) -> B {
        self.broadcaster
    }

    fn switch_mode(&mut self, mode: GameMode) {
        self.cancel_pending_bot_move();
        self.game_state.set_mode(mode);
        log!("[session:{}] Switched to {:?} mode", self.session_id, mode);
        self.broadcaster.render_board_cleared();
        self.broadcaster.render_status(mode_text(mode));
    }

    fn apply_move(&mut self, controller: Controller, index: usize) {
        let mark = self.game_state.current_mark();

        let outcome = match self.game_state.place_mark(controller, index) {
            Ok(outcome) => outcome,
            Err(e) => {
                log!("[session:{}] {:?} move at {} ignored: {}", self.session_id, controller, index, e);
                return;
            }
        };

        self.broadcaster.render_cell(index, mark);

        match outcome {
            MoveOutcome::Won(winner) => {
                if let Some(line) = self.game_state.winning_line() {
                    log!("[session:{}] {} won on cells {:?}", self.session_id, winner, line.cells);
                }
                self.broadcaster.render_status(&win_text(winner));
                self.broadcaster.notify_winner(winner);
            }
            MoveOutcome::Draw => {
                log!("[session:{}] Draw", self.session_id);
                self.broadcaster.render_status(DRAW_TEXT);
                self.broadcaster.notify_draw();
            }
            MoveOutcome::TurnPassed { .. } => {
                self.broadcaster.render_status(turn_text(self.game_state.current_role()));
                if self.game_state.is_bot_turn() {
                    self.schedule_bot_move();
                }
            }
        }
    }

    fn schedule_bot_move(&mut self) {
        self.cancel_pending_bot_move();
        let handle = self.scheduler.schedule_delayed(self.bot_delay);
        self.pending_bot_move = Some(handle);
    }

    fn cancel_pending_bot_move(&mut self) {
        if let Some(handle) = self.pending_bot_move.take() {
            self.scheduler.cancel_delayed(handle);
        }
    }
}
