use crate::games::tictactoe::Mark;

/// Presentation side of a session. Every call reflects a state change that
/// already happened in the engine.
pub trait GameBroadcaster {
    fn render_cell(&mut self, index: usize, mark: Mark);

    fn render_board_cleared(&mut self);

    fn render_status(&mut self, text: &str);

    fn notify_winner(&mut self, mark: Mark);

    fn notify_draw(&mut self);
}
