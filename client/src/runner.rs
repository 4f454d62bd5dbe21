use std::io::Write;

use common::games::TokioBotScheduler;
use common::games::tictactoe::{TicTacToeSession, TicTacToeSessionSettings};
use common::log;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::command::{ClientCommand, HELP_TEXT};
use crate::console_broadcaster::ConsoleBroadcaster;

/// Drives one console session until `quit` or end of input. A bot move that is
/// already scheduled when input ends is still played before returning.
pub async fn run_console_game<R, W>(
    settings: &TicTacToeSessionSettings,
    input: R,
    out: W,
) -> Result<W, String>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let (scheduler, mut fired_rx) = TokioBotScheduler::channel();
    let mut session = TicTacToeSession::new(settings, ConsoleBroadcaster::new(out), scheduler);
    let mut lines = input.lines();
    let mut input_closed = false;

    session.broadcaster_mut().print_hint(HELP_TEXT);
    session.start();

    loop {
        if session.broadcaster().write_failed() {
            return Err("Console output is closed".to_string());
        }

        if input_closed && session.pending_bot_move().is_none() {
            break;
        }

        tokio::select! {
            line = lines.next_line(), if !input_closed => {
                let line = line.map_err(|e| format!("Failed to read input: {}", e))?;
                let Some(line) = line else {
                    input_closed = true;
                    continue;
                };

                match ClientCommand::parse(&line) {
                    Ok(ClientCommand::PlaceMark { index }) => session.on_cell_activated(index),
                    Ok(ClientCommand::Reset) => session.on_reset_requested(),
                    Ok(ClientCommand::PlayAgainstBot) => session.on_bot_mode_requested(),
                    Ok(ClientCommand::PlayTwoHuman) => session.on_two_player_mode_requested(),
                    Ok(ClientCommand::Help) => session.broadcaster_mut().print_hint(HELP_TEXT),
                    Ok(ClientCommand::Quit) => break,
                    Err(e) => {
                        log!("[session:{}] {}", session.session_id(), e);
                        session.broadcaster_mut().print_hint(&format!("{} (h for help)", e));
                    }
                }
            }
            Some(handle) = fired_rx.recv() => {
                session.on_bot_timer_fired(handle);
            }
        }
    }

    log!("[session:{}] Finished", session.session_id());
    Ok(session.into_broadcaster().into_out())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::time::Duration;
    use common::games::tictactoe::GameMode;

    fn settings(mode: GameMode) -> TicTacToeSessionSettings {
        TicTacToeSessionSettings {
            session_id: "console-test".to_string(),
            mode,
            bot_delay: Duration::from_millis(5),
        }
    }

    async fn run(mode: GameMode, script: &str) -> String {
        let out = run_console_game(&settings(mode), script.as_bytes(), Vec::new())
            .await
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_two_players_play_to_a_win() {
        let text = run(GameMode::TwoHuman, "0\n3\n1\n4\n2\n5\n").await;

        assert!(text.contains(">> It's your turn, player 2"));
        assert!(text.contains("X has won!"));
        assert!(text.ends_with(" X | X | X\n---+---+---\n O | O | 5\n---+---+---\n 6 | 7 | 8\n>> X has won!\n*** X has won! *** (r to play again)\n"), "{}", text);
    }

    #[tokio::test]
    async fn test_bot_answers_before_input_ends() {
        let text = run(GameMode::HumanVsBot, "0\n").await;

        assert!(text.contains(">> Bot's turn"));
        assert!(text.ends_with(">> It's your turn, player 1\n"), "{}", text);
        assert!(text.contains(" X | 1 | 2\n---+---+---\n 3 | O | 5"));
    }

    #[tokio::test]
    async fn test_bot_mode_command_switches_mode() {
        let text = run(GameMode::TwoHuman, "b\n4\n").await;

        assert!(text.contains(">> You're playing against the Bot!"));
        assert!(text.contains(" O | 1 | 2\n---+---+---\n 3 | X | 5"));
    }

    #[tokio::test]
    async fn test_quit_stops_reading() {
        let text = run(GameMode::TwoHuman, "q\n4\n").await;
        assert!(!text.contains(" 3 | X | 5"));
    }

    #[tokio::test]
    async fn test_unknown_command_prints_hint() {
        let text = run(GameMode::TwoHuman, "dance\n").await;
        assert!(text.contains("Unknown command 'dance' (h for help)"));
    }

    #[tokio::test]
    async fn test_reset_command_restarts() {
        let text = run(GameMode::TwoHuman, "4\nr\n").await;
        assert!(text.ends_with(">> Restart? let's start with player 1 (X)!\n"), "{}", text);
    }

    struct ClosedOutput;

    impl Write for ClosedOutput {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "output closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_closed_output_ends_the_game() {
        let result = run_console_game(&settings(GameMode::TwoHuman), "4
0
".as_bytes(), ClosedOutput).await;
        assert_eq!(result.err(), Some("Console output is closed".to_string()));
    }
}
