use common::games::tictactoe::CELL_COUNT;

pub const HELP_TEXT: &str = "Commands: 0-8 place a mark, r reset, b play against the bot, p two players, h help, q quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCommand {
    PlaceMark { index: usize },
    Reset,
    PlayAgainstBot,
    PlayTwoHuman,
    Help,
    Quit,
}

impl ClientCommand {
    pub fn parse(line: &str) -> Result<Self, String> {
        let input = line.trim().to_ascii_lowercase();

        if let Ok(index) = input.parse::<usize>() {
            if index < CELL_COUNT {
                return Ok(ClientCommand::PlaceMark { index });
            }
            return Err(format!("Cell {} does not exist, use 0-{}", index, CELL_COUNT - 1));
        }

        match input.as_str() {
            "r" | "reset" => Ok(ClientCommand::Reset),
            "b" | "bot" => Ok(ClientCommand::PlayAgainstBot),
            "p" | "pvp" => Ok(ClientCommand::PlayTwoHuman),
            "h" | "help" | "?" => Ok(ClientCommand::Help),
            "q" | "quit" | "exit" => Ok(ClientCommand::Quit),
            "" => Err("Empty command".to_string()),
            other => Err(format!("Unknown command '{}'", other)),
        }
    }
}
