/// All commands a player can issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Turn the top stock card onto the waste.
    Draw,
    /// Move the top `count` cards from one pile to another. Labels are passed
    /// through unvalidated; the engine resolves them.
    Move {
        source: String,
        destination: String,
        count: usize,
    },
    /// Undo the last move or draw.
    Undo,
    /// Give up and deal a new game.
    NewGame,
    /// Print help.
    Help,
    /// Quit the game.
    Quit,
}

/// Parse a single line of text input into a `Command`.
///
/// Syntax reference (command word is case-insensitive):
/// ```text
/// s                          -- Draw from stock
/// m <source> <dest> <count>  -- Move cards, e.g. `m c7 c3 2`
/// z                          -- Undo last move
/// new | n                    -- New game
/// quit | q                   -- Quit
/// help | h | ?               -- Help
/// ```
pub fn parse_command(input: &str) -> Result<Command, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }

    let tokens: Vec<&str> = input.split_whitespace().collect();
    let cmd = tokens[0].to_lowercase();

    match cmd.as_str() {
        "s" => Ok(Command::Draw),
        "m" => {
            if tokens.len() < 4 {
                return Err("Usage: m <source> <dest> <count>".to_string());
            }
            Ok(Command::Move {
                source: tokens[1].to_string(),
                destination: tokens[2].to_string(),
                count: parse_count(tokens[3])?,
            })
        }
        "z" => Ok(Command::Undo),
        "new" | "n" => Ok(Command::NewGame),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        "help" | "h" | "?" => Ok(Command::Help),
        _ => Err(format!("Unknown command '{}'. Type 'help' for help.", tokens[0])),
    }
}

fn parse_count(s: &str) -> Result<usize, String> {
    s.parse()
        .map_err(|_| format!("'{}' is not a valid card count", s))
}
