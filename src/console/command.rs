//! Parsing of interactive console commands.

/// One line of user input, interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Change the search term (empty clears the gallery).
    Search(String),
    /// Request the next page.
    More,
    /// Open the viewer on the item at this 0-based index.
    Open(usize),
    /// Close the viewer.
    Close,
    /// Print the current state again.
    Show,
    /// Print the command list.
    Help,
    /// Leave the program.
    Quit,
}

/// What: Interpret one line of console input.
///
/// Inputs:
/// - `line`: Raw line without its newline.
///
/// Output:
/// - `Some(Command)` for recognised input, `None` for blank lines or bad commands.
///
/// Details:
/// - Lines starting with `:` are commands; anything else is a search term.
/// - `:open N` takes the 1-based number shown in the listing.
#[must_use]
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let Some(rest) = trimmed.strip_prefix(':') else {
        return Some(Command::Search(trimmed.to_string()));
    };
    let mut parts = rest.split_whitespace();
    let cmd = parts.next().unwrap_or_default().to_ascii_lowercase();
    match cmd.as_str() {
        "more" | "m" => Some(Command::More),
        "open" | "o" => {
            let n = parts.next()?.parse::<usize>().ok()?;
            n.checked_sub(1).map(Command::Open)
        }
        "close" | "c" => Some(Command::Close),
        "clear" => Some(Command::Search(String::new())),
        "search" | "s" => Some(Command::Search(parts.collect::<Vec<_>>().join(" "))),
        "show" | "ls" => Some(Command::Show),
        "help" | "h" | "?" => Some(Command::Help),
        "quit" | "q" | "exit" => Some(Command::Quit),
        _ => None,
    }
}
