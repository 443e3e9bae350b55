//! Command-text parsing and photo variant selection.

use crate::types::PhotoSize;

/// A slash command as delivered to the router: bare name plus
/// whitespace-tokenized arguments. Runs of whitespace between tokens
/// collapse; the router re-joins value tokens with single spaces.
#[derive(Debug, PartialEq, Eq)]
pub struct ParsedCommand<'a> {
    pub name: &'a str,
    pub args: Vec<&'a str>,
}

/// Parse a message text into a command, if it is one. Group-chat syntax
/// (`/cmd@BotName`) is normalized to the bare command name.
pub fn parse_command(text: &str) -> Option<ParsedCommand<'_>> {
    let rest = text.trim().strip_prefix('/')?;
    let mut tokens = rest.split_whitespace();
    let first = tokens.next()?;
    let name = first.split('@').next().unwrap_or(first);
    if name.is_empty() {
        return None;
    }
    Some(ParsedCommand {
        name,
        args: tokens.collect(),
    })
}

/// Telegram sends several resolutions of one photo; the bot keeps only the
/// largest.
pub fn largest_photo(photos: &[PhotoSize]) -> Option<&PhotoSize> {
    photos
        .iter()
        .max_by_key(|p| (p.width as u64) * (p.height as u64))
}
