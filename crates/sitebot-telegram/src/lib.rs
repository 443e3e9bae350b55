//! Telegram transport adapter: a thin Bot API client plus the wire types
//! and command-text parsing the update loop needs.

pub mod client;
pub mod parse;
pub mod types;

pub use client::{ApiError, BotApi};
pub use parse::{largest_photo, parse_command, ParsedCommand};
pub use types::{Chat, Message, PhotoSize, TgFile, Update, User};
