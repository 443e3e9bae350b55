//! The field-update command table.
//!
//! Every mutating command follows the same shape — /<name> <id> <value...>
//! writes one field of one category — so the set of commands is data, not
//! code. The `update_deal_*` names are aliases kept for the older bot's
//! muscle memory; they write to the same categories as the short forms.

use crate::document;

#[derive(Clone, Copy, Debug)]
pub struct FieldCommand {
    /// Canonical command name without the leading slash.
    pub name: &'static str,
    /// Legacy alias accepted alongside the canonical name.
    pub alias: Option<&'static str>,
    /// Category this command writes into.
    pub category: &'static str,
    /// Display noun for confirmations ("Image 'deal-image-1' updated!").
    pub noun: &'static str,
    /// Argument hint for the usage line.
    pub arg_hint: &'static str,
}

impl FieldCommand {
    /// Usage line naming the command as the caller typed it.
    pub fn usage(&self, invoked: &str) -> String {
        format!("Usage: /{} {}", invoked, self.arg_hint)
    }

    pub fn lookup(name: &str) -> Option<&'static FieldCommand> {
        FIELD_COMMANDS
            .iter()
            .find(|c| c.name == name || c.alias == Some(name))
    }
}

pub const FIELD_COMMANDS: &[FieldCommand] = &[
    FieldCommand {
        name: "update_image",
        alias: Some("update_deal_image"),
        category: document::CAT_IMAGES,
        noun: "Image",
        arg_hint: "<id> <image_url>",
    },
    FieldCommand {
        name: "update_title",
        alias: Some("update_deal_title"),
        category: document::CAT_TITLES,
        noun: "Title",
        arg_hint: "<id> <title_text>",
    },
    FieldCommand {
        name: "update_desc",
        alias: Some("update_deal_desc"),
        category: document::CAT_DESCRIPTIONS,
        noun: "Description",
        arg_hint: "<id> <description_text>",
    },
    FieldCommand {
        name: "update_price",
        alias: None,
        category: document::CAT_PRICES,
        noun: "Price",
        arg_hint: "<id> <price>",
    },
    FieldCommand {
        name: "update_review",
        alias: None,
        category: document::CAT_REVIEW_CONTENT,
        noun: "Review content",
        arg_hint: "<id> <html>",
    },
];
