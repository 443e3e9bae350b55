//! The command router — maps incoming commands to document operations.
//!
//! Every handler follows the same template: authorization first, then
//! argument validation, then one load-modify-save against the store, then
//! a reply. The router keeps no state between invocations; each command is
//! an independent transaction against the document file.

use sitebot_core::{Config, FieldCommand, Result, FIELD_COMMANDS};
use sitebot_store::ContentStore;
use std::fs;
use tracing::info;

const UNAUTHORIZED: &str = "\u{274c} Unauthorized";
const PUBLISH_HINT: &str = "\u{1f4a1} Publish content-data.json to make it live";

pub struct Router {
    config: Config,
    store: ContentStore,
}

impl Router {
    pub fn new(config: Config, store: ContentStore) -> Self {
        Self { config, store }
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Dispatch one parsed command. The returned string is the reply to
    /// send; only persistence faults surface as errors.
    pub fn handle_command(&self, caller: i64, name: &str, args: &[&str]) -> Result<String> {
        if let Some(cmd) = FieldCommand::lookup(name) {
            return self.handle_field_update(caller, name, cmd, args);
        }

        match name {
            // No auth: also how users discover their id for the allow-list
            "start" | "help" => Ok(self.help_text(caller)),
            "list" => {
                if !self.config.is_authorized(caller) {
                    return Ok(UNAUTHORIZED.into());
                }
                self.list()
            }
            "status" => {
                if !self.config.is_authorized(caller) {
                    return Ok(UNAUTHORIZED.into());
                }
                self.status()
            }
            _ => Ok(format!("Unknown command /{}. Try /help.", name)),
        }
    }

    /// Persist an uploaded photo's bytes under the upload directory. The
    /// content document is not touched; linking the image is a separate,
    /// manual /update_image call.
    pub fn handle_photo(&self, caller: i64, file_id: &str, bytes: &[u8]) -> Result<String> {
        if !self.config.is_authorized(caller) {
            return Ok(UNAUTHORIZED.into());
        }

        fs::create_dir_all(&self.config.upload_dir)?;
        let path = self.config.upload_dir.join(format!("{}.jpg", file_id));
        fs::write(&path, bytes)?;
        info!(file = %path.display(), size = bytes.len(), "photo saved");

        Ok(format!(
            "\u{1f4f8} Photo saved!\n\n\
             \u{1f4c1} Location: {}\n\n\
             Next steps:\n\
             1. Upload it to your site's image host\n\
             2. Copy the public URL\n\
             3. Run: /update_image <id> <URL>",
            path.display()
        ))
    }

    fn handle_field_update(
        &self,
        caller: i64,
        invoked: &str,
        cmd: &FieldCommand,
        args: &[&str],
    ) -> Result<String> {
        if !self.config.is_authorized(caller) {
            return Ok(UNAUTHORIZED.into());
        }
        if args.len() < 2 {
            return Ok(cmd.usage(invoked));
        }

        let id = args[0];
        // Remaining tokens re-joined with single spaces
        let value = args[1..].join(" ");
        self.store.set_field(cmd.category, id, &value)?;
        info!(command = invoked, category = cmd.category, id, "field updated");

        Ok(format!(
            "\u{2705} {} '{}' updated!\n\n\u{1f4dd} New: {}\n\n{}",
            cmd.noun, id, value, PUBLISH_HINT
        ))
    }

    /// Enumerate every element id, grouped by category. Derived from the
    /// live document so implicitly created categories show up too.
    fn list(&self) -> Result<String> {
        let doc = self.store.load()?;
        let mut out = String::from("\u{1f4cb} Updatable elements:\n");
        for (category, fields) in doc.categories() {
            out.push_str(&format!("\n{}:\n", category));
            for id in fields.keys() {
                out.push_str(&format!("  \u{2022} {}\n", id));
            }
        }
        Ok(out)
    }

    fn status(&self) -> Result<String> {
        let doc = self.store.load()?;
        let mut out = String::from("\u{1f4ca} Content status:\n\n");
        for (category, fields) in doc.categories() {
            out.push_str(&format!("{}: {} fields\n", category, fields.len()));
        }
        out.push_str(&format!("\nLast updated: {}", self.last_updated()));
        Ok(out)
    }

    fn last_updated(&self) -> String {
        fs::metadata(self.store.path())
            .and_then(|m| m.modified())
            .map(|t| {
                chrono::DateTime::<chrono::Local>::from(t)
                    .format("%Y-%m-%d %H:%M")
                    .to_string()
            })
            .unwrap_or_else(|_| "never".into())
    }

    fn help_text(&self, caller: i64) -> String {
        let mut out = String::from(
            "\u{1f31f} Welcome to the site content manager!\n\n\
             Manage your website content straight from this chat.\n\n\
             \u{1f4dd} Field commands:\n",
        );
        for cmd in FIELD_COMMANDS {
            out.push_str(&format!("/{} {}\n", cmd.name, cmd.arg_hint));
            if let Some(alias) = cmd.alias {
                out.push_str(&format!("  (also /{})\n", alias));
            }
        }
        out.push_str(&format!(
            "\n\u{1f4cb} Other commands:\n\
             /list - show all element ids\n\
             /status - show content stats\n\
             /help - show this message\n\n\
             You can also send a photo to stage it for upload.\n\n\
             Your user id: {}\n\n{}",
            caller, PUBLISH_HINT
        ));
        out
    }
}
