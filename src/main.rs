//! sitebot — edit website content from a Telegram chat.
//!
//! Long-polls the Bot API and feeds each message through the command
//! router, one at a time. The router mutates content-data.json; photos are
//! staged under the upload directory for manual publishing.

use clap::Parser;
use sitebot_core::Config;
use sitebot_router::Router;
use sitebot_store::ContentStore;
use sitebot_telegram::{largest_photo, parse_command, BotApi, Message};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "sitebot",
    about = "Telegram bot that edits website content in content-data.json"
)]
struct Cli {
    /// Bot token (default: TELEGRAM_BOT_TOKEN env var)
    #[arg(long)]
    token: Option<String>,

    /// Comma-separated allowed user ids (default: AUTHORIZED_USER_IDS env
    /// var; empty grants access to everyone)
    #[arg(long)]
    allow: Option<String>,

    /// Content document path
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Directory for uploaded photos
    #[arg(long)]
    upload_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sitebot=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::resolve(cli.token, cli.allow, cli.data_file, cli.upload_dir)?;

    let store = ContentStore::new(&config.data_file);
    store.ensure_exists()?;

    let api = BotApi::new(&config.bot_token);
    info!(
        data_file = %config.data_file.display(),
        upload_dir = %config.upload_dir.display(),
        open_mode = config.allowed_users.is_empty(),
        "sitebot started"
    );

    let router = Router::new(config, store);
    run(api, router).await
}

/// Strictly sequential update loop: each message is handled to completion
/// before the next is taken, so document writes cannot race.
async fn run(api: BotApi, router: Router) -> anyhow::Result<()> {
    let mut offset = 0i64;
    loop {
        let updates = match api.get_updates(offset).await {
            Ok(updates) => updates,
            Err(e) => {
                warn!("getUpdates failed: {}", e);
                tokio::time::sleep(Duration::from_secs(3)).await;
                continue;
            }
        };

        for update in updates {
            offset = offset.max(update.update_id + 1);
            let Some(message) = update.message else {
                continue;
            };
            if let Err(e) = handle_message(&api, &router, &message).await {
                error!("update {} failed: {}", update.update_id, e);
                let _ = api
                    .send_message(
                        message.chat.id,
                        "\u{26a0}\u{fe0f} Something went wrong; the change was not saved.",
                    )
                    .await;
            }
        }
    }
}

async fn handle_message(api: &BotApi, router: &Router, message: &Message) -> anyhow::Result<()> {
    // Messages without a sender (channel posts) carry no caller identity
    let Some(from) = &message.from else {
        return Ok(());
    };
    let caller = from.id;

    if let Some(photo) = largest_photo(&message.photo) {
        // Only fetch the bytes for callers that pass authorization; the
        // router still owns the check (and the unauthorized reply).
        let reply = if router.config().is_authorized(caller) {
            let file = api.get_file(&photo.file_id).await?;
            let bytes = api.download(&file).await?;
            router.handle_photo(caller, &photo.file_id, &bytes)?
        } else {
            router.handle_photo(caller, &photo.file_id, &[])?
        };
        api.send_message(message.chat.id, &reply).await?;
        return Ok(());
    }

    let Some(text) = &message.text else {
        return Ok(());
    };
    // Plain (non-command) text is ignored
    let Some(cmd) = parse_command(text) else {
        return Ok(());
    };

    info!(caller, command = cmd.name, "dispatch");
    let reply = router.handle_command(caller, cmd.name, &cmd.args)?;
    api.send_message(message.chat.id, &reply).await?;
    Ok(())
}
