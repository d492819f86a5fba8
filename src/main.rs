mod bottom;
mod commands;
mod config;
mod error;
mod render;
mod services;

use std::sync::Arc;

use serenity::{
    async_trait,
    client::{Client, Context, EventHandler},
    framework::standard::StandardFramework,
    model::gateway::Ready,
    prelude::GatewayIntents,
};
use tokio::signal;
use uuid::Uuid;

use crate::commands::{BASE64_GROUP, FUN_GROUP};
use crate::config::{load_bot_config, BotConfigKey};
use crate::services::{Services, ServicesKey};

// Event handler implementation
struct Handler;

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _: Context, ready: Ready) {
        log::info!("✅ Bot connected as {}! (ID: {})", ready.user.name, ready.user.id);
        log::info!("📊 Connected to {} guilds", ready.guilds.len());
    }
}

#[tokio::main]
async fn main() {
    // Configuration decides the log level, so it is read before the logger exists.
    let (config, config_path) = match load_bot_config() {
        Ok(loaded) => loaded,
        Err(error) => {
            eprintln!("❌ Failed to load botconfig.txt: {}", error);
            eprintln!("Create a botconfig.txt file in the project root with: DISCORD_TOKEN=your_token_here and PREFIX=^");
            return;
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_level.as_str()))
        .format_timestamp_secs()
        .init();

    log::info!("✅ Configuration loaded from {}", config_path);
    log::info!("🤖 Starting bot with prefix: '{}'", config.prefix);

    let framework = StandardFramework::new()
        .configure(|c| {
            c.prefix(&config.prefix)
                .case_insensitivity(true)
                .with_whitespace(true)
        })
        .before(|_ctx, msg, command_name| {
            Box::pin(async move {
                log::info!(
                    "[{}] Command '{}' invoked by {} ({})",
                    Uuid::new_v4(),
                    command_name,
                    msg.author.tag(),
                    msg.author.id
                );
                true
            })
        })
        .after(|ctx, msg, command_name, result| {
            Box::pin(async move {
                if let Err(e) = result {
                    log::error!(
                        "❌ Command '{}' failed for user {} ({}): {:?}",
                        command_name,
                        msg.author.name,
                        msg.author.id,
                        e
                    );
                    if let Err(send_error) = msg.reply(ctx, format!("❌ {}", e)).await {
                        log::error!("Failed to report error for '{}': {}", command_name, send_error);
                    }
                }
            })
        })
        .unrecognised_command(|_ctx, msg, unrecognized_command_name| {
            Box::pin(async move {
                log::debug!(
                    "❓ Unrecognized command '{}' attempted by user {} ({})",
                    unrecognized_command_name,
                    msg.author.name,
                    msg.author.id
                );
            })
        })
        .group(&FUN_GROUP)
        .group(&BASE64_GROUP);

    // Reactions and custom emojis come with the non-privileged set.
    let intents = GatewayIntents::non_privileged() | GatewayIntents::MESSAGE_CONTENT;

    let mut client = match Client::builder(&config.token, intents)
        .event_handler(Handler)
        .framework(framework)
        .await
    {
        Ok(client) => client,
        Err(e) => {
            log::error!("❌ Error creating Discord client: {:?}", e);
            eprintln!("Check your token in botconfig.txt file");
            return;
        }
    };

    {
        let mut data = client.data.write().await;
        data.insert::<ServicesKey>(Arc::new(Services::from_config(&config)));
        data.insert::<BotConfigKey>(config);
    }

    log::info!("🚀 Bot is running... press Ctrl+C to stop");
    tokio::select! {
        _ = signal::ctrl_c() => {
            log::info!("⏹️ Stopping bot gracefully...");
        }
        result = client.start() => {
            if let Err(why) = result {
                log::error!("❌ Client error: {:?}", why);
            }
        }
    }

    client.shard_manager.lock().await.shutdown_all().await;
    log::info!("✅ Bot stopped");
}
