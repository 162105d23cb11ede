//! Discord client wiring and top-level event handling.

use std::error::Error as StdError;

use log::{debug, error, info};
use poise::{
    Framework, FrameworkOptions,
    serenity_prelude::{ClientBuilder, Context, FullEvent, GatewayIntents},
};

use crate::config::Config;
use crate::error::Result;
use crate::groq::GroqClient;
use crate::responder;

type EventResult = std::result::Result<(), Box<dyn StdError + Send + Sync>>;

struct Data {
    groq_client: GroqClient,
}

/// Run the Discord bot until the gateway closes or ctrl-c.
pub async fn run() -> Result<()> {
    info!("Initializing bot");
    let config = Config::from_env()?;

    debug!("Initializing Groq client");
    let groq_client = GroqClient::new(config.groq_api_key);

    debug!("Setting up gateway intents");
    let intents = GatewayIntents::non_privileged() | GatewayIntents::MESSAGE_CONTENT;

    debug!("Building framework");
    let framework = Framework::builder()
        .options(FrameworkOptions {
            event_handler: |ctx, event, _framework, data| Box::pin(event_handler(ctx, event, data)),
            ..Default::default()
        })
        .setup(move |_ctx, ready, _framework| {
            Box::pin(async move {
                info!("Logged in as {}! Brutal LuperlyAI is online.", ready.user.tag());
                Ok(Data { groq_client })
            })
        })
        .build();

    debug!("Creating Discord client");
    let mut client = ClientBuilder::new(config.discord_token, intents)
        .framework(framework)
        .await?;

    info!("Starting Discord client");

    tokio::select! {
        result = client.start() => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received, shutting down...");
        }
    }

    Ok(())
}

// Errors from a single message are logged and dropped; nothing thrown
// while handling one message may take down the process.
async fn event_handler(ctx: &Context, event: &FullEvent, data: &Data) -> EventResult {
    if let FullEvent::Message { new_message } = event
        && let Err(e) = responder::handle_message(ctx, new_message, &data.groq_client).await
    {
        error!(
            "Failed to handle message {} from {}: {}",
            new_message.id,
            new_message.author.tag(),
            e
        );
    }
    Ok(())
}
