//! Per-message dispatch policy for bot mentions.

use log::{debug, error, info};
use poise::serenity_prelude::{Context, Message as SerenityMessage, UserId};

use crate::error::Result;
use crate::groq::ChatCompleter;

use super::matching::{select_canned, strip_bot_mentions};
use super::table::canned_responses;

/// Sent when the completion call fails for any reason.
pub const FALLBACK_REPLY: &str =
    "Even I can't deal with this nonsense right now. Try not to break anything else. \u{1F624}";

// Discord rejects messages over 2000 characters (standard users).
const MAX_REPLY_CHARS: usize = 2000;

/// Outcome of the pure dispatch step for one message.
#[derive(Debug, PartialEq, Eq)]
enum Dispatch {
    /// Not addressed to the bot; no reply.
    Ignore,
    /// A trigger matched; reply with its canned text, no remote call.
    Canned(&'static str),
    /// No trigger matched; forward the cleaned text to the completion API.
    /// Original casing is preserved, lower-casing is matching-only.
    Forward(String),
}

fn dispatch(author_is_bot: bool, mentions_bot: bool, bot_id: UserId, content: &str) -> Dispatch {
    if author_is_bot || !mentions_bot {
        return Dispatch::Ignore;
    }

    let cleaned = strip_bot_mentions(content, bot_id);
    match select_canned(canned_responses(), &cleaned) {
        Some(reply) => Dispatch::Canned(reply),
        None => Dispatch::Forward(cleaned),
    }
}

async fn complete_or_fallback<C: ChatCompleter>(groq: &C, user_text: &str) -> String {
    match groq.complete(user_text).await {
        Ok(reply) => reply,
        Err(e) => {
            error!("Groq API error: {}", e);
            FALLBACK_REPLY.to_string()
        }
    }
}

fn clamp_reply(text: &str) -> &str {
    match text.char_indices().nth(MAX_REPLY_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Handle one inbound message: zero or one reply, at most one remote call.
pub async fn handle_message<C: ChatCompleter>(
    ctx: &Context,
    new_message: &SerenityMessage,
    groq: &C,
) -> Result<()> {
    // The cached id is only populated once the session is ready; before
    // that no mention can match and the message is dropped.
    let bot_id = ctx.cache.current_user().id;

    let action = dispatch(
        new_message.author.bot,
        new_message.mentions_user_id(bot_id),
        bot_id,
        &new_message.content,
    );

    match action {
        Dispatch::Ignore => Ok(()),
        Dispatch::Canned(reply) => {
            new_message.reply(&ctx.http, reply).await?;
            info!(
                "Sent canned response to {} in channel {}",
                new_message.author.tag(),
                new_message.channel_id
            );
            Ok(())
        }
        Dispatch::Forward(user_text) => {
            // Show typing while the completion call is in flight.
            if let Err(e) = new_message.channel_id.broadcast_typing(&ctx.http).await {
                debug!("Failed to broadcast typing indicator: {}", e);
            }

            let reply = complete_or_fallback(groq, &user_text).await;
            new_message.reply(&ctx.http, clamp_reply(&reply)).await?;
            info!(
                "Replied to {} in channel {}: {}",
                new_message.author.tag(),
                new_message.channel_id,
                reply
            );
            Ok(())
        }
    }
}
