//! Mention stripping and canned-response selection.

use log::debug;
use poise::serenity_prelude::UserId;

use super::table::CannedResponse;

/// Removes every occurrence of the bot's mention token from the message
/// text and trims surrounding whitespace. Both the plain `<@id>` and the
/// nickname `<@!id>` forms are handled. Original casing is preserved.
pub fn strip_bot_mentions(content: &str, bot_id: UserId) -> String {
    content
        .replace(&format!("<@{bot_id}>"), "")
        .replace(&format!("<@!{bot_id}>"), "")
        .trim()
        .to_string()
}

/// Returns the first table entry whose trigger is a substring of the
/// lower-cased text, if any. Table order wins when several triggers occur.
pub fn select_canned(table: &'static [CannedResponse], text: &str) -> Option<&'static str> {
    let lowered = text.to_lowercase();
    for entry in table {
        if lowered.contains(entry.trigger) {
            debug!("Canned response hit: trigger '{}'", entry.trigger);
            return Some(entry.reply);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responder::table::canned_responses;

    const BOT_ID: UserId = UserId::new(1234);

    #[test]
    fn strips_plain_mention_token() {
        let cleaned = strip_bot_mentions("<@1234> my work.ink blocked again", BOT_ID);
        assert_eq!(cleaned, "my work.ink blocked again");
    }

    #[test]
    fn strips_nickname_mention_token() {
        let cleaned = strip_bot_mentions("<@!1234> extender load", BOT_ID);
        assert_eq!(cleaned, "extender load");
    }

    #[test]
    fn strips_every_occurrence_and_trims() {
        let cleaned = strip_bot_mentions("  <@1234> hello <@!1234>  ", BOT_ID);
        assert_eq!(cleaned, "hello");
    }

    #[test]
    fn other_user_mentions_are_kept() {
        let cleaned = strip_bot_mentions("<@1234> ask <@9999> instead", BOT_ID);
        assert_eq!(cleaned, "ask <@9999> instead");
    }

    #[test]
    fn preserves_original_casing() {
        let cleaned = strip_bot_mentions("<@1234> My Work.ink Blocked", BOT_ID);
        assert_eq!(cleaned, "My Work.ink Blocked");
    }

    #[test]
    fn matches_trigger_as_substring() {
        let reply = select_canned(canned_responses(), "my work.ink blocked again")
            .expect("expected match");
        assert!(reply.contains("Clear cookies"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let reply =
            select_canned(canned_responses(), "WORK.INK BLOCKED").expect("expected match");
        assert!(reply.contains("Clear cookies"));
    }

    #[test]
    fn first_defined_trigger_wins() {
        // Both triggers present; "manifest error" comes first in the table.
        let text = "work.ink blocked after the manifest error";
        let reply = select_canned(canned_responses(), text).expect("expected match");
        assert!(reply.contains("confused potato"));
    }

    #[test]
    fn no_trigger_returns_none() {
        assert!(select_canned(canned_responses(), "it's just not working").is_none());
    }

    #[test]
    fn empty_text_returns_none() {
        assert!(select_canned(canned_responses(), "").is_none());
    }
}
