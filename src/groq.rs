//! Groq chat-completion client (OpenAI-compatible endpoint).

use std::future::Future;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{BotError, Result};

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

const MODEL: &str = "llama-3.3-70b-specdec";

/// Substituted when a successful response carries no usable text.
pub const DEFAULT_REPLY: &str = "Even I can't believe how clueless you are.";

const SYSTEM_PROMPT: &str = "\
You are LuperlyAI, a brutally mean support bot for the Luperly extension.
Your style:
- Roast users for typos, stupidity, or laziness.
- Be sarcastic and sassy.
- Still give technical help, but mock them while doing it.
- Never answer unrelated questions politely. Redirect them mockingly.
Examples:
User: 'My Work.ink blocked'
AI: 'Wow, you broke it again. Clear cookies or go incognito, maybe try using a brain next time.'
User: 'It\u{2019}s not working'
AI: 'Oh really? Which part of \u{2018}install it correctly\u{2019} did you not understand?'
";

/// Role of a message in the completion exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: MessageRole,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// One-shot chat completion: persona plus a single user message.
///
/// Abstracted as a trait so the message handler's fallback policy can be
/// exercised without a live endpoint.
pub trait ChatCompleter {
    fn complete(&self, user_text: &str) -> impl Future<Output = Result<String>> + Send;
}

pub struct GroqClient {
    api_key: String,
    client: reqwest::Client,
}

impl GroqClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            client: reqwest::Client::new(),
        }
    }
}

impl ChatCompleter for GroqClient {
    async fn complete(&self, user_text: &str) -> Result<String> {
        debug!("Sending completion request to Groq");

        let request = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: MessageRole::System,
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: MessageRole::User,
                    content: user_text,
                },
            ],
        };

        let response = self
            .client
            .post(GROQ_API_URL)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .text()
                .await
                .unwrap_or_else(|e| format!("Failed to read error response: {}", e));
            return Err(BotError::GroqApi { status, message });
        }

        let body = response.text().await?;
        let api_response: ChatResponse =
            serde_json::from_str(&body).map_err(|e| BotError::GroqResponse(e.to_string()))?;

        debug!("Received completion response from Groq");
        Ok(reply_text(api_response))
    }
}

/// Extracts the first choice's text, or the fixed default line when the
/// response has no choices, a null content, or an empty string.
fn reply_text(response: ChatResponse) -> String {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| DEFAULT_REPLY.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(body: &str) -> ChatResponse {
        serde_json::from_str(body).expect("expected valid response body")
    }

    #[test]
    fn extracts_first_choice_content() {
        let response =
            decode(r#"{"choices":[{"message":{"content":"stop whining"}}]}"#);
        assert_eq!(reply_text(response), "stop whining");
    }

    #[test]
    fn later_choices_are_ignored() {
        let response = decode(
            r#"{"choices":[{"message":{"content":"first"}},{"message":{"content":"second"}}]}"#,
        );
        assert_eq!(reply_text(response), "first");
    }

    #[test]
    fn empty_choices_yield_default_line() {
        let response = decode(r#"{"choices":[]}"#);
        assert_eq!(reply_text(response), DEFAULT_REPLY);
    }

    #[test]
    fn missing_choices_field_yields_default_line() {
        let response = decode("{}");
        assert_eq!(reply_text(response), DEFAULT_REPLY);
    }

    #[test]
    fn null_content_yields_default_line() {
        let response = decode(r#"{"choices":[{"message":{"content":null}}]}"#);
        assert_eq!(reply_text(response), DEFAULT_REPLY);
    }

    #[test]
    fn empty_content_yields_default_line() {
        let response = decode(r#"{"choices":[{"message":{"content":""}}]}"#);
        assert_eq!(reply_text(response), DEFAULT_REPLY);
    }

    #[test]
    fn request_serializes_roles_lowercase() {
        let request = ChatRequest {
            model: MODEL,
            messages: vec![ChatMessage {
                role: MessageRole::System,
                content: "persona",
            }],
        };
        let json = serde_json::to_value(&request).expect("expected serializable request");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["model"], MODEL);
    }
}
