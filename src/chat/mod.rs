//! Beacon — the support chat adapter.
//!
//! SYSTEM CONTEXT
//! ==============
//! The chat widget talks to one of three interchangeable backends: an
//! offline keyword-matched responder (the default, no key needed), Google
//! Gemini, or OpenAI, both streamed straight from the browser. `ChatClient`
//! dispatches on a build-time provider selection.
//!
//! One rule sits above every backend: a message containing a self-harm
//! keyword gets the fixed safety response and nothing else. That check runs
//! before any provider is consulted.

pub mod canned;
pub mod config;
pub mod gemini;
pub mod openai;
pub mod sse;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use config::{ChatConfig, ProviderKind};
use thiserror::Error;

/// Case-insensitive substrings that trigger the safety response.
const SELF_HARM_KEYWORDS: &[&str] = &[
    "suicide",
    "kill myself",
    "want to die",
    "end my life",
    "self harm",
    "self-harm",
    "hurting myself",
];

pub const SAFETY_RESPONSE: &str = "It sounds like you are in immediate distress. Please call 999 or the Samaritans on 116 123 right now. They are available 24/7 to provide the urgent help you need.";

/// Fixed instruction sent to remote providers.
pub const SYSTEM_INSTRUCTION: &str = "You are Beacon, a warm, non-judgmental support assistant inside a UK late-night services app. You help people manage alcohol cravings and difficult feelings. Keep replies short and practical. When relevant, mention the free UK helplines: Samaritans 116 123, Drinkline 0300 123 1110. You are not a medical professional and must say so if asked for medical advice. If a user appears to be in crisis, tell them to call 999 or the Samaritans on 116 123.";

/// The safety response, if `message` trips the self-harm check.
pub fn safety_response_for(message: &str) -> Option<&'static str> {
    let lower = message.to_lowercase();
    SELF_HARM_KEYWORDS
        .iter()
        .any(|k| lower.contains(k))
        .then_some(SAFETY_RESPONSE)
}

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("chat request failed: {0}")]
    Request(String),
    #[error("chat API returned status {status}")]
    Status { status: u16 },
    #[error("chat response could not be parsed: {0}")]
    Parse(String),
    #[error("remote chat is only available in the browser")]
    Unsupported,
}

// =============================================================================
// CLIENT DISPATCH
// =============================================================================

/// Concrete chat backend, selected once at startup.
pub enum ChatClient {
    Canned(canned::CannedChat),
    Gemini(gemini::GeminiClient),
    OpenAi(openai::OpenAiClient),
}

impl ChatClient {
    /// Build the client from the build-time configuration. Misconfiguration
    /// (unknown provider, missing key) degrades to the offline responder
    /// rather than disabling the widget.
    pub fn from_build_config() -> Self {
        Self::from_config(ChatConfig::from_build_env())
    }

    pub fn from_config(config: ChatConfig) -> Self {
        match config.provider {
            ProviderKind::Offline => {
                log::info!("chat: offline responder");
                ChatClient::Canned(canned::CannedChat)
            }
            ProviderKind::Gemini => {
                log::info!("chat: gemini ({})", config.model);
                ChatClient::Gemini(gemini::GeminiClient::new(config.api_key, config.model))
            }
            ProviderKind::OpenAi => {
                log::info!("chat: openai ({})", config.model);
                ChatClient::OpenAi(openai::OpenAiClient::new(config.api_key, config.model))
            }
        }
    }

    /// Stream a reply to `message`, feeding text chunks to `on_chunk` as
    /// they arrive. A message that trips the safety check yields exactly
    /// the safety response, regardless of backend.
    ///
    /// # Errors
    ///
    /// Remote backends return an error when the request, response status,
    /// or stream parsing fails; the offline backend never fails.
    pub async fn send(&self, message: &str, on_chunk: &mut dyn FnMut(&str)) -> Result<(), ChatError> {
        if let Some(safety) = safety_response_for(message) {
            on_chunk(safety);
            return Ok(());
        }
        match self {
            ChatClient::Canned(c) => {
                c.send(message, on_chunk).await;
                Ok(())
            }
            ChatClient::Gemini(c) => c.send(message, on_chunk).await,
            ChatClient::OpenAi(c) => c.send(message, on_chunk).await,
        }
    }
}
