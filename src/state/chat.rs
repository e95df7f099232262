//! The chat transcript.
//!
//! An append-only, in-memory exchange between the user and the assistant.
//! Nothing here is persisted; closing the widget discards the transcript.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Shown in the reply bubble until the first streamed chunk lands.
pub const TYPING_PLACEHOLDER: &str = "...";

/// Shown when a remote provider fails mid-exchange.
pub const CONNECTION_ERROR: &str =
    "Sorry, I'm having trouble connecting right now. Please try again later.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Model,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

/// The ordered transcript plus streaming bookkeeping for the reply in
/// flight.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    awaiting_first_chunk: bool,
}

impl Transcript {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage { role: Role::User, text: text.into() });
        self.awaiting_first_chunk = false;
    }

    /// Open a reply bubble with the typing placeholder; subsequent chunks
    /// replace it.
    pub fn begin_reply(&mut self) {
        self.messages.push(ChatMessage {
            role: Role::Model,
            text: TYPING_PLACEHOLDER.to_owned(),
        });
        self.awaiting_first_chunk = true;
    }

    /// Feed one streamed chunk into the open reply bubble. Ignored if no
    /// reply is open.
    pub fn append_chunk(&mut self, chunk: &str) {
        let Some(last) = self.messages.last_mut() else {
            return;
        };
        if last.role != Role::Model {
            return;
        }
        if self.awaiting_first_chunk {
            last.text.clear();
            self.awaiting_first_chunk = false;
        }
        last.text.push_str(chunk);
    }

    /// Drop the failed exchange: the user message and the reply bubble.
    pub fn roll_back_exchange(&mut self) {
        let keep = self.messages.len().saturating_sub(2);
        self.messages.truncate(keep);
        self.awaiting_first_chunk = false;
    }
}
