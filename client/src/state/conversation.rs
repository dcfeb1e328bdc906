//! Conversation-session state for the chat widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! This model owns the session identifier and the submission lifecycle
//! around one outstanding request. The backend is the sole authority on
//! session continuity: every successful turn overwrites the held id with
//! whatever the response carries, including the first `None -> Some`
//! transition.

#[cfg(test)]
#[path = "conversation_test.rs"]
mod conversation_test;

use wire::ChatResponse;

/// Fixed reply appended when a turn fails for any reason.
pub const FAILED_TURN_REPLY: &str = "Sorry, I encountered an error. Please try again.";

/// Who authored a transcript line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// One line of the conversation transcript. Append-only; never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
}

/// Session, transcript, and submission lifecycle for the chat widget.
#[derive(Clone, Debug, Default)]
pub struct ConversationState {
    /// Backend-assigned session id; `None` until the first response.
    pub session_id: Option<String>,
    /// Transcript in arrival order.
    pub messages: Vec<ChatMessage>,
    /// True while a request is in flight; the input controls are disabled
    /// off this flag. Always cleared when the turn settles.
    pub sending: bool,
}

impl ConversationState {
    /// Start a submission from raw input.
    ///
    /// Empty-after-trim input is a silent no-op: nothing is appended and
    /// `None` signals the caller to issue no request. Otherwise exactly one
    /// user message carrying the literal trimmed text is appended, the
    /// sending flag is raised, and the trimmed text is returned for
    /// submission.
    pub fn begin_turn(&mut self, input: &str) -> Option<String> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }

        self.messages.push(ChatMessage {
            text: text.to_owned(),
            sender: Sender::User,
        });
        self.sending = true;
        Some(text.to_owned())
    }

    /// Apply a successful response: adopt its session id unconditionally,
    /// append the bot reply, and re-enable input.
    pub fn complete_turn(&mut self, response: &ChatResponse) {
        self.session_id = Some(response.session_id.clone());
        self.messages.push(ChatMessage {
            text: response.response.clone(),
            sender: Sender::Bot,
        });
        self.sending = false;
    }

    /// Record a failed turn: one fixed apology, session id untouched,
    /// input re-enabled. A failed turn contributes nothing to the order.
    pub fn fail_turn(&mut self) {
        self.messages.push(ChatMessage {
            text: FAILED_TURN_REPLY.to_owned(),
            sender: Sender::Bot,
        });
        self.sending = false;
    }
}
