//! Chat session state shared by any front end
//!
//! The session owns the message list, the selected answering mode, and the
//! typing flag shown while a reply is pending.

use serde::Serialize;

use crate::assistant::{QaMode, Reply, Source, WELCOME_MESSAGE};

/// A chat message in the assistant conversation
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<Source>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<QaMode>,
}

/// The role of a chat message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// A question accepted by the session and waiting for its reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submitted {
    pub mode: QaMode,
    pub input: String,
}

/// On-disk shape of an exported conversation
#[derive(Serialize)]
struct Transcript<'a> {
    mode: QaMode,
    messages: &'a [ChatMessage],
}

#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    mode: QaMode,
    typing: bool,
    next_id: u64,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage {
                id: "welcome".to_string(),
                role: ChatRole::Assistant,
                content: WELCOME_MESSAGE.to_string(),
                sources: Vec::new(),
                mode: None,
            }],
            mode: QaMode::default(),
            typing: false,
            next_id: 1,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn mode(&self) -> QaMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: QaMode) {
        self.mode = mode;
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    fn allocate_id(&mut self) -> String {
        let id = self.next_id;
        self.next_id += 1;
        format!("msg-{}", id)
    }

    /// Accept a user question. Blank input, or input sent while a reply is
    /// still pending, leaves the session untouched.
    pub fn submit(&mut self, input: &str) -> Option<Submitted> {
        if input.trim().is_empty() || self.typing {
            return None;
        }

        let id = self.allocate_id();
        self.messages.push(ChatMessage {
            id,
            role: ChatRole::User,
            content: input.to_string(),
            sources: Vec::new(),
            mode: None,
        });
        self.typing = true;

        Some(Submitted {
            mode: self.mode,
            input: input.to_string(),
        })
    }

    /// Append the assistant reply and clear the typing indicator
    pub fn deliver(&mut self, reply: Reply) {
        let id = self.allocate_id();
        self.messages.push(ChatMessage {
            id,
            role: ChatRole::Assistant,
            content: reply.content,
            sources: reply.sources,
            mode: Some(reply.mode),
        });
        self.typing = false;
    }

    /// The conversation so far as pretty-printed JSON
    pub fn transcript_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&Transcript {
            mode: self.mode,
            messages: &self.messages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::respond;
    use std::collections::HashSet;

    #[test]
    fn test_starts_with_welcome() {
        let session = ChatSession::new();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].role, ChatRole::Assistant);
        assert_eq!(session.mode(), QaMode::Hybrid);
    }

    #[test]
    fn test_blank_input_is_noop() {
        let mut session = ChatSession::new();
        for input in ["", "   ", "\t\n "] {
            assert!(session.submit(input).is_none());
        }
        assert_eq!(session.messages().len(), 1);
        assert!(!session.is_typing());
    }

    #[test]
    fn test_submit_then_deliver() {
        let mut session = ChatSession::new();
        session.set_mode(QaMode::Related);

        let submitted = session.submit("What is COPD?").unwrap();
        assert_eq!(submitted.mode, QaMode::Related);
        assert!(session.is_typing());

        // second send while typing is rejected
        assert!(session.submit("again").is_none());

        session.deliver(respond(submitted.mode, &submitted.input));
        assert!(!session.is_typing());

        let last = session.messages().last().unwrap();
        assert_eq!(last.role, ChatRole::Assistant);
        assert_eq!(last.mode, Some(QaMode::Related));
        assert_eq!(last.sources.len(), 2);
        assert_eq!(session.messages().len(), 3);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut session = ChatSession::new();
        for i in 0..20 {
            let submitted = session.submit(&format!("question {}", i)).unwrap();
            session.deliver(respond(submitted.mode, &submitted.input));
        }
        let ids: HashSet<&str> = session.messages().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids.len(), session.messages().len());
    }

    #[test]
    fn test_transcript_json() {
        let mut session = ChatSession::new();
        session.set_mode(QaMode::Grounded);
        let submitted = session.submit("Is my breathing worse?").unwrap();
        session.deliver(respond(submitted.mode, &submitted.input));

        let value: serde_json::Value = serde_json::from_str(&session.transcript_json().unwrap()).unwrap();
        assert_eq!(value["mode"], "grounded");

        let messages = value["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0]["id"], "welcome");
        assert!(messages[0].get("sources").is_none());
        assert_eq!(messages[1]["role"], "user");
        assert_eq!(messages[1]["content"], "Is my breathing worse?");
        assert_eq!(messages[2]["role"], "assistant");
        assert_eq!(messages[2]["mode"], "grounded");
        assert_eq!(messages[2]["sources"][0]["kind"], "document");
        assert_eq!(messages[2]["sources"][0]["title"], "Your uploaded document");
    }
}
