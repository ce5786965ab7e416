use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Who authored a message in the session transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    System,
    Human,
    Assistant,
}

/// A single role-tagged message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn human(content: impl Into<String>) -> Self {
        Self {
            role: Role::Human,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    /// Convert to the OpenAI-compatible wire format
    pub fn to_message(&self) -> Value {
        let role = match self.role {
            Role::System => "system",
            Role::Human => "user",
            Role::Assistant => "assistant",
        };
        serde_json::json!({
            "role": role,
            "content": self.content
        })
    }
}

/// Ordered transcript of generate actions for one session.
///
/// The log records what was asked and what came back. It is append-only and
/// never read back into prompt context; each generate action is single-turn.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageLog {
    messages: Vec<ChatMessage>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_wire_format() {
        let message = ChatMessage::human("Create a detailed itinerary for my trip.");
        let wire = message.to_message();

        assert_eq!(wire["role"], "user");
        assert_eq!(wire["content"], "Create a detailed itinerary for my trip.");
    }

    #[test]
    fn test_log_is_ordered() {
        let mut log = MessageLog::new();
        log.push(ChatMessage::human("plan my trip"));
        log.push(ChatMessage::assistant("Day 1: ..."));

        assert_eq!(log.len(), 2);
        assert_eq!(log.messages()[0].role, Role::Human);
        assert_eq!(log.last().unwrap().role, Role::Assistant);
    }
}
