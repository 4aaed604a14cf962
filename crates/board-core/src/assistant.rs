//! Assistant Panel
//!
//! A scripted chat: user messages are echoed into the log and answered with
//! one canned line.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// CSS modifier of the message bubble
    pub fn css_class(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "bot",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u32,
    pub role: Role,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantPanel {
    messages: Vec<ChatMessage>,
    draft: String,
    open: bool,
    next_id: u32,
}

impl Default for AssistantPanel {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            draft: String::new(),
            open: true,
            next_id: 0,
        }
    }
}

impl AssistantPanel {
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        let mut panel = Self::default();
        panel.append(Role::Assistant, greeting.into());
        panel
    }

    fn append(&mut self, role: Role, text: String) {
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id: self.next_id,
            role,
            text,
        });
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Commit the draft as a user message.
    ///
    /// A blank draft is refused and left in place. Otherwise the trimmed text
    /// is logged, the draft cleared, and the logged text returned.
    pub fn send(&mut self) -> Option<String> {
        let text = self.draft.trim().to_string();
        if text.is_empty() {
            return None;
        }
        self.append(Role::User, text.clone());
        self.draft.clear();
        Some(text)
    }

    pub fn reply(&mut self, text: impl Into<String>) {
        self.append(Role::Assistant, text.into());
    }

    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_draft_is_kept() {
        let mut panel = AssistantPanel::default();
        panel.set_draft("   \t ");
        assert_eq!(panel.send(), None);
        assert_eq!(panel.draft(), "   \t ");
        assert!(panel.messages().is_empty());
    }

    #[test]
    fn test_send_trims_and_clears() {
        let mut panel = AssistantPanel::with_greeting("Hi");
        panel.set_draft("  buy milk ");
        assert_eq!(panel.send().as_deref(), Some("buy milk"));
        assert_eq!(panel.draft(), "");
        let last = panel.messages().last().unwrap();
        assert_eq!(last.role, Role::User);
        assert_eq!(last.text, "buy milk");
        assert_eq!(panel.messages().len(), 2);
    }

    #[test]
    fn test_close_once() {
        let mut panel = AssistantPanel::default();
        assert!(panel.close());
        assert!(!panel.close());
        assert!(!panel.is_open());
    }
}
