//! Bounded recent-message buffer.

use std::collections::VecDeque;

/// How many recent user messages are retained.
pub const CONTEXT_WINDOW: usize = 5;

/// A rolling window of the last few lowercased user messages.
///
/// Maintained on every processed message but not yet consulted by any
/// handler; it exists so future context-aware replies have history to work
/// with. Cleared on conversation reset.
#[derive(Debug, Default)]
pub struct ConversationContext {
    messages: VecDeque<String>,
}

impl ConversationContext {
    /// Create an empty context buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a lowercased message, evicting the oldest once the window
    /// is full.
    pub fn push(&mut self, message: String) {
        self.messages.push_back(message);
        if self.messages.len() > CONTEXT_WINDOW {
            self.messages.pop_front();
        }
    }

    /// The retained messages, oldest first.
    pub fn recent(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(String::as_str)
    }

    /// Number of retained messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Drop all retained messages.
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_caps_at_five() {
        let mut context = ConversationContext::new();
        for i in 0..8 {
            context.push(format!("message {i}"));
        }
        assert_eq!(context.len(), CONTEXT_WINDOW);
        // Oldest messages were evicted first.
        assert_eq!(context.recent().next(), Some("message 3"));
    }

    #[test]
    fn test_clear() {
        let mut context = ConversationContext::new();
        context.push("hello".to_owned());
        context.clear();
        assert!(context.is_empty());
    }
}
