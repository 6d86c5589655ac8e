use serde::{Deserialize, Serialize};

/// A single entry of the visible chat log.
///
/// Messages are immutable once rendered: the log owns them for the page
/// lifetime and only ever appends.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Display name shown in the bubble header.
    pub sender: String,

    /// Message body, rendered as plain text.
    pub text: String,

    /// Selects the user or assistant bubble treatment.
    pub is_user: bool,

    /// Local wall-clock time of creation, preformatted (e.g. `"9:05"`).
    pub timestamp: String,
}

impl ChatMessage {
    /// Create a message authored by the user.
    pub fn user(
        sender: impl Into<String>,
        text: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            sender: sender.into(),
            text: text.into(),
            is_user: true,
            timestamp: timestamp.into(),
        }
    }

    /// Create a message authored by the assistant.
    pub fn assistant(
        sender: impl Into<String>,
        text: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            sender: sender.into(),
            text: text.into(),
            is_user: false,
            timestamp: timestamp.into(),
        }
    }
}

/// Format a wall-clock reading the way the log displays it: hour as-is,
/// minute zero-padded to two digits.
#[must_use]
pub fn format_clock(hours: u32, minutes: u32) -> String {
    format!("{hours}:{minutes:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_pads_minutes_only() {
        assert_eq!(format_clock(9, 5), "9:05");
        assert_eq!(format_clock(14, 30), "14:30");
        assert_eq!(format_clock(0, 0), "0:00");
        assert_eq!(format_clock(23, 59), "23:59");
    }

    #[test]
    fn constructors_set_authorship() {
        let sent = ChatMessage::user("You", "hello", "9:05");
        assert!(sent.is_user);
        assert_eq!(sent.text, "hello");

        let reply = ChatMessage::assistant("StudyChat", "hi there", "9:06");
        assert!(!reply.is_user);
        assert_eq!(reply.sender, "StudyChat");
        assert_eq!(reply.timestamp, "9:06");
    }
}
