pub mod components;
pub mod styles;
pub mod types;

// Re-export main components
pub use components::{ChatContainer, ChatInput, Message, MessageList, TypingIndicator};
pub use types::{format_clock, ChatMessage};
