mod chat_container;
mod chat_input;
mod message;
mod message_list;
mod typing_indicator;

pub use chat_container::ChatContainer;
pub use chat_input::ChatInput;
pub use message::Message;
pub use message_list::MessageList;
pub use typing_indicator::TypingIndicator;
