use crate::components::{ChatInput, MessageList};
use crate::styles::{CONTAINER_BG, FLEX_COL, ROUNDED_STANDARD};
use crate::types::ChatMessage;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ChatContainerProps {
    pub messages: Vec<ChatMessage>,
    /// True while a reply is outstanding; shows the typing indicator and
    /// disables the input.
    #[prop_or_default]
    pub pending: bool,
    pub on_send: Callback<String>,
    #[prop_or_default]
    pub input_placeholder: Option<String>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ChatContainer)]
pub fn chat_container(props: &ChatContainerProps) -> Html {
    let ChatContainerProps {
        messages,
        pending,
        on_send,
        input_placeholder,
        class,
    } = props;

    html! {
        <div class={classes!(FLEX_COL, "h-full", CONTAINER_BG, ROUNDED_STANDARD, "overflow-hidden", class.clone())}>
            <MessageList messages={messages.clone()} typing={*pending} />

            <div class="flex-shrink-0">
                <ChatInput
                    on_send={on_send.clone()}
                    placeholder={input_placeholder.clone()}
                    disabled={*pending}
                />
            </div>
        </div>
    }
}
