use crate::components::{Message, TypingIndicator};
use crate::styles::{FLEX_COL_GAP_4, STANDARD_PADDING};
use crate::types::ChatMessage;
use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct MessageListProps {
    pub messages: Vec<ChatMessage>,
    /// Render the typing indicator below the newest message.
    #[prop_or_default]
    pub typing: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(MessageList)]
pub fn message_list(props: &MessageListProps) -> Html {
    let MessageListProps {
        messages,
        typing,
        class,
    } = props;

    let container_ref = use_node_ref();

    // Keep the newest entry in view, the typing indicator included
    use_effect_with((messages.len(), *typing), {
        let container_ref = container_ref.clone();
        move |_| {
            if let Some(element) = container_ref.cast::<Element>() {
                element.set_scroll_top(element.scroll_height());
            }
        }
    });

    html! {
        <div id="chat-container" ref={container_ref} class={classes!("flex-1", "overflow-y-auto", STANDARD_PADDING, FLEX_COL_GAP_4, class.clone())}>
            {for messages.iter().enumerate().map(|(index, message)| {
                html! {
                    <Message key={index} message={message.clone()} />
                }
            })}
            if *typing {
                <TypingIndicator />
            }
        </div>
    }
}
