use crate::styles::{ASSISTANT_BUBBLE_COLORS, MUTED_TEXT, SECONDARY_TEXT, USER_BUBBLE_COLORS};
use crate::types::ChatMessage;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct MessageProps {
    pub message: ChatMessage,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Message)]
pub fn message(props: &MessageProps) -> Html {
    let MessageProps { message, class } = props;

    let bubble_class = if message.is_user {
        USER_BUBBLE_COLORS
    } else {
        ASSISTANT_BUBBLE_COLORS
    };

    html! {
        <div class={classes!("flex", "flex-col", "gap-1", "p-4", "rounded-lg", "shadow", bubble_class, class.clone())}>
            <div class="flex justify-between items-center gap-2">
                <span class={classes!("font-semibold", "text-sm", SECONDARY_TEXT)}>{&message.sender}</span>
                <span class={classes!("text-xs", MUTED_TEXT)}>{&message.timestamp}</span>
            </div>
            <div class="leading-relaxed break-words whitespace-pre-wrap">{&message.text}</div>
        </div>
    }
}
