use crate::styles::{
    combine_styles, CARD_BG, INPUT_COLORS, PRIMARY_BORDER, PRIMARY_TEXT, STANDARD_PADDING,
    TRANSITION_COLORS,
};
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ChatInputProps {
    /// Invoked with the trimmed message text on every submission.
    pub on_send: Callback<String>,
    #[prop_or_default]
    pub placeholder: Option<String>,
    #[prop_or_default]
    pub disabled: bool,
}

/// The submit-worthy form of the raw input, if any.
fn submittable(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

#[function_component(ChatInput)]
pub fn chat_input(props: &ChatInputProps) -> Html {
    let input_value = use_state(String::new);
    let text_area_ref = use_node_ref();

    let handle_input = {
        let input_value = input_value.clone();
        let text_area_ref = text_area_ref.clone();
        Callback::from(move |_| {
            if let Some(text_area) = text_area_ref.cast::<HtmlTextAreaElement>() {
                input_value.set(text_area.value());
            }
        })
    };

    let send_message = {
        let input_value = input_value.clone();
        let on_send = props.on_send.clone();
        let text_area_ref = text_area_ref.clone();

        Callback::from(move |_| {
            if let Some(text) = submittable(&input_value) {
                on_send.emit(text.to_string());
                input_value.set(String::new());
                if let Some(text_area) = text_area_ref.cast::<HtmlTextAreaElement>() {
                    text_area.set_value("");
                }
            }
        })
    };

    // Enter submits; Shift+Enter keeps its newline
    let handle_keydown = {
        let send_message = send_message.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" && !e.shift_key() {
                e.prevent_default();
                send_message.emit(());
            }
        })
    };

    let is_empty = submittable(&input_value).is_none();
    let placeholder = props
        .placeholder
        .clone()
        .unwrap_or_else(|| "Type a message...".to_string());

    html! {
        <div class={combine_styles(&["flex items-end gap-3", STANDARD_PADDING, CARD_BG, "border-t", PRIMARY_BORDER])}>
            <div class="flex-1 relative">
                <textarea
                    id="user-input"
                    ref={text_area_ref}
                    class={combine_styles(&["w-full min-h-[40px] max-h-[200px] px-3 py-2 border", INPUT_COLORS, "rounded-lg text-sm leading-relaxed resize-none outline-none", TRANSITION_COLORS, CARD_BG, PRIMARY_TEXT, "focus:border-gray-400 focus:ring-1 focus:ring-gray-400 dark:focus:border-gray-500 dark:focus:ring-gray-500 disabled:bg-gray-100 disabled:cursor-not-allowed placeholder:text-gray-400 dark:placeholder:text-gray-600"])}
                    placeholder={placeholder}
                    value={(*input_value).clone()}
                    oninput={handle_input}
                    onkeydown={handle_keydown}
                    disabled={props.disabled}
                    rows="1"
                />
            </div>

            <SendButton
                onclick={send_message}
                disabled={is_empty || props.disabled}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SendButtonProps {
    pub onclick: Callback<()>,
    pub disabled: bool,
}

#[function_component(SendButton)]
fn send_button(props: &SendButtonProps) -> Html {
    let handle_click = {
        let onclick = props.onclick.clone();
        Callback::from(move |_| onclick.emit(()))
    };

    html! {
        <button
            id="send-btn"
            class="flex items-center justify-center w-[42px] h-[42px] p-0 rounded-lg bg-blue-500 dark:bg-blue-600 text-white cursor-pointer transition-all duration-200 flex-shrink-0 hover:bg-blue-600 dark:hover:bg-blue-700 disabled:bg-gray-200 disabled:cursor-not-allowed disabled:text-gray-400"
            onclick={handle_click}
            disabled={props.disabled}
            title="Send message"
            aria-label="Send message"
        >
            <svg class="w-5 h-5" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                <path d="M22 2L11 13" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>
                <path d="M22 2L15 22L11 13L2 9L22 2Z" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>
            </svg>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submittable_trims_surrounding_whitespace() {
        assert_eq!(submittable("  hello  "), Some("hello"));
        assert_eq!(submittable("what is 2+2?"), Some("what is 2+2?"));
    }

    #[test]
    fn submittable_rejects_blank_input() {
        assert_eq!(submittable(""), None);
        assert_eq!(submittable("   "), None);
        assert_eq!(submittable("\n\t "), None);
    }
}
