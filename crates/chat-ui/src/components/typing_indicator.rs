use crate::styles::{ASSISTANT_BUBBLE_COLORS, FLEX_CENTER};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct TypingIndicatorProps {
    #[prop_or_default]
    pub class: Classes,
}

/// Transient placeholder bubble shown while a reply is pending.
///
/// At most one instance is rendered at a time; it is never part of the
/// message log itself.
#[function_component(TypingIndicator)]
pub fn typing_indicator(props: &TypingIndicatorProps) -> Html {
    let TypingIndicatorProps { class } = props;

    html! {
        <div class={classes!(FLEX_CENTER, "p-4", "rounded-lg", "shadow", ASSISTANT_BUBBLE_COLORS, class.clone())}>
            <div class="flex gap-1">
                <span class="w-2 h-2 rounded-full bg-gray-600 dark:bg-gray-400 animate-pulse-dot" style="animation-delay: -0.32s;"></span>
                <span class="w-2 h-2 rounded-full bg-gray-600 dark:bg-gray-400 animate-pulse-dot" style="animation-delay: -0.16s;"></span>
                <span class="w-2 h-2 rounded-full bg-gray-600 dark:bg-gray-400 animate-pulse-dot"></span>
            </div>
        </div>
    }
}
