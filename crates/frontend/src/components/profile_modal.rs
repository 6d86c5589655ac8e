//! Profile modal overlay

use studychat_chat_ui::styles::{CARD_BG, PRIMARY_TEXT, TERTIARY_TEXT};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProfileModalProps {
    pub visible: bool,
    pub on_close: Callback<()>,
}

/// Modal overlay toggled from the header.
///
/// Clicking the backdrop or the close control closes it; clicks inside the
/// panel are stopped so they do not.
#[function_component(ProfileModal)]
pub fn profile_modal(props: &ProfileModalProps) -> Html {
    if !props.visible {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div
            id="auth-modal"
            class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50"
            onclick={close.clone()}
        >
            <div
                class={classes!(CARD_BG, "rounded-lg", "p-6", "max-w-md", "w-full", "mx-4", "shadow-xl")}
                onclick={keep_open}
            >
                <div class="flex justify-between items-center mb-4">
                    <h2 class={classes!("text-xl", "font-bold", PRIMARY_TEXT)}>
                        {"Your profile"}
                    </h2>
                    <button
                        class="close text-2xl leading-none text-gray-400 hover:text-gray-600 dark:hover:text-gray-200"
                        onclick={close}
                        title="Close"
                        aria-label="Close"
                    >
                        {"\u{d7}"}
                    </button>
                </div>

                <p class={classes!("mb-4", TERTIARY_TEXT)}>
                    {"You are chatting as a guest. Conversations live in this tab only and are gone on reload."}
                </p>
                <p class={classes!("text-sm", TERTIARY_TEXT)}>
                    {"Accounts and saved history are not available in this build."}
                </p>
            </div>
        </div>
    }
}
