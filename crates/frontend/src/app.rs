use crate::components::ProfileModal;
use crate::services::chat::{ChatApi, FALLBACK_REPLY};
use studychat_chat_ui::styles::{
    CARD_BG, FLEX_BETWEEN, HEADER_PADDING, MUTED_TEXT, PRIMARY_BORDER, PRIMARY_TEXT,
    TERTIARY_TEXT,
};
use studychat_chat_ui::{format_clock, ChatContainer, ChatMessage};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Display name attached to user-authored messages.
const USER_SENDER: &str = "You";

/// Display name attached to assistant messages.
const ASSISTANT_SENDER: &str = "StudyChat";

/// Current local time in the log's clock format.
fn now_clock() -> String {
    let now = js_sys::Date::new_0();
    format_clock(now.get_hours(), now.get_minutes())
}

#[function_component(App)]
pub fn app() -> Html {
    let messages = use_state(Vec::<ChatMessage>::new);
    let pending = use_state(|| false);
    let show_profile = use_state(|| false);

    let on_send = {
        let messages = messages.clone();
        let pending = pending.clone();

        Callback::from(move |text: String| {
            // One outstanding request at a time
            if text.trim().is_empty() || *pending {
                return;
            }

            let text = text.trim().to_string();
            let mut updated = (*messages).clone();
            updated.push(ChatMessage::user(USER_SENDER, text.clone(), now_clock()));
            messages.set(updated.clone());
            pending.set(true);

            let messages = messages.clone();
            let pending = pending.clone();

            spawn_local(async move {
                let reply = match ChatApi::send_message(&text).await {
                    Ok(content) => content,
                    Err(err) => {
                        log::error!("chat request failed: {err}");
                        FALLBACK_REPLY.to_string()
                    }
                };

                pending.set(false);

                let mut updated = updated;
                updated.push(ChatMessage::assistant(ASSISTANT_SENDER, reply, now_clock()));
                messages.set(updated);
            });
        })
    };

    let open_profile = {
        let show_profile = show_profile.clone();
        Callback::from(move |_| show_profile.set(true))
    };

    let close_profile = {
        let show_profile = show_profile.clone();
        Callback::from(move |_: ()| show_profile.set(false))
    };

    html! {
        <div class="h-screen flex flex-col bg-gray-100 dark:bg-gray-900">
            <header class={classes!(CARD_BG, "border-b", PRIMARY_BORDER, HEADER_PADDING, FLEX_BETWEEN, "flex-shrink-0")}>
                <div class="flex items-baseline gap-3">
                    <h1 class={classes!("text-xl", "font-bold", PRIMARY_TEXT)}>{"StudyChat"}</h1>
                    <span class={classes!("text-sm", MUTED_TEXT)}>{"your study assistant"}</span>
                </div>
                <button
                    id="profile-btn"
                    onclick={open_profile}
                    class={classes!("text-sm", TERTIARY_TEXT, "hover:text-gray-900", "dark:hover:text-gray-100", "transition-colors")}
                >
                    {"Profile"}
                </button>
            </header>

            <main class="flex-1 overflow-hidden p-4">
                <ChatContainer
                    messages={(*messages).clone()}
                    pending={*pending}
                    on_send={on_send}
                    input_placeholder={Some("Ask anything about your studies...".to_string())}
                    class={classes!("shadow-md")}
                />
            </main>

            <ProfileModal visible={*show_profile} on_close={close_profile} />
        </div>
    }
}
