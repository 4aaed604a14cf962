//! Assistant Panel Component
//!
//! Scripted chat: messages are echoed and answered with one canned line.

use board_core::{AnimTarget, Command};
use leptos::prelude::*;
use web_sys::KeyboardEvent;

use crate::context::use_dashboard;
use crate::runtime::ASSISTANT_LOG_ID;

#[component]
pub fn AssistantPanel() -> impl IntoView {
    let ctx = use_dashboard();
    let messages = move || ctx.state.with(|d| d.assistant().messages().to_vec());
    let is_open = move || ctx.state.with(|d| d.assistant().is_open());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Keystrokes don't notify readers, so the input is synced by hand once
    // a send has cleared (or kept) the draft
    let send = move || {
        ctx.dispatch(Command::SendMessage);
        if let Some(input) = input_ref.get_untracked() {
            input.set_value(&ctx.state.with_untracked(|d| d.assistant().draft().to_string()));
        }
    };

    let on_keypress = move |ev: KeyboardEvent| {
        if ev.key() == "Enter" {
            send();
        }
    };

    view! {
        <aside
            class=move || if is_open() { "ai-assistant" } else { "ai-assistant closed" }
            data-anim=AnimTarget::Assistant.key()
        >
            <div class="ai-header">
                <h3>"AI Assistant"</h3>
                <button class="close-btn" title="Close" on:click=move |_| ctx.dispatch(Command::CloseAssistant)>
                    "×"
                </button>
            </div>
            <div class="ai-messages" id=ASSISTANT_LOG_ID>
                <For
                    each=messages
                    key=|m| m.id
                    children=|message| {
                        view! { <div class=format!("ai-message {}", message.role.css_class())>{message.text}</div> }
                    }
                />
            </div>
            <div class="ai-input">
                <input
                    type="text"
                    placeholder="Ask me anything..."
                    node_ref=input_ref
                    on:input=move |ev| ctx.dispatch(Command::EditDraft(event_target_value(&ev)))
                    on:keypress=on_keypress
                />
                <button title="Send" on:click=move |_| send()>
                    <svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="18"
                        height="18"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    >
                        <line x1="22" y1="2" x2="11" y2="13"></line>
                        <polygon points="22 2 15 22 11 13 2 9 22 2"></polygon>
                    </svg>
                </button>
            </div>
        </aside>
    }
}
