//! Quick Add Button Component

use board_core::{AnimTarget, Command};
use leptos::prelude::*;

use crate::context::use_dashboard;

/// Floating action button; pulses and posts a notification
#[component]
pub fn QuickAddButton() -> impl IntoView {
    let ctx = use_dashboard();

    view! {
        <button
            class="quick-add-btn"
            title="Quick add"
            data-anim=AnimTarget::QuickAdd.key()
            on:click=move |_| ctx.dispatch(Command::QuickAdd)
        >
            "+"
        </button>
    }
}
