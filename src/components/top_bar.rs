//! Top Bar Component
//!
//! Search field with an animated focus ring and the theme switch.

use board_core::{AnimTarget, Command};
use leptos::prelude::*;

use crate::context::use_dashboard;

#[component]
pub fn TopBar() -> impl IntoView {
    let ctx = use_dashboard();
    let theme = move || ctx.state.with(|d| d.theme());

    view! {
        <header class="top-bar">
            <div class="search-bar">
                <input
                    type="text"
                    placeholder="Search tasks, projects..."
                    data-anim=AnimTarget::SearchInput.key()
                    on:focus=move |_| ctx.dispatch(Command::SearchFocused)
                    on:blur=move |_| ctx.dispatch(Command::SearchBlurred)
                />
            </div>
            <button
                id="theme-toggle-btn"
                class="icon-btn"
                title=move || if theme().is_dark() { "Switch to light mode" } else { "Switch to dark mode" }
                on:click=move |_| ctx.dispatch(Command::ToggleTheme)
            >
                <svg
                    id="theme-toggle-icon"
                    xmlns="http://www.w3.org/2000/svg"
                    width="20"
                    height="20"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                >
                    <path d=move || theme().icon_path()></path>
                </svg>
            </button>
        </header>
    }
}
