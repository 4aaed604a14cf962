//! Sidebar Component
//!
//! Static navigation column that slides in on load.

use board_core::AnimTarget;
use leptos::prelude::*;

const NAV_ITEMS: [(&str, bool); 5] = [
    ("Dashboard", true),
    ("My Tasks", false),
    ("Projects", false),
    ("Calendar", false),
    ("Reports", false),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="sidebar" data-anim=AnimTarget::Sidebar.key()>
            <div class="sidebar-logo">
                <span class="logo-mark">"◆"</span>
                <span class="logo-text">"Taskboard"</span>
            </div>
            <nav class="sidebar-nav">
                {NAV_ITEMS
                    .into_iter()
                    .map(|(label, active)| {
                        view! {
                            <a href="#" class={if active { "nav-link active" } else { "nav-link" }}>
                                {label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}
