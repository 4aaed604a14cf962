//! Checklist Widget Component

use board_core::{Command, Widget};
use leptos::prelude::*;

use crate::context::use_dashboard;

/// Habit-style toggle list
#[component]
pub fn ChecklistWidget() -> impl IntoView {
    let ctx = use_dashboard();
    let indicators = move || ctx.state.with(|d| d.indicators().items().to_vec());
    let done = move || ctx.state.with(|d| d.indicators().items().iter().filter(|i| i.checked).count());
    let total = ctx.state.with_untracked(|d| d.indicators().items().len());

    view! {
        <div class="widget-card" data-anim=Widget::Checklist.anim_target().key()>
            <div class="widget-header">
                <h2>"Daily Habits"</h2>
                <span class="widget-meta">{move || format!("{}/{}", done(), total)}</span>
            </div>
            <ul class="toggle-list">
                <For
                    each=indicators
                    key=|item| item.id
                    children=move |item| {
                        let id = item.id;
                        let checked = move || ctx.state.with(|d| d.indicators().get(id).is_some_and(|i| i.checked));
                        view! {
                            <li class="toggle-item">
                                <span class="toggle-label">{item.label}</span>
                                <div
                                    class=move || if checked() { "toggle-indicator checked" } else { "toggle-indicator" }
                                    on:click=move |_| ctx.dispatch(Command::ToggleIndicator(id))
                                ></div>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
