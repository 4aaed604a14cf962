//! Task Widget Component
//!
//! Task list with animated completion checkboxes and filter buttons.

use board_core::selection::TaskFilter;
use board_core::{AnimTarget, Command, Widget};
use leptos::prelude::*;

use crate::context::use_dashboard;

#[component]
pub fn TaskWidget() -> impl IntoView {
    let ctx = use_dashboard();
    let tasks = move || ctx.state.with(|d| d.tasks().items().to_vec());
    let is_checked = move |id: u32| ctx.state.with(|d| d.tasks().get(id).is_some_and(|t| t.checked));

    view! {
        <div class="widget-card" data-anim=Widget::Tasks.anim_target().key()>
            <div class="widget-header">
                <h2>"Today's Tasks"</h2>
                <div class="task-filters">
                    {TaskFilter::ALL
                        .into_iter()
                        .map(|filter| {
                            let active = move || ctx.state.with(|d| d.filter().is_selected(filter));
                            view! {
                                <button
                                    class=move || if active() { "filter-btn active" } else { "filter-btn" }
                                    on:click=move |_| ctx.dispatch(Command::SelectFilter(filter))
                                >
                                    {filter.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <ul class="task-list">
                <For
                    each=tasks
                    key=|task| task.id
                    children=move |task| {
                        let id = task.id;
                        view! {
                            <li class=move || if is_checked(id) { "task-item done" } else { "task-item" }>
                                <div
                                    class=move || if is_checked(id) { "task-checkbox checked" } else { "task-checkbox" }
                                    data-anim=AnimTarget::TaskCheckbox(id).key()
                                    on:click=move |_| ctx.dispatch(Command::ToggleTask(id))
                                ></div>
                                <div class="task-text">
                                    <span class="task-title">{task.label}</span>
                                    <span class="task-due">{task.detail}</span>
                                </div>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
