//! Calendar Widget Component
//!
//! Agenda with a Day/Week/Month switch. Adding events is not implemented yet
//! and only raises a placeholder alert.

use board_core::selection::CalendarView;
use board_core::{Command, Widget};
use leptos::prelude::*;

use crate::context::use_dashboard;

#[component]
pub fn CalendarWidget() -> impl IntoView {
    let ctx = use_dashboard();
    let events = ctx.state.with_untracked(|d| d.events().to_vec());

    view! {
        <div class="widget-card" data-anim=Widget::Calendar.anim_target().key()>
            <div class="widget-header">
                <h2>"Calendar"</h2>
                <div class="calendar-toggle">
                    {CalendarView::ALL
                        .into_iter()
                        .map(|mode| {
                            let active = move || ctx.state.with(|d| d.calendar_view().is_selected(mode));
                            view! {
                                <button
                                    class=move || if active() { "active" } else { "" }
                                    on:click=move |_| ctx.dispatch(Command::SelectCalendarView(mode))
                                >
                                    {mode.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <ul class="event-list">
                {events
                    .into_iter()
                    .map(|event| {
                        view! {
                            <li class=format!("event-item {}", event.tone)>
                                <span class="event-time">{event.time}</span>
                                <span class="event-title">{event.title}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <button class="add-event-btn" on:click=move |_| ctx.dispatch(Command::AddCalendarEvent)>
                "+ Add Event"
            </button>
        </div>
    }
}
