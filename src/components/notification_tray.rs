//! Notification Tray Component
//!
//! Click a notification to dismiss it.

use board_core::{AnimTarget, Command};
use leptos::prelude::*;

use crate::context::use_dashboard;

#[component]
pub fn NotificationTray() -> impl IntoView {
    let ctx = use_dashboard();
    let notifications = move || ctx.state.with(|d| d.notifications().items().to_vec());

    view! {
        <div class="notifications">
            <For
                each=notifications
                key=|n| n.id
                children=move |notification| {
                    let id = notification.id;
                    view! {
                        <div
                            class="notification"
                            data-anim=AnimTarget::Notification(id).key()
                            on:click=move |_| ctx.dispatch(Command::DismissNotification(id))
                        >
                            <div class="notification-icon">
                                <svg
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
                                    <path d="M18 8A6 6 0 0 0 6 8c0 7-3 9-3 9h18s-3-2-3-9"></path>
                                    <path d="M13.73 21a2 2 0 0 1-3.46 0"></path>
                                </svg>
                            </div>
                            <div class="notification-content">
                                <div class="notification-title">{notification.title}</div>
                                <div class="notification-message">{notification.message}</div>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
