//! Effect Runtime
//!
//! Carries out the directives returned by the dashboard controller against
//! the live page.

use board_core::{Command, Effect, Theme, TimerToken};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::{debug, warn};

use crate::animation;
use crate::context::DashboardContext;

/// DOM id of the assistant message log
pub const ASSISTANT_LOG_ID: &str = "ai-messages";

pub fn run(ctx: DashboardContext, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            // Give the view a frame to render the elements a tween targets
            Effect::Animate(tween) => request_animation_frame(move || animation::play(ctx, tween)),
            Effect::Schedule {
                token,
                delay_ms,
                command,
            } => schedule(ctx, token, delay_ms, command),
            Effect::Cancel(token) => {
                ctx.disarm_timer(token);
            }
            Effect::ScrollToLatest => request_animation_frame(scroll_to_latest),
            Effect::ApplyTheme(theme) => apply_theme(theme),
            Effect::Alert(message) => {
                if let Err(err) = window().alert_with_message(&message) {
                    warn!(?err, "alert failed");
                }
            }
        }
    }
}

fn schedule(ctx: DashboardContext, token: TimerToken, delay_ms: u32, command: Command) {
    ctx.arm_timer(token);
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        if ctx.disarm_timer(token) {
            ctx.dispatch(command);
        } else {
            debug!(?token, "timer was cancelled");
        }
    });
}

fn scroll_to_latest() {
    if let Some(log) = document().get_element_by_id(ASSISTANT_LOG_ID) {
        log.set_scroll_top(log.scroll_height());
    }
}

fn apply_theme(theme: Theme) {
    let doc = document();
    if let Some(root) = doc.document_element() {
        if let Err(err) = root.set_attribute("data-theme", theme.as_str()) {
            warn!(?err, "could not set data-theme");
        }
    }
    if let Some(body) = doc.body() {
        if let Err(err) = body.class_list().toggle_with_force("dark-mode", theme.is_dark()) {
            warn!(?err, "could not toggle dark-mode class");
        }
    }
}
