//! Application Context
//!
//! The dashboard controller and the runtime bookkeeping around it, shared
//! with every component via the Leptos Context API.

use std::collections::HashSet;

use board_core::{Command, Dashboard, TimerToken};
use leptos::prelude::*;

use crate::runtime;

#[derive(Clone, Copy)]
pub struct DashboardContext {
    /// All dashboard state - components read it reactively
    pub state: RwSignal<Dashboard>,
    /// Scheduled timers that have neither fired nor been cancelled
    pending_timers: StoredValue<HashSet<TimerToken>>,
}

impl DashboardContext {
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            state: RwSignal::new(dashboard),
            pending_timers: StoredValue::new(HashSet::new()),
        }
    }

    /// Apply a command to the controller, then carry out its effects.
    /// Readers are only notified when the command changed rendered state.
    pub fn dispatch(&self, command: Command) {
        let effects = self
            .state
            .try_maybe_update(|dashboard| dashboard.handle_tracked(command))
            .unwrap_or_default();
        runtime::run(*self, effects);
    }

    pub(crate) fn arm_timer(&self, token: TimerToken) {
        self.pending_timers.update_value(|pending| {
            pending.insert(token);
        });
    }

    /// Forget a timer. Returns true if it was still pending.
    pub(crate) fn disarm_timer(&self, token: TimerToken) -> bool {
        self.pending_timers
            .try_update_value(|pending| pending.remove(&token))
            .unwrap_or(false)
    }
}

/// Get the dashboard context provided by `App`
pub fn use_dashboard() -> DashboardContext {
    expect_context::<DashboardContext>()
}
