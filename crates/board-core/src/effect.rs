//! Effect Directives
//!
//! What the controller asks the display layer to do. Nothing in here touches
//! a display surface; the UI runtime interprets these.

use serde_json::{Map, Value};

use crate::command::Command;
use crate::kanban::ColumnId;
use crate::notification::NotificationId;
use crate::theme::Theme;

/// Animated property set, e.g. `{"opacity": 0, "x": 100}`
pub type Props = Map<String, Value>;

/// Turn a `json!` object literal into a property set. Anything other than an
/// object yields an empty set.
pub fn props(value: Value) -> Props {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Names a scheduled deferred command so it can be cancelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(pub u64);

/// Elements the controller animates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimTarget {
    Sidebar,
    Widget(usize),
    Column(ColumnId),
    Footer,
    QuickAdd,
    Notification(NotificationId),
    Assistant,
    TaskCheckbox(u32),
    SearchInput,
}

impl AnimTarget {
    /// Value of the `data-anim` attribute carried by the element
    pub fn key(&self) -> String {
        match self {
            AnimTarget::Sidebar => "sidebar".to_string(),
            AnimTarget::Widget(i) => format!("widget-{i}"),
            AnimTarget::Column(id) => format!("column-{id}"),
            AnimTarget::Footer => "footer".to_string(),
            AnimTarget::QuickAdd => "quick-add".to_string(),
            AnimTarget::Notification(id) => format!("notification-{id}"),
            AnimTarget::Assistant => "assistant".to_string(),
            AnimTarget::TaskCheckbox(id) => format!("task-checkbox-{id}"),
            AnimTarget::SearchInput => "search".to_string(),
        }
    }

    pub fn selector(&self) -> String {
        format!("[data-anim=\"{}\"]", self.key())
    }
}

/// Play a tween only once the element scrolls into view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollTrigger {
    pub start: &'static str,
    pub toggle_actions: &'static str,
}

impl ScrollTrigger {
    pub fn at(start: &'static str) -> Self {
        Self {
            start,
            toggle_actions: "play none none reverse",
        }
    }
}

/// One animation request: animate `target` (optionally from `from`) to `to`
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub target: AnimTarget,
    pub from: Option<Props>,
    pub to: Props,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub ease: Option<&'static str>,
    pub scroll_trigger: Option<ScrollTrigger>,
    /// Dispatched once the tween finishes
    pub on_complete: Option<Command>,
}

impl Tween {
    pub fn to(target: AnimTarget, to: Value) -> Self {
        Self {
            target,
            from: None,
            to: props(to),
            duration_ms: 500,
            delay_ms: 0,
            ease: None,
            scroll_trigger: None,
            on_complete: None,
        }
    }

    pub fn from_to(target: AnimTarget, from: Value, to: Value) -> Self {
        Self {
            from: Some(props(from)),
            ..Self::to(target, to)
        }
    }

    pub fn duration(mut self, ms: u32) -> Self {
        self.duration_ms = ms;
        self
    }

    pub fn delay(mut self, ms: u32) -> Self {
        self.delay_ms = ms;
        self
    }

    pub fn ease(mut self, ease: &'static str) -> Self {
        self.ease = Some(ease);
        self
    }

    pub fn on_scroll(mut self, trigger: ScrollTrigger) -> Self {
        self.scroll_trigger = Some(trigger);
        self
    }

    pub fn then(mut self, command: Command) -> Self {
        self.on_complete = Some(command);
        self
    }
}

/// A side effect for the display layer to carry out
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Animate(Tween),
    /// Dispatch `command` after `delay_ms`, unless cancelled first
    Schedule {
        token: TimerToken,
        delay_ms: u32,
        command: Command,
    },
    Cancel(TimerToken),
    /// Scroll the assistant log to its newest message
    ScrollToLatest,
    /// Reflect the theme on the document root
    ApplyTheme(Theme),
    /// Blocking placeholder alert
    Alert(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_selector_format() {
        assert_eq!(AnimTarget::Notification(4).selector(), "[data-anim=\"notification-4\"]");
        assert_eq!(AnimTarget::Sidebar.key(), "sidebar");
    }

    #[test]
    fn test_builder() {
        let tween = Tween::from_to(AnimTarget::Footer, json!({"opacity": 0}), json!({"opacity": 1}))
            .duration(600)
            .ease("power3.out")
            .on_scroll(ScrollTrigger::at("top 90%"));
        assert_eq!(tween.from.as_ref().and_then(|f| f.get("opacity")), Some(&json!(0)));
        assert_eq!(tween.duration_ms, 600);
        assert_eq!(tween.scroll_trigger.unwrap().toggle_actions, "play none none reverse");
        assert!(props(json!(3)).is_empty());
    }
}
