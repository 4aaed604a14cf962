//! Initial Dashboard Content
//!
//! What the page shows right after load. Nothing is persisted, so this is
//! also what every reload returns to.

use serde::{Deserialize, Serialize};

use crate::kanban::{Card, Column};
use crate::selection::CheckItem;

/// One entry of the calendar panel agenda
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub time: String,
    pub title: String,
    /// Accent colour class
    pub tone: String,
}

impl CalendarEvent {
    pub fn new(time: impl Into<String>, title: impl Into<String>, tone: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            title: title.into(),
            tone: tone.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Seed {
    pub tasks: Vec<CheckItem>,
    pub indicators: Vec<CheckItem>,
    pub columns: Vec<Column>,
    pub events: Vec<CalendarEvent>,
    pub notifications: Vec<(String, String)>,
    pub greeting: String,
}

impl Seed {
    pub fn demo() -> Self {
        Self {
            tasks: vec![
                CheckItem::new(1, "Review quarterly roadmap", "Today, 10:00"),
                CheckItem::new(2, "Reply to design feedback", "Today, 13:30").checked(),
                CheckItem::new(3, "Prepare sprint demo", "Tomorrow"),
                CheckItem::new(4, "Update onboarding docs", "Friday"),
            ],
            indicators: vec![
                CheckItem::new(1, "Morning standup", "").checked(),
                CheckItem::new(2, "Inbox zero", ""),
                CheckItem::new(3, "Focus block", ""),
                CheckItem::new(4, "Weekly review", ""),
            ],
            columns: vec![
                Column::new(
                    1,
                    "To Do",
                    vec![
                        Card::new(101, "Research competitor pricing", "Research", "Jun 12"),
                        Card::new(102, "Draft release notes", "Writing", "Jun 14"),
                        Card::new(103, "Plan team offsite", "Planning", "Jun 20"),
                    ],
                ),
                Column::new(
                    2,
                    "In Progress",
                    vec![
                        Card::new(201, "Redesign settings page", "Design", "Jun 10"),
                        Card::new(202, "Fix calendar sync", "Bug", "Jun 11"),
                    ],
                ),
                Column::new(3, "Done", vec![Card::new(301, "Set up analytics", "Ops", "Jun 5")]),
            ],
            events: vec![
                CalendarEvent::new("09:00", "Team standup", "blue"),
                CalendarEvent::new("11:30", "Client call", "purple"),
                CalendarEvent::new("15:00", "Design review", "green"),
            ],
            notifications: vec![
                ("New comment".to_string(), "Alex commented on \"Redesign settings page\"".to_string()),
                ("Reminder".to_string(), "Sprint demo starts in 30 minutes".to_string()),
            ],
            greeting: "Hi! I can help you plan your day. What are you working on?".to_string(),
        }
    }
}
