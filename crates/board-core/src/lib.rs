//! Board Core
//!
//! Display-free state behind the dashboard: the kanban drag-and-reorder
//! engine, toggles and exclusive selection groups, the notification tray,
//! the scripted assistant log and the theme switch.
//!
//! Everything funnels through [`Dashboard::handle`], which applies a typed
//! [`Command`] and answers with [`Effect`] directives (animate, schedule,
//! cancel, scroll, alert) for a display layer to carry out.

pub mod assistant;
pub mod command;
pub mod config;
pub mod dashboard;
pub mod drag;
pub mod effect;
pub mod error;
pub mod kanban;
pub mod notification;
pub mod seed;
pub mod selection;
pub mod theme;

#[cfg(test)]
mod tests;

pub use command::Command;
pub use config::DashboardConfig;
pub use dashboard::{Dashboard, Widget};
pub use effect::{AnimTarget, Effect, Props, ScrollTrigger, TimerToken, Tween};
pub use error::{BoardError, Result};
pub use kanban::{compute_insertion_point, Board, Card, CardBox, CardId, Column, ColumnId, InsertionPoint};
pub use seed::Seed;
pub use theme::Theme;
