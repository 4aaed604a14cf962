//! UI Components
//!
//! Leptos components for each part of the dashboard.

mod assistant_panel;
mod calendar_widget;
mod checklist_widget;
mod kanban_board;
mod notification_tray;
mod quick_add_button;
mod sidebar;
mod task_widget;
mod top_bar;

pub use assistant_panel::AssistantPanel;
pub use calendar_widget::CalendarWidget;
pub use checklist_widget::ChecklistWidget;
pub use kanban_board::KanbanBoard;
pub use notification_tray::NotificationTray;
pub use quick_add_button::QuickAddButton;
pub use sidebar::Sidebar;
pub use task_widget::TaskWidget;
pub use top_bar::TopBar;
