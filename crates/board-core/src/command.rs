//! Typed UI events handled by the dashboard controller

use crate::kanban::{CardBox, CardId, ColumnId};
use crate::notification::NotificationId;
use crate::selection::{CalendarView, TaskFilter};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Page finished mounting
    Boot,
    ToggleTheme,
    QuickAdd,
    CloseAssistant,
    /// Assistant input changed
    EditDraft(String),
    /// Send button or Enter in the assistant input
    SendMessage,
    DeliverReply,
    ToggleTask(u32),
    ToggleIndicator(u32),
    SelectFilter(TaskFilter),
    SelectCalendarView(CalendarView),
    SearchFocused,
    SearchBlurred,
    AddCalendarEvent,
    DragStart(CardId),
    /// Deferred half of `DragStart`
    FadeDraggedCard(CardId),
    /// Pointer moved over a column while dragging. `boxes` are the rendered
    /// cards of that column in order.
    DragOver {
        column: ColumnId,
        pointer_y: f64,
        boxes: Vec<CardBox>,
    },
    DragEnd,
    DismissNotification(NotificationId),
    ExpireNotification(NotificationId),
    RemoveNotification(NotificationId),
}
