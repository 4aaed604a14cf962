//! Toggle & Selection Controls
//!
//! Independent checkboxes and mutually exclusive single-select groups.

use std::collections::HashSet;
use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, Result};

/// One checkable row (a task or a toggle-list entry)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckItem {
    pub id: u32,
    pub label: String,
    /// Secondary text, e.g. a due time
    pub detail: String,
    pub checked: bool,
}

impl CheckItem {
    pub fn new(id: u32, label: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            detail: detail.into(),
            checked: false,
        }
    }

    pub fn checked(mut self) -> Self {
        self.checked = true;
        self
    }
}

/// A list of independently togglable items
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Checklist {
    items: Vec<CheckItem>,
}

impl Checklist {
    /// Build a list named `list` (used in errors). Item ids must be unique.
    pub fn new(list: &'static str, items: Vec<CheckItem>) -> Result<Self> {
        let mut seen = HashSet::new();
        if let Some(dup) = items.iter().find(|item| !seen.insert(item.id)) {
            return Err(BoardError::DuplicateItem { list, id: dup.id });
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[CheckItem] {
        &self.items
    }

    pub fn get(&self, id: u32) -> Option<&CheckItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Flip an item, returning its new state (None for an unknown id)
    pub fn toggle(&mut self, id: u32) -> Option<bool> {
        let item = self.items.iter_mut().find(|i| i.id == id)?;
        item.checked = !item.checked;
        Some(item.checked)
    }
}

/// Task list filter buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskFilter {
    All,
    Today,
    Upcoming,
    Completed,
}

impl TaskFilter {
    pub const ALL: [TaskFilter; 4] = [TaskFilter::All, TaskFilter::Today, TaskFilter::Upcoming, TaskFilter::Completed];

    pub fn label(&self) -> &'static str {
        match self {
            TaskFilter::All => "All",
            TaskFilter::Today => "Today",
            TaskFilter::Upcoming => "Upcoming",
            TaskFilter::Completed => "Completed",
        }
    }
}

/// Calendar panel zoom level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalendarView {
    Day,
    Week,
    Month,
}

impl CalendarView {
    pub const ALL: [CalendarView; 3] = [CalendarView::Day, CalendarView::Week, CalendarView::Month];

    pub fn label(&self) -> &'static str {
        match self {
            CalendarView::Day => "Day",
            CalendarView::Week => "Week",
            CalendarView::Month => "Month",
        }
    }
}

/// A fixed set of options with exactly one selected
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExclusiveGroup<T> {
    name: &'static str,
    options: Vec<T>,
    selected: T,
}

impl<T: Copy + PartialEq + Debug> ExclusiveGroup<T> {
    /// Build a group with its first option selected
    pub fn new(name: &'static str, options: Vec<T>) -> Result<Self> {
        let selected = *options.first().ok_or(BoardError::EmptyGroup(name))?;
        Ok(Self { name, options, selected })
    }

    pub fn with_selected(mut self, chosen: T) -> Result<Self> {
        self.select(chosen)?;
        Ok(self)
    }

    pub fn options(&self) -> &[T] {
        &self.options
    }

    pub fn selected(&self) -> T {
        self.selected
    }

    pub fn is_selected(&self, option: T) -> bool {
        self.selected == option
    }

    /// Select `chosen`, deselecting every other member. Returns false when
    /// it was already the selection.
    pub fn select(&mut self, chosen: T) -> Result<bool> {
        if !self.options.contains(&chosen) {
            return Err(BoardError::UnknownOption {
                group: self.name,
                option: format!("{chosen:?}"),
            });
        }
        if self.selected == chosen {
            return Ok(false);
        }
        self.selected = chosen;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_self_inverse() {
        let mut list = Checklist::new("tasks", vec![CheckItem::new(1, "a", ""), CheckItem::new(2, "b", "").checked()]).unwrap();
        assert_eq!(list.toggle(1), Some(true));
        assert_eq!(list.toggle(1), Some(false));
        assert_eq!(list.toggle(2), Some(false));
        assert_eq!(list.toggle(2), Some(true));
        assert_eq!(list.toggle(3), None);
    }

    #[test]
    fn test_items_are_independent() {
        let mut list = Checklist::new("tasks", vec![CheckItem::new(1, "a", ""), CheckItem::new(2, "b", "")]).unwrap();
        list.toggle(1);
        assert!(list.get(1).unwrap().checked);
        assert!(!list.get(2).unwrap().checked);
    }

    #[test]
    fn test_select_exclusive() {
        let mut group = ExclusiveGroup::new("filter", TaskFilter::ALL.to_vec()).unwrap();
        assert_eq!(group.selected(), TaskFilter::All);
        assert!(group.select(TaskFilter::Today).unwrap());
        assert!(group.select(TaskFilter::Completed).unwrap());
        let selected: Vec<_> = group.options().iter().filter(|o| group.is_selected(**o)).collect();
        assert_eq!(selected, vec![&TaskFilter::Completed]);
    }

    #[test]
    fn test_reselect_is_noop() {
        let mut group = ExclusiveGroup::new("calendar", CalendarView::ALL.to_vec()).unwrap();
        assert!(group.select(CalendarView::Week).unwrap());
        assert!(!group.select(CalendarView::Week).unwrap());
        assert_eq!(group.selected(), CalendarView::Week);
    }

    #[test]
    fn test_single_member_group() {
        let mut group = ExclusiveGroup::new("calendar", vec![CalendarView::Day]).unwrap();
        assert!(!group.select(CalendarView::Day).unwrap());
        assert!(matches!(
            group.select(CalendarView::Month),
            Err(BoardError::UnknownOption { group: "calendar", .. })
        ));
    }

    #[test]
    fn test_empty_group_rejected() {
        assert!(matches!(
            ExclusiveGroup::<TaskFilter>::new("filter", vec![]),
            Err(BoardError::EmptyGroup("filter"))
        ));
    }
}
