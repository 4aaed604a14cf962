//! Dashboard Controller
//!
//! Owns every piece of transient UI state and turns typed commands into
//! state transitions plus effect directives for the display layer.

use serde_json::json;
use tracing::{debug, info, warn};

use crate::assistant::AssistantPanel;
use crate::command::Command;
use crate::config::DashboardConfig;
use crate::drag::DragSession;
use crate::effect::{AnimTarget, Effect, ScrollTrigger, TimerToken, Tween};
use crate::error::{BoardError, Result};
use crate::kanban::{compute_insertion_point, Board, CardBox, CardId, ColumnId};
use crate::notification::{Leave, NotificationId, NotificationTray, Origin};
use crate::seed::{CalendarEvent, Seed};
use crate::selection::{CalendarView, Checklist, ExclusiveGroup, TaskFilter};
use crate::theme::Theme;

const EASE_OUT: &str = "power3.out";
const EASE_BACK: &str = "back.out(1.7)";

/// Widget cards in the main grid, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Widget {
    Tasks,
    Checklist,
    Calendar,
}

impl Widget {
    pub const ALL: [Widget; 3] = [Widget::Tasks, Widget::Checklist, Widget::Calendar];

    pub fn anim_target(self) -> AnimTarget {
        let index = Self::ALL.iter().position(|w| *w == self).unwrap_or(0);
        AnimTarget::Widget(index)
    }
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    config: DashboardConfig,
    board: Board,
    drag: DragSession,
    tasks: Checklist,
    indicators: Checklist,
    filter: ExclusiveGroup<TaskFilter>,
    calendar_view: ExclusiveGroup<CalendarView>,
    events: Vec<CalendarEvent>,
    notifications: NotificationTray,
    assistant: AssistantPanel,
    theme: Theme,
    search_focused: bool,
    next_token: u64,
    /// Bumped by every transition a reader of the dashboard could observe
    revision: u64,
}

impl Dashboard {
    /// Build the controller from its initial content. Structural problems in
    /// the seed (duplicate cards and the like) fail here rather than later.
    pub fn new(seed: Seed, config: DashboardConfig) -> Result<Self> {
        Ok(Self {
            board: Board::new(seed.columns)?,
            drag: DragSession::default(),
            tasks: Checklist::new("tasks", seed.tasks)?,
            indicators: Checklist::new("indicators", seed.indicators)?,
            filter: ExclusiveGroup::new("filter", TaskFilter::ALL.to_vec())?,
            calendar_view: ExclusiveGroup::new("calendar", CalendarView::ALL.to_vec())?
                .with_selected(CalendarView::Week)?,
            events: seed.events,
            notifications: NotificationTray::seeded(seed.notifications),
            assistant: AssistantPanel::with_greeting(seed.greeting),
            theme: Theme::default(),
            search_focused: false,
            next_token: 0,
            revision: 0,
            config,
        })
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn drag(&self) -> &DragSession {
        &self.drag
    }

    pub fn tasks(&self) -> &Checklist {
        &self.tasks
    }

    pub fn indicators(&self) -> &Checklist {
        &self.indicators
    }

    pub fn filter(&self) -> &ExclusiveGroup<TaskFilter> {
        &self.filter
    }

    pub fn calendar_view(&self) -> &ExclusiveGroup<CalendarView> {
        &self.calendar_view
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn notifications(&self) -> &NotificationTray {
        &self.notifications
    }

    pub fn assistant(&self) -> &AssistantPanel {
        &self.assistant
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn search_focused(&self) -> bool {
        self.search_focused
    }

    /// Opacity a card should be rendered with
    pub fn card_opacity(&self, card: CardId) -> f64 {
        if self.drag.is_faded(card) {
            self.config.dragged_card_opacity
        } else {
            1.0
        }
    }

    /// Counter that moves whenever rendered state changes
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self, changed: bool) {
        if changed {
            self.revision += 1;
        }
    }

    fn next_token(&mut self) -> TimerToken {
        self.next_token += 1;
        TimerToken(self.next_token)
    }

    fn schedule(&mut self, delay_ms: u32, command: Command) -> (TimerToken, Effect) {
        let token = self.next_token();
        (token, Effect::Schedule { token, delay_ms, command })
    }

    /// Handle a command, logging and swallowing rejections
    pub fn handle(&mut self, command: Command) -> Vec<Effect> {
        debug!(?command, "handling command");
        match self.try_handle(command) {
            Ok(effects) => effects,
            Err(err) => {
                warn!(%err, "command rejected");
                Vec::new()
            }
        }
    }

    /// Handle a command and report whether rendered state changed, so a
    /// reactive owner can skip notifying its readers.
    pub fn handle_tracked(&mut self, command: Command) -> (bool, Vec<Effect>) {
        let before = self.revision;
        let effects = self.handle(command);
        (self.revision != before, effects)
    }

    pub fn try_handle(&mut self, command: Command) -> Result<Vec<Effect>> {
        match command {
            Command::Boot => Ok(self.boot()),
            Command::ToggleTheme => Ok(self.toggle_theme()),
            Command::QuickAdd => Ok(self.quick_add()),
            Command::CloseAssistant => Ok(self.close_assistant()),
            // The input element already shows the draft; keystrokes are not a
            // render change.
            Command::EditDraft(text) => {
                self.assistant.set_draft(text);
                Ok(Vec::new())
            }
            Command::SendMessage => Ok(self.send_message()),
            Command::DeliverReply => Ok(self.deliver_reply()),
            Command::ToggleTask(id) => self.toggle_task(id),
            Command::ToggleIndicator(id) => self.toggle_indicator(id),
            Command::SelectFilter(filter) => {
                let changed = self.filter.select(filter)?;
                self.touch(changed);
                Ok(Vec::new())
            }
            Command::SelectCalendarView(view) => {
                let changed = self.calendar_view.select(view)?;
                self.touch(changed);
                Ok(Vec::new())
            }
            Command::SearchFocused => Ok(self.set_search_focus(true)),
            Command::SearchBlurred => Ok(self.set_search_focus(false)),
            Command::AddCalendarEvent => Ok(vec![Effect::Alert("Add Event Modal would open here!".to_string())]),
            Command::DragStart(card) => self.begin_drag(card),
            Command::FadeDraggedCard(card) => {
                let faded = self.drag.fade(card);
                self.touch(faded);
                Ok(Vec::new())
            }
            Command::DragOver {
                column,
                pointer_y,
                boxes,
            } => self.drag_over(column, pointer_y, &boxes),
            Command::DragEnd => Ok(self.end_drag()),
            Command::DismissNotification(id) => Ok(self.dismiss_notification(id)),
            Command::ExpireNotification(id) => Ok(self.expire_notification(id)),
            Command::RemoveNotification(id) => {
                let removed = self.notifications.remove(id);
                self.touch(removed);
                Ok(Vec::new())
            }
        }
    }

    // ========================
    // Page load
    // ========================

    fn boot(&mut self) -> Vec<Effect> {
        let mut effects = vec![Effect::ApplyTheme(self.theme)];

        effects.push(Effect::Animate(
            Tween::from_to(AnimTarget::Sidebar, json!({"opacity": 0, "x": -100}), json!({"opacity": 1, "x": 0}))
                .duration(800)
                .delay(300)
                .ease(EASE_OUT),
        ));

        for (i, widget) in Widget::ALL.iter().enumerate() {
            effects.push(Effect::Animate(
                Tween::from_to(widget.anim_target(), json!({"opacity": 0, "y": 30}), json!({"opacity": 1, "y": 0}))
                    .duration(600)
                    .delay(i as u32 * 100)
                    .ease(EASE_OUT)
                    .on_scroll(ScrollTrigger::at("top 80%")),
            ));
        }

        for (i, column) in self.board.columns().iter().enumerate() {
            effects.push(Effect::Animate(
                Tween::from_to(AnimTarget::Column(column.id), json!({"opacity": 0, "y": 30}), json!({"opacity": 1, "y": 0}))
                    .duration(600)
                    .delay(i as u32 * 200)
                    .ease(EASE_OUT)
                    .on_scroll(ScrollTrigger::at("top 80%")),
            ));
        }

        effects.push(Effect::Animate(
            Tween::from_to(AnimTarget::Footer, json!({"opacity": 0, "y": 30}), json!({"opacity": 1, "y": 0}))
                .duration(600)
                .ease(EASE_OUT)
                .on_scroll(ScrollTrigger::at("top 90%")),
        ));

        effects.push(Effect::Animate(
            Tween::from_to(AnimTarget::QuickAdd, json!({"opacity": 0, "y": 30}), json!({"opacity": 1, "y": 0}))
                .duration(600)
                .delay(800)
                .ease(EASE_OUT)
                .on_scroll(ScrollTrigger::at("bottom 90%")),
        ));

        let seeded: Vec<NotificationId> = self
            .notifications
            .items()
            .iter()
            .filter(|n| n.origin == Origin::Seeded)
            .map(|n| n.id)
            .collect();
        for (index, id) in seeded.into_iter().enumerate() {
            effects.push(Effect::Animate(
                Tween::from_to(AnimTarget::Notification(id), json!({"opacity": 0, "x": 100}), json!({"opacity": 1, "x": 0}))
                    .duration(600)
                    .delay(index as u32 * self.config.notification_stagger_ms)
                    .ease(EASE_OUT),
            ));
            if self.config.expire_seeded_notifications {
                let (token, effect) = self.schedule(self.config.notification_ttl_ms, Command::ExpireNotification(id));
                self.notifications.arm_expiry(id, token);
                effects.push(effect);
            }
        }

        effects.push(Effect::Animate(
            Tween::from_to(AnimTarget::Assistant, json!({"opacity": 0, "x": 100}), json!({"opacity": 1, "x": 0}))
                .duration(600)
                .delay(1000)
                .ease(EASE_OUT),
        ));

        self.board.recompute_counts();
        self.touch(true);
        effects
    }

    // ========================
    // Drag and reorder
    // ========================

    pub fn begin_drag(&mut self, card: CardId) -> Result<Vec<Effect>> {
        if !self.board.contains_card(card) {
            return Err(BoardError::UnknownCard(card));
        }
        self.drag.begin(card)?;
        self.touch(true);
        debug!(card, "drag started");
        let (_, fade) = self.schedule(self.config.drag_fade_delay_ms, Command::FadeDraggedCard(card));
        Ok(vec![fade])
    }

    /// Move the dragged card to wherever the pointer currently points in
    /// `column`. Without an active drag this does nothing.
    pub fn drag_over(&mut self, column: ColumnId, pointer_y: f64, boxes: &[CardBox]) -> Result<Vec<Effect>> {
        let Some(card) = self.drag.subject() else {
            return Ok(Vec::new());
        };
        let point = compute_insertion_point(boxes, pointer_y, Some(card));
        if self.board.apply_insertion(column, point, card)? {
            self.touch(true);
            debug!(card, column, ?point, "card moved");
        }
        Ok(Vec::new())
    }

    pub fn end_drag(&mut self) -> Vec<Effect> {
        let Some(card) = self.drag.end() else {
            return Vec::new();
        };
        info!(card, column = ?self.board.column_of(card), "drag finished");
        self.recompute_counts();
        self.touch(true);
        Vec::new()
    }

    pub fn recompute_counts(&mut self) {
        self.board.recompute_counts();
    }

    // ========================
    // Toggles
    // ========================

    pub fn toggle_task(&mut self, id: u32) -> Result<Vec<Effect>> {
        let checked = self.tasks.toggle(id).ok_or(BoardError::UnknownTask(id))?;
        self.touch(true);
        let tween = if checked {
            Tween::from_to(AnimTarget::TaskCheckbox(id), json!({"scale": 0.8}), json!({"scale": 1}))
                .duration(400)
                .ease(EASE_BACK)
        } else {
            Tween::to(AnimTarget::TaskCheckbox(id), json!({"scale": 1})).duration(200)
        };
        Ok(vec![Effect::Animate(tween)])
    }

    pub fn toggle_indicator(&mut self, id: u32) -> Result<Vec<Effect>> {
        self.indicators.toggle(id).ok_or(BoardError::UnknownIndicator(id))?;
        self.touch(true);
        Ok(Vec::new())
    }

    fn set_search_focus(&mut self, focused: bool) -> Vec<Effect> {
        self.touch(self.search_focused != focused);
        self.search_focused = focused;
        let shadow = if focused {
            "0 0 0 3px rgba(144, 202, 249, 0.3)"
        } else {
            "var(--shadow-sm)"
        };
        vec![Effect::Animate(
            Tween::to(AnimTarget::SearchInput, json!({"boxShadow": shadow})).duration(300),
        )]
    }

    pub fn toggle_theme(&mut self) -> Vec<Effect> {
        self.theme = self.theme.toggled();
        self.touch(true);
        vec![Effect::ApplyTheme(self.theme)]
    }

    // ========================
    // Notifications
    // ========================

    fn quick_add(&mut self) -> Vec<Effect> {
        let mut effects = vec![
            Effect::Animate(Tween::to(AnimTarget::QuickAdd, json!({"scale": 1.2})).duration(200).ease(EASE_BACK)),
            Effect::Animate(
                Tween::to(AnimTarget::QuickAdd, json!({"scale": 1}))
                    .duration(200)
                    .delay(200)
                    .ease(EASE_BACK),
            ),
        ];
        effects.extend(self.post_notification("Quick Add", "What would you like to add?"));
        effects
    }

    pub fn post_notification(&mut self, title: &str, message: &str) -> Vec<Effect> {
        let id = self.notifications.post(title, message);
        self.touch(true);
        let (token, expiry) = self.schedule(self.config.notification_ttl_ms, Command::ExpireNotification(id));
        self.notifications.arm_expiry(id, token);
        vec![
            Effect::Animate(
                Tween::from_to(AnimTarget::Notification(id), json!({"opacity": 0, "x": 100}), json!({"opacity": 1, "x": 0}))
                    .duration(600)
                    .ease(EASE_OUT),
            ),
            expiry,
        ]
    }

    /// User clicked a notification away
    pub fn dismiss_notification(&mut self, id: NotificationId) -> Vec<Effect> {
        let Leave::Started { pending_expiry } = self.notifications.start_leaving(id) else {
            return Vec::new();
        };
        self.touch(true);
        let mut effects: Vec<Effect> = pending_expiry.into_iter().map(Effect::Cancel).collect();
        effects.push(Effect::Animate(
            Tween::to(AnimTarget::Notification(id), json!({"opacity": 0, "y": -20}))
                .duration(300)
                .then(Command::RemoveNotification(id)),
        ));
        effects
    }

    /// Expiry timer fired
    pub fn expire_notification(&mut self, id: NotificationId) -> Vec<Effect> {
        match self.notifications.start_leaving(id) {
            Leave::Started { .. } => {
                self.touch(true);
                vec![Effect::Animate(
                Tween::to(AnimTarget::Notification(id), json!({"opacity": 0, "x": 100}))
                    .duration(400)
                    .then(Command::RemoveNotification(id)),
                )]
            }
            Leave::Ignored => Vec::new(),
        }
    }

    // ========================
    // Assistant
    // ========================

    pub fn send_message(&mut self) -> Vec<Effect> {
        if self.assistant.send().is_none() {
            return Vec::new();
        }
        self.touch(true);
        let (_, reply) = self.schedule(self.config.assistant_reply_delay_ms, Command::DeliverReply);
        vec![Effect::ScrollToLatest, reply]
    }

    fn deliver_reply(&mut self) -> Vec<Effect> {
        self.assistant.reply(self.config.assistant_reply.clone());
        self.touch(true);
        vec![Effect::ScrollToLatest]
    }

    fn close_assistant(&mut self) -> Vec<Effect> {
        if !self.assistant.close() {
            return Vec::new();
        }
        self.touch(true);
        vec![Effect::Animate(
            Tween::to(AnimTarget::Assistant, json!({"opacity": 0, "x": 100})).duration(400),
        )]
    }
}
