//! Dashboard Scenario Tests
//!
//! Drives the controller the way the UI runtime does, with a virtual clock
//! standing in for browser timers and animations finishing on demand.

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use proptest::prelude::*;

    use crate::assistant::Role;
    use crate::config::DashboardConfig;
    use crate::kanban::{Card, CardBox, CardId, Column, ColumnId};
    use crate::notification::Phase;
    use crate::seed::Seed;
    use crate::selection::{CalendarView, TaskFilter};
    use crate::{Command, Dashboard, Effect, TimerToken};

    const CARD_HEIGHT: f64 = 40.0;
    const CARD_PITCH: f64 = 50.0;

    struct Harness {
        dash: Dashboard,
        now: u64,
        timers: BTreeMap<(u64, TimerToken), Command>,
        completions: Vec<Command>,
        /// ScrollToLatest directives seen so far
        scrolls: usize,
    }

    impl Harness {
        fn new(seed: Seed) -> Self {
            let dash = Dashboard::new(seed, DashboardConfig::default()).expect("valid seed");
            let mut harness = Self {
                dash,
                now: 0,
                timers: BTreeMap::new(),
                completions: Vec::new(),
                scrolls: 0,
            };
            harness.dispatch(Command::Boot);
            harness
        }

        fn dispatch(&mut self, command: Command) {
            let effects = self.dash.try_handle(command).expect("command accepted");
            self.apply(effects);
        }

        fn apply(&mut self, effects: Vec<Effect>) {
            for effect in effects {
                match effect {
                    Effect::Schedule { token, delay_ms, command } => {
                        self.timers.insert((self.now + delay_ms as u64, token), command);
                    }
                    Effect::Cancel(token) => self.timers.retain(|(_, t), _| *t != token),
                    Effect::Animate(tween) => self.completions.extend(tween.on_complete),
                    Effect::ScrollToLatest => self.scrolls += 1,
                    Effect::ApplyTheme(_) | Effect::Alert(_) => {}
                }
            }
        }

        /// Let every running tween finish
        fn finish_animations(&mut self) {
            while !self.completions.is_empty() {
                for command in std::mem::take(&mut self.completions) {
                    self.dispatch(command);
                }
            }
        }

        fn advance(&mut self, ms: u64) {
            let until = self.now + ms;
            loop {
                let Some((&(due, token), _)) = self.timers.first_key_value() else {
                    break;
                };
                if due > until {
                    break;
                }
                let command = self.timers.remove(&(due, token)).expect("timer present");
                self.now = due;
                self.dispatch(command);
            }
            self.now = until;
        }

        /// Rendered layout of a column: cards stacked top to bottom
        fn boxes(&self, column: ColumnId) -> Vec<CardBox> {
            self.dash
                .board()
                .column(column)
                .map(|c| {
                    c.cards
                        .iter()
                        .enumerate()
                        .map(|(i, card)| CardBox {
                            id: card.id,
                            top: i as f64 * CARD_PITCH,
                            height: CARD_HEIGHT,
                        })
                        .collect()
                })
                .unwrap_or_default()
        }

        fn drag(&mut self, card: CardId, column: ColumnId, pointer_y: f64) {
            self.dispatch(Command::DragStart(card));
            self.advance(0);
            let boxes = self.boxes(column);
            self.dispatch(Command::DragOver { column, pointer_y, boxes });
            self.dispatch(Command::DragEnd);
        }

        fn counts(&self) -> Vec<usize> {
            self.dash.board().columns().iter().map(|c| c.count).collect()
        }

        fn ids(&self, column: ColumnId) -> Vec<CardId> {
            self.dash.board().column(column).unwrap().cards.iter().map(|c| c.id).collect()
        }
    }

    fn seed_with_columns(columns: Vec<Column>) -> Seed {
        Seed {
            columns,
            ..Seed::demo()
        }
    }

    fn two_one_zero() -> Seed {
        seed_with_columns(vec![
            Column::new(1, "To Do", vec![Card::new(1, "a", "", ""), Card::new(2, "b", "", "")]),
            Column::new(2, "Doing", vec![Card::new(3, "c", "", "")]),
            Column::new(3, "Done", vec![]),
        ])
    }

    #[test]
    fn test_drag_single_card_to_empty_column() {
        let mut h = Harness::new(two_one_zero());
        assert_eq!(h.counts(), vec![2, 1, 0]);

        h.drag(3, 3, 500.0);

        assert_eq!(h.counts(), vec![2, 0, 1]);
        assert_eq!(h.ids(3), vec![3]);
        assert!(!h.dash.drag().is_active());
    }

    #[test]
    fn test_drag_inserts_by_midpoint() {
        let mut h = Harness::new(Seed::demo());
        // column 1 midpoints: 20, 70, 120
        h.drag(301, 1, 60.0);
        assert_eq!(h.ids(1), vec![101, 301, 102, 103]);
        assert_eq!(h.counts(), vec![4, 2, 0]);

        h.drag(103, 1, -5.0);
        assert_eq!(h.ids(1), vec![103, 101, 301, 102]);
    }

    #[test]
    fn test_counts_lag_until_drag_ends() {
        let mut h = Harness::new(two_one_zero());
        h.dispatch(Command::DragStart(1));
        let boxes = h.boxes(2);
        h.dispatch(Command::DragOver { column: 2, pointer_y: 0.0, boxes });
        assert_eq!(h.ids(2), vec![1, 3]);
        assert_eq!(h.counts(), vec![2, 1, 0]);
        h.dispatch(Command::DragEnd);
        assert_eq!(h.counts(), vec![1, 2, 0]);
    }

    #[test]
    fn test_dragged_card_fades_after_deferral() {
        let mut h = Harness::new(Seed::demo());
        h.dispatch(Command::DragStart(101));
        assert_eq!(h.dash.card_opacity(101), 1.0);
        h.advance(0);
        assert_eq!(h.dash.card_opacity(101), 0.4);
        h.dispatch(Command::DragEnd);
        assert_eq!(h.dash.card_opacity(101), 1.0);
    }

    #[test]
    fn test_fade_arriving_after_drop_is_ignored() {
        let mut h = Harness::new(Seed::demo());
        h.dispatch(Command::DragStart(101));
        h.dispatch(Command::DragEnd);
        h.advance(0);
        assert_eq!(h.dash.card_opacity(101), 1.0);
    }

    #[test]
    fn test_second_drag_rejected_while_active() {
        let mut h = Harness::new(Seed::demo());
        h.dispatch(Command::DragStart(101));
        assert!(h.dash.try_handle(Command::DragStart(102)).is_err());
        assert_eq!(h.dash.drag().subject(), Some(101));
    }

    #[test]
    fn test_posted_notification_expires() {
        let mut h = Harness::new(Seed::demo());
        h.dispatch(Command::QuickAdd);
        let id = h.dash.notifications().items().last().unwrap().id;

        h.advance(2999);
        assert_eq!(h.dash.notifications().get(id).unwrap().phase, Phase::Shown);
        h.advance(1);
        assert_eq!(h.dash.notifications().get(id).unwrap().phase, Phase::Leaving);
        h.finish_animations();
        assert!(h.dash.notifications().get(id).is_none());
    }

    #[test]
    fn test_dismiss_then_expiry_is_harmless() {
        let mut h = Harness::new(Seed::demo());
        h.dispatch(Command::QuickAdd);
        let id = h.dash.notifications().items().last().unwrap().id;

        h.dispatch(Command::DismissNotification(id));
        h.dispatch(Command::DismissNotification(id));
        h.finish_animations();
        assert!(h.dash.notifications().get(id).is_none());
        assert!(h.timers.is_empty());

        h.advance(5000);
        // a stale expiry that slipped past cancellation is still a no-op
        h.dispatch(Command::ExpireNotification(id));
        h.dispatch(Command::RemoveNotification(id));
        assert!(h.dash.notifications().get(id).is_none());
    }

    #[test]
    fn test_seeded_notifications_stay() {
        let mut h = Harness::new(Seed::demo());
        h.advance(60_000);
        assert_eq!(h.dash.notifications().items().len(), 2);
        assert!(h.dash.notifications().items().iter().all(|n| n.phase == Phase::Shown));
    }

    #[test]
    fn test_blank_message_is_ignored() {
        let mut h = Harness::new(Seed::demo());
        let log_before = h.dash.assistant().messages().to_vec();
        h.dispatch(Command::EditDraft("   ".to_string()));
        h.dispatch(Command::SendMessage);
        h.advance(1000);
        assert_eq!(h.dash.assistant().messages(), &log_before[..]);
        assert_eq!(h.dash.assistant().draft(), "   ");
        assert_eq!(h.scrolls, 0);
    }

    #[test]
    fn test_message_gets_one_reply() {
        let mut h = Harness::new(Seed::demo());
        let base = h.dash.assistant().messages().len();

        h.dispatch(Command::EditDraft("buy milk".to_string()));
        h.dispatch(Command::SendMessage);
        let messages = h.dash.assistant().messages();
        assert_eq!(messages.len(), base + 1);
        assert_eq!(messages[base].role, Role::User);
        assert_eq!(messages[base].text, "buy milk");
        assert_eq!(h.dash.assistant().draft(), "");
        assert_eq!(h.scrolls, 1);

        h.advance(499);
        assert_eq!(h.dash.assistant().messages().len(), base + 1);
        assert_eq!(h.scrolls, 1);

        h.advance(1);
        let messages = h.dash.assistant().messages();
        assert_eq!(messages.len(), base + 2);
        assert_eq!(messages[base + 1].role, Role::Assistant);
        assert_eq!(messages[base + 1].text, DashboardConfig::default().assistant_reply);
        assert_eq!(h.scrolls, 2);

        h.advance(10_000);
        assert_eq!(h.dash.assistant().messages().len(), base + 2);
        assert_eq!(h.scrolls, 2);
    }

    fn arb_drag() -> impl Strategy<Value = (usize, usize, f64)> {
        (0usize..16, 0usize..3, -50.0f64..400.0)
    }

    proptest! {
        #[test]
        fn prop_drags_conserve_cards(drags in prop::collection::vec(arb_drag(), 0..24)) {
            let mut h = Harness::new(Seed::demo());
            let total = h.dash.board().total_cards();
            let column_ids: Vec<ColumnId> = h.dash.board().columns().iter().map(|c| c.id).collect();
            let card_ids: Vec<CardId> = h.dash.board().columns().iter().flat_map(|c| c.cards.iter().map(|k| k.id)).collect();

            for (card_pick, column_pick, y) in drags {
                let card = card_ids[card_pick % card_ids.len()];
                h.drag(card, column_ids[column_pick], y);

                let counted: usize = h.counts().iter().sum();
                prop_assert_eq!(counted, total);
                for column in h.dash.board().columns() {
                    prop_assert_eq!(column.count, column.cards.len());
                }
                let homes = h.dash.board().columns().iter().filter(|c| c.cards.iter().any(|k| k.id == card)).count();
                prop_assert_eq!(homes, 1);
            }
        }

        #[test]
        fn prop_task_toggle_twice_restores(id in 1u32..5) {
            let mut h = Harness::new(Seed::demo());
            let before = h.dash.tasks().get(id).unwrap().checked;
            h.dispatch(Command::ToggleTask(id));
            h.dispatch(Command::ToggleTask(id));
            prop_assert_eq!(h.dash.tasks().get(id).unwrap().checked, before);
        }

        #[test]
        fn prop_last_selection_wins(x in 0usize..4, y in 0usize..4, v in 0usize..3, w in 0usize..3) {
            let mut h = Harness::new(Seed::demo());
            h.dispatch(Command::SelectFilter(TaskFilter::ALL[x]));
            h.dispatch(Command::SelectFilter(TaskFilter::ALL[y]));
            h.dispatch(Command::SelectCalendarView(CalendarView::ALL[v]));
            h.dispatch(Command::SelectCalendarView(CalendarView::ALL[w]));

            let filters = TaskFilter::ALL.iter().filter(|f| h.dash.filter().is_selected(**f)).count();
            prop_assert_eq!(filters, 1);
            prop_assert_eq!(h.dash.filter().selected(), TaskFilter::ALL[y]);
            prop_assert_eq!(h.dash.calendar_view().selected(), CalendarView::ALL[w]);
        }
    }
}
