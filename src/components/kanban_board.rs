//! Kanban Board Component
//!
//! Columns of draggable cards. Uses leptos-dragdrop: a card is picked up on
//! mousedown + movement, every mousemove over a column reports the column's
//! card geometry, and a document-level mouseup ends the drag.

use board_core::{AnimTarget, Card, CardBox, ColumnId, Command};
use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::context::use_dashboard;

#[component]
pub fn KanbanBoard() -> impl IntoView {
    let ctx = use_dashboard();

    let dnd = create_dnd_signals();
    bind_global_mouseup(
        dnd,
        move |card| ctx.dispatch(Command::DragStart(card)),
        move |_| ctx.dispatch(Command::DragEnd),
    );

    // The set of columns is fixed; only their content changes
    let column_ids: Vec<ColumnId> = ctx.state.with_untracked(|d| d.board().columns().iter().map(|c| c.id).collect());

    view! {
        <section class="kanban-section">
            <h2>"Project Board"</h2>
            <div class=move || {
                if dnd.dragging_id_read.get().is_some() { "kanban-board dragging" } else { "kanban-board" }
            }>
                {column_ids
                    .into_iter()
                    .map(|column_id| view! { <KanbanColumn column_id=column_id dnd=dnd /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn KanbanColumn(column_id: ColumnId, dnd: DndSignals) -> impl IntoView {
    let ctx = use_dashboard();
    let cards_ref = NodeRef::<leptos::html::Div>::new();

    let title = ctx.state.with_untracked(|d| d.board().column(column_id).map(|c| c.title.clone()).unwrap_or_default());
    let count = move || ctx.state.with(|d| d.board().column(column_id).map_or(0, |c| c.count));
    let cards = move || ctx.state.with(|d| d.board().column(column_id).map(|c| c.cards.clone()).unwrap_or_default());

    let on_mousemove = make_on_container_mousemove(dnd, cards_ref, ".kanban-card", move |_dragged, boxes, pointer_y| {
        let boxes = boxes
            .into_iter()
            .map(|b| CardBox { id: b.id, top: b.top, height: b.height })
            .collect();
        ctx.dispatch(Command::DragOver { column: column_id, pointer_y, boxes });
    });

    view! {
        <div class="kanban-column" data-anim=AnimTarget::Column(column_id).key() on:mousemove=on_mousemove>
            <div class="kanban-column-header">
                <h3>{title}</h3>
                <span class="kanban-count">{count}</span>
            </div>
            <div class="kanban-cards" node_ref=cards_ref>
                <For
                    each=cards
                    key=|card| card.id
                    children=move |card| view! { <KanbanCard card=card dnd=dnd /> }
                />
            </div>
        </div>
    }
}

#[component]
fn KanbanCard(card: Card, dnd: DndSignals) -> impl IntoView {
    let ctx = use_dashboard();
    let id = card.id;
    let style = move || format!("opacity: {}", ctx.state.with(|d| d.card_opacity(id)));

    view! {
        <div
            class="kanban-card"
            use:dnd_id=id
            style=style
            on:mousedown=make_on_mousedown(dnd, id)
        >
            <span class="kanban-tag">{card.tag}</span>
            <p class="kanban-title">{card.title}</p>
            <span class="kanban-due">{card.due}</span>
        </div>
    }
}
