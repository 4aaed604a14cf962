//! Leptos DragDrop Utilities
//!
//! Pointer-driven drag-and-drop for Leptos using mouse events.
//! Uses a movement threshold to distinguish click from drag, and lets
//! containers report the live geometry of their children while dragging.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Attribute holding the numeric id of a draggable child
pub const DND_ID_ATTR: &str = "data-dnd-id";

/// Tag an element as draggable child `id`: `<div use:dnd_id=id>`.
/// [`measure_children`] reads the same attribute back.
pub fn dnd_id(el: web_sys::Element, id: u32) {
    let _ = el.set_attribute(DND_ID_ATTR, &id.to_string());
}

fn parse_dnd_id(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// Vertical extent of a rendered child, viewport coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChildBox {
    pub id: u32,
    pub top: f64,
    pub height: f64,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<u32>>,
    pub dragging_id_write: WriteSignal<Option<u32>>,
    /// Pending item id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<u32>>,
    pub pending_id_write: WriteSignal<Option<u32>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<u32>);
    let (pending_id_read, pending_id_write) = signal(None::<u32>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.pending_id_write.set(None);
}

/// Create mousedown handler for draggable items
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, item_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            // Keep the browser from starting a text selection
            ev.prevent_default();
            dnd.pending_id_write.set(Some(item_id));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Bind document mousemove - starts the drag once the pointer moved enough
pub fn bind_global_mousemove<F>(dnd: DndSignals, on_start: F)
where
    F: Fn(u32) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let Some(pending) = dnd.pending_id_read.get_untracked() else {
            return;
        };
        if dnd.dragging_id_read.get_untracked().is_some() {
            return;
        }
        let dx = (ev.client_x() - dnd.start_x_read.get_untracked()).abs();
        let dy = (ev.client_y() - dnd.start_y_read.get_untracked()).abs();

        if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
            dnd.dragging_id_write.set(Some(pending));
            on_start(pending);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Bind document mouseup - finishes a drag wherever the pointer is released.
/// Also binds the global mousemove that starts drags.
pub fn bind_global_mouseup<S, E>(dnd: DndSignals, on_start: S, on_end: E)
where
    S: Fn(u32) + 'static,
    E: Fn(u32) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging_id = dnd.dragging_id_read.get_untracked();
        end_drag(&dnd);
        // A plain click never started a drag; nothing to finish
        if let Some(dragged) = dragging_id {
            on_end(dragged);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    bind_global_mousemove(dnd, on_start);
}

/// Measure the children of `container` matching `selector`, in DOM order.
/// Children not tagged with [`dnd_id`] are skipped.
pub fn measure_children(container: &web_sys::Element, selector: &str) -> Vec<ChildBox> {
    let Ok(nodes) = container.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .filter_map(|el| {
            let id = parse_dnd_id(&el.get_attribute(DND_ID_ATTR)?)?;
            let rect = el.get_bounding_client_rect();
            Some(ChildBox {
                id,
                top: rect.top(),
                height: rect.height(),
            })
        })
        .collect()
}

/// Create mousemove handler for a drop container.
/// While something is dragged, reports the dragged id, the container's
/// current child geometry and the pointer's y coordinate.
pub fn make_on_container_mousemove<F>(
    dnd: DndSignals,
    container: NodeRef<leptos::html::Div>,
    selector: &'static str,
    on_over: F,
) -> impl Fn(web_sys::MouseEvent) + 'static
where
    F: Fn(u32, Vec<ChildBox>, f64) + 'static,
{
    move |ev: web_sys::MouseEvent| {
        let Some(dragged) = dnd.dragging_id_read.get_untracked() else {
            return;
        };
        let Some(el) = container.get_untracked() else {
            return;
        };
        let boxes = measure_children(&el, selector);
        on_over(dragged, boxes, f64::from(ev.client_y()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dnd_id() {
        assert_eq!(parse_dnd_id("301"), Some(301));
        assert_eq!(parse_dnd_id(" 7 "), Some(7));
        assert_eq!(parse_dnd_id(""), None);
        assert_eq!(parse_dnd_id("card-3"), None);
        assert_eq!(parse_dnd_id("-1"), None);
    }
}
