//! Leptos Swipe Utilities
//!
//! Horizontal swipe gestures for Leptos using pointer events.
//! Uses a distance threshold to turn a release into an action.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Action committed when a release crosses the threshold
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SwipeAction {
    /// Swiped right past the threshold (toggle completion)
    Complete,
    /// Swiped left past the threshold (delete)
    Delete,
}

/// Swipe state signals
#[derive(Clone, Copy)]
pub struct SwipeSignals {
    /// Entry currently under the pointer (None = no active gesture)
    pub active_id_read: ReadSignal<Option<String>>,
    pub active_id_write: WriteSignal<Option<String>>,
    /// Pointer x at pointerdown
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    /// Current horizontal offset, unclamped
    pub offset_x_read: ReadSignal<i32>,
    pub offset_x_write: WriteSignal<i32>,
}

/// Drag distance in CSS px past which a release commits an action.
/// Tunable; also the scale for affordance opacity and the transform clamp.
pub const SWIPE_THRESHOLD: i32 = 200;

pub fn create_swipe_signals() -> SwipeSignals {
    let (active_id_read, active_id_write) = signal(None::<String>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (offset_x_read, offset_x_write) = signal(0i32);
    SwipeSignals {
        active_id_read,
        active_id_write,
        start_x_read,
        start_x_write,
        offset_x_read,
        offset_x_write,
    }
}

/// Decide what a release at `offset` commits. Strictly past the
/// threshold only; an offset of exactly ±200 commits nothing.
pub fn evaluate_release(offset: i32) -> Option<SwipeAction> {
    if offset > SWIPE_THRESHOLD {
        Some(SwipeAction::Complete)
    } else if offset < -SWIPE_THRESHOLD {
        Some(SwipeAction::Delete)
    } else {
        None
    }
}

/// Clamp the offset for transform display. The tracked value stays raw.
pub fn clamp_offset(offset: i32) -> i32 {
    offset.clamp(-SWIPE_THRESHOLD, SWIPE_THRESHOLD)
}

/// Opacity of the complete affordance: scales 0..1 over rightward drag
pub fn complete_opacity(offset: i32) -> f64 {
    (offset.max(0) as f64 / SWIPE_THRESHOLD as f64).min(1.0)
}

/// Opacity of the delete affordance: scales 0..1 over leftward drag
pub fn delete_opacity(offset: i32) -> f64 {
    complete_opacity(-offset)
}

/// Reset gesture state (no commit)
pub fn end_swipe(swipe: &SwipeSignals) {
    swipe.active_id_write.set(None);
    swipe.offset_x_write.set(0);
}

/// Create pointerdown handler for swipeable rows
/// Records the active entry and the start position
pub fn make_on_pointerdown(swipe: SwipeSignals, entry_id: String) -> impl Fn(web_sys::PointerEvent) + 'static {
    move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        // Ignore if target is input or button
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        swipe.active_id_write.set(Some(entry_id.clone()));
        swipe.start_x_write.set(ev.client_x());
        swipe.offset_x_write.set(0);
    }
}

/// Create pointermove handler for document - tracks the raw offset
pub fn bind_global_pointermove(swipe: SwipeSignals) {
    use wasm_bindgen::closure::Closure;

    let on_pointermove = Closure::<dyn FnMut(web_sys::PointerEvent)>::new(move |ev: web_sys::PointerEvent| {
        if swipe.active_id_read.get_untracked().is_some() {
            let start_x = swipe.start_x_read.get_untracked();
            swipe.offset_x_write.set(ev.client_x() - start_x);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("pointermove", on_pointermove.as_ref().unchecked_ref());
        }
    }
    on_pointermove.forget();
}

/// Bind global pointerup handler for commit detection
///
/// The offset is read exactly once at release; the spring-back animation
/// that follows never changes what was committed.
pub fn bind_global_pointerup<F>(swipe: SwipeSignals, on_commit: F)
where
    F: Fn(String, SwipeAction) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_pointerup = Closure::<dyn FnMut(web_sys::PointerEvent)>::new(move |_ev: web_sys::PointerEvent| {
        let active_id = swipe.active_id_read.get_untracked();
        let offset = swipe.offset_x_read.get_untracked();

        // Clear gesture state first so the view springs back
        end_swipe(&swipe);

        if let Some(id) = active_id {
            if let Some(action) = evaluate_release(offset) {
                on_commit(id, action);
            }
        }
    });

    let on_pointercancel = Closure::<dyn FnMut(web_sys::PointerEvent)>::new(move |_ev: web_sys::PointerEvent| {
        // Interrupted gesture (browser took over the pointer): reset, no commit
        end_swipe(&swipe);
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("pointerup", on_pointerup.as_ref().unchecked_ref());
            let _ = doc.add_event_listener_with_callback("pointercancel", on_pointercancel.as_ref().unchecked_ref());
        }
    }
    on_pointerup.forget();
    on_pointercancel.forget();

    // Also bind global pointermove
    bind_global_pointermove(swipe);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_past_threshold_completes() {
        assert_eq!(evaluate_release(201), Some(SwipeAction::Complete));
        assert_eq!(evaluate_release(500), Some(SwipeAction::Complete));
    }

    #[test]
    fn test_release_past_negative_threshold_deletes() {
        assert_eq!(evaluate_release(-201), Some(SwipeAction::Delete));
        assert_eq!(evaluate_release(-500), Some(SwipeAction::Delete));
    }

    #[test]
    fn test_release_below_threshold_no_action() {
        assert_eq!(evaluate_release(150), None);
        assert_eq!(evaluate_release(-150), None);
        assert_eq!(evaluate_release(0), None);
    }

    #[test]
    fn test_release_exactly_at_threshold_no_action() {
        assert_eq!(evaluate_release(200), None);
        assert_eq!(evaluate_release(-200), None);
    }

    #[test]
    fn test_opacity_scales_with_drag() {
        assert_eq!(complete_opacity(100), 0.5);
        assert_eq!(complete_opacity(200), 1.0);
        assert_eq!(complete_opacity(300), 1.0);
        assert_eq!(delete_opacity(-100), 0.5);
        assert_eq!(delete_opacity(-300), 1.0);
    }

    #[test]
    fn test_opacity_zero_on_wrong_side() {
        assert_eq!(complete_opacity(-50), 0.0);
        assert_eq!(delete_opacity(50), 0.0);
    }

    #[test]
    fn test_clamp_offset_for_display() {
        assert_eq!(clamp_offset(350), 200);
        assert_eq!(clamp_offset(-350), -200);
        assert_eq!(clamp_offset(120), 120);
    }
}
