// Shared modal plumbing: show/hide transition, close sequencing, body
// scroll lock, and the wheel/drag/pinch listener wiring both the image
// modal and the gallery modal hang their zoom state on.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, KeyboardEvent, MouseEvent, TouchEvent, TouchList, WheelEvent};
use yew::prelude::*;

use crate::state::{ZoomState, touch_distance};
use crate::util::{clear_timeout, set_timeout};

/// Fade transition length; must match the inline `transition` styles.
pub const TRANSITION_MS: i32 = 300;
/// Delay before flipping an overlay to its shown state, so the browser
/// paints the hidden frame first and the entrance transition runs.
pub const SHOW_DELAY_MS: i32 = 10;

/// Writes the current zoom transform and cursor hint onto the modal
/// image. A detached ref (mid-teardown timer) is a no-op.
pub fn apply_zoom(image_ref: &NodeRef, zoom: &ZoomState) {
    if let Some(img) = image_ref.cast::<HtmlElement>() {
        let style = img.style();
        let _ = style.set_property("transform", &zoom.transform());
        let _ = style.set_property("cursor", zoom.cursor());
    }
}

/// Body scroll lock for the lifetime of an open overlay.
pub fn set_body_scroll_lock(locked: bool) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        if locked {
            let _ = body.style().set_property("overflow", "hidden");
        } else {
            let _ = body.style().remove_property("overflow");
        }
    }
}

/// Distance between the first two touch points, if both exist.
pub fn pinch_distance(touches: &TouchList) -> Option<f64> {
    let a = touches.item(0)?;
    let b = touches.item(1)?;
    Some(touch_distance(
        a.client_x() as f64,
        a.client_y() as f64,
        b.client_x() as f64,
        b.client_y() as f64,
    ))
}

/// Inline style for the overlay root; opacity carries the fade.
pub fn overlay_style(show: bool) -> String {
    format!(
        "position:fixed; inset:0; z-index:1000; display:flex; align-items:center; justify-content:center; \
         opacity:{}; transition:opacity 0.3s ease;",
        if show { "1" } else { "0" }
    )
}

/// Overlay shown-state. Flips to `true` on a queued tick after mount so
/// the entrance transition is observable instead of being coalesced into
/// the initial paint.
#[hook]
pub fn use_show_transition() -> UseStateHandle<bool> {
    let show = use_state(|| false);
    {
        let show = show.clone();
        use_effect_with((), move |_| {
            let cb = Closure::wrap(Box::new(move || show.set(true)) as Box<dyn FnMut()>);
            let id = set_timeout(&cb, SHOW_DELAY_MS);
            move || {
                clear_timeout(id);
                drop(cb);
            }
        });
    }
    show
}

/// Idempotent close: fades the overlay out, unlocks body scroll, and
/// emits `on_close` once the transition duration has elapsed. A second
/// invocation while closing is a no-op, and the deferred emit checks the
/// overlay node is still attached before acting.
#[hook]
pub fn use_modal_close(
    show: UseStateHandle<bool>,
    overlay_ref: NodeRef,
    on_close: Callback<()>,
) -> Callback<()> {
    let closing = use_mut_ref(|| false);
    Callback::from(move |_: ()| {
        if *closing.borrow() {
            return;
        }
        *closing.borrow_mut() = true;
        show.set(false);
        set_body_scroll_lock(false);
        let overlay_ref = overlay_ref.clone();
        let on_close = on_close.clone();
        if let Some(win) = web_sys::window() {
            let f = Closure::once_into_js(move || {
                // The overlay may already be gone if a newer modal
                // replaced this one mid-transition.
                if overlay_ref.get().is_some_and(|n| n.is_connected()) {
                    on_close.emit(());
                }
            });
            let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
                f.unchecked_ref(),
                TRANSITION_MS,
            );
        }
    })
}

/// Wires wheel zoom, drag-pan, two-finger pinch and a document keydown
/// listener to one modal's `ZoomState`, and locks body scroll. All
/// listeners are registered once on mount and detached in the effect
/// cleanup, so repeated open/close cycles never leak handlers.
#[hook]
pub fn use_modal_gestures(
    container_ref: NodeRef,
    image_ref: NodeRef,
    zoom: Rc<RefCell<ZoomState>>,
    on_key: Callback<KeyboardEvent>,
) {
    use_effect_with((), move |_| {
        let document = web_sys::window().and_then(|w| w.document());
        set_body_scroll_lock(true);

        let container = container_ref.cast::<HtmlElement>();
        let image = image_ref.cast::<HtmlElement>();

        // Wheel zoom; the event is consumed so the page never scrolls.
        let wheel_cb = {
            let zoom = zoom.clone();
            let image_ref = image_ref.clone();
            Closure::wrap(Box::new(move |e: WheelEvent| {
                e.prevent_default();
                let mut z = zoom.borrow_mut();
                z.on_wheel(e.delta_y());
                apply_zoom(&image_ref, &z);
            }) as Box<dyn FnMut(_)>)
        };
        if let Some(c) = &container {
            let _ = c.add_event_listener_with_callback("wheel", wheel_cb.as_ref().unchecked_ref());
        }

        // Drag-pan. mousedown on the image, move/up on the document so a
        // drag that leaves the frame still ends cleanly.
        let mousedown_cb = {
            let zoom = zoom.clone();
            let image_ref = image_ref.clone();
            Closure::wrap(Box::new(move |e: MouseEvent| {
                if e.button() == 0 {
                    e.prevent_default();
                    let mut z = zoom.borrow_mut();
                    z.drag_start(e.client_x() as f64, e.client_y() as f64);
                    apply_zoom(&image_ref, &z);
                }
            }) as Box<dyn FnMut(_)>)
        };
        if let Some(img) = &image {
            let _ = img
                .add_event_listener_with_callback("mousedown", mousedown_cb.as_ref().unchecked_ref());
        }

        let mousemove_cb = {
            let zoom = zoom.clone();
            let image_ref = image_ref.clone();
            Closure::wrap(Box::new(move |e: MouseEvent| {
                let mut z = zoom.borrow_mut();
                if z.is_dragging() {
                    z.drag_move(e.client_x() as f64, e.client_y() as f64);
                    apply_zoom(&image_ref, &z);
                }
            }) as Box<dyn FnMut(_)>)
        };
        let mouseup_cb = {
            let zoom = zoom.clone();
            let image_ref = image_ref.clone();
            Closure::wrap(Box::new(move |_e: MouseEvent| {
                let mut z = zoom.borrow_mut();
                z.drag_end();
                apply_zoom(&image_ref, &z);
            }) as Box<dyn FnMut(_)>)
        };
        if let Some(doc) = &document {
            let _ = doc
                .add_event_listener_with_callback("mousemove", mousemove_cb.as_ref().unchecked_ref());
            let _ =
                doc.add_event_listener_with_callback("mouseup", mouseup_cb.as_ref().unchecked_ref());
        }

        // Two-finger pinch zoom.
        let touchstart_cb = {
            let zoom = zoom.clone();
            Closure::wrap(Box::new(move |e: TouchEvent| {
                if let Some(dist) = pinch_distance(&e.touches()) {
                    zoom.borrow_mut().pinch_start(dist);
                }
            }) as Box<dyn FnMut(_)>)
        };
        let touchmove_cb = {
            let zoom = zoom.clone();
            let image_ref = image_ref.clone();
            Closure::wrap(Box::new(move |e: TouchEvent| {
                e.prevent_default();
                if let Some(dist) = pinch_distance(&e.touches()) {
                    let mut z = zoom.borrow_mut();
                    z.pinch_move(dist);
                    apply_zoom(&image_ref, &z);
                }
            }) as Box<dyn FnMut(_)>)
        };
        let touchend_cb = {
            let zoom = zoom.clone();
            Closure::wrap(Box::new(move |e: TouchEvent| {
                if e.touches().length() < 2 {
                    zoom.borrow_mut().pinch_end();
                }
            }) as Box<dyn FnMut(_)>)
        };
        if let Some(c) = &container {
            let _ = c
                .add_event_listener_with_callback("touchstart", touchstart_cb.as_ref().unchecked_ref());
            let _ = c
                .add_event_listener_with_callback("touchmove", touchmove_cb.as_ref().unchecked_ref());
            let _ =
                c.add_event_listener_with_callback("touchend", touchend_cb.as_ref().unchecked_ref());
            let _ = c
                .add_event_listener_with_callback("touchcancel", touchend_cb.as_ref().unchecked_ref());
        }

        // Escape / arrow handling is the caller's; one listener per open.
        let keydown_cb = {
            Closure::wrap(Box::new(move |e: KeyboardEvent| {
                on_key.emit(e);
            }) as Box<dyn FnMut(_)>)
        };
        if let Some(doc) = &document {
            let _ =
                doc.add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref());
        }

        move || {
            set_body_scroll_lock(false);
            if let Some(c) = &container {
                let _ =
                    c.remove_event_listener_with_callback("wheel", wheel_cb.as_ref().unchecked_ref());
                let _ = c.remove_event_listener_with_callback(
                    "touchstart",
                    touchstart_cb.as_ref().unchecked_ref(),
                );
                let _ = c.remove_event_listener_with_callback(
                    "touchmove",
                    touchmove_cb.as_ref().unchecked_ref(),
                );
                let _ = c.remove_event_listener_with_callback(
                    "touchend",
                    touchend_cb.as_ref().unchecked_ref(),
                );
                let _ = c.remove_event_listener_with_callback(
                    "touchcancel",
                    touchend_cb.as_ref().unchecked_ref(),
                );
            }
            if let Some(img) = &image {
                let _ = img.remove_event_listener_with_callback(
                    "mousedown",
                    mousedown_cb.as_ref().unchecked_ref(),
                );
            }
            if let Some(doc) = &document {
                let _ = doc.remove_event_listener_with_callback(
                    "mousemove",
                    mousemove_cb.as_ref().unchecked_ref(),
                );
                let _ = doc.remove_event_listener_with_callback(
                    "mouseup",
                    mouseup_cb.as_ref().unchecked_ref(),
                );
                let _ = doc.remove_event_listener_with_callback(
                    "keydown",
                    keydown_cb.as_ref().unchecked_ref(),
                );
            }
            let _keep_alive = (
                &wheel_cb,
                &mousedown_cb,
                &mousemove_cb,
                &mouseup_cb,
                &touchstart_cb,
                &touchmove_cb,
                &touchend_cb,
                &keydown_cb,
            );
        }
    });
}

/// Zoom-in / zoom-out / reset callbacks for the button cluster.
pub fn zoom_button_callbacks(
    zoom: &Rc<RefCell<ZoomState>>,
    image_ref: &NodeRef,
) -> (Callback<()>, Callback<()>, Callback<()>) {
    let zoom_in = {
        let zoom = zoom.clone();
        let image_ref = image_ref.clone();
        Callback::from(move |_| {
            let mut z = zoom.borrow_mut();
            z.zoom_in();
            apply_zoom(&image_ref, &z);
        })
    };
    let zoom_out = {
        let zoom = zoom.clone();
        let image_ref = image_ref.clone();
        Callback::from(move |_| {
            let mut z = zoom.borrow_mut();
            z.zoom_out();
            apply_zoom(&image_ref, &z);
        })
    };
    let zoom_reset = {
        let zoom = zoom.clone();
        let image_ref = image_ref.clone();
        Callback::from(move |_| {
            let mut z = zoom.borrow_mut();
            z.reset();
            apply_zoom(&image_ref, &z);
        })
    };
    (zoom_in, zoom_out, zoom_reset)
}
