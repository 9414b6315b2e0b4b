// Back-to-top button, shown once the page is scrolled past a threshold.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::util::{scroll_to_y, window_scroll_y};

const SHOW_THRESHOLD_PX: f64 = 300.0;

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let shown = use_state_eq(|| false);

    {
        let shown = shown.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let scroll_cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
                shown.set(window_scroll_y() > SHOW_THRESHOLD_PX);
            }) as Box<dyn FnMut(_)>);
            if let Some(win) = &window {
                let _ = win
                    .add_event_listener_with_callback("scroll", scroll_cb.as_ref().unchecked_ref());
            }
            move || {
                if let Some(win) = &window {
                    let _ = win.remove_event_listener_with_callback(
                        "scroll",
                        scroll_cb.as_ref().unchecked_ref(),
                    );
                }
                drop(scroll_cb);
            }
        });
    }

    let onclick = Callback::from(|_: MouseEvent| scroll_to_y(0.0));

    let style = format!(
        "position:fixed; right:24px; bottom:24px; width:44px; height:44px; border-radius:50%; \
         background:#9b5cff; color:#fff; border:none; font-size:20px; cursor:pointer; z-index:90; \
         opacity:{}; pointer-events:{}; transition:opacity 0.3s ease;",
        if *shown { "1" } else { "0" },
        if *shown { "auto" } else { "none" },
    );

    html! {
        <button class={classes!("back-to-top", (*shown).then_some("show"))} {onclick} style={style} title="Back to top">
            {"↑"}
        </button>
    }
}
