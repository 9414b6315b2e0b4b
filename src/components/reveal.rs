// Fade-in wrapper: children become visible the first time they scroll
// into view.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Element;
use yew::prelude::*;

/// The element counts as "in view" once its top edge clears the bottom
/// of the viewport by this margin.
const REVEAL_MARGIN_PX: f64 = 50.0;

pub fn element_in_view(node_ref: &NodeRef, margin: f64) -> bool {
    let Some(el) = node_ref.cast::<Element>() else {
        return false;
    };
    let viewport = web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    el.get_bounding_client_rect().top() < viewport - margin
}

#[derive(Properties, PartialEq, Clone)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node_ref = use_node_ref();
    let visible = use_state_eq(|| false);

    {
        let node_ref = node_ref.clone();
        let visible = visible.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            // Content above the fold reveals without any scrolling.
            if element_in_view(&node_ref, REVEAL_MARGIN_PX) {
                visible.set(true);
            }
            let scroll_cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
                if element_in_view(&node_ref, REVEAL_MARGIN_PX) {
                    visible.set(true);
                }
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

    let style = if *visible {
        "opacity:1; transform:translateY(0); transition:opacity 0.6s ease, transform 0.6s ease;"
    } else {
        "opacity:0; transform:translateY(24px); transition:opacity 0.6s ease, transform 0.6s ease;"
    };

    html! {
        <div ref={node_ref} class={classes!("fade-in", (*visible).then_some("visible"))} style={style}>
            { props.children.clone() }
        </div>
    }
}
