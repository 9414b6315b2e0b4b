// Fixed navbar: section links with scrollspy, smooth scroll and a
// mobile menu that locks body scroll while open.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, KeyboardEvent, MouseEvent, Node};
use yew::prelude::*;

use super::modal::set_body_scroll_lock;
use crate::util::{scroll_to_y, window_scroll_y};

/// Section ids in page order; scrollspy walks these top to bottom.
pub const SECTIONS: [(&str, &str); 6] = [
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("activities", "Activities"),
    ("contact", "Contact"),
];

/// Fixed-navbar height compensated for when jumping to an anchor.
pub const NAV_OFFSET_PX: f64 = 80.0;

/// Smooth-scrolls so `section_id` lands just below the fixed navbar.
pub fn scroll_to_section(section_id: &str) {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(el) = doc
        .get_element_by_id(section_id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        scroll_to_y(el.offset_top() as f64 - NAV_OFFSET_PX);
    }
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let menu_open = use_state_eq(|| false);
    let active = use_state_eq(|| "home");
    let scrolled = use_state_eq(|| false);
    let menu_ref = use_node_ref();
    let toggle_ref = use_node_ref();

    // Scrollspy + navbar backdrop change, one window scroll listener.
    {
        let active = active.clone();
        let scrolled = scrolled.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let scroll_cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
                let y = window_scroll_y();
                scrolled.set(y > 100.0);
                let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
                    return;
                };
                let probe = y + 100.0;
                for (id, _) in SECTIONS {
                    if let Some(el) = doc
                        .get_element_by_id(id)
                        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                    {
                        let top = el.offset_top() as f64;
                        let height = el.offset_height() as f64;
                        if probe >= top && probe < top + height {
                            active.set(id);
                        }
                    }
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

    // While the mobile menu is open: close on outside click or Escape.
    {
        let menu_open_handle = menu_open.clone();
        let menu_ref = menu_ref.clone();
        let toggle_ref = toggle_ref.clone();
        use_effect_with(*menu_open, move |open| {
            let document = web_sys::window().and_then(|w| w.document());
            let mut cleanup: Option<Box<dyn FnOnce()>> = None;
            if *open {
                let click_cb = {
                    let menu_open = menu_open_handle.clone();
                    let menu_ref = menu_ref.clone();
                    let toggle_ref = toggle_ref.clone();
                    Closure::wrap(Box::new(move |e: MouseEvent| {
                        let target: Option<Node> =
                            e.target().and_then(|t| t.dyn_into::<Node>().ok());
                        let inside = |r: &NodeRef| {
                            r.get()
                                .is_some_and(|n| n.contains(target.as_ref()))
                        };
                        if !inside(&menu_ref) && !inside(&toggle_ref) {
                            menu_open.set(false);
                            set_body_scroll_lock(false);
                        }
                    }) as Box<dyn FnMut(_)>)
                };
                let key_cb = {
                    let menu_open = menu_open_handle.clone();
                    Closure::wrap(Box::new(move |e: KeyboardEvent| {
                        if e.key() == "Escape" {
                            menu_open.set(false);
                            set_body_scroll_lock(false);
                        }
                    }) as Box<dyn FnMut(_)>)
                };
                if let Some(doc) = &document {
                    let _ = doc.add_event_listener_with_callback(
                        "click",
                        click_cb.as_ref().unchecked_ref(),
                    );
                    let _ = doc.add_event_listener_with_callback(
                        "keydown",
                        key_cb.as_ref().unchecked_ref(),
                    );
                }
                cleanup = Some(Box::new(move || {
                    if let Some(doc) = &document {
                        let _ = doc.remove_event_listener_with_callback(
                            "click",
                            click_cb.as_ref().unchecked_ref(),
                        );
                        let _ = doc.remove_event_listener_with_callback(
                            "keydown",
                            key_cb.as_ref().unchecked_ref(),
                        );
                    }
                }));
            }
            move || {
                if let Some(f) = cleanup {
                    f();
                }
            }
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            let next = !*menu_open;
            menu_open.set(next);
            set_body_scroll_lock(next);
        })
    };

    let nav_style = format!(
        "position:fixed; top:0; left:0; right:0; z-index:100; display:flex; align-items:center; \
         justify-content:space-between; padding:14px 24px; backdrop-filter:blur(20px); background:{};",
        if *scrolled {
            "rgba(15,14,19,0.95)"
        } else {
            "rgba(15,14,19,0.9)"
        }
    );

    html! {
        <nav class="navbar" style={nav_style}>
            <span style="font-weight:bold; color:#9b5cff; font-size:18px;">{ props.brand.clone() }</span>
            <button ref={toggle_ref} class="nav-toggle" onclick={toggle_menu.clone()}
                style="background:none; border:none; color:#fff; font-size:22px; cursor:pointer;">{"☰"}</button>
            <ul ref={menu_ref} class={classes!("nav-menu", (*menu_open).then_some("active"))}
                style="display:flex; gap:18px; list-style:none; margin:0; padding:0;">
                { for SECTIONS.iter().map(|(id, label)| {
                    let id = *id;
                    let menu_open = menu_open.clone();
                    let onclick = Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        if *menu_open {
                            menu_open.set(false);
                            set_body_scroll_lock(false);
                        }
                        scroll_to_section(id);
                    });
                    let is_active = *active == id;
                    html! {
                        <li key={id}>
                            <a href={format!("#{id}")} {onclick}
                                class={classes!("nav-link", is_active.then_some("active"))}
                                style={format!("text-decoration:none; cursor:pointer; color:{};", if is_active { "#9b5cff" } else { "#b9b6c9" })}>
                                { *label }
                            </a>
                        </li>
                    }
                }) }
            </ul>
        </nav>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct NavbarProps {
    pub brand: AttrValue,
}
