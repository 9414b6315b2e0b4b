// Hero banner: cycling typing effect plus the CTA button.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use super::navbar::scroll_to_section;
use crate::state::TypingCycle;
use crate::util::{clear_timeout, set_timeout};

const INITIAL_DELAY_MS: i32 = 1000;

#[derive(Properties, PartialEq, Clone)]
pub struct HeroProps {
    pub typing_texts: Vec<String>,
    pub tagline: AttrValue,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let typed = use_state(String::new);

    // Self-rescheduling timeout: each step picks its own delay, exactly
    // like a chained setTimeout. The closure cell keeps the callback
    // alive across ticks; cleanup cancels whichever timer is pending.
    {
        let typed = typed.clone();
        let texts = props.typing_texts.clone();
        use_effect_with((), move |_| {
            let cycle = Rc::new(RefCell::new(TypingCycle::new(texts)));
            let timer_id = Rc::new(Cell::new(0));
            let cancelled = Rc::new(Cell::new(false));
            let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
            {
                let tick_handle = tick.clone();
                let timer_id = timer_id.clone();
                let cancelled = cancelled.clone();
                *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                    if cancelled.get() {
                        return;
                    }
                    let step = cycle.borrow_mut().step();
                    typed.set(step.text);
                    if let Some(cb) = tick_handle.borrow().as_ref() {
                        timer_id.set(set_timeout(cb, step.delay_ms as i32));
                    }
                }) as Box<dyn FnMut()>));
            }
            if let Some(cb) = tick.borrow().as_ref() {
                timer_id.set(set_timeout(cb, INITIAL_DELAY_MS));
            }
            move || {
                cancelled.set(true);
                clear_timeout(timer_id.get());
                drop(tick);
            }
        });
    }

    let cta = Callback::from(|_| scroll_to_section("projects"));

    html! {
        <section id="home" style="min-height:100vh; display:flex; flex-direction:column; align-items:center; justify-content:center; text-align:center; gap:18px; padding:0 24px;">
            <h1 class="typing-text" style="font-size:clamp(28px, 5vw, 52px); color:#fff; margin:0; min-height:1.2em;">
                { (*typed).clone() }
                <span style="border-right:3px solid #9b5cff; margin-left:2px;"></span>
            </h1>
            <p style="font-size:18px; color:#b9b6c9; max-width:560px; margin:0;">{ props.tagline.clone() }</p>
            <button class="cta-button" onclick={cta}
                style="margin-top:12px; padding:12px 28px; font-size:16px; background:#9b5cff; color:#fff; border:none; border-radius:24px; cursor:pointer;">
                {"View My Work"}
            </button>
        </section>
    }
}
