// Skills section: progress bars animate to their level the first time
// the section scrolls into view.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use super::reveal::element_in_view;
use crate::model::SkillCategory;

#[derive(Properties, PartialEq, Clone)]
pub struct SkillsProps {
    pub categories: Vec<SkillCategory>,
}

#[function_component(Skills)]
pub fn skills(props: &SkillsProps) -> Html {
    let section_ref = use_node_ref();
    let animated = use_state_eq(|| false);

    {
        let section_ref = section_ref.clone();
        let animated = animated.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            if element_in_view(&section_ref, 100.0) {
                animated.set(true);
            }
            let scroll_cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
                if element_in_view(&section_ref, 100.0) {
                    animated.set(true);
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

    let animated_now = *animated;

    html! {
        <section id="skills" ref={section_ref} style="padding:80px 24px; max-width:960px; margin:0 auto;">
            <h2 style="color:#fff; text-align:center; margin-bottom:32px;">{"Skills"}</h2>
            <div style="display:grid; grid-template-columns:repeat(auto-fit, minmax(260px, 1fr)); gap:24px;">
                { for props.categories.iter().map(|category| html! {
                    <div key={category.name.clone()} class="skill-category" style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:18px 20px;">
                        <h3 style="margin:0 0 14px 0; color:#9b5cff; font-size:17px;">{ &category.name }</h3>
                        { for category.skills.iter().map(|skill| {
                            let width = if animated_now { skill.level } else { 0 };
                            html! {
                                <div key={skill.name.clone()} style="margin-bottom:12px;">
                                    <div style="display:flex; justify-content:space-between; font-size:13px; color:#b9b6c9; margin-bottom:4px;">
                                        <span>{ &skill.name }</span>
                                        <span>{ format!("{}%", skill.level) }</span>
                                    </div>
                                    <div style="height:6px; background:#0f0e13; border-radius:3px; overflow:hidden;">
                                        <div class="progress-bar" data-progress={skill.level.to_string()}
                                            style={format!("height:100%; background:linear-gradient(90deg, #9b5cff, #ff4fd8); border-radius:3px; width:{width}%; transition:width 1s ease;")}>
                                        </div>
                                    </div>
                                </div>
                            }
                        }) }
                    </div>
                }) }
            </div>
        </section>
    }
}
