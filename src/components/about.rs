use web_sys::MouseEvent;
use yew::prelude::*;

use super::reveal::Reveal;

#[derive(Properties, PartialEq, Clone)]
pub struct AboutProps {
    pub name: AttrValue,
    pub portrait: AttrValue,
    /// Clicking the portrait opens it in the single-image viewer.
    pub on_open_image: Callback<String>,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let open_portrait = {
        let portrait = props.portrait.to_string();
        let on_open = props.on_open_image.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(portrait.clone()))
    };

    html! {
        <section id="about" style="padding:80px 24px; max-width:960px; margin:0 auto;">
            <Reveal>
                <h2 style="color:#fff; text-align:center; margin-bottom:32px;">{"About Me"}</h2>
                <div style="display:flex; gap:32px; align-items:center; flex-wrap:wrap; justify-content:center;">
                    <div class="about-image">
                        <img src={props.portrait.clone()} alt={props.name.clone()} onclick={open_portrait}
                            style="width:220px; height:220px; object-fit:cover; border-radius:16px; cursor:zoom-in;" />
                    </div>
                    <p style="color:#b9b6c9; max-width:480px; line-height:1.6;">
                        { format!(
                            "Hi, I'm {}. I work at the intersection of data analysis and interface design: \
                             exploring datasets, building dashboards, and shaping the screens people use to read them.",
                            props.name,
                        ) }
                    </p>
                </div>
            </Reveal>
        </section>
    }
}
