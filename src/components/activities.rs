use web_sys::MouseEvent;
use yew::prelude::*;

use super::reveal::Reveal;
use crate::model::Activity;

#[derive(Properties, PartialEq, Clone)]
pub struct ActivitiesProps {
    pub activities: Vec<Activity>,
    /// Clicking a card opens its full image set in the gallery.
    pub on_open_gallery: Callback<(Vec<String>, String)>,
}

#[function_component(Activities)]
pub fn activities(props: &ActivitiesProps) -> Html {
    html! {
        <section id="activities" style="padding:80px 24px; max-width:1100px; margin:0 auto;">
            <h2 style="color:#fff; text-align:center; margin-bottom:32px;">{"Activities"}</h2>
            <div style="display:grid; grid-template-columns:repeat(auto-fit, minmax(280px, 1fr)); gap:24px;">
                { for props.activities.iter().map(|activity| {
                    let open = {
                        let images = activity.images.clone();
                        let title = activity.title.clone();
                        let on_open = props.on_open_gallery.clone();
                        Callback::from(move |_: MouseEvent| {
                            on_open.emit((images.clone(), title.clone()));
                        })
                    };
                    html! {
                        <Reveal key={activity.title.clone()}>
                            <div class="activity-card" onclick={open}
                                style="background:#161b22; border:1px solid #30363d; border-radius:12px; overflow:hidden; cursor:pointer;">
                                if let Some(cover) = activity.images.first() {
                                    <img src={cover.clone()} alt={activity.title.clone()} class="activity-image"
                                        style="width:100%; height:160px; object-fit:cover;" />
                                }
                                <div style="padding:16px 18px;">
                                    <h3 style="margin:0 0 8px 0; color:#fff; font-size:16px;">{ &activity.title }</h3>
                                    <p style="margin:0; color:#b9b6c9; font-size:14px; line-height:1.5;">{ &activity.description }</p>
                                    if activity.images.len() > 1 {
                                        <span style="display:inline-block; margin-top:10px; color:#9b5cff; font-size:12px;">
                                            { format!("{} photos", activity.images.len()) }
                                        </span>
                                    }
                                </div>
                            </div>
                        </Reveal>
                    }
                }) }
            </div>
        </section>
    }
}
