use web_sys::MouseEvent;
use yew::prelude::*;

use super::reveal::Reveal;
use crate::model::Project;

#[derive(Properties, PartialEq, Clone)]
pub struct ProjectsProps {
    pub projects: Vec<Project>,
    /// A project with one screenshot opens the single-image viewer;
    /// one with several opens the gallery.
    pub on_open_image: Callback<String>,
    pub on_open_gallery: Callback<(Vec<String>, String)>,
}

#[function_component(Projects)]
pub fn projects(props: &ProjectsProps) -> Html {
    html! {
        <section id="projects" style="padding:80px 24px; max-width:1100px; margin:0 auto;">
            <h2 style="color:#fff; text-align:center; margin-bottom:32px;">{"Projects"}</h2>
            <div style="display:grid; grid-template-columns:repeat(auto-fit, minmax(300px, 1fr)); gap:24px;">
                { for props.projects.iter().map(|project| {
                    let open = {
                        let project = project.clone();
                        let on_open_image = props.on_open_image.clone();
                        let on_open_gallery = props.on_open_gallery.clone();
                        Callback::from(move |_: MouseEvent| {
                            match project.images.as_slice() {
                                [] => {}
                                [only] => on_open_image.emit(only.clone()),
                                _ => on_open_gallery
                                    .emit((project.images.clone(), project.title.clone())),
                            }
                        })
                    };
                    html! {
                        <Reveal key={project.title.clone()}>
                            <div class="project-card" style="background:#161b22; border:1px solid #30363d; border-radius:12px; overflow:hidden;">
                                if let Some(cover) = project.images.first() {
                                    <img src={cover.clone()} alt={project.title.clone()} class="project-img" onclick={open}
                                        style="width:100%; height:180px; object-fit:cover; cursor:zoom-in;" />
                                }
                                <div style="padding:16px 18px;">
                                    <h3 style="margin:0 0 8px 0; color:#fff; font-size:17px;">{ &project.title }</h3>
                                    <p style="margin:0 0 12px 0; color:#b9b6c9; font-size:14px; line-height:1.5;">{ &project.description }</p>
                                    <div style="display:flex; gap:6px; flex-wrap:wrap;">
                                        { for project.tags.iter().map(|tag| html! {
                                            <span key={tag.clone()} style="background:#0f0e13; color:#9b5cff; border-radius:10px; padding:2px 10px; font-size:12px;">{ tag }</span>
                                        }) }
                                    </div>
                                </div>
                            </div>
                        </Reveal>
                    }
                }) }
            </div>
        </section>
    }
}
